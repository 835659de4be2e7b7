//! Domain models for the clinic dashboards.

mod account;
mod doctor;
mod feedback;
mod id;
mod lab;
mod patient;
mod payment;
mod row;
mod schedule;
mod trend;

pub use account::*;
pub use doctor::*;
pub use feedback::*;
pub use id::*;
pub use lab::*;
pub use patient::*;
pub use payment::*;
pub use row::*;
pub use schedule::*;
pub use trend::*;
