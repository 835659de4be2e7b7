//! Command-line access to the clinic dashboards.
//!
//! Every data command prints JSON to stdout. `login` persists the bearer token
//! so later commands run authenticated.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clinic_dash_client::api::{ApiClient, ScheduleQuery};
use clinic_dash_client::config::load_config;
use clinic_dash_client::session::Session;
use clinic_dash_client::store::SqliteTokenStore;
use clinic_dash_client::views::{
    load_appointment_statistics, load_dashboard, load_feedback_summary, load_schedule_page,
    ScheduleRequest,
};
use clinic_dash_core::filter::{DateMode, ScheduleView, SortOrder, StatusFilter};
use clinic_dash_core::models::{Period, RecordId, Role};
use clinic_dash_core::stats::{DateRange, FeedbackFilter, PeriodSelection};
use clinic_dash_core::RowFilter;

/// Log directives used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "clinic_dash=info,clinic_dash_client=info";

#[derive(Parser, Debug)]
#[command(name = "clinic-dash")]
#[command(about = "Clinic dashboard data from the command line")]
struct Args {
    /// Config file (TOML/YAML/JSON); environment variables override it
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session token
    Logout,
    /// One page of a schedule table
    Schedules {
        #[arg(long, value_enum, default_value = "all")]
        view: ViewArg,
        /// ALL or a schedule status
        #[arg(long, default_value = "ALL", value_parser = StatusFilter::parse)]
        status: StatusFilter,
        /// Search over patient name and code
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        role: Option<Role>,
        #[arg(long)]
        doctor_id: Option<String>,
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Reference date for past/upcoming; defaults to the local date
        #[arg(long)]
        today: Option<NaiveDate>,
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long)]
        page_size: Option<usize>,
        /// Join doctor names
        #[arg(long)]
        doctors: bool,
        /// Look up payment status for each row on the page
        #[arg(long)]
        payments: bool,
    },
    /// Rating distribution and average
    FeedbackStats {
        #[arg(long)]
        rating: Option<i32>,
        #[arg(long)]
        treatment: Option<String>,
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Appointment counts and completion rate
    AppointmentStats {
        #[arg(long)]
        doctor_id: Option<String>,
    },
    /// Statistics cards plus the appointment trend for a period
    Dashboard {
        #[arg(long, default_value = "30days")]
        period: Period,
        #[arg(long, requires = "end")]
        start: Option<NaiveDate>,
        #[arg(long, requires = "start")]
        end: Option<NaiveDate>,
        #[arg(long)]
        doctor_id: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ViewArg {
    History,
    Upcoming,
    All,
}

fn doctor_query(doctor_id: Option<String>) -> ScheduleQuery {
    match doctor_id {
        Some(id) => ScheduleQuery::for_doctor(RecordId::from(id)),
        None => ScheduleQuery::default(),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref()).context("loading configuration")?;

    let store = SqliteTokenStore::open(&config.token_store_path).with_context(|| {
        format!("opening token store {}", config.token_store_path.display())
    })?;
    let session = Session::new(Arc::new(store));
    session.restore().await?;

    let client = ApiClient::new(&config, session)?;

    match args.command {
        Command::Login { email, password } => {
            let user = client.login(&email, &password).await?;
            print_json(&user)?;
        }
        Command::Logout => {
            client.logout().await?;
            tracing::info!("Logged out");
        }
        Command::Schedules {
            view,
            status,
            name,
            role,
            doctor_id,
            date,
            today,
            page,
            page_size,
            doctors,
            payments,
        } => {
            let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
            let page_size = page_size.unwrap_or(config.default_page_size);
            let mut request = match view {
                ViewArg::History => ScheduleRequest::for_view(ScheduleView::History, today, page_size),
                ViewArg::Upcoming => ScheduleRequest::for_view(ScheduleView::Upcoming, today, page_size),
                ViewArg::All => ScheduleRequest {
                    filter: RowFilter {
                        date_mode: DateMode::All,
                        ..Default::default()
                    },
                    sort: SortOrder::Descending,
                    ..ScheduleRequest::for_view(ScheduleView::History, today, page_size)
                },
            };
            let scope = doctor_query(doctor_id);
            request.query = ScheduleQuery {
                role: role.or(scope.role),
                date,
                ..scope
            };
            request.filter.name_query = name;
            request.filter.status = status;
            request.page = page;
            request.include_doctors = doctors;
            request.include_payments = payments;

            print_json(&load_schedule_page(&client, &request).await?)?;
        }
        Command::FeedbackStats {
            rating,
            treatment,
            from,
            to,
        } => {
            let filter = FeedbackFilter {
                rating,
                treatment_type: treatment,
                from,
                to,
            };
            print_json(&load_feedback_summary(&client, &filter).await?.statistics)?;
        }
        Command::AppointmentStats { doctor_id } => {
            let query = doctor_query(doctor_id);
            print_json(&load_appointment_statistics(&client, &query).await?)?;
        }
        Command::Dashboard {
            period,
            start,
            end,
            doctor_id,
        } => {
            let selection = match (start, end) {
                (Some(start), Some(end)) => PeriodSelection::custom(DateRange::new(start, end)?),
                _ => PeriodSelection::preset(period),
            };
            let query = doctor_query(doctor_id);
            print_json(&load_dashboard(&client, &query, &selection).await?)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_covers_binary_events() {
        let own = format!("{}=info", env!("CARGO_CRATE_NAME"));
        assert!(DEFAULT_LOG_FILTER.split(',').any(|d| d == own));
        assert!(DEFAULT_LOG_FILTER
            .parse::<tracing_subscriber::EnvFilter>()
            .is_ok());
    }
}
