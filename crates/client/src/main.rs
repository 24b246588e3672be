//! `shiftplan-demo` -- seed a schedule and render it as a text calendar.
//!
//! Connects to a running shiftplan API server, provisions the default
//! user if the server is empty, blocks the Wednesday of the current week,
//! fills the remaining weekdays with 09:00-17:00 shifts, then prints the
//! month grid. Safe to re-run: an already-blocked day is tolerated and
//! week seeding is skipped once the user has shifts.
//!
//! # Environment variables
//!
//! | Variable      | Required | Default                 | Description                          |
//! |---------------|----------|-------------------------|--------------------------------------|
//! | `BACKEND_URL` | no       | `http://127.0.0.1:3000` | Base URL of the API server           |
//! | `API_TOKEN`   | no       | `mytoken`               | Bearer token; must match the server  |

use std::fmt::Write as _;

use chrono::{Datelike, Duration, NaiveTime, Utc, Weekday};

use shiftplan_client::{CalendarView, ClientError, RestApi, ScheduleClient};
use shiftplan_store::models::CreateBlockedTime;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:3000";
const DEFAULT_API_TOKEN: &str = "mytoken";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shiftplan_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let backend_url =
        std::env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.into());
    let api_token = std::env::var("API_TOKEN").unwrap_or_else(|_| DEFAULT_API_TOKEN.into());

    tracing::info!(backend_url = %backend_url, "Starting shiftplan-demo");

    let api = RestApi::new(&backend_url, &api_token).unwrap_or_else(|err| {
        tracing::error!(%err, "API_TOKEN is not a valid header value");
        std::process::exit(1);
    });
    let client = ScheduleClient::new(api);

    let user = client.ensure_default_user().await.unwrap_or_else(|err| fail(err));
    tracing::info!(user_id = %user.id, name = %user.name, "Using user");

    let today = Utc::now();
    let monday = today.date_naive().week(Weekday::Mon).first_day();
    let wednesday = (monday + Duration::days(2)).and_time(NaiveTime::MIN).and_utc();

    match client
        .create_blocked_time(&CreateBlockedTime {
            user_id: user.id,
            date: wednesday,
            reason: Some("midweek off".to_string()),
        })
        .await
    {
        Ok(entry) => {
            tracing::info!(date = %entry.date.date_naive(), "Blocked the midweek day");
        }
        Err(err) if err.is_code("ALREADY_BLOCKED") => {
            tracing::info!("Midweek day was already blocked by an earlier run");
        }
        Err(err) => fail(err),
    }

    let shifts = client.shifts(user.id, false).await.unwrap_or_else(|err| fail(err));
    if shifts.is_empty() {
        let plan = client
            .create_shifts_for_week(user.id, today, "09:00", "17:00")
            .await
            .unwrap_or_else(|err| fail(err));
        tracing::info!(
            created = plan.created.len(),
            skipped = plan.skipped.len(),
            "Seeded the current week"
        );
    } else {
        tracing::info!(count = shifts.len(), "User already has shifts; skipping seeding");
    }

    let snapshot = client.calendar(user.id, false).await.unwrap_or_else(|err| fail(err));

    let mut view = CalendarView::new(today.date_naive());
    view.set_data(snapshot.shifts, snapshot.blocked_times);

    println!("{}", render_month(&view));
}

fn fail(err: ClientError) -> ! {
    tracing::error!(%err, "Demo failed");
    std::process::exit(1);
}

/// Plain-text month grid: one line per week, today bracketed, shifts and
/// blocked days marked. Days outside the displayed month show as dots.
fn render_month(view: &CalendarView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:^28}", view.displayed_month().format("%B %Y"));
    let _ = writeln!(out, " Su  Mo  Tu  We  Th  Fr  Sa");

    for week in view.grid().chunks(7) {
        for cell in week {
            if !cell.is_current_month {
                out.push_str("  . ");
            } else if cell.is_today {
                let _ = write!(out, "[{:>2}]", cell.date.day());
            } else {
                let marker = if cell.is_blocked {
                    '#'
                } else if !cell.shifts.is_empty() {
                    '*'
                } else {
                    ' '
                };
                let _ = write!(out, "{:>3}{marker}", cell.date.day());
            }
        }
        out.push('\n');
    }

    out.push_str("\n  * shift   # blocked   [n] today\n");
    out
}
