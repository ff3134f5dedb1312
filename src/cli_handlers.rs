use crate::api::InsiderClient;
use crate::compliance::{self, ComplianceChecker, ExcessPolicy};
use crate::config::Config;
use crate::error::Result;
use crate::report;
use crate::sources::submit_all;
use crate::validate::validate_log_request;

fn client() -> Result<InsiderClient> {
    InsiderClient::new(Config::from_env()?)
}

/// Handle the projects command
pub async fn handle_projects() -> Result<()> {
    let client = client()?;
    let projects = client.list_projects().await?;
    print!("{}", report::render_projects(&projects));
    Ok(())
}

/// Handle the check command
pub async fn handle_check(year: i32, month: u32, ignore_excess: bool) -> Result<()> {
    // Bad input fails before credentials are loaded or anything is fetched.
    compliance::validate_month_input(year, month)?;

    let client = client()?;
    let policy = if ignore_excess {
        ExcessPolicy::Ignore
    } else {
        ExcessPolicy::Flag
    };
    let checker = ComplianceChecker::new(&client, &client).with_excess_policy(policy);
    let result = checker.check_month(year, month).await?;

    print!("{}", report::render_month_report(&result));
    Ok(())
}

/// Handle the log command
pub async fn handle_log(
    project_id: i64,
    hours: f64,
    dates: &[String],
    rate: u8,
    activity: u8,
    comment: Option<&str>,
) -> Result<()> {
    let request = validate_log_request(project_id, hours, dates, rate, activity, comment)?;

    let client = client()?;
    let outcomes = submit_all(&client, &request).await?;

    for outcome in &outcomes {
        println!(
            "Logged {}h to project #{} on {}",
            request.hours, outcome.project_id, outcome.date
        );
    }
    println!("{} date(s) logged successfully", outcomes.len());
    Ok(())
}
