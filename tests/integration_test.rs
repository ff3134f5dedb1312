use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;

fn cmd() -> Command {
    Command::cargo_bin("timesheet-mcp").unwrap()
}

fn cmd_with_env(base_url: &str) -> Command {
    let mut cmd = cmd();
    cmd.env("INSIDER_AUTH_TOKEN", "test-token")
        .env("INSIDER_USER_ID", "186")
        .env("INSIDER_EMP_CODE", "test.user")
        .env("INSIDER_BASE_URL", base_url);
    cmd
}

#[test]
fn projects_lists_remote_projects() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/project/get-basic/user/186")
            .header("authorization", "Bearer test-token");
        then.status(200).json_body(json!([
            { "id": 10522, "name": "Fusang SSO PoC" },
            { "id": 10523, "name": "AxiaGram" }
        ]));
    });

    cmd_with_env(&server.base_url())
        .arg("projects")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Available Projects"))
        .stdout(predicate::str::contains("**Fusang SSO PoC** (ID: 10522)"))
        .stdout(predicate::str::contains("**AxiaGram** (ID: 10523)"));

    mock.assert();
}

#[test]
fn check_reports_underlogged_working_day() {
    let server = MockServer::start();
    let calendar = server.mock(|when, then| {
        when.method(GET).path_contains("/timesheet/test.user/timesheetCalendar/");
        then.status(200).json_body(json!([
            {
                "logDate": "2025-09-03T00:00:00Z",
                "isNormalWorkingDay": true,
                "isPublicHoliday": false,
                "logTimes": [
                    { "projectName": "AxiaGram", "hours": 6.0, "comment": "feature work" }
                ]
            },
            {
                "logDate": "2025-09-06T00:00:00Z",
                "isNormalWorkingDay": false,
                "isPublicHoliday": false,
                "logTimes": []
            }
        ]));
    });

    cmd_with_env(&server.base_url())
        .args(["check", "2025", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Invalid Days for 2025-09"))
        .stdout(predicate::str::contains("**Total Invalid Days:** 1"))
        .stdout(predicate::str::contains("## 2025-09-03"))
        .stdout(predicate::str::contains("- **Current Hours:** 6.0h"))
        .stdout(predicate::str::contains("- **Shortfall:** 2.0h"))
        .stdout(predicate::str::contains("  - AxiaGram: 6.0h (feature work)"));

    // One range fetch for entries plus one status lookup per September day.
    calendar.assert_hits(31);
}

#[test]
fn check_reports_no_invalid_days_for_compliant_month() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path_contains("/timesheet/test.user/timesheetCalendar/");
        then.status(200).json_body(json!([
            {
                "logDate": "2025-09-03T00:00:00Z",
                "isNormalWorkingDay": true,
                "isPublicHoliday": false,
                "logTimes": [
                    { "projectName": "AxiaGram", "hours": 8.0, "comment": "" }
                ]
            }
        ]));
    });

    cmd_with_env(&server.base_url())
        .args(["check", "2025", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Total Invalid Days:** 0"))
        .stdout(predicate::str::contains("No invalid days found"));
}

#[test]
fn check_propagates_source_failures() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path_contains("/timesheetCalendar/");
        then.status(401).json_body(json!({ "message": "token expired" }));
    });

    cmd_with_env(&server.base_url())
        .args(["check", "2025", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("calendar source"))
        .stderr(predicate::str::contains("token expired"));
}

#[test]
fn check_rejects_bad_month_before_any_request() {
    // No credentials and no server: validation must fail first.
    cmd()
        .args(["check", "2025", "13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("month must be between 1 and 12"));

    cmd()
        .args(["check", "2025", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("month must be between 1 and 12"));
}

#[test]
fn check_rejects_out_of_range_year() {
    use chrono::Datelike;
    let too_far = (chrono::Utc::now().year() + 2).to_string();

    cmd()
        .args(["check", &too_far, "6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("year must be between 2020"));

    cmd()
        .args(["check", "2019", "6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("year must be between 2020"));
}

#[test]
fn log_submits_one_entry_per_date() {
    let server = MockServer::start();
    let add = server.mock(|when, then| {
        when.method(POST)
            .path("/timesheet/add")
            .header("authorization", "Bearer test-token");
        then.status(200)
            .json_body(json!({ "id": 12345, "status": "success" }));
    });

    cmd_with_env(&server.base_url())
        .args([
            "log",
            "10522",
            "8",
            "2025-09-03",
            "2025-09-04",
            "--comment",
            "sprint work",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Logged 8.0h to project #10522 on 2025-09-03",
        ))
        .stdout(predicate::str::contains("2 date(s) logged successfully"));

    add.assert_hits(2);
}

#[test]
fn log_validation_fails_without_touching_the_network() {
    cmd()
        .args(["log", "10522", "9", "2025-09-03"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hours"));

    cmd()
        .args(["log", "10522", "8", "2025-09-03", "--rate", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hourRate"));

    cmd()
        .args(["log", "10522", "8", "not-a-date"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn missing_credentials_are_reported_by_name() {
    cmd()
        .env_remove("INSIDER_AUTH_TOKEN")
        .env_remove("INSIDER_USER_ID")
        .env_remove("INSIDER_EMP_CODE")
        .env_remove("INSIDER_BASE_URL")
        .arg("projects")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing environment variable: INSIDER_AUTH_TOKEN",
        ));
}
