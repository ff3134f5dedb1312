use crate::error::{Result, TimesheetError};
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://insiderapi.saigontechnology.vn/api";

pub const AUTH_TOKEN_ENV: &str = "INSIDER_AUTH_TOKEN";
pub const USER_ID_ENV: &str = "INSIDER_USER_ID";
pub const EMP_CODE_ENV: &str = "INSIDER_EMP_CODE";
pub const BASE_URL_ENV: &str = "INSIDER_BASE_URL";

/// Immutable credentials and endpoint for the remote timesheet API.
///
/// Built once at startup and passed explicitly into the API client;
/// nothing below this layer reads the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub auth_token: String,
    pub user_id: i64,
    pub emp_code: String,
    pub base_url: String,
}

impl Config {
    /// Load configuration from the environment (and a `.env` file if present).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let auth_token = require(AUTH_TOKEN_ENV)?;
        let user_id = require(USER_ID_ENV)?
            .parse::<i64>()
            .map_err(|_| TimesheetError::MalformedUserId(USER_ID_ENV))?;
        let emp_code = require(EMP_CODE_ENV)?;
        let base_url = env::var(BASE_URL_ENV)
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Config {
            auth_token,
            user_id,
            emp_code,
            base_url,
        })
    }
}

fn require(name: &'static str) -> Result<String> {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(TimesheetError::MissingCredential(name))
}
