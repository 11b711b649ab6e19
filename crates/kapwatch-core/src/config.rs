use chrono::NaiveDate;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Default OID of the XK100 index on the disclosure platform.
const DEFAULT_INDEX_OID: &str = "4028328c7bf4b5e4017d149764890f47";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u16 = |var: &str, default: &str| -> Result<u16, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u16>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    // Credentials and the primary recipient are the only hard requirements;
    // a run with no way to authenticate or deliver must fail before any
    // network activity.
    let mail_user = require("MAIL_USER")?;
    let mail_pass = require("MAIL_PASS")?;
    let mail_to = require("MAIL_TO")?;

    let mail_cc = split_list(&or_default("MAIL_CC", ""));
    let smtp_host = or_default("KAPWATCH_SMTP_HOST", "smtp.gmail.com");
    let smtp_port = parse_u16("KAPWATCH_SMTP_PORT", "465")?;

    let kap_base_url = or_default("KAPWATCH_KAP_BASE_URL", "https://www.kap.org.tr");
    let query_page_url = or_default(
        "KAPWATCH_QUERY_PAGE_URL",
        "https://www.kap.org.tr/tr/bildirim-sorgu",
    );
    let index_oid = or_default("KAPWATCH_INDEX_OID", DEFAULT_INDEX_OID);
    let index_name = or_default("KAPWATCH_INDEX_NAME", "XK100");
    let request_timeout_secs = parse_u64("KAPWATCH_REQUEST_TIMEOUT_SECS", "60")?;
    let user_agent = or_default(
        "KAPWATCH_USER_AGENT",
        "kapwatch/0.1 (disclosure-reporting)",
    );
    let webdriver_url = or_default("KAPWATCH_WEBDRIVER_URL", "http://localhost:9515");

    let holidays = parse_dates("KAPWATCH_HOLIDAYS", &or_default("KAPWATCH_HOLIDAYS", ""))?;

    Ok(AppConfig {
        mail_user,
        mail_pass,
        mail_to,
        mail_cc,
        smtp_host,
        smtp_port,
        kap_base_url,
        query_page_url,
        index_oid,
        index_name,
        request_timeout_secs,
        user_agent,
        webdriver_url,
        holidays,
    })
}

/// Splits a comma-separated list, trimming entries and dropping empties.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Parses a comma-separated list of `YYYY-MM-DD` dates.
fn parse_dates(var: &str, raw: &str) -> Result<Vec<NaiveDate>, ConfigError> {
    split_list(raw)
        .iter()
        .map(|s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("'{s}': {e}"),
            })
        })
        .collect()
}
