use chrono::NaiveDate;

/// Runtime configuration for a report run, loaded from environment variables.
///
/// Everything operational — recipients, index, endpoints, timeouts — is
/// externalized here so the same binary covers every scheduled variant.
#[derive(Clone)]
pub struct AppConfig {
    /// SMTP account used both for authentication and as the From address.
    pub mail_user: String,
    pub mail_pass: String,
    /// Primary recipient of the daily report.
    pub mail_to: String,
    /// Optional carbon-copy recipients.
    pub mail_cc: Vec<String>,
    pub smtp_host: String,
    pub smtp_port: u16,

    /// Base URL of the disclosure platform (overridable for tests).
    pub kap_base_url: String,
    /// URL of the interactive disclosure-query page used by the browser path.
    pub query_page_url: String,
    /// Platform OID of the index being reported on.
    pub index_oid: String,
    /// Human-readable index name used in the report heading and subject.
    pub index_name: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,

    /// WebDriver endpoint for the browser-automation path.
    pub webdriver_url: String,

    /// Market holidays beyond weekends, used by the business-day calendar.
    pub holidays: Vec<NaiveDate>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("mail_user", &self.mail_user)
            .field("mail_pass", &"[redacted]")
            .field("mail_to", &self.mail_to)
            .field("mail_cc", &self.mail_cc)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("kap_base_url", &self.kap_base_url)
            .field("query_page_url", &self.query_page_url)
            .field("index_oid", &self.index_oid)
            .field("index_name", &self.index_name)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("webdriver_url", &self.webdriver_url)
            .field("holidays", &self.holidays)
            .finish()
    }
}
