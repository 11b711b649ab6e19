pub mod error;
pub mod html;
pub mod mail;

pub use error::ReportError;
pub use html::render_report;
pub use mail::{build_message, report_subject, send_message};
