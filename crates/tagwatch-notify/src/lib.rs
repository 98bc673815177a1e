pub mod client;
pub mod error;
pub mod report;
pub mod types;

pub use client::PostmarkClient;
pub use error::NotifyError;
pub use report::{compose_report, notify, NotifyOutcome, REPORT_SUBJECT};
pub use types::{OutboundEmail, SendReceipt};
