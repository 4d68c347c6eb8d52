//! Data models for payment tracking commands and services
//!
//! Result and data transfer structs passed between commands, services and
//! the database layer, plus the reporting `Period` enum.

pub mod export;
pub mod payment;
pub mod period;

// Re-export commonly used types for convenience
pub use export::ExportRow;
pub use payment::{DailySummary, RecordedPayment, SummaryEntry, TotalsResult};
pub use period::Period;
