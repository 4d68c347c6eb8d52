//! Payment models

use crate::models::Period;

/// A payment that was just written to the ledger.
#[derive(Debug)]
pub struct RecordedPayment {
    pub payment_id: i32,
    pub usd: f64,
    pub riel: f64,
}

/// Period totals for one chat.
#[derive(Debug)]
pub struct TotalsResult {
    pub period: Period,
    pub usd_total: f64,
    pub riel_total: f64,
}

/// One line of the daily summary listing.
#[derive(Debug, Clone)]
pub struct SummaryEntry {
    pub time: String,
    pub username: String,
    pub usd: f64,
    pub riel: f64,
}

/// Detailed breakdown of one day's payments in a chat.
#[derive(Debug)]
pub struct DailySummary {
    pub date: String,
    pub payment_count: i64,
    pub usd_total: f64,
    pub riel_total: f64,
    pub recent: Vec<SummaryEntry>,
}
