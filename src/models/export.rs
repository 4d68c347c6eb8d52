use serde::Serialize;

/// One row of the CSV export. Field names become the header row.
#[derive(Debug, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "User")]
    pub user: String,
    #[serde(rename = "USD Amount")]
    pub usd_amount: String,
    #[serde(rename = "KHR Amount")]
    pub khr_amount: String,
    #[serde(rename = "Message")]
    pub message: String,
}
