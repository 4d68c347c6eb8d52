use sqlx::postgres::PgPool;
use thiserror::Error;
use tracing::info;

use crate::db;
use crate::models::{ExportRow, Period};
use crate::utils::{format, timezone};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No payment data found for the specified period")]
    NoData,
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Failed to write export file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to render export rows: {0}")]
    Csv(#[from] csv::Error),
}

/// Write a chat's payments for `period` to a CSV file and return its name.
///
/// One row per payment, newest first, with a trailing TOTAL row. The caller
/// owns the file and is expected to delete it after sending.
pub async fn export_payments(
    pool: &PgPool,
    chat_id: i64,
    period: Period,
) -> Result<String, ExportError> {
    let today = timezone::today();
    let since = period.start_date(today).map(timezone::iso_date);

    let rows = db::payment::get_payments_since(pool, chat_id, since.as_deref()).await?;
    if rows.is_empty() {
        return Err(ExportError::NoData);
    }

    let filename = format!(
        "payments_{}_{}.csv",
        period.name(),
        period.file_stamp(today)
    );

    let mut writer = csv::Writer::from_path(&filename)?;
    let mut usd_total = 0.0;
    let mut riel_total = 0.0;

    for (date, time, user, usd, riel, message) in rows {
        usd_total += usd;
        riel_total += riel;
        writer.serialize(make_row(date, time, user, usd, riel, message))?;
    }

    writer.serialize(make_row(
        "TOTAL".to_string(),
        String::new(),
        String::new(),
        usd_total,
        riel_total,
        String::new(),
    ))?;
    writer.flush()?;

    info!("CSV export created: {}", filename);
    Ok(filename)
}

fn make_row(
    date: String,
    time: String,
    user: String,
    usd: f64,
    riel: f64,
    message: String,
) -> ExportRow {
    ExportRow {
        date,
        time,
        user,
        usd_amount: format::usd(usd),
        khr_amount: format::riel(riel),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_render_formatted_amounts() {
        let row = make_row(
            "2026-08-24".to_string(),
            "10:15:00".to_string(),
            "sokha".to_string(),
            272.5,
            370300.0,
            "\"$272.50\" paid by SOK CHAN".to_string(),
        );
        assert_eq!(row.usd_amount, "$272.50");
        assert_eq!(row.khr_amount, "៛370,300");
        assert_eq!(row.user, "sokha");
    }
}
