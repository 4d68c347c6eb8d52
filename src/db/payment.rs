use sqlx::postgres::PgPool;

/// Insert a payment row. Dates travel as `YYYY-MM-DD` strings and are cast
/// server-side, so the pool needs no chrono integration.
pub async fn add_payment(
    pool: &PgPool,
    user_id: i64,
    username: &str,
    chat_id: i64,
    chat_title: &str,
    message_text: &str,
    usd_amount: f64,
    riel_amount: f64,
    payment_date: &str,
) -> Result<i32, sqlx::Error> {
    let row: (i32,) = sqlx::query_as(
        "INSERT INTO payments \
         (user_id, username, chat_id, chat_title, message_text, usd_amount, riel_amount, payment_date) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8::DATE) \
         RETURNING id",
    )
    .bind(user_id)
    .bind(username)
    .bind(chat_id)
    .bind(chat_title)
    .bind(message_text)
    .bind(usd_amount)
    .bind(riel_amount)
    .bind(payment_date)
    .fetch_one(pool)
    .await?;

    Ok(row.0)
}

/// Summed totals for a chat - returns (usd_total, riel_total).
/// `since` is an inclusive `YYYY-MM-DD` lower bound; `None` means all time.
pub async fn get_totals(
    pool: &PgPool,
    chat_id: i64,
    since: Option<&str>,
) -> Result<(f64, f64), sqlx::Error> {
    let row: (f64, f64) = match since {
        Some(start) => {
            sqlx::query_as(
                "SELECT COALESCE(SUM(usd_amount), 0)::FLOAT8, \
                        COALESCE(SUM(riel_amount), 0)::FLOAT8 \
                 FROM payments \
                 WHERE chat_id = $1 AND payment_date >= $2::DATE",
            )
            .bind(chat_id)
            .bind(start)
            .fetch_one(pool)
            .await?
        }
        None => {
            sqlx::query_as(
                "SELECT COALESCE(SUM(usd_amount), 0)::FLOAT8, \
                        COALESCE(SUM(riel_amount), 0)::FLOAT8 \
                 FROM payments \
                 WHERE chat_id = $1",
            )
            .bind(chat_id)
            .fetch_one(pool)
            .await?
        }
    };

    Ok(row)
}

/// Rows for export, newest first - returns
/// (payment_date, created_at, username, usd, riel, message_text).
/// Timestamps are rendered in the reporting timezone server-side.
pub async fn get_payments_since(
    pool: &PgPool,
    chat_id: i64,
    since: Option<&str>,
) -> Result<Vec<(String, String, String, f64, f64, String)>, sqlx::Error> {
    let select = "SELECT to_char(payment_date, 'YYYY-MM-DD'), \
                         to_char(created_at AT TIME ZONE 'Asia/Phnom_Penh', 'YYYY-MM-DD HH24:MI:SS'), \
                         COALESCE(username, 'Unknown'), \
                         usd_amount::FLOAT8, \
                         riel_amount::FLOAT8, \
                         message_text \
                  FROM payments";

    match since {
        Some(start) => {
            sqlx::query_as(&format!(
                "{} WHERE chat_id = $1 AND payment_date >= $2::DATE \
                 ORDER BY payment_date DESC, created_at DESC",
                select
            ))
            .bind(chat_id)
            .bind(start)
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as(&format!(
                "{} WHERE chat_id = $1 ORDER BY payment_date DESC, created_at DESC",
                select
            ))
            .bind(chat_id)
            .fetch_all(pool)
            .await
        }
    }
}

/// Count and totals for one date - returns (payment_count, usd_total, riel_total).
pub async fn get_daily_totals(
    pool: &PgPool,
    chat_id: i64,
    date: &str,
) -> Result<(i64, f64, f64), sqlx::Error> {
    sqlx::query_as(
        "SELECT COUNT(*), \
                COALESCE(SUM(usd_amount), 0)::FLOAT8, \
                COALESCE(SUM(riel_amount), 0)::FLOAT8 \
         FROM payments \
         WHERE chat_id = $1 AND payment_date = $2::DATE",
    )
    .bind(chat_id)
    .bind(date)
    .fetch_one(pool)
    .await
}

/// Most recent payments for one date - returns (time, username, usd, riel).
pub async fn get_recent_payments(
    pool: &PgPool,
    chat_id: i64,
    date: &str,
    limit: i64,
) -> Result<Vec<(String, String, f64, f64)>, sqlx::Error> {
    sqlx::query_as(
        "SELECT to_char(created_at AT TIME ZONE 'Asia/Phnom_Penh', 'HH24:MI'), \
                COALESCE(username, 'Unknown'), \
                usd_amount::FLOAT8, \
                riel_amount::FLOAT8 \
         FROM payments \
         WHERE chat_id = $1 AND payment_date = $2::DATE \
         ORDER BY created_at DESC \
         LIMIT $3",
    )
    .bind(chat_id)
    .bind(date)
    .bind(limit)
    .fetch_all(pool)
    .await
}
