use serenity::prelude::Context;

use crate::db;
use crate::models::{DailySummary, SummaryEntry};
use crate::utils::{format, timezone};

const RECENT_LIMIT: i64 = 5;

pub async fn get_daily_summary(ctx: &Context, chat_id: i64) -> Result<DailySummary, String> {
    let pool = super::get_pool(ctx).await?;
    let date = timezone::iso_date(timezone::today());

    let (payment_count, usd_total, riel_total) =
        db::payment::get_daily_totals(&pool, chat_id, &date)
            .await
            .map_err(|e| format!("Database error: {}", e))?;

    let recent = db::payment::get_recent_payments(&pool, chat_id, &date, RECENT_LIMIT)
        .await
        .map_err(|e| format!("Database error: {}", e))?
        .into_iter()
        .map(|(time, username, usd, riel)| SummaryEntry {
            time,
            username,
            usd,
            riel,
        })
        .collect();

    Ok(DailySummary {
        date,
        payment_count,
        usd_total,
        riel_total,
        recent,
    })
}

pub fn create_summary_embed(summary: &DailySummary) -> serenity::builder::CreateEmbed {
    let mut description = format!(
        "**Totals:**\n💵 USD: {}\n🏛️ KHR: {}\n\n**Payments:** {} transactions",
        format::usd(summary.usd_total),
        format::riel(summary.riel_total),
        summary.payment_count
    );

    if !summary.recent.is_empty() {
        description.push_str("\n\n**Recent Payments:**\n");
        for entry in &summary.recent {
            if entry.usd > 0.0 {
                description.push_str(&format!(
                    "• {} - {}: {}\n",
                    entry.time,
                    entry.username,
                    format::usd(entry.usd)
                ));
            }
            if entry.riel > 0.0 {
                description.push_str(&format!(
                    "• {} - {}: {}\n",
                    entry.time,
                    entry.username,
                    format::riel(entry.riel)
                ));
            }
        }
    }

    serenity::builder::CreateEmbed::default()
        .title(format!("📋 Daily Summary - {}", summary.date))
        .description(description)
        .color(0x00b0f4)
}
