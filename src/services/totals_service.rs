use serenity::prelude::Context;

use crate::db;
use crate::models::{Period, TotalsResult};
use crate::utils::{format, timezone};

pub async fn get_totals(ctx: &Context, chat_id: i64, period: Period) -> Result<TotalsResult, String> {
    let pool = super::get_pool(ctx).await?;

    let since = period
        .start_date(timezone::today())
        .map(timezone::iso_date);

    let (usd_total, riel_total) = db::payment::get_totals(&pool, chat_id, since.as_deref())
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(TotalsResult {
        period,
        usd_total,
        riel_total,
    })
}

pub fn create_totals_embed(result: &TotalsResult) -> serenity::builder::CreateEmbed {
    serenity::builder::CreateEmbed::default()
        .title(format!("📊 {} Payment Totals", result.period.label()))
        .field("💵 USD", format::usd(result.usd_total), true)
        .field("🏛️ KHR", format::riel(result.riel_total), true)
        .footer(serenity::builder::CreateEmbedFooter::new(
            "Use !summary for today's breakdown",
        ))
        .color(0x00b0f4)
}
