use serenity::model::channel::Message;
use serenity::prelude::Context;
use tracing::info;

use crate::db;
use crate::extractor;
use crate::models::RecordedPayment;
use crate::utils::{format, timezone};

/// Run the extractor over `text` and record a payment when it finds one.
///
/// Returns `Ok(None)` when no amounts were detected; the caller decides
/// whether that deserves a reply. Extractor output is stored verbatim.
pub async fn record_payment(
    ctx: &Context,
    msg: &Message,
    text: &str,
    manual: bool,
) -> Result<Option<RecordedPayment>, String> {
    let (usd, riel) = extractor::extract_amounts(text);
    if usd <= 0.0 && riel <= 0.0 {
        return Ok(None);
    }

    let pool = super::get_pool(ctx).await?;

    let user_id = msg.author.id.get() as i64;
    let chat_id = msg.channel_id.get() as i64;
    let chat_title = msg
        .channel_id
        .name(ctx)
        .await
        .unwrap_or_else(|_| "Direct Message".to_string());
    let message_text = if manual {
        format!("Manual entry: {}", text)
    } else {
        text.to_string()
    };
    let payment_date = timezone::iso_date(timezone::today());

    let payment_id = db::payment::add_payment(
        &pool,
        user_id,
        &msg.author.name,
        chat_id,
        &chat_title,
        &message_text,
        usd,
        riel,
        &payment_date,
    )
    .await
    .map_err(|e| format!("Database error: {}", e))?;

    info!(
        "Payment {} recorded in chat {} - USD: {}, KHR: {}",
        payment_id,
        chat_id,
        format::usd(usd),
        format::riel(riel)
    );

    Ok(Some(RecordedPayment {
        payment_id,
        usd,
        riel,
    }))
}

pub fn create_confirmation_embed(recorded: &RecordedPayment) -> serenity::builder::CreateEmbed {
    serenity::builder::CreateEmbed::default()
        .title("✅ Payment Detected & Recorded")
        .description(confirmation_description(recorded))
        .footer(serenity::builder::CreateEmbedFooter::new(format!(
            "Payment ID: {}",
            recorded.payment_id
        )))
        .color(0x00ff00)
}

fn confirmation_description(recorded: &RecordedPayment) -> String {
    let mut description = String::new();
    if recorded.usd > 0.0 {
        description.push_str(&format!("💵 USD: {}\n", format::usd(recorded.usd)));
    }
    if recorded.riel > 0.0 {
        description.push_str(&format!("🏛️ KHR: {}\n", format::riel(recorded.riel)));
    }
    description.push_str("\nUse `!total` to see today's totals");
    description
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_lists_only_detected_currencies() {
        let recorded = RecordedPayment {
            payment_id: 42,
            usd: 272.5,
            riel: 0.0,
        };
        let description = confirmation_description(&recorded);
        assert!(description.contains("$272.50"));
        assert!(!description.contains("KHR"));

        let recorded = RecordedPayment {
            payment_id: 43,
            usd: 0.0,
            riel: 25000.0,
        };
        let description = confirmation_description(&recorded);
        assert!(description.contains("៛25,000"));
        assert!(!description.contains("USD"));
    }
}
