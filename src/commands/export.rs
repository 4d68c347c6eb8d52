use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::models::Period;
use crate::services::export_service::{self, ExportError};
use crate::services::get_pool;

pub async fn execute(ctx: &Context, msg: &Message, args: &[&str]) -> Result<(), String> {
    let period = match args.first() {
        None => Period::Month,
        Some(arg) => match Period::parse(arg) {
            Some(p) if p != Period::Today => p,
            _ => {
                msg.reply(ctx, "❌ Invalid period. Use: week, month, year, or all")
                    .await
                    .map_err(|e| e.to_string())?;
                return Ok(());
            }
        },
    };

    let pool = get_pool(ctx).await?;
    let chat_id = msg.channel_id.get() as i64;

    msg.channel_id
        .say(ctx, "📊 Generating CSV export...")
        .await
        .map_err(|e| e.to_string())?;

    let filename = match export_service::export_payments(&pool, chat_id, period).await {
        Ok(filename) => filename,
        Err(ExportError::NoData) => {
            msg.reply(ctx, "❌ No payment data found for the specified period.")
                .await
                .map_err(|e| e.to_string())?;
            return Ok(());
        }
        Err(e) => return Err(e.to_string()),
    };

    let attachment = serenity::builder::CreateAttachment::path(&filename)
        .await
        .map_err(|e| e.to_string())?;

    let send_result = msg
        .channel_id
        .send_message(
            ctx,
            serenity::builder::CreateMessage::default()
                .content(format!("📊 Payment data export ({})", period.name()))
                .add_file(attachment),
        )
        .await;

    // The file only exists to be attached
    let _ = std::fs::remove_file(&filename);

    send_result.map_err(|e| e.to_string())?;
    Ok(())
}
