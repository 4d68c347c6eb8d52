use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::models::Period;
use crate::services::{payment_service, totals_service};
use crate::utils::format;

pub async fn execute(ctx: &Context, msg: &Message, args: &[&str]) -> Result<(), String> {
    if args.is_empty() {
        let help_embed = serenity::builder::CreateEmbed::default()
            .title("💰 Add Payment Command")
            .description("Manually record payment amounts from the given text")
            .field(
                "Usage",
                "`!add $100` - add a USD payment\n\
                 `!add ៛25000` - add a KHR payment\n\
                 `!add $50 ៛10000` - add both currencies\n\
                 `!add I paid $272.50 for lunch` - parse from text",
                false,
            )
            .color(0x00ff00);

        msg.channel_id
            .send_message(ctx, serenity::builder::CreateMessage::default().embed(help_embed))
            .await
            .map_err(|e| e.to_string())?;
        return Ok(());
    }

    let payment_text = args.join(" ");

    match payment_service::record_payment(ctx, msg, &payment_text, true).await? {
        Some(recorded) => {
            let chat_id = msg.channel_id.get() as i64;
            let totals = totals_service::get_totals(ctx, chat_id, Period::Today).await?;

            let mut description = String::from("**Added:**\n");
            if recorded.usd > 0.0 {
                description.push_str(&format!("💵 {} USD\n", format::usd(recorded.usd)));
            }
            if recorded.riel > 0.0 {
                description.push_str(&format!("🏛️ {} KHR\n", format::riel(recorded.riel)));
            }
            description.push_str(&format!(
                "\n**Today's Total:**\n💵 {}\n🏛️ {}",
                format::usd(totals.usd_total),
                format::riel(totals.riel_total)
            ));

            let embed = serenity::builder::CreateEmbed::default()
                .title("✅ Payment Added")
                .description(description)
                .color(0x00ff00);

            msg.channel_id
                .send_message(ctx, serenity::builder::CreateMessage::default().embed(embed))
                .await
                .map_err(|e| e.to_string())?;
        }
        None => {
            msg.reply(
                ctx,
                "❌ No payment amounts detected in your text.\n\nTry: `!add $100` or `!add ៛25000`",
            )
            .await
            .map_err(|e| e.to_string())?;
        }
    }

    Ok(())
}
