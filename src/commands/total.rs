use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::models::Period;
use crate::services::totals_service;

pub async fn execute(ctx: &Context, msg: &Message, period: Period) -> Result<(), String> {
    let chat_id = msg.channel_id.get() as i64;

    let result = totals_service::get_totals(ctx, chat_id, period).await?;
    let embed = totals_service::create_totals_embed(&result);

    msg.channel_id
        .send_message(ctx, serenity::builder::CreateMessage::default().embed(embed))
        .await
        .map_err(|e| e.to_string())?;

    Ok(())
}
