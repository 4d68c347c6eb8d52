use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::services::summary_service;

pub async fn execute(ctx: &Context, msg: &Message) -> Result<(), String> {
    let chat_id = msg.channel_id.get() as i64;

    let summary = summary_service::get_daily_summary(ctx, chat_id).await?;
    let embed = summary_service::create_summary_embed(&summary);

    msg.channel_id
        .send_message(ctx, serenity::builder::CreateMessage::default().embed(embed))
        .await
        .map_err(|e| e.to_string())?;

    Ok(())
}
