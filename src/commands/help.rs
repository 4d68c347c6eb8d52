use serenity::model::channel::Message;
use serenity::prelude::Context;

pub async fn execute(ctx: &Context, msg: &Message) -> Result<(), String> {
    let embed = serenity::builder::CreateEmbed::default()
        .title("🤖 Payment Tracking Bot")
        .description(
            "I automatically detect and track USD and Cambodian Riel amounts \
             mentioned in chat messages.",
        )
        .field(
            "💰 Payment Tracking",
            "`!total` - today's totals\n\
             `!week` - this week's totals\n\
             `!month` - this month's totals\n\
             `!year` - this year's totals\n\
             `!summary` - detailed breakdown of today's payments",
            false,
        )
        .field(
            "📊 Data Export",
            "`!export` - export this month's data to CSV\n\
             `!export week` / `!export year` / `!export all`",
            false,
        )
        .field(
            "🔍 Manual Entry & Testing",
            "`!add <text>` - record amounts from the given text\n\
             `!test <text>` - show what would be detected, without recording",
            false,
        )
        .field(
            "Supported Formats",
            "• USD: `$100`, `$1,200.25`, `100$`, `100 USD`, `USD 100`\n\
             • KHR: `៛25,000`, `25000៛`, `25000 KHR`, `riel 25000`\n\
             • Bank notifications: `\"$272.50\" paid by ...`, `Received 110,000 KHR`",
            false,
        )
        .footer(serenity::builder::CreateEmbedFooter::new(
            "Just send a message containing an amount and I'll track it",
        ))
        .color(0x00ff00);

    msg.channel_id
        .send_message(ctx, serenity::builder::CreateMessage::default().embed(embed))
        .await
        .map_err(|e| e.to_string())?;

    Ok(())
}
