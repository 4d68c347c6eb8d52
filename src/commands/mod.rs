pub mod add;
pub mod export;
pub mod help;
pub mod summary;
pub mod total;

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use lazy_static::lazy_static;
use serenity::model::channel::Message;
use serenity::model::id::UserId;
use serenity::prelude::Context;
use tokio::sync::Mutex;
use tracing::{error, warn};

use crate::models::Period;
use crate::services::payment_service;
use crate::utils::extract_clean_error;

lazy_static! {
    static ref COMMAND_COOLDOWNS: Mutex<HashMap<(UserId, String), u64>> =
        Mutex::new(HashMap::new());
}

const COOLDOWN_SECONDS: u64 = 5;
const PREFIX: char = '!';

pub async fn handle_message(ctx: &Context, msg: &Message) {
    if msg.author.bot {
        return;
    }

    let content = msg.content.trim();
    if content.is_empty() {
        return;
    }

    // Anything that isn't a command goes through automatic detection.
    // The prefix is '!' rather than '$' so commands never collide with the
    // dollar amounts this bot watches for.
    if !content.starts_with(PREFIX) {
        if let Err(e) = auto_detect(ctx, msg).await {
            // Detection failures are never user-visible
            warn!("Automatic payment detection failed: {}", e);
        }
        return;
    }

    let parts: Vec<&str> = content.split_whitespace().collect();
    let command = parts[0];
    let args = &parts[1..];

    if let Some(remaining) = check_cooldown(msg.author.id, command).await {
        let _ = msg
            .channel_id
            .send_message(
                ctx,
                serenity::builder::CreateMessage::default().embed(
                    serenity::builder::CreateEmbed::default()
                        .title("Command Cooldown")
                        .description(format!(
                            "⏳ Please wait {} seconds before using this command again.",
                            remaining
                        ))
                        .color(0xffa500),
                ),
            )
            .await;
        return;
    }

    let result = match command {
        "!help" | "!start" => help::execute(ctx, msg).await,
        "!total" | "!today" => total::execute(ctx, msg, Period::Today).await,
        "!week" => total::execute(ctx, msg, Period::Week).await,
        "!month" => total::execute(ctx, msg, Period::Month).await,
        "!year" => total::execute(ctx, msg, Period::Year).await,
        "!summary" => summary::execute(ctx, msg).await,
        "!export" => export::execute(ctx, msg, args).await,
        "!add" => add::execute(ctx, msg, args).await,
        "!test" | "!detect" => test::execute(ctx, msg, args).await,
        _ => return,
    };

    if let Err(e) = result {
        error!("Error executing command {}: {}", command, e);

        let clean_error = extract_clean_error(&e);
        let user_message = if clean_error.is_empty() {
            "❌ An error occurred while executing the command.".to_string()
        } else {
            format!("❌ {}", clean_error)
        };

        let embed = serenity::builder::CreateEmbed::default()
            .title("Command Error")
            .description(user_message)
            .color(0xff0000);

        let _ = msg
            .channel_id
            .send_message(ctx, serenity::builder::CreateMessage::default().embed(embed))
            .await;
    }
}

/// Returns the remaining seconds when the user is still cooling down,
/// recording the new invocation otherwise.
async fn check_cooldown(user_id: UserId, command: &str) -> Option<u64> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let key = (user_id, command.to_string());

    let mut cooldowns = COMMAND_COOLDOWNS.lock().await;
    if let Some(&last_time) = cooldowns.get(&key) {
        let elapsed = now.saturating_sub(last_time);
        if elapsed < COOLDOWN_SECONDS {
            return Some(COOLDOWN_SECONDS - elapsed);
        }
    }
    cooldowns.insert(key, now);
    None
}

async fn auto_detect(ctx: &Context, msg: &Message) -> Result<(), String> {
    if let Some(recorded) = payment_service::record_payment(ctx, msg, &msg.content, false).await? {
        let embed = payment_service::create_confirmation_embed(&recorded);
        msg.channel_id
            .send_message(ctx, serenity::builder::CreateMessage::default().embed(embed))
            .await
            .map_err(|e| e.to_string())?;
    }

    Ok(())
}
