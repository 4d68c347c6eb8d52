use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use sqlx::postgres::PgPool;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod db;
mod extractor;
mod models;
mod services;
mod utils;

struct Handler;

struct DatabasePool;

impl TypeMapKey for DatabasePool {
    type Value = PgPool;
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        commands::handle_message(&ctx, &msg).await;
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("riel_ledger=debug".parse().unwrap())
                .add_directive("serenity=warn".parse().unwrap()),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("🤖 Starting payment tracking bot...");
    info!("  riel-ledger v{} - USD/KHR payment tracker", env!("CARGO_PKG_VERSION"));

    // Initialize database
    info!("Initializing database...");
    let pool = match db::init_db().await {
        Ok(p) => {
            info!("Database initialized successfully");
            p
        }
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            return;
        }
    };

    let token = std::env::var("DISCORD_TOKEN").expect("DISCORD_TOKEN not set");
    let intents = GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGES;

    let mut client = Client::builder(&token, intents)
        .event_handler(Handler)
        .await
        .expect("Failed to create client");

    // Store the database pool in client data
    {
        let mut data = client.data.write().await;
        data.insert::<DatabasePool>(pool);
    }

    if let Err(e) = client.start().await {
        error!("Client error: {}", e);
    }
}
