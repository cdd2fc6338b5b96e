// This is the entry point of the Discord moderation bot.
//
// **Architecture Overview:**
// - `core/` = Business logic (platform-agnostic)
// - `infra/` = Implementations of core traits (JSON files)
// - `discord/` = Discord-specific adapters (commands, events)
//
// This file's job is to:
// 1. Load configuration
// 2. Initialize services (dependency injection)
// 3. Set up the Discord framework
// 4. Register commands and event handlers

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with half a dozen mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
mod core;
#[path = "discord/discord_layer.rs"]
mod discord;
#[path = "infra/infra_layer.rs"]
mod infra;

use crate::core::moderation::{ModerationService, WordFilter};
use crate::discord::moderation as message_moderation;
use crate::discord::{Data, Error};
use crate::infra::moderation::{load_bad_words, JsonReportChannelStore};
use poise::serenity_prelude as serenity;
use std::sync::Arc;

const REPORT_CONFIG_PATH: &str = "report_config.json";
const BAD_WORDS_PATH: &str = "bad_words.json";

/// Event handler for non-command Discord events.
/// This is where every incoming message goes through the moderation engine.
async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            tracing::info!("🤖 Logged in as {}", data_about_bot.user.name);
        }
        serenity::FullEvent::Message { new_message } => {
            message_moderation::handle_message(ctx, new_message, data).await?;
        }
        _ => {}
    }

    Ok(())
}

/// Framework-level error hook.
///
/// A failed admin permission check gets a private, user-facing reply; every
/// other error falls through to poise's default handling.
async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::MissingUserPermissions { ctx, .. } => {
            let reply = poise::CreateReply::default()
                .content("❌ You must be an **Administrator** to use this command.")
                .ephemeral(true);
            if let Err(e) = ctx.send(reply).await {
                tracing::warn!("Failed to send permission error reply: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                tracing::error!("Error while handling error: {}", e);
            }
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize logging so we can see what's happening
    tracing_subscriber::fmt::init();

    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();

    // Get Discord bot token from environment
    let token = std::env::var("DISCORD_TOKEN").expect(
        "Missing DISCORD_TOKEN environment variable! Create a .env file with your bot token.",
    );

    // ========================================================================
    // DEPENDENCY INJECTION
    // ========================================================================
    // Create our services with their dependencies.
    // This is the "composition root" where we wire everything together.

    // A missing word list is fine (empty filter); a malformed one is not.
    let bad_words = load_bad_words(BAD_WORDS_PATH).expect("Failed to parse bad_words.json");
    tracing::info!(words = bad_words.len(), "Loaded banned word list");

    // Same policy for the report channel map, enforced inside the store.
    let report_store = JsonReportChannelStore::new(REPORT_CONFIG_PATH);

    let moderation = Arc::new(ModerationService::new(
        WordFilter::new(bad_words),
        report_store,
    ));

    // Create the data structure that will be shared across all commands
    let data = Data { moderation };

    // ========================================================================
    // DISCORD FRAMEWORK SETUP
    // ========================================================================
    // Configure the poise framework with our commands and settings.

    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT // Required to read message content
        | serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MEMBERS;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            // Register all our commands here
            commands: vec![
                discord::commands::moderation::setreport(),
                discord::commands::moderation::ping(),
            ],
            // Event handler for messages and other events
            event_handler: |ctx, event, framework, data| {
                Box::pin(event_handler(ctx, event, framework, data))
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, _ready, framework| {
            Box::pin(async move {
                // Register slash commands globally (can take up to an hour to
                // propagate). Re-run on every startup so a changed command
                // set is re-synced.
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                tracing::info!("✅ Slash commands synced (global)");

                Ok(data)
            })
        })
        .build();

    // Create the client and start the bot
    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await
        .expect("Error creating client");

    client.start().await.expect("Error running bot");
}
