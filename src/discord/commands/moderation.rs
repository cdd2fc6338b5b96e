// Moderation slash commands.
//
// **Notice the pattern:**
// 1. Extract primitive data from Discord types
// 2. Call core service
// 3. Format the response based on the result
//
// This layer is THIN - no business logic, just translation.

use crate::core::moderation::ModerationService;
use crate::infra::moderation::JsonReportChannelStore;
use poise::serenity_prelude::{self as serenity, Mentionable};
use std::sync::Arc;

/// Type aliases for our bot's context.
/// This is what every command receives as its first parameter.
pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Data that's shared across all commands and event handlers.
pub struct Data {
    pub moderation: Arc<ModerationService<JsonReportChannelStore>>,
}

/// Set the channel for abuse reports.
///
/// **Command syntax:** `/setreport #channel`
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "ADMINISTRATOR",
    ephemeral
)]
pub async fn setreport(
    ctx: Context<'_>,
    #[description = "Channel where moderation reports will be posted"]
    #[channel_types("Text")]
    channel: serenity::GuildChannel,
) -> Result<(), Error> {
    let guild_id = ctx.guild_id().ok_or("Must be used in a server")?;

    ctx.data()
        .moderation
        .set_report_channel(guild_id.get(), channel.id.get())
        .await?;

    ctx.say(format!("✅ Report channel set to {}", channel.mention()))
        .await?;
    Ok(())
}

/// Check if the bot is alive.
#[poise::command(slash_command, ephemeral)]
pub async fn ping(ctx: Context<'_>) -> Result<(), Error> {
    ctx.say("🏓 Pong! The bot is working.").await?;
    Ok(())
}
