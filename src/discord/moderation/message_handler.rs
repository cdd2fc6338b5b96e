// Discord-specific moderation handling - translates the core outcome into
// report embeds and message deletion.

use crate::discord::{Data, Error};
use chrono::Utc;
use poise::serenity_prelude::{self as serenity, Mentionable};

/// Run the moderation engine over one incoming message.
///
/// Order matters: banned-word report, then deletion, then the spam check.
/// Spam tracking sees every non-bot guild message, including ones that were
/// just deleted for a banned word. Command dispatch is owned by poise and
/// runs regardless of what happens here.
pub async fn handle_message(
    ctx: &serenity::Context,
    msg: &serenity::Message,
    data: &Data,
) -> Result<(), Error> {
    // Ignore bot messages (including our own) to avoid feedback loops
    if msg.author.bot {
        return Ok(());
    }

    // Only moderate guild messages (not DMs)
    let guild_id = match msg.guild_id {
        Some(id) => id.get(),
        None => return Ok(()),
    };

    let outcome = data
        .moderation
        .inspect(msg.author.id.get(), &msg.content, Utc::now());

    let report_channel = data.moderation.report_channel(guild_id).await?;

    if outcome.has_banned_words() {
        if let Some(channel_id) = report_channel {
            let embed = banned_word_embed(msg, &outcome.triggered_words);
            send_report(ctx, channel_id, embed).await;
        }

        delete_message(ctx, msg).await?;
    }

    // Spam is report-only: no deletion, no mute.
    if outcome.spam.is_spam {
        if let Some(channel_id) = report_channel {
            let embed = spam_embed(msg);
            send_report(ctx, channel_id, embed).await;
        }
    }

    Ok(())
}

/// Send a report embed to the configured channel.
///
/// The channel id is resolved against the cache first; a stale id (channel
/// deleted, bot kicked) drops the report without surfacing an error.
async fn send_report(ctx: &serenity::Context, channel_id: u64, embed: serenity::CreateEmbed) {
    let channel = serenity::ChannelId::new(channel_id);

    if ctx.cache.channel(channel).is_none() {
        tracing::debug!(channel_id, "Report channel not resolvable, skipping report");
        return;
    }

    if let Err(e) = channel
        .send_message(&ctx.http, serenity::CreateMessage::new().embed(embed))
        .await
    {
        tracing::warn!("Failed to send moderation report: {}", e);
    }
}

/// Delete a message that triggered the word filter.
///
/// A 403 means the bot lacks Manage Messages in that channel; that is the
/// server admin's problem, not ours, so log it and move on. Anything else
/// propagates.
async fn delete_message(ctx: &serenity::Context, msg: &serenity::Message) -> Result<(), Error> {
    match msg.delete(&ctx.http).await {
        Ok(()) => Ok(()),
        Err(err) if is_missing_permissions(&err) => {
            tracing::warn!(
                channel_id = msg.channel_id.get(),
                "Missing permissions to delete message"
            );
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn is_missing_permissions(err: &serenity::Error) -> bool {
    matches!(
        err,
        serenity::Error::Http(serenity::HttpError::UnsuccessfulRequest(response))
            if response.status_code.as_u16() == 403 || response.error.code == 50013
    )
}

fn banned_word_embed(msg: &serenity::Message, triggered: &[String]) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title("🚨 Banned Word Detected")
        .color(0xFF0000)
        .timestamp(serenity::Timestamp::now())
        .field("👤 User", msg.author.mention().to_string(), false)
        .field("💬 Message", msg.content.clone(), false)
        .field("⚠️ Triggered Words", triggered.join(", "), false)
        .field("📍 Channel", msg.channel_id.mention().to_string(), true)
        .field("🕒 Time", utc_time_field(), true)
}

fn spam_embed(msg: &serenity::Message) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title("⚠️ Spam Detected")
        .color(0xFFA500)
        .timestamp(serenity::Timestamp::now())
        .field("👤 User", msg.author.mention().to_string(), false)
        .field("💬 Message", msg.content.clone(), false)
        .field("📍 Channel", msg.channel_id.mention().to_string(), true)
        .field("🕒 Time", utc_time_field(), true)
}

fn utc_time_field() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
