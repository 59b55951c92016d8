//! Inbound chat message as delivered by the chat collaborator.

use chrono::{DateTime, FixedOffset};

/// One inbound text message, handed to the engine by the chat client.
///
/// The chat client resolves everything Discord-specific (guilds, message
/// IDs, display names) before this point; the engine only sees the fields
/// it needs to score the message.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    /// Stable author identifier (stringified snowflake or similar)
    pub author_id: String,
    /// True for bot/automated accounts, which are never scored
    pub author_is_automated: bool,
    /// Name of the channel the message arrived in
    pub channel: String,
    /// Raw message text
    pub text: String,
    /// Delivery time in the reporting timezone
    pub now: DateTime<FixedOffset>,
}
