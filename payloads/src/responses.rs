use crate::{Channel, Guild, GuildId, GuildSettings, Role, UserId};
use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// The authenticated user, as reported by the auth service. Mirrors the
/// chat platform's user object plus the bot's application id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub username: String,
    /// Display name; fall back to `username` when absent.
    pub global_name: Option<String>,
    /// Avatar asset hash; `None` when the user has the default avatar.
    pub avatar: Option<String>,
    /// The bot's application id, used to build invite links.
    #[serde(rename = "clientId")]
    pub client_id: String,
}

/// Cross-guild profile data the bot network tracks for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDetails {
    #[serde(default)]
    pub birthday: Option<Date>,
    #[serde(rename = "banCount")]
    pub ban_count: u32,
    #[serde(rename = "isStripeVerified")]
    pub is_stripe_verified: bool,
}

/// One entry of the authenticated user's guild list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildSummary {
    pub id: GuildId,
    pub name: String,
    pub icon: Option<String>,
    /// Whether the user owns this guild.
    pub owner: bool,
    #[serde(rename = "botInGuild")]
    pub bot_in_guild: bool,
    /// Whether the user can manage this guild's settings.
    #[serde(rename = "canManage")]
    pub can_manage: bool,
}

/// Everything a settings page needs for one guild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildDetails {
    pub guild: Guild,
    /// All roles including the implicit everyone role, unsorted.
    pub roles: Vec<Role>,
    pub channels: Vec<Channel>,
    /// `None` when the bot has no stored settings for this guild yet.
    #[serde(rename = "savedSettings", default)]
    pub saved_settings: Option<GuildSettings>,
}

/// Hosted identity-verification flow created for the user. The client
/// navigates to `url` as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationSession {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessMessage {
    pub message: String,
}
