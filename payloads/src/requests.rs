use crate::{
    AutoRoleSettings, GuildId, LoggingSettings, ModerationSettings,
    StaffSettings, UserId, VerificationSettings,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveVerificationSettings {
    pub guild_id: GuildId,
    pub settings: VerificationSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveModerationSettings {
    pub guild_id: GuildId,
    pub settings: ModerationSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveLoggingSettings {
    pub guild_id: GuildId,
    pub settings: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAutoRoleSettings {
    pub guild_id: GuildId,
    pub settings: AutoRoleSettings,
}

/// Unlike the other domains, staff settings post their fields at the top
/// level of the body rather than nested under a `settings` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveStaffSettings {
    pub guild_id: GuildId,
    #[serde(flatten)]
    pub settings: StaffSettings,
}

/// Ask the bot to post (or refresh) the verification embed in the guild's
/// configured verification channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostVerificationEmbed {
    pub guild_id: GuildId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVerificationSession {
    pub discord_id: UserId,
}
