use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};

/// Maximum number of staff teams a guild may configure.
pub const MAX_STAFF_TEAMS: usize = 5;
/// Maximum number of roles a single staff team may hold.
pub const MAX_TEAM_ROLES: usize = 5;

/// Embed text used when a guild has not customized its verification
/// message.
pub const DEFAULT_VERIFICATION_EMBED_MESSAGE: &str =
    "Please verify your account to access the rest of the server.";

/// Discord snowflakes are serialized as strings to avoid precision loss
/// in JavaScript consumers of the same API.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(transparent)]
pub struct GuildId(pub String);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(transparent)]
pub struct RoleId(pub String);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(transparent)]
pub struct ChannelId(pub String);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(transparent)]
pub struct UserId(pub String);

impl From<&str> for GuildId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&str> for RoleId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&str> for ChannelId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guild {
    pub id: GuildId,
    pub name: String,
    /// Icon asset hash; `None` when the guild has no custom icon.
    pub icon: Option<String>,
}

/// A guild role as reported by the chat platform. Field names follow the
/// platform's own wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    /// Packed 0xRRGGBB color; 0 means no color set.
    pub color: u32,
    /// Position in the role hierarchy. Higher is more privileged.
    pub position: i64,
    pub icon: Option<String>,
    pub unicode_emoji: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    pub name: String,
}

/// Everything the bot has persisted for a guild. A domain that has never
/// been saved is absent.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct GuildSettings {
    #[serde(default)]
    pub verification: Option<VerificationSettings>,
    #[serde(default)]
    pub moderation: Option<ModerationSettings>,
    #[serde(default)]
    pub logging: Option<LoggingSettings>,
    #[serde(default)]
    pub auto_role: Option<AutoRoleSettings>,
    #[serde(default)]
    pub staff: Option<StaffSettings>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationSettings {
    pub verified_user_action: VerifiedJoinAction,
    pub unverified_user_action: UnverifiedJoinAction,
    pub verification_channel_id: Option<ChannelId>,
    pub unverified_role_id: Option<RoleId>,
    pub verified_role_id: Option<RoleId>,
    pub verification_embed_message: String,
    pub age_gate: AgeGate,
}

impl Default for VerificationSettings {
    fn default() -> Self {
        Self {
            verified_user_action: VerifiedJoinAction::None,
            unverified_user_action: UnverifiedJoinAction::GiveRole,
            verification_channel_id: None,
            unverified_role_id: None,
            verified_role_id: None,
            verification_embed_message: DEFAULT_VERIFICATION_EMBED_MESSAGE
                .to_string(),
            age_gate: AgeGate::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeGate {
    pub is_enabled: bool,
    pub min_age: u8,
    pub max_age: u8,
    pub action: AgeGateAction,
}

impl Default for AgeGate {
    fn default() -> Self {
        Self {
            is_enabled: false,
            min_age: 13,
            max_age: 99,
            action: AgeGateAction::Kick,
        }
    }
}

#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct ModerationSettings {
    #[serde(default)]
    pub join_gate: JoinGate,
    #[serde(default)]
    pub content_filtering: ContentFiltering,
    #[serde(default)]
    pub warning_system: WarningSystem,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinGate {
    pub no_avatar_action: NoAvatarAction,
    pub min_account_age_days: u32,
    pub banned_usernames: Vec<String>,
}

impl Default for JoinGate {
    fn default() -> Self {
        Self {
            no_avatar_action: NoAvatarAction::None,
            min_account_age_days: 0,
            banned_usernames: Vec::new(),
        }
    }
}

#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct ContentFiltering {
    pub banned_words: Vec<String>,
    pub block_invites: bool,
    pub block_mass_mention: bool,
    pub block_caps: bool,
}

#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct WarningSystem {
    pub tiers: Vec<WarningTier>,
}

/// Escalation step: reaching `warn_count` warnings applies `action` for
/// the given duration. Duration is ignored for kicks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarningTier {
    pub warn_count: u32,
    pub action: TierAction,
    pub duration: u32,
    pub duration_unit: DurationUnit,
}

#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct LoggingSettings {
    pub action_log_channel_id: Option<ChannelId>,
    pub message_log_channel_id: Option<ChannelId>,
}

#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct AutoRoleSettings {
    pub join_role_id: Option<RoleId>,
}

#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct StaffSettings {
    pub is_enabled: bool,
    pub owner_role_id: Option<RoleId>,
    pub emergency_override_enabled: bool,
    pub teams: Vec<StaffTeam>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffTeam {
    /// Client-generated identifier, stable for the lifetime of the team.
    pub team_id: String,
    pub team_name: String,
    /// Capped at [`MAX_TEAM_ROLES`], no duplicates.
    pub roles: Vec<RoleId>,
    pub permissions: TeamPermissions,
    /// Team ids whose punishment requests this team can authorize.
    /// Never contains the team's own id.
    pub can_authorize: Vec<String>,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct TeamPermissions {
    pub ban: PermissionLevel,
    pub kick: PermissionLevel,
    pub mute: PermissionLevel,
    pub warn: PermissionLevel,
    pub blacklist: PermissionLevel,
}

/// Error when parsing a settings enum from its wire spelling, e.g. from a
/// select element's value.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unrecognized {kind}: {value}")]
pub struct ParseActionError {
    kind: &'static str,
    value: String,
}

impl ParseActionError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(rename_all = "snake_case")]
pub enum VerifiedJoinAction {
    #[default]
    #[display("none")]
    None,
    #[display("give_role")]
    GiveRole,
}

impl FromStr for VerifiedJoinAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "give_role" => Ok(Self::GiveRole),
            _ => Err(ParseActionError::new("verified user action", s)),
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(rename_all = "snake_case")]
pub enum UnverifiedJoinAction {
    #[default]
    #[display("give_role")]
    GiveRole,
    #[display("kick")]
    Kick,
    #[display("ban")]
    Ban,
}

impl FromStr for UnverifiedJoinAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "give_role" => Ok(Self::GiveRole),
            "kick" => Ok(Self::Kick),
            "ban" => Ok(Self::Ban),
            _ => Err(ParseActionError::new("unverified user action", s)),
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(rename_all = "snake_case")]
pub enum AgeGateAction {
    #[default]
    #[display("kick")]
    Kick,
    #[display("ban")]
    Ban,
}

impl FromStr for AgeGateAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kick" => Ok(Self::Kick),
            "ban" => Ok(Self::Ban),
            _ => Err(ParseActionError::new("age gate action", s)),
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(rename_all = "snake_case")]
pub enum NoAvatarAction {
    #[default]
    #[display("none")]
    None,
    #[display("kick")]
    Kick,
    #[display("ban")]
    Ban,
}

impl FromStr for NoAvatarAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "kick" => Ok(Self::Kick),
            "ban" => Ok(Self::Ban),
            _ => Err(ParseActionError::new("no-avatar action", s)),
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(rename_all = "snake_case")]
pub enum TierAction {
    #[default]
    #[display("mute")]
    Mute,
    #[display("kick")]
    Kick,
    #[display("ban")]
    Ban,
}

impl FromStr for TierAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mute" => Ok(Self::Mute),
            "kick" => Ok(Self::Kick),
            "ban" => Ok(Self::Ban),
            _ => Err(ParseActionError::new("tier action", s)),
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(rename_all = "snake_case")]
pub enum DurationUnit {
    #[default]
    #[display("minutes")]
    Minutes,
    #[display("hours")]
    Hours,
    #[display("days")]
    Days,
}

impl FromStr for DurationUnit {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minutes" => Ok(Self::Minutes),
            "hours" => Ok(Self::Hours),
            "days" => Ok(Self::Days),
            _ => Err(ParseActionError::new("duration unit", s)),
        }
    }
}

/// How far a staff team's authority over a punishment action goes.
/// `Auth` means the action requires sign-off from an authorizing team.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(rename_all = "snake_case")]
pub enum PermissionLevel {
    #[display("full")]
    Full,
    #[display("auth")]
    Auth,
    #[default]
    #[display("none")]
    None,
}

impl FromStr for PermissionLevel {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(Self::Full),
            "auth" => Ok(Self::Auth),
            "none" => Ok(Self::None),
            _ => Err(ParseActionError::new("permission level", s)),
        }
    }
}
