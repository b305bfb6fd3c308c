//! Pins the JSON bodies the settings pages exchange with the bot backend.

use serde_json::json;

use payloads::{
    ContentFiltering, DEFAULT_VERIFICATION_EMBED_MESSAGE, DurationUnit,
    JoinGate, LoggingSettings, ModerationSettings, NoAvatarAction,
    PermissionLevel, StaffSettings, StaffTeam, TeamPermissions, TierAction,
    VerificationSettings, WarningSystem, WarningTier, requests, responses,
};

#[test]
fn verification_body_uses_camel_case_and_nulls() -> anyhow::Result<()> {
    let body = requests::SaveVerificationSettings {
        guild_id: "874103621938167810".into(),
        settings: VerificationSettings::default(),
    };

    let expected = json!({
        "guildId": "874103621938167810",
        "settings": {
            "verifiedUserAction": "none",
            "unverifiedUserAction": "give_role",
            "verificationChannelId": null,
            "unverifiedRoleId": null,
            "verifiedRoleId": null,
            "verificationEmbedMessage": DEFAULT_VERIFICATION_EMBED_MESSAGE,
            "ageGate": {
                "isEnabled": false,
                "minAge": 13,
                "maxAge": 99,
                "action": "kick",
            },
        },
    });
    assert_eq!(serde_json::to_value(&body)?, expected);

    Ok(())
}

#[test]
fn moderation_body_spells_out_tiers_and_gates() -> anyhow::Result<()> {
    let body = requests::SaveModerationSettings {
        guild_id: "874103621938167810".into(),
        settings: ModerationSettings {
            join_gate: JoinGate {
                no_avatar_action: NoAvatarAction::None,
                min_account_age_days: 7,
                banned_usernames: vec!["spammer".to_string()],
            },
            content_filtering: ContentFiltering {
                banned_words: Vec::new(),
                block_invites: true,
                block_mass_mention: false,
                block_caps: false,
            },
            warning_system: WarningSystem {
                tiers: vec![WarningTier {
                    warn_count: 3,
                    action: TierAction::Mute,
                    duration: 60,
                    duration_unit: DurationUnit::Minutes,
                }],
            },
        },
    };

    let expected = json!({
        "guildId": "874103621938167810",
        "settings": {
            "joinGate": {
                "noAvatarAction": "none",
                "minAccountAgeDays": 7,
                "bannedUsernames": ["spammer"],
            },
            "contentFiltering": {
                "bannedWords": [],
                "blockInvites": true,
                "blockMassMention": false,
                "blockCaps": false,
            },
            "warningSystem": {
                "tiers": [{
                    "warnCount": 3,
                    "action": "mute",
                    "duration": 60,
                    "durationUnit": "minutes",
                }],
            },
        },
    });
    assert_eq!(serde_json::to_value(&body)?, expected);

    Ok(())
}

#[test]
fn logging_body_sends_null_for_unset_channels() -> anyhow::Result<()> {
    let body = requests::SaveLoggingSettings {
        guild_id: "874103621938167810".into(),
        settings: LoggingSettings {
            action_log_channel_id: Some("874103622575702018".into()),
            message_log_channel_id: None,
        },
    };

    let expected = json!({
        "guildId": "874103621938167810",
        "settings": {
            "actionLogChannelId": "874103622575702018",
            "messageLogChannelId": null,
        },
    });
    assert_eq!(serde_json::to_value(&body)?, expected);

    Ok(())
}

#[test]
fn staff_body_flattens_settings_to_the_top_level() -> anyhow::Result<()> {
    let body = requests::SaveStaffSettings {
        guild_id: "874103621938167810".into(),
        settings: StaffSettings {
            is_enabled: true,
            owner_role_id: None,
            emergency_override_enabled: false,
            teams: vec![StaffTeam {
                team_id: "team-1".to_string(),
                team_name: "Moderators".to_string(),
                roles: vec!["874103622399541251".into()],
                permissions: TeamPermissions {
                    ban: PermissionLevel::Auth,
                    ..TeamPermissions::default()
                },
                can_authorize: vec!["team-2".to_string()],
            }],
        },
    };

    // no nested "settings" key, unlike the other domains
    let expected = json!({
        "guildId": "874103621938167810",
        "isEnabled": true,
        "ownerRoleId": null,
        "emergencyOverrideEnabled": false,
        "teams": [{
            "teamId": "team-1",
            "teamName": "Moderators",
            "roles": ["874103622399541251"],
            "permissions": {
                "ban": "auth",
                "kick": "none",
                "mute": "none",
                "warn": "none",
                "blacklist": "none",
            },
            "canAuthorize": ["team-2"],
        }],
    });
    assert_eq!(serde_json::to_value(&body)?, expected);

    Ok(())
}

#[test]
fn guild_details_parses_without_saved_settings() -> anyhow::Result<()> {
    let value = json!({
        "guild": {
            "id": "874103621938167810",
            "name": "Pixel Tavern",
            "icon": null,
        },
        "roles": [],
        "channels": [],
    });

    let details: responses::GuildDetails = serde_json::from_value(value)?;
    assert!(details.saved_settings.is_none());

    Ok(())
}

#[test]
fn missing_moderation_sub_objects_fall_back_to_defaults() -> anyhow::Result<()>
{
    // saves from older bot versions may predate a sub-object
    let settings: ModerationSettings = serde_json::from_value(json!({
        "joinGate": {
            "noAvatarAction": "ban",
            "minAccountAgeDays": 30,
            "bannedUsernames": [],
        },
    }))?;

    assert_eq!(settings.join_gate.no_avatar_action, NoAvatarAction::Ban);
    assert_eq!(settings.join_gate.min_account_age_days, 30);
    assert_eq!(settings.content_filtering, ContentFiltering::default());
    assert!(settings.warning_system.tiers.is_empty());

    Ok(())
}
