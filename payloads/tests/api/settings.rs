use reqwest::StatusCode;

use payloads::{
    AgeGate, AgeGateAction, AutoRoleSettings, ChannelId, ContentFiltering,
    DurationUnit, JoinGate, LoggingSettings, ModerationSettings,
    NoAvatarAction, PermissionLevel, RoleId, StaffSettings, StaffTeam,
    TeamPermissions, TierAction, UnverifiedJoinAction, VerificationSettings,
    VerifiedJoinAction, WarningSystem, WarningTier, requests,
};

use test_helpers::{assert_status_code, mock, spawn_app};

fn role_id(name: &str) -> RoleId {
    mock::guild_roles()
        .into_iter()
        .find(|r| r.name == name)
        .map(|r| r.id)
        .unwrap()
}

fn channel_id(name: &str) -> ChannelId {
    mock::guild_channels()
        .into_iter()
        .find(|c| c.name == name)
        .map(|c| c.id)
        .unwrap()
}

#[tokio::test]
async fn anonymous_settings_writes_are_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let client = app.anonymous_client();

    let body = requests::SaveLoggingSettings {
        guild_id: mock::main_guild().id,
        settings: LoggingSettings::default(),
    };
    assert_status_code(
        client.save_logging_settings(&body).await,
        StatusCode::UNAUTHORIZED,
    );

    Ok(())
}

#[tokio::test]
async fn moderation_save_persists_across_refetch() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let guild_id = mock::main_guild().id;

    let settings = ModerationSettings {
        join_gate: JoinGate {
            no_avatar_action: NoAvatarAction::Kick,
            min_account_age_days: 7,
            banned_usernames: vec!["spammer".to_string(), "raider".to_string()],
        },
        content_filtering: ContentFiltering {
            banned_words: vec!["freenitro".to_string()],
            block_invites: true,
            block_mass_mention: true,
            block_caps: false,
        },
        warning_system: WarningSystem {
            tiers: vec![
                WarningTier {
                    warn_count: 3,
                    action: TierAction::Mute,
                    duration: 60,
                    duration_unit: DurationUnit::Minutes,
                },
                WarningTier {
                    warn_count: 5,
                    action: TierAction::Ban,
                    duration: 7,
                    duration_unit: DurationUnit::Days,
                },
            ],
        },
    };
    let body = requests::SaveModerationSettings {
        guild_id: guild_id.clone(),
        settings: settings.clone(),
    };
    app.client.save_moderation_settings(&body).await?;

    let details = app.client.guild_details(&guild_id).await?;
    let saved = details.saved_settings.unwrap();
    assert_eq!(saved.moderation, Some(settings));
    // the upsert leaves the other domains alone
    assert!(saved.verification.is_some());
    assert!(saved.staff.is_some());

    Ok(())
}

#[tokio::test]
async fn auto_role_save_persists_across_refetch() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let guild_id = mock::main_guild().id;

    let settings = AutoRoleSettings {
        join_role_id: Some(role_id("Citizen")),
    };
    let body = requests::SaveAutoRoleSettings {
        guild_id: guild_id.clone(),
        settings: settings.clone(),
    };
    app.client.save_auto_role_settings(&body).await?;

    let details = app.client.guild_details(&guild_id).await?;
    assert_eq!(details.saved_settings.unwrap().auto_role, Some(settings));

    Ok(())
}

#[tokio::test]
async fn logging_save_updates_both_channels() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let guild_id = mock::main_guild().id;

    // the guild starts with no message log configured
    let details = app.client.guild_details(&guild_id).await?;
    let seeded = details.saved_settings.unwrap().logging.unwrap();
    assert!(seeded.message_log_channel_id.is_none());

    let settings = LoggingSettings {
        action_log_channel_id: Some(channel_id("mod-log")),
        message_log_channel_id: Some(channel_id("message-log")),
    };
    let body = requests::SaveLoggingSettings {
        guild_id: guild_id.clone(),
        settings: settings.clone(),
    };
    app.client.save_logging_settings(&body).await?;

    let details = app.client.guild_details(&guild_id).await?;
    assert_eq!(details.saved_settings.unwrap().logging, Some(settings));

    Ok(())
}

#[tokio::test]
async fn verification_save_overwrites_the_previous_value() -> anyhow::Result<()>
{
    let app = spawn_app().await;
    let guild_id = mock::main_guild().id;

    let settings = VerificationSettings {
        verified_user_action: VerifiedJoinAction::None,
        unverified_user_action: UnverifiedJoinAction::Kick,
        verification_channel_id: Some(channel_id("general")),
        unverified_role_id: None,
        verified_role_id: Some(role_id("Citizen")),
        verification_embed_message: "Welcome! Verify to unlock the tavern."
            .to_string(),
        age_gate: AgeGate {
            is_enabled: true,
            min_age: 18,
            max_age: 99,
            action: AgeGateAction::Ban,
        },
    };
    let body = requests::SaveVerificationSettings {
        guild_id: guild_id.clone(),
        settings: settings.clone(),
    };
    app.client.save_verification_settings(&body).await?;

    let details = app.client.guild_details(&guild_id).await?;
    assert_eq!(details.saved_settings.unwrap().verification, Some(settings));

    Ok(())
}

#[tokio::test]
async fn staff_save_round_trips_the_flattened_body() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let guild_id = mock::main_guild().id;

    let settings = StaffSettings {
        is_enabled: true,
        owner_role_id: Some(role_id("Warden")),
        emergency_override_enabled: true,
        teams: vec![
            StaffTeam {
                team_id: "team-1".to_string(),
                team_name: "Moderators".to_string(),
                roles: vec![role_id("Sentinel"), role_id("Keeper")],
                permissions: TeamPermissions {
                    ban: PermissionLevel::Auth,
                    kick: PermissionLevel::Full,
                    mute: PermissionLevel::Full,
                    warn: PermissionLevel::Full,
                    blacklist: PermissionLevel::None,
                },
                can_authorize: vec!["team-2".to_string()],
            },
            StaffTeam {
                team_id: "team-2".to_string(),
                team_name: "Admins".to_string(),
                roles: vec![role_id("Warden")],
                permissions: TeamPermissions {
                    ban: PermissionLevel::Full,
                    kick: PermissionLevel::Full,
                    mute: PermissionLevel::Full,
                    warn: PermissionLevel::Full,
                    blacklist: PermissionLevel::Full,
                },
                can_authorize: Vec::new(),
            },
        ],
    };
    let body = requests::SaveStaffSettings {
        guild_id: guild_id.clone(),
        settings: settings.clone(),
    };
    app.client.save_staff_settings(&body).await?;

    let details = app.client.guild_details(&guild_id).await?;
    assert_eq!(details.saved_settings.unwrap().staff, Some(settings));

    Ok(())
}

#[tokio::test]
async fn posting_the_embed_requires_a_saved_channel() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let guild_id = mock::main_guild().id;

    // drop the configured channel first
    let body = requests::SaveVerificationSettings {
        guild_id: guild_id.clone(),
        settings: VerificationSettings {
            verification_channel_id: None,
            ..VerificationSettings::default()
        },
    };
    app.client.save_verification_settings(&body).await?;

    let embed = requests::PostVerificationEmbed {
        guild_id: guild_id.clone(),
    };
    let result = app.client.post_verification_embed(&embed).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    // restoring a channel makes the post succeed
    let body = requests::SaveVerificationSettings {
        guild_id: guild_id.clone(),
        settings: VerificationSettings {
            verification_channel_id: Some(channel_id("verify-here")),
            ..VerificationSettings::default()
        },
    };
    app.client.save_verification_settings(&body).await?;
    app.client.post_verification_embed(&embed).await?;

    Ok(())
}
