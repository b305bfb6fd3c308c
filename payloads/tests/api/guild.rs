use reqwest::StatusCode;

use payloads::{GuildId, requests};

use test_helpers::{assert_status_code, mock, spawn_app};

#[tokio::test]
async fn anonymous_requests_are_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let client = app.anonymous_client();

    assert_status_code(client.current_user().await, StatusCode::UNAUTHORIZED);
    assert_status_code(client.user_guilds().await, StatusCode::UNAUTHORIZED);
    assert_status_code(
        client.guild_details(&mock::main_guild().id).await,
        StatusCode::UNAUTHORIZED,
    );

    Ok(())
}

#[tokio::test]
async fn forged_token_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let client = app.client_with_token("definitely-not-the-issued-token");

    assert_status_code(client.user_guilds().await, StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn current_user_and_profile() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let user = app.client.current_user().await?;
    assert_eq!(user, mock::nelly());

    let profile = app.client.profile_details().await?;
    assert_eq!(profile.ban_count, 2);
    assert!(!profile.is_stripe_verified);
    assert!(profile.birthday.is_some());

    Ok(())
}

#[tokio::test]
async fn guild_list_carries_manage_and_bot_flags() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let guilds = app.client.user_guilds().await?;
    assert_eq!(guilds, mock::guild_summaries());

    // one guild the dashboard links straight into
    let manageable = guilds
        .iter()
        .filter(|g| g.can_manage && g.bot_in_guild)
        .count();
    assert_eq!(manageable, 1);

    // one guild that needs a bot invite first
    let invitable = guilds
        .iter()
        .filter(|g| g.can_manage && !g.bot_in_guild)
        .count();
    assert_eq!(invitable, 1);

    Ok(())
}

#[tokio::test]
async fn guild_details_includes_saved_settings() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let guild = mock::main_guild();

    let details = app.client.guild_details(&guild.id).await?;

    assert_eq!(details.guild, guild);
    assert_eq!(details.roles, mock::guild_roles());
    assert_eq!(details.channels, mock::guild_channels());

    let saved = details.saved_settings.unwrap();
    assert!(saved.verification.is_some());
    assert!(saved.logging.is_some());
    assert!(saved.staff.is_some());
    // these two domains start unsaved
    assert!(saved.moderation.is_none());
    assert!(saved.auto_role.is_none());

    Ok(())
}

#[tokio::test]
async fn unknown_guild_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app
        .client
        .guild_details(&GuildId::from("999999999999999999"))
        .await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn verification_session_url_carries_the_user() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let user = mock::nelly();

    let body = requests::CreateVerificationSession {
        discord_id: user.id.clone(),
    };
    let session = app.client.create_verification_session(&body).await?;

    assert!(session.url.starts_with("https://verify.stripe.com/"));
    assert!(session.url.contains(&user.id.to_string()));

    Ok(())
}
