//! In-memory mock of the bot's web API.
//!
//! The real API is served from inside the bot process, next to the gateway
//! connection. These handlers reproduce its routes and status codes over an
//! in-memory settings store so the frontend and the payloads client can be
//! exercised without a running bot:
//! - Development server (dev-server)
//! - API integration tests (payloads/tests/api)
//!
//! The fixture data models one guild with a realistic role hierarchy, a few
//! channels, and partially configured settings, so every dashboard page has
//! both a "previously saved" and a "never saved" domain to render.

use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{
    App, HttpRequest, HttpResponse, HttpServer, Responder, ResponseError,
    body::BoxBody,
    dev::{HttpServiceFactory, Server},
    get, post, web,
};
use payloads::{
    AgeGate, AgeGateAction, Channel, Guild, GuildId, GuildSettings,
    LoggingSettings, PermissionLevel, Role, StaffSettings, StaffTeam,
    TeamPermissions, UnverifiedJoinAction, VerificationSettings,
    VerifiedJoinAction, requests, responses,
};

/// The access token the dashboard stores after the OAuth redirect. Requests
/// bearing any other token are rejected.
pub const ACCESS_TOKEN: &str = "6qrZcUqja7812RVdnEKjpzOL4CvHBFG";

/// Mutable server state. Saves replace whole per-domain blocks, the same
/// way the bot persists them.
pub struct MockApi {
    pub settings: Mutex<HashMap<GuildId, GuildSettings>>,
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Authentication failed")]
    AuthError(#[source] anyhow::Error),
    #[error("Bad request")]
    BadRequest(#[source] anyhow::Error),
    #[error("Not found")]
    NotFound(#[source] anyhow::Error),
}

impl ResponseError for APIError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Self::AuthError(e) => {
                HttpResponse::Unauthorized().body(format!("{self}: {e}"))
            }
            Self::BadRequest(e) => {
                HttpResponse::BadRequest().body(format!("{self}: {e}"))
            }
            Self::NotFound(e) => {
                HttpResponse::NotFound().body(format!("{self}: {e}"))
            }
        }
    }
}

fn require_bearer(req: &HttpRequest) -> Result<(), APIError> {
    let header = req
        .headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            APIError::AuthError(anyhow::anyhow!(
                "missing authorization header"
            ))
        })?;
    let token = header.strip_prefix("Bearer ").ok_or_else(|| {
        APIError::AuthError(anyhow::anyhow!("malformed authorization header"))
    })?;
    if token != ACCESS_TOKEN {
        return Err(APIError::AuthError(anyhow::anyhow!(
            "unrecognized access token"
        )));
    }
    Ok(())
}

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("/api")
        .service(health_check)
        .service(current_user)
        .service(user_guilds)
        .service(profile_details)
        .service(guild_details)
        .service(save_verification_settings)
        .service(save_moderation_settings)
        .service(save_logging_settings)
        .service(save_auto_role_settings)
        .service(save_staff_settings)
        .service(post_verification_embed)
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

#[tracing::instrument(skip(req), ret)]
#[get("/auth/user")]
pub async fn current_user(req: HttpRequest) -> Result<HttpResponse, APIError> {
    require_bearer(&req)?;
    Ok(HttpResponse::Ok().json(nelly()))
}

#[tracing::instrument(skip(req), ret)]
#[get("/auth/guilds")]
pub async fn user_guilds(req: HttpRequest) -> Result<HttpResponse, APIError> {
    require_bearer(&req)?;
    Ok(HttpResponse::Ok().json(guild_summaries()))
}

#[tracing::instrument(skip(req), ret)]
#[get("/profile/details")]
pub async fn profile_details(
    req: HttpRequest,
) -> Result<HttpResponse, APIError> {
    require_bearer(&req)?;
    Ok(HttpResponse::Ok().json(nelly_profile()))
}

#[tracing::instrument(skip(req, state), ret)]
#[get("/guild/{guild_id}/details")]
pub async fn guild_details(
    req: HttpRequest,
    path: web::Path<GuildId>,
    state: web::Data<MockApi>,
) -> Result<HttpResponse, APIError> {
    require_bearer(&req)?;
    let guild_id = path.into_inner();
    if guild_id != main_guild().id {
        return Err(APIError::NotFound(anyhow::anyhow!(
            "no guild with id {guild_id}"
        )));
    }
    let saved_settings = state.settings.lock().unwrap().get(&guild_id).cloned();
    Ok(HttpResponse::Ok().json(responses::GuildDetails {
        guild: main_guild(),
        roles: guild_roles(),
        channels: guild_channels(),
        saved_settings,
    }))
}

#[tracing::instrument(skip(req, state), ret)]
#[post("/settings/verification")]
pub async fn save_verification_settings(
    req: HttpRequest,
    details: web::Json<requests::SaveVerificationSettings>,
    state: web::Data<MockApi>,
) -> Result<HttpResponse, APIError> {
    require_bearer(&req)?;
    let details = details.into_inner();
    let mut settings = state.settings.lock().unwrap();
    settings.entry(details.guild_id).or_default().verification =
        Some(details.settings);
    Ok(HttpResponse::Ok().json(responses::SuccessMessage {
        message: "Verification settings saved.".into(),
    }))
}

#[tracing::instrument(skip(req, state), ret)]
#[post("/settings/moderation")]
pub async fn save_moderation_settings(
    req: HttpRequest,
    details: web::Json<requests::SaveModerationSettings>,
    state: web::Data<MockApi>,
) -> Result<HttpResponse, APIError> {
    require_bearer(&req)?;
    let details = details.into_inner();
    let mut settings = state.settings.lock().unwrap();
    settings.entry(details.guild_id).or_default().moderation =
        Some(details.settings);
    Ok(HttpResponse::Ok().json(responses::SuccessMessage {
        message: "Moderation settings saved.".into(),
    }))
}

#[tracing::instrument(skip(req, state), ret)]
#[post("/settings/logging")]
pub async fn save_logging_settings(
    req: HttpRequest,
    details: web::Json<requests::SaveLoggingSettings>,
    state: web::Data<MockApi>,
) -> Result<HttpResponse, APIError> {
    require_bearer(&req)?;
    let details = details.into_inner();
    let mut settings = state.settings.lock().unwrap();
    settings.entry(details.guild_id).or_default().logging =
        Some(details.settings);
    Ok(HttpResponse::Ok().json(responses::SuccessMessage {
        message: "Logging settings saved.".into(),
    }))
}

#[tracing::instrument(skip(req, state), ret)]
#[post("/settings/autorole")]
pub async fn save_auto_role_settings(
    req: HttpRequest,
    details: web::Json<requests::SaveAutoRoleSettings>,
    state: web::Data<MockApi>,
) -> Result<HttpResponse, APIError> {
    require_bearer(&req)?;
    let details = details.into_inner();
    let mut settings = state.settings.lock().unwrap();
    settings.entry(details.guild_id).or_default().auto_role =
        Some(details.settings);
    Ok(HttpResponse::Ok().json(responses::SuccessMessage {
        message: "Auto role settings saved.".into(),
    }))
}

#[tracing::instrument(skip(req, state), ret)]
#[post("/settings/staff")]
pub async fn save_staff_settings(
    req: HttpRequest,
    details: web::Json<requests::SaveStaffSettings>,
    state: web::Data<MockApi>,
) -> Result<HttpResponse, APIError> {
    require_bearer(&req)?;
    let details = details.into_inner();
    let mut settings = state.settings.lock().unwrap();
    settings.entry(details.guild_id).or_default().staff =
        Some(details.settings);
    Ok(HttpResponse::Ok().json(responses::SuccessMessage {
        message: "Staff settings saved.".into(),
    }))
}

/// Posting the embed requires a configured verification channel, so the
/// handler reads back whatever was last saved for the guild.
#[tracing::instrument(skip(req, state), ret)]
#[post("/settings/verification/embed")]
pub async fn post_verification_embed(
    req: HttpRequest,
    details: web::Json<requests::PostVerificationEmbed>,
    state: web::Data<MockApi>,
) -> Result<HttpResponse, APIError> {
    require_bearer(&req)?;
    let channel_id = state
        .settings
        .lock()
        .unwrap()
        .get(&details.guild_id)
        .and_then(|s| s.verification.as_ref())
        .and_then(|v| v.verification_channel_id.clone());
    match channel_id {
        Some(channel_id) => Ok(HttpResponse::Ok().json(
            responses::SuccessMessage {
                message: format!(
                    "Verification embed posted to <#{channel_id}>."
                ),
            },
        )),
        None => Err(APIError::BadRequest(anyhow::anyhow!(
            "no verification channel configured"
        ))),
    }
}

/// Mounted at the app root rather than under /api, matching the bot's
/// payment-processor routing.
#[tracing::instrument(skip(req), ret)]
#[post("/stripe/create-verification-session")]
pub async fn create_verification_session(
    req: HttpRequest,
    details: web::Json<requests::CreateVerificationSession>,
) -> Result<HttpResponse, APIError> {
    require_bearer(&req)?;
    Ok(HttpResponse::Ok().json(responses::VerificationSession {
        url: format!(
            "https://verify.stripe.com/start/test_{}",
            details.discord_id
        ),
    }))
}

/// Build the server, but not await it.
///
/// Binding to port 0 gets an OS-assigned port; the bound port is returned
/// alongside the server.
pub fn build(ip: &str, port: u16) -> std::io::Result<(Server, u16)> {
    let state = web::Data::new(MockApi {
        settings: Mutex::new(HashMap::from([(
            main_guild().id,
            saved_guild_settings(),
        )])),
    });

    let listener = TcpListener::bind(format!("{ip}:{port}"))?;
    let port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .service(api_services())
            .service(create_verification_session)
            .app_data(state.clone())
    })
    .listen(listener)?
    .run();
    Ok((server, port))
}

pub fn nelly() -> responses::CurrentUser {
    responses::CurrentUser {
        id: "80351110224678912".into(),
        username: "nelly".to_string(),
        global_name: Some("Nelly".to_string()),
        avatar: Some("8342729096ea3675442027381ff50dfe".to_string()),
        client_id: "157730590492196864".to_string(),
    }
}

pub fn nelly_profile() -> responses::ProfileDetails {
    responses::ProfileDetails {
        birthday: Some(jiff::civil::date(2000, 3, 15)),
        ban_count: 2,
        is_stripe_verified: false,
    }
}

/// The one guild the mock serves details for.
pub fn main_guild() -> Guild {
    Guild {
        id: "874103621938167810".into(),
        name: "Pixel Tavern".to_string(),
        icon: Some("1bbd0b8333d85557ea47bf1166441b55".to_string()),
    }
}

/// Unsorted, and includes the everyone role (id equal to the guild id),
/// matching what the platform reports.
pub fn guild_roles() -> Vec<Role> {
    vec![
        Role {
            id: "874103621938167810".into(),
            name: "@everyone".to_string(),
            color: 0,
            position: 0,
            icon: None,
            unicode_emoji: None,
        },
        Role {
            id: "874103622399541253".into(),
            name: "Citizen".to_string(),
            color: 0x95A5A6,
            position: 2,
            icon: None,
            unicode_emoji: None,
        },
        Role {
            id: "874103622399541250".into(),
            name: "Warden".to_string(),
            color: 0xE74C3C,
            position: 5,
            icon: Some("c6ef11fb8bf59c6a9104d67b5a4f75cd".to_string()),
            unicode_emoji: None,
        },
        Role {
            id: "874103622399541251".into(),
            name: "Sentinel".to_string(),
            color: 0x3498DB,
            position: 4,
            icon: None,
            unicode_emoji: Some("🛡️".to_string()),
        },
        Role {
            id: "874103622399541252".into(),
            name: "Keeper".to_string(),
            color: 0x2ECC71,
            position: 3,
            icon: None,
            unicode_emoji: None,
        },
        Role {
            id: "874103622399541254".into(),
            name: "Muted".to_string(),
            color: 0,
            position: 1,
            icon: None,
            unicode_emoji: None,
        },
    ]
}

pub fn guild_channels() -> Vec<Channel> {
    vec![
        Channel {
            id: "874103622575702016".into(),
            name: "general".to_string(),
        },
        Channel {
            id: "874103622575702017".into(),
            name: "verify-here".to_string(),
        },
        Channel {
            id: "874103622575702018".into(),
            name: "mod-log".to_string(),
        },
        Channel {
            id: "874103622575702019".into(),
            name: "message-log".to_string(),
        },
    ]
}

pub fn guild_summaries() -> Vec<responses::GuildSummary> {
    vec![
        responses::GuildSummary {
            id: main_guild().id,
            name: main_guild().name,
            icon: main_guild().icon,
            owner: false,
            bot_in_guild: true,
            can_manage: true,
        },
        responses::GuildSummary {
            id: "697544968118140928".into(),
            name: "Nelly's Hideout".to_string(),
            icon: None,
            owner: true,
            bot_in_guild: false,
            can_manage: true,
        },
        responses::GuildSummary {
            id: "935268443266436156".into(),
            name: "Lo-fi Lounge".to_string(),
            icon: Some("a2f41b8c39f8d55a17a4b56a38f1d3c2".to_string()),
            owner: false,
            bot_in_guild: true,
            can_manage: false,
        },
    ]
}

/// Settings the guild starts out with: verification, logging, and staff
/// configured; moderation and auto role never saved.
pub fn saved_guild_settings() -> GuildSettings {
    GuildSettings {
        verification: Some(VerificationSettings {
            verified_user_action: VerifiedJoinAction::GiveRole,
            unverified_user_action: UnverifiedJoinAction::GiveRole,
            verification_channel_id: Some("874103622575702017".into()),
            unverified_role_id: Some("874103622399541254".into()),
            verified_role_id: Some("874103622399541253".into()),
            verification_embed_message: "Welcome to Pixel Tavern! Verify to \
                                         unlock the rest of the server."
                .to_string(),
            age_gate: AgeGate {
                is_enabled: true,
                min_age: 16,
                max_age: 99,
                action: AgeGateAction::Kick,
            },
        }),
        moderation: None,
        logging: Some(LoggingSettings {
            action_log_channel_id: Some("874103622575702018".into()),
            message_log_channel_id: None,
        }),
        auto_role: None,
        staff: Some(StaffSettings {
            is_enabled: true,
            owner_role_id: Some("874103622399541250".into()),
            emergency_override_enabled: false,
            teams: vec![
                StaffTeam {
                    team_id: "team-1".to_string(),
                    team_name: "Moderators".to_string(),
                    roles: vec!["874103622399541251".into()],
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
                    team_name: "Helpers".to_string(),
                    roles: vec!["874103622399541252".into()],
                    permissions: TeamPermissions {
                        ban: PermissionLevel::None,
                        kick: PermissionLevel::None,
                        mute: PermissionLevel::Auth,
                        warn: PermissionLevel::Full,
                        blacklist: PermissionLevel::None,
                    },
                    can_authorize: Vec::new(),
                },
            ],
        }),
    }
}

/// Print a summary of the served mock data.
pub fn print_summary() {
    let guild = main_guild();
    let user = nelly();
    tracing::info!("📋 Available mock data:");
    tracing::info!("   🏰 Guild: {} ({})", guild.name, guild.id);
    for role in guild_roles() {
        tracing::info!("      🎭 {} ({})", role.name, role.id);
    }
    for channel in guild_channels() {
        tracing::info!("      #️⃣ {} ({})", channel.name, channel.id);
    }
    tracing::info!("   👤 User: {} ({})", user.username, user.id);
    tracing::info!(
        "   💾 Saved settings: verification, logging, staff \
         (moderation and auto role start unsaved)"
    );
}
