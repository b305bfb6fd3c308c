use payloads::requests;
use payloads::responses::{CurrentUser, GuildSummary, ProfileDetails};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ServerCard;
use crate::components::layout::Header;
use crate::contexts::toast::use_toast;
use crate::hooks::{use_fetch, use_title};
use crate::utils::{age_from_birthday, avatar_url};
use crate::{Route, get_api_client, session};

#[derive(Clone, PartialEq)]
struct DashboardData {
    user: CurrentUser,
    guilds: Vec<GuildSummary>,
}

#[function_component]
pub fn DashboardPage() -> Html {
    use_title("Dashboard - Warden");
    let navigator = use_navigator().unwrap();
    let has_session = session::access_token().is_some();

    {
        let navigator = navigator.clone();
        use_effect_with(has_session, move |&has_session| {
            if !has_session {
                navigator.push(&Route::Home);
            }
        });
    }

    // The user and their guild list make or break the page, so they load
    // together.
    let dashboard = use_fetch((), has_session, || async move {
        let client = get_api_client();
        let (user, guilds) =
            futures::join!(client.current_user(), client.user_guilds());
        Ok(DashboardData {
            user: user.map_err(|e| e.to_string())?,
            guilds: guilds.map_err(|e| e.to_string())?,
        })
    });

    // Cross-guild profile data only feeds the stat chips; the dashboard
    // still renders without it.
    let profile = use_fetch((), has_session, || async move {
        let client = get_api_client();
        client.profile_details().await.map_err(|e| e.to_string())
    });

    {
        use_effect_with(profile.error.clone(), |error| {
            if let Some(error) = error {
                tracing::warn!("failed to load profile details: {error}");
            }
        });
    }

    // A failed load usually means the token expired. Drop it and send
    // the user back to the entry page after they have had a moment to
    // read the message.
    {
        let navigator = navigator.clone();
        use_effect_with(dashboard.error.clone(), move |error| {
            if let Some(error) = error {
                tracing::error!("failed to load dashboard: {error}");
                session::clear_access_token();
                yew::platform::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(3_000).await;
                    navigator.push(&Route::Home);
                });
            }
        });
    }

    if !has_session {
        return html! {};
    }

    if dashboard.error.is_some() {
        return html! {
            <p class="text-center mt-20 text-gray-400">
                {"Failed to load dashboard. Please try logging in again."}
            </p>
        };
    }

    let Some(data) = dashboard.data.as_ref() else {
        return html! {
            <p class="text-center mt-20 text-gray-400">
                {"Loading dashboard..."}
            </p>
        };
    };

    html! {
        <>
            <Header user={data.user.clone()} />
            <main class="max-w-7xl mx-auto p-4 md:p-8">
                <ProfileSection
                    user={data.user.clone()}
                    guilds={data.guilds.clone()}
                    profile={profile.data.as_ref().cloned()}
                />
                <h2 class="text-2xl font-bold mb-4">{"Your Servers"}</h2>
                <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6">
                    {if data.guilds.is_empty() {
                        html! {
                            <p class="col-span-full text-center text-gray-400">
                                {"You are not in any servers."}
                            </p>
                        }
                    } else {
                        data.guilds
                            .iter()
                            .map(|guild| {
                                html! {
                                    <ServerCard
                                        guild={guild.clone()}
                                        client_id={data.user.client_id.clone()}
                                    />
                                }
                            })
                            .collect::<Html>()
                    }}
                </div>
            </main>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct ProfileSectionProps {
    pub user: CurrentUser,
    pub guilds: Vec<GuildSummary>,
    pub profile: Option<ProfileDetails>,
}

#[function_component]
fn ProfileSection(props: &ProfileSectionProps) -> Html {
    let toast = use_toast();
    let user = &props.user;

    let display_name = user
        .global_name
        .clone()
        .unwrap_or_else(|| user.username.clone());

    let age = props
        .profile
        .as_ref()
        .and_then(|profile| profile.birthday)
        .map(|birthday| age_from_birthday(birthday).to_string())
        .unwrap_or_else(|| "Not Set".to_string());
    let ban_count = props
        .profile
        .as_ref()
        .map(|profile| profile.ban_count)
        .unwrap_or(0);
    let verification_level = match &props.profile {
        Some(profile) if profile.is_stripe_verified => "Verified",
        _ => "Unverified",
    };

    let owned_guilds: Vec<&GuildSummary> =
        props.guilds.iter().filter(|guild| guild.owner).collect();

    let on_verify = {
        let toast = toast.clone();
        let discord_id = user.id.clone();
        Callback::from(move |_: MouseEvent| {
            let toast = toast.clone();
            let discord_id = discord_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let client = get_api_client();
                let request =
                    requests::CreateVerificationSession { discord_id };
                match client.create_verification_session(&request).await {
                    Ok(verification) => {
                        let window = web_sys::window().unwrap();
                        let _ = window.location().set_href(&verification.url);
                    }
                    Err(e) => {
                        tracing::error!(
                            "failed to create verification session: {e}"
                        );
                        toast.error(
                            "Could not start the verification process. \
                             Please try again later.",
                        );
                    }
                }
            });
        })
    };

    html! {
        <section class="bg-gray-800 rounded-lg p-6 mb-8">
            <div class="flex flex-col md:flex-row items-center gap-6">
                <img
                    src={avatar_url(&user.id, user.avatar.as_deref())}
                    alt="User Avatar"
                    class="w-32 h-32 rounded-full border-4 border-gray-700"
                />
                <div class="flex-1">
                    <h2 class="text-3xl font-bold">{display_name}</h2>
                    <p class="text-gray-400">
                        {format!("@{} ({})", user.username, user.id)}
                    </p>
                    <div class="flex flex-wrap gap-4 mt-4 text-sm">
                        <div class="bg-gray-700 p-2 rounded-md">
                            <strong>{"Age: "}</strong>{age}
                        </div>
                        <div class="bg-gray-700 p-2 rounded-md">
                            <strong>{"Bans in Network: "}</strong>{ban_count}
                        </div>
                        <div class="bg-gray-700 p-2 rounded-md">
                            <strong>{"Verification Level: "}</strong>
                            {verification_level}
                        </div>
                    </div>
                </div>
                <div class="flex flex-col gap-2">
                    <button
                        onclick={on_verify}
                        class="bg-blue-600 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded-lg w-full"
                    >
                        {"Increase Verification"}
                    </button>
                </div>
            </div>
            {if owned_guilds.is_empty() {
                html! {}
            } else {
                html! {
                    <div class="mt-6 border-t border-gray-700 pt-4">
                        <h3 class="font-bold mb-2">{"Servers You Own:"}</h3>
                        <div class="flex flex-wrap gap-2">
                            {for owned_guilds.iter().map(|guild| {
                                html! {
                                    <span class="bg-gray-700 text-xs font-semibold px-2.5 py-1 rounded-full">
                                        {&guild.name}
                                    </span>
                                }
                            })}
                        </div>
                    </div>
                }
            }}
        </section>
    }
}
