use payloads::{Channel, Guild, GuildId, GuildSettings, Role};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::ErrorPanel;
use crate::components::layout::Sidebar;
use crate::hooks::use_guild_details;
use crate::session;
use crate::utils::guild_icon_url;

/// Everything a settings panel needs about the selected guild.
#[derive(Clone, PartialEq)]
pub struct GuildPanelContext {
    pub guild_id: GuildId,
    pub guild: Guild,
    /// Excludes the implicit everyone role, highest position first.
    pub roles: Vec<Role>,
    pub channels: Vec<Channel>,
    pub saved: Option<GuildSettings>,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub active: Route,
    pub children: Callback<GuildPanelContext, Html>,
}

/// Shared scaffolding for the per-guild settings pages: runs the
/// session and guild guards, fetches guild details, and renders the
/// sidebar around the panel.
///
/// Both guards redirect without touching the network. No stored token
/// sends the user back to the entry page; no guild fragment sends them
/// back to the server list.
#[function_component]
pub fn GuildPageWrapper(props: &Props) -> Html {
    let navigator = use_navigator().unwrap();
    let token = session::access_token();
    let guild_id = session::guild_from_fragment();

    let guards_passed = token.is_some() && guild_id.is_some();

    {
        let navigator = navigator.clone();
        let token_missing = token.is_none();
        let guild_missing = guild_id.is_none();
        use_effect_with(
            (token_missing, guild_missing),
            move |&(token_missing, guild_missing)| {
                if token_missing {
                    navigator.push(&Route::Home);
                } else if guild_missing {
                    navigator.push(&Route::Dashboard);
                }
            },
        );
    }

    let details_hook = use_guild_details(if guards_passed {
        guild_id.clone()
    } else {
        None
    });

    // Redirecting; render nothing in the meantime.
    let Some(guild_id) = guild_id else {
        return html! {};
    };
    if token.is_none() {
        return html! {};
    }

    match details_hook.data.as_ref() {
        Some(details) => {
            let mut roles: Vec<Role> = details
                .roles
                .iter()
                .filter(|role| role.id.0 != details.guild.id.0)
                .cloned()
                .collect();
            roles.sort_by_key(|role| std::cmp::Reverse(role.position));

            let context = GuildPanelContext {
                guild_id: guild_id.clone(),
                guild: details.guild.clone(),
                roles,
                channels: details.channels.clone(),
                saved: details.saved_settings.clone(),
            };

            html! {
                <div class="flex min-h-screen">
                    <aside class="w-64 shrink-0 bg-gray-800 border-r border-gray-700 p-4 space-y-6">
                        <div class="flex items-center gap-3">
                            <img
                                src={guild_icon_url(&context.guild.id, context.guild.icon.as_deref())}
                                alt="Server Icon"
                                class="w-16 h-16 rounded-full"
                            />
                            <h1 class="text-xl font-bold truncate">{&context.guild.name}</h1>
                        </div>
                        <Sidebar guild_id={guild_id.clone()} active={props.active.clone()} />
                    </aside>
                    <main class="flex-1 p-8">
                        {props.children.emit(context)}
                    </main>
                </div>
            }
        }
        None => {
            if let Some(error) = &details_hook.error {
                html! { <ErrorPanel message={error.clone()} /> }
            } else {
                html! {
                    <div class="text-center py-12">
                        <p class="text-gray-400">{"Loading server data..."}</p>
                    </div>
                }
            }
        }
    }
}
