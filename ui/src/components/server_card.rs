use payloads::responses::GuildSummary;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::utils::{bot_invite_url, guild_icon_url};

#[derive(Properties, PartialEq)]
pub struct ServerCardProps {
    pub guild: GuildSummary,
    /// The bot's application id, for building invite links.
    pub client_id: AttrValue,
}

/// One server tile on the dashboard grid. Servers the user can manage
/// link into the settings pages once the bot is present, or out to the
/// bot invite when it is not. Everything else renders inert.
#[function_component]
pub fn ServerCard(props: &ServerCardProps) -> Html {
    let guild = &props.guild;
    let icon_url = guild_icon_url(&guild.id, guild.icon.as_deref());

    let status = if guild.can_manage && guild.bot_in_guild {
        html! { <p class="text-sm text-green-400">{"Manage Server"}</p> }
    } else if guild.can_manage {
        html! { <p class="text-sm text-blue-400">{"Add Bot"}</p> }
    } else {
        html! { <p class="text-sm text-gray-400">{"Member"}</p> }
    };

    let body = html! {
        <>
            <img
                src={icon_url}
                alt={format!("{} Icon", guild.name)}
                class="w-full h-32 object-cover"
            />
            <div class="p-4">
                <h3 class="font-bold text-lg truncate">{&guild.name}</h3>
                {status}
            </div>
        </>
    };

    let card_classes = "bg-gray-800 rounded-lg overflow-hidden block \
         relative hover:shadow-xl transition-shadow";

    if guild.can_manage && guild.bot_in_guild {
        let href = format!("{}#{}", Route::Verification.to_path(), guild.id);
        html! {
            <a {href} class={card_classes}>{body}</a>
        }
    } else if guild.can_manage {
        let href = bot_invite_url(&props.client_id, &guild.id);
        html! {
            <a {href} target="_blank" class={card_classes}>{body}</a>
        }
    } else {
        html! {
            <div class={card_classes}>{body}</div>
        }
    }
}
