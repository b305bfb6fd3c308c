use payloads::GuildId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub guild_id: GuildId,
    pub active: Route,
}

/// Settings navigation. Links are plain anchors carrying the selected
/// guild in the URL fragment, so following one hands the guild over to
/// the next page.
#[function_component]
pub fn Sidebar(props: &SidebarProps) -> Html {
    let entries = [
        (Route::Verification, "Verification"),
        (Route::Moderation, "Moderation"),
        (Route::Logging, "Logging"),
        (Route::AutoRole, "Auto Role"),
        (Route::Staff, "Staff"),
    ];

    html! {
        <nav class="space-y-1">
            {for entries.iter().map(|(route, label)| {
                let href = format!("{}#{}", route.to_path(), props.guild_id);
                let classes = if *route == props.active {
                    "block px-4 py-2 rounded-lg bg-gray-700 text-white font-semibold"
                } else {
                    "block px-4 py-2 rounded-lg text-gray-300 hover:bg-gray-700 hover:text-white"
                };
                html! {
                    <a {href} class={classes}>{*label}</a>
                }
            })}
            <div class="pt-4 mt-4 border-t border-gray-700">
                <Link<Route>
                    to={Route::Dashboard}
                    classes="block px-4 py-2 rounded-lg text-gray-300 hover:bg-gray-700 hover:text-white"
                >
                    {"Back to Server List"}
                </Link<Route>>
            </div>
        </nav>
    }
}
