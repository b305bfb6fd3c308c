use payloads::{Role, RoleId};
use yew::prelude::*;

use crate::utils::{color_hex, is_color_dark, role_icon_url};

#[derive(Properties, PartialEq)]
pub struct RoleBubblesProps {
    pub roles: Vec<Role>,
    pub on_remove: Callback<RoleId>,
}

/// Removable role pills tinted with each role's Discord color. Clicking
/// a pill removes the role from the team.
#[function_component]
pub fn RoleBubbles(props: &RoleBubblesProps) -> Html {
    html! {
        <div class="flex flex-wrap gap-2 bg-gray-800 p-2 rounded-md min-h-[40px]">
            {for props.roles.iter().map(|role| {
                let onclick = {
                    let on_remove = props.on_remove.clone();
                    let role_id = role.id.clone();
                    Callback::from(move |_| on_remove.emit(role_id.clone()))
                };
                let text_class = if is_color_dark(role.color) {
                    "text-white"
                } else {
                    "text-black"
                };
                let style = format!("background-color: {}", color_hex(role.color));
                html! {
                    <span
                        {onclick}
                        {style}
                        class={classes!(
                            "inline-flex", "items-center", "gap-1", "px-3",
                            "py-1", "rounded-full", "text-sm", "font-medium",
                            "cursor-pointer", text_class,
                        )}
                        title="Click to remove"
                    >
                        {match (&role.icon, &role.unicode_emoji) {
                            (Some(icon), _) => html! {
                                <img
                                    src={role_icon_url(&role.id, icon)}
                                    class="w-4 h-4 rounded-full"
                                    alt=""
                                />
                            },
                            (None, Some(emoji)) => html! {
                                <span>{emoji}</span>
                            },
                            (None, None) => html! {},
                        }}
                        {&role.name}
                        <span class="ml-1">{"\u{00d7}"}</span>
                    </span>
                }
            })}
        </div>
    }
}
