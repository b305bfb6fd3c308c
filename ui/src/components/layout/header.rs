use payloads::responses::CurrentUser;
use yew::prelude::*;

use crate::hooks::use_logout;
use crate::utils::avatar_url;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub user: CurrentUser,
}

#[function_component]
pub fn Header(props: &HeaderProps) -> Html {
    let on_logout = use_logout();
    let user = &props.user;

    html! {
        <header class="bg-gray-800 border-b border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0">
                        <h1 class="text-xl font-semibold text-white">{"Warden"}</h1>
                    </div>
                    <div class="flex items-center gap-3">
                        <span class="font-semibold hidden sm:block">{&user.username}</span>
                        <img
                            src={avatar_url(&user.id, user.avatar.as_deref())}
                            alt="User Avatar"
                            class="w-10 h-10 rounded-full"
                        />
                        <a
                            href="#"
                            onclick={on_logout}
                            class="bg-red-600 hover:bg-red-700 text-white font-bold py-2 px-4 rounded-lg text-sm"
                        >
                            {"Logout"}
                        </a>
                    </div>
                </div>
            </div>
        </header>
    }
}
