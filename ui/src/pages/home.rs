use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_title;
use crate::{Route, backend_address, session};

/// Entry page. Logging in happens against the bot backend's OAuth
/// endpoint; the callback stores the token and lands on the dashboard.
#[function_component]
pub fn HomePage() -> Html {
    use_title("Warden");

    let login_url = format!("{}/login", backend_address());
    let has_session = session::access_token().is_some();

    html! {
        <div class="flex flex-col items-center justify-center min-h-screen text-center px-4">
            <h1 class="text-5xl font-bold mb-4">{"Warden"}</h1>
            <p class="text-gray-400 text-lg mb-8 max-w-md">
                {"Verification, moderation, and staff management for your \
                  Discord community."}
            </p>
            {if has_session {
                html! {
                    <Link<Route>
                        to={Route::Dashboard}
                        classes="bg-blue-600 hover:bg-blue-700 text-white font-bold py-3 px-8 rounded-lg text-lg"
                    >
                        {"Go to Dashboard"}
                    </Link<Route>>
                }
            } else {
                html! {
                    <a
                        href={login_url}
                        class="bg-indigo-600 hover:bg-indigo-700 text-white font-bold py-3 px-8 rounded-lg text-lg"
                    >
                        {"Continue with Discord"}
                    </a>
                }
            }}
        </div>
    }
}
