use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::toast::ToastContainer;
use crate::contexts::toast::ToastProvider;
use crate::pages::{
    AutoRolePage, DashboardPage, HomePage, LoggingPage, ModerationPage,
    NotFoundPage, StaffPage, VerificationPage,
};

mod components;
mod contexts;
mod forms;
mod hooks;
mod logs;
mod pages;
mod session;
mod utils;

/// Where the bot backend lives. Configurable at build time, with a
/// same-origin fallback for deployments that serve the UI from the bot
/// process itself.
pub fn backend_address() -> String {
    option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            let window = web_sys::window().unwrap();
            let location = window.location();
            location.origin().unwrap()
        })
}

/// API client carrying the stored session token, when one exists.
pub fn get_api_client() -> APIClient {
    let address = backend_address();
    match session::access_token() {
        Some(token) => APIClient::with_token(address, token),
        None => APIClient::new(address),
    }
}

#[derive(Clone, Routable, PartialEq)]
enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/verification")]
    Verification,
    #[at("/moderation")]
    Moderation,
    #[at("/logging")]
    Logging,
    #[at("/autorole")]
    AutoRole,
    #[at("/staff")]
    Staff,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <ToastProvider>
            <BrowserRouter>
                <div class="min-h-screen bg-gray-900 text-white">
                    <Switch<Route> render={switch} />
                </div>
            </BrowserRouter>
            <ToastContainer />
        </ToastProvider>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Verification => html! { <VerificationPage /> },
        Route::Moderation => html! { <ModerationPage /> },
        Route::Logging => html! { <LoggingPage /> },
        Route::AutoRole => html! { <AutoRolePage /> },
        Route::Staff => html! { <StaffPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
