use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ErrorPanelProps {
    pub message: String,
}

/// Full-page failure panel for the settings pages. Recovery is left to
/// the user; there is no automatic redirect.
#[function_component]
pub fn ErrorPanel(props: &ErrorPanelProps) -> Html {
    html! {
        <div class="text-center py-16">
            <h1 class="text-4xl font-bold text-red-500">{"An Error Occurred"}</h1>
            <p class="text-gray-400 mt-4">{"Could not load server data."}</p>
            <p class="text-gray-500 text-sm mt-2">
                {format!("Error: {}", props.message)}
            </p>
            <Link<Route>
                to={Route::Dashboard}
                classes="mt-6 inline-block bg-blue-600 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded-lg"
            >
                {"Back to Server List"}
            </Link<Route>>
        </div>
    }
}
