use yew::prelude::*;

#[function_component]
pub fn NotFoundPage() -> Html {
    html! {
        <div class="text-center py-24">
            <h1 class="text-4xl font-bold">{"404"}</h1>
            <p class="text-gray-400">{"Page not found"}</p>
        </div>
    }
}
