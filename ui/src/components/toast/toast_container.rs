use super::ToastItem;
use crate::contexts::toast::ToastContext;
use yew::prelude::*;

/// Renders the single toast slot. Keyed on the toast id so a
/// replacement remounts the item rather than morphing it in place.
#[function_component]
pub fn ToastContainer() -> Html {
    let toast_context = use_context::<ToastContext>();

    let toast = match toast_context {
        Some(context) => context.current.clone(),
        None => None,
    };

    let Some(toast) = toast else {
        return html! {};
    };

    let key = toast.id.to_string();
    html! {
        <div class="fixed top-4 right-4 z-50 max-w-sm w-full">
            <ToastItem {key} {toast} />
        </div>
    }
}
