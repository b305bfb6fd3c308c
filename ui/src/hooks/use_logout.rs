use crate::{Route, session};
use yew::prelude::*;
use yew_router::prelude::*;

/// Clears the stored session token and returns to the entry page. The
/// token only lives in local storage, so there is no backend call to
/// make.
#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let navigator = use_navigator().unwrap();

    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        session::clear_access_token();
        navigator.push(&Route::Home);
    })
}
