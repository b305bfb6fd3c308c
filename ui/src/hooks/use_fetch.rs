use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::FetchState;

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl<T: Clone> FetchHookReturn<T> {
    /// Returns true if this is the initial load (data not yet fetched,
    /// currently loading, and no error).
    pub fn is_initial_loading(&self) -> bool {
        self.is_loading && !self.data.is_fetched() && self.error.is_none()
    }
}

/// Generic fetch hook composer.
///
/// Automatically fetches on mount and provides refetch capability.
/// The fetch function captures dependencies from the closure, and the
/// deps parameter is used only for dependency tracking in use_callback
/// and use_effect_with.
///
/// Nothing is fetched while `enabled` is false, so callers can hold off
/// until their guards have passed.
///
/// # Example
///
/// ```ignore
/// #[hook]
/// pub fn use_user_data(user_id: UserId) -> FetchHookReturn<UserData> {
///     use_fetch(
///         user_id.clone(),
///         true,
///         move || {
///             let user_id = user_id.clone();
///             async move {
///                 let api_client = get_api_client();
///                 api_client
///                     .get_user_data(&user_id)
///                     .await
///                     .map_err(|e| e.to_string())
///             }
///         },
///     )
/// }
/// ```
#[hook]
pub fn use_fetch<T, D, F, Fut>(
    deps: D,
    enabled: bool,
    fetch_fn: F,
) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let data = use_state(|| FetchState::NotFetched);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let refetch = {
        let data = data.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_, _| {
            let data = data.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();
            let fetch_fn = fetch_fn.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                match fetch_fn().await {
                    Ok(result) => {
                        data.set(FetchState::Fetched(result));
                        error.set(None);
                    }
                    Err(e) => {
                        error.set(Some(e));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    // Auto-fetch on mount and when deps change
    {
        let refetch = refetch.clone();
        let is_loading_clone = is_loading.clone();

        use_effect_with((deps, enabled), move |_| {
            if enabled && !*is_loading_clone {
                refetch.emit(());
            }
        });
    }

    FetchHookReturn {
        data: (*data).clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
