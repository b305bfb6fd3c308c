pub mod use_fetch;
pub mod use_guild_details;
pub mod use_logout;
pub mod use_title;

pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_guild_details::use_guild_details;
pub use use_logout::use_logout;
pub use use_title::use_title;

/// Tracks whether data has been fetched yet, so an empty result is
/// distinguishable from a fetch that has not happened.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, FetchState::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            FetchState::Fetched(data) => Some(data),
            FetchState::NotFetched => None,
        }
    }
}
