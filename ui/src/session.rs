//! Browser session state: the stored access token and the guild selected
//! through the URL fragment.

use payloads::GuildId;
use web_sys::Storage;

/// Key the OAuth callback leaves the bearer token under.
pub const ACCESS_TOKEN_KEY: &str = "discord_access_token";

fn local_storage() -> Option<Storage> {
    let window = web_sys::window().unwrap();
    window.local_storage().ok().flatten()
}

/// The stored access token, if the user has gone through the login flow.
pub fn access_token() -> Option<String> {
    local_storage()?.get_item(ACCESS_TOKEN_KEY).ok().flatten()
}

/// Drop the stored token, ending the session.
pub fn clear_access_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
}

/// The guild selected through the URL fragment, e.g. `/staff#1234`.
pub fn guild_from_fragment() -> Option<GuildId> {
    let window = web_sys::window().unwrap();
    let hash = window.location().hash().ok()?;
    let guild_id = hash.strip_prefix('#').unwrap_or(&hash);
    if guild_id.is_empty() {
        None
    } else {
        Some(GuildId::from(guild_id))
    }
}
