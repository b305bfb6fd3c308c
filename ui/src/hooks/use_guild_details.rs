use payloads::{GuildId, responses};
use yew::prelude::*;

use super::{FetchHookReturn, use_fetch};
use crate::get_api_client;

/// Fetch the guild, its roles and channels, and any saved settings.
///
/// Passing `None` issues no request. The settings pages use that to keep
/// the network idle until the session and guild guards have passed.
#[hook]
pub fn use_guild_details(
    guild_id: Option<GuildId>,
) -> FetchHookReturn<responses::GuildDetails> {
    let enabled = guild_id.is_some();
    use_fetch(guild_id.clone(), enabled, move || {
        let guild_id = guild_id.clone();
        async move {
            let guild_id =
                guild_id.ok_or_else(|| "no guild selected".to_string())?;
            let api_client = get_api_client();
            api_client
                .guild_details(&guild_id)
                .await
                .map_err(|e| e.to_string())
        }
    })
}
