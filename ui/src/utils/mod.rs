//! Asset URL builders and small display helpers shared across pages.

use payloads::{GuildId, RoleId, UserId};

const CDN_BASE: &str = "https://cdn.discordapp.com";

/// Guild icon, or the default placeholder when none is set.
pub fn guild_icon_url(guild_id: &GuildId, icon: Option<&str>) -> String {
    match icon {
        Some(hash) => format!("{CDN_BASE}/icons/{guild_id}/{hash}.png"),
        None => format!("{CDN_BASE}/embed/avatars/1.png"),
    }
}

/// User avatar, or the default placeholder when none is set.
pub fn avatar_url(user_id: &UserId, avatar: Option<&str>) -> String {
    match avatar {
        Some(hash) => format!("{CDN_BASE}/avatars/{user_id}/{hash}.png"),
        None => format!("{CDN_BASE}/embed/avatars/0.png"),
    }
}

pub fn role_icon_url(role_id: &RoleId, icon: &str) -> String {
    format!("{CDN_BASE}/role-icons/{role_id}/{icon}.png")
}

/// OAuth URL that invites the bot into a guild with the permissions it
/// needs.
pub fn bot_invite_url(client_id: &str, guild_id: &GuildId) -> String {
    format!(
        "https://discord.com/api/oauth2/authorize?client_id={client_id}&permissions=8&scope=bot%20applications.commands&guild_id={guild_id}&disable_guild_select=true"
    )
}

/// Packed 0xRRGGBB color as a css hex string.
pub fn color_hex(color: u32) -> String {
    format!("#{color:06x}")
}

/// Perceived luminance check for picking readable text on a colored
/// background.
pub fn is_color_dark(color: u32) -> bool {
    let r = ((color >> 16) & 0xff) as f64;
    let g = ((color >> 8) & 0xff) as f64;
    let b = (color & 0xff) as f64;
    0.2126 * r + 0.7152 * g + 0.0722 * b < 128.0
}

/// Split comma-separated textarea input into entries, dropping blanks.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

/// Whole years from `birthday` to today.
pub fn age_from_birthday(birthday: jiff::civil::Date) -> i16 {
    age_on(birthday, jiff::Zoned::now().date())
}

fn age_on(birthday: jiff::civil::Date, today: jiff::civil::Date) -> i16 {
    let mut age = today.year() - birthday.year();
    if (today.month(), today.day()) < (birthday.month(), birthday.day()) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn color_hex_pads_to_six_digits() {
        assert_eq!(color_hex(0x95A5A6), "#95a5a6");
        assert_eq!(color_hex(0), "#000000");
        assert_eq!(color_hex(0xFF), "#0000ff");
    }

    #[test]
    fn dark_colors_get_light_text() {
        assert!(is_color_dark(0));
        assert!(is_color_dark(0xE74C3C));
        assert!(!is_color_dark(0xFFFFFF));
        assert!(!is_color_dark(0x95A5A6));
    }

    #[test]
    fn split_list_trims_and_drops_blanks() {
        assert_eq!(
            split_list(" mod , raid,, spam "),
            vec!["mod", "raid", "spam"]
        );
        assert!(split_list("").is_empty());
        assert!(split_list(" , ,").is_empty());
    }

    #[test]
    fn age_counts_whole_years() {
        let birthday = date(2000, 3, 15);
        assert_eq!(age_on(birthday, date(2026, 3, 14)), 25);
        assert_eq!(age_on(birthday, date(2026, 3, 15)), 26);
        assert_eq!(age_on(birthday, date(2026, 8, 26)), 26);
    }
}
