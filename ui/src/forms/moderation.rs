use payloads::{
    ContentFiltering, DurationUnit, JoinGate, ModerationSettings,
    NoAvatarAction, TierAction, WarningSystem, WarningTier,
};

use crate::utils::{join_list, split_list};

/// One warning-escalation row. Counts and durations stay as typed until
/// submit.
#[derive(Debug, Clone, PartialEq)]
pub struct TierForm {
    pub warn_count: String,
    pub action: TierAction,
    pub duration: String,
    pub duration_unit: DurationUnit,
}

impl TierForm {
    fn from_saved(tier: &WarningTier) -> Self {
        Self {
            warn_count: tier.warn_count.to_string(),
            action: tier.action,
            duration: tier.duration.to_string(),
            duration_unit: tier.duration_unit,
        }
    }

    fn to_tier(&self) -> WarningTier {
        WarningTier {
            warn_count: self.warn_count.parse().unwrap_or(1),
            action: self.action,
            duration: self.duration.parse().unwrap_or(0),
            duration_unit: self.duration_unit,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModerationForm {
    pub no_avatar_action: NoAvatarAction,
    pub min_account_age_days: String,
    /// Comma-separated, split into a list on submit.
    pub banned_usernames: String,
    pub banned_words: String,
    pub block_invites: bool,
    pub block_mass_mention: bool,
    pub block_caps: bool,
    pub tiers: Vec<TierForm>,
}

impl ModerationForm {
    pub fn from_saved(saved: Option<&ModerationSettings>) -> Self {
        let settings = saved.cloned().unwrap_or_default();
        Self {
            no_avatar_action: settings.join_gate.no_avatar_action,
            min_account_age_days: settings
                .join_gate
                .min_account_age_days
                .to_string(),
            banned_usernames: join_list(&settings.join_gate.banned_usernames),
            banned_words: join_list(
                &settings.content_filtering.banned_words,
            ),
            block_invites: settings.content_filtering.block_invites,
            block_mass_mention: settings.content_filtering.block_mass_mention,
            block_caps: settings.content_filtering.block_caps,
            tiers: settings
                .warning_system
                .tiers
                .iter()
                .map(TierForm::from_saved)
                .collect(),
        }
    }

    pub fn to_settings(&self) -> ModerationSettings {
        ModerationSettings {
            join_gate: JoinGate {
                no_avatar_action: self.no_avatar_action,
                min_account_age_days: self
                    .min_account_age_days
                    .parse()
                    .unwrap_or(0),
                banned_usernames: split_list(&self.banned_usernames),
            },
            content_filtering: ContentFiltering {
                banned_words: split_list(&self.banned_words),
                block_invites: self.block_invites,
                block_mass_mention: self.block_mass_mention,
                block_caps: self.block_caps,
            },
            warning_system: WarningSystem {
                tiers: self.tiers.iter().map(TierForm::to_tier).collect(),
            },
        }
    }

    pub fn add_tier(&mut self) {
        self.tiers.push(TierForm {
            warn_count: String::new(),
            action: TierAction::Mute,
            duration: String::new(),
            duration_unit: DurationUnit::Minutes,
        });
    }

    pub fn remove_tier(&mut self, index: usize) {
        if index < self.tiers.len() {
            self.tiers.remove(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_lists_split_and_rejoin() {
        let mut form = ModerationForm::from_saved(None);
        form.banned_usernames = "grief, , raid ,".to_string();
        form.banned_words = String::new();
        let settings = form.to_settings();
        assert_eq!(
            settings.join_gate.banned_usernames,
            vec!["grief".to_string(), "raid".to_string()]
        );
        assert!(settings.content_filtering.banned_words.is_empty());

        let reloaded = ModerationForm::from_saved(Some(&settings));
        assert_eq!(reloaded.banned_usernames, "grief, raid");
    }

    #[test]
    fn new_tier_starts_blank_with_mute_in_minutes() {
        let mut form = ModerationForm::from_saved(None);
        form.add_tier();
        let tier = &form.tiers[0];
        assert_eq!(tier.warn_count, "");
        assert_eq!(tier.action, TierAction::Mute);
        assert_eq!(tier.duration, "");
        assert_eq!(tier.duration_unit, DurationUnit::Minutes);
    }

    #[test]
    fn blank_tier_fields_get_usable_numbers_on_submit() {
        let mut form = ModerationForm::from_saved(None);
        form.add_tier();
        let settings = form.to_settings();
        assert_eq!(settings.warning_system.tiers[0].warn_count, 1);
        assert_eq!(settings.warning_system.tiers[0].duration, 0);
    }

    #[test]
    fn remove_tier_drops_the_right_row() {
        let mut form = ModerationForm::from_saved(None);
        form.add_tier();
        form.add_tier();
        form.tiers[0].warn_count = "3".to_string();
        form.tiers[1].warn_count = "5".to_string();
        form.remove_tier(0);
        assert_eq!(form.tiers.len(), 1);
        assert_eq!(form.tiers[0].warn_count, "5");
        // Out-of-range removals are ignored.
        form.remove_tier(7);
        assert_eq!(form.tiers.len(), 1);
    }
}
