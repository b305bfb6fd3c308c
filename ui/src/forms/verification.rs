use payloads::{
    AgeGate, AgeGateAction, ChannelId, DEFAULT_VERIFICATION_EMBED_MESSAGE,
    RoleId, UnverifiedJoinAction, VerificationSettings, VerifiedJoinAction,
};

#[derive(Debug, Clone, PartialEq)]
pub struct VerificationForm {
    pub verified_user_action: VerifiedJoinAction,
    pub unverified_user_action: UnverifiedJoinAction,
    pub verification_channel_id: Option<ChannelId>,
    pub unverified_role_id: Option<RoleId>,
    pub verified_role_id: Option<RoleId>,
    pub embed_message: String,
    pub age_gate_enabled: bool,
    pub min_age: String,
    pub max_age: String,
    pub age_gate_action: AgeGateAction,
}

impl VerificationForm {
    pub fn from_saved(saved: Option<&VerificationSettings>) -> Self {
        let settings = saved.cloned().unwrap_or_default();
        // An embed message that was saved as empty falls back to the
        // stock text when the form loads.
        let embed_message = if settings.verification_embed_message.is_empty()
        {
            DEFAULT_VERIFICATION_EMBED_MESSAGE.to_string()
        } else {
            settings.verification_embed_message
        };
        Self {
            verified_user_action: settings.verified_user_action,
            unverified_user_action: settings.unverified_user_action,
            verification_channel_id: settings.verification_channel_id,
            unverified_role_id: settings.unverified_role_id,
            verified_role_id: settings.verified_role_id,
            embed_message,
            age_gate_enabled: settings.age_gate.is_enabled,
            min_age: settings.age_gate.min_age.to_string(),
            max_age: settings.age_gate.max_age.to_string(),
            age_gate_action: settings.age_gate.action,
        }
    }

    pub fn to_settings(&self) -> VerificationSettings {
        VerificationSettings {
            verified_user_action: self.verified_user_action,
            unverified_user_action: self.unverified_user_action,
            verification_channel_id: self.verification_channel_id.clone(),
            unverified_role_id: self.unverified_role_id.clone(),
            verified_role_id: self.verified_role_id.clone(),
            verification_embed_message: self.embed_message.clone(),
            age_gate: AgeGate {
                is_enabled: self.age_gate_enabled,
                min_age: self.min_age.parse().unwrap_or(13),
                max_age: self.max_age.parse().unwrap_or(99),
                action: self.age_gate_action,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsaved_guild_gets_stock_defaults() {
        let form = VerificationForm::from_saved(None);
        assert_eq!(form.verified_user_action, VerifiedJoinAction::None);
        assert_eq!(
            form.unverified_user_action,
            UnverifiedJoinAction::GiveRole
        );
        assert_eq!(form.verification_channel_id, None);
        assert_eq!(form.embed_message, DEFAULT_VERIFICATION_EMBED_MESSAGE);
        assert!(!form.age_gate_enabled);
        assert_eq!(form.min_age, "13");
        assert_eq!(form.max_age, "99");
    }

    #[test]
    fn empty_saved_embed_falls_back_to_stock_text() {
        let saved = VerificationSettings {
            verification_embed_message: String::new(),
            ..Default::default()
        };
        let form = VerificationForm::from_saved(Some(&saved));
        assert_eq!(form.embed_message, DEFAULT_VERIFICATION_EMBED_MESSAGE);
    }

    #[test]
    fn unparseable_ages_fall_back_on_submit() {
        let mut form = VerificationForm::from_saved(None);
        form.min_age = "abc".to_string();
        form.max_age = String::new();
        let settings = form.to_settings();
        assert_eq!(settings.age_gate.min_age, 13);
        assert_eq!(settings.age_gate.max_age, 99);
    }

    #[test]
    fn saved_settings_round_trip_through_the_form() {
        let saved = VerificationSettings {
            verified_user_action: VerifiedJoinAction::GiveRole,
            unverified_user_action: UnverifiedJoinAction::Kick,
            verification_channel_id: Some(ChannelId::from("100")),
            unverified_role_id: Some(RoleId::from("200")),
            verified_role_id: Some(RoleId::from("300")),
            verification_embed_message: "Welcome aboard.".to_string(),
            age_gate: AgeGate {
                is_enabled: true,
                min_age: 16,
                max_age: 30,
                action: AgeGateAction::Ban,
            },
        };
        let form = VerificationForm::from_saved(Some(&saved));
        assert_eq!(form.to_settings(), saved);
    }
}
