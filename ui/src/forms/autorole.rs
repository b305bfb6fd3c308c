use payloads::{AutoRoleSettings, RoleId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutoRoleForm {
    pub join_role_id: Option<RoleId>,
}

impl AutoRoleForm {
    pub fn from_saved(saved: Option<&AutoRoleSettings>) -> Self {
        let settings = saved.cloned().unwrap_or_default();
        Self {
            join_role_id: settings.join_role_id,
        }
    }

    pub fn to_settings(&self) -> AutoRoleSettings {
        AutoRoleSettings {
            join_role_id: self.join_role_id.clone(),
        }
    }
}
