use payloads::{
    MAX_STAFF_TEAMS, MAX_TEAM_ROLES, PermissionLevel, RoleId, StaffSettings,
    StaffTeam, TeamPermissions,
};

/// Punishment actions in the order the permission rows render.
pub const PUNISHMENT_ACTIONS: [&str; 5] =
    ["ban", "kick", "mute", "warn", "blacklist"];

#[derive(Debug, Clone, PartialEq)]
pub struct TeamForm {
    pub team_id: String,
    pub team_name: String,
    pub roles: Vec<RoleId>,
    pub permissions: TeamPermissions,
    pub can_authorize: Vec<String>,
}

impl TeamForm {
    fn from_saved(team: &StaffTeam) -> Self {
        Self {
            team_id: team.team_id.clone(),
            team_name: team.team_name.clone(),
            roles: team.roles.clone(),
            permissions: team.permissions,
            can_authorize: team.can_authorize.clone(),
        }
    }

    pub fn display_name(&self) -> &str {
        if self.team_name.is_empty() {
            "Unnamed Team"
        } else {
            &self.team_name
        }
    }

    pub fn permission(&self, action: &str) -> PermissionLevel {
        match action {
            "ban" => self.permissions.ban,
            "kick" => self.permissions.kick,
            "mute" => self.permissions.mute,
            "warn" => self.permissions.warn,
            "blacklist" => self.permissions.blacklist,
            _ => PermissionLevel::None,
        }
    }

    pub fn set_permission(&mut self, action: &str, level: PermissionLevel) {
        match action {
            "ban" => self.permissions.ban = level,
            "kick" => self.permissions.kick = level,
            "mute" => self.permissions.mute = level,
            "warn" => self.permissions.warn = level,
            "blacklist" => self.permissions.blacklist = level,
            _ => {}
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaffForm {
    pub is_enabled: bool,
    pub owner_role_id: Option<RoleId>,
    pub emergency_override_enabled: bool,
    pub teams: Vec<TeamForm>,
}

impl StaffForm {
    pub fn from_saved(saved: Option<&StaffSettings>) -> Self {
        let settings = saved.cloned().unwrap_or_default();
        Self {
            is_enabled: settings.is_enabled,
            owner_role_id: settings.owner_role_id,
            emergency_override_enabled: settings.emergency_override_enabled,
            teams: settings.teams.iter().map(TeamForm::from_saved).collect(),
        }
    }

    pub fn to_settings(&self) -> StaffSettings {
        StaffSettings {
            is_enabled: self.is_enabled,
            owner_role_id: self.owner_role_id.clone(),
            emergency_override_enabled: self.emergency_override_enabled,
            teams: self
                .teams
                .iter()
                .map(|team| StaffTeam {
                    team_id: team.team_id.clone(),
                    team_name: team.team_name.clone(),
                    roles: team.roles.clone(),
                    permissions: team.permissions,
                    can_authorize: team.can_authorize.clone(),
                })
                .collect(),
        }
    }

    /// Appends a blank team, or reports the team cap.
    pub fn add_team(&mut self) -> Result<(), String> {
        if self.teams.len() >= MAX_STAFF_TEAMS {
            return Err(format!(
                "You can only have a maximum of {MAX_STAFF_TEAMS} staff teams."
            ));
        }
        self.teams.push(TeamForm {
            team_id: next_team_id(&self.teams),
            team_name: String::new(),
            roles: Vec::new(),
            permissions: TeamPermissions::default(),
            can_authorize: Vec::new(),
        });
        Ok(())
    }

    /// Removes a team and drops it from every other team's authorization
    /// list.
    pub fn remove_team(&mut self, team_id: &str) {
        self.teams.retain(|team| team.team_id != team_id);
        for team in &mut self.teams {
            team.can_authorize.retain(|id| id != team_id);
        }
    }

    pub fn rename_team(&mut self, index: usize, name: String) {
        if let Some(team) = self.teams.get_mut(index) {
            team.team_name = name;
        }
    }

    /// Adds a role to a team. The cap is reported; picking a role the
    /// team already has is silently ignored.
    pub fn add_role(
        &mut self,
        index: usize,
        role_id: RoleId,
    ) -> Result<(), String> {
        let Some(team) = self.teams.get_mut(index) else {
            return Ok(());
        };
        if team.roles.len() >= MAX_TEAM_ROLES {
            return Err(format!(
                "A team can only have a maximum of {MAX_TEAM_ROLES} roles."
            ));
        }
        if !team.roles.contains(&role_id) {
            team.roles.push(role_id);
        }
        Ok(())
    }

    pub fn remove_role(&mut self, index: usize, role_id: &RoleId) {
        if let Some(team) = self.teams.get_mut(index) {
            team.roles.retain(|id| id != role_id);
        }
    }

    /// `(team_id, display name)` pairs a team may authorize: every team
    /// except itself.
    pub fn authorize_options(&self, index: usize) -> Vec<(String, String)> {
        let own_id = self
            .teams
            .get(index)
            .map(|team| team.team_id.clone())
            .unwrap_or_default();
        self.teams
            .iter()
            .filter(|team| team.team_id != own_id)
            .map(|team| {
                (team.team_id.clone(), team.display_name().to_string())
            })
            .collect()
    }

    pub fn set_authorize(
        &mut self,
        index: usize,
        other_id: &str,
        granted: bool,
    ) {
        if let Some(team) = self.teams.get_mut(index) {
            if granted {
                if !team.can_authorize.iter().any(|id| id == other_id) {
                    team.can_authorize.push(other_id.to_string());
                }
            } else {
                team.can_authorize.retain(|id| id != other_id);
            }
        }
    }
}

/// Picks the lowest `team-{n}` not already in use. Ids only need to be
/// unique within the guild's settings, so a simple counter works.
fn next_team_id(teams: &[TeamForm]) -> String {
    let mut n = teams.len() + 1;
    loop {
        let candidate = format!("team-{n}");
        if !teams.iter().any(|team| team.team_id == candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with_teams(count: usize) -> StaffForm {
        let mut form = StaffForm::default();
        for _ in 0..count {
            form.add_team().unwrap();
        }
        form
    }

    #[test]
    fn sixth_team_is_rejected_with_the_cap_message() {
        let mut form = form_with_teams(5);
        let err = form.add_team().unwrap_err();
        assert_eq!(err, "You can only have a maximum of 5 staff teams.");
        assert_eq!(form.teams.len(), 5);
    }

    #[test]
    fn sixth_role_is_rejected_with_the_cap_message() {
        let mut form = form_with_teams(1);
        for n in 0..5 {
            form.add_role(0, RoleId(format!("role-{n}"))).unwrap();
        }
        let err = form.add_role(0, RoleId::from("role-5")).unwrap_err();
        assert_eq!(err, "A team can only have a maximum of 5 roles.");
        assert_eq!(form.teams[0].roles.len(), 5);
    }

    #[test]
    fn duplicate_role_is_silently_ignored() {
        let mut form = form_with_teams(1);
        form.add_role(0, RoleId::from("role-1")).unwrap();
        form.add_role(0, RoleId::from("role-1")).unwrap();
        assert_eq!(form.teams[0].roles.len(), 1);
    }

    #[test]
    fn cap_wins_over_duplicate_when_the_team_is_full() {
        let mut form = form_with_teams(1);
        for n in 0..5 {
            form.add_role(0, RoleId(format!("role-{n}"))).unwrap();
        }
        assert!(form.add_role(0, RoleId::from("role-0")).is_err());
    }

    #[test]
    fn removing_a_team_prunes_authorization_lists() {
        let mut form = form_with_teams(3);
        let removed_id = form.teams[1].team_id.clone();
        form.set_authorize(0, &removed_id, true);
        form.set_authorize(2, &removed_id, true);
        form.remove_team(&removed_id);
        assert_eq!(form.teams.len(), 2);
        assert!(form.teams.iter().all(|team| {
            !team.can_authorize.contains(&removed_id)
        }));
    }

    #[test]
    fn authorize_options_exclude_the_team_itself() {
        let mut form = form_with_teams(3);
        form.rename_team(0, "Mods".to_string());
        form.rename_team(1, "Admins".to_string());
        let options = form.authorize_options(1);
        assert_eq!(options.len(), 2);
        assert!(options.iter().all(|(id, _)| *id != form.teams[1].team_id));
    }

    #[test]
    fn unnamed_teams_show_a_placeholder_in_options() {
        let form = form_with_teams(2);
        let options = form.authorize_options(0);
        assert_eq!(options[0].1, "Unnamed Team");
    }

    #[test]
    fn team_ids_skip_ids_still_in_use() {
        let mut form = form_with_teams(2);
        let first_id = form.teams[0].team_id.clone();
        assert_eq!(first_id, "team-1");
        form.remove_team(&first_id);
        form.add_team().unwrap();
        let ids: Vec<_> =
            form.teams.iter().map(|team| team.team_id.as_str()).collect();
        assert_eq!(ids, vec!["team-2", "team-3"]);
    }

    #[test]
    fn granting_twice_keeps_one_authorization_entry() {
        let mut form = form_with_teams(2);
        let other = form.teams[1].team_id.clone();
        form.set_authorize(0, &other, true);
        form.set_authorize(0, &other, true);
        assert_eq!(form.teams[0].can_authorize, vec![other.clone()]);
        form.set_authorize(0, &other, false);
        assert!(form.teams[0].can_authorize.is_empty());
    }

    #[test]
    fn saved_settings_round_trip_through_the_form() {
        let saved = StaffSettings {
            is_enabled: true,
            owner_role_id: Some(RoleId::from("42")),
            emergency_override_enabled: true,
            teams: vec![StaffTeam {
                team_id: "team-1".to_string(),
                team_name: "Moderators".to_string(),
                roles: vec![RoleId::from("1"), RoleId::from("2")],
                permissions: TeamPermissions {
                    ban: PermissionLevel::Auth,
                    kick: PermissionLevel::Full,
                    ..Default::default()
                },
                can_authorize: vec![],
            }],
        };
        let form = StaffForm::from_saved(Some(&saved));
        assert_eq!(form.to_settings(), saved);
    }

    #[test]
    fn permission_lookup_matches_the_action_rows() {
        let mut form = form_with_teams(1);
        for action in PUNISHMENT_ACTIONS {
            assert_eq!(
                form.teams[0].permission(action),
                PermissionLevel::None
            );
        }
        form.teams[0].set_permission("warn", PermissionLevel::Full);
        assert_eq!(
            form.teams[0].permission("warn"),
            PermissionLevel::Full
        );
        assert_eq!(form.teams[0].permission("ban"), PermissionLevel::None);
    }
}
