use payloads::{PermissionLevel, Role, RoleId, requests};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{
    GuildPageWrapper, GuildPanelContext, RoleBubbles, RoleSelect,
    SettingsForm, ToggleSwitch,
};
use crate::contexts::toast::use_toast;
use crate::forms::{PUNISHMENT_ACTIONS, StaffForm, TeamForm};
use crate::hooks::use_title;
use crate::{Route, get_api_client};

#[function_component]
pub fn StaffPage() -> Html {
    use_title("Staff - Warden");

    let render_panel = Callback::from(|context: GuildPanelContext| {
        html! { <StaffPanel {context} /> }
    });

    html! {
        <GuildPageWrapper active={Route::Staff} children={render_panel} />
    }
}

#[derive(Properties, PartialEq)]
struct PanelProps {
    pub context: GuildPanelContext,
}

#[function_component]
fn StaffPanel(props: &PanelProps) -> Html {
    let toast = use_toast();
    let saved = props.context.saved.as_ref();
    let form = use_state(|| {
        StaffForm::from_saved(saved.and_then(|s| s.staff.as_ref()))
    });
    let is_saving = use_state(|| false);

    let on_hierarchy_toggle = {
        let form = form.clone();
        Callback::from(move |enabled| {
            let mut updated = (*form).clone();
            updated.is_enabled = enabled;
            form.set(updated);
        })
    };

    let on_owner_role = {
        let form = form.clone();
        Callback::from(move |role_id| {
            let mut updated = (*form).clone();
            updated.owner_role_id = role_id;
            form.set(updated);
        })
    };

    let on_override_toggle = {
        let form = form.clone();
        Callback::from(move |enabled| {
            let mut updated = (*form).clone();
            updated.emergency_override_enabled = enabled;
            form.set(updated);
        })
    };

    let on_add_team = {
        let form = form.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            let mut updated = (*form).clone();
            match updated.add_team() {
                Ok(()) => form.set(updated),
                Err(message) => toast.error(message),
            }
        })
    };

    let on_save = {
        let form = form.clone();
        let is_saving = is_saving.clone();
        let toast = toast.clone();
        let guild_id = props.context.guild_id.clone();

        Callback::from(move |()| {
            let settings = form.to_settings();
            let is_saving = is_saving.clone();
            let toast = toast.clone();
            let guild_id = guild_id.clone();

            is_saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let client = get_api_client();
                let request = requests::SaveStaffSettings {
                    guild_id,
                    settings,
                };
                match client.save_staff_settings(&request).await {
                    Ok(_) => {
                        toast.success("Staff settings saved successfully!");
                    }
                    Err(e) => {
                        tracing::error!(
                            "failed to save staff settings: {e}"
                        );
                        toast.error("Error saving staff settings.");
                    }
                }
                is_saving.set(false);
            });
        })
    };

    html! {
        <SettingsForm
            title="Staff Settings"
            save_label="Save All Staff Settings"
            is_saving={*is_saving}
            on_save={on_save}
        >
            <div>
                <ToggleSwitch
                    label="Enable Custom Staff Hierarchy"
                    checked={form.is_enabled}
                    on_change={on_hierarchy_toggle}
                />
            </div>
            <div class="border-t border-gray-700"></div>
            <RoleSelect
                label="Server Owner Role"
                roles={props.context.roles.clone()}
                selected={form.owner_role_id.clone()}
                on_change={on_owner_role}
            />
            <div class="border-t border-gray-700"></div>
            <div>
                <h3 class="text-2xl font-bold mb-4">{"Staff Teams"}</h3>
                <div class="space-y-6">
                    {for form.teams.iter().enumerate().map(|(index, team)| {
                        html! {
                            <TeamCard
                                key={team.team_id.clone()}
                                {index}
                                team={team.clone()}
                                roles={props.context.roles.clone()}
                                form={form.clone()}
                            />
                        }
                    })}
                </div>
                <button
                    type="button"
                    onclick={on_add_team}
                    class="mt-4 bg-green-600 hover:bg-green-700 text-white font-bold py-2 px-4 rounded-lg"
                >
                    {"Add Staff Team"}
                </button>
            </div>
            <div class="border-t border-gray-700"></div>
            <div>
                <ToggleSwitch
                    label="Enable Emergency Override Command"
                    checked={form.emergency_override_enabled}
                    on_change={on_override_toggle}
                />
            </div>
        </SettingsForm>
    }
}

#[derive(Properties, PartialEq)]
struct TeamCardProps {
    pub index: usize,
    pub team: TeamForm,
    /// Guild roles, highest position first.
    pub roles: Vec<Role>,
    pub form: UseStateHandle<StaffForm>,
}

#[function_component]
fn TeamCard(props: &TeamCardProps) -> Html {
    let toast = use_toast();
    let index = props.index;
    let team = &props.team;

    let team_roles: Vec<Role> = team
        .roles
        .iter()
        .filter_map(|id| props.roles.iter().find(|role| &role.id == id))
        .cloned()
        .collect();

    let on_rename = {
        let form = props.form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut updated = (*form).clone();
            updated.rename_team(index, input.value());
            form.set(updated);
        })
    };

    let on_remove_team = {
        let form = props.form.clone();
        let team_id = team.team_id.clone();
        Callback::from(move |_: MouseEvent| {
            let mut updated = (*form).clone();
            updated.remove_team(&team_id);
            form.set(updated);
        })
    };

    let on_add_role = {
        let form = props.form.clone();
        let toast = toast.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            if value.is_empty() {
                return;
            }
            let mut updated = (*form).clone();
            match updated.add_role(index, RoleId(value)) {
                Ok(()) => form.set(updated),
                Err(message) => toast.error(message),
            }
            select.set_value("");
        })
    };

    let on_remove_role = {
        let form = props.form.clone();
        Callback::from(move |role_id: RoleId| {
            let mut updated = (*form).clone();
            updated.remove_role(index, &role_id);
            form.set(updated);
        })
    };

    let authorize_options = props.form.authorize_options(index);

    html! {
        <div class="bg-gray-700 p-6 rounded-lg border border-gray-600">
            <div class="flex justify-between items-center mb-4">
                <input
                    type="text"
                    placeholder="Team Name"
                    value={team.team_name.clone()}
                    oninput={on_rename}
                    class="text-xl font-bold bg-transparent border-b border-gray-500"
                />
                <button
                    type="button"
                    onclick={on_remove_team}
                    class="text-red-500 hover:text-red-400 font-bold"
                >
                    {"Remove"}
                </button>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div>
                    <label class="block text-sm font-medium text-gray-300 mb-2">
                        {"Team Roles (Max 5)"}
                    </label>
                    <RoleBubbles
                        roles={team_roles}
                        on_remove={on_remove_role}
                    />
                    <select
                        onchange={on_add_role}
                        class="w-full p-2 mt-2 bg-gray-800 rounded-md"
                    >
                        <option value="">{"Add a role..."}</option>
                        {for props.roles.iter().map(|role| {
                            html! {
                                <option value={role.id.to_string()}>
                                    {&role.name}
                                </option>
                            }
                        })}
                    </select>
                </div>
                <div class="space-y-2">
                    <label class="block text-sm font-medium text-gray-300 mb-2">
                        {"Punishment Rules"}
                    </label>
                    {for PUNISHMENT_ACTIONS.iter().map(|action| {
                        html! {
                            <PermissionRow
                                key={*action}
                                {index}
                                action={*action}
                                level={team.permission(action)}
                                team_id={team.team_id.clone()}
                                form={props.form.clone()}
                            />
                        }
                    })}
                </div>
            </div>
            <div class="mt-4 border-t border-gray-600 pt-4">
                <label class="block text-sm font-medium text-gray-300 mb-2">
                    {"Can Authorize Requests For:"}
                </label>
                <div class="grid grid-cols-2 gap-2">
                    {for authorize_options.into_iter().map(|(other_id, name)| {
                        let checked =
                            team.can_authorize.contains(&other_id);
                        let on_toggle = {
                            let form = props.form.clone();
                            let other_id = other_id.clone();
                            Callback::from(move |e: Event| {
                                let input: HtmlInputElement =
                                    e.target_unchecked_into();
                                let mut updated = (*form).clone();
                                updated.set_authorize(
                                    index,
                                    &other_id,
                                    input.checked(),
                                );
                                form.set(updated);
                            })
                        };
                        html! {
                            <label key={other_id.clone()} class="flex items-center">
                                <input
                                    type="checkbox"
                                    {checked}
                                    onchange={on_toggle}
                                    class="h-4 w-4 text-blue-500"
                                />
                                <span class="ml-2">{name}</span>
                            </label>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PermissionRowProps {
    pub index: usize,
    pub action: &'static str,
    pub level: PermissionLevel,
    pub team_id: String,
    pub form: UseStateHandle<StaffForm>,
}

#[function_component]
fn PermissionRow(props: &PermissionRowProps) -> Html {
    let action = props.action;
    let index = props.index;
    let group = format!("perm-{}-{}", action, props.team_id);

    let on_level = {
        let form = props.form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(level) = input.value().parse() {
                let mut updated = (*form).clone();
                if let Some(team) = updated.teams.get_mut(index) {
                    team.set_permission(action, level);
                }
                form.set(updated);
            }
        })
    };

    let radio = |value: &'static str, level: PermissionLevel, label: &str| {
        html! {
            <label>
                <input
                    type="radio"
                    name={group.clone()}
                    {value}
                    checked={props.level == level}
                    onchange={on_level.clone()}
                />
                {format!(" {label}")}
            </label>
        }
    };

    html! {
        <div class="flex items-center justify-between">
            <span class="capitalize">{action}</span>
            <div class="flex gap-4">
                {radio("full", PermissionLevel::Full, "Full")}
                {radio("auth", PermissionLevel::Auth, "Auth")}
                {radio("none", PermissionLevel::None, "None")}
            </div>
        </div>
    }
}
