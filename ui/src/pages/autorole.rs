use payloads::requests;
use yew::prelude::*;

use crate::components::{
    GuildPageWrapper, GuildPanelContext, RoleSelect, SettingsForm,
};
use crate::contexts::toast::use_toast;
use crate::forms::AutoRoleForm;
use crate::hooks::use_title;
use crate::{Route, get_api_client};

#[function_component]
pub fn AutoRolePage() -> Html {
    use_title("Auto Role - Warden");

    let render_panel = Callback::from(|context: GuildPanelContext| {
        html! { <AutoRolePanel {context} /> }
    });

    html! {
        <GuildPageWrapper active={Route::AutoRole} children={render_panel} />
    }
}

#[derive(Properties, PartialEq)]
struct PanelProps {
    pub context: GuildPanelContext,
}

#[function_component]
fn AutoRolePanel(props: &PanelProps) -> Html {
    let toast = use_toast();
    let saved = props.context.saved.as_ref();
    let form = use_state(|| {
        AutoRoleForm::from_saved(saved.and_then(|s| s.auto_role.as_ref()))
    });
    let is_saving = use_state(|| false);

    let on_join_role = {
        let form = form.clone();
        Callback::from(move |role_id| {
            let mut updated = (*form).clone();
            updated.join_role_id = role_id;
            form.set(updated);
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
                let request = requests::SaveAutoRoleSettings {
                    guild_id,
                    settings,
                };
                match client.save_auto_role_settings(&request).await {
                    Ok(_) => {
                        toast.success("Auto Role settings saved!");
                    }
                    Err(e) => {
                        tracing::error!(
                            "failed to save auto role settings: {e}"
                        );
                        toast.error("Error saving auto role settings.");
                    }
                }
                is_saving.set(false);
            });
        })
    };

    html! {
        <SettingsForm
            title="Auto Role Settings"
            save_label="Save Auto Role Settings"
            is_saving={*is_saving}
            on_save={on_save}
        >
            <RoleSelect
                label="Join Role"
                roles={props.context.roles.clone()}
                selected={form.join_role_id.clone()}
                on_change={on_join_role}
                help="Automatically give this role to every new member who joins."
            />
        </SettingsForm>
    }
}
