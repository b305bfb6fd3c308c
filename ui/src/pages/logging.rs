use payloads::requests;
use yew::prelude::*;

use crate::components::{
    ChannelSelect, GuildPageWrapper, GuildPanelContext, SettingsForm,
};
use crate::contexts::toast::use_toast;
use crate::forms::LoggingForm;
use crate::hooks::use_title;
use crate::{Route, get_api_client};

#[function_component]
pub fn LoggingPage() -> Html {
    use_title("Logging - Warden");

    let render_panel = Callback::from(|context: GuildPanelContext| {
        html! { <LoggingPanel {context} /> }
    });

    html! {
        <GuildPageWrapper active={Route::Logging} children={render_panel} />
    }
}

#[derive(Properties, PartialEq)]
struct PanelProps {
    pub context: GuildPanelContext,
}

#[function_component]
fn LoggingPanel(props: &PanelProps) -> Html {
    let toast = use_toast();
    let saved = props.context.saved.as_ref();
    let form = use_state(|| {
        LoggingForm::from_saved(saved.and_then(|s| s.logging.as_ref()))
    });
    let is_saving = use_state(|| false);

    let on_action_channel = {
        let form = form.clone();
        Callback::from(move |channel_id| {
            let mut updated = (*form).clone();
            updated.action_log_channel_id = channel_id;
            form.set(updated);
        })
    };

    let on_message_channel = {
        let form = form.clone();
        Callback::from(move |channel_id| {
            let mut updated = (*form).clone();
            updated.message_log_channel_id = channel_id;
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
                let request = requests::SaveLoggingSettings {
                    guild_id,
                    settings,
                };
                match client.save_logging_settings(&request).await {
                    Ok(_) => {
                        toast.success("Logging settings saved!");
                    }
                    Err(e) => {
                        tracing::error!(
                            "failed to save logging settings: {e}"
                        );
                        toast.error("Error saving logging settings.");
                    }
                }
                is_saving.set(false);
            });
        })
    };

    html! {
        <SettingsForm
            title="Logging Settings"
            save_label="Save Logging Settings"
            is_saving={*is_saving}
            on_save={on_save}
        >
            <ChannelSelect
                label="Action Log Channel"
                channels={props.context.channels.clone()}
                selected={form.action_log_channel_id.clone()}
                on_change={on_action_channel}
                help="Logs moderator actions like kicks, bans, and warns."
            />
            <ChannelSelect
                label="Message Log Channel"
                channels={props.context.channels.clone()}
                selected={form.message_log_channel_id.clone()}
                on_change={on_message_channel}
                help="Logs all edited and deleted messages."
            />
        </SettingsForm>
    }
}
