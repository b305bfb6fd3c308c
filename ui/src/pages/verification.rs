use payloads::{
    AgeGateAction, UnverifiedJoinAction, VerifiedJoinAction, requests,
};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::{
    ChannelSelect, CheckboxField, GuildPageWrapper, GuildPanelContext,
    NumberInput, RoleSelect, SettingsForm, TextAreaField,
};
use crate::contexts::toast::use_toast;
use crate::forms::VerificationForm;
use crate::hooks::use_title;
use crate::{Route, get_api_client};

#[function_component]
pub fn VerificationPage() -> Html {
    use_title("Verification - Warden");

    let render_panel = Callback::from(|context: GuildPanelContext| {
        html! { <VerificationPanel {context} /> }
    });

    html! {
        <GuildPageWrapper
            active={Route::Verification}
            children={render_panel}
        />
    }
}

#[derive(Properties, PartialEq)]
struct PanelProps {
    pub context: GuildPanelContext,
}

#[function_component]
fn VerificationPanel(props: &PanelProps) -> Html {
    let toast = use_toast();
    let saved = props.context.saved.as_ref();
    let form = use_state(|| {
        VerificationForm::from_saved(
            saved.and_then(|s| s.verification.as_ref()),
        )
    });
    let is_saving = use_state(|| false);
    let is_posting = use_state(|| false);

    let on_verified_action = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(action) = select.value().parse() {
                let mut updated = (*form).clone();
                updated.verified_user_action = action;
                form.set(updated);
            }
        })
    };

    let on_unverified_action = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(action) = select.value().parse() {
                let mut updated = (*form).clone();
                updated.unverified_user_action = action;
                form.set(updated);
            }
        })
    };

    let on_channel = {
        let form = form.clone();
        Callback::from(move |channel_id| {
            let mut updated = (*form).clone();
            updated.verification_channel_id = channel_id;
            form.set(updated);
        })
    };

    let on_unverified_role = {
        let form = form.clone();
        Callback::from(move |role_id| {
            let mut updated = (*form).clone();
            updated.unverified_role_id = role_id;
            form.set(updated);
        })
    };

    let on_verified_role = {
        let form = form.clone();
        Callback::from(move |role_id| {
            let mut updated = (*form).clone();
            updated.verified_role_id = role_id;
            form.set(updated);
        })
    };

    let on_embed_message = {
        let form = form.clone();
        Callback::from(move |message: String| {
            let mut updated = (*form).clone();
            updated.embed_message = message;
            form.set(updated);
        })
    };

    let on_age_gate_toggle = {
        let form = form.clone();
        Callback::from(move |enabled| {
            let mut updated = (*form).clone();
            updated.age_gate_enabled = enabled;
            form.set(updated);
        })
    };

    let on_min_age = {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut updated = (*form).clone();
            updated.min_age = value;
            form.set(updated);
        })
    };

    let on_max_age = {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut updated = (*form).clone();
            updated.max_age = value;
            form.set(updated);
        })
    };

    let on_age_gate_action = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(action) = select.value().parse() {
                let mut updated = (*form).clone();
                updated.age_gate_action = action;
                form.set(updated);
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
                let request = requests::SaveVerificationSettings {
                    guild_id,
                    settings,
                };
                match client.save_verification_settings(&request).await {
                    Ok(_) => {
                        toast.success("Verification settings saved!");
                    }
                    Err(e) => {
                        tracing::error!(
                            "failed to save verification settings: {e}"
                        );
                        toast.error("Error saving settings.");
                    }
                }
                is_saving.set(false);
            });
        })
    };

    // Posting the embed makes the bot render the stored message, so the
    // current form is saved first. Each step reports through the toast;
    // the embed outcome replaces the save outcome on screen.
    let on_post_embed = {
        let form = form.clone();
        let is_posting = is_posting.clone();
        let toast = toast.clone();
        let guild_id = props.context.guild_id.clone();

        Callback::from(move |_: MouseEvent| {
            let settings = form.to_settings();
            let is_posting = is_posting.clone();
            let toast = toast.clone();
            let guild_id = guild_id.clone();

            is_posting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let client = get_api_client();
                let save = requests::SaveVerificationSettings {
                    guild_id: guild_id.clone(),
                    settings,
                };
                match client.save_verification_settings(&save).await {
                    Ok(_) => {
                        toast.success("Verification settings saved!");
                        let request =
                            requests::PostVerificationEmbed { guild_id };
                        match client.post_verification_embed(&request).await
                        {
                            Ok(_) => {
                                toast.success(
                                    "Embed posted/updated successfully!",
                                );
                            }
                            Err(e) => {
                                tracing::error!(
                                    "failed to post verification embed: {e}"
                                );
                                toast.error(
                                    "Error posting embed. Make sure a \
                                     verification channel is selected and \
                                     settings are saved.",
                                );
                            }
                        }
                    }
                    Err(e) => {
                        tracing::error!(
                            "failed to save verification settings: {e}"
                        );
                        toast.error("Error saving settings.");
                    }
                }
                is_posting.set(false);
            });
        })
    };

    html! {
        <SettingsForm
            title="Verification Settings"
            save_label="Save Verification Settings"
            is_saving={*is_saving}
            on_save={on_save}
        >
            <div>
                <h3 class="text-2xl font-bold mb-4">{"Join Actions"}</h3>
                <div class="space-y-4">
                    <div class="flex items-center justify-between">
                        <label>{"If a Verified user joins:"}</label>
                        <select
                            onchange={on_verified_action}
                            class="bg-gray-700 rounded-md p-2"
                        >
                            <option
                                value="none"
                                selected={form.verified_user_action == VerifiedJoinAction::None}
                            >
                                {"Do Nothing"}
                            </option>
                            <option
                                value="give_role"
                                selected={form.verified_user_action == VerifiedJoinAction::GiveRole}
                            >
                                {"Give Role"}
                            </option>
                        </select>
                    </div>
                    <div class="flex items-center justify-between">
                        <label>{"If an Unverified user joins:"}</label>
                        <select
                            onchange={on_unverified_action}
                            class="bg-gray-700 rounded-md p-2"
                        >
                            <option
                                value="give_role"
                                selected={form.unverified_user_action == UnverifiedJoinAction::GiveRole}
                            >
                                {"Give Unverified Role"}
                            </option>
                            <option
                                value="kick"
                                selected={form.unverified_user_action == UnverifiedJoinAction::Kick}
                            >
                                {"Kick"}
                            </option>
                            <option
                                value="ban"
                                selected={form.unverified_user_action == UnverifiedJoinAction::Ban}
                            >
                                {"Ban"}
                            </option>
                        </select>
                    </div>
                </div>
            </div>
            <div class="border-t border-gray-700"></div>
            <div>
                <h3 class="text-2xl font-bold mb-4">
                    {"Verification Roles & Channel"}
                </h3>
                <div class="space-y-4">
                    <ChannelSelect
                        label="Verification Channel"
                        channels={props.context.channels.clone()}
                        selected={form.verification_channel_id.clone()}
                        on_change={on_channel}
                    />
                    <RoleSelect
                        label="Unverified Role"
                        roles={props.context.roles.clone()}
                        selected={form.unverified_role_id.clone()}
                        on_change={on_unverified_role}
                    />
                    <RoleSelect
                        label="Verified Role"
                        roles={props.context.roles.clone()}
                        selected={form.verified_role_id.clone()}
                        on_change={on_verified_role}
                    />
                </div>
            </div>
            <div class="border-t border-gray-700"></div>
            <div>
                <h3 class="text-2xl font-bold mb-4">{"Verification Embed"}</h3>
                <TextAreaField
                    label="Embed Message"
                    value={form.embed_message.clone()}
                    on_change={on_embed_message}
                    rows={3}
                />
                <button
                    type="button"
                    onclick={on_post_embed}
                    disabled={*is_posting || *is_saving}
                    class="mt-4 bg-indigo-600 hover:bg-indigo-700 text-white font-bold py-2 px-4 rounded-lg disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {if *is_posting { "Posting..." } else { "Post/Update Embed" }}
                </button>
            </div>
            <div class="border-t border-gray-700"></div>
            <div>
                <h3 class="text-2xl font-bold mb-4">{"Age Gate"}</h3>
                <div class="space-y-4">
                    <CheckboxField
                        label="Enable Age Gate"
                        checked={form.age_gate_enabled}
                        on_change={on_age_gate_toggle}
                    />
                    <NumberInput
                        label="Minimum Age:"
                        value={form.min_age.clone()}
                        on_change={on_min_age}
                        min="13"
                        max="99"
                    />
                    <NumberInput
                        label="Maximum Age:"
                        value={form.max_age.clone()}
                        on_change={on_max_age}
                        min="13"
                        max="99"
                    />
                    <div class="flex items-center justify-between">
                        <label>{"Action for users outside age range:"}</label>
                        <select
                            onchange={on_age_gate_action}
                            class="bg-gray-700 rounded-md p-2"
                        >
                            <option
                                value="kick"
                                selected={form.age_gate_action == AgeGateAction::Kick}
                            >
                                {"Kick"}
                            </option>
                            <option
                                value="ban"
                                selected={form.age_gate_action == AgeGateAction::Ban}
                            >
                                {"Ban"}
                            </option>
                        </select>
                    </div>
                </div>
            </div>
        </SettingsForm>
    }
}
