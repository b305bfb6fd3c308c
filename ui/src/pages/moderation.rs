use payloads::{DurationUnit, NoAvatarAction, TierAction, requests};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{
    CheckboxField, GuildPageWrapper, GuildPanelContext, NumberInput,
    SettingsForm, TextAreaField,
};
use crate::contexts::toast::use_toast;
use crate::forms::{ModerationForm, TierForm};
use crate::hooks::use_title;
use crate::{Route, get_api_client};

#[function_component]
pub fn ModerationPage() -> Html {
    use_title("Moderation - Warden");

    let render_panel = Callback::from(|context: GuildPanelContext| {
        html! { <ModerationPanel {context} /> }
    });

    html! {
        <GuildPageWrapper
            active={Route::Moderation}
            children={render_panel}
        />
    }
}

#[derive(Properties, PartialEq)]
struct PanelProps {
    pub context: GuildPanelContext,
}

#[function_component]
fn ModerationPanel(props: &PanelProps) -> Html {
    let toast = use_toast();
    let saved = props.context.saved.as_ref();
    let form = use_state(|| {
        ModerationForm::from_saved(saved.and_then(|s| s.moderation.as_ref()))
    });
    let is_saving = use_state(|| false);

    let on_no_avatar_action = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(action) = select.value().parse() {
                let mut updated = (*form).clone();
                updated.no_avatar_action = action;
                form.set(updated);
            }
        })
    };

    let on_min_account_age = {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut updated = (*form).clone();
            updated.min_account_age_days = value;
            form.set(updated);
        })
    };

    let on_banned_usernames = {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut updated = (*form).clone();
            updated.banned_usernames = value;
            form.set(updated);
        })
    };

    let on_banned_words = {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut updated = (*form).clone();
            updated.banned_words = value;
            form.set(updated);
        })
    };

    let on_block_invites = {
        let form = form.clone();
        Callback::from(move |checked| {
            let mut updated = (*form).clone();
            updated.block_invites = checked;
            form.set(updated);
        })
    };

    let on_block_mass_mention = {
        let form = form.clone();
        Callback::from(move |checked| {
            let mut updated = (*form).clone();
            updated.block_mass_mention = checked;
            form.set(updated);
        })
    };

    let on_block_caps = {
        let form = form.clone();
        Callback::from(move |checked| {
            let mut updated = (*form).clone();
            updated.block_caps = checked;
            form.set(updated);
        })
    };

    let on_add_tier = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut updated = (*form).clone();
            updated.add_tier();
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
                let request = requests::SaveModerationSettings {
                    guild_id,
                    settings,
                };
                match client.save_moderation_settings(&request).await {
                    Ok(_) => {
                        toast.success("Moderation settings saved!");
                    }
                    Err(e) => {
                        tracing::error!(
                            "failed to save moderation settings: {e}"
                        );
                        toast.error("Error saving moderation settings.");
                    }
                }
                is_saving.set(false);
            });
        })
    };

    html! {
        <SettingsForm
            title="Moderation Settings"
            save_label="Save Moderation Settings"
            is_saving={*is_saving}
            on_save={on_save}
        >
            <div>
                <h3 class="text-2xl font-bold mb-4">{"Join Gate"}</h3>
                <div class="space-y-4">
                    <div class="flex items-center justify-between">
                        <label>{"Action for users with no avatar:"}</label>
                        <select
                            onchange={on_no_avatar_action}
                            class="bg-gray-700 rounded-md p-2"
                        >
                            <option
                                value="none"
                                selected={form.no_avatar_action == NoAvatarAction::None}
                            >
                                {"None"}
                            </option>
                            <option
                                value="kick"
                                selected={form.no_avatar_action == NoAvatarAction::Kick}
                            >
                                {"Kick"}
                            </option>
                            <option
                                value="ban"
                                selected={form.no_avatar_action == NoAvatarAction::Ban}
                            >
                                {"Ban"}
                            </option>
                        </select>
                    </div>
                    <NumberInput
                        label="Minimum account age (in days):"
                        value={form.min_account_age_days.clone()}
                        on_change={on_min_account_age}
                        min="0"
                        placeholder="e.g., 7"
                    />
                    <TextAreaField
                        label="Banned words in username (comma-separated):"
                        value={form.banned_usernames.clone()}
                        on_change={on_banned_usernames}
                        rows={3}
                    />
                </div>
            </div>
            <div class="border-t border-gray-700"></div>
            <div>
                <h3 class="text-2xl font-bold mb-4">{"Content Filtering"}</h3>
                <div class="space-y-4">
                    <TextAreaField
                        label="Banned words in messages (comma-separated):"
                        value={form.banned_words.clone()}
                        on_change={on_banned_words}
                        rows={4}
                    />
                    <CheckboxField
                        label="Block Server Invites"
                        checked={form.block_invites}
                        on_change={on_block_invites}
                    />
                    <CheckboxField
                        label="Block Mass Mentions"
                        checked={form.block_mass_mention}
                        on_change={on_block_mass_mention}
                    />
                    <CheckboxField
                        label="Block Excessive Caps"
                        checked={form.block_caps}
                        on_change={on_block_caps}
                    />
                </div>
            </div>
            <div class="border-t border-gray-700"></div>
            <div>
                <h3 class="text-2xl font-bold mb-4">
                    {"Warning System & Punishments"}
                </h3>
                <div class="space-y-4">
                    {for form.tiers.iter().enumerate().map(|(index, tier)| {
                        html! {
                            <WarningTierRow
                                key={index}
                                {index}
                                tier={tier.clone()}
                                form={form.clone()}
                            />
                        }
                    })}
                </div>
                <button
                    type="button"
                    onclick={on_add_tier}
                    class="mt-4 bg-green-600 hover:bg-green-700 text-white font-bold py-2 px-4 rounded-lg"
                >
                    {"Add Punishment Tier"}
                </button>
            </div>
        </SettingsForm>
    }
}

#[derive(Properties, PartialEq)]
struct TierRowProps {
    pub index: usize,
    pub tier: TierForm,
    pub form: UseStateHandle<ModerationForm>,
}

#[function_component]
fn WarningTierRow(props: &TierRowProps) -> Html {
    let index = props.index;
    let tier = &props.tier;

    let on_warn_count = {
        let form = props.form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut updated = (*form).clone();
            if let Some(tier) = updated.tiers.get_mut(index) {
                tier.warn_count = input.value();
            }
            form.set(updated);
        })
    };

    let on_action = {
        let form = props.form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(action) = select.value().parse() {
                let mut updated = (*form).clone();
                if let Some(tier) = updated.tiers.get_mut(index) {
                    tier.action = action;
                }
                form.set(updated);
            }
        })
    };

    let on_duration = {
        let form = props.form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut updated = (*form).clone();
            if let Some(tier) = updated.tiers.get_mut(index) {
                tier.duration = input.value();
            }
            form.set(updated);
        })
    };

    let on_duration_unit = {
        let form = props.form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(unit) = select.value().parse() {
                let mut updated = (*form).clone();
                if let Some(tier) = updated.tiers.get_mut(index) {
                    tier.duration_unit = unit;
                }
                form.set(updated);
            }
        })
    };

    let on_remove = {
        let form = props.form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut updated = (*form).clone();
            updated.remove_tier(index);
            form.set(updated);
        })
    };

    html! {
        <div class="flex items-center gap-4 bg-gray-700 p-3 rounded-md">
            <span>{"On"}</span>
            <input
                type="number"
                value={tier.warn_count.clone()}
                oninput={on_warn_count}
                min="1"
                placeholder="e.g., 3"
                class="bg-gray-800 rounded-md p-2 w-20"
            />
            <span>{"warnings, apply"}</span>
            <select onchange={on_action} class="bg-gray-800 rounded-md p-2">
                <option
                    value="mute"
                    selected={tier.action == TierAction::Mute}
                >
                    {"Mute"}
                </option>
                <option
                    value="kick"
                    selected={tier.action == TierAction::Kick}
                >
                    {"Kick"}
                </option>
                <option value="ban" selected={tier.action == TierAction::Ban}>
                    {"Ban"}
                </option>
            </select>
            <span>{"for"}</span>
            <input
                type="number"
                value={tier.duration.clone()}
                oninput={on_duration}
                min="0"
                placeholder="e.g., 60"
                class="bg-gray-800 rounded-md p-2 w-20"
            />
            <select
                onchange={on_duration_unit}
                class="bg-gray-800 rounded-md p-2"
            >
                <option
                    value="minutes"
                    selected={tier.duration_unit == DurationUnit::Minutes}
                >
                    {"Minutes"}
                </option>
                <option
                    value="hours"
                    selected={tier.duration_unit == DurationUnit::Hours}
                >
                    {"Hours"}
                </option>
                <option
                    value="days"
                    selected={tier.duration_unit == DurationUnit::Days}
                >
                    {"Days"}
                </option>
            </select>
            <button
                type="button"
                onclick={on_remove}
                class="text-red-500 hover:text-red-400 font-bold ml-auto"
            >
                {"Remove"}
            </button>
        </div>
    }
}
