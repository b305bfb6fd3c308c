use payloads::{Channel, ChannelId};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChannelSelectProps {
    pub label: AttrValue,
    pub channels: Vec<Channel>,
    pub selected: Option<ChannelId>,
    pub on_change: Callback<Option<ChannelId>>,
    #[prop_or_default]
    pub help: AttrValue,
}

/// Text channel picker. Mirrors [`RoleSelect`](super::RoleSelect) but
/// renders channel names with the `#` prefix.
#[function_component]
pub fn ChannelSelect(props: &ChannelSelectProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            on_change.emit(if value.is_empty() {
                None
            } else {
                Some(ChannelId(value))
            });
        })
    };

    html! {
        <div>
            <label class="block text-sm font-medium text-gray-300 mb-2">
                {&props.label}
            </label>
            <select {onchange} class="w-full p-2 bg-gray-700 rounded-md">
                <option value="" selected={props.selected.is_none()}>
                    {"Select..."}
                </option>
                {for props.channels.iter().map(|channel| {
                    html! {
                        <option
                            value={channel.id.to_string()}
                            selected={props.selected.as_ref() == Some(&channel.id)}
                        >
                            {format!("#{}", channel.name)}
                        </option>
                    }
                })}
            </select>
            {if props.help.is_empty() {
                html! {}
            } else {
                html! {
                    <p class="text-sm text-gray-400 mt-1">{&props.help}</p>
                }
            }}
        </div>
    }
}
