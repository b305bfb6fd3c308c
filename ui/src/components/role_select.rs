use payloads::{Role, RoleId};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RoleSelectProps {
    pub label: AttrValue,
    pub roles: Vec<Role>,
    pub selected: Option<RoleId>,
    pub on_change: Callback<Option<RoleId>>,
    #[prop_or_default]
    pub help: AttrValue,
}

/// Role picker with an explicit blank option. The blank option maps to
/// `None`, which the wire format carries as null rather than an empty
/// string.
#[function_component]
pub fn RoleSelect(props: &RoleSelectProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            on_change.emit(if value.is_empty() {
                None
            } else {
                Some(RoleId(value))
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
                {for props.roles.iter().map(|role| {
                    html! {
                        <option
                            value={role.id.to_string()}
                            selected={props.selected.as_ref() == Some(&role.id)}
                        >
                            {&role.name}
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
