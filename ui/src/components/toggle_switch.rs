use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToggleSwitchProps {
    pub label: AttrValue,
    pub checked: bool,
    pub on_change: Callback<bool>,
}

/// Sliding toggle used for feature enable switches. The input itself is
/// visually hidden; the track and dot are styled off its peer state.
#[function_component]
pub fn ToggleSwitch(props: &ToggleSwitchProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.checked());
        })
    };

    html! {
        <label class="flex items-center cursor-pointer">
            <span class="text-lg font-medium text-white mr-4">
                {&props.label}
            </span>
            <div class="relative">
                <input
                    type="checkbox"
                    checked={props.checked}
                    {onchange}
                    class="sr-only peer"
                />
                <div class="block bg-gray-600 w-14 h-8 rounded-full"></div>
                <div class="dot absolute left-1 top-1 bg-white w-6 h-6 rounded-full transition peer-checked:translate-x-full peer-checked:bg-blue-500"></div>
            </div>
        </label>
    }
}
