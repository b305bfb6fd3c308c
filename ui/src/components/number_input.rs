use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NumberInputProps {
    pub label: AttrValue,
    /// Raw field text. Parsing happens at submit time so partially typed
    /// values never get clobbered.
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub min: Option<AttrValue>,
    #[prop_or_default]
    pub max: Option<AttrValue>,
}

#[function_component]
pub fn NumberInput(props: &NumberInputProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class="flex items-center justify-between">
            <label class="text-gray-300">{&props.label}</label>
            <input
                type="number"
                value={props.value.clone()}
                {oninput}
                placeholder={props.placeholder.clone()}
                min={props.min.clone()}
                max={props.max.clone()}
                class="w-24 p-2 bg-gray-700 rounded-md text-right"
            />
        </div>
    }
}
