use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextAreaFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or(3)]
    pub rows: u32,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
}

#[function_component]
pub fn TextAreaField(props: &TextAreaFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(area.value());
        })
    };

    html! {
        <div>
            <label class="block text-sm font-medium text-gray-300 mb-2">
                {&props.label}
            </label>
            <textarea
                value={props.value.clone()}
                {oninput}
                rows={props.rows.to_string()}
                placeholder={props.placeholder.clone()}
                class="w-full p-2 bg-gray-700 rounded-md"
            />
        </div>
    }
}
