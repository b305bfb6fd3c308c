use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SettingsFormProps {
    pub title: AttrValue,
    pub save_label: AttrValue,
    pub is_saving: bool,
    pub on_save: Callback<()>,
    pub children: Children,
}

/// Shared chrome for the settings panels: heading, sectioned form body,
/// and a submit button that swaps to "Saving..." while the request is
/// in flight. Submission never navigates; the outcome lands in a toast.
#[function_component]
pub fn SettingsForm(props: &SettingsFormProps) -> Html {
    let onsubmit = {
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_save.emit(());
        })
    };

    html! {
        <div>
            <h2 class="text-3xl font-bold mb-6">{&props.title}</h2>
            <form {onsubmit} class="bg-gray-800 p-8 rounded-lg max-w-4xl space-y-8">
                {for props.children.iter()}
                <div class="border-t border-gray-700 pt-6">
                    <button
                        type="submit"
                        disabled={props.is_saving}
                        class="bg-blue-600 hover:bg-blue-700 text-white font-bold py-3 px-6 rounded-lg text-lg disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        {if props.is_saving {
                            "Saving..."
                        } else {
                            props.save_label.as_str()
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}
