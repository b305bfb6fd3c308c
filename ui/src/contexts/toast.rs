use std::cell::Cell;
use yew::prelude::*;

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 3_000;

thread_local! {
    static NEXT_TOAST_ID: Cell<u64> = const { Cell::new(0) };
}

fn next_toast_id() -> u64 {
    NEXT_TOAST_ID.with(|id| {
        let value = id.get();
        id.set(value + 1);
        value
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToastType {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub toast_type: ToastType,
}

impl Toast {
    pub fn new(message: String, toast_type: ToastType) -> Self {
        Self {
            id: next_toast_id(),
            message,
            toast_type,
        }
    }

    pub fn error(message: String) -> Self {
        Self::new(message, ToastType::Error)
    }

    pub fn success(message: String) -> Self {
        Self::new(message, ToastType::Success)
    }
}

/// There is a single toast slot. Showing a new toast replaces whatever
/// is on screen and restarts the dismiss timer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub current: Option<Toast>,
}

pub enum ToastAction {
    Show(Toast),
    Dismiss(u64),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(
        self: std::rc::Rc<Self>,
        action: Self::Action,
    ) -> std::rc::Rc<Self> {
        let current = match action {
            ToastAction::Show(toast) => Some(toast),
            // A dismiss only lands if the toast it was scheduled for is
            // still the one on screen. Timers of replaced toasts no-op.
            ToastAction::Dismiss(id) => match &self.current {
                Some(toast) if toast.id == id => None,
                other => other.clone(),
            },
        };

        std::rc::Rc::new(ToastState { current })
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone)]
pub struct ToastHandle {
    context: ToastContext,
}

impl ToastHandle {
    pub fn new(context: ToastContext) -> Self {
        Self { context }
    }

    pub fn show(&self, toast: Toast) {
        let toast_id = toast.id;
        let context = self.context.clone();

        self.context.dispatch(ToastAction::Show(toast));

        yew::platform::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
            context.dispatch(ToastAction::Dismiss(toast_id));
        });
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(Toast::error(message.into()));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(Toast::success(message.into()));
    }

    pub fn dismiss(&self, id: u64) {
        self.context.dispatch(ToastAction::Dismiss(id));
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    let context = use_context::<ToastContext>()
        .expect("use_toast must be used within a ToastProvider");
    ToastHandle::new(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn showing_replaces_the_current_toast() {
        let state = Rc::new(ToastState::default());
        let first = Toast::success("Logging settings saved!".to_string());
        let second = Toast::error("Error saving settings.".to_string());
        let second_id = second.id;

        let state = state.reduce(ToastAction::Show(first));
        let state = state.reduce(ToastAction::Show(second));

        let current = state.current.as_ref().unwrap();
        assert_eq!(current.id, second_id);
        assert_eq!(current.message, "Error saving settings.");
    }

    #[test]
    fn stale_timer_dismiss_is_ignored() {
        let state = Rc::new(ToastState::default());
        let first = Toast::success("first".to_string());
        let first_id = first.id;
        let second = Toast::success("second".to_string());
        let second_id = second.id;

        let state = state.reduce(ToastAction::Show(first));
        let state = state.reduce(ToastAction::Show(second));
        // The replaced toast's timer fires; the visible toast stays.
        let state = state.reduce(ToastAction::Dismiss(first_id));
        assert_eq!(state.current.as_ref().map(|t| t.id), Some(second_id));

        let state = state.reduce(ToastAction::Dismiss(second_id));
        assert!(state.current.is_none());
    }

    #[test]
    fn dismiss_on_empty_slot_is_a_no_op() {
        let state = Rc::new(ToastState::default());
        let state = state.reduce(ToastAction::Dismiss(42));
        assert!(state.current.is_none());
    }
}
