pub mod channel_select;
pub mod checkbox_field;
pub mod error_panel;
pub mod guild_page_wrapper;
pub mod layout;
pub mod number_input;
pub mod role_bubbles;
pub mod role_select;
pub mod server_card;
pub mod settings_form;
pub mod text_area_field;
pub mod toast;
pub mod toggle_switch;

pub use channel_select::ChannelSelect;
pub use checkbox_field::CheckboxField;
pub use error_panel::ErrorPanel;
pub use guild_page_wrapper::{GuildPageWrapper, GuildPanelContext};
pub use number_input::NumberInput;
pub use role_bubbles::RoleBubbles;
pub use role_select::RoleSelect;
pub use server_card::ServerCard;
pub use settings_form::SettingsForm;
pub use text_area_field::TextAreaField;
pub use toast::ToastContainer;
pub use toggle_switch::ToggleSwitch;
