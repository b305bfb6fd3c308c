//! Editable form state for the settings pages.
//!
//! Each page holds one of these structs in a `use_state` handle. Numeric
//! fields stay as raw strings while the user types and are parsed only
//! when building the wire payload, so the inputs never fight the user.

pub mod autorole;
pub mod logging;
pub mod moderation;
pub mod staff;
pub mod verification;

pub use autorole::AutoRoleForm;
pub use logging::LoggingForm;
pub use moderation::{ModerationForm, TierForm};
pub use staff::{PUNISHMENT_ACTIONS, StaffForm, TeamForm};
pub use verification::VerificationForm;
