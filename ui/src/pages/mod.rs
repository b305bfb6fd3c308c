pub mod autorole;
pub mod dashboard;
pub mod home;
pub mod logging;
pub mod moderation;
pub mod not_found;
pub mod staff;
pub mod verification;

pub use autorole::AutoRolePage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use logging::LoggingPage;
pub use moderation::ModerationPage;
pub use not_found::NotFoundPage;
pub use staff::StaffPage;
pub use verification::VerificationPage;
