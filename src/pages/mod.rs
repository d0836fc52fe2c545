//! Console Screens

mod dashboard;
mod login;
mod posts;
mod profiles;
mod reports;
mod settings;
mod users;
mod watches;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use posts::{PostEditPage, PostViewPage, PostsPage};
pub use profiles::{ProfileEditPage, ProfileViewPage, ProfilesPage};
pub use reports::ProfileReportsPage;
pub use settings::SettingsPage;
pub use users::UsersPage;
pub use watches::{WatchEditPage, WatchViewPage, WatchesPage};
