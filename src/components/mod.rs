//! Shared UI Components

mod admin_sidebar;
mod delete_confirm_modal;
mod image_picker;
mod status_badge;
mod top_bar;

pub use admin_sidebar::AdminSidebar;
pub use delete_confirm_modal::DeleteConfirmModal;
pub use image_picker::ImagePicker;
pub use status_badge::StatusBadge;
pub use top_bar::TopBar;
