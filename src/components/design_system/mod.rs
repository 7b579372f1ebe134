//! Reusable UI components shared across pages.

mod badge;
mod loading;
mod modal;
mod toast;

pub use badge::{status_badge_class, Badge};
pub use loading::LoadingSpinner;
pub use modal::Modal;
pub use toast::ToastContainer;
