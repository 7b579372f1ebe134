//! Transient toast notifications, provided as reactive context at the app
//! root. Create, update, and delete paths all report through this single
//! success/failure contract.

use leptos::prelude::*;
use std::time::Duration;
use uuid::Uuid;

const AUTO_DISMISS_MS: u64 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct NotificationState {
    pub toasts: RwSignal<Vec<Toast>>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&self, message: &str) {
        self.push(ToastKind::Error, message);
    }

    fn push(&self, kind: ToastKind, message: &str) {
        let toast = Toast {
            id: Uuid::new_v4(),
            kind,
            message: message.to_string(),
        };
        let id = toast.id;
        self.toasts.update(|list| list.push(toast));

        let toasts = self.toasts;
        set_timeout(
            move || toasts.update(|list| list.retain(|t| t.id != id)),
            Duration::from_millis(AUTO_DISMISS_MS),
        );
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_notification_state() {
    provide_context(NotificationState::new());
}

pub fn use_notification_state() -> NotificationState {
    expect_context::<NotificationState>()
}
