use leptos::prelude::*;

use crate::services::notification_service::{use_notification_state, Toast, ToastKind};

/// Renders the active toasts in the top-right corner. Mount once at the app
/// root, inside the notification context.
#[component]
pub fn ToastContainer() -> impl IntoView {
    let state = use_notification_state();

    view! {
        <div class="fixed top-4 right-4 z-[60] flex flex-col gap-2 pointer-events-none">
            {move || {
                state
                    .toasts
                    .get()
                    .into_iter()
                    .map(|toast| view! { <ToastView toast=toast /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn ToastView(toast: Toast) -> impl IntoView {
    let state = use_notification_state();
    let id = toast.id;

    let (accent_class, icon) = match toast.kind {
        ToastKind::Success => ("border-l-4 border-green-500", "✓"),
        ToastKind::Error => ("border-l-4 border-red-500", "⚠"),
    };

    let icon_class = match toast.kind {
        ToastKind::Success => "text-green-600",
        ToastKind::Error => "text-red-600",
    };

    view! {
        <div
            class=format!(
                "pointer-events-auto min-w-[260px] max-w-sm bg-white border border-gray-200 shadow-lg rounded px-4 py-3 flex items-center gap-3 {accent_class}"
            )
            role="alert"
        >
            <span class=format!("text-lg {icon_class}")>{icon}</span>
            <span class="flex-1 text-sm font-medium text-gray-800">{toast.message}</span>
            <button
                class="text-gray-400 hover:text-gray-700"
                aria-label="Close"
                on:click=move |_| state.dismiss(id)
            >
                "×"
            </button>
        </div>
    }
}
