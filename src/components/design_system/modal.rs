use leptos::ev;
use leptos::prelude::*;

/// A right-anchored overlay panel. Clicking the backdrop is equivalent to an
/// explicit cancel; clicks inside the panel do not propagate out.
///
/// Children are re-created each time the modal opens, so the content always
/// reflects the state selected at open time.
#[component]
pub fn Modal(
    /// Whether the modal is visible
    #[prop(into)]
    is_open: Signal<bool>,
    /// Invoked on backdrop click
    #[prop(into)]
    on_close: Callback<()>,
    /// Additional CSS classes for the panel
    #[prop(into, optional)]
    class: String,
    /// Modal content
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <div
                class="fixed inset-0 bg-black/50 z-50"
                on:mousedown=move |_| on_close.run(())
            >
                <div
                    class=format!(
                        "fixed top-0 right-0 h-full w-[30rem] bg-white rounded-l shadow-lg overflow-hidden {class}"
                    )
                    on:mousedown=|evt: ev::MouseEvent| evt.stop_propagation()
                >
                    {children()}
                </div>
            </div>
        </Show>
    }
}
