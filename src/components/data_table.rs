//! Paged, selectable invoice grid.
//!
//! The table owns its page index and selection set; filtering is entirely the
//! caller's responsibility. Selection deliberately operates over the full
//! dataset: toggling the header checkbox selects every row id the caller
//! passed in, not just the visible page.

use leptos::ev;
use leptos::prelude::*;

use crate::api::invoices::Invoice;
use crate::components::design_system::{Badge, LoadingSpinner};

pub const ROWS_PER_PAGE: usize = 5;

/// Column descriptor. The keys "checkbox" and "status" get special cell
/// rendering; everything else is looked up on the row by key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

pub fn page_count(total_rows: usize, rows_per_page: usize) -> usize {
    total_rows.div_ceil(rows_per_page)
}

/// Half-open slice bounds for a 1-based page, clamped to the dataset.
pub fn page_bounds(total_rows: usize, page: usize, rows_per_page: usize) -> (usize, usize) {
    let start = page.saturating_sub(1).saturating_mul(rows_per_page).min(total_rows);
    let end = (start + rows_per_page).min(total_rows);
    (start, end)
}

/// Every server-assigned id in the dataset, across all pages.
pub fn all_row_ids(rows: &[Invoice]) -> Vec<String> {
    rows.iter().filter_map(|row| row.id.clone()).collect()
}

fn cell_text(value: String) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value
    }
}

const HEADER_CELL: &str =
    "py-2 px-4 text-center bg-gray-100 text-sm font-medium border-b border-gray-200";
const BODY_CELL: &str = "py-2 px-4 text-center text-sm border-b border-gray-200";

#[component]
pub fn DataTable(
    /// Column descriptors, in display order
    columns: &'static [Column],
    /// The full (already filtered) dataset
    #[prop(into)]
    rows: Signal<Vec<Invoice>>,
    /// Replaces the table body with a spinner while true
    #[prop(into)]
    is_loading: Signal<bool>,
    /// Surfaces the full row when its Edit button is clicked
    #[prop(into)]
    on_edit: Callback<Invoice>,
    /// Caller-supplied deletion handler
    #[prop(into)]
    on_delete: Callback<Invoice>,
) -> impl IntoView {
    let current_page = RwSignal::new(1usize);
    let selected_rows = RwSignal::new(Vec::<String>::new());
    let select_all = RwSignal::new(false);

    let total_pages = Signal::derive(move || page_count(rows.with(Vec::len), ROWS_PER_PAGE));
    let paged = Signal::derive(move || {
        rows.with(|data| {
            let (start, end) = page_bounds(data.len(), current_page.get(), ROWS_PER_PAGE);
            data[start..end].to_vec()
        })
    });

    let handle_select_all = move |evt: ev::Event| {
        let checked = event_target_checked(&evt);
        select_all.set(checked);
        selected_rows.set(if checked {
            rows.with(|data| all_row_ids(data))
        } else {
            Vec::new()
        });
    };

    let colspan = (columns.len() + 1).to_string();
    let loading_colspan = colspan.clone();

    view! {
        <div class="w-full">
            <div class="border border-gray-200 rounded-lg w-full overflow-x-auto">
                <table class="table-auto w-full text-left border-collapse">
                    <thead>
                        <tr>
                            {columns
                                .iter()
                                .map(|col| {
                                    if col.key == "checkbox" {
                                        view! {
                                            <th class=HEADER_CELL>
                                                <input
                                                    type="checkbox"
                                                    class="form-checkbox"
                                                    prop:checked=move || select_all.get()
                                                    on:change=handle_select_all
                                                />
                                            </th>
                                        }
                                            .into_any()
                                    } else {
                                        view! { <th class=HEADER_CELL>{col.label}</th> }.into_any()
                                    }
                                })
                                .collect_view()}
                            <th class="py-2 px-2 text-center bg-gray-100 text-sm font-medium border-b border-gray-200">
                                "Action"
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if is_loading.get() {
                                return view! {
                                    <tr>
                                        <td colspan=loading_colspan.clone()>
                                            <LoadingSpinner size="lg" />
                                        </td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            let page_rows = paged.get();
                            if page_rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan=colspan.clone() class="text-center py-4">
                                            "No data found"
                                        </td>
                                    </tr>
                                }
                                    .into_any()
                            } else {
                                page_rows
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, row)| {
                                        view! {
                                            <TableRow
                                                columns=columns
                                                row=row
                                                stripe=index % 2 == 1
                                                selected_rows=selected_rows
                                                on_edit=on_edit
                                                on_delete=on_delete
                                            />
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>
            {move || {
                (!paged.get().is_empty())
                    .then(|| {
                        let page = current_page.get();
                        let total = total_pages.get();
                        view! {
                            <div class="flex justify-end items-center my-4">
                                <button
                                    class="px-3 py-1 bg-gray-300 text-sm font-medium rounded disabled:opacity-50"
                                    disabled=page <= 1
                                    on:click=move |_| current_page.update(|p| *p -= 1)
                                >
                                    "Previous"
                                </button>
                                <div class="mx-2 flex gap-1">
                                    {(1..=total)
                                        .map(|n| {
                                            let active = n == page;
                                            view! {
                                                <button
                                                    class=format!(
                                                        "px-3 py-1 text-sm font-medium rounded {}",
                                                        if active {
                                                            "bg-black text-white"
                                                        } else {
                                                            "bg-gray-500 text-white"
                                                        }
                                                    )
                                                    on:click=move |_| current_page.set(n)
                                                >
                                                    {n}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                <button
                                    class="px-3 py-1 bg-gray-300 text-sm font-medium rounded disabled:opacity-50"
                                    disabled=page >= total
                                    on:click=move |_| current_page.update(|p| *p += 1)
                                >
                                    "Next"
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn TableRow(
    columns: &'static [Column],
    row: Invoice,
    stripe: bool,
    selected_rows: RwSignal<Vec<String>>,
    #[prop(into)] on_edit: Callback<Invoice>,
    #[prop(into)] on_delete: Callback<Invoice>,
) -> impl IntoView {
    let row_id = row.id.clone().unwrap_or_default();
    let edit_row = row.clone();
    let delete_row = row.clone();

    view! {
        <tr class=if stripe { "bg-gray-50" } else { "bg-white" }>
            {columns
                .iter()
                .map(|col| {
                    match col.key {
                        "checkbox" => {
                            let checked_id = row_id.clone();
                            let toggle_id = row_id.clone();
                            view! {
                                <td class=BODY_CELL>
                                    <input
                                        type="checkbox"
                                        class="form-checkbox"
                                        prop:checked=move || {
                                            selected_rows.with(|sel| sel.contains(&checked_id))
                                        }
                                        on:change=move |evt| {
                                            let checked = event_target_checked(&evt);
                                            selected_rows
                                                .update(|sel| {
                                                    if checked {
                                                        if !sel.contains(&toggle_id) {
                                                            sel.push(toggle_id.clone());
                                                        }
                                                    } else {
                                                        sel.retain(|id| id != &toggle_id);
                                                    }
                                                });
                                        }
                                    />
                                </td>
                            }
                                .into_any()
                        }
                        "status" => {
                            view! {
                                <td class=BODY_CELL>
                                    <Badge status=row.status.clone() />
                                </td>
                            }
                                .into_any()
                        }
                        key => {
                            view! { <td class=BODY_CELL>{cell_text(row.field(key))}</td> }
                                .into_any()
                        }
                    }
                })
                .collect_view()}
            <td class="py-2 px-2 text-sm border-b border-gray-200">
                <div class="flex">
                    <button
                        class="px-3 py-1 bg-black text-white text-xs font-medium rounded hover:bg-gray-800"
                        on:click=move |_| on_edit.run(edit_row.clone())
                    >
                        "Edit"
                    </button>
                    <button
                        class="ml-2 px-3 py-1 bg-red-600 text-white text-xs font-medium rounded hover:bg-red-800"
                        on:click=move |_| on_delete.run(delete_row.clone())
                    >
                        "Delete"
                    </button>
                </div>
            </td>
        </tr>
    }
}
