//! Item Row Component

use leptos::prelude::*;
use listado_core::Row;

use crate::context::use_list_context;

/// One entry with its delete control.
///
/// The control removes by the index captured here, at render time.
#[component]
pub fn ItemRow(row: Row) -> impl IntoView {
    let ctx = use_list_context();
    let index = row.index;
    let label = ctx.config(|c| c.delete_label.clone());

    view! {
        <li class="list-group-item d-flex justify-content-between align-items-center">
            {row.text}
            <button
                type="button"
                class="btn btn-sm btn-outline-secondary"
                on:click=move |_| ctx.remove_at(index)
            >
                {label}
            </button>
        </li>
    }
}
