//! List Rows Component
//!
//! Rebuilds every row whenever the list is re-rendered.

use leptos::prelude::*;
use listado_core::ListView;

use crate::components::{EmptyRow, ItemRow};
use crate::context::use_list_context;
use crate::store::ListadoStateStoreFields;

#[component]
pub fn ListRows() -> impl IntoView {
    let ctx = use_list_context();

    move || match ListView::from_items(&ctx.state.items().get()) {
        ListView::Empty => view! { <EmptyRow /> }.into_any(),
        ListView::Rows(rows) => rows
            .into_iter()
            .map(|row| view! { <ItemRow row=row /> })
            .collect_view()
            .into_any(),
    }
}
