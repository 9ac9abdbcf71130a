//! Empty Row Component

use leptos::prelude::*;

use crate::context::use_list_context;

/// Placeholder shown instead of rows when the list is empty
#[component]
pub fn EmptyRow() -> impl IntoView {
    let ctx = use_list_context();
    let text = ctx.config(|c| c.empty_text.clone());

    view! {
        <li class="list-group-item text-muted text-center">{text}</li>
    }
}
