//! Listado Frontend App
//!
//! Startup: wait for the page, find its controls, mount the row view into the
//! container and bind the add/clear controls.

use leptos::prelude::*;
use listado_core::{ListStore, ListadoConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::ListRows;
use crate::context::ListContext;
use crate::controls;
use crate::page::PageElements;
use crate::storage::BrowserStorage;

/// Start now, or on `DOMContentLoaded` if the document is still loading.
pub fn run_when_ready(config: ListadoConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("no document available, not starting");
        return;
    };

    if document.ready_state() != "loading" {
        start(config);
        return;
    }

    let mut pending = Some(config);
    let on_ready = Closure::<dyn FnMut()>::new(move || {
        if let Some(config) = pending.take() {
            start(config);
        }
    });
    if let Err(err) = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
    {
        log::error!("failed to wait for DOMContentLoaded: {:?}", err);
    }
    on_ready.forget();
}

fn start(config: ListadoConfig) {
    let page = match PageElements::locate(&config) {
        Ok(page) => page,
        Err(err) => {
            log::error!("page is missing a control: {}", err);
            return;
        }
    };

    // Rows are owned by the view from here on
    page.container.set_inner_html("");
    let container = page.container.clone();
    leptos::mount::mount_to(container, move || view! { <App page=page config=config /> }).forget();
    log::info!("listado started");
}

#[component]
fn App(page: PageElements, config: ListadoConfig) -> impl IntoView {
    let list = ListStore::new(BrowserStorage, config.storage_key.clone());
    let ctx = ListContext::new(list, config);
    provide_context(ctx);

    controls::bind(ctx, &page);

    view! { <ListRows /> }
}
