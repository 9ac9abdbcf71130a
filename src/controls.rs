//! Control Bindings
//!
//! Behavior for the page's own input, add and clear controls.

use leptos::prelude::*;
use listado_core::{AddOutcome, ListView};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlInputElement, KeyboardEvent};

use crate::context::ListContext;
use crate::page::PageElements;
use crate::store::ListadoStateStoreFields;

pub fn bind(ctx: ListContext, page: &PageElements) {
    let input = page.input.clone();
    listen(&page.add_button, "click", move |_| submit_entry(ctx, &input));

    let input = page.input.clone();
    listen(&page.input, "keydown", move |ev| {
        let is_enter = ev
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|key| key.key() == "Enter");
        if is_enter {
            submit_entry(ctx, &input);
        }
    });

    listen(&page.clear_button, "click", move |_| {
        let prompt = ctx.config(|c| c.clear_prompt.clone());
        if confirm(&prompt) {
            ctx.clear_all();
        }
    });

    let clear_button = page.clear_button.clone();
    Effect::new(move |_| {
        let enabled = ctx.state.items().with(|items| ListView::from_items(items).clear_enabled());
        clear_button.set_disabled(!enabled);
    });
}

/// Add whatever is in the input. Blank input changes nothing, not even the field.
fn submit_entry(ctx: ListContext, input: &HtmlInputElement) {
    if let AddOutcome::Added { index } = ctx.add(&input.value()) {
        log::debug!("entry {} added from input", index);
        input.set_value("");
        if let Err(err) = input.focus() {
            log::debug!("could not refocus input: {:?}", err);
        }
    }
}

fn confirm(prompt: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) =
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
    {
        log::error!("failed to bind {}: {:?}", event, err);
    }
    callback.forget();
}
