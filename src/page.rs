//! Page Elements
//!
//! The controls the page provides up front. They are looked up by id and never
//! created here.

use listado_core::ListadoConfig;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlElement, HtmlInputElement};

pub struct PageElements {
    pub input: HtmlInputElement,
    /// Rows are rendered as children of this element
    pub container: HtmlElement,
    pub add_button: HtmlElement,
    pub clear_button: HtmlButtonElement,
}

impl PageElements {
    pub fn locate(config: &ListadoConfig) -> Result<Self, String> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "no document".to_string())?;

        Ok(Self {
            input: find(&document, &config.input_id)?,
            container: find(&document, &config.container_id)?,
            add_button: find(&document, &config.add_button_id)?,
            clear_button: find(&document, &config.clear_button_id)?,
        })
    }
}

fn find<T: JsCast>(document: &Document, id: &str) -> Result<T, String> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| format!("no element #{}", id))?
        .dyn_into::<T>()
        .map_err(|el| format!("#{} is a <{}>, not the expected control", id, el.tag_name().to_lowercase()))
}
