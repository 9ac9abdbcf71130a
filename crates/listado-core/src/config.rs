//! Page Configuration
//!
//! Storage key, ids of the pre-existing page elements, and user-facing text.

/// Settings shared by the store and the page binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListadoConfig {
    /// localStorage key holding the JSON array
    pub storage_key: String,
    /// Text input the user types entries into
    pub input_id: String,
    /// Container whose children are the rendered rows
    pub container_id: String,
    pub add_button_id: String,
    pub clear_button_id: String,
    /// Placeholder row text when the list is empty
    pub empty_text: String,
    pub delete_label: String,
    /// Yes/no prompt shown before clearing everything
    pub clear_prompt: String,
}

impl Default for ListadoConfig {
    fn default() -> Self {
        Self {
            storage_key: "listadoItems".to_string(),
            input_id: "item".to_string(),
            container_id: "contenedor".to_string(),
            add_button_id: "agregar".to_string(),
            clear_button_id: "limpiar".to_string(),
            empty_text: "No hay ítems.".to_string(),
            delete_label: "Eliminar".to_string(),
            clear_prompt: "¿Eliminar todo el listado?".to_string(),
        }
    }
}

impl ListadoConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
