//! Listado Frontend Entry Point

mod app;
mod components;
mod context;
mod controls;
mod page;
mod storage;
mod store;

use listado_core::ListadoConfig;
use log::Level;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    app::run_when_ready(ListadoConfig::default());
}
