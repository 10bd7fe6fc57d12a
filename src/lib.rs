//! gridscope: an infinite, pannable and zoomable grid viewer for the browser.
//!
//! This crate is the browser host. It binds a [`Viewer`] to a canvas element,
//! forwards DOM input to the `canvas` engine crate and drives the
//! animation-frame loop. All viewer state and drawing lives in the engine.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`viewer`] | `wasm_bindgen` entry point and DOM event wiring |
//! | [`dom`] | DOM implementations of the engine's wheel traits |
//! | [`frame_loop`] | Self-rescheduling `requestAnimationFrame` loop |
//! | [`error`] | Host error type |

pub mod dom;
pub mod error;
pub mod frame_loop;
pub mod viewer;

pub use error::HostError;
pub use viewer::Viewer;

/// Install the panic hook and the console logger. Safe to call more than once.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}
