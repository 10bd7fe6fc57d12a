//! Grid viewer engine: camera, grid geometry, wheel normalization and rendering.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! viewer's state: translating raw input events into camera and cursor
//! mutations, computing the grid to draw, and drawing each frame. The host
//! layer is responsible only for wiring DOM events to the engine and driving
//! the animation-frame loop.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`grid`] | Grid-in-circle segment geometry |
//! | [`wheel`] | Cross-browser wheel listener registration and delta normalization |
//! | [`input`] | Drag gesture state machine |
//! | [`render`] | Frame rendering against a 2D [`render::Surface`] |
//! | [`config`] | Viewer configuration and validation |
//! | [`consts`] | Default colors, zoom limits, grid dimensions and marker sizes |

pub mod camera;
pub mod config;
pub mod consts;
pub mod engine;
pub mod grid;
pub mod input;
pub mod render;
pub mod wheel;
