//! Freehand painting core: canvas, stroke rasterizer, undo journal, pen
//! state machine and the per-frame controller, plus the minifb host window.

pub mod app;
pub mod canvas;
pub mod color;
pub mod config;
pub mod draw;
pub mod error;
pub mod journal;
pub mod pen;
pub mod raster;
pub mod types;
pub mod vec2;
