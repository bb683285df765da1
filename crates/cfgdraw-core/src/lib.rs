//! cfgdraw Core Types
//!
//! This crate provides the rendering foundation of cfgdraw diagrams:
//!
//! - **Geometry**: Vectors, bounding boxes and the grid-to-canvas map ([`geometry`] module)
//! - **Colors**: CSS colors and the `none` paint ([`color::Color`], [`color::Paint`])
//! - **Draw**: Styled primitives and the SVG document ([`draw`] module)
//! - **Errors**: Construction and output failures ([`error`] module)

pub mod color;
pub mod draw;
pub mod error;
pub mod geometry;
