//! **gamesearch-core**: shared types for the *gamesearch* crates.
//!
//! This crate provides the geometry used to address grid tiles ([`Point`],
//! [`Range`]), the floating-point world vector used for tile centres and
//! moving agents ([`Vec2`]), and the [`SearchError`] type returned by every
//! search and decision entry point.

pub mod error;
pub mod geom;
pub mod vec2;

pub use error::{SearchError, SearchResult};
pub use geom::{Point, Range};
pub use vec2::Vec2;
