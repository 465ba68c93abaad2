//! HTTP handlers for the root greeting and the movies resource.

pub mod index;
pub mod movies;
pub use index::index;
