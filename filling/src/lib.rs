//! # Filling
//!
//! What goes inside the pie.

pub mod apple;

pub use apple::Apple;
