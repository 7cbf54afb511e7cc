//! # Dough
//!
//! Pie crusts and the recipes they are rolled from.

pub mod crust;

pub use crust::Crust;
