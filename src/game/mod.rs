//! Game-side entities and the box selection predicate
//!
//! - selection: `Selectable` trait and `select_units`
//! - unit: the demo's units and their grid layout

pub mod selection;
pub mod unit;

pub use selection::{Selectable, select_units};
pub use unit::{GridLayout, Team, Unit, spawn_grid};
