//! # Item sources for publishers.
//!
//! A publisher does not invent its items; it draws them from an injected
//! [`Supply`] — one call per permitted emission, no hidden shared state.
//!
//! ## Contents
//! - [`Supply`] the item-source trait (`draw() -> Item`)
//! - [`SupplyFn`] closure adapter for ad-hoc sources
//! - [`EmailSupply`] the reference random email generator

mod email;
mod source;

pub use email::EmailSupply;
pub use source::{Supply, SupplyFn};
