//! # Item source abstraction and function-backed implementation.
//!
//! This module defines the [`Supply`] trait (one item per call, no shared
//! caches) and a convenient closure-backed implementation [`SupplyFn`].
//!
//! A supply is injected into the publisher and cloned into every
//! subscription, so a gate never reaches through hidden global state to
//! produce its items.

use std::sync::Arc;

/// # Per-emission item source.
///
/// Invoked exactly once per permitted emission, synchronously inside
/// `request`. Treated as a pure value supplier by the protocol: it may be
/// deterministic (counters, fixtures) or random (generated addresses), but
/// it must not block and must not depend on how often other subscriptions
/// have drawn from their own clones.
///
/// # Example
/// ```
/// use demandflow::Supply;
///
/// #[derive(Clone)]
/// struct Fixed;
///
/// impl Supply for Fixed {
///     type Item = &'static str;
///
///     fn draw(&self) -> &'static str {
///         "item"
///     }
/// }
///
/// assert_eq!(Fixed.draw(), "item");
/// ```
pub trait Supply: Send + Sync + 'static {
    /// The payload type produced for the subscriber.
    type Item;

    /// Produces the next item.
    fn draw(&self) -> Self::Item;
}

/// Closure-backed [`Supply`].
///
/// Wraps any `Fn() -> T` so ad-hoc sources don't need a named type; clones
/// share the same closure, which is fine for stateless suppliers and exactly
/// what tests want for counting ones.
///
/// # Example
/// ```
/// use demandflow::{Supply, SupplyFn};
///
/// let supply = SupplyFn::new(|| 42u32);
/// assert_eq!(supply.draw(), 42);
/// ```
pub struct SupplyFn<T> {
    f: Arc<dyn Fn() -> T + Send + Sync>,
}

impl<T> SupplyFn<T> {
    /// Wraps a closure as a supply.
    pub fn new(f: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self { f: Arc::new(f) }
    }
}

impl<T> Clone for SupplyFn<T> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

impl<T: Send + Sync + 'static> Supply for SupplyFn<T> {
    type Item = T;

    fn draw(&self) -> T {
        (self.f)()
    }
}
