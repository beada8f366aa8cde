//! # Random email-address supply.
//!
//! [`EmailSupply`] is the reference item source: each draw produces a fresh
//! `first.last@domain` address from small fixed word lists. The supply keeps
//! no state between draws and no caches shared between clones, so every
//! subscription samples independently.

use rand::Rng;

use crate::supply::Supply;

const FIRST_NAMES: &[&str] = &[
    "alice", "bruno", "chiara", "daniel", "elif", "franka", "goran", "hana", "ivan", "jana",
    "karim", "lena", "marco", "nadia", "otto", "priya",
];

const LAST_NAMES: &[&str] = &[
    "adler", "bishop", "costa", "dvorak", "egger", "fontane", "garcia", "holt", "ibarra",
    "jensen", "kovacs", "lindt", "moreau", "novak", "okafor", "petrov",
];

const DOMAINS: &[&str] = &["example.com", "example.org", "mail.test", "inbox.test"];

/// Stateless random email generator.
///
/// # Example
/// ```
/// use demandflow::{EmailSupply, Supply};
///
/// let address = EmailSupply::default().draw();
/// assert!(address.contains('@'));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct EmailSupply;

impl Supply for EmailSupply {
    type Item = String;

    fn draw(&self) -> String {
        let mut rng = rand::rng();
        let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
        let domain = DOMAINS[rng.random_range(0..DOMAINS.len())];
        format!("{first}.{last}@{domain}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_shape() {
        let supply = EmailSupply;
        for _ in 0..50 {
            let address = supply.draw();
            let (local, domain) = address.split_once('@').expect("local@domain shape");
            let (first, last) = local.split_once('.').expect("first.last local part");
            assert!(FIRST_NAMES.contains(&first), "unknown first name {first}");
            assert!(LAST_NAMES.contains(&last), "unknown last name {last}");
            assert!(DOMAINS.contains(&domain), "unknown domain {domain}");
        }
    }

    #[test]
    fn test_clones_draw_independently() {
        let a = EmailSupply;
        let b = a;
        // Both clones stay usable; no shared exhaustion or caching.
        for _ in 0..10 {
            assert!(a.draw().contains('@'));
            assert!(b.draw().contains('@'));
        }
    }
}
