//! Random products and the pickers orders draw them from.

use super::names::{FILLINGS, PASTRY_TYPES};
use rand::Rng;
use rand_distr::StandardNormal;

const GAUSSIAN_CUTOFF: f64 = 2.5;

/// Number of distinct names [`random_product_name`] can produce.
pub const DISTINCT_PRODUCT_NAMES: usize = FILLINGS.len() * FILLINGS.len() * PASTRY_TYPES.len();

/// Picks a uniformly random element of a non-empty slice.
pub fn pick<'a, R: Rng + ?Sized>(rng: &mut R, words: &[&'a str]) -> &'a str {
    words[rng.random_range(0..words.len())]
}

/// Builds a name such as "Vanilla Muffin" or "Strawberry Chocolate Tart".
///
/// Two-filling names never repeat the same filling.
pub fn random_product_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = pick(rng, FILLINGS);
    let mut name = first.to_string();
    if rng.random_bool(0.5) {
        let second = loop {
            let candidate = pick(rng, FILLINGS);
            if candidate != first {
                break candidate;
            }
        };
        name.push(' ');
        name.push_str(second);
    }
    name.push(' ');
    name.push_str(pick(rng, PASTRY_TYPES));
    name
}

/// Price in cents between 2.00 and 102.00.
#[allow(clippy::cast_possible_truncation)]
pub fn random_price<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    let dollars = 2.0 + rng.random::<f64>() * 100.0;
    (dollars * 100.0) as i32
}

/// Hands out catalog entries with a bell-shaped preference for the middle of
/// the list, so a few products dominate the order book.
#[derive(Debug, Clone)]
pub struct WeightedPicker<T> {
    items: Vec<T>,
}

impl<T> WeightedPicker<T> {
    /// `items` must not be empty.
    #[must_use]
    pub const fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Samples a standard normal value, clamps it to ±2.5 and maps it onto the
    /// index range.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        let g: f64 = rng.sample(StandardNormal);
        let unit = (g.clamp(-GAUSSIAN_CUTOFF, GAUSSIAN_CUTOFF) + GAUSSIAN_CUTOFF)
            / (GAUSSIAN_CUTOFF * 2.0);
        let index = (unit * (self.items.len() - 1) as f64) as usize;
        &self.items[index.min(self.items.len() - 1)]
    }
}

/// Hands out entries with equal probability.
#[derive(Debug, Clone)]
pub struct UniformPicker<T> {
    items: Vec<T>,
}

impl<T> UniformPicker<T> {
    /// `items` must not be empty.
    #[must_use]
    pub const fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        &self.items[rng.random_range(0..self.items.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_product_names_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            let name = random_product_name(&mut rng);
            // "Cheese Cake" also ends with "Cake"
            let pastry = PASTRY_TYPES
                .iter()
                .filter(|t| name.ends_with(*t))
                .max_by_key(|t| t.len())
                .expect("name ends with a pastry type");
            let fillings: Vec<_> = name[..name.len() - pastry.len()].split_whitespace().collect();
            assert!(matches!(fillings.len(), 1 | 2), "{name}");
            assert!(fillings.iter().all(|f| FILLINGS.contains(f)), "{name}");
            if fillings.len() == 2 {
                assert_ne!(fillings[0], fillings[1]);
            }
        }
    }

    #[test]
    fn test_name_space_is_exhausted_exactly() {
        let mut rng = StdRng::seed_from_u64(3);
        let names: HashSet<String> = (0..20_000)
            .map(|_| random_product_name(&mut rng))
            .collect();
        assert_eq!(names.len(), DISTINCT_PRODUCT_NAMES);
    }

    #[test]
    fn test_prices_in_range() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..1000 {
            let price = random_price(&mut rng);
            assert!((200..10_200).contains(&price));
        }
    }

    #[test]
    fn test_weighted_picker_prefers_the_middle() {
        let mut rng = StdRng::seed_from_u64(4);
        let picker = WeightedPicker::new((0..8).collect::<Vec<u32>>());
        let mut hits: HashMap<u32, u32> = HashMap::new();
        for _ in 0..10_000 {
            *hits.entry(*picker.pick(&mut rng)).or_default() += 1;
        }
        let middle = hits.get(&3).copied().unwrap_or_default();
        let edge = hits.get(&0).copied().unwrap_or_default();
        assert!(middle > edge * 3, "{hits:?}");
        assert!(hits.keys().all(|k| *k < 8));
    }

    #[test]
    fn test_uniform_picker_covers_all() {
        let mut rng = StdRng::seed_from_u64(6);
        let picker = UniformPicker::new(vec!["Store", "Bakery"]);
        let picks: Vec<_> = (0..100).map(|_| *picker.pick(&mut rng)).collect();
        assert!(picks.contains(&"Store"));
        assert!(picks.contains(&"Bakery"));
    }
}
