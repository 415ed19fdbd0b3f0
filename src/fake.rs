//! Fake data generation helpers.
//!
//! Thin wrapper around the `fake` crate plus the bounded-random primitives
//! the base schemas and declared fields need. All draws go through the
//! injected RNG so a seeded run is fully reproducible.

use chrono::{Datelike, Local, NaiveDate};
use fake::faker::name::raw::Name;
use fake::locales::PT_BR;
use fake::Fake;
use rand::Rng;

/// Fake data generator over an injected RNG
pub struct FakeData<R: Rng> {
    rng: R,
}

impl<R: Rng> FakeData<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a full personal name (pt-BR locale, may carry diacritics)
    pub fn person_name(&mut self) -> String {
        Name(PT_BR).fake_with_rng(&mut self.rng)
    }

    /// Generate a random date within the current year
    pub fn date_this_year(&mut self) -> NaiveDate {
        let year = Local::now().year();
        let days: u32 = if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
            366
        } else {
            365
        };
        let ordinal = self.rng.random_range(1..=days);
        NaiveDate::from_yo_opt(year, ordinal).expect("ordinal within year")
    }

    /// Uniform draw from `[min, max]` rounded to the given number of decimals
    pub fn uniform_rounded(&mut self, min: f64, max: f64, decimals: i32) -> f64 {
        let value = self.rng.random_range(min..=max);
        let factor = 10f64.powi(decimals);
        (value * factor).round() / factor
    }

    /// Pick a random element from a non-empty slice
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.rng.random_range(0..items.len())]
    }
}
