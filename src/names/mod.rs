//! Static, read-only name pool keyed by country.

pub mod data;

#[cfg(test)]
mod tests;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// Country selected when the table is empty.
pub const FALLBACK_COUNTRY: &str = "Australia";

#[derive(Debug, Clone, Serialize)]
pub struct CountryPool {
    pub country: String,
    pub names: Vec<String>,
}

/// Country-keyed candidate names plus the flattened list of all of them.
#[derive(Debug, Clone, Default)]
pub struct NamePool {
    countries: Vec<CountryPool>,
    combined: Vec<String>,
}

impl NamePool {
    /// The compiled-in offline table.
    pub fn builtin() -> Self {
        Self::from_table(data::NAMES_BY_COUNTRY.iter().map(|(country, names)| {
            (country.to_string(), names.iter().map(|n| n.to_string()).collect())
        }))
    }

    /// Builds a pool from `(country, names)` pairs, keeping their order.
    /// A repeated country extends the earlier entry.
    pub fn from_table<I>(table: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut countries: Vec<CountryPool> = Vec::new();
        for (country, names) in table {
            match countries.iter_mut().find(|c| c.country == country) {
                Some(existing) => existing.names.extend(names),
                None => countries.push(CountryPool { country, names }),
            }
        }
        let combined = countries
            .iter()
            .flat_map(|c| c.names.iter().cloned())
            .collect();

        Self {
            countries,
            combined,
        }
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.countries.iter().map(|c| c.country.as_str())
    }

    /// First declared country, or [`FALLBACK_COUNTRY`].
    pub fn default_country(&self) -> &str {
        self.countries
            .first()
            .map(|c| c.country.as_str())
            .unwrap_or(FALLBACK_COUNTRY)
    }

    pub fn get(&self, country: &str) -> Option<&[String]> {
        self.countries
            .iter()
            .find(|c| c.country == country)
            .map(|c| c.names.as_slice())
    }

    pub fn combined(&self) -> &[String] {
        &self.combined
    }

    /// Candidates for `country`, falling back to the combined list when the
    /// country is unknown.
    pub fn pool_for(&self, country: &str) -> &[String] {
        self.get(country).unwrap_or(&self.combined)
    }

    /// Uniform draw from [`NamePool::pool_for`]. `None` only when that pool is empty.
    pub fn draw<R: Rng + ?Sized>(&self, country: &str, rng: &mut R) -> Option<&str> {
        self.pool_for(country).choose(rng).map(String::as_str)
    }
}
