//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use std::sync::Arc;

use crate::core::state::App;
use crate::lookup::{Country, CountrySource, LookupError};

/// The fixture most tests resolve to.
pub fn norway() -> Country {
    Country {
        name: "Norway".to_string(),
        capital: "Oslo".to_string(),
        alt_spellings: vec![
            "NO".to_string(),
            "Kingdom of Norway".to_string(),
            "Noreg".to_string(),
        ],
    }
}

/// A source that answers every lookup with the same record.
pub struct StaticSource(pub Country);

#[async_trait]
impl CountrySource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn lookup(&self, _country_name: &str) -> Result<Country, LookupError> {
        Ok(self.0.clone())
    }
}

/// A source that fails every lookup with a not-found status.
pub struct FailingSource;

#[async_trait]
impl CountrySource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn lookup(&self, _country_name: &str) -> Result<Country, LookupError> {
        Err(LookupError::InvalidName { status: 404 })
    }
}

/// Creates a test App backed by a StaticSource.
pub fn test_app() -> App {
    App::new(Arc::new(StaticSource(norway())))
}
