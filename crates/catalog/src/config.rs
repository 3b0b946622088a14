//! Catalog configuration.

use serde::{Deserialize, Serialize};

use alyomi_core::{DomainError, DomainResult};

use crate::pagination::DEFAULT_PAGE_SIZE;

/// Listing sizes used by [`crate::CatalogSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Products per listing page.
    pub page_size: usize,
    /// Products shown on the home view.
    pub home_limit: usize,
    /// Products kept in the hot-deal listing before pagination.
    pub hot_deal_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            home_limit: 50,
            hot_deal_limit: 50,
        }
    }
}

impl CatalogConfig {
    pub fn validate(&self) -> DomainResult<()> {
        if self.page_size == 0 {
            return Err(DomainError::validation("page_size must be at least 1"));
        }
        if self.home_limit == 0 {
            return Err(DomainError::validation("home_limit must be at least 1"));
        }
        if self.hot_deal_limit == 0 {
            return Err(DomainError::validation("hot_deal_limit must be at least 1"));
        }
        Ok(())
    }
}
