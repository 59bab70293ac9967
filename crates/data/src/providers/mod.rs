//! Market snapshot sources.

mod static_catalog;

pub use static_catalog::StaticMarketCatalog;

use crate::error::DataError;
use looplab_domain::entities::{Market, MarketSnapshot};
use looplab_domain::enums::{Network, ProviderName};

/// Resolves market ids to their current parameters.
pub trait MarketSnapshotSource {
    /// # Errors
    /// Returns [`DataError::MarketNotFound`] for an unknown id.
    fn snapshot(&self, market_id: &str) -> Result<MarketSnapshot, DataError>;

    /// Markets deployed on `network` by `provider`.
    fn list_markets(&self, network: Network, provider: ProviderName) -> Vec<Market>;

    /// Assets usable in `market_id`; empty for an unknown market.
    fn list_assets(&self, market_id: &str) -> Vec<String>;

    /// Default `(collateral, debt)` pair: the first and last listed assets.
    fn default_assets(&self, market_id: &str) -> Option<(String, String)> {
        let assets = self.list_assets(market_id);
        match (assets.first(), assets.last()) {
            (Some(collateral), Some(debt)) => Some((collateral.clone(), debt.clone())),
            _ => None,
        }
    }
}
