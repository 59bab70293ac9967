use super::MarketSnapshotSource;
use crate::error::DataError;
use looplab_domain::entities::{Market, MarketSnapshot};
use looplab_domain::enums::{Network, ProviderName};
use rust_decimal::Decimal;
use tracing::debug;

struct CatalogEntry {
    market: Market,
    snapshot: MarketSnapshot,
    assets: Vec<String>,
}

/// Built-in set of reference markets.
pub struct StaticMarketCatalog {
    entries: Vec<CatalogEntry>,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

/// `rates` is `[supply, borrow, incentives supply, incentives borrow]`,
/// `risk` is `[ltv, liquidation threshold, liquidation bonus]`.
#[allow(clippy::too_many_arguments)]
fn entry(
    market: Market,
    rates: [Decimal; 4],
    risk: [Decimal; 3],
    available_liquidity: i64,
    utilization: Decimal,
    oracle_type: &str,
    notes: &[&str],
    risk_flags: &[&str],
    assets: &[&str],
) -> CatalogEntry {
    let [supply_apy, borrow_apy, incentives_supply, incentives_borrow] = rates;
    let [ltv, liquidation_threshold, liquidation_bonus] = risk;
    let snapshot = MarketSnapshot {
        market_id: market.id.clone(),
        supply_apy,
        borrow_apy,
        incentives_supply,
        incentives_borrow,
        ltv,
        liquidation_threshold,
        liquidation_bonus,
        available_liquidity: Decimal::from(available_liquidity),
        utilization,
        oracle_type: oracle_type.to_string(),
        notes: strings(notes),
        risk_flags: strings(risk_flags),
    };
    CatalogEntry {
        market,
        snapshot,
        assets: strings(assets),
    }
}

impl StaticMarketCatalog {
    pub fn new() -> Self {
        let entries = vec![
            entry(
                Market::new("eth-aave-usdc", "ETH / USDC Core", Network::Ethereum, ProviderName::AaveV3),
                [Decimal::new(48, 3), Decimal::new(72, 3), Decimal::new(12, 3), Decimal::new(8, 3)],
                [Decimal::new(75, 2), Decimal::new(8, 1), Decimal::new(5, 2)],
                320_000_000,
                Decimal::new(71, 2),
                "Chainlink",
                &["High liquidity", "Stable rewards"],
                &["Rewards may vary"],
                &["ETH", "stETH", "USDC"],
            ),
            entry(
                Market::new("arb-aave-usdc", "ARB / USDC Core", Network::Arbitrum, ProviderName::AaveV3),
                [Decimal::new(52, 3), Decimal::new(79, 3), Decimal::new(15, 3), Decimal::new(1, 2)],
                [Decimal::new(72, 2), Decimal::new(78, 2), Decimal::new(6, 2)],
                180_000_000,
                Decimal::new(64, 2),
                "Chainlink",
                &["L2 environment", "Low latency"],
                &["Congestion risk during peaks"],
                &["ETH", "ARB", "USDC"],
            ),
            entry(
                Market::new("op-morpho-weth", "OP / WETH Boost", Network::Optimism, ProviderName::Morpho),
                [Decimal::new(61, 3), Decimal::new(83, 3), Decimal::new(2, 2), Decimal::new(12, 3)],
                [Decimal::new(7, 1), Decimal::new(76, 2), Decimal::new(55, 3)],
                95_000_000,
                Decimal::new(69, 2),
                "TWAP + Chainlink",
                &["Temporary incentive boost"],
                &["Watch for borrow spikes"],
                &["ETH", "WETH", "USDC"],
            ),
            entry(
                Market::new("base-custom-usdbc", "BASE / USDbC Custom", Network::Base, ProviderName::Custom),
                [Decimal::new(43, 3), Decimal::new(68, 3), Decimal::new(1, 2), Decimal::new(6, 3)],
                [Decimal::new(68, 2), Decimal::new(74, 2), Decimal::new(7, 2)],
                52_000_000,
                Decimal::new(58, 2),
                "Pyth",
                &["Emerging market"],
                &["Moderate liquidity", "Hybrid oracle"],
                &["ETH", "cbETH", "USDbC"],
            ),
        ];
        Self { entries }
    }

    /// Every catalog market, in catalog order.
    pub fn markets(&self) -> impl Iterator<Item = &Market> {
        self.entries.iter().map(|e| &e.market)
    }

    pub fn market(&self, market_id: &str) -> Option<&Market> {
        self.find(market_id).map(|e| &e.market)
    }

    fn find(&self, market_id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.market.id == market_id)
    }
}

impl Default for StaticMarketCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketSnapshotSource for StaticMarketCatalog {
    fn snapshot(&self, market_id: &str) -> Result<MarketSnapshot, DataError> {
        let entry = self
            .find(market_id)
            .ok_or_else(|| DataError::MarketNotFound(market_id.to_string()))?;
        debug!(market = market_id, "Resolved market snapshot");
        Ok(entry.snapshot.clone())
    }

    fn list_markets(&self, network: Network, provider: ProviderName) -> Vec<Market> {
        self.markets()
            .filter(|m| m.network == network && m.provider == provider)
            .cloned()
            .collect()
    }

    fn list_assets(&self, market_id: &str) -> Vec<String> {
        self.find(market_id)
            .map(|e| e.assets.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_every_snapshot_is_valid() {
        let catalog = StaticMarketCatalog::new();
        assert_eq!(catalog.markets().count(), 4);
        for market in catalog.markets() {
            let snapshot = catalog.snapshot(&market.id).unwrap();
            assert_eq!(snapshot.market_id, market.id);
            snapshot.validate().unwrap();
        }
    }

    #[test]
    fn test_reference_values() {
        let snapshot = StaticMarketCatalog::new().snapshot("op-morpho-weth").unwrap();
        assert_eq!(snapshot.supply_apy, dec!(0.061));
        assert_eq!(snapshot.borrow_apy, dec!(0.083));
        assert_eq!(snapshot.incentives_net(), dec!(0.032));
        assert_eq!(snapshot.liquidation_threshold, dec!(0.76));
        assert_eq!(snapshot.liquidation_bonus, dec!(0.055));
        assert_eq!(snapshot.available_liquidity, dec!(95000000));
        assert_eq!(snapshot.oracle_type, "TWAP + Chainlink");
    }

    #[test]
    fn test_unknown_market() {
        let catalog = StaticMarketCatalog::new();
        assert!(matches!(
            catalog.snapshot("sol-kamino-usdc"),
            Err(DataError::MarketNotFound(id)) if id == "sol-kamino-usdc"
        ));
        assert!(catalog.list_assets("sol-kamino-usdc").is_empty());
        assert_eq!(catalog.default_assets("sol-kamino-usdc"), None);
    }

    #[test]
    fn test_list_markets_filters_on_both_keys() {
        let catalog = StaticMarketCatalog::new();
        let aave_eth = catalog.list_markets(Network::Ethereum, ProviderName::AaveV3);
        assert_eq!(aave_eth.len(), 1);
        assert_eq!(aave_eth[0].id, "eth-aave-usdc");
        assert!(catalog.list_markets(Network::Ethereum, ProviderName::Morpho).is_empty());
    }

    #[test]
    fn test_default_assets() {
        let catalog = StaticMarketCatalog::new();
        assert_eq!(
            catalog.default_assets("base-custom-usdbc"),
            Some(("ETH".to_string(), "USDbC".to_string()))
        );
    }
}
