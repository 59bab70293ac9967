//! Command-line inputs and their conversion into domain values.

use crate::config::CliConfig;
use anyhow::{Result, bail};
use clap::Args;
use looplab_data::DataError;
use looplab_data::providers::{MarketSnapshotSource, StaticMarketCatalog};
use looplab_domain::entities::{
    AdvancedOverrides, FdvScenarios, MarketSnapshot, PointsModel, PointsModelId, PointsProOptions,
    PointsRange, StrategyInput,
};
use looplab_domain::enums::RiskTarget;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Args)]
pub struct StrategyArgs {
    /// Strategy name
    #[arg(long, default_value = "Loop")]
    pub name: String,

    /// Market id (defaults to LOOPLAB_DEFAULT_MARKET)
    #[arg(short, long)]
    pub market: Option<String>,

    /// Collateral asset (defaults to the market's first asset)
    #[arg(long)]
    pub collateral: Option<String>,

    /// Debt asset (defaults to the market's last asset)
    #[arg(long)]
    pub debt: Option<String>,

    /// Initial capital in USD
    #[arg(short, long)]
    pub capital: Decimal,

    /// Drawdown the loop should survive: 15, 25 or 35
    #[arg(short, long, default_value = "25")]
    pub risk_target: RiskTarget,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

/// Pro-mode overrides. Setting any of them switches the strategy to pro mode.
#[derive(Debug, Clone, Default, Args)]
pub struct OverrideArgs {
    /// Force pro mode even without overrides
    #[arg(long)]
    pub pro: bool,

    /// Target LTV in [0, 1), replaces the risk-target recommendation
    #[arg(long)]
    pub manual_ltv: Option<Decimal>,

    /// Minimum health-factor buffer
    #[arg(long)]
    pub min_health_factor: Option<Decimal>,

    /// Borrow-rate spike assumption
    #[arg(long)]
    pub borrow_spike: Option<Decimal>,

    /// Slippage in percent
    #[arg(long)]
    pub slippage: Option<Decimal>,

    #[arg(long)]
    pub liquidation_bonus: Option<Decimal>,

    /// Stablecoin depeg haircut
    #[arg(long)]
    pub depeg_haircut: Option<Decimal>,

    #[arg(long)]
    pub loop_stop_threshold: Option<Decimal>,
}

impl OverrideArgs {
    pub fn to_overrides(&self) -> AdvancedOverrides {
        AdvancedOverrides {
            manual_ltv: self.manual_ltv,
            min_health_factor: self.min_health_factor,
            borrow_spike: self.borrow_spike,
            slippage: self.slippage,
            liquidation_bonus: self.liquidation_bonus,
            depeg_haircut: self.depeg_haircut,
            loop_stop_threshold: self.loop_stop_threshold,
        }
    }
}

impl StrategyArgs {
    /// Builds a validated strategy and resolves its market snapshot.
    pub fn resolve(
        &self,
        catalog: &StaticMarketCatalog,
        config: &CliConfig,
    ) -> Result<(StrategyInput, MarketSnapshot)> {
        let market_id = self.market.as_deref().unwrap_or(&config.default_market);
        let market = catalog
            .market(market_id)
            .ok_or_else(|| DataError::MarketNotFound(market_id.to_string()))?;
        let snapshot = catalog.snapshot(market_id)?;

        let listed = catalog.list_assets(market_id);
        let (default_collateral, default_debt) =
            catalog.default_assets(market_id).unwrap_or_default();
        let collateral = self.collateral.clone().unwrap_or(default_collateral);
        let debt = self.debt.clone().unwrap_or(default_debt);
        for asset in [&collateral, &debt] {
            if !listed.contains(asset) {
                bail!("Asset {asset} is not listed on {market_id} (available: {})", listed.join(", "));
            }
        }

        let mut strategy = StrategyInput::new(
            self.name.clone(),
            market,
            collateral,
            debt,
            self.capital,
            self.risk_target,
        );
        let overrides = self.overrides.to_overrides();
        if self.overrides.pro || !overrides.is_empty() {
            strategy = strategy.with_overrides(overrides);
        }
        strategy.validate()?;
        Ok((strategy, snapshot))
    }
}

#[derive(Debug, Clone, Args)]
pub struct PointsArgs {
    /// Project name
    #[arg(long)]
    pub project: String,

    #[arg(long)]
    pub points_per_day: Decimal,

    #[arg(long)]
    pub days: u32,

    #[arg(long, default_value = "1")]
    pub multiplier: Decimal,

    /// Percent of FDV allocated to the airdrop
    #[arg(long)]
    pub airdrop_percent: Decimal,

    #[arg(long)]
    pub fdv_conservative: Decimal,

    #[arg(long)]
    pub fdv_base: Decimal,

    #[arg(long)]
    pub fdv_bull: Decimal,

    /// Lower end of the expected total points of all participants
    #[arg(long)]
    pub min_points: Decimal,

    /// Upper end of the expected total points of all participants
    #[arg(long)]
    pub max_points: Decimal,

    #[arg(long)]
    pub total_supply: Option<Decimal>,

    #[arg(long)]
    pub recipients: Option<Decimal>,

    #[arg(long)]
    pub cap_per_user: Option<Decimal>,

    /// Sybil discount in percent
    #[arg(long)]
    pub sybil_discount: Option<Decimal>,

    /// Percent unlocked at TGE
    #[arg(long)]
    pub tge_unlock: Option<Decimal>,

    #[arg(long)]
    pub vesting_months: Option<u32>,
}

impl PointsArgs {
    pub fn to_model(&self) -> Result<PointsModel> {
        let model = PointsModel {
            id: PointsModelId::new(),
            project: self.project.clone(),
            points_per_day: self.points_per_day,
            days: self.days,
            multiplier: self.multiplier,
            airdrop_percent: self.airdrop_percent,
            fdv: FdvScenarios {
                conservative: self.fdv_conservative,
                base: self.fdv_base,
                bull: self.fdv_bull,
            },
            range: PointsRange {
                min_points: self.min_points,
                max_points: self.max_points,
            },
            pro: PointsProOptions {
                total_supply: self.total_supply,
                recipients: self.recipients,
                cap_per_user: self.cap_per_user,
                sybil_discount: self.sybil_discount,
                tge_unlock: self.tge_unlock,
                vesting_months: self.vesting_months,
            },
        };
        model.validate()?;
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use looplab_domain::enums::StrategyMode;
    use looplab_domain::DomainError;
    use rust_decimal_macros::dec;

    fn args() -> StrategyArgs {
        StrategyArgs {
            name: "Loop".to_string(),
            market: None,
            collateral: None,
            debt: None,
            capital: dec!(15000),
            risk_target: RiskTarget::Drawdown25,
            overrides: OverrideArgs::default(),
        }
    }

    #[test]
    fn test_resolve_uses_configured_defaults() {
        let (strategy, snapshot) = args()
            .resolve(&StaticMarketCatalog::new(), &CliConfig::default())
            .unwrap();
        assert_eq!(strategy.market_id, "eth-aave-usdc");
        assert_eq!(snapshot.market_id, "eth-aave-usdc");
        assert_eq!(strategy.collateral_asset, "ETH");
        assert_eq!(strategy.debt_asset, "USDC");
        assert_eq!(strategy.mode, StrategyMode::Simple);
    }

    #[test]
    fn test_overrides_switch_to_pro() {
        let mut with_ltv = args();
        with_ltv.overrides.manual_ltv = Some(dec!(0.5));
        let (strategy, _) = with_ltv
            .resolve(&StaticMarketCatalog::new(), &CliConfig::default())
            .unwrap();
        assert_eq!(strategy.mode, StrategyMode::Pro);
        assert_eq!(strategy.overrides.manual_ltv, Some(dec!(0.5)));
    }

    #[test]
    fn test_resolve_rejects_bad_input() {
        let catalog = StaticMarketCatalog::new();
        let config = CliConfig::default();

        let mut unknown = args();
        unknown.market = Some("nowhere".to_string());
        let err = unknown.resolve(&catalog, &config).unwrap_err();
        assert!(matches!(err.downcast_ref::<DataError>(), Some(DataError::MarketNotFound(_))));

        let mut unlisted = args();
        unlisted.collateral = Some("DOGE".to_string());
        assert!(unlisted.resolve(&catalog, &config).is_err());

        let mut broke = args();
        broke.capital = dec!(-1);
        let err = broke.resolve(&catalog, &config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DomainError>(),
            Some(DomainError::NonPositiveCapital(_))
        ));
    }
}
