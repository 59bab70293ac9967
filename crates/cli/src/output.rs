//! Table rendering for command results.

use looplab_domain::entities::{Market, MarketSnapshot, PointsModel, StrategyInput};
use looplab_domain::value_objects::{
    HealthFactor, Percentage, SavedSnapshot, StrategyResult, StressResult,
};
use looplab_data::repositories::SavedEntry;
use looplab_optimization::ComparisonRow;
use looplab_simulation::points::{PointsProjection, UnlockSchedule};
use looplab_simulation::risk::RiskAlert;
use prettytable::{Table, cell, row};
use rust_decimal::Decimal;

fn usd(value: Decimal) -> String {
    format!("${}", value.round_dp(2))
}

fn ratio(value: Decimal) -> String {
    value.round_dp(4).normalize().to_string()
}

fn health(value: &HealthFactor) -> String {
    value.to_string()
}

pub fn print_markets(markets: &[Market]) {
    if markets.is_empty() {
        println!("No markets match the filters.");
        return;
    }
    let mut table = Table::new();
    table.set_titles(row!["Id", "Name", "Network", "Provider"]);
    for market in markets {
        table.add_row(row![market.id, market.name, market.network, market.provider]);
    }
    table.printstd();
}

pub fn print_assets(market_id: &str, assets: &[String]) {
    println!("Assets on {market_id}: {}", assets.join(", "));
}

pub fn print_market(snapshot: &MarketSnapshot) {
    let mut table = Table::new();
    table.set_titles(row!["Market", snapshot.market_id]);
    table.add_row(row!["Supply APY", Percentage(snapshot.supply_apy)]);
    table.add_row(row!["Borrow APY", Percentage(snapshot.borrow_apy)]);
    table.add_row(row!["Net incentives", Percentage(snapshot.incentives_net())]);
    table.add_row(row!["Max LTV", Percentage(snapshot.ltv)]);
    table.add_row(row!["Liquidation threshold", Percentage(snapshot.liquidation_threshold)]);
    table.add_row(row!["Utilization", Percentage(snapshot.utilization)]);
    table.add_row(row!["Available liquidity", usd(snapshot.available_liquidity)]);
    table.add_row(row!["Oracle", snapshot.oracle_type]);
    table.printstd();
    for note in &snapshot.notes {
        println!("  • {note}");
    }
    for flag in &snapshot.risk_flags {
        println!("  ⚠ {flag}");
    }
}

pub fn print_simulation(strategy: &StrategyInput, result: &StrategyResult, alerts: &[RiskAlert]) {
    println!(
        "\n📊 {} on {} ({} → {}, {})",
        strategy.name,
        strategy.market_id,
        strategy.collateral_asset,
        strategy.debt_asset,
        usd(strategy.initial_capital)
    );

    let mut table = Table::new();
    table.set_titles(row!["Metric", "Value"]);
    table.add_row(row!["Net ROE", Percentage(result.net_roe)]);
    table.add_row(row!["Health factor", health(&result.health_factor)]);
    table.add_row(row!["Liquidation price (× current)", ratio(result.liquidation_price)]);
    table.add_row(row!["Distance to liquidation", Percentage(result.distance_to_liq)]);
    table.add_row(row!["Leverage", format!("{}x", ratio(result.leverage))]);
    table.add_row(row!["Supply APY", Percentage(result.supply_apy)]);
    table.add_row(row!["Borrow APY", Percentage(result.borrow_apy)]);
    table.add_row(row!["Net incentives", Percentage(result.incentives_net)]);
    table.add_row(row!["Fees", Percentage(result.fees)]);
    table.printstd();

    let mut assumptions = Table::new();
    assumptions.set_titles(row!["Assumption", "Value"]);
    for assumption in result.assumptions.iter() {
        assumptions.add_row(row![assumption.label, assumption.value]);
    }
    assumptions.printstd();

    for alert in alerts {
        let marker = if alert.triggered { "⚠" } else { "✓" };
        println!("{marker} {}", alert.message);
    }
}

pub fn print_stress(results: &[StressResult]) {
    let mut table = Table::new();
    table.set_titles(row!["Scenario", "Health factor", "Net ROE"]);
    for result in results {
        table.add_row(row![result.label, health(&result.health_factor), Percentage(result.net_roe)]);
    }
    table.printstd();
}

pub fn print_break_even(snapshot: &MarketSnapshot, rate: Option<Decimal>) {
    match rate {
        Some(rate) => {
            println!("Break-even borrow APY: {}", Percentage(rate));
            println!(
                "Current borrow APY:    {} (headroom {})",
                Percentage(snapshot.borrow_apy),
                Percentage(rate - snapshot.borrow_apy)
            );
        }
        None => println!("Break-even borrow APY: N/A (no debt)"),
    }
}

pub fn print_comparison(rows: &[ComparisonRow]) {
    let mut table = Table::new();
    table.set_titles(row!["Strategy", "Market", "Net ROE", "Health factor", "Distance", "RAR", "Badges"]);
    for entry in rows {
        let badges: Vec<&str> = entry.badges.iter().map(|b| b.label()).collect();
        table.add_row(row![
            entry.strategy.name,
            entry.strategy.market_id,
            Percentage(entry.result.net_roe),
            health(&entry.result.health_factor),
            Percentage(entry.result.distance_to_liq),
            ratio(entry.risk_adjusted_return),
            badges.join(", ")
        ]);
    }
    table.printstd();
}

pub fn print_points(model: &PointsModel, projection: &PointsProjection) {
    println!("\n🎯 {}", model.project);
    println!(
        "Points: {} (range {} to {}, confidence {:?})",
        projection.total_points.round_dp(2).normalize(),
        projection.min_points.normalize(),
        projection.max_points.normalize(),
        projection.confidence
    );

    let mut table = Table::new();
    table.set_titles(row!["Scenario", "FDV", "Value / point", "Min value", "Max value"]);
    for scenario in &projection.scenarios {
        table.add_row(row![
            format!("{:?}", scenario.scenario),
            usd(scenario.fdv),
            format!("${}", scenario.value_per_point.round_dp(6).normalize()),
            usd(scenario.min_value),
            usd(scenario.max_value)
        ]);
    }
    table.printstd();

    if let Some(unlock) = &projection.unlock {
        println!("Unlock: {}", unlock_terms(unlock));
    }
}

fn unlock_terms(unlock: &UnlockSchedule) -> String {
    let mut terms = Vec::new();
    if let Some(tge) = unlock.tge_unlock_pct {
        terms.push(format!("{}% at TGE", tge.normalize()));
    }
    if let Some(months) = unlock.vesting_months {
        terms.push(format!("vesting over {months} months"));
    }
    if let Some(monthly) = unlock.monthly_unlock_pct {
        terms.push(format!("{}% per month", monthly.round_dp(2).normalize()));
    }
    terms.join(", ")
}

pub fn print_entry(entry: &SavedEntry) {
    let mut table = Table::new();
    match entry {
        SavedEntry::Strategy(s) => {
            table.set_titles(row!["Strategy", s.name]);
            table.add_row(row!["Id", s.id]);
            table.add_row(row!["Market", format!("{} • {} • {}", s.network, s.provider, s.market_id)]);
            table.add_row(row!["Collateral", s.collateral_asset]);
            table.add_row(row!["Debt", s.debt_asset]);
            table.add_row(row!["Initial capital", usd(s.initial_capital)]);
            table.add_row(row!["Risk target", format!("drawdown {}", s.risk_target)]);
            table.add_row(row!["Mode", s.mode]);
        }
        SavedEntry::Points(p) => {
            table.set_titles(row!["Points model", p.project]);
            table.add_row(row!["Id", p.id.0]);
            table.add_row(row!["Points / day", p.points_per_day.normalize()]);
            table.add_row(row!["Days", p.days]);
            table.add_row(row!["Multiplier", p.multiplier.normalize()]);
            table.add_row(row![
                "Points range",
                format!("{} - {}", p.range.min_points.normalize(), p.range.max_points.normalize())
            ]);
        }
    }
    table.printstd();
}

pub fn print_store(snapshot: &SavedSnapshot) {
    if snapshot.is_empty() {
        println!("The store is empty.");
        return;
    }

    if !snapshot.strategies.is_empty() {
        let mut table = Table::new();
        table.set_titles(row!["Id", "Strategy", "Market", "Capital", "Risk", "Mode"]);
        for s in &snapshot.strategies {
            table.add_row(row![s.id, s.name, s.market_id, usd(s.initial_capital), s.risk_target, s.mode]);
        }
        table.printstd();
    }

    if !snapshot.points.is_empty() {
        let mut table = Table::new();
        table.set_titles(row!["Id", "Project", "Points / day", "Days", "Airdrop %"]);
        for p in &snapshot.points {
            table.add_row(row![p.id.0, p.project, p.points_per_day, p.days, p.airdrop_percent]);
        }
        table.printstd();
    }
}
