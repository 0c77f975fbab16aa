//! Example: end-to-end pricing optimization on a synthetic winter panel.
//!
//! This example demonstrates how to:
//! 1. Build a historical demand panel (here synthetic; normally supplied by
//!    the upstream aggregation layer)
//! 2. Train the per-vehicle-type demand surrogates
//! 3. Define the decision search space and run the TPE search
//! 4. Inspect the best decision and its profit breakdown

use pricing_core::demand::{train_demand_models, DemandModelConfig};
use pricing_core::objective::{EvalContext, FleetParams, ProfitEvaluator, VehicleCosts};
use pricing_core::panel::{DemandPanel, PanelRow};
use pricing_core::segments::{CustomerSegment, PerVehicleType, VehicleType};
use pricing_search::{run_search, DecisionSpaceBuilder, PriceBounds, SearchConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Synthetic winter panel: demand falls with price, rises slightly in rush
/// hours, and drops in harsh weather. Member demand is less price-sensitive.
fn synthetic_panel(seed: u64) -> DemandPanel {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut panel = DemandPanel::default();

    for _ in 0..1500 {
        let vehicle_type = if rng.gen_bool(0.5) {
            VehicleType::Electric
        } else {
            VehicleType::Classic
        };
        let segment = if rng.gen_bool(0.5) {
            CustomerSegment::Casual
        } else {
            CustomerSegment::Member
        };
        let hour = rng.gen_range(0u8..24);
        let weather_factor = rng.gen_range(-15.0..5.0);

        let avg_price = match (vehicle_type, segment) {
            (VehicleType::Electric, CustomerSegment::Casual) => rng.gen_range(4.0..15.0),
            (VehicleType::Electric, CustomerSegment::Member) => rng.gen_range(1.0..6.0),
            (VehicleType::Classic, CustomerSegment::Casual) => rng.gen_range(2.0..8.0),
            (VehicleType::Classic, CustomerSegment::Member) => rng.gen_range(0.0..2.0),
        };

        let price_sensitivity = match segment {
            CustomerSegment::Casual => 120.0,
            CustomerSegment::Member => 60.0,
        };
        let base = match vehicle_type {
            VehicleType::Electric => 2600.0,
            VehicleType::Classic => 1500.0,
        };
        let rush = if hour == 8 || hour == 17 { 250.0 } else { 0.0 };
        let noise: f64 = rng.gen_range(-80.0..80.0);
        let rides =
            (base - price_sensitivity * avg_price + 20.0 * weather_factor + rush + noise).max(0.0);

        panel.push(PanelRow {
            vehicle_type,
            segment,
            hour,
            avg_price,
            weather_factor,
            rides,
        });
    }

    panel
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building synthetic demand panel...");
    let panel = synthetic_panel(42);
    println!("Panel rows: {}", panel.len());

    println!("Training demand surrogates...");
    let models = train_demand_models(&panel, DemandModelConfig::default())?;

    // Cold-season run parameters: expensive battery swaps for electric,
    // cheap redistribution for classic, and an SLA floor on total fleet.
    let params = FleetParams {
        costs: PerVehicleType {
            electric: VehicleCosts {
                cost_per_ride: 6.0,
                depreciation_per_unit: 2.0,
                max_fleet: 5000,
            },
            classic: VehicleCosts {
                cost_per_ride: 0.5,
                depreciation_per_unit: 0.5,
                max_fleet: 5000,
            },
        },
        sla_min_total_fleet: 3000,
    };
    let context = EvalContext {
        weather_factor: -5.0,
        hour_of_day: 8,
    };
    let evaluator = ProfitEvaluator::new(&models, &params, context);

    let space = DecisionSpaceBuilder::new()
        .electric_casual(PriceBounds::new(4.0, 15.0))
        .electric_member(PriceBounds::new(1.0, 6.0))
        .classic_casual(PriceBounds::new(2.0, 8.0))
        .classic_member(PriceBounds::new(0.0, 2.0))
        .fleet_step(100)
        .build(&params);

    println!("Running TPE search (300 trials)...");
    let config = SearchConfig {
        n_trials: 300,
        seed: 42,
        show_progress: true,
        ..Default::default()
    };
    let outcome = run_search(&evaluator, &space, &config);

    println!("\n=== Best Decision ===");
    println!("{}", serde_json::to_string_pretty(&outcome.best_decision)?);
    println!("Trials run: {}", outcome.trials_run);
    println!("Feasible: {}", outcome.best_is_feasible());
    println!("Expected profit: ${:.2}", outcome.expected_profit());

    if let Some(breakdown) = evaluator.breakdown(&outcome.best_decision) {
        println!("\n=== Profit Breakdown ===");
        println!("Revenue:           ${:.2}", breakdown.revenue);
        println!("Operating cost:    ${:.2}", breakdown.operating_cost);
        println!("Depreciation cost: ${:.2}", breakdown.depreciation_cost);
        println!("Profit:            ${:.2}", breakdown.profit);
    }

    Ok(())
}
