//! Performance benchmarks for the objective evaluator using Criterion.rs.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pricing_core::decision::Decision;
use pricing_core::demand::{train_demand_models, DemandModelConfig};
use pricing_core::objective::{
    DecisionObjective, EvalContext, FleetParams, ProfitEvaluator, VehicleCosts,
};
use pricing_core::panel::{DemandPanel, PanelRow};
use pricing_core::segments::{CustomerSegment, PerVehicleType, VehicleType};

fn synthetic_panel() -> DemandPanel {
    let mut panel = DemandPanel::default();
    for day in 0..30 {
        for hour in [8u8, 12, 17, 20] {
            for vehicle_type in VehicleType::ALL {
                for segment in CustomerSegment::ALL {
                    let base_price = match (vehicle_type, segment) {
                        (VehicleType::Electric, CustomerSegment::Casual) => 8.0,
                        (VehicleType::Electric, CustomerSegment::Member) => 3.5,
                        (VehicleType::Classic, CustomerSegment::Casual) => 4.0,
                        (VehicleType::Classic, CustomerSegment::Member) => 1.0,
                    };
                    let price = base_price + (day % 5) as f64 * 0.3;
                    panel.push(PanelRow {
                        vehicle_type,
                        segment,
                        hour,
                        avg_price: price,
                        weather_factor: -10.0 + day as f64 * 0.5,
                        rides: (150.0 - 8.0 * price + hour as f64).max(0.0),
                    });
                }
            }
        }
    }
    panel
}

fn bench_score_decision(c: &mut Criterion) {
    let panel = synthetic_panel();
    let models = train_demand_models(&panel, DemandModelConfig::default())
        .expect("synthetic panel covers both vehicle types");
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

    let decision = Decision {
        price_electric_casual: 9.5,
        price_electric_member: 4.0,
        price_classic_casual: 4.5,
        price_classic_member: 1.2,
        fleet_electric: 2500,
        fleet_classic: 1500,
    };

    c.bench_function("score_decision", |b| {
        b.iter(|| black_box(evaluator.score(black_box(&decision))));
    });
}

criterion_group!(benches, bench_score_decision);
criterion_main!(benches);
