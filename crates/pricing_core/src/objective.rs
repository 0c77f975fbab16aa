//! Profit objective over a candidate decision.
//!
//! The evaluator is a pure function of the decision, the trained surrogates,
//! and the fixed run parameters: it predicts per-segment demand, rations each
//! vehicle type's fleet across its segments, and scores the decision as
//! negated profit so the search driver can minimize.

use serde::{Deserialize, Serialize};

use crate::allocation::ration;
use crate::decision::Decision;
use crate::demand::{DemandSurrogate, FeatureVector};
use crate::segments::{CustomerSegment, PerVehicleType, VehicleType};

/// Sentinel score for infeasible decisions.
///
/// A flat constant rather than a shortfall-proportional barrier; the search
/// simply learns to avoid the infeasible region.
pub const INFEASIBLE_PENALTY: f64 = 1e9;

/// Cost and capacity parameters for one vehicle type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleCosts {
    /// Variable operating cost per served ride.
    pub cost_per_ride: f64,
    /// Daily depreciation per deployed fleet unit.
    pub depreciation_per_unit: f64,
    /// Maximum deployable fleet size.
    pub max_fleet: u32,
}

/// Run parameters shared by every evaluation in one optimization run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FleetParams {
    pub costs: PerVehicleType<VehicleCosts>,
    /// Minimum total deployed fleet across vehicle types (SLA floor).
    pub sla_min_total_fleet: u32,
}

/// Weather and time context for the period being priced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvalContext {
    pub weather_factor: f64,
    /// Hour of day (0-23).
    pub hour_of_day: u8,
}

/// Profit decomposition for one decision. Derived per evaluation, never
/// stored as authoritative state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfitBreakdown {
    pub revenue: f64,
    pub operating_cost: f64,
    pub depreciation_cost: f64,
    pub profit: f64,
}

/// Scalar objective over decisions, minimized by the search driver.
pub trait DecisionObjective: Sync {
    fn score(&self, decision: &Decision) -> f64;
}

/// Scores decisions against the trained demand surrogates.
///
/// Holds references to the two surrogates and the run parameters explicitly;
/// evaluation has no side effects and no hidden captured state.
pub struct ProfitEvaluator<'a, S: DemandSurrogate> {
    demand_models: &'a PerVehicleType<S>,
    params: &'a FleetParams,
    context: EvalContext,
}

impl<'a, S: DemandSurrogate> ProfitEvaluator<'a, S> {
    pub fn new(
        demand_models: &'a PerVehicleType<S>,
        params: &'a FleetParams,
        context: EvalContext,
    ) -> Self {
        Self {
            demand_models,
            params,
            context,
        }
    }

    /// A decision is feasible iff the total fleet meets the SLA floor and
    /// each vehicle type stays within its maximum fleet size.
    pub fn is_feasible(&self, decision: &Decision) -> bool {
        decision.total_fleet() >= self.params.sla_min_total_fleet
            && VehicleType::ALL
                .iter()
                .all(|&vt| decision.fleet(vt) <= self.params.costs.get(vt).max_fleet)
    }

    fn predicted_demand(&self, vehicle_type: VehicleType, segment: CustomerSegment, price: f64) -> f64 {
        let features = FeatureVector {
            price,
            weather_factor: self.context.weather_factor,
            hour_of_day: self.context.hour_of_day,
            segment,
        };
        let demand = self.demand_models.get(vehicle_type).predict(&features);
        if !demand.is_finite() {
            // One degenerate prediction must not abort the whole run.
            tracing::warn!(
                vehicle_type = vehicle_type.label(),
                segment = segment.label(),
                price,
                "non-finite demand prediction, clamping to zero"
            );
            return 0.0;
        }
        demand
    }

    /// Revenue/cost decomposition for a feasible decision, `None` otherwise.
    ///
    /// Infeasible decisions are rejected before any surrogate query.
    pub fn breakdown(&self, decision: &Decision) -> Option<ProfitBreakdown> {
        if !self.is_feasible(decision) {
            return None;
        }

        let mut revenue = 0.0;
        let mut operating_cost = 0.0;
        let mut depreciation_cost = 0.0;

        for vehicle_type in VehicleType::ALL {
            let demands: Vec<f64> = CustomerSegment::ALL
                .iter()
                .map(|&segment| {
                    self.predicted_demand(vehicle_type, segment, decision.price(vehicle_type, segment))
                })
                .collect();

            let fleet = decision.fleet(vehicle_type) as f64;
            let allocation = ration(&demands, fleet);

            for (served, &segment) in allocation.served.iter().zip(CustomerSegment::ALL.iter()) {
                revenue += decision.price(vehicle_type, segment) * served;
            }

            let costs = self.params.costs.get(vehicle_type);
            operating_cost += costs.cost_per_ride * allocation.total_served;
            depreciation_cost += costs.depreciation_per_unit * fleet;
        }

        Some(ProfitBreakdown {
            revenue,
            operating_cost,
            depreciation_cost,
            profit: revenue - operating_cost - depreciation_cost,
        })
    }
}

impl<S: DemandSurrogate> DecisionObjective for ProfitEvaluator<'_, S> {
    fn score(&self, decision: &Decision) -> f64 {
        match self.breakdown(decision) {
            Some(breakdown) => -breakdown.profit,
            None => INFEASIBLE_PENALTY,
        }
    }
}
