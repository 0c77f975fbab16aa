//! Black-box search over fleet pricing and allocation decisions.
//!
//! This crate drives the `pricing_core` objective through a sequential
//! model-based (TPE) search: it proposes decision vectors from a bounded,
//! mixed continuous/integer space, scores them against the profit objective,
//! and returns the best decision observed within a fixed trial budget.
//!
//! # Quick Start
//!
//! ```no_run
//! use pricing_core::demand::{train_demand_models, DemandModelConfig};
//! use pricing_core::objective::{EvalContext, FleetParams, ProfitEvaluator, VehicleCosts};
//! use pricing_core::panel::DemandPanel;
//! use pricing_core::segments::PerVehicleType;
//! use pricing_search::{run_search, DecisionSpaceBuilder, SearchConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // The panel comes from the upstream aggregation layer.
//! let panel = DemandPanel::default();
//! let models = train_demand_models(&panel, DemandModelConfig::default())?;
//!
//! let params = FleetParams {
//!     costs: PerVehicleType {
//!         electric: VehicleCosts {
//!             cost_per_ride: 6.0,
//!             depreciation_per_unit: 2.0,
//!             max_fleet: 5000,
//!         },
//!         classic: VehicleCosts {
//!             cost_per_ride: 0.5,
//!             depreciation_per_unit: 0.5,
//!             max_fleet: 5000,
//!         },
//!     },
//!     sla_min_total_fleet: 3000,
//! };
//! let context = EvalContext {
//!     weather_factor: -5.0,
//!     hour_of_day: 8,
//! };
//! let evaluator = ProfitEvaluator::new(&models, &params, context);
//!
//! let space = DecisionSpaceBuilder::new().fleet_step(100).build(&params);
//! let outcome = run_search(&evaluator, &space, &SearchConfig::default());
//! println!(
//!     "best decision {:?} with expected profit {:.2}",
//!     outcome.best_decision,
//!     outcome.expected_profit()
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - [`space`]: explicit search-space descriptor (variable specs + candidate
//!   decoding into decisions)
//! - [`tpe`]: Tree-structured Parzen Estimator sampler with a seeded RNG
//! - [`driver`]: the propose → evaluate → observe loop, trial budget,
//!   optional batched parallel evaluation and wall-clock cutoff

pub mod driver;
pub mod space;
pub mod tpe;

pub use driver::{run_search, SearchConfig, SearchOutcome, TrialRecord};
pub use space::{Candidate, DecisionSpaceBuilder, PriceBounds, SearchSpace, VarKind, VarSpec};
pub use tpe::{TpeConfig, TpeSampler};
