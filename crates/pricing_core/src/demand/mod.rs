//! Demand surrogate models.
//!
//! A surrogate approximates realized hourly demand as a function of price and
//! context, fitted once per optimization run from the historical panel and
//! queried (read-only) by the objective evaluator during the search.

mod boosted;

pub use boosted::{BoostedDemandModel, DemandModelConfig};

use crate::error::TrainingError;
use crate::panel::DemandPanel;
use crate::segments::{CustomerSegment, PerVehicleType, VehicleType};

/// Number of model input features.
pub const FEATURE_COUNT: usize = 4;

/// Model input for one demand query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub price: f64,
    pub weather_factor: f64,
    /// Hour of day (0-23).
    pub hour_of_day: u8,
    pub segment: CustomerSegment,
}

impl FeatureVector {
    /// Fixed column order shared with [`DemandPanel::training_rows`].
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.price,
            self.weather_factor,
            self.hour_of_day as f64,
            self.segment.indicator(),
        ]
    }
}

/// Uniform interface over fitted demand models.
///
/// Predictions are expected demand counts, clamped at zero from below.
/// There is deliberately no clamp from above: extrapolated inputs (e.g.
/// extreme price reductions) may yield unbounded demand estimates.
/// Implementations must never fail on any finite input.
pub trait DemandSurrogate: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> f64;
}

/// Fit one demand model per vehicle type from the historical panel.
///
/// Fails if either vehicle type has no training rows: the optimization
/// cannot run with a missing surrogate, so this aborts before any search
/// begins.
pub fn train_demand_models(
    panel: &DemandPanel,
    config: DemandModelConfig,
) -> Result<PerVehicleType<BoostedDemandModel>, TrainingError> {
    Ok(PerVehicleType {
        electric: fit_for_vehicle_type(panel, VehicleType::Electric, config)?,
        classic: fit_for_vehicle_type(panel, VehicleType::Classic, config)?,
    })
}

fn fit_for_vehicle_type(
    panel: &DemandPanel,
    vehicle_type: VehicleType,
    config: DemandModelConfig,
) -> Result<BoostedDemandModel, TrainingError> {
    let (features, targets) = panel.training_rows(vehicle_type);
    if features.is_empty() {
        return Err(TrainingError::EmptyPanel(vehicle_type));
    }
    tracing::info!(
        vehicle_type = vehicle_type.label(),
        rows = features.len(),
        rounds = config.rounds,
        "fitting demand surrogate"
    );
    Ok(BoostedDemandModel::fit(&features, &targets, config))
}
