//! Historical demand panel consumed by surrogate training.
//!
//! The panel is produced by an external aggregation step: one row per
//! (date bucket, hour, vehicle type, segment) carrying the realized average
//! price (ARPU), the ride count, and a weather factor. This crate only reads
//! it; validation and cleaning happen upstream.

use serde::{Deserialize, Serialize};

use crate::demand::FEATURE_COUNT;
use crate::segments::{CustomerSegment, VehicleType};

/// One aggregated historical observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelRow {
    pub vehicle_type: VehicleType,
    pub segment: CustomerSegment,
    /// Hour of day bucket (0-23).
    pub hour: u8,
    /// Average realized revenue per ride in this bucket.
    pub avg_price: f64,
    pub weather_factor: f64,
    /// Ride count observed in this bucket.
    pub rides: f64,
}

/// Training table for the demand surrogates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemandPanel {
    rows: Vec<PanelRow>,
}

impl DemandPanel {
    pub fn new(rows: Vec<PanelRow>) -> Self {
        Self { rows }
    }

    pub fn push(&mut self, row: PanelRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[PanelRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Feature matrix and demand targets for one vehicle type.
    ///
    /// Column order is the schema the surrogates are fitted on and must match
    /// [`crate::demand::FeatureVector::to_array`]:
    /// `[avg_price, weather_factor, hour, segment_indicator]`.
    pub fn training_rows(&self, vehicle_type: VehicleType) -> (Vec<[f64; FEATURE_COUNT]>, Vec<f64>) {
        let mut features = Vec::new();
        let mut targets = Vec::new();
        for row in self.rows.iter().filter(|r| r.vehicle_type == vehicle_type) {
            features.push([
                row.avg_price,
                row.weather_factor,
                row.hour as f64,
                row.segment.indicator(),
            ]);
            targets.push(row.rides);
        }
        (features, targets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn training_rows_filter_by_vehicle_type() {
        let panel = DemandPanel::new(vec![
            PanelRow {
                vehicle_type: VehicleType::Electric,
                segment: CustomerSegment::Casual,
                hour: 8,
                avg_price: 9.5,
                weather_factor: -3.0,
                rides: 42.0,
            },
            PanelRow {
                vehicle_type: VehicleType::Classic,
                segment: CustomerSegment::Member,
                hour: 17,
                avg_price: 0.8,
                weather_factor: 1.0,
                rides: 12.0,
            },
        ]);

        let (features, targets) = panel.training_rows(VehicleType::Electric);
        assert_eq!(features.len(), 1);
        assert_eq!(features[0], [9.5, -3.0, 8.0, 0.0]);
        assert_eq!(targets, vec![42.0]);

        let (features, targets) = panel.training_rows(VehicleType::Classic);
        assert_eq!(features[0], [0.8, 1.0, 17.0, 1.0]);
        assert_eq!(targets, vec![12.0]);
    }
}
