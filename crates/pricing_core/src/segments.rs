//! Fleet segmentation: vehicle types and customer classes.

use serde::{Deserialize, Serialize};

/// Vehicle categories operated by the fleet.
///
/// Each vehicle type owns its own demand model, fleet-size variable, and
/// cost parameters. Segments of the same vehicle type share one fleet pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    Electric,
    Classic,
}

impl VehicleType {
    pub const ALL: [VehicleType; 2] = [VehicleType::Electric, VehicleType::Classic];

    /// Stable lowercase label for logs and exported output.
    pub fn label(&self) -> &'static str {
        match self {
            VehicleType::Electric => "electric",
            VehicleType::Classic => "classic",
        }
    }
}

/// Customer classes priced independently within each vehicle type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomerSegment {
    Casual,
    Member,
}

impl CustomerSegment {
    pub const ALL: [CustomerSegment; 2] = [CustomerSegment::Casual, CustomerSegment::Member];

    /// Stable lowercase label for logs and exported output.
    pub fn label(&self) -> &'static str {
        match self {
            CustomerSegment::Casual => "casual",
            CustomerSegment::Member => "member",
        }
    }

    /// Numeric membership indicator used as a model feature.
    pub fn indicator(&self) -> f64 {
        match self {
            CustomerSegment::Casual => 0.0,
            CustomerSegment::Member => 1.0,
        }
    }
}

/// Total map from [`VehicleType`] to a value.
///
/// Holding one slot per vehicle type keeps lookups infallible and avoids
/// keying shared state by label strings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerVehicleType<T> {
    pub electric: T,
    pub classic: T,
}

impl<T> PerVehicleType<T> {
    pub fn get(&self, vehicle_type: VehicleType) -> &T {
        match vehicle_type {
            VehicleType::Electric => &self.electric,
            VehicleType::Classic => &self.classic,
        }
    }

    pub fn get_mut(&mut self, vehicle_type: VehicleType) -> &mut T {
        match vehicle_type {
            VehicleType::Electric => &mut self.electric,
            VehicleType::Classic => &mut self.classic,
        }
    }

    /// Iterate entries in the fixed [`VehicleType::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (VehicleType, &T)> {
        [
            (VehicleType::Electric, &self.electric),
            (VehicleType::Classic, &self.classic),
        ]
        .into_iter()
    }
}
