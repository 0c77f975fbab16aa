//! The decision vector being optimized: four prices and two fleet sizes.

use serde::{Deserialize, Serialize};

use crate::segments::{CustomerSegment, VehicleType};

/// One candidate pricing and allocation decision.
///
/// Prices are per (vehicle type, customer segment); fleet sizes are per
/// vehicle type and shared by both segments of that type. Instances are
/// ephemeral: the search driver creates one per trial and only the best
/// observed decision survives in the run outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub price_electric_casual: f64,
    pub price_electric_member: f64,
    pub price_classic_casual: f64,
    pub price_classic_member: f64,
    pub fleet_electric: u32,
    pub fleet_classic: u32,
}

impl Decision {
    pub fn price(&self, vehicle_type: VehicleType, segment: CustomerSegment) -> f64 {
        match (vehicle_type, segment) {
            (VehicleType::Electric, CustomerSegment::Casual) => self.price_electric_casual,
            (VehicleType::Electric, CustomerSegment::Member) => self.price_electric_member,
            (VehicleType::Classic, CustomerSegment::Casual) => self.price_classic_casual,
            (VehicleType::Classic, CustomerSegment::Member) => self.price_classic_member,
        }
    }

    pub fn fleet(&self, vehicle_type: VehicleType) -> u32 {
        match vehicle_type {
            VehicleType::Electric => self.fleet_electric,
            VehicleType::Classic => self.fleet_classic,
        }
    }

    /// Total deployed fleet across vehicle types, checked against the SLA floor.
    pub fn total_fleet(&self) -> u32 {
        self.fleet_electric + self.fleet_classic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_cover_all_pairs() {
        let decision = Decision {
            price_electric_casual: 10.0,
            price_electric_member: 5.0,
            price_classic_casual: 4.0,
            price_classic_member: 1.0,
            fleet_electric: 120,
            fleet_classic: 50,
        };

        assert_eq!(
            decision.price(VehicleType::Electric, CustomerSegment::Casual),
            10.0
        );
        assert_eq!(
            decision.price(VehicleType::Electric, CustomerSegment::Member),
            5.0
        );
        assert_eq!(
            decision.price(VehicleType::Classic, CustomerSegment::Casual),
            4.0
        );
        assert_eq!(
            decision.price(VehicleType::Classic, CustomerSegment::Member),
            1.0
        );
        assert_eq!(decision.fleet(VehicleType::Electric), 120);
        assert_eq!(decision.fleet(VehicleType::Classic), 50);
        assert_eq!(decision.total_fleet(), 170);
    }
}
