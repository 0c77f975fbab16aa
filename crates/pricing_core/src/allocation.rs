//! Proportional rationing of scarce fleet capacity across segments.
//!
//! When predicted demand exceeds a vehicle type's deployed fleet, realized
//! rides are split across segments in proportion to each segment's share of
//! total demand rather than by priority order. This keeps the allocation
//! smooth in the decision variables and keeps every segment served under
//! scarcity.

/// Guard against division by zero when all segment demands are zero.
pub const DEMAND_EPSILON: f64 = 1e-5;

/// Realized rides per segment after capping by capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    /// Served rides per segment, in input order.
    pub served: Vec<f64>,
    /// Sum of per-segment served rides; never exceeds capacity.
    pub total_served: f64,
}

/// Split `capacity` across competing demand estimates.
///
/// With `T = sum(demands) + ε` and `Y = min(T, capacity)`, each segment is
/// served `Y * D_i / T`. If capacity covers total demand every segment is
/// fully served; otherwise the shortfall is shared proportionally.
/// Negative demand inputs are clamped to zero before summation.
pub fn ration(demands: &[f64], capacity: f64) -> Allocation {
    let demands: Vec<f64> = demands.iter().map(|d| d.max(0.0)).collect();
    let capacity = capacity.max(0.0);

    let total_demand: f64 = demands.iter().sum::<f64>() + DEMAND_EPSILON;
    let capped = total_demand.min(capacity);

    let served: Vec<f64> = demands.iter().map(|d| capped * d / total_demand).collect();
    let total_served = served.iter().sum();

    Allocation {
        served,
        total_served,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-3;

    #[test]
    fn full_service_below_capacity() {
        let allocation = ration(&[100.0, 50.0], 200.0);
        assert!((allocation.served[0] - 100.0).abs() < TOLERANCE);
        assert!((allocation.served[1] - 50.0).abs() < TOLERANCE);
        assert!((allocation.total_served - 150.0).abs() < TOLERANCE);
    }

    #[test]
    fn scarce_capacity_splits_proportionally() {
        let allocation = ration(&[100.0, 50.0], 120.0);
        assert!((allocation.served[0] - 80.0).abs() < TOLERANCE);
        assert!((allocation.served[1] - 40.0).abs() < TOLERANCE);

        // Served ratio equals demand ratio.
        let ratio = allocation.served[0] / allocation.served[1];
        assert!((ratio - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn total_served_never_exceeds_capacity() {
        for capacity in [0.0, 10.0, 120.0, 1000.0] {
            let allocation = ration(&[100.0, 50.0, 30.0], capacity);
            assert!(allocation.total_served <= capacity + TOLERANCE);
            assert!(allocation.served.iter().all(|&s| s >= 0.0));
            let sum: f64 = allocation.served.iter().sum();
            assert!((sum - allocation.total_served).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_demand_serves_nothing() {
        let allocation = ration(&[0.0, 0.0], 500.0);
        assert_eq!(allocation.served, vec![0.0, 0.0]);
        assert_eq!(allocation.total_served, 0.0);
    }

    #[test]
    fn negative_demand_is_clamped() {
        let allocation = ration(&[-20.0, 50.0], 100.0);
        assert_eq!(allocation.served[0], 0.0);
        assert!((allocation.served[1] - 50.0).abs() < TOLERANCE);
    }

    #[test]
    fn more_capacity_never_serves_fewer_rides() {
        let demands = [100.0, 50.0];
        let mut previous = 0.0;
        for capacity in [10.0, 50.0, 100.0, 140.0, 149.0] {
            let allocation = ration(&demands, capacity);
            assert!(allocation.total_served >= previous - 1e-9);
            previous = allocation.total_served;
        }
    }
}
