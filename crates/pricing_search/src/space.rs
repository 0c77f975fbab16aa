//! Search-space descriptor for the decision vector.
//!
//! The space is an explicit, ordered list of variable specs; the sampler
//! draws raw values, snaps them into each variable's domain, and the driver
//! decodes the resulting candidate into a [`Decision`]. Variable order is
//! fixed: the four prices (electric casual, electric member, classic casual,
//! classic member) followed by the two fleet sizes (electric, classic).

use pricing_core::decision::Decision;
use pricing_core::objective::FleetParams;
use pricing_core::segments::VehicleType;
use serde::Serialize;

/// Bounds for one continuous price variable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBounds {
    pub low: f64,
    pub high: f64,
    /// Optional quantization step (e.g. 0.5 for half-dollar price points).
    pub step: Option<f64>,
}

impl PriceBounds {
    pub fn new(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            step: None,
        }
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }
}

/// Kind and domain of a single search variable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum VarKind {
    Float {
        low: f64,
        high: f64,
        step: Option<f64>,
    },
    Int {
        low: u64,
        high: u64,
        step: u64,
    },
}

impl VarKind {
    pub fn low(&self) -> f64 {
        match self {
            VarKind::Float { low, .. } => *low,
            VarKind::Int { low, .. } => *low as f64,
        }
    }

    pub fn high(&self) -> f64 {
        match self {
            VarKind::Float { high, .. } => *high,
            VarKind::Int { high, .. } => *high as f64,
        }
    }

    /// Clamp a raw draw into bounds and quantize it onto the variable's grid.
    pub fn snap(&self, raw: f64) -> f64 {
        match self {
            VarKind::Float { low, high, step } => {
                let clamped = raw.clamp(*low, *high);
                match *step {
                    Some(step) if step > 0.0 => {
                        let snapped = *low + ((clamped - *low) / step).round() * step;
                        snapped.clamp(*low, *high)
                    }
                    _ => clamped,
                }
            }
            VarKind::Int { low, high, step } => {
                let step = (*step).max(1) as f64;
                let low = *low as f64;
                let high = *high as f64;
                let clamped = raw.clamp(low, high);
                let snapped = low + ((clamped - low) / step).round() * step;
                snapped.clamp(low, high).round()
            }
        }
    }
}

/// One named search variable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VarSpec {
    pub name: &'static str,
    pub kind: VarKind,
}

/// Ordered list of the six decision variables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchSpace {
    vars: Vec<VarSpec>,
}

/// One concrete assignment of all search variables, produced per trial.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub values: Vec<f64>,
}

impl SearchSpace {
    pub fn vars(&self) -> &[VarSpec] {
        &self.vars
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Decode a candidate drawn from this space into a decision.
    ///
    /// Fleet values are already snapped onto their integer grid by the
    /// sampler; the cast here only strips the float representation.
    pub fn decode(&self, candidate: &Candidate) -> Decision {
        debug_assert_eq!(candidate.values.len(), self.vars.len());
        Decision {
            price_electric_casual: candidate.values[0],
            price_electric_member: candidate.values[1],
            price_classic_casual: candidate.values[2],
            price_classic_member: candidate.values[3],
            fleet_electric: candidate.values[4].round() as u32,
            fleet_classic: candidate.values[5].round() as u32,
        }
    }
}

/// Builder for the canonical six-variable decision space.
///
/// Price defaults reflect realistic per-segment ranges; fleet bounds come
/// from the run's [`FleetParams`] maxima.
#[derive(Debug, Clone)]
pub struct DecisionSpaceBuilder {
    electric_casual: PriceBounds,
    electric_member: PriceBounds,
    classic_casual: PriceBounds,
    classic_member: PriceBounds,
    fleet_step: u64,
}

impl DecisionSpaceBuilder {
    pub fn new() -> Self {
        Self {
            electric_casual: PriceBounds::new(4.0, 15.0),
            electric_member: PriceBounds::new(1.0, 6.0),
            classic_casual: PriceBounds::new(2.0, 8.0),
            classic_member: PriceBounds::new(0.0, 2.0),
            fleet_step: 1,
        }
    }

    pub fn electric_casual(mut self, bounds: PriceBounds) -> Self {
        self.electric_casual = bounds;
        self
    }

    pub fn electric_member(mut self, bounds: PriceBounds) -> Self {
        self.electric_member = bounds;
        self
    }

    pub fn classic_casual(mut self, bounds: PriceBounds) -> Self {
        self.classic_casual = bounds;
        self
    }

    pub fn classic_member(mut self, bounds: PriceBounds) -> Self {
        self.classic_member = bounds;
        self
    }

    /// Step size for the fleet variables (e.g. 100 to search in batches of
    /// a hundred vehicles).
    pub fn fleet_step(mut self, step: u64) -> Self {
        self.fleet_step = step.max(1);
        self
    }

    pub fn build(&self, params: &FleetParams) -> SearchSpace {
        let price = |name, bounds: PriceBounds| VarSpec {
            name,
            kind: VarKind::Float {
                low: bounds.low,
                high: bounds.high,
                step: bounds.step,
            },
        };
        let fleet = |name, vehicle_type| VarSpec {
            name,
            kind: VarKind::Int {
                low: 0,
                high: params.costs.get(vehicle_type).max_fleet as u64,
                step: self.fleet_step,
            },
        };

        SearchSpace {
            vars: vec![
                price("price_electric_casual", self.electric_casual),
                price("price_electric_member", self.electric_member),
                price("price_classic_casual", self.classic_casual),
                price("price_classic_member", self.classic_member),
                fleet("fleet_electric", VehicleType::Electric),
                fleet("fleet_classic", VehicleType::Classic),
            ],
        }
    }
}

impl Default for DecisionSpaceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricing_core::objective::VehicleCosts;
    use pricing_core::segments::PerVehicleType;

    fn params(max_electric: u32, max_classic: u32) -> FleetParams {
        FleetParams {
            costs: PerVehicleType {
                electric: VehicleCosts {
                    cost_per_ride: 6.0,
                    depreciation_per_unit: 2.0,
                    max_fleet: max_electric,
                },
                classic: VehicleCosts {
                    cost_per_ride: 0.5,
                    depreciation_per_unit: 0.5,
                    max_fleet: max_classic,
                },
            },
            sla_min_total_fleet: 100,
        }
    }

    #[test]
    fn builder_produces_six_ordered_vars() {
        let space = DecisionSpaceBuilder::new().build(&params(5000, 3000));
        let names: Vec<&str> = space.vars().iter().map(|v| v.name).collect();
        assert_eq!(
            names,
            vec![
                "price_electric_casual",
                "price_electric_member",
                "price_classic_casual",
                "price_classic_member",
                "fleet_electric",
                "fleet_classic",
            ]
        );
        assert_eq!(space.vars()[4].kind.high(), 5000.0);
        assert_eq!(space.vars()[5].kind.high(), 3000.0);
    }

    #[test]
    fn snap_clamps_and_quantizes() {
        let float = VarKind::Float {
            low: 2.0,
            high: 8.0,
            step: Some(0.5),
        };
        assert_eq!(float.snap(3.74), 3.5);
        assert_eq!(float.snap(3.76), 4.0);
        assert_eq!(float.snap(-10.0), 2.0);
        assert_eq!(float.snap(100.0), 8.0);

        let int = VarKind::Int {
            low: 0,
            high: 5000,
            step: 100,
        };
        assert_eq!(int.snap(249.0), 200.0);
        assert_eq!(int.snap(251.0), 300.0);
        assert_eq!(int.snap(-3.0), 0.0);
        assert_eq!(int.snap(1e9), 5000.0);
    }

    #[test]
    fn decode_maps_values_in_declared_order() {
        let space = DecisionSpaceBuilder::new().build(&params(5000, 5000));
        let candidate = Candidate {
            values: vec![9.5, 4.0, 4.5, 1.0, 2500.0, 1500.0],
        };
        let decision = space.decode(&candidate);
        assert_eq!(decision.price_electric_casual, 9.5);
        assert_eq!(decision.price_electric_member, 4.0);
        assert_eq!(decision.price_classic_casual, 4.5);
        assert_eq!(decision.price_classic_member, 1.0);
        assert_eq!(decision.fleet_electric, 2500);
        assert_eq!(decision.fleet_classic, 1500);
    }
}
