//! Gradient-boosted regression trees for demand fitting.
//!
//! Least-squares boosting: the model starts from the target mean and each
//! round fits a depth-limited regression tree to the current residuals,
//! added with a shrinkage factor. Split search is exact greedy over sorted
//! feature values, so fitting is fully deterministic for a fixed panel.

use super::{DemandSurrogate, FeatureVector, FEATURE_COUNT};

/// Training configuration for [`BoostedDemandModel`].
#[derive(Debug, Clone, Copy)]
pub struct DemandModelConfig {
    /// Number of boosting rounds (trees).
    pub rounds: usize,
    /// Maximum tree depth.
    pub max_depth: usize,
    /// Shrinkage applied to each tree's contribution.
    pub learning_rate: f64,
    /// Minimum number of samples on each side of a split.
    pub min_samples_leaf: usize,
}

impl Default for DemandModelConfig {
    fn default() -> Self {
        Self {
            rounds: 60,
            max_depth: 4,
            learning_rate: 0.1,
            min_samples_leaf: 5,
        }
    }
}

#[derive(Debug, Clone)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
    Leaf {
        value: f64,
    },
}

#[derive(Debug, Clone)]
struct RegressionTree {
    root: Node,
}

impl RegressionTree {
    fn fit(
        features: &[[f64; FEATURE_COUNT]],
        targets: &[f64],
        config: &DemandModelConfig,
    ) -> Self {
        let indices: Vec<usize> = (0..features.len()).collect();
        Self {
            root: build_node(features, targets, indices, config.max_depth, config),
        }
    }

    fn predict(&self, x: &[f64; FEATURE_COUNT]) -> f64 {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if x[*feature] <= *threshold { left } else { right };
                }
            }
        }
    }
}

fn mean(targets: &[f64], indices: &[usize]) -> f64 {
    if indices.is_empty() {
        return 0.0;
    }
    indices.iter().map(|&i| targets[i]).sum::<f64>() / indices.len() as f64
}

fn build_node(
    features: &[[f64; FEATURE_COUNT]],
    targets: &[f64],
    indices: Vec<usize>,
    depth_remaining: usize,
    config: &DemandModelConfig,
) -> Node {
    let leaf_value = mean(targets, &indices);
    if depth_remaining == 0 || indices.len() < 2 * config.min_samples_leaf.max(1) {
        return Node::Leaf { value: leaf_value };
    }

    let Some((feature, threshold)) =
        best_split(features, targets, &indices, config.min_samples_leaf.max(1))
    else {
        return Node::Leaf { value: leaf_value };
    };

    let (left_indices, right_indices): (Vec<usize>, Vec<usize>) = indices
        .into_iter()
        .partition(|&i| features[i][feature] <= threshold);

    Node::Split {
        feature,
        threshold,
        left: Box::new(build_node(
            features,
            targets,
            left_indices,
            depth_remaining - 1,
            config,
        )),
        right: Box::new(build_node(
            features,
            targets,
            right_indices,
            depth_remaining - 1,
            config,
        )),
    }
}

/// Exact greedy split: maximize the SSE reduction
/// `sum_l^2/n_l + sum_r^2/n_r - sum^2/n` over all (feature, threshold) pairs.
///
/// Candidate thresholds are midpoints between consecutive distinct sorted
/// feature values. Ties keep the first-seen candidate, which makes the
/// search order (and therefore the fitted model) deterministic.
fn best_split(
    features: &[[f64; FEATURE_COUNT]],
    targets: &[f64],
    indices: &[usize],
    min_samples_leaf: usize,
) -> Option<(usize, f64)> {
    let n = indices.len() as f64;
    let total_sum: f64 = indices.iter().map(|&i| targets[i]).sum();
    let baseline = total_sum * total_sum / n;

    let mut best: Option<(usize, f64, f64)> = None;

    for feature in 0..FEATURE_COUNT {
        let mut order = indices.to_vec();
        order.sort_by(|&a, &b| {
            features[a][feature]
                .partial_cmp(&features[b][feature])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut left_sum = 0.0;
        for (pos, &i) in order.iter().enumerate().take(order.len() - 1) {
            left_sum += targets[i];
            let left_n = pos + 1;
            let right_n = order.len() - left_n;
            if left_n < min_samples_leaf || right_n < min_samples_leaf {
                continue;
            }

            let here = features[i][feature];
            let next = features[order[pos + 1]][feature];
            if next <= here {
                // No valid threshold between equal values.
                continue;
            }

            let right_sum = total_sum - left_sum;
            let gain = left_sum * left_sum / left_n as f64
                + right_sum * right_sum / right_n as f64
                - baseline;
            if best.map_or(true, |(_, _, best_gain)| gain > best_gain + 1e-12) {
                best = Some((feature, (here + next) / 2.0, gain));
            }
        }
    }

    best.and_then(|(feature, threshold, gain)| (gain > 1e-12).then_some((feature, threshold)))
}

/// Fitted gradient-boosted demand model for one vehicle type.
///
/// Immutable after fitting; safe to share across concurrent evaluations.
#[derive(Debug, Clone)]
pub struct BoostedDemandModel {
    base_prediction: f64,
    learning_rate: f64,
    trees: Vec<RegressionTree>,
}

impl BoostedDemandModel {
    pub fn fit(
        features: &[[f64; FEATURE_COUNT]],
        targets: &[f64],
        config: DemandModelConfig,
    ) -> Self {
        let all: Vec<usize> = (0..targets.len()).collect();
        let base_prediction = mean(targets, &all);

        let mut predictions = vec![base_prediction; targets.len()];
        let mut trees = Vec::with_capacity(config.rounds);
        let mut residuals = vec![0.0; targets.len()];

        for _ in 0..config.rounds {
            for i in 0..targets.len() {
                residuals[i] = targets[i] - predictions[i];
            }
            let tree = RegressionTree::fit(features, &residuals, &config);
            for (i, x) in features.iter().enumerate() {
                predictions[i] += config.learning_rate * tree.predict(x);
            }
            trees.push(tree);
        }

        Self {
            base_prediction,
            learning_rate: config.learning_rate,
            trees,
        }
    }
}

impl DemandSurrogate for BoostedDemandModel {
    fn predict(&self, features: &FeatureVector) -> f64 {
        let x = features.to_array();
        let mut prediction = self.base_prediction;
        for tree in &self.trees {
            prediction += self.learning_rate * tree.predict(&x);
        }
        prediction.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments::CustomerSegment;

    fn price_feature(price: f64) -> FeatureVector {
        FeatureVector {
            price,
            weather_factor: 0.0,
            hour_of_day: 8,
            segment: CustomerSegment::Casual,
        }
    }

    /// Synthetic downward-sloping demand curve: demand = 200 - 10 * price.
    fn synthetic_training_data() -> (Vec<[f64; FEATURE_COUNT]>, Vec<f64>) {
        let mut features = Vec::new();
        let mut targets = Vec::new();
        for i in 0..80 {
            let price = 2.0 + i as f64 * 0.1;
            features.push([price, 0.0, 8.0, 0.0]);
            targets.push(200.0 - 10.0 * price);
        }
        (features, targets)
    }

    #[test]
    fn learns_downward_sloping_demand() {
        let (features, targets) = synthetic_training_data();
        let model = BoostedDemandModel::fit(&features, &targets, DemandModelConfig::default());

        let cheap = model.predict(&price_feature(3.0));
        let expensive = model.predict(&price_feature(9.0));
        assert!(
            cheap > expensive,
            "demand at price 3.0 ({cheap}) should exceed demand at price 9.0 ({expensive})"
        );
        // In-range predictions should land near the generating curve.
        assert!((cheap - 170.0).abs() < 20.0);
        assert!((expensive - 110.0).abs() < 20.0);
    }

    #[test]
    fn fitting_is_deterministic() {
        let (features, targets) = synthetic_training_data();
        let a = BoostedDemandModel::fit(&features, &targets, DemandModelConfig::default());
        let b = BoostedDemandModel::fit(&features, &targets, DemandModelConfig::default());

        for price in [2.0, 4.5, 7.0, 30.0] {
            assert_eq!(a.predict(&price_feature(price)), b.predict(&price_feature(price)));
        }
    }

    #[test]
    fn predictions_clamp_at_zero() {
        let features = vec![[1.0, 0.0, 0.0, 0.0], [2.0, 0.0, 0.0, 0.0]];
        let targets = vec![-50.0, -80.0];
        let model = BoostedDemandModel::fit(&features, &targets, DemandModelConfig::default());
        assert_eq!(model.predict(&price_feature(1.5)), 0.0);
    }

    #[test]
    fn constant_targets_produce_constant_prediction() {
        let (features, _) = synthetic_training_data();
        let targets = vec![75.0; features.len()];
        let model = BoostedDemandModel::fit(&features, &targets, DemandModelConfig::default());
        let prediction = model.predict(&price_feature(5.0));
        assert!((prediction - 75.0).abs() < 1e-9);
    }
}
