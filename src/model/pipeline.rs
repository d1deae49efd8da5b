//! JSON form of a fitted regression pipeline: optional standard scaling
//! followed by a random forest or a linear estimator.

use super::FareModel;
use crate::data::TripRecord;
use crate::error::PredictionError;
use serde::Deserialize;

const NO_CHILD: i64 = -1;

#[derive(Debug, Clone, Deserialize)]
pub struct FarePipeline {
    /// Column names the estimator was fitted on, in order.
    pub feature_names: Vec<String>,
    #[serde(default)]
    pub scaler: Option<StandardScaler>,
    pub estimator: Estimator,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Estimator {
    RandomForest { trees: Vec<RegressionTree> },
    Linear { coef: Vec<f64>, intercept: f64 },
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegressionTree {
    pub nodes: Vec<TreeNode>,
}

/// Flat tree node. `left == right == -1` marks a leaf.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TreeNode {
    #[serde(default)]
    pub feature: i64,
    #[serde(default)]
    pub threshold: f64,
    #[serde(default = "no_child")]
    pub left: i64,
    #[serde(default = "no_child")]
    pub right: i64,
    pub value: f64,
}

fn no_child() -> i64 {
    NO_CHILD
}

impl TreeNode {
    fn is_leaf(&self) -> bool {
        self.left == NO_CHILD && self.right == NO_CHILD
    }
}

impl FarePipeline {
    /// Structural checks that don't depend on the input row.
    pub fn validate(&self) -> Result<(), String> {
        let width = self.feature_names.len();
        if width != TripRecord::FEATURE_NAMES.len() {
            return Err(format!(
                "pipeline was fitted on {} features, a trip record has {}",
                width,
                TripRecord::FEATURE_NAMES.len()
            ));
        }

        if let Some(scaler) = &self.scaler {
            if scaler.mean.len() != width || scaler.scale.len() != width {
                return Err(format!(
                    "scaler has {} means and {} scales for {} features",
                    scaler.mean.len(),
                    scaler.scale.len(),
                    width
                ));
            }
        }

        match &self.estimator {
            Estimator::RandomForest { trees } => {
                if trees.is_empty() {
                    return Err("random forest has no trees".to_string());
                }
                if let Some(idx) = trees.iter().position(|tree| tree.nodes.is_empty()) {
                    return Err(format!("tree {} has no nodes", idx));
                }
            }
            Estimator::Linear { coef, .. } => {
                if coef.len() != width {
                    return Err(format!(
                        "linear estimator has {} coefficients for {} features",
                        coef.len(),
                        width
                    ));
                }
            }
        }

        Ok(())
    }

    fn check_features(&self) -> Result<(), PredictionError> {
        let expected = TripRecord::FEATURE_NAMES;
        let same = self.feature_names.len() == expected.len()
            && self.feature_names.iter().zip(expected).all(|(a, b)| a == b);

        if same {
            Ok(())
        } else {
            Err(PredictionError::FeatureMismatch {
                expected: self.feature_names.clone(),
                actual: expected.to_vec(),
            })
        }
    }
}

impl FareModel for FarePipeline {
    fn predict(&self, record: &TripRecord) -> Result<f64, PredictionError> {
        self.check_features()?;

        let mut row = record.to_row();
        if let Some(scaler) = &self.scaler {
            scaler.transform(&mut row);
        }

        let fare = self.estimator.predict(&row)?;
        if !fare.is_finite() {
            return Err(PredictionError::NonFiniteOutput(fare));
        }
        Ok(fare)
    }
}

impl StandardScaler {
    pub fn transform(&self, row: &mut [f64]) {
        for ((x, mean), scale) in row.iter_mut().zip(&self.mean).zip(&self.scale) {
            // zero variance columns are left unscaled
            let scale = if *scale == 0.0 { 1.0 } else { *scale };
            *x = (*x - mean) / scale;
        }
    }
}

impl Estimator {
    pub fn kind(&self) -> &'static str {
        match self {
            Estimator::RandomForest { .. } => "random_forest",
            Estimator::Linear { .. } => "linear",
        }
    }

    pub fn tree_count(&self) -> usize {
        match self {
            Estimator::RandomForest { trees } => trees.len(),
            Estimator::Linear { .. } => 0,
        }
    }

    pub fn predict(&self, row: &[f64]) -> Result<f64, PredictionError> {
        match self {
            Estimator::RandomForest { trees } => {
                let mut total = 0.0;
                for (idx, tree) in trees.iter().enumerate() {
                    total += tree
                        .predict(row)
                        .map_err(|msg| PredictionError::Inference(format!("tree {}: {}", idx, msg)))?;
                }
                Ok(total / trees.len() as f64)
            }
            Estimator::Linear { coef, intercept } => {
                if coef.len() != row.len() {
                    return Err(PredictionError::Inference(format!(
                        "linear estimator has {} coefficients for {} features",
                        coef.len(),
                        row.len()
                    )));
                }
                Ok(intercept + coef.iter().zip(row).map(|(c, x)| c * x).sum::<f64>())
            }
        }
    }
}

impl RegressionTree {
    /// Walks from the root to a leaf; every hop must land on a real node.
    pub fn predict(&self, row: &[f64]) -> Result<f64, String> {
        let mut idx = 0usize;

        // A well formed tree reaches a leaf in fewer hops than it has nodes.
        for _ in 0..=self.nodes.len() {
            let node = self
                .nodes
                .get(idx)
                .ok_or_else(|| format!("node {} does not exist", idx))?;

            if node.is_leaf() {
                return Ok(node.value);
            }

            let feature = usize::try_from(node.feature)
                .ok()
                .and_then(|f| row.get(f))
                .ok_or_else(|| format!("node {} splits on unknown feature {}", idx, node.feature))?;

            let next = if *feature <= node.threshold {
                node.left
            } else {
                node.right
            };
            idx = usize::try_from(next)
                .map_err(move |_| format!("node {} has a missing child", idx))?;
        }

        Err("tree does not reach a leaf".to_string())
    }
}
