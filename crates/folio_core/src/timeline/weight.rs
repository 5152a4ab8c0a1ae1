//! Wave-shaped bar weights.
//!
//! Bars near the selection are lifted by a Gaussian bump on top of a constant
//! base height.

use serde::{Deserialize, Serialize};

/// Parameters of the weight curve `base + boost * exp(-decay * d^2)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightCurve {
    /// Height every bar has regardless of distance
    pub base_height: f64,
    /// Extra height at the selected bar
    pub max_boost: f64,
    /// Decay constant `k`; must be non-negative
    pub decay: f64,
    /// Lift above `base_height` beyond which a bar counts as emphasized
    pub emphasis_threshold: f64,
}

impl Default for WeightCurve {
    fn default() -> Self {
        Self {
            base_height: 70.0,
            max_boost: 30.0,
            decay: 0.5,
            emphasis_threshold: 5.0,
        }
    }
}

impl WeightCurve {
    /// Weight of the bar at `bar_position` when `selected_position` is selected.
    pub fn compute_bar_weight(&self, bar_position: f64, selected_position: f64) -> f64 {
        let distance = (bar_position - selected_position).abs();
        let boost = (self.max_boost * (-self.decay * distance * distance).exp()).max(0.0);
        self.base_height + boost
    }

    /// Whether a weight is lifted far enough above the base to be highlighted.
    pub fn is_emphasized(&self, weight: f64) -> bool {
        weight - self.base_height > self.emphasis_threshold
    }

    /// Largest weight the curve can produce.
    pub fn peak(&self) -> f64 {
        self.base_height + self.max_boost
    }
}
