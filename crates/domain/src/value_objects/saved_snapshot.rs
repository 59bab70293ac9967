use crate::entities::points::PointsModel;
use crate::entities::strategy::StrategyInput;
use serde::{Deserialize, Serialize};

/// Everything a user has saved, persisted and exported as one unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedSnapshot {
    #[serde(default)]
    pub strategies: Vec<StrategyInput>,
    #[serde(default)]
    pub points: Vec<PointsModel>,
}

impl SavedSnapshot {
    /// Inserts `strategy` first, dropping any saved entry with the same id.
    pub fn upsert_strategy(&mut self, strategy: StrategyInput) {
        self.strategies.retain(|s| s.id != strategy.id);
        self.strategies.insert(0, strategy);
    }

    /// Inserts `model` first, dropping any saved entry with the same id.
    pub fn upsert_points(&mut self, model: PointsModel) {
        self.points.retain(|p| p.id != model.id);
        self.points.insert(0, model);
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty() && self.points.is_empty()
    }
}
