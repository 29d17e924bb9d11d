//! Type of action space.
use serde::{Deserialize, Serialize};

/// Defines if actions are discrete or continuous.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
pub enum SpaceType {
    /// Each action branch selects one of a finite number of choices.
    Discrete,

    /// Actions are real-valued vectors.
    Continuous,
}

impl Default for SpaceType {
    fn default() -> Self {
        Self::Discrete
    }
}

impl SpaceType {
    /// Returns `true` for [`SpaceType::Discrete`].
    pub fn is_discrete(&self) -> bool {
        matches!(self, Self::Discrete)
    }

    /// Returns `true` for [`SpaceType::Continuous`].
    pub fn is_continuous(&self) -> bool {
        matches!(self, Self::Continuous)
    }
}
