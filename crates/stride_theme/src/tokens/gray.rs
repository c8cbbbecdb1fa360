//! Five-step gray scale

use serde::{Deserialize, Serialize};

/// Gray scale step, lightest contrast first
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum GrayStep {
    Gray10,
    Gray20,
    Gray30,
    Gray40,
    Gray50,
}

impl GrayStep {
    pub const ALL: [GrayStep; 5] = [
        GrayStep::Gray10,
        GrayStep::Gray20,
        GrayStep::Gray30,
        GrayStep::Gray40,
        GrayStep::Gray50,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Numeric label: 10, 20 ... 50
    pub const fn level(self) -> u8 {
        (self as u8 + 1) * 10
    }
}

/// Gray values for one mode
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct GrayScale {
    pub steps: [String; 5],
}

impl GrayScale {
    pub fn new(steps: [&str; 5]) -> Self {
        Self {
            steps: steps.map(str::to_string),
        }
    }

    pub fn get(&self, step: GrayStep) -> &str {
        &self.steps[step.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        let levels: Vec<u8> = GrayStep::ALL.iter().map(|s| s.level()).collect();
        assert_eq!(levels, vec![10, 20, 30, 40, 50]);
    }
}
