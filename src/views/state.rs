// Explicit UI state: the values of the sidebar controls

use crate::models::{Method, K};
use serde::Serialize;

/// The K slider: integer range [1, max k] with a clamped initial value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KSlider {
    pub min: K,
    pub max: K,
    pub value: K,
}

impl KSlider {
    pub fn new(max_k: K, default_k: K) -> Self {
        let max = max_k.max(1);
        Self {
            min: 1,
            max,
            value: default_k.clamp(1, max),
        }
    }

    pub fn contains(&self, k: K) -> bool {
        (self.min..=self.max).contains(&k)
    }
}

/// Current values of all controls. Every interaction produces a new page from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UiState {
    pub k: K,
    pub method: Method,
    pub show_recommended: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            k: 5,
            method: Method::Ilp,
            show_recommended: true,
        }
    }
}

impl UiState {
    /// Initial state for a freshly loaded table
    pub fn initial(slider: &KSlider) -> Self {
        Self {
            k: slider.value,
            ..Self::default()
        }
    }
}
