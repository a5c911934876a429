//! Field-inference configuration.

use serde::{Deserialize, Serialize};

/// Thresholds for the field type-inference heuristics.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InferenceConfig {
    /// Maximum unique values for a column to qualify as select. Default: 10.
    pub select_max_options: Option<usize>,
    /// Minimum share of samples that must belong to a repeated value for
    /// select. Default: 0.5.
    pub select_repeat_ratio: Option<f64>,
    /// Value length beyond which content counts as long-form. Default: 200.
    pub textbox_min_length: Option<usize>,
    /// How many leading fields get `show_in_list`. Default: 3.
    pub show_in_list_count: Option<usize>,
}

impl InferenceConfig {
    /// Returns the effective select option cap, defaulting to 10.
    pub fn effective_select_max_options(&self) -> usize {
        self.select_max_options.unwrap_or(10)
    }

    /// Returns the effective repeat ratio, defaulting to 0.5.
    pub fn effective_select_repeat_ratio(&self) -> f64 {
        self.select_repeat_ratio.unwrap_or(0.5)
    }

    /// Returns the effective long-form length threshold, defaulting to 200.
    pub fn effective_textbox_min_length(&self) -> usize {
        self.textbox_min_length.unwrap_or(200)
    }

    /// Returns the effective list-column count, defaulting to 3.
    pub fn effective_show_in_list_count(&self) -> usize {
        self.show_in_list_count.unwrap_or(3)
    }
}
