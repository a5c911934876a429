//! Field type inference for custom-asset schemas.
//!
//! Consumes a column header plus its sampled values and produces a typed
//! field definition. Name patterns outrank value statistics; when nothing
//! matches, the column degrades to plain text. The whole module is total:
//! no input, however malformed, makes it fail.

pub mod keys;
pub mod patterns;

pub use keys::column_name_to_key;

use glueport_core::config::InferenceConfig;
use glueport_core::types::collections::{FxHashMap, FxHashSet};
use glueport_core::types::{FieldDefinition, FieldType};

/// Heuristic schema inference over export columns.
pub struct SchemaInference {
    config: InferenceConfig,
}

impl SchemaInference {
    pub fn new(config: InferenceConfig) -> Self {
        SchemaInference { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(InferenceConfig::default())
    }

    /// Infer the field definition for one column.
    ///
    /// `values` holds one entry per row; `None` marks a null cell.
    /// `field_index` is the column's position among the surviving columns
    /// and drives the `show_in_list` default.
    pub fn infer_field(
        &self,
        column_name: &str,
        values: &[Option<String>],
        field_index: usize,
    ) -> FieldDefinition {
        let (field_type, options) = self.classify(column_name, values);
        FieldDefinition {
            key: column_name_to_key(column_name),
            name: column_name.to_string(),
            field_type,
            // Heuristics never assert required-ness.
            required: false,
            show_in_list: field_index < self.config.effective_show_in_list_count(),
            options,
        }
    }

    /// Infer a whole schema, iterating columns in the given order.
    ///
    /// Columns in `skip_columns` are dropped; the first few surviving
    /// columns get `show_in_list` purely by position.
    pub fn infer_schema(
        &self,
        columns: &[String],
        rows: &[FxHashMap<String, String>],
        skip_columns: Option<&FxHashSet<String>>,
    ) -> Vec<FieldDefinition> {
        let mut fields = Vec::new();
        for column in columns {
            if skip_columns.is_some_and(|skip| skip.contains(column)) {
                continue;
            }
            let values: Vec<Option<String>> =
                rows.iter().map(|row| row.get(column).cloned()).collect();
            let index = fields.len();
            fields.push(self.infer_field(column, &values, index));
        }
        fields
    }

    /// Decide the field type, in priority order.
    fn classify(
        &self,
        column_name: &str,
        values: &[Option<String>],
    ) -> (FieldType, Option<Vec<String>>) {
        // Name patterns first. TOTP before password: TOTP columns often
        // literally contain the word "secret".
        if patterns::matches_any(&patterns::TOTP_PATTERNS, column_name) {
            return (FieldType::Totp, None);
        }
        if patterns::matches_any(&patterns::PASSWORD_PATTERNS, column_name) {
            return (FieldType::Password, None);
        }

        let samples: Vec<&str> = values
            .iter()
            .filter_map(|v| v.as_deref())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .collect();

        // Nothing to infer from.
        if samples.is_empty() {
            return (FieldType::Text, None);
        }

        // Boolean before numeric: "1"/"0" columns are checkboxes, not numbers.
        if samples.iter().all(|v| patterns::is_boolean_literal(v)) {
            return (FieldType::Checkbox, None);
        }
        if samples.iter().all(|v| v.parse::<f64>().is_ok()) {
            return (FieldType::Number, None);
        }
        if samples.iter().all(|v| patterns::is_date_value(v)) {
            return (FieldType::Date, None);
        }

        if self.is_long_form(&samples) {
            return (FieldType::Textbox, None);
        }
        if let Some(options) = self.select_options(&samples) {
            return (FieldType::Select, Some(options));
        }

        (FieldType::Text, None)
    }

    /// At least half the samples carry long-form content (newlines, markup,
    /// or length past the threshold).
    fn is_long_form(&self, samples: &[&str]) -> bool {
        let threshold = self.config.effective_textbox_min_length();
        let long = samples
            .iter()
            .filter(|v| {
                v.contains('\n')
                    || patterns::HTML_TAG.is_match(v)
                    || v.chars().count() > threshold
            })
            .count();
        long > 0 && long * 2 >= samples.len()
    }

    /// Select suitability: few unique values, and most samples belong to a
    /// value that repeats. Rejects mostly-unique free text even when a
    /// short sample keeps the unique count low.
    fn select_options(&self, samples: &[&str]) -> Option<Vec<String>> {
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for &sample in samples {
            *counts.entry(sample).or_insert(0) += 1;
        }
        if counts.len() > self.config.effective_select_max_options() {
            return None;
        }
        let repeated: usize = counts.values().filter(|&&count| count > 1).sum();
        let required = self.config.effective_select_repeat_ratio() * samples.len() as f64;
        if (repeated as f64) < required {
            return None;
        }
        let mut options: Vec<String> = counts.keys().map(|s| s.to_string()).collect();
        options.sort();
        Some(options)
    }
}
