//! Field schema types for custom asset definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of field types a custom-asset schema can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Textbox,
    Number,
    Date,
    Checkbox,
    Select,
    Header,
    Password,
    Totp,
}

impl FieldType {
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Textbox => "textbox",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Checkbox => "checkbox",
            FieldType::Select => "select",
            FieldType::Header => "header",
            FieldType::Password => "password",
            FieldType::Totp => "totp",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Schema definition for one custom-asset field.
///
/// Inferred definitions never assert `required`; key uniqueness within a
/// type is enforced by the schema validation layer, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// snake_case identifier derived from the source column name.
    pub key: String,
    /// Original column header, preserved for display.
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub show_in_list: bool,
    /// Allowed values; present only for select fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_omitted_when_absent() {
        let field = FieldDefinition {
            key: "hostname".into(),
            name: "Hostname".into(),
            field_type: FieldType::Text,
            required: false,
            show_in_list: true,
            options: None,
        };
        let json = serde_json::to_value(&field).unwrap();
        assert!(json.get("options").is_none());
        assert_eq!(json["type"], "text");
    }

    #[test]
    fn test_options_serialized_for_select() {
        let field = FieldDefinition {
            key: "status".into(),
            name: "Status".into(),
            field_type: FieldType::Select,
            required: false,
            show_in_list: false,
            options: Some(vec!["active".into(), "retired".into()]),
        };
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["options"][1], "retired");
    }
}
