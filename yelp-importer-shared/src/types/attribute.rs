use crate::attributes;
use crate::sanitize::clean_text;
use crate::types::BusinessRecord;

/// One (business, attribute, value) row. The attribute name doubles as the
/// key of the Attribute lookup table the row references; the value is always
/// the string form of the original (possibly nested/boolean/numeric) value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeValue {
    pub business_id: String,
    pub attribute_name: String,
    pub attribute_value: String,
}

impl AttributeValue {
    /// Expands a business record's nested attribute map into one row per
    /// flattened (name, value) pair.
    pub fn expand(record: &BusinessRecord) -> Vec<AttributeValue> {
        let Some(raw) = record.attributes.as_ref() else {
            return Vec::new();
        };
        attributes::flatten(raw)
            .into_iter()
            .map(|(name, value)| AttributeValue {
                business_id: record.business_id.clone(),
                attribute_name: clean_text(&name),
                attribute_value: clean_text(&value),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn record(attributes: Value) -> BusinessRecord {
        let attributes = match attributes {
            Value::Object(map) => Some(map),
            Value::Null => None,
            _ => panic!("expected an object"),
        };
        BusinessRecord {
            business_id: "b1".to_string(),
            name: "Cafe".to_string(),
            address: "1 Main St".to_string(),
            city: "Tucson".to_string(),
            state: "AZ".to_string(),
            postal_code: "85701".to_string(),
            latitude: None,
            longitude: None,
            stars: 4.0,
            is_open: 1,
            categories: None,
            attributes,
            hours: None,
        }
    }

    #[test]
    fn one_row_per_flattened_pair() {
        let rows =
            AttributeValue::expand(&record(json!({"BusinessParking": {"garage": false}})));
        assert_eq!(
            rows,
            vec![AttributeValue {
                business_id: "b1".to_string(),
                attribute_name: "BusinessParking.garage".to_string(),
                attribute_value: "false".to_string(),
            }]
        );
    }

    #[test]
    fn missing_attributes_expand_to_nothing() {
        assert!(AttributeValue::expand(&record(Value::Null)).is_empty());
    }

    #[test]
    fn values_are_sanitized() {
        let rows = AttributeValue::expand(&record(json!({"WiFi": "u'free'"})));
        assert_eq!(rows[0].attribute_value, "u`free`");
    }
}
