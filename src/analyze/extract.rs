use crate::analyze::EffortRecord;
use crate::model::WorkItem;
use serde_json::Value;

/// Field names recognized during extraction. The backend schema is
/// user-configurable, so nothing here is hardcoded beyond CLI defaults.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    pub effort_field: String,
    pub estimate_field: String,
    pub group_by_field: Option<String>,
    pub default_group: String,
}

impl FieldConfig {
    pub fn new(
        effort_field: impl ToString,
        estimate_field: impl ToString,
        group_by_field: Option<String>,
        default_group: impl ToString,
    ) -> Self {
        Self {
            effort_field: effort_field.to_string(),
            estimate_field: estimate_field.to_string(),
            group_by_field,
            default_group: default_group.to_string(),
        }
    }
}

pub trait EffortSource {
    /// Extracts the numeric record for one work item. Missing fields read as
    /// zero; present-but-unparseable fields read as zero and are counted in
    /// the second tuple element so the caller can report them.
    fn effort_record(&self, config: &FieldConfig) -> (EffortRecord, usize);
}

impl EffortSource for WorkItem {
    fn effort_record(&self, config: &FieldConfig) -> (EffortRecord, usize) {
        let mut non_numeric = 0;
        let effort = numeric_field(self.field(&config.effort_field), &mut non_numeric);
        let original_estimate = numeric_field(self.field(&config.estimate_field), &mut non_numeric);
        let group = match &config.group_by_field {
            Some(field) => group_key(self.field(field), &config.default_group),
            None => config.default_group.clone(),
        };
        (
            EffortRecord {
                group,
                effort,
                original_estimate,
            },
            non_numeric,
        )
    }
}

fn numeric_field(value: Option<&Value>, non_numeric: &mut usize) -> f64 {
    match value {
        None | Some(Value::Null) => 0.0,
        Some(Value::Number(number)) => number.as_f64().unwrap_or(0.0),
        Some(Value::String(string)) => match string.parse::<f64>() {
            Ok(parsed) => parsed,
            Err(_) => {
                *non_numeric += 1;
                0.0
            }
        },
        Some(_) => {
            *non_numeric += 1;
            0.0
        }
    }
}

fn group_key(value: Option<&Value>, default_group: &str) -> String {
    match value {
        Some(Value::String(string)) => string.clone(),
        // Identity fields arrive as objects with a display name.
        Some(Value::Object(map)) => map
            .get("displayName")
            .and_then(Value::as_str)
            .map(String::from)
            .unwrap_or_else(|| default_group.to_string()),
        Some(Value::Number(number)) => number.to_string(),
        _ => default_group.to_string(),
    }
}
