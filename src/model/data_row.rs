use serde::{Deserialize, Serialize};

/// One aggregated group of work items. The derived fields are computed at
/// construction so every row satisfies `averageEffort == effort / count` and
/// the zero-estimate ratio policy (ratio is `0.0`, never a division fault).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRow {
    pub name: String,
    pub effort: f64,
    pub original_estimate: f64,
    pub count: usize,
    pub average_effort: f64,
    pub average_original_estimate: f64,
    pub effort_estimate_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericResponse<T> {
    pub count: usize,
    pub value: Vec<T>,
}

// Create
impl DataRow {
    /// `count` must be at least 1 (a group always holds the records that
    /// created it); a zero count would make the averages NaN.
    pub fn new(name: impl ToString, effort: f64, original_estimate: f64, count: usize) -> Self {
        let ratio = if original_estimate != 0.0 {
            effort / original_estimate
        } else {
            0.0
        };
        Self {
            name: name.to_string(),
            effort,
            original_estimate,
            count,
            average_effort: effort / count as f64,
            average_original_estimate: original_estimate / count as f64,
            effort_estimate_ratio: ratio,
        }
    }
}

impl<T> GenericResponse<T> {
    pub fn new(value: Vec<T>) -> Self {
        Self {
            count: value.len(),
            value,
        }
    }
}
