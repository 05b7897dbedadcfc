use crate::model::GenericResponse;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamIterationAttributes {
    pub start_date: String,
    pub finish_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSettingsIteration {
    pub id: String,
    pub name: String,
    pub path: String,
    pub attributes: TeamIterationAttributes,
}

// Create
impl TeamSettingsIteration {
    pub fn from_snapshot(path: &str) -> crate::model::Result<Vec<Self>> {
        let json_str = fs::read_to_string(path)?;
        let response: GenericResponse<Self> = serde_json::from_str(&json_str)?;
        if response.count != response.value.len() {
            return Err(format!(
                "Iteration envelope declares {} values but contains {}",
                response.count,
                response.value.len()
            )
            .into());
        }
        Ok(response.value)
    }
}

// Window
impl TeamSettingsIteration {
    pub fn window(
        &self,
    ) -> crate::model::Result<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
        let Ok(since) = DateTime::parse_from_rfc3339(&self.attributes.start_date) else {
            return Err(format!(
                "Not a valid date time: {}",
                self.attributes.start_date
            )
            .into());
        };
        let Ok(until) = DateTime::parse_from_rfc3339(&self.attributes.finish_date) else {
            return Err(format!(
                "Not a valid date time: {}",
                self.attributes.finish_date
            )
            .into());
        };
        Ok((since, until))
    }
}
