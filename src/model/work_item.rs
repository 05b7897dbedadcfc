use crate::model::GenericResponse;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;

const HIERARCHY_REL_PREFIX: &str = "System.LinkTypes.Hierarchy";

#[derive(Debug, Clone, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct WorkItemReference {
    pub id: i64,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: i64,
    pub url: String,
    pub fields: HashMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItemLink {
    pub rel: String,
    pub source: WorkItemReference,
    pub target: WorkItemReference,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IterationWorkItems {
    pub url: String,
    pub work_item_relations: Vec<WorkItemLink>,
}

// Create
impl WorkItem {
    pub fn from_snapshot(path: &str) -> crate::model::Result<Vec<Self>> {
        let json_str = fs::read_to_string(path)?;
        let response: GenericResponse<Self> = serde_json::from_str(&json_str)?;
        if response.count != response.value.len() {
            return Err(format!(
                "Work item envelope declares {} values but contains {}",
                response.count,
                response.value.len()
            )
            .into());
        }
        Ok(response.value)
    }
}

impl IterationWorkItems {
    pub fn from_snapshot(path: &str) -> crate::model::Result<Self> {
        let json_str = fs::read_to_string(path)?;
        let parsed = serde_json::from_str(&json_str)?;
        Ok(parsed)
    }
}

// Fields
impl WorkItem {
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

impl WorkItemLink {
    pub fn is_hierarchy(&self) -> bool {
        self.rel.starts_with(HIERARCHY_REL_PREFIX)
    }
}
