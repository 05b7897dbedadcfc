use crate::model::{DataRow, GenericResponse, Result, TeamSettingsIteration};
use log::info;
use std::fs;
use std::path::Path;

pub trait JsonReport {
    fn report_json(&self, iteration: &TeamSettingsIteration, out_dir: &Path) -> Result<()>;
}

impl JsonReport for GenericResponse<DataRow> {
    fn report_json(&self, iteration: &TeamSettingsIteration, out_dir: &Path) -> Result<()> {
        let path = out_dir.join(format!("{}.json", iteration.name));
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        info!("Wrote {} rows to `{}`", self.count, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TeamIterationAttributes;
    use serde_json::Value;
    use tempfile::tempdir;

    fn iteration() -> TeamSettingsIteration {
        TeamSettingsIteration {
            id: "a1b2".to_string(),
            name: "Sprint 1".to_string(),
            path: "Project\\Sprint 1".to_string(),
            attributes: TeamIterationAttributes {
                start_date: "2024-01-01T00:00:00Z".to_string(),
                finish_date: "2024-01-14T00:00:00Z".to_string(),
            },
        }
    }

    #[test]
    fn written_report_keeps_wire_envelope_and_field_names() {
        let out_dir = tempdir().expect("create temp dir");
        let response = GenericResponse::new(vec![DataRow::new("groupA", 16.0, 10.0, 2)]);

        response
            .report_json(&iteration(), out_dir.path())
            .expect("write json report");

        let written =
            fs::read_to_string(out_dir.path().join("Sprint 1.json")).expect("read report");
        let json: Value = serde_json::from_str(&written).expect("parse report");
        assert_eq!(json["count"], 1);
        assert_eq!(json["value"].as_array().map(Vec::len), Some(1));
        assert_eq!(json["value"][0]["originalEstimate"], 10.0);
        assert_eq!(json["value"][0]["effortEstimateRatio"], 1.6);
    }
}
