//! Recommendation report types with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::recommend::Recommendation;

/// A saved run of the recommendation engine for one student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// The student the recommendations were computed for.
    pub student_id: u32,
    /// The student's display name at report time.
    pub student_name: String,
    /// How many recommendations were requested.
    pub requested: usize,
    /// The ranked recommendations, best first.
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationReport {
    /// Builds a report around a finished recommendation run.
    pub fn new(
        student_id: u32,
        student_name: impl Into<String>,
        requested: usize,
        recommendations: Vec<Recommendation>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            student_id,
            student_name: student_name.into(),
            requested,
            recommendations,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: RecommendationReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_report() -> RecommendationReport {
        RecommendationReport::new(
            1,
            "Aisha",
            2,
            vec![
                Recommendation {
                    course_id: 2,
                    course_name: "Data Science Basics".into(),
                    score: 30.7,
                },
                Recommendation {
                    course_id: 5,
                    course_name: "Robotics 101".into(),
                    score: 10.2,
                },
            ],
        )
    }

    #[test]
    fn json_roundtrip() {
        let report = make_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        report.save_json(&path).unwrap();
        let loaded = RecommendationReport::load_json(&path).unwrap();

        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.student_name, "Aisha");
        assert_eq!(loaded.recommendations.len(), 2);
        assert_eq!(loaded.recommendations[0].course_id, 2);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = RecommendationReport::load_json(&dir.path().join("nope.json"));
        assert!(result.is_err());
    }
}
