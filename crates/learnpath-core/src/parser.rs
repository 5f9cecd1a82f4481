//! TOML catalog seed parser.
//!
//! Loads a catalog from a TOML seed file, writes one back out, and checks a
//! parsed catalog for common data problems. Timestamps are RFC 3339 strings
//! (quoted in the TOML).

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::model::{Completion, Course, Difficulty, Enrollment, Student};

/// Intermediate TOML structure for catalog seed files.
#[derive(Debug, Default, Serialize, Deserialize)]
struct TomlCatalogFile {
    #[serde(default)]
    students: Vec<TomlStudent>,
    #[serde(default)]
    courses: Vec<TomlCourse>,
    #[serde(default)]
    enrollments: Vec<TomlEnrollment>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TomlStudent {
    id: u32,
    name: String,
    #[serde(default)]
    style: String,
    #[serde(default)]
    interests: String,
    #[serde(default = "default_grade_level")]
    grade_level: u32,
}

fn default_grade_level() -> u32 {
    10
}

#[derive(Debug, Serialize, Deserialize)]
struct TomlCourse {
    id: u32,
    name: String,
    #[serde(default)]
    subject: String,
    #[serde(default)]
    difficulty: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct TomlEnrollment {
    student_id: u32,
    course_id: u32,
    started_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completion: Option<TomlCompletion>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TomlCompletion {
    completed_at: DateTime<Utc>,
    score: f64,
}

/// Parse a TOML seed file into a [`Catalog`].
pub fn parse_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;

    parse_catalog_str(&content, path)
}

/// Parse a TOML string into a [`Catalog`] (useful for testing).
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<Catalog> {
    let parsed: TomlCatalogFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let students = parsed
        .students
        .into_iter()
        .map(|s| Student {
            id: s.id,
            name: s.name,
            style: s.style.into(),
            interests: s.interests,
            grade_level: s.grade_level,
        })
        .collect();

    let courses = parsed
        .courses
        .into_iter()
        .map(|c| {
            let difficulty: Difficulty = c
                .difficulty
                .parse()
                .map_err(|e: String| anyhow::anyhow!("course {}: {}", c.id, e))?;
            Ok(Course {
                id: c.id,
                name: c.name,
                subject: c.subject,
                difficulty,
                description: c.description,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let enrollments = parsed
        .enrollments
        .into_iter()
        .map(|e| Enrollment {
            student_id: e.student_id,
            course_id: e.course_id,
            started_at: e.started_at,
            completion: e.completion.map(|c| Completion {
                completed_at: c.completed_at,
                score: c.score,
            }),
        })
        .collect();

    Ok(Catalog::from_records(students, courses, enrollments))
}

/// Write a catalog back out as a TOML seed file.
pub fn save_catalog(catalog: &Catalog, path: &Path) -> Result<()> {
    let file = TomlCatalogFile {
        students: catalog
            .students()
            .iter()
            .map(|s| TomlStudent {
                id: s.id,
                name: s.name.clone(),
                style: s.style.to_string(),
                interests: s.interests.clone(),
                grade_level: s.grade_level,
            })
            .collect(),
        courses: catalog
            .courses()
            .iter()
            .map(|c| TomlCourse {
                id: c.id,
                name: c.name.clone(),
                subject: c.subject.clone(),
                difficulty: c.difficulty.to_string(),
                description: c.description.clone(),
            })
            .collect(),
        enrollments: catalog
            .enrollments()
            .iter()
            .map(|e| TomlEnrollment {
                student_id: e.student_id,
                course_id: e.course_id,
                started_at: e.started_at,
                completion: e.completion.as_ref().map(|c| TomlCompletion {
                    completed_at: c.completed_at,
                    score: c.score,
                }),
            })
            .collect(),
    };

    let content = toml::to_string_pretty(&file).context("failed to serialize catalog")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("failed to write catalog to {}", path.display()))?;
    Ok(())
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The offending record (if applicable), e.g. "student 3".
    pub record: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a parsed catalog for common data problems.
///
/// Problems are reported as warnings rather than errors so a seed file can
/// still be loaded and repaired interactively.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_students = std::collections::HashSet::new();
    for student in catalog.students() {
        if !seen_students.insert(student.id) {
            warnings.push(ValidationWarning {
                record: Some(format!("student {}", student.id)),
                message: format!("duplicate student id: {}", student.id),
            });
        }
        if student.name.trim().is_empty() {
            warnings.push(ValidationWarning {
                record: Some(format!("student {}", student.id)),
                message: "student name is empty".into(),
            });
        }
    }

    let mut seen_courses = std::collections::HashSet::new();
    for course in catalog.courses() {
        if !seen_courses.insert(course.id) {
            warnings.push(ValidationWarning {
                record: Some(format!("course {}", course.id)),
                message: format!("duplicate course id: {}", course.id),
            });
        }
        if course.name.trim().is_empty() {
            warnings.push(ValidationWarning {
                record: Some(format!("course {}", course.id)),
                message: "course name is empty".into(),
            });
        }
    }

    for (idx, e) in catalog.enrollments().iter().enumerate() {
        let record = format!("enrollment {idx}");
        if catalog.student(e.student_id).is_none() {
            warnings.push(ValidationWarning {
                record: Some(record.clone()),
                message: format!("references missing student {}", e.student_id),
            });
        }
        if catalog.course(e.course_id).is_none() {
            warnings.push(ValidationWarning {
                record: Some(record.clone()),
                message: format!("references missing course {}", e.course_id),
            });
        }
        if let Some(completion) = &e.completion {
            if !(0.0..=100.0).contains(&completion.score) {
                warnings.push(ValidationWarning {
                    record: Some(record),
                    message: format!("completion score {} is out of range", completion.score),
                });
            }
        }
    }

    warnings
}
