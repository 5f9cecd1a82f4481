//! Core data model types for learnpath.
//!
//! These are the fundamental record types that the catalog store, metrics,
//! and recommendation engine all operate on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A learner registered in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier, stable for the record's lifetime.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Preferred learning style.
    #[serde(default)]
    pub style: LearningStyle,
    /// Free-text comma-separated interest tags (e.g. "Math, Data").
    #[serde(default)]
    pub interests: String,
    /// School grade level.
    #[serde(default = "default_grade_level")]
    pub grade_level: u32,
}

fn default_grade_level() -> u32 {
    10
}

/// A course offered in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier.
    pub id: u32,
    /// Course name.
    pub name: String,
    /// Subject tag (e.g. "Data", "Robotics").
    #[serde(default)]
    pub subject: String,
    /// Difficulty tier.
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}

/// A student's enrollment in a course.
///
/// An enrollment with no [`Completion`] is "active". Completion timestamp
/// and score travel together, so one cannot exist without the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    /// Identifier of the enrolled student.
    pub student_id: u32,
    /// Identifier of the course.
    pub course_id: u32,
    /// When the enrollment started.
    pub started_at: DateTime<Utc>,
    /// Present once the course has been completed.
    #[serde(default)]
    pub completion: Option<Completion>,
}

impl Enrollment {
    /// Returns `true` if the enrollment has not been completed yet.
    pub fn is_active(&self) -> bool {
        self.completion.is_none()
    }

    /// The completion score, if the enrollment has been completed.
    pub fn score(&self) -> Option<f64> {
        self.completion.as_ref().map(|c| c.score)
    }
}

/// Completion record attached to a finished enrollment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    /// When the course was completed.
    pub completed_at: DateTime<Utc>,
    /// Performance score in 0-100.
    pub score: f64,
}

/// How a student prefers to learn.
///
/// The four canonical styles drive keyword matching in the recommendation
/// engine. Arbitrary strings are preserved verbatim in
/// [`Other`](LearningStyle::Other) rather than rejected, matching the
/// permissive input handling of the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LearningStyle {
    Visual,
    Kinesthetic,
    Auditory,
    Reading,
    /// A free-text style outside the canonical four.
    Other(String),
}

impl Default for LearningStyle {
    fn default() -> Self {
        LearningStyle::Visual
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LearningStyle::Visual => write!(f, "Visual"),
            LearningStyle::Kinesthetic => write!(f, "Kinesthetic"),
            LearningStyle::Auditory => write!(f, "Auditory"),
            LearningStyle::Reading => write!(f, "Reading"),
            LearningStyle::Other(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for LearningStyle {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "" | "visual" => LearningStyle::Visual,
            "kinesthetic" => LearningStyle::Kinesthetic,
            "auditory" => LearningStyle::Auditory,
            "reading" => LearningStyle::Reading,
            _ => LearningStyle::Other(s.trim().to_string()),
        }
    }
}

impl From<String> for LearningStyle {
    fn from(s: String) -> Self {
        LearningStyle::from(s.as_str())
    }
}

impl From<LearningStyle> for String {
    fn from(style: LearningStyle) -> Self {
        style.to_string()
    }
}

/// Course difficulty tiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "Beginner"),
            Difficulty::Intermediate => write!(f, "Intermediate"),
            Difficulty::Advanced => write!(f, "Advanced"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}
