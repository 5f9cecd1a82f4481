//! Course recommendation scoring.
//!
//! Scores every course in the catalog against one student's profile and
//! returns a ranked list. The scoring is a transparent heuristic, not a
//! trained model: interest-tag matches dominate, learning-style keywords
//! and grade/difficulty fit add smaller boosts, and a sub-point random
//! tie-breaker decides between otherwise equal courses.
//!
//! The randomness source is injected so tests can pin it and production
//! callers can pass [`rand::thread_rng`].

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::model::{Course, Difficulty, LearningStyle, Student};

/// Score awarded per matching interest token.
const INTEREST_WEIGHT: f64 = 30.0;
/// Score awarded per matching learning-style keyword.
const STYLE_WEIGHT: f64 = 10.0;
/// Score awarded when course difficulty fits the student's grade level.
const GRADE_FIT_WEIGHT: f64 = 8.0;

/// One ranked course suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub course_id: u32,
    pub course_name: String,
    /// Heuristic ranking score; not a completion score.
    pub score: f64,
}

/// Keywords a learning style gravitates towards in course text.
fn style_keywords(style: &LearningStyle) -> &'static [&'static str] {
    match style {
        LearningStyle::Visual => &["design", "visual", "ux", "art"],
        LearningStyle::Kinesthetic => &["robot", "lab", "experiment", "hands"],
        LearningStyle::Auditory => &["speaking", "communication", "debate", "languages"],
        LearningStyle::Reading => &["history", "economics", "literature"],
        LearningStyle::Other(_) => &[],
    }
}

/// Scores a single course against a student profile, without the random
/// tie-breaker.
fn base_score(student: &Student, course: &Course) -> f64 {
    let text = format!(
        "{} {} {}",
        course.name, course.subject, course.description
    )
    .to_lowercase();

    let mut score = 0.0;

    let interests = student.interests.to_lowercase();
    for token in interests.split(',') {
        let token = token.trim();
        if !token.is_empty() && text.contains(token) {
            score += INTEREST_WEIGHT;
        }
    }

    for keyword in style_keywords(&student.style) {
        if text.contains(keyword) {
            score += STYLE_WEIGHT;
        }
    }

    if student.grade_level <= 8 && course.difficulty == Difficulty::Beginner {
        score += GRADE_FIT_WEIGHT;
    }
    if student.grade_level >= 11 && course.difficulty == Difficulty::Advanced {
        score += GRADE_FIT_WEIGHT;
    }

    score
}

/// Scores every course against the student's profile and returns the top
/// `top_n`, best first.
///
/// Returns an empty list when the student id does not resolve; that is "no
/// results", not an error. Each course's final score carries a uniform
/// [0, 1) tie-breaker drawn from `rng`, so repeated calls may reorder
/// courses whose base scores are equal.
pub fn recommend<R: Rng + ?Sized>(
    catalog: &Catalog,
    student_id: u32,
    top_n: usize,
    rng: &mut R,
) -> Vec<Recommendation> {
    let Some(student) = catalog.student(student_id) else {
        return Vec::new();
    };

    let mut ranked: Vec<Recommendation> = catalog
        .courses()
        .iter()
        .map(|course| Recommendation {
            course_id: course.id,
            course_name: course.name.clone(),
            score: base_score(student, course) + rng.gen::<f64>(),
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(top_n);
    ranked
}
