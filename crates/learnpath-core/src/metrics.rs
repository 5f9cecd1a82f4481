//! Aggregate catalog statistics.
//!
//! Everything here is a pure function of the current store state,
//! recomputed on demand. There is no caching and no incremental update:
//! calling the same function twice against an unchanged catalog returns
//! identical values.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// Headline numbers for the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogMetrics {
    /// Number of student records.
    pub total_students: usize,
    /// Number of course records.
    pub total_courses: usize,
    /// Enrollments with no completion yet.
    pub active_enrollments: usize,
    /// Scored enrollments as a percentage of all enrollments.
    ///
    /// The denominator is every enrollment, not only completed ones, so a
    /// catalog where half the enrollments are still active reports 50%
    /// even if every finished one was scored. 0.0 when there are no
    /// enrollments at all.
    pub avg_completion_rate: f64,
}

/// Computes the headline metrics for a catalog.
pub fn compute_metrics(catalog: &Catalog) -> CatalogMetrics {
    let enrollments = catalog.enrollments();
    let active = enrollments.iter().filter(|e| e.is_active()).count();
    let scored = enrollments.iter().filter(|e| e.score().is_some()).count();

    let avg_completion_rate = if enrollments.is_empty() {
        0.0
    } else {
        scored as f64 / enrollments.len() as f64 * 100.0
    };

    CatalogMetrics {
        total_students: catalog.students().len(),
        total_courses: catalog.courses().len(),
        active_enrollments: active,
        avg_completion_rate,
    }
}

/// A course ranked by how many enrollments it has attracted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoursePopularity {
    pub course_id: u32,
    pub course_name: String,
    pub enrollments: usize,
}

/// Courses ranked by total enrollment count, descending, truncated to `n`.
///
/// Ties are resolved by ascending course id so the output is stable.
/// Courses with no enrollments are omitted.
pub fn popular_courses(catalog: &Catalog, n: usize) -> Vec<CoursePopularity> {
    let mut counts: HashMap<u32, usize> = HashMap::new();
    for e in catalog.enrollments() {
        *counts.entry(e.course_id).or_default() += 1;
    }

    let mut ranked: Vec<CoursePopularity> = counts
        .into_iter()
        .map(|(course_id, enrollments)| CoursePopularity {
            course_id,
            course_name: catalog
                .course(course_id)
                .map(|c| c.name.clone())
                .unwrap_or_default(),
            enrollments,
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.enrollments
            .cmp(&a.enrollments)
            .then(a.course_id.cmp(&b.course_id))
    });
    ranked.truncate(n);
    ranked
}

/// A student ranked by mean completed score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentStanding {
    pub student_id: u32,
    pub student_name: String,
    pub avg_score: f64,
}

/// Students ranked by the mean score of their completed enrollments,
/// descending, truncated to `n`. Students with no completed enrollments are
/// excluded; ties are resolved by ascending student id.
pub fn top_students(catalog: &Catalog, n: usize) -> Vec<StudentStanding> {
    let mut totals: HashMap<u32, (f64, usize)> = HashMap::new();
    for e in catalog.enrollments() {
        if let Some(score) = e.score() {
            let entry = totals.entry(e.student_id).or_default();
            entry.0 += score;
            entry.1 += 1;
        }
    }

    let mut ranked: Vec<StudentStanding> = totals
        .into_iter()
        .map(|(student_id, (sum, count))| StudentStanding {
            student_id,
            student_name: catalog
                .student(student_id)
                .map(|s| s.name.clone())
                .unwrap_or_default(),
            avg_score: sum / count as f64,
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.avg_score
            .total_cmp(&a.avg_score)
            .then(a.student_id.cmp(&b.student_id))
    });
    ranked.truncate(n);
    ranked
}
