//! Catalog error types.
//!
//! Every mutation on the catalog store reports failures through
//! [`CatalogError`] so callers can classify them for display or retry
//! decisions without string matching. No error here is fatal: the store is
//! left unchanged whenever an operation fails.

use thiserror::Error;

/// Errors reported by catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A student name was empty after trimming.
    #[error("student name must not be empty")]
    EmptyStudentName,

    /// A completion score was outside the 0-100 range.
    #[error("score {0} is out of range (expected 0-100)")]
    ScoreOutOfRange(f64),

    /// No student record with the given identifier.
    #[error("student {0} not found")]
    StudentNotFound(u32),

    /// No course record with the given identifier.
    #[error("course {0} not found")]
    CourseNotFound(u32),

    /// No student matched the given name.
    #[error("no student named '{0}'")]
    NoStudentNamed(String),

    /// No active enrollment for the (student, course) pair.
    #[error("no active enrollment for student {student_id} in course {course_id}")]
    NoActiveEnrollment { student_id: u32, course_id: u32 },
}

impl CatalogError {
    /// Returns `true` if this error means a referenced record is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::StudentNotFound(_)
                | CatalogError::CourseNotFound(_)
                | CatalogError::NoStudentNamed(_)
                | CatalogError::NoActiveEnrollment { .. }
        )
    }

    /// Returns `true` if this error means the input itself was malformed.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CatalogError::EmptyStudentName | CatalogError::ScoreOutOfRange(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_exhaustive() {
        let errors = [
            CatalogError::EmptyStudentName,
            CatalogError::ScoreOutOfRange(150.0),
            CatalogError::StudentNotFound(7),
            CatalogError::CourseNotFound(9),
            CatalogError::NoStudentNamed("Nonexistent".into()),
            CatalogError::NoActiveEnrollment {
                student_id: 1,
                course_id: 2,
            },
        ];
        for e in &errors {
            assert!(
                e.is_not_found() ^ e.is_validation(),
                "{e} must be exactly one of not-found/validation"
            );
        }
    }

    #[test]
    fn messages_name_the_offender() {
        let e = CatalogError::NoActiveEnrollment {
            student_id: 3,
            course_id: 8,
        };
        assert_eq!(
            e.to_string(),
            "no active enrollment for student 3 in course 8"
        );
        assert_eq!(
            CatalogError::ScoreOutOfRange(150.0).to_string(),
            "score 150 is out of range (expected 0-100)"
        );
    }
}
