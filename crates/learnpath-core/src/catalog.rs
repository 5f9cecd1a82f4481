//! In-memory catalog store.
//!
//! [`Catalog`] is the authoritative holder of students, courses, and
//! enrollments. It is a plain owned value: callers construct one, pass it
//! around explicitly, and drop it when the session ends. All mutations are
//! synchronous and leave the store untouched when they fail.
//!
//! Collection order is insertion order. Where an operation matches "the
//! first" record (e.g. completing one of several duplicate active
//! enrollments), first means first inserted.

use chrono::Utc;

use crate::error::CatalogError;
use crate::model::{Completion, Course, Difficulty, Enrollment, LearningStyle, Student};

/// The in-memory catalog of students, courses, and enrollments.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    students: Vec<Student>,
    courses: Vec<Course>,
    enrollments: Vec<Enrollment>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from pre-existing records, e.g. a parsed seed file.
    ///
    /// Records are taken verbatim; use
    /// [`validate_catalog`](crate::parser::validate_catalog) to surface
    /// duplicate ids or dangling enrollment references in untrusted input.
    pub fn from_records(
        students: Vec<Student>,
        courses: Vec<Course>,
        enrollments: Vec<Enrollment>,
    ) -> Self {
        Self {
            students,
            courses,
            enrollments,
        }
    }

    // -----------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------

    /// All students, in insertion order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// All courses, in insertion order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// All enrollments, in insertion order.
    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    /// Looks up a student by id.
    pub fn student(&self, id: u32) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Looks up a course by id.
    pub fn course(&self, id: u32) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// All enrollments referencing the given student.
    pub fn enrollments_for_student(&self, student_id: u32) -> Vec<&Enrollment> {
        self.enrollments
            .iter()
            .filter(|e| e.student_id == student_id)
            .collect()
    }

    /// The first active enrollment for the (student, course) pair, if any.
    pub fn find_active_enrollment(&self, student_id: u32, course_id: u32) -> Option<&Enrollment> {
        self.enrollments
            .iter()
            .find(|e| e.student_id == student_id && e.course_id == course_id && e.is_active())
    }

    // -----------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------

    /// Registers a new student and returns its identifier.
    ///
    /// Fails only when the trimmed name is empty. The identifier is the
    /// current maximum plus one, so ids never collide and are never reused
    /// within a session.
    pub fn add_student(
        &mut self,
        name: &str,
        style: LearningStyle,
        interests: &str,
        grade_level: u32,
    ) -> Result<u32, CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::EmptyStudentName);
        }
        let id = self.students.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        self.students.push(Student {
            id,
            name: name.to_string(),
            style,
            interests: interests.trim().to_string(),
            grade_level,
        });
        Ok(id)
    }

    /// Removes every student whose name matches `name` case-insensitively,
    /// cascading to their enrollments. Returns how many students were
    /// removed.
    pub fn remove_student(&mut self, name: &str) -> Result<usize, CatalogError> {
        let needle = name.trim().to_lowercase();
        let removed_ids: Vec<u32> = self
            .students
            .iter()
            .filter(|s| s.name.to_lowercase() == needle)
            .map(|s| s.id)
            .collect();

        if removed_ids.is_empty() {
            return Err(CatalogError::NoStudentNamed(name.trim().to_string()));
        }

        self.students.retain(|s| !removed_ids.contains(&s.id));
        let before = self.enrollments.len();
        self.enrollments
            .retain(|e| !removed_ids.contains(&e.student_id));
        tracing::debug!(
            "removed {} student(s) named '{}' and {} enrollment(s)",
            removed_ids.len(),
            needle,
            before - self.enrollments.len()
        );

        Ok(removed_ids.len())
    }

    /// Adds a course and returns its identifier.
    pub fn add_course(
        &mut self,
        name: &str,
        subject: &str,
        difficulty: Difficulty,
        description: &str,
    ) -> u32 {
        let id = self.courses.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        self.courses.push(Course {
            id,
            name: name.trim().to_string(),
            subject: subject.trim().to_string(),
            difficulty,
            description: description.trim().to_string(),
        });
        id
    }

    /// Starts a new active enrollment.
    ///
    /// Both ids must resolve to existing records. An existing active
    /// enrollment for the same pair does not block a second one; duplicates
    /// are permitted by construction.
    pub fn enroll(&mut self, student_id: u32, course_id: u32) -> Result<(), CatalogError> {
        if self.student(student_id).is_none() {
            return Err(CatalogError::StudentNotFound(student_id));
        }
        if self.course(course_id).is_none() {
            return Err(CatalogError::CourseNotFound(course_id));
        }
        self.enrollments.push(Enrollment {
            student_id,
            course_id,
            started_at: Utc::now(),
            completion: None,
        });
        Ok(())
    }

    /// Completes the first active enrollment for the (student, course) pair
    /// with the given score.
    ///
    /// The score is range-checked before any lookup, so an out-of-range
    /// score never touches the store. At most one enrollment transitions
    /// even when duplicate active enrollments exist for the pair.
    pub fn complete(
        &mut self,
        student_id: u32,
        course_id: u32,
        score: f64,
    ) -> Result<(), CatalogError> {
        if !(0.0..=100.0).contains(&score) {
            return Err(CatalogError::ScoreOutOfRange(score));
        }
        let enrollment = self
            .enrollments
            .iter_mut()
            .find(|e| e.student_id == student_id && e.course_id == course_id && e.is_active())
            .ok_or(CatalogError::NoActiveEnrollment {
                student_id,
                course_id,
            })?;
        enrollment.completion = Some(Completion {
            completed_at: Utc::now(),
            score,
        });
        Ok(())
    }

    // -----------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------

    /// Students whose name or interests contain `keyword`,
    /// case-insensitively. An empty result is not an error.
    pub fn search_students(&self, keyword: &str) -> Vec<&Student> {
        let kw = keyword.trim().to_lowercase();
        self.students
            .iter()
            .filter(|s| {
                s.name.to_lowercase().contains(&kw) || s.interests.to_lowercase().contains(&kw)
            })
            .collect()
    }

    /// Courses whose name, subject, or description contain `keyword`,
    /// case-insensitively.
    pub fn search_courses(&self, keyword: &str) -> Vec<&Course> {
        let kw = keyword.trim().to_lowercase();
        self.courses
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&kw)
                    || c.subject.to_lowercase().contains(&kw)
                    || c.description.to_lowercase().contains(&kw)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .add_student("Aisha", LearningStyle::Visual, "Math, Data", 6)
            .unwrap();
        catalog
            .add_student("Bilal", LearningStyle::Kinesthetic, "Robotics, Coding", 8)
            .unwrap();
        catalog.add_course(
            "Data Science Basics",
            "Data",
            Difficulty::Beginner,
            "Introductory data skills: spreadsheets, basic plots, stats",
        );
        catalog.add_course(
            "Robotics 101",
            "Robotics",
            Difficulty::Intermediate,
            "Build and program simple robots and sensors",
        );
        catalog
    }

    #[test]
    fn add_student_assigns_sequential_ids() {
        let mut catalog = Catalog::new();
        let first = catalog
            .add_student("Aisha", LearningStyle::Visual, "Math", 6)
            .unwrap();
        let second = catalog
            .add_student("Bilal", LearningStyle::Auditory, "Drama", 7)
            .unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    fn add_student_rejects_empty_name() {
        let mut catalog = Catalog::new();
        let err = catalog
            .add_student("   ", LearningStyle::Visual, "", 10)
            .unwrap_err();
        assert!(err.is_validation());
        assert!(catalog.students().is_empty());
    }

    #[test]
    fn remove_student_cascades_enrollments() {
        let mut catalog = seeded_catalog();
        catalog.enroll(1, 1).unwrap();
        catalog.enroll(1, 2).unwrap();
        catalog.complete(1, 2, 91.0).unwrap();
        catalog.enroll(2, 2).unwrap();

        let removed = catalog.remove_student("aisha").unwrap();
        assert_eq!(removed, 1);
        assert!(catalog.student(1).is_none());
        assert!(catalog.enrollments_for_student(1).is_empty());
        // Bilal's enrollment survives.
        assert_eq!(catalog.enrollments().len(), 1);
        assert_eq!(catalog.enrollments()[0].student_id, 2);
    }

    #[test]
    fn remove_student_unknown_name_leaves_store_unchanged() {
        let mut catalog = seeded_catalog();
        catalog.enroll(1, 1).unwrap();
        let students_before = catalog.students().len();
        let enrollments_before = catalog.enrollments().len();

        let err = catalog.remove_student("Nonexistent").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(catalog.students().len(), students_before);
        assert_eq!(catalog.enrollments().len(), enrollments_before);
    }

    #[test]
    fn remove_student_matches_all_same_named() {
        let mut catalog = Catalog::new();
        catalog
            .add_student("Sam", LearningStyle::Visual, "", 9)
            .unwrap();
        catalog
            .add_student("SAM", LearningStyle::Reading, "", 11)
            .unwrap();
        let removed = catalog.remove_student("sam").unwrap();
        assert_eq!(removed, 2);
        assert!(catalog.students().is_empty());
    }

    #[test]
    fn enroll_requires_existing_records() {
        let mut catalog = seeded_catalog();
        assert!(matches!(
            catalog.enroll(99, 1),
            Err(CatalogError::StudentNotFound(99))
        ));
        assert!(matches!(
            catalog.enroll(1, 99),
            Err(CatalogError::CourseNotFound(99))
        ));
        assert!(catalog.enrollments().is_empty());
    }

    #[test]
    fn enroll_permits_duplicate_active_pairs() {
        let mut catalog = seeded_catalog();
        catalog.enroll(1, 1).unwrap();
        catalog.enroll(1, 1).unwrap();
        assert_eq!(catalog.enrollments().len(), 2);
        assert!(catalog.enrollments().iter().all(|e| e.is_active()));
    }

    #[test]
    fn complete_sets_score_and_timestamp_together() {
        let mut catalog = seeded_catalog();
        catalog.enroll(1, 1).unwrap();
        catalog.complete(1, 1, 88.5).unwrap();

        let enrollment = &catalog.enrollments()[0];
        assert!(!enrollment.is_active());
        assert_eq!(enrollment.score(), Some(88.5));
        assert!(catalog.find_active_enrollment(1, 1).is_none());
    }

    #[test]
    fn complete_out_of_range_score_leaves_enrollment_active() {
        let mut catalog = seeded_catalog();
        catalog.enroll(1, 1).unwrap();

        let err = catalog.complete(1, 1, 150.0).unwrap_err();
        assert!(err.is_validation());
        assert!(catalog.enrollments()[0].is_active());

        let err = catalog.complete(1, 1, -0.5).unwrap_err();
        assert!(err.is_validation());
        assert!(catalog.enrollments()[0].is_active());
    }

    #[test]
    fn complete_without_active_enrollment_reports_not_found() {
        let mut catalog = seeded_catalog();
        let err = catalog.complete(1, 1, 75.0).unwrap_err();
        assert!(err.is_not_found());

        // A completed enrollment is not completable again.
        catalog.enroll(1, 1).unwrap();
        catalog.complete(1, 1, 75.0).unwrap();
        let err = catalog.complete(1, 1, 80.0).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn complete_transitions_exactly_one_duplicate() {
        let mut catalog = seeded_catalog();
        catalog.enroll(1, 1).unwrap();
        catalog.enroll(1, 1).unwrap();
        catalog.complete(1, 1, 70.0).unwrap();

        let completed = catalog
            .enrollments()
            .iter()
            .filter(|e| !e.is_active())
            .count();
        assert_eq!(completed, 1);
        // The pair still has one active enrollment to complete later.
        assert!(catalog.find_active_enrollment(1, 1).is_some());
    }

    #[test]
    fn referential_invariant_holds_after_mutation_sequence() {
        let mut catalog = seeded_catalog();
        catalog.enroll(1, 1).unwrap();
        catalog.enroll(2, 1).unwrap();
        catalog.enroll(2, 2).unwrap();
        catalog.complete(2, 2, 64.0).unwrap();
        catalog.remove_student("Aisha").unwrap();
        catalog
            .add_student("Charu", LearningStyle::Auditory, "History, Literature", 7)
            .unwrap();

        for e in catalog.enrollments() {
            assert!(catalog.student(e.student_id).is_some());
            assert!(catalog.course(e.course_id).is_some());
            // completion timestamp and score travel together by construction
            if let Some(completion) = &e.completion {
                assert!((0.0..=100.0).contains(&completion.score));
            }
        }
    }

    #[test]
    fn next_id_follows_current_maximum() {
        let mut catalog = seeded_catalog();
        catalog.remove_student("Bilal").unwrap();
        let id = catalog
            .add_student("Deep", LearningStyle::Visual, "Data, AI", 11)
            .unwrap();
        // max surviving id is 1, so the next id is 2
        assert_eq!(id, 2);
    }

    #[test]
    fn search_students_matches_name_and_interests() {
        let catalog = seeded_catalog();
        let by_name = catalog.search_students("aish");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Aisha");

        let by_interest = catalog.search_students("coding");
        assert_eq!(by_interest.len(), 1);
        assert_eq!(by_interest[0].name, "Bilal");

        assert!(catalog.search_students("zzz").is_empty());
    }

    #[test]
    fn search_courses_matches_name_subject_description() {
        let catalog = seeded_catalog();
        assert_eq!(catalog.search_courses("ROBOT").len(), 1);
        assert_eq!(catalog.search_courses("data").len(), 1);
        assert_eq!(catalog.search_courses("sensors").len(), 1);
        assert!(catalog.search_courses("quantum").is_empty());
    }
}
