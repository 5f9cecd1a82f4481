//! The `learnpath catalog` command: mutations against a catalog seed file.
//!
//! Loads the seed, applies one mutation, and reports the outcome. The
//! mutated catalog is written back only with `--write`; not-found outcomes
//! are reported without failing the process, so scripted callers can tell
//! "nothing matched" (exit 0) apart from malformed input (exit 1).

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

use learnpath_core::catalog::Catalog;
use learnpath_core::model::Difficulty;
use learnpath_core::parser;

/// A single mutation against the catalog.
#[derive(Subcommand)]
pub enum CatalogAction {
    /// Register a new student
    AddStudent {
        #[arg(long)]
        name: String,

        /// Learning style (Visual/Kinesthetic/Auditory/Reading, default Visual)
        #[arg(long, default_value = "")]
        style: String,

        /// Comma-separated interest tags
        #[arg(long, default_value = "")]
        interests: String,

        /// Grade level
        #[arg(long, default_value = "10")]
        grade: u32,
    },

    /// Remove students by name (case-insensitive), cascading their enrollments
    RemoveStudent {
        #[arg(long)]
        name: String,
    },

    /// Add a course
    AddCourse {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        subject: String,

        /// Difficulty (Beginner/Intermediate/Advanced, default Beginner)
        #[arg(long, default_value = "")]
        difficulty: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Enroll a student into a course
    Enroll {
        #[arg(long)]
        student: u32,

        #[arg(long)]
        course: u32,
    },

    /// Mark the active enrollment for a (student, course) pair completed
    Complete {
        #[arg(long)]
        student: u32,

        #[arg(long)]
        course: u32,

        /// Score in 0-100
        #[arg(long)]
        score: f64,
    },
}

pub fn execute(catalog_path: PathBuf, write: bool, action: CatalogAction) -> Result<()> {
    let mut catalog = parser::parse_catalog(&catalog_path)?;

    let changed = apply(&mut catalog, action)?;

    if changed && write {
        parser::save_catalog(&catalog, &catalog_path)?;
        println!("Catalog written to {}.", catalog_path.display());
    } else if changed {
        println!("(dry run; pass --write to save the change)");
    }

    Ok(())
}

/// Applies the mutation, printing the outcome. Returns whether the catalog
/// changed.
fn apply(catalog: &mut Catalog, action: CatalogAction) -> Result<bool> {
    match action {
        CatalogAction::AddStudent {
            name,
            style,
            interests,
            grade,
        } => {
            let id = catalog.add_student(&name, style.as_str().into(), &interests, grade)?;
            println!("Student added with id {id}.");
            Ok(true)
        }
        CatalogAction::RemoveStudent { name } => match catalog.remove_student(&name) {
            Ok(count) => {
                println!("Removed {count} student(s) named '{name}' and their enrollments.");
                Ok(true)
            }
            Err(e) if e.is_not_found() => {
                println!("{e}. Nothing changed.");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        },
        CatalogAction::AddCourse {
            name,
            subject,
            difficulty,
            description,
        } => {
            let difficulty: Difficulty = difficulty
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?;
            let id = catalog.add_course(&name, &subject, difficulty, &description);
            println!("Course added with id {id}.");
            Ok(true)
        }
        CatalogAction::Enroll { student, course } => match catalog.enroll(student, course) {
            Ok(()) => {
                println!("Enrolled student {student} in course {course}.");
                Ok(true)
            }
            Err(e) if e.is_not_found() => {
                println!("{e}. Nothing changed.");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        },
        CatalogAction::Complete {
            student,
            course,
            score,
        } => match catalog.complete(student, course, score) {
            Ok(()) => {
                println!("Marked course {course} completed for student {student} (score {score}).");
                Ok(true)
            }
            Err(e) if e.is_not_found() => {
                println!("{e}. Nothing changed.");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        },
    }
}
