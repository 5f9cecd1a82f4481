//! The `learnpath search` command.

use std::path::PathBuf;

use anyhow::Result;
use clap::ValueEnum;
use comfy_table::{Cell, Table};

use learnpath_core::parser;

/// Which collection to search.
#[derive(Clone, Copy, ValueEnum)]
pub enum SearchTarget {
    Students,
    Courses,
}

pub fn execute(catalog_path: PathBuf, target: SearchTarget, keyword: String) -> Result<()> {
    let catalog = parser::parse_catalog(&catalog_path)?;

    match target {
        SearchTarget::Students => {
            let matches = catalog.search_students(&keyword);
            if matches.is_empty() {
                println!("No students found.");
                return Ok(());
            }
            let mut table = Table::new();
            table.set_header(vec!["ID", "Name", "Style", "Interests", "Grade"]);
            for student in matches {
                table.add_row(vec![
                    Cell::new(student.id),
                    Cell::new(&student.name),
                    Cell::new(student.style.to_string()),
                    Cell::new(&student.interests),
                    Cell::new(student.grade_level),
                ]);
            }
            println!("{table}");
        }
        SearchTarget::Courses => {
            let matches = catalog.search_courses(&keyword);
            if matches.is_empty() {
                println!("No courses found.");
                return Ok(());
            }
            let mut table = Table::new();
            table.set_header(vec!["ID", "Name", "Subject", "Difficulty", "Description"]);
            for course in matches {
                table.add_row(vec![
                    Cell::new(course.id),
                    Cell::new(&course.name),
                    Cell::new(&course.subject),
                    Cell::new(course.difficulty.to_string()),
                    Cell::new(&course.description),
                ]);
            }
            println!("{table}");
        }
    }

    Ok(())
}
