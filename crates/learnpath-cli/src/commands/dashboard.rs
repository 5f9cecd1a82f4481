//! The `learnpath dashboard` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use learnpath_core::metrics::{compute_metrics, popular_courses, top_students};
use learnpath_core::parser;

pub fn execute(catalog_path: PathBuf) -> Result<()> {
    let catalog = parser::parse_catalog(&catalog_path)?;
    let metrics = compute_metrics(&catalog);

    let mut kpis = Table::new();
    kpis.set_header(vec!["Metric", "Value"]);
    kpis.add_row(vec![
        Cell::new("Total Students"),
        Cell::new(metrics.total_students),
    ]);
    kpis.add_row(vec![
        Cell::new("Total Courses"),
        Cell::new(metrics.total_courses),
    ]);
    kpis.add_row(vec![
        Cell::new("Active Enrollments"),
        Cell::new(metrics.active_enrollments),
    ]);
    kpis.add_row(vec![
        Cell::new("Avg Completion %"),
        Cell::new(format!("{:.1}%", metrics.avg_completion_rate)),
    ]);
    println!("{kpis}");

    let popular = popular_courses(&catalog, 7);
    if !popular.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Course", "Enrollments"]);
        for entry in &popular {
            table.add_row(vec![
                Cell::new(&entry.course_name),
                Cell::new(entry.enrollments),
            ]);
        }
        println!("\nPopular Courses:\n{table}");
    }

    let top = top_students(&catalog, 6);
    if !top.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Student", "Avg Score"]);
        for entry in &top {
            table.add_row(vec![
                Cell::new(&entry.student_name),
                Cell::new(format!("{:.1}", entry.avg_score)),
            ]);
        }
        println!("\nTop Performing Students:\n{table}");
    }

    Ok(())
}
