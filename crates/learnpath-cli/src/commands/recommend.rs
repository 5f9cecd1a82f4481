//! The `learnpath recommend` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};
use rand::rngs::StdRng;
use rand::SeedableRng;

use learnpath_core::parser;
use learnpath_core::recommend::recommend;
use learnpath_core::report::RecommendationReport;

pub fn execute(
    catalog_path: PathBuf,
    student_id: u32,
    top_n: usize,
    seed: Option<u64>,
    output: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(top_n >= 1, "top-n must be at least 1");

    let catalog = parser::parse_catalog(&catalog_path)?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let recommendations = recommend(&catalog, student_id, top_n, &mut rng);

    if recommendations.is_empty() {
        println!("No recommendations found for student {student_id}.");
        return Ok(());
    }

    let student_name = catalog
        .student(student_id)
        .map(|s| s.name.clone())
        .unwrap_or_default();

    let mut table = Table::new();
    table.set_header(vec!["Course ID", "Course", "Score"]);
    for rec in &recommendations {
        table.add_row(vec![
            Cell::new(rec.course_id),
            Cell::new(&rec.course_name),
            Cell::new(format!("{:.2}", rec.score)),
        ]);
    }
    println!("Recommendations for {student_name}:\n{table}");

    if let Some(path) = output {
        let report = RecommendationReport::new(student_id, student_name, top_n, recommendations);
        report.save_json(&path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}
