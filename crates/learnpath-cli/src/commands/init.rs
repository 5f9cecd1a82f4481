//! The `learnpath init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("catalog.toml").exists() {
        println!("catalog.toml already exists, skipping.");
    } else {
        std::fs::write("catalog.toml", STARTER_CATALOG)?;
        println!("Created catalog.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: learnpath validate --catalog catalog.toml");
    println!("  2. Run: learnpath dashboard --catalog catalog.toml");
    println!("  3. Run: learnpath recommend --catalog catalog.toml --student 1");

    Ok(())
}

const STARTER_CATALOG: &str = r#"# learnpath starter catalog

[[students]]
id = 1
name = "Aisha"
style = "Visual"
interests = "Math, Data"
grade_level = 6

[[students]]
id = 2
name = "Bilal"
style = "Kinesthetic"
interests = "Robotics, Coding"
grade_level = 8

[[students]]
id = 3
name = "Charu"
style = "Auditory"
interests = "History, Literature"
grade_level = 7

[[students]]
id = 4
name = "Deep"
style = "Visual"
interests = "Data, AI"
grade_level = 11

[[students]]
id = 5
name = "Esha"
style = "Reading"
interests = "Art, Design"
grade_level = 9

[[students]]
id = 6
name = "Ira"
style = "Reading"
interests = "Math, Physics"
grade_level = 12

[[courses]]
id = 1
name = "Intro to Python"
subject = "Coding"
difficulty = "Beginner"
description = "Hands-on Python programming for beginners"

[[courses]]
id = 2
name = "Data Science Basics"
subject = "Data"
difficulty = "Beginner"
description = "Introductory data skills: spreadsheets, basic plots, stats"

[[courses]]
id = 3
name = "Fundamentals of AI"
subject = "AI"
difficulty = "Intermediate"
description = "Machine learning concepts and simple models"

[[courses]]
id = 4
name = "Creative Design"
subject = "Design"
difficulty = "Beginner"
description = "Visual design basics: color, typography, layout"

[[courses]]
id = 5
name = "Robotics 101"
subject = "Robotics"
difficulty = "Intermediate"
description = "Build and program simple robots and sensors"

[[courses]]
id = 6
name = "World History"
subject = "History"
difficulty = "Beginner"
description = "A journey through major world events"

[[courses]]
id = 7
name = "Mathematics Olympiad Prep"
subject = "Math"
difficulty = "Advanced"
description = "Advanced problem solving for math competitions"

[[courses]]
id = 8
name = "Public Speaking"
subject = "Communication"
difficulty = "Beginner"
description = "Communication skills, presentations, debate"

[[enrollments]]
student_id = 1
course_id = 2
started_at = "2024-02-10T00:00:00Z"

[enrollments.completion]
completed_at = "2024-03-18T00:00:00Z"
score = 88.5

[[enrollments]]
student_id = 1
course_id = 1
started_at = "2024-04-02T00:00:00Z"

[[enrollments]]
student_id = 2
course_id = 5
started_at = "2024-01-15T00:00:00Z"

[enrollments.completion]
completed_at = "2024-02-20T00:00:00Z"
score = 91.0

[[enrollments]]
student_id = 3
course_id = 6
started_at = "2024-05-01T00:00:00Z"

[[enrollments]]
student_id = 4
course_id = 3
started_at = "2024-03-12T00:00:00Z"

[enrollments.completion]
completed_at = "2024-04-25T00:00:00Z"
score = 76.5

[[enrollments]]
student_id = 5
course_id = 4
started_at = "2024-02-28T00:00:00Z"

[enrollments.completion]
completed_at = "2024-04-05T00:00:00Z"
score = 84.0

[[enrollments]]
student_id = 6
course_id = 7
started_at = "2024-06-01T00:00:00Z"
"#;
