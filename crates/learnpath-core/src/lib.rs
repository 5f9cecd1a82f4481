//! learnpath-core — Catalog store, metrics, and recommendation scoring.
//!
//! This crate defines the fundamental data model, the in-memory catalog of
//! students, courses, and enrollments, and the heuristic scoring that ranks
//! courses for a student.

pub mod catalog;
pub mod error;
pub mod metrics;
pub mod model;
pub mod parser;
pub mod recommend;
pub mod report;
