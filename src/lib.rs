//! Interview Compass - Interview Competence Self-Assessment
//!
//! This crate implements a guided self-assessment of interviewing
//! competence: a fixed questionnaire over four areas, per-area and total
//! scoring, radar-chart construction, and best-effort persistence of each
//! submission to an external spreadsheet.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
