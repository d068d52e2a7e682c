//! Catalog module - Static assessment configuration.
//!
//! The competency areas, the question bank, and the improvement feedback
//! table. All three share the same key set: `Area::ALL` in canonical order.

mod area;
mod feedback;
mod question_bank;

pub use area::Area;
pub use feedback::{feedback_for, FeedbackEntry, CONGRATULATIONS};
pub use question_bank::{QuestionBank, QUESTIONS_PER_AREA};
