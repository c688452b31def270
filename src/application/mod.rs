pub mod add_qa;
pub mod ask;
pub mod list_questions;
