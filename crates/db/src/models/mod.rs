//! Entity model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - An update DTO where the entity supports updates

pub mod administrative_document;
pub mod meeting_minute;
pub mod student;
pub mod student_document;
pub mod teacher;
pub mod user;
