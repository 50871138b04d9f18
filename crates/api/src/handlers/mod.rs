//! Request handlers, grouped per resource.

pub mod administrative;
pub mod auth;
pub mod forms;
pub mod students;
pub mod teachers;
