//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod administrative_document_repo;
pub mod meeting_minute_repo;
pub mod student_document_repo;
pub mod student_repo;
pub mod teacher_repo;
pub mod user_repo;

pub use administrative_document_repo::AdministrativeDocumentRepo;
pub use meeting_minute_repo::MeetingMinuteRepo;
pub use student_document_repo::StudentDocumentRepo;
pub use student_repo::StudentRepo;
pub use teacher_repo::TeacherRepo;
pub use user_repo::UserRepo;
