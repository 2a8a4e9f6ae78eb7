//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod account_repo;
pub mod application_repo;
pub mod company_repo;
pub mod drive_repo;
pub mod session_repo;
pub mod student_repo;

pub use account_repo::AccountRepo;
pub use application_repo::ApplicationRepo;
pub use company_repo::CompanyRepo;
pub use drive_repo::DriveRepo;
pub use session_repo::SessionRepo;
pub use student_repo::StudentRepo;
