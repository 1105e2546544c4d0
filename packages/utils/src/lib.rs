pub mod error;
pub mod helpers;
pub mod indexed_set;
pub mod permissions;
