pub mod analyze;
pub mod grade;
pub mod init;
pub mod validate;
