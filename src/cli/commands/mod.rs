pub mod init;
pub mod patterns;
pub mod translate;
