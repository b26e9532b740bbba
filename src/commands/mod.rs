pub mod completions;
pub mod info;
pub mod init;
pub mod locate;
