pub mod expand;
pub mod init;
pub mod states;
