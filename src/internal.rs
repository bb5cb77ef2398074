pub mod auth;
pub mod browse;
pub mod entrance;
pub mod remote_file;
pub mod webdav;
