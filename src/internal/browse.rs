//! 浏览领域模块：一次 PROPFIND 列目录的执行与响应映射。
//!
//! 使用方式：`ReadFolderOperation::new(&auth, path, depth)?.read_remote_path().await`
//! 对外导出以 [`crate::browse`] 为准，此处仅做模块划分，不重复 pub use。

pub mod functions;
pub mod structs;
