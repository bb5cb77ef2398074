use chrono::{DateTime, FixedOffset};

/// 浏览器用的轻量文件摘要，按相对路径定位
///
/// 与 [`crate::remote_file::RemoteFileData`] 出自同一条原始响应，
/// 两者按位对应但形状独立，不可互换
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserFile {
    pub path: String,         // 相对文件树根的路径（以 '/' 开头）
    pub display_name: String, // 友好化的文件或目录名
    pub mime: Option<String>,
    pub size: Option<u64>,
    pub modified: Option<DateTime<FixedOffset>>,
    pub is_dir: bool,
    pub is_favorite: bool,           // oc:favorite == "1"
    pub is_encrypted: bool,          // nc:is-encrypted == "1"
    pub permissions: Option<String>, // oc:permissions 原样字符串
}
