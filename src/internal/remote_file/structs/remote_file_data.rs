use chrono::{DateTime, FixedOffset};
use url::Url;

/// 远程文件的完整元数据记录
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteFileData {
    pub base_url: Url,
    pub relative_path: String, // 相对文件树根的路径（剥离基准前缀得到）
    pub absolute_path: String, // 文件的完整地址（从 href 解析得到）
    pub name: String,          // 友好化的文件或目录名
    pub is_dir: bool,          // 是否目录
    pub size: Option<u64>,     // 大小（字节），目录取 oc:size
    pub last_modified: Option<DateTime<FixedOffset>>, // 原始时间
    pub mime: Option<String>,  // MIME 类型
    pub owner: Option<String>, // 所有者
    pub etag: Option<String>,  // 清理后的 ETag
    pub file_id: Option<String>, // 服务端全局文件ID
    pub permissions: Option<String>, // oc:permissions 权限字符串
    pub privileges: Vec<String>, // DAV 权限列表
}
