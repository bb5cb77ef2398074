use crate::browse::{BrowserFile, ListingError};
use crate::remote_file::RemoteFileData;
use crate::webdav::structs::Response;

/// 单次列目录的状态
#[derive(Debug)]
pub enum ListingStatus {
    /// 列表完整
    Complete,
    /// 协议调用或映射失败，两个序列为空，原因随值携带
    Degraded(ListingError),
}

/// 单次列目录的结果信封
///
/// 不变量：browser_files 与 remote_files 等长且按位对应同一条原始响应；
/// 下标 0 为目标自身（SELF），其余为成员（MEMBER），保持到达顺序。
/// 降级时两个序列都为空，调用方应检查 status 区分"失败"与"空目录"
#[derive(Debug)]
pub struct DavListing {
    /// 文档顺序中最后一条原始响应（诊断/兼容字段）
    pub last_response: Option<Response>,
    pub browser_files: Vec<BrowserFile>,
    pub remote_files: Vec<RemoteFileData>,
    pub status: ListingStatus,
}

impl DavListing {
    pub(crate) fn complete(
        last_response: Option<Response>,
        browser_files: Vec<BrowserFile>,
        remote_files: Vec<RemoteFileData>,
    ) -> Self {
        Self {
            last_response,
            browser_files,
            remote_files,
            status: ListingStatus::Complete,
        }
    }

    /// 构造降级结果：两个序列都为空，原因写入 status
    pub(crate) fn degraded(
        last_response: Option<Response>,
        reason: ListingError,
    ) -> Self {
        Self {
            last_response,
            browser_files: Vec::new(),
            remote_files: Vec::new(),
            status: ListingStatus::Degraded(reason),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self.status, ListingStatus::Degraded(_))
    }
}
