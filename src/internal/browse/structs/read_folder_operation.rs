use tracing::warn;
use url::Url;

use crate::auth::structs::webdav_auth::WebdavAuth;
use crate::browse::{DavListing, ListingError};
use crate::internal::browse::functions::map_responses::map_responses;
use crate::internal::webdav::enums::Depth;
use crate::internal::webdav::functions::classify_responses::classify_responses;
use crate::internal::webdav::functions::get_folder_raw_data::get_folder_raw_data;

/// 单次列目录操作：目标 URL 与深度在构造时绑定，认证客户端随 auth 复用
///
/// 同一个实例可以反复调用，每次调用都是一轮独立的网络往返；
/// 实例内不做任何并发，多个实例跨线程并发调用也不需要协调
#[derive(Debug, Clone)]
pub struct ReadFolderOperation {
    webdav_auth: WebdavAuth,
    url: Url,
    depth: Depth,
}

impl ReadFolderOperation {
    /// 绑定目标路径与深度
    ///
    /// relative_path是基于auth中files_root的相对路径，允许以"/"开头；
    /// 逃出文件树根的路径在这里直接拒绝
    pub fn new(
        webdav_auth: &WebdavAuth,
        relative_path: &str,
        depth: Depth,
    ) -> Result<Self, ListingError> {
        let url = format_target_url(webdav_auth, relative_path)?;

        Ok(Self {
            webdav_auth: webdav_auth.clone(),
            url,
            depth,
        })
    }

    /// 目标的绝对 URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// 读取远程路径，返回结果信封
    ///
    /// 传输失败、协议解析失败、缺少 SELF、前缀不匹配都在这里就地吸收成
    /// 降级信封并打一条诊断日志，不向调用方抛错
    pub async fn read_remote_path(&self) -> DavListing {
        let multi_status = match get_folder_raw_data(
            &self.webdav_auth,
            self.url.as_str(),
            &self.depth,
        )
        .await
        {
            Ok(multi_status) => multi_status,
            Err(e) => {
                warn!(url = %self.url, error = %e, "读取远程路径失败");
                return DavListing::degraded(None, e);
            }
        };

        let classified =
            classify_responses(multi_status, &self.url, &self.depth);
        let last_response = classified.last_response;

        // 协议调用成功但没有 SELF 条目时不进入映射，按降级处理
        let self_response = match classified.self_response {
            Some(response) => response,
            None => {
                warn!(url = %self.url, "响应中缺少目标资源条目");
                return DavListing::degraded(
                    last_response,
                    ListingError::MissingSelf,
                );
            }
        };

        match map_responses(
            self_response,
            classified.members,
            &self.webdav_auth.files_root,
            self.webdav_auth.base_prefix(),
        ) {
            Ok((browser_files, remote_files)) => {
                DavListing::complete(last_response, browser_files, remote_files)
            }
            Err(e) => {
                warn!(url = %self.url, error = %e, "响应映射失败");
                DavListing::degraded(last_response, e)
            }
        }
    }
}

/// 把相对路径解析成基于 files_root 的绝对 URL，并校验没有逃出文件树根
fn format_target_url(
    webdav_auth: &WebdavAuth,
    relative_path: &str,
) -> Result<Url, ListingError> {
    let files_root = &webdav_auth.files_root;

    let joined = files_root
        .join(relative_path.trim_start_matches('/'))
        .map_err(|_| ListingError::InvalidPath(relative_path.to_string()))?;

    if joined.scheme() != files_root.scheme()
        || joined.host_str() != files_root.host_str()
        || !joined.path().starts_with(files_root.path())
    {
        return Err(ListingError::InvalidPath(relative_path.to_string()));
    }

    Ok(joined)
}
