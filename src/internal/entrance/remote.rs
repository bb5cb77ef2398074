use futures_util::future::join_all;
use tracing::warn;

use crate::auth::structs::webdav_auth::WebdavAuth;
use crate::browse::{DavListing, ReadFolderOperation};
use crate::internal::webdav::enums::Depth;

/// 读取远程路径的一层列表，并转换成两组按位对齐的领域结构体模型
///
/// 不会做递归处理，所以需要递归请自行处理
///
/// - 注意1：relative_path是基于webdav_auth中files_root的，允许以"/"开头
/// - 注意2：失败不抛错，调用方通过结果信封的 status 区分"失败"与"空目录"
///
/// example:
/// ```
/// use webdav_browse::auth::WebdavAuth;
/// use webdav_browse::read_remote_path;
/// use webdav_browse::webdav::enums::Depth;
///
/// let auth = WebdavAuth::new(
///     "alice",
///     "app-token",
///     "https://cloud.example.com/",
///     42,
/// ).unwrap();
///
/// let listing = read_remote_path(&auth, "/Photos", Depth::One).await;
/// for file in &listing.remote_files {
///     println!("remote_file: {:?}", file);
/// }
/// ```
pub async fn read_remote_path(
    webdav_auth: &WebdavAuth,
    relative_path: &str,
    depth: Depth,
) -> DavListing {
    match ReadFolderOperation::new(webdav_auth, relative_path, depth) {
        Ok(operation) => operation.read_remote_path().await,
        Err(e) => {
            warn!(path = relative_path, error = %e, "目标路径非法");
            DavListing::degraded(None, e)
        }
    }
}

/// 并发读取多个远程路径的一层列表
///
/// 每个路径一轮独立的网络往返，互相不共享状态；结果顺序与入参一致
pub async fn read_remote_paths(
    webdav_auth: &WebdavAuth,
    relative_paths: &[&str],
    depth: Depth,
) -> Vec<DavListing> {
    let tasks = relative_paths
        .iter()
        .map(|path| read_remote_path(webdav_auth, path, depth));

    // 并发获取全部的列表
    join_all(tasks).await
}
