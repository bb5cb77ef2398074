use quick_xml::de::from_str;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::debug;

use crate::auth::structs::webdav_auth::WebdavAuth;
use crate::browse::ListingError;
use crate::internal::webdav::enums::{Depth, WebDavMethod};
use crate::webdav::structs::MultiStatus;

/// 内部使用的PROPFIND请求体，等价于"请求全部属性"
const _PROPFIND_BODY: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<D:propfind xmlns:D="DAV:">
  <D:allprop/>
</D:propfind>"#;

/// 获取原始webdav文件夹数据
///
/// 客户端不跟随重定向，3xx会落进下面的状态检查并当作失败返回
pub(crate) async fn get_folder_raw_data(
    webdav_auth: &WebdavAuth,
    absolute_url: &str,
    depth: &Depth,
) -> Result<MultiStatus, ListingError> {
    // 组装请求头
    let mut headers = HeaderMap::new();
    headers
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/xml"));
    headers.insert("Depth", HeaderValue::from_static(depth.as_str()));
    headers.insert("Accept", HeaderValue::from_static("application/xml"));

    let method = WebDavMethod::PROPFIND
        .to_head_method()
        .map_err(ListingError::Protocol)?;

    let http_client = &webdav_auth.client;

    debug!(url = absolute_url, depth = depth.as_str(), "发送 PROPFIND");

    // 发送 PROPFIND 到目标地址（构造时已校验在文件树根之下）
    let res = http_client
        .request(method, absolute_url)
        .headers(headers)
        .body(_PROPFIND_BODY)
        .send()
        .await?;

    let status = res.status();

    let xml_text = res.text().await?;

    if !status.is_success() && status.as_u16() != 207 {
        return Err(ListingError::UnexpectedStatus {
            status,
            body: xml_text,
        });
    }

    let multi_status: MultiStatus = from_str(&xml_text)?;

    Ok(multi_status)
}
