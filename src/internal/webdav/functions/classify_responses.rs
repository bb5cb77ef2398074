use percent_encoding::percent_decode_str;
use tracing::{debug, warn};
use url::Url;

use crate::internal::webdav::enums::{Depth, HrefRelation};
use crate::webdav::structs::{MultiStatus, Response};

/// 分类后的响应集合：SELF 单槽 + 按到达顺序的 MEMBER 列表
///
/// 协议正常时 self_response 有且仅有一个，映射前必须先校验它存在
#[derive(Debug, Clone)]
pub struct ClassifiedResponses {
    /// 请求目标本身的响应
    pub self_response: Option<Response>,
    /// 直接子资源的响应，保持文档顺序
    pub members: Vec<Response>,
    /// 文档顺序中最后一条原始响应（诊断用，含被丢弃的条目）
    pub last_response: Option<Response>,
}

/// 按 href 与请求目标的关系对 multi-status 的响应分桶
///
/// OTHER 直接丢弃；重复的 SELF 只保留第一个
pub fn classify_responses(
    multi_status: MultiStatus,
    request_url: &Url,
    depth: &Depth,
) -> ClassifiedResponses {
    let last_response = multi_status.responses.last().cloned();

    let mut self_response: Option<Response> = None;
    let mut members = Vec::new();

    for response in multi_status.responses {
        match classify_href(request_url, &response.href, depth) {
            HrefRelation::SelfResource => {
                if self_response.is_none() {
                    self_response = Some(response);
                } else {
                    warn!(href = %response.href, "出现重复的 SELF 条目，保留第一个");
                }
            }
            HrefRelation::Member => members.push(response),
            HrefRelation::Other => {
                debug!(href = %response.href, "丢弃无关条目");
            }
        }
    }

    ClassifiedResponses {
        self_response,
        members,
        last_response,
    }
}

/// 判断单个 href 相对请求目标的归属
///
/// href 可以是绝对 URL 也可以是绝对路径，统一解析到请求 URL 上再比较；
/// 跨源条目一律视为无关
pub fn classify_href(
    request_url: &Url,
    href: &str,
    depth: &Depth,
) -> HrefRelation {
    let resolved = match request_url.join(href) {
        Ok(url) => url,
        Err(_) => return HrefRelation::Other,
    };

    if resolved.scheme() != request_url.scheme()
        || resolved.host_str() != request_url.host_str()
        || resolved.port_or_known_default()
            != request_url.port_or_known_default()
    {
        return HrefRelation::Other;
    }

    let target = normalize_path(request_url.path());
    let candidate = normalize_path(resolved.path());

    if candidate == target {
        return HrefRelation::SelfResource;
    }

    match depth {
        // 深度0时除目标自身外全部无关
        Depth::Zero => HrefRelation::Other,
        Depth::One => {
            if is_direct_child(&candidate, &target) {
                HrefRelation::Member
            } else {
                HrefRelation::Other
            }
        }
    }
}

/// 比较前做归一化：去掉末尾斜杠并解码百分号编码
fn normalize_path(path: &str) -> String {
    let trimmed = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };

    percent_decode_str(trimmed).decode_utf8_lossy().to_string()
}

/// candidate 恰好比 target 深一层时才算直接子资源
fn is_direct_child(candidate: &str, target: &str) -> bool {
    let rest = if target == "/" {
        candidate.strip_prefix('/')
    } else {
        candidate
            .strip_prefix(target)
            .and_then(|r| r.strip_prefix('/'))
    };

    match rest {
        Some(r) => !r.is_empty() && !r.contains('/'),
        None => false,
    }
}
