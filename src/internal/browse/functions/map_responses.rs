use reqwest::Url;

use crate::browse::{BrowserFile, ListingError};
use crate::internal::browse::functions::strip_base_prefix::strip_base_prefix;
use crate::remote_file::RemoteFileData;
use crate::webdav::structs::{
    CurrentUserPrivilegeSet, Prop, PropStat, Response,
};

/// 把 SELF + MEMBER 响应映射成两条按位对齐的领域记录序列
///
/// 纯转换，无副作用；SELF 在前，成员保持到达顺序。
/// 任何一条资源地址不在基准前缀之下都会整体失败（数据完整性错误，
/// 与"资源不存在"是两回事）
pub fn map_responses(
    self_response: Response,
    member_responses: Vec<Response>,
    base_url: &Url,
    base_prefix: &str,
) -> Result<(Vec<BrowserFile>, Vec<RemoteFileData>), ListingError> {
    let mut browser_files = Vec::with_capacity(member_responses.len() + 1);
    let mut remote_files = Vec::with_capacity(member_responses.len() + 1);

    for response in std::iter::once(self_response).chain(member_responses) {
        let (browser_file, remote_file) =
            map_one(response, base_url, base_prefix)?;

        browser_files.push(browser_file);
        remote_files.push(remote_file);
    }

    Ok((browser_files, remote_files))
}

/// 单条响应映射成 (BrowserFile, RemoteFileData)，两条记录出自同一属性集
fn map_one(
    response: Response,
    base_url: &Url,
    base_prefix: &str,
) -> Result<(BrowserFile, RemoteFileData), ListingError> {
    let Response { href, propstats } = response;

    let absolute_path = base_url
        .join(&href)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.clone());

    let relative_path = strip_base_prefix(&absolute_path, base_prefix)?;

    // 没有 2xx 属性集的资源也要占位，属性全部置空
    let prop = take_ok_propstat(propstats)
        .map(|ps| ps.prop)
        .unwrap_or_default();

    // 解构 Prop，move 出需要的字段
    let Prop {
        resource_type,
        content_length,
        last_modified,
        content_type: mime,
        display_name,
        owner,
        etag,
        file_id,
        permissions,
        favorite,
        size: total_size,
        is_encrypted,
        current_user_privilege_set,
        ..
    } = prop;

    // 提前计算 name（因为等下 href 要被 move 进结构体）
    let name = decode_name(display_name, &href);

    // 判断是否目录
    let is_dir = resource_type
        .as_ref()
        .and_then(|rt| rt.is_collection.as_ref())
        .is_some();

    // 文件用 getcontentlength，目录退回 oc:size
    let size = content_length.or(total_size);

    let browser_file = BrowserFile {
        path: relative_path.clone(),
        display_name: name.clone(),
        mime: mime.clone(),
        size,
        modified: last_modified,
        is_dir,
        is_favorite: favorite.as_deref() == Some("1"),
        is_encrypted: is_encrypted.as_deref() == Some("1"),
        permissions: permissions.clone(),
    };

    let remote_file = RemoteFileData {
        base_url: base_url.clone(),
        relative_path, // move
        absolute_path,
        name, // 已提前生成
        is_dir,
        size,
        last_modified, // move
        mime,          // move
        owner,         // move
        etag: clean_etag(etag),
        file_id,
        permissions,
        privileges: extract_privileges(current_user_privilege_set),
    };

    Ok((browser_file, remote_file))
}

fn take_ok_propstat(propstats: Vec<PropStat>) -> Option<PropStat> {
    // 从 propstats 中拿到第一个 HTTP 状态是 2xx 的 PropStat（直接 move 出来）
    propstats.into_iter().find(|ps| {
        ps.status
            .split_whitespace()
            .find_map(|t| t.parse::<u16>().ok())
            .map(|code| (200..=299).contains(&code))
            .unwrap_or(false)
    })
}

fn decode_name(display_name: Option<String>, href: &str) -> String {
    // 如果服务端给了 display_name 就直接用（move），否则从 href 末尾提取文件名并 URL 解码
    display_name.unwrap_or_else(|| {
        percent_encoding::percent_decode_str(
            href.trim_end_matches('/').rsplit('/').next().unwrap_or(""),
        )
        .decode_utf8_lossy()
        .to_string()
    })
}

fn extract_privileges(
    cups: Option<CurrentUserPrivilegeSet>,
) -> Vec<String> {
    // 从权限对象中提取权限标识（直接消耗数据避免 clone）
    match cups {
        Some(set) => set
            .privileges
            .into_iter()
            .flat_map(|pr| {
                let mut v = Vec::new();
                if pr.read.is_some() {
                    v.push("read".to_string());
                }
                if pr.write.is_some() {
                    v.push("write".to_string());
                }
                if pr.all.is_some() {
                    v.push("all".to_string());
                }
                if pr.read_acl.is_some() {
                    v.push("read_acl".to_string());
                }
                if pr.write_acl.is_some() {
                    v.push("write_acl".to_string());
                }
                v
            })
            .collect(),
        None => Vec::new(),
    }
}

fn clean_etag(raw: Option<String>) -> Option<String> {
    // 去掉 ETag 的首尾引号以及多余空格
    raw.map(|s| s.trim().trim_matches('"').to_string())
}
