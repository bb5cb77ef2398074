use core::fmt;
use std::sync::Arc;

use base64::Engine;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
    redirect,
};
use sha2::{Digest, Sha256};
use url::Url;

use crate::browse::ListingError;

/// 用户文件树在服务器上的固定根路径，拼在服务器根 URL 与用户ID之间
const FILES_API: &str = "remote.php/dav/files/";

/// 认证结构体
///
/// 该结构体定位
/// - 用于存储基础WebDav认证信息与当前用户的文件树根地址
/// - 用于browse列目录操作的网络访问功能支持
///
/// 认证头在创建时绑定进客户端，同一个实例发出的所有请求复用同一个认证器；
/// 客户端不跟随任何重定向（含TLS升级类），3xx会原样落到调用方的状态检查里
///
/// 默认Eq时会匹配base_url和token，如果需要单独比较token，需使用eq_only_token方法
#[derive(Clone)]
pub struct WebdavAuth {
    pub client: Client,       // 内部是Arc，不需要特殊处理
    pub base_url: Arc<Url>,   // 服务器根地址；Arc避免深拷贝，跨线程共享也安全
    pub files_root: Arc<Url>, // 当前用户的文件树根地址（含末尾斜杠）
    pub user_id: u64,         // 服务端分配的数字用户标识
    pub(crate) encrypted_token: Arc<String>, // 对外导出时，不允许直接访问，哪怕它是被加密的
}

impl WebdavAuth {
    /// 创建新的认证结构体
    ///
    /// user_id用于拼接文件树根地址：`{base_url}remote.php/dav/files/{user_id}/`
    pub fn new(
        username: &str,
        token: &str,
        base_url: &str,
        user_id: u64,
    ) -> Result<Self, ListingError> {
        let http_client = _InternalHttpClient::_create(username, token)?;

        let base_url = _format_base_url(base_url)?;

        let files_root = base_url.join(&format!("{FILES_API}{user_id}/"))?;

        Ok(Self {
            client: http_client.client,
            base_url: Arc::new(base_url),
            files_root: Arc::new(files_root),
            user_id,
            encrypted_token: Arc::new(http_client.encrypted_token),
        })
    }

    /// 文件树根地址的字符串形式（不含末尾斜杠），即所有资源地址的公共前缀
    pub fn base_prefix(&self) -> &str {
        self.files_root.as_str().trim_end_matches('/')
    }

    /// 仅比较token是否相等
    pub fn eq_only_token(&self, other: &Self) -> bool {
        self.encrypted_token == other.encrypted_token
    }
}

/// 用于比较认证结构体是否相等
impl PartialEq for WebdavAuth {
    fn eq(&self, other: &Self) -> bool {
        self.encrypted_token == other.encrypted_token
            && self.base_url == other.base_url
    }
}

/// 防止debug泄漏账号
impl fmt::Debug for WebdavAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebdavAuth")
            .field("client", &"<Client with hidden authorization>")
            .field("files_root", &self.files_root.as_str())
            .finish()
    }
}

fn _format_base_url(url: &str) -> Result<Url, ListingError> {
    if url.is_empty() {
        return Err(ListingError::InvalidPath("路径为空".to_string()));
    }

    let mut base_url = Url::parse(url)?;

    if !base_url.path().ends_with('/') {
        let new_path = format!("{}/", base_url.path());
        base_url.set_path(&new_path);
    }

    Ok(base_url)
}

/// 内部临时使用的http客户端结构体，在初始化WebdavAuth时使用
struct _InternalHttpClient {
    client: Client,
    encrypted_token: String,
}

impl _InternalHttpClient {
    fn _encrypt_str(data: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data.as_bytes());
        format!("{:x}", hasher.finalize())
    }
    /// 创建http客户端，内部使用
    fn _create(username: &str, token: &str) -> Result<Self, ListingError> {
        let mut headers = HeaderMap::new();

        let credentials = base64::engine::general_purpose::STANDARD
            .encode(format!("{username}:{token}"));

        let auth_value =
            HeaderValue::from_str(&format!("Basic {}", credentials))?;

        headers.insert(AUTHORIZATION, auth_value);

        let http_client = Client::builder()
            .http1_only()
            .redirect(redirect::Policy::none())
            .default_headers(headers)
            .build()?;

        let encrypted_token = Self::_encrypt_str(&credentials);

        Ok(Self { client: http_client, encrypted_token })
    }
}
