//! 列目录相关错误类型。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("HTTP 请求失败: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Multi-Status 响应解析失败: {0}")]
    Decode(#[from] quick_xml::DeError),

    /// 非 207 的应答，包括从不跟随的 3xx 重定向。
    #[error("状态解析异常 {status}: {body}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    /// 协议调用成功但响应中没有目标资源本身的条目，与"空目录"是两回事。
    #[error("响应中缺少目标资源条目")]
    MissingSelf,

    /// 资源地址不在基准前缀之下，说明服务端被代理重定向或基准URL配置不一致。
    #[error("资源地址 {address} 不在基准前缀 {base} 之下")]
    PrefixMismatch { address: String, base: String },

    #[error("路径格式错误: {0}")]
    InvalidPath(String),

    #[error("URL 解析失败: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("认证头构造失败: {0}")]
    InvalidAuthHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("内部协议错误: {0}")]
    Protocol(String),
}
