use reqwest::Method;

pub enum WebDavMethod {
    PROPFIND,
}

impl WebDavMethod {
    pub fn to_string(&self) -> String {
        match self {
            WebDavMethod::PROPFIND => "PROPFIND".to_string(),
        }
    }

    pub fn to_head_method(&self) -> Result<Method, String> {
        let method =
            reqwest::Method::from_bytes(self.to_string().as_bytes())
                .map_err(|e| e.to_string())?;

        match self {
            WebDavMethod::PROPFIND => Ok(method),
        }
    }
}

/// 单次请求的遍历深度，不提供更深的递归
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// 仅返回当前资源
    Zero,
    /// 返回当前资源及直接子资源
    One,
}

impl Depth {
    pub fn as_str(&self) -> &'static str {
        match self {
            Depth::Zero => "0",
            Depth::One => "1",
        }
    }
}

/// 单条response相对请求目标的归属关系
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HrefRelation {
    /// 请求目标本身
    SelfResource,
    /// 目标的直接子资源
    Member,
    /// 其他资源（祖先、跨源、更深层级等），直接丢弃
    Other,
}
