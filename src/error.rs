use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// WordPress API 调用错误
    Api(ApiError),
    /// 发布流程错误
    Ship(ShipError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Api(e) => write!(f, "API错误: {}", e),
            AppError::Ship(e) => write!(f, "发布错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Api(e) => Some(e),
            AppError::Ship(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// WordPress API 调用错误
#[derive(Debug)]
pub enum ApiError {
    /// 网络请求失败
    RequestFailed {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// API 返回了非成功状态码
    BadStatus { endpoint: String, status: u16 },
    /// JSON 解析失败
    JsonParseFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::RequestFailed { endpoint, source } => {
                write!(f, "API请求失败 ({}): {}", endpoint, source)
            }
            ApiError::BadStatus { endpoint, status } => {
                write!(f, "API返回异常状态码 ({}): {}", endpoint, status)
            }
            ApiError::JsonParseFailed { source } => {
                write!(f, "JSON解析失败: {}", source)
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::RequestFailed { source, .. } | ApiError::JsonParseFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            ApiError::BadStatus { .. } => None,
        }
    }
}

/// 发布流程错误
///
/// 每个变体对应发布流程中一个步骤的失败。Display 输出的英文消息
/// 是对前端的既定契约，不要改动文案。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShipError {
    /// 未找到原始页面
    PageNotFound { url: String },
    /// 创建草稿副本失败
    DuplicationFailed,
    /// 写回草稿内容失败
    UpdateFailed,
    /// 未预期的错误（兜底）
    Unexpected { message: String },
}

impl ShipError {
    /// 返回错误种类标签（序列化结果中的 error_kind 字段）
    pub fn kind(&self) -> &'static str {
        match self {
            ShipError::PageNotFound { .. } => "page_not_found",
            ShipError::DuplicationFailed => "duplication_failed",
            ShipError::UpdateFailed => "update_failed",
            ShipError::Unexpected { .. } => "unexpected_error",
        }
    }
}

impl fmt::Display for ShipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipError::PageNotFound { url } => {
                write!(f, "Original page not found for URL: {}", url)
            }
            ShipError::DuplicationFailed => write!(f, "Failed to create duplicate page"),
            ShipError::UpdateFailed => write!(f, "Failed to update duplicate page content"),
            ShipError::Unexpected { message } => write!(f, "Unexpected error: {}", message),
        }
    }
}

impl std::error::Error for ShipError {}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Api(ApiError::RequestFailed {
            endpoint: String::new(), // reqwest 错误信息中已包含 URL
            source: Box::new(err),
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Api(ApiError::JsonParseFailed {
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建API请求失败错误
    pub fn api_request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Api(ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        })
    }

    /// 创建API状态码错误
    pub fn api_bad_status(endpoint: impl Into<String>, status: u16) -> Self {
        AppError::Api(ApiError::BadStatus {
            endpoint: endpoint.into(),
            status,
        })
    }

    /// 创建JSON解析失败错误
    pub fn json_parse_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::Api(ApiError::JsonParseFailed {
            source: Box::new(source),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
