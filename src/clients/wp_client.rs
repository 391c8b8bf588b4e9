/// WordPress REST API 客户端
///
/// 封装所有与 WordPress REST API 相关的调用逻辑，
/// 每个请求都附带 HTTP Basic 认证（应用程序密码）。
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{NewPage, PageRecord, PageUpdate};

/// WordPress API 客户端
pub struct WpClient {
    client: Client,
    api_url: String,
    username: String,
    password: String,
}

impl WpClient {
    /// 创建新的 WordPress 客户端
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_url: config.api_url(),
            username: config.username.clone(),
            password: config.password.clone(),
        }
    }

    /// 按 slug 查询已发布页面
    ///
    /// # 参数
    /// - `slug`: 页面 slug（URL 路径最后一段）
    ///
    /// # 返回
    /// 返回匹配的页面列表（可能为空）
    pub async fn list_pages_by_slug(&self, slug: &str) -> AppResult<Vec<PageRecord>> {
        let endpoint = format!("{}/pages", self.api_url);
        debug!("按 slug 查询页面: {}", slug);

        let response = self
            .client
            .get(&endpoint)
            .basic_auth(&self.username, Some(&self.password))
            .query(&[("slug", slug), ("status", "publish")])
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(&endpoint, e))?;

        Self::parse_json(&endpoint, response).await
    }

    /// 全文搜索已发布页面
    ///
    /// # 参数
    /// - `term`: 搜索词（通常是完整的页面 URL）
    pub async fn search_pages(&self, term: &str) -> AppResult<Vec<PageRecord>> {
        let endpoint = format!("{}/pages", self.api_url);
        debug!("全文搜索页面: {}", term);

        let response = self
            .client
            .get(&endpoint)
            .basic_auth(&self.username, Some(&self.password))
            .query(&[("search", term), ("status", "publish")])
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(&endpoint, e))?;

        Self::parse_json(&endpoint, response).await
    }

    /// 创建页面
    pub async fn create_page(&self, payload: &NewPage) -> AppResult<PageRecord> {
        let endpoint = format!("{}/pages", self.api_url);
        debug!("创建页面: {}", payload.title);

        let response = self
            .client
            .post(&endpoint)
            .basic_auth(&self.username, Some(&self.password))
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(&endpoint, e))?;

        Self::parse_json(&endpoint, response).await
    }

    /// 更新页面（局部更新，WordPress 对更新同样接受 POST）
    ///
    /// # 参数
    /// - `page_id`: 页面 ID
    /// - `payload`: 更新内容
    pub async fn update_page(&self, page_id: u64, payload: &PageUpdate) -> AppResult<PageRecord> {
        let endpoint = format!("{}/pages/{}", self.api_url, page_id);
        debug!("更新页面: {}", page_id);

        let response = self
            .client
            .post(&endpoint)
            .basic_auth(&self.username, Some(&self.password))
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(&endpoint, e))?;

        Self::parse_json(&endpoint, response).await
    }

    /// 连通性探测
    ///
    /// 只读请求一条页面记录，返回 API 是否可达。
    /// 失败原因只记录日志，不向调用方传播。
    pub async fn test_connection(&self) -> bool {
        let endpoint = format!("{}/pages", self.api_url);
        debug!("连通性探测: {}?per_page=1", endpoint);

        match self
            .client
            .get(&endpoint)
            .basic_auth(&self.username, Some(&self.password))
            .query(&[("per_page", "1")])
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                warn!("⚠️ WordPress API 返回异常状态码: {}", response.status());
                false
            }
            Err(e) => {
                warn!("⚠️ 无法访问 WordPress API: {}", e);
                false
            }
        }
    }

    /// 检查状态码并解析响应体
    async fn parse_json<T: serde::de::DeserializeOwned>(
        endpoint: &str,
        response: reqwest::Response,
    ) -> AppResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::api_bad_status(endpoint, status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(AppError::json_parse_failed)
    }
}
