//! 页面定位服务 - 业务能力层
//!
//! 只负责"按 URL 找到页面"能力，不关心流程

use tracing::{debug, info, warn};
use url::Url;

use crate::clients::WpClient;
use crate::error::AppResult;
use crate::models::PageRecord;

/// 页面定位服务
///
/// 职责：
/// - 从页面 URL 提取 slug 并按 slug 查询
/// - slug 未命中时退回全文搜索
/// - 只做只读查询，不产生副作用
pub struct PageLocator;

impl PageLocator {
    /// 创建新的定位服务
    pub fn new() -> Self {
        Self
    }

    /// 按 URL 查找已发布页面
    ///
    /// # 参数
    /// - `client`: WordPress 客户端
    /// - `page_url`: 页面完整 URL（必须是绝对地址）
    ///
    /// # 返回
    /// 找到返回 `Ok(Some(page))`，确认不存在返回 `Ok(None)`，
    /// 网络或解析错误返回 `Err`（由调用方决定如何对外呈现）
    pub async fn find_by_url(
        &self,
        client: &WpClient,
        page_url: &str,
    ) -> AppResult<Option<PageRecord>> {
        let parsed = match Url::parse(page_url) {
            Ok(url) => url,
            Err(e) => {
                warn!("⚠️ 页面 URL 无法解析: {} ({})", page_url, e);
                return Ok(None);
            }
        };

        // 先按 slug 精确查询
        if let Some(slug) = Self::extract_slug(&parsed) {
            debug!("🔍 按 slug 查询页面: {}", slug);
            let pages = client.list_pages_by_slug(&slug).await?;
            if let Some(page) = pages.into_iter().next() {
                info!("✓ 按 slug '{}' 找到页面: {}", slug, page.title.rendered);
                return Ok(Some(page));
            }
        }

        // slug 未命中时退回全文搜索
        debug!("🔍 按 URL 全文搜索页面: {}", page_url);
        let pages = client.search_pages(page_url).await?;
        for page in pages {
            if Self::links_match(page_url, &page.link) {
                info!("✓ 按 URL 搜索找到页面: {}", page.title.rendered);
                return Ok(Some(page));
            }
        }

        warn!("⚠️ 未找到匹配的页面: {}", page_url);
        Ok(None)
    }

    /// 取路径中最后一个非空段作为 slug 候选
    fn extract_slug(url: &Url) -> Option<String> {
        url.path_segments()?
            .filter(|segment| !segment.is_empty())
            .last()
            .map(str::to_string)
    }

    /// 双向子串匹配，容忍末尾斜杠或查询串的差异
    ///
    /// 这是有意保留的启发式判断，不要收紧为完全相等。
    fn links_match(page_url: &str, link: &str) -> bool {
        !link.is_empty() && (page_url.contains(link) || link.contains(page_url))
    }
}
