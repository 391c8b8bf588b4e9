//! 发布流程 - 流程层
//!
//! 核心职责：定义一次 A/B 测试变体发布的完整流程
//!
//! 流程顺序：
//! 1. 定位原始页面
//! 2. 创建草稿副本
//! 3. 在原始内容上应用文本替换
//! 4. 把替换后的内容写回草稿副本

use chrono::Utc;
use tracing::{debug, error, info};

use crate::clients::WpClient;
use crate::config::Config;
use crate::error::ShipError;
use crate::models::{ContentChange, PageUpdate, ShipResult};
use crate::services::{ContentPatcher, PageCloner, PageLocator};

/// 发布流程
///
/// - 编排完整的发布流程
/// - 不持有任何网络资源，客户端由调用方传入
/// - 只依赖业务能力（services）
pub struct ShipFlow {
    locator: PageLocator,
    cloner: PageCloner,
    patcher: ContentPatcher,
    site_url: String,
    verbose_logging: bool,
}

impl ShipFlow {
    /// 创建新的发布流程
    pub fn new(config: &Config) -> Self {
        Self {
            locator: PageLocator::new(),
            cloner: PageCloner::new(),
            patcher: ContentPatcher::new(),
            site_url: config.site_url.clone(),
            verbose_logging: config.verbose_logging,
        }
    }

    /// 发布一组内容变更，生成 A/B 测试用的草稿副本
    ///
    /// # 参数
    /// - `client`: WordPress 客户端
    /// - `page_url`: 原始页面 URL
    /// - `changes`: 按顺序应用的内容变更
    /// - `test_name`: 测试名（可选），会作为副本标题后缀
    ///
    /// # 返回
    /// 总是返回结构化结果，任何一步失败都短路为对应的失败结果，
    /// 已创建的草稿不做回滚。
    pub async fn ship(
        &self,
        client: &WpClient,
        page_url: &str,
        changes: &[ContentChange],
        test_name: Option<&str>,
    ) -> ShipResult {
        info!("🚀 开始发布 A/B 测试变体: {}", page_url);

        // ========== 步骤 1: 定位原始页面 ==========
        let original = match self.locator.find_by_url(client, page_url).await {
            Ok(Some(page)) => page,
            Ok(None) => {
                return ShipResult::failure(ShipError::PageNotFound {
                    url: page_url.to_string(),
                });
            }
            Err(e) => {
                // 对外结果不区分网络错误和页面不存在
                error!("❌ 定位页面时发生错误: {}", e);
                return ShipResult::failure(ShipError::PageNotFound {
                    url: page_url.to_string(),
                });
            }
        };

        // ========== 步骤 2: 创建草稿副本 ==========
        let suffix = test_name
            .map(str::to_string)
            .unwrap_or_else(Self::default_test_suffix);

        let duplicate = match self.cloner.duplicate(client, &original, Some(&suffix)).await {
            Ok(page) => page,
            Err(e) => {
                error!("❌ 创建草稿副本失败: {}", e);
                return ShipResult::failure(ShipError::DuplicationFailed);
            }
        };

        // ========== 步骤 3: 在原始内容上应用替换 ==========
        // 此时副本内容与原文相同，替换基于原始页面的渲染内容进行
        if self.verbose_logging {
            self.log_changes(changes);
        }
        let modified_content = self.patcher.apply(&original.content.rendered, changes);

        // ========== 步骤 4: 写回草稿副本 ==========
        info!("📤 正在写回草稿内容 (页面 {})...", duplicate.id);
        let update = PageUpdate {
            content: modified_content,
            title: None,
        };
        let updated = match client.update_page(duplicate.id, &update).await {
            Ok(page) => page,
            Err(e) => {
                error!("❌ 写回草稿内容失败: {}", e);
                return ShipResult::failure(ShipError::UpdateFailed);
            }
        };

        // ========== 步骤 5: 汇总结果 ==========
        info!("🎉 发布完成: {} (草稿 {})", updated.title.rendered, updated.id);
        ShipResult::success(&self.site_url, &original, &updated, changes.len(), suffix)
    }

    /// 默认测试名，如 `AB-Test-20250101T09`（UTC，精确到小时）
    ///
    /// 与 PageCloner 的分钟级默认后缀是并存的两套命名，不要合并。
    fn default_test_suffix() -> String {
        format!("AB-Test-{}", Utc::now().format("%Y%m%dT%H"))
    }

    /// 显示变更明细
    fn log_changes(&self, changes: &[ContentChange]) {
        for (i, change) in changes.iter().enumerate() {
            debug!(
                "  {}. [{:?}] {} : '{}' → '{}'",
                i + 1,
                change.element_type,
                change.element_id,
                change.original_text,
                change.modified_text
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_test_suffix_format() {
        let suffix = ShipFlow::default_test_suffix();

        assert!(suffix.starts_with("AB-Test-"));

        // 时间戳部分形如 20250101T09：11 个字符，精确到小时
        let timestamp = &suffix["AB-Test-".len()..];
        assert_eq!(timestamp.len(), 11);
        assert!(!timestamp.contains(':'));
        assert!(!timestamp.contains('-'));
    }

    #[test]
    fn test_two_default_suffixes_differ() {
        // 复制服务与发布流程各有一套默认后缀格式，粒度不同
        let cloner_suffix = crate::services::PageCloner::default_suffix();
        let flow_suffix = ShipFlow::default_test_suffix();

        assert!(cloner_suffix.starts_with("ab-test-"));
        assert!(flow_suffix.starts_with("AB-Test-"));
        assert!(cloner_suffix.len() > flow_suffix.len());
    }
}
