//! 页面复制服务 - 业务能力层
//!
//! 只负责"创建草稿副本"能力，不关心流程

use chrono::Utc;
use tracing::info;

use crate::clients::WpClient;
use crate::error::AppResult;
use crate::models::{NewPage, PageRecord};

/// 页面复制服务
///
/// 副本总是以草稿状态创建，发布与否交给人工审核。
pub struct PageCloner;

impl PageCloner {
    /// 创建新的复制服务
    pub fn new() -> Self {
        Self
    }

    /// 复制一个页面为草稿
    ///
    /// # 参数
    /// - `client`: WordPress 客户端
    /// - `original`: 原始页面记录
    /// - `suffix`: 标题后缀，省略时生成分钟级时间戳后缀
    ///
    /// # 返回
    /// 返回新建的页面记录，单次尝试，不重试
    pub async fn duplicate(
        &self,
        client: &WpClient,
        original: &PageRecord,
        suffix: Option<&str>,
    ) -> AppResult<PageRecord> {
        let suffix = suffix
            .map(str::to_string)
            .unwrap_or_else(Self::default_suffix);

        info!("📄 正在创建草稿副本，后缀: {}", suffix);

        let payload = NewPage::draft_copy(original, &suffix);
        let page = client.create_page(&payload).await?;

        info!("✅ 草稿副本创建成功: {}", page.title.rendered);
        Ok(page)
    }

    /// 默认标题后缀，如 `ab-test-20250101T0930`（UTC，精确到分钟）
    pub fn default_suffix() -> String {
        format!("ab-test-{}", Utc::now().format("%Y%m%dT%H%M"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_suffix_format() {
        let suffix = PageCloner::default_suffix();

        assert!(suffix.starts_with("ab-test-"));

        // 时间戳部分形如 20250101T0930：13 个字符，无分隔符
        let timestamp = &suffix["ab-test-".len()..];
        assert_eq!(timestamp.len(), 13);
        assert!(!timestamp.contains(':'));
        assert!(!timestamp.contains('-'));
        assert_eq!(timestamp.chars().filter(|c| *c == 'T').count(), 1);
    }
}
