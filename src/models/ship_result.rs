//! 发布流程的结构化结果

use serde::Serialize;

use crate::error::ShipError;
use crate::models::page::PageRecord;

/// 原始页面摘要
#[derive(Debug, Clone, Serialize)]
pub struct PageSummary {
    pub id: u64,
    pub title: String,
    pub url: String,
}

/// 草稿副本摘要（含后台编辑链接）
#[derive(Debug, Clone, Serialize)]
pub struct DuplicateSummary {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub edit_url: String,
}

/// 一次发布流程的结果
///
/// 无论成功失败都返回这个结构，调用方通过 `success` 字段判断，
/// 不需要处理异常。失败时 `error_kind` 给出可区分的错误种类。
#[derive(Debug, Clone, Serialize)]
pub struct ShipResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_page: Option<PageSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate_page: Option<DuplicateSummary>,
    pub changes_applied: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_name: Option<String>,
}

impl ShipResult {
    /// 构造失败结果
    pub fn failure(error: ShipError) -> Self {
        Self {
            success: false,
            error_kind: Some(error.kind()),
            error: Some(error.to_string()),
            original_page: None,
            duplicate_page: None,
            changes_applied: 0,
            test_name: None,
        }
    }

    /// 构造成功结果
    ///
    /// # 参数
    /// - `site_url`: 站点地址（用于拼接后台编辑链接）
    /// - `original`: 原始页面记录
    /// - `updated`: 写回内容后的草稿副本记录
    /// - `changes_applied`: 应用的变更数量
    /// - `test_name`: 本次使用的测试名（即标题后缀）
    pub fn success(
        site_url: &str,
        original: &PageRecord,
        updated: &PageRecord,
        changes_applied: usize,
        test_name: String,
    ) -> Self {
        Self {
            success: true,
            error_kind: None,
            error: None,
            original_page: Some(PageSummary {
                id: original.id,
                title: original.title.rendered.clone(),
                url: original.link.clone(),
            }),
            duplicate_page: Some(DuplicateSummary {
                id: updated.id,
                title: updated.title.rendered.clone(),
                url: updated.link.clone(),
                edit_url: format!(
                    "{}/wp-admin/post.php?post={}&action=edit",
                    site_url, updated.id
                ),
            }),
            changes_applied,
            test_name: Some(test_name),
        }
    }
}
