//! 前端内容变更的解析与分类

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::warn;

/// 页面元素类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Text,
    Headline,
    Subheadline,
    Cta,
    Description,
}

/// 一条内容变更
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentChange {
    pub element_id: String,
    pub original_text: String,
    pub modified_text: String,
    pub element_type: ElementType,
}

/// 前端保存的单条变更数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedChange {
    pub original: String,
    pub modified: String,
}

/// 根据元素 ID 推断元素类型
///
/// 按优先级依次检查关键字（大小写不敏感），第一个命中的类别生效。
pub fn classify_element(element_id: &str) -> ElementType {
    let id = element_id.to_lowercase();

    if id.contains("headline") || id.contains("h1") {
        ElementType::Headline
    } else if id.contains("subheadline")
        || ["h2", "h3", "subtitle"].iter().any(|tag| id.contains(tag))
    {
        ElementType::Subheadline
    } else if ["cta", "button", "btn", "call-to-action"]
        .iter()
        .any(|term| id.contains(term))
    {
        ElementType::Cta
    } else if ["description", "desc", "paragraph", "p"]
        .iter()
        .any(|term| id.contains(term))
    {
        ElementType::Description
    } else {
        ElementType::Text
    }
}

/// 把前端保存的变更数据解析为 ContentChange 列表
///
/// 条目顺序决定替换顺序，调用方需保证传入的顺序与前端一致。
pub fn parse_frontend_changes(saved: &[(String, SavedChange)]) -> Vec<ContentChange> {
    saved
        .iter()
        .map(|(element_id, change)| ContentChange {
            element_id: element_id.clone(),
            original_text: change.original.clone(),
            modified_text: change.modified.clone(),
            element_type: classify_element(element_id),
        })
        .collect()
}

/// 从原始 JSON 对象解析变更（前端直接传来的 savedChanges）
///
/// 非对象或无法解析的条目会被跳过并记录警告。
pub fn parse_frontend_changes_value(value: &JsonValue) -> Vec<ContentChange> {
    let Some(map) = value.as_object() else {
        warn!("⚠️ savedChanges 不是 JSON 对象，忽略: {}", value);
        return Vec::new();
    };

    map.iter()
        .filter_map(|(element_id, data)| {
            match serde_json::from_value::<SavedChange>(data.clone()) {
                Ok(change) => Some(ContentChange {
                    element_id: element_id.clone(),
                    original_text: change.original,
                    modified_text: change.modified,
                    element_type: classify_element(element_id),
                }),
                Err(e) => {
                    warn!("⚠️ 跳过无法解析的变更条目 {}: {}", element_id, e);
                    None
                }
            }
        })
        .collect()
}
