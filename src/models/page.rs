use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// WordPress 渲染字段的包装，如 `{"rendered": "<p>...</p>"}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

/// WordPress 页面记录（API 返回）
#[derive(Debug, Clone, Deserialize)]
pub struct PageRecord {
    pub id: u64,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub content: Rendered,
    #[serde(default)]
    pub excerpt: Rendered,
    #[serde(default)]
    pub parent: u64,
    #[serde(default)]
    pub template: String,
    #[serde(default)]
    pub meta: JsonValue,
    #[serde(default)]
    pub featured_media: u64,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub status: String,
}

/// 新建页面的请求体
#[derive(Debug, Clone, Serialize)]
pub struct NewPage {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub status: String,
    pub parent: u64,
    pub template: String,
    pub meta: JsonValue,
    pub featured_media: u64,
}

impl NewPage {
    /// 以草稿状态复制一个页面
    ///
    /// 标题为 `"<原标题> - <后缀>"`，正文和摘要取渲染后的内容，
    /// 其余字段原样拷贝。状态固定为 draft，保证已发布内容不被直接修改。
    pub fn draft_copy(original: &PageRecord, suffix: &str) -> Self {
        Self {
            title: format!("{} - {}", original.title.rendered, suffix),
            content: original.content.rendered.clone(),
            excerpt: original.excerpt.rendered.clone(),
            status: "draft".to_string(),
            parent: original.parent,
            template: original.template.clone(),
            meta: if original.meta.is_null() {
                JsonValue::Object(serde_json::Map::new())
            } else {
                original.meta.clone()
            },
            featured_media: original.featured_media,
        }
    }
}

/// 更新页面的请求体（局部更新）
#[derive(Debug, Clone, Serialize)]
pub struct PageUpdate {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_page() -> PageRecord {
        serde_json::from_value(json!({
            "id": 42,
            "title": { "rendered": "Landing Page" },
            "content": { "rendered": "<p>Sign Up Now</p>" },
            "excerpt": { "rendered": "摘要" },
            "parent": 7,
            "template": "full-width",
            "meta": { "color": "blue" },
            "featured_media": 99,
            "link": "https://example.com/landing-page/",
            "status": "publish"
        }))
        .expect("页面 JSON 应能解析")
    }

    #[test]
    fn test_draft_copy_builds_payload() {
        let page = sample_page();
        let payload = NewPage::draft_copy(&page, "ab-test-20250101T0900");

        assert_eq!(payload.title, "Landing Page - ab-test-20250101T0900");
        assert_eq!(payload.content, "<p>Sign Up Now</p>");
        assert_eq!(payload.excerpt, "摘要");
        // 副本必须以草稿状态创建
        assert_eq!(payload.status, "draft");
        assert_eq!(payload.parent, 7);
        assert_eq!(payload.template, "full-width");
        assert_eq!(payload.meta, json!({ "color": "blue" }));
        assert_eq!(payload.featured_media, 99);
    }

    #[test]
    fn test_draft_copy_defaults_missing_fields() {
        // API 可能只返回最少字段
        let page: PageRecord = serde_json::from_value(json!({
            "id": 1,
            "title": { "rendered": "Minimal" }
        }))
        .expect("最小页面 JSON 应能解析");

        let payload = NewPage::draft_copy(&page, "x");
        assert_eq!(payload.parent, 0);
        assert_eq!(payload.template, "");
        assert_eq!(payload.meta, json!({}));
        assert_eq!(payload.featured_media, 0);
        assert_eq!(payload.status, "draft");
    }

    #[test]
    fn test_page_update_skips_absent_title() {
        let update = PageUpdate {
            content: "<p>新内容</p>".to_string(),
            title: None,
        };
        let value = serde_json::to_value(&update).expect("应能序列化");
        assert_eq!(value, json!({ "content": "<p>新内容</p>" }));

        let update = PageUpdate {
            content: "c".to_string(),
            title: Some("t".to_string()),
        };
        let value = serde_json::to_value(&update).expect("应能序列化");
        assert_eq!(value, json!({ "content": "c", "title": "t" }));
    }
}
