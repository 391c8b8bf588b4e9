//! 内容替换服务 - 业务能力层
//!
//! 只负责"对 HTML 字符串应用文本替换"能力，纯字符串操作，不访问网络

use regex::{NoExpand, RegexBuilder};
use tracing::{debug, info, warn};

use crate::models::ContentChange;

/// 内容替换服务
///
/// 职责：
/// - 按列表顺序逐条应用替换，后面的替换作用在前面替换过的内容上
/// - 原文按字面匹配（正则元字符转义），大小写不敏感，只替换第一处
/// - 未命中的替换静默跳过，整体操作永不失败
pub struct ContentPatcher;

impl ContentPatcher {
    /// 创建新的替换服务
    pub fn new() -> Self {
        Self
    }

    /// 对内容应用一组变更
    ///
    /// # 参数
    /// - `content`: 原始 HTML 内容
    /// - `changes`: 按顺序应用的变更列表
    ///
    /// # 返回
    /// 返回替换后的内容。替换是累积的，顺序不同结果可能不同。
    pub fn apply(&self, content: &str, changes: &[ContentChange]) -> String {
        let mut modified = content.to_string();

        for change in changes {
            // 转义元字符，保证按字面匹配
            let escaped = regex::escape(&change.original_text);
            let pattern = match RegexBuilder::new(&escaped).case_insensitive(true).build() {
                Ok(re) => re,
                Err(e) => {
                    warn!(
                        "⚠️ 元素 {} 的替换模式构建失败，跳过: {}",
                        change.element_id, e
                    );
                    continue;
                }
            };

            if pattern.is_match(&modified) {
                modified = pattern
                    .replace(&modified, NoExpand(&change.modified_text))
                    .into_owned();
                info!(
                    "✅ 应用变更: '{}' → '{}'",
                    preview(&change.original_text, 50),
                    preview(&change.modified_text, 50)
                );
            } else {
                debug!(
                    "未找到匹配文本，跳过: '{}'",
                    preview(&change.original_text, 50)
                );
            }
        }

        modified
    }
}

/// 截断长文本用于日志显示
fn preview(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ElementType;

    fn change(original: &str, modified: &str) -> ContentChange {
        ContentChange {
            element_id: "test-element".to_string(),
            original_text: original.to_string(),
            modified_text: modified.to_string(),
            element_type: ElementType::Text,
        }
    }

    #[test]
    fn test_replaces_single_occurrence_exactly() {
        let patcher = ContentPatcher::new();
        let content = "<p>Sign Up Now</p><p>keep this</p>";

        let result = patcher.apply(content, &[change("Sign Up Now", "Get Started Today")]);

        assert_eq!(result, "<p>Get Started Today</p><p>keep this</p>");
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let patcher = ContentPatcher::new();
        let content = "<h1>SIGN UP NOW</h1>";

        let result = patcher.apply(content, &[change("sign up now", "Get Started")]);

        assert_eq!(result, "<h1>Get Started</h1>");
    }

    #[test]
    fn test_only_first_occurrence_is_replaced() {
        let patcher = ContentPatcher::new();
        let content = "Buy now. Buy later.";

        let result = patcher.apply(content, &[change("Buy", "Sell")]);

        assert_eq!(result, "Sell now. Buy later.");
    }

    #[test]
    fn test_absent_pattern_is_noop() {
        let patcher = ContentPatcher::new();
        let content = "<p>nothing to see</p>";

        let result = patcher.apply(content, &[change("missing text", "whatever")]);

        assert_eq!(result, content);
    }

    #[test]
    fn test_metacharacters_match_literally() {
        let patcher = ContentPatcher::new();

        // 字面含有 a.b*c 的内容会被替换
        let result = patcher.apply("price: a.b*c here", &[change("a.b*c", "X")]);
        assert_eq!(result, "price: X here");

        // 未转义的正则才会匹配的内容不受影响
        let result = patcher.apply("price: axbyyc here", &[change("a.b*c", "X")]);
        assert_eq!(result, "price: axbyyc here");
    }

    #[test]
    fn test_replacement_text_is_literal() {
        let patcher = ContentPatcher::new();

        // 替换文本中的 $ 不能被当作捕获组引用
        let result = patcher.apply("old price", &[change("old", "$100 & up")]);
        assert_eq!(result, "$100 & up price");
    }

    #[test]
    fn test_changes_apply_in_order_cumulatively() {
        let patcher = ContentPatcher::new();
        let a = change("Hello", "Big Sale");
        let b = change("Sale", "Event");

        // A 的结果中引入了 B 的原文，先 A 后 B 时 B 会命中
        let result = patcher.apply("Hello world", &[a.clone(), b.clone()]);
        assert_eq!(result, "Big Event world");

        // 先 B 后 A 时 B 落空，结果不同：替换顺序是有语义的
        let result = patcher.apply("Hello world", &[b, a]);
        assert_eq!(result, "Big Sale world");
    }

    #[test]
    fn test_rest_of_content_is_untouched() {
        let patcher = ContentPatcher::new();
        let content = "<div class=\"hero\">\n  <h1>Títle</h1>\n  <p>Sign Up Now</p>\n</div>";

        let result = patcher.apply(content, &[change("Sign Up Now", "Go")]);

        assert_eq!(
            result,
            "<div class=\"hero\">\n  <h1>Títle</h1>\n  <p>Go</p>\n</div>"
        );
    }
}
