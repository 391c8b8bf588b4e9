use anyhow::Result;
use tracing::{error, info, warn};

use crate::clients::WpClient;
use crate::config::Config;
use crate::models::{parse_frontend_changes, ContentChange, SavedChange};
use crate::workflow::ShipFlow;

/// 应用主结构
pub struct App {
    config: Config,
    client: WpClient,
    flow: ShipFlow,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        log_startup(&config);

        let client = WpClient::new(&config);
        let flow = ShipFlow::new(&config);

        Self {
            config,
            client,
            flow,
        }
    }

    /// 运行应用主逻辑
    ///
    /// 先做连通性探测；只有配置了演示页面时才执行一次演示发布，
    /// 避免误操作线上站点。
    pub async fn run(&self) -> Result<()> {
        // 连通性探测
        info!("🔗 正在检测 WordPress API 连通性...");
        if !self.client.test_connection().await {
            warn!("⚠️ 无法连接到 WordPress API: {}", self.config.api_url());
            warn!("💡 请检查 WP_SITE_URL / WP_USERNAME / WP_APP_PASSWORD 配置");
            return Ok(());
        }
        info!("✅ WordPress API 连接正常: {}", self.config.api_url());

        // 演示发布（手动触发）
        let Some(page_url) = self.config.demo_page_url.clone() else {
            info!("💡 未配置 WP_DEMO_PAGE_URL，跳过演示发布");
            info!("💡 作为库使用时，调用 ShipFlow::ship() 发布 A/B 测试变体");
            return Ok(());
        };

        let changes = sample_changes();
        info!("🚚 开始演示发布，共 {} 条变更", changes.len());

        let result = self
            .flow
            .ship(
                &self.client,
                &page_url,
                &changes,
                Some("Homepage-Optimization-Test"),
            )
            .await;

        if result.success {
            info!("🎉 演示发布成功");
        } else {
            error!(
                "❌ 演示发布失败: {}",
                result.error.as_deref().unwrap_or("unknown")
            );
        }
        info!("{}", serde_json::to_string_pretty(&result)?);

        Ok(())
    }
}

/// 记录程序启动信息
fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 WordPress A/B 测试页面复制工具");
    info!("🌐 站点: {}", config.site_url);
    info!("{}", "=".repeat(60));
}

/// 演示用的示例变更（结构与前端 savedChanges 一致）
fn sample_changes() -> Vec<ContentChange> {
    let saved = vec![
        (
            "headline-1".to_string(),
            SavedChange {
                original: "Original Headline Text".to_string(),
                modified: "AI-Optimized Headline Text".to_string(),
            },
        ),
        (
            "cta-button-1".to_string(),
            SavedChange {
                original: "Sign Up Now".to_string(),
                modified: "Get Started Today".to_string(),
            },
        ),
        (
            "description-1".to_string(),
            SavedChange {
                original: "Original description text here".to_string(),
                modified: "Improved description with better conversion copy".to_string(),
            },
        ),
    ];

    parse_frontend_changes(&saved)
}
