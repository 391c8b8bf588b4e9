/// 程序配置
///
/// WordPress 站点地址与应用密码（WP 后台 > 用户 > 应用程序密码 生成）
#[derive(Clone, Debug)]
pub struct Config {
    /// 站点地址（构造时去掉末尾斜杠）
    pub site_url: String,
    /// WordPress 用户名
    pub username: String,
    /// 应用程序密码
    pub password: String,
    /// REST API 基础路径
    pub api_base: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 演示运行的目标页面 URL（未配置则跳过演示）
    pub demo_page_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_url: "https://your-wordpress-site.com".to_string(),
            username: "your-username".to_string(),
            password: "your-application-password".to_string(),
            api_base: "wp-json/wp/v2".to_string(),
            verbose_logging: false,
            demo_page_url: None,
        }
    }
}

impl Config {
    /// 创建配置
    ///
    /// # 参数
    /// - `site_url`: 站点地址，末尾斜杠会被去掉
    /// - `username`: WordPress 用户名
    /// - `password`: 应用程序密码
    pub fn new(
        site_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            site_url: site_url.into().trim_end_matches('/').to_string(),
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            site_url: std::env::var("WP_SITE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(default.site_url),
            username: std::env::var("WP_USERNAME").unwrap_or(default.username),
            password: std::env::var("WP_APP_PASSWORD").unwrap_or(default.password),
            api_base: default.api_base,
            verbose_logging: std::env::var("VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.verbose_logging),
            demo_page_url: std::env::var("WP_DEMO_PAGE_URL").ok(),
        }
    }

    /// REST API 完整地址，如 `https://site.com/wp-json/wp/v2`
    pub fn api_url(&self) -> String {
        format!("{}/{}", self.site_url, self.api_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_trailing_slash() {
        let config = Config::new("https://example.com/", "admin", "pass");
        assert_eq!(config.site_url, "https://example.com");

        // 没有斜杠时保持原样
        let config = Config::new("https://example.com", "admin", "pass");
        assert_eq!(config.site_url, "https://example.com");
    }

    #[test]
    fn test_api_url() {
        let config = Config::new("https://example.com/", "admin", "pass");
        assert_eq!(config.api_url(), "https://example.com/wp-json/wp/v2");
    }
}
