//! # WP Page Duplicator
//!
//! WordPress A/B 测试页面复制与内容替换工具
//!
//! 通过 WordPress REST API 完成一次发布：
//! 1. 按 URL 定位已发布页面
//! 2. 以草稿状态创建页面副本
//! 3. 对原始内容应用一组文本替换
//! 4. 把替换后的内容写回草稿，返回编辑链接供人工审核
//!
//! ## 架构设计
//!
//! 本系统采用三层架构：
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 封装 WordPress REST API 的原始调用
//! - `WpClient` - 持有 HTTP 客户端与认证信息，只暴露端点能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单一能力
//! - `PageLocator` - 按 URL 定位页面
//! - `PageCloner` - 创建草稿副本
//! - `ContentPatcher` - 按顺序应用文本替换
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义一次发布的完整流程
//! - `ShipFlow` - 流程编排（定位 → 复制 → 替换 → 写回）
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::WpClient;
pub use config::Config;
pub use error::{ApiError, AppError, AppResult, ShipError};
pub use models::{
    parse_frontend_changes, parse_frontend_changes_value, ContentChange, ElementType, PageRecord,
    ShipResult,
};
pub use services::{ContentPatcher, PageCloner, PageLocator};
pub use workflow::ShipFlow;
