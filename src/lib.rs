//! AskSFU 校园问答后端
//!
//! 提供三类相互独立的请求处理能力：
//! - 聊天转发：把用户问题包进固定人设提示词后交给 LLM 生成回答
//! - 社团匹配：关键词提取 + 扩展表 + 模糊回退，在静态社团名单中检索
//! - 信息摘要：按主题抓取信息页并抽取段落文本
//!
//! 所有静态表（社团名单、关键词扩展表、主题链接表）在启动时构建一次，
//! 只读注入各处理器；单次请求内不保留任何跨请求状态。

// 静态数据
pub mod catalog;

// 配置与基础设施
pub mod config;
pub mod errors;
pub mod logger;

// 核心能力
pub mod llm;
pub mod matcher;
pub mod scrape;

// HTTP 接口
pub mod web;

// 重新导出常用类型
pub use catalog::Catalog;
pub use config::AppConfig;
pub use errors::{AskSfuError, Result};
pub use llm::OpenAIClient;
pub use matcher::{ClubMatch, ClubMatcher};
pub use scrape::{PageFetcher, PageSummary};
pub use web::{create_router, start_web_server, AppState};

/// 版本号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
