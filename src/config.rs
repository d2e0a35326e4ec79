//! 应用配置
//!
//! 所有配置项均可通过命令行参数或环境变量提供。

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "AskSFU campus Q&A backend")]
pub struct AppConfig {
    /// 服务监听地址
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:5001")]
    pub bind_addr: String,

    // LLM 配置
    #[arg(long, env = "OPENAI_API_KEY")]
    pub openai_api_key: String,

    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-4o-mini")]
    pub openai_model: String,

    /// OpenAI 兼容 API 地址（可选，用于接入代理或其他供应商）
    #[arg(long, env = "OPENAI_BASE_URL")]
    pub openai_base_url: Option<String>,

    // 抓取配置
    /// 页面抓取超时（秒）
    #[arg(long, env = "FETCH_TIMEOUT_SECS", default_value_t = 30)]
    pub fetch_timeout_secs: u64,

    // 前端静态文件
    /// 前端静态文件目录
    #[arg(long, env = "STATIC_DIR", default_value = "./static")]
    pub static_dir: String,
}

impl AppConfig {
    /// 验证配置的有效性
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.openai_api_key.is_empty() {
            anyhow::bail!("OPENAI_API_KEY is required");
        }

        if self.fetch_timeout_secs == 0 {
            anyhow::bail!("FETCH_TIMEOUT_SECS must be greater than zero");
        }

        Ok(())
    }
}
