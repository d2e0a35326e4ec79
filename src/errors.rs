//! 标准化错误处理
//!
//! 定义项目专用的错误类型。错误文本即接口契约：
//! 信息抓取接口把错误 Display 结果原样嵌入 JSON 的 `error` 字段。

use thiserror::Error;

/// 项目主要错误类型
#[derive(Error, Debug)]
pub enum AskSfuError {
    /// 主题不在链接表中（本地校验，不发网络请求）
    #[error("Invalid academic integrity topic requested.")]
    UnknownTopic,

    /// 页面抓取失败（传输错误或非 2xx 状态码）
    #[error("Failed to fetch academic integrity details: {0}")]
    FetchFailed(String),
}

impl From<reqwest::Error> for AskSfuError {
    fn from(err: reqwest::Error) -> Self {
        AskSfuError::FetchFailed(err.to_string())
    }
}

/// 项目结果类型别名
pub type Result<T> = std::result::Result<T, AskSfuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_topic_display() {
        assert_eq!(
            AskSfuError::UnknownTopic.to_string(),
            "Invalid academic integrity topic requested."
        );
    }

    #[test]
    fn test_fetch_failed_display() {
        let err = AskSfuError::FetchFailed("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to fetch academic integrity details: connection refused"
        );
    }
}
