//! LLM 客户端
//!
//! 使用 async-openai 提供与 OpenAI 兼容 API 的交互能力，
//! 并负责包装 AskSFU 校园助手的固定人设提示词。

use anyhow::{Context, Result};
use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};
use async_openai::Client;

/// AskSFU 人设指令：限定在 SFU 的课程、专业、社团与校园生活话题
const PERSONA_PROMPT: &str = "You are AskSFU, the AI assistant for Simon Fraser University. \
Provide helpful information about SFU-related topics including courses, programs, clubs, \
campus life, and general university information. \
Please provide a helpful and informative response about Simon Fraser University.";

/// OpenAI 客户端
#[derive(Clone)]
pub struct OpenAIClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAIClient {
    /// 创建新的 OpenAI 客户端
    pub fn new(api_key: String, model: String) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);

        Self {
            client: Client::with_config(config),
            model,
        }
    }

    /// 创建指向自定义 API 地址的客户端
    pub fn new_with_base_url(api_key: String, model: String, base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();

        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);

        Self {
            client: Client::with_config(config),
            model,
        }
    }

    /// 以 AskSFU 人设回答一个校园问题
    pub async fn ask(&self, question: &str) -> Result<String> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(PERSONA_PROMPT)
                .build()
                .map(ChatCompletionRequestMessage::System)
                .context("构建系统消息失败")?,
            ChatCompletionRequestUserMessageArgs::default()
                .content(format!("User question: {}", question))
                .build()
                .map(ChatCompletionRequestMessage::User)
                .context("构建用户消息失败")?,
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .build()
            .context("构建请求失败")?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .context("调用 LLM API 失败")?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = OpenAIClient::new_with_base_url(
            "test-key".to_string(),
            "gpt-4o-mini".to_string(),
            "https://api.openai.com/v1".to_string(),
        );

        assert_eq!(client.model, "gpt-4o-mini");
    }

    #[test]
    fn test_persona_prompt_scope() {
        assert!(PERSONA_PROMPT.contains("AskSFU"));
        assert!(PERSONA_PROMPT.contains("Simon Fraser University"));
        assert!(PERSONA_PROMPT.contains("clubs"));
    }
}
