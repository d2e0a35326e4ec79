//! 信息页抓取
//!
//! 按主题查链接表，抓取页面并抽取段落文本生成摘要。
//! 段落过滤与截断是启发式：跳过导航类短文本，摘要最长 1500 字符。

use std::time::Duration;

use anyhow::Context;
use scraper::{Html, Selector};
use tracing::debug;

use crate::catalog::Catalog;
use crate::errors::{AskSfuError, Result};

/// 段落最短长度（更短的视为导航/模板碎片）
const MIN_PARAGRAPH_LEN: usize = 50;
/// 摘要最大字符数
const MAX_SUMMARY_LEN: usize = 1500;

/// 抓取结果
#[derive(Debug, Clone)]
pub struct PageSummary {
    /// 截断后的段落摘要
    pub summary: String,
    /// 来源页面 URL
    pub more_info: String,
}

/// 页面抓取器
#[derive(Clone)]
pub struct PageFetcher {
    http: reqwest::Client,
}

impl PageFetcher {
    /// 创建抓取器（带请求超时，避免无限挂起）
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("创建 HTTP 客户端失败")?;

        Ok(Self { http })
    }

    /// 按主题抓取信息页并生成摘要
    ///
    /// 未知主题直接返回错误，不发任何网络请求。
    pub async fn fetch_topic(&self, catalog: &Catalog, topic: &str) -> Result<PageSummary> {
        let url = catalog.topic_url(topic).ok_or(AskSfuError::UnknownTopic)?;

        let response = self.http.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;

        let summary = extract_paragraphs(&body);
        debug!(topic, url, chars = summary.chars().count(), "page summarized");

        Ok(PageSummary {
            summary,
            more_info: url.to_string(),
        })
    }
}

/// 从 HTML 中抽取段落摘要
///
/// 取所有 `<p>` 元素文本，丢弃不超过 50 字符的段落，
/// 以换行连接后截断到前 1500 字符。
pub fn extract_paragraphs(html: &str) -> String {
    let document = Html::parse_document(html);
    let paragraph = Selector::parse("p").expect("静态选择器必然合法");

    let joined = document
        .select(&paragraph)
        .map(|p| p.text().collect::<String>())
        .filter(|text| text.chars().count() > MIN_PARAGRAPH_LEN)
        .collect::<Vec<_>>()
        .join("\n");

    joined.chars().take(MAX_SUMMARY_LEN).collect()
}
