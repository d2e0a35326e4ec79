//! 社团匹配
//!
//! 对用户的自由文本查询做三段式匹配：
//! 1. 关键词直接子串匹配社团名
//! 2. 关键词扩展表匹配
//! 3. 前两步无结果时回退模糊匹配（编辑距离相似度，阈值 0.6）
//!
//! 结果集按首次命中顺序去重，保证输出可复现。

use std::sync::Arc;

use anyhow::{Context, Result};
use regex::Regex;

use crate::catalog::{Catalog, CLUB_LIST_URL};

/// 模糊匹配相似度阈值
const FUZZY_CUTOFF: f64 = 0.6;
/// 每个关键词保留的模糊匹配数量上限
const FUZZY_PER_KEYWORD: usize = 3;
/// 回复中展示的社团数量上限
const MAX_SHOWN: usize = 3;

/// 匹配结果
#[derive(Debug, Clone)]
pub struct ClubMatch {
    /// 是否命中任何社团
    pub matched: bool,
    /// 命中的社团（首次命中顺序，已去重，未截断）
    pub clubs: Vec<String>,
    /// 面向用户的回复文本（最多列出 3 个社团）
    pub message: String,
}

/// 社团匹配器
pub struct ClubMatcher {
    catalog: Arc<Catalog>,
    punctuation: Regex,
}

impl ClubMatcher {
    /// 创建匹配器（预编译标点过滤正则）
    pub fn new(catalog: Arc<Catalog>) -> Result<Self> {
        let punctuation = Regex::new(r"[^a-z0-9\s]").context("编译标点过滤正则失败")?;

        Ok(Self { catalog, punctuation })
    }

    /// 从查询中提取关键词
    ///
    /// 小写化、去标点、按空白切分、去停用词。顺序与重复均保留。
    pub fn extract_keywords(&self, query: &str) -> Vec<String> {
        let lowered = query.to_lowercase();
        let cleaned = self.punctuation.replace_all(&lowered, "");

        cleaned
            .split_whitespace()
            .filter(|word| !self.catalog.stopwords.contains(word))
            .map(|word| word.to_string())
            .collect()
    }

    /// 按查询匹配社团并生成回复
    pub fn check(&self, query: &str) -> ClubMatch {
        let clubs = self.find_clubs(query);

        if clubs.is_empty() {
            return ClubMatch {
                matched: false,
                clubs,
                message: format!(
                    "❌ No exact match for '{}', but you can check all clubs here: [SFU Club List]({})",
                    query, CLUB_LIST_URL
                ),
            };
        }

        let shown = clubs
            .iter()
            .take(MAX_SHOWN)
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join("\n- ");
        let message = format!(
            "✅ Here are some clubs related to **'{}'** at SFU:\n- {}\n\nFor more clubs, visit: [SFU Club List]({})",
            query, shown, CLUB_LIST_URL
        );

        ClubMatch {
            matched: true,
            clubs,
            message,
        }
    }

    /// 三段式匹配，返回首次命中顺序的去重社团列表
    pub fn find_clubs(&self, query: &str) -> Vec<String> {
        let keywords = self.extract_keywords(query);
        let mut matched: Vec<String> = Vec::new();

        // 第一段：关键词直接子串匹配
        for keyword in &keywords {
            for club in &self.catalog.clubs {
                if club.to_lowercase().contains(keyword.as_str()) {
                    push_unique(&mut matched, club);
                }
            }
        }

        // 第二段：关键词扩展表匹配
        for keyword in &keywords {
            if let Some(related_terms) = self.catalog.keyword_map.get(keyword.as_str()) {
                for related in related_terms {
                    for club in &self.catalog.clubs {
                        if club.to_lowercase().contains(*related) {
                            push_unique(&mut matched, club);
                        }
                    }
                }
            }
        }

        // 第三段：仅在前两段无结果时做模糊回退
        if matched.is_empty() {
            for keyword in &keywords {
                for club in self.close_matches(keyword) {
                    push_unique(&mut matched, club);
                }
            }
        }

        matched
    }

    /// 对单个关键词取相似度最高的社团（至多 3 个，阈值 0.6）
    fn close_matches(&self, keyword: &str) -> Vec<&'static str> {
        let mut scored: Vec<(&'static str, f64)> = self
            .catalog
            .clubs
            .iter()
            .filter_map(|club| {
                let score = similarity(keyword, &club.to_lowercase());
                (score >= FUZZY_CUTOFF).then_some((*club, score))
            })
            .collect();

        // 相似度降序，同分保持名单顺序
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored
            .into_iter()
            .take(FUZZY_PER_KEYWORD)
            .map(|(club, _)| club)
            .collect()
    }
}

fn push_unique(matched: &mut Vec<String>, club: &str) {
    if !matched.iter().any(|c| c == club) {
        matched.push(club.to_string());
    }
}

/// 计算相似度（编辑距离比值）
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let distance = levenshtein_distance(a, b);
    let max_len = a.chars().count().max(b.chars().count());

    1.0 - (distance as f64 / max_len as f64)
}

/// 计算编辑距离
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut matrix = vec![vec![0; b_len + 1]; a_len + 1];

    for i in 0..=a_len {
        matrix[i][0] = i;
    }
    for j in 0..=b_len {
        matrix[0][j] = j;
    }

    for i in 1..=a_len {
        for j in 1..=b_len {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[a_len][b_len]
}
