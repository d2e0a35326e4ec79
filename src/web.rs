//! Web 服务器模块
//!
//! 提供三个核心 HTTP 接口（聊天转发、社团匹配、信息页摘要）
//! 以及健康检查与前端静态文件服务。

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::{error, info};

use crate::catalog::Catalog;
use crate::llm::OpenAIClient;
use crate::matcher::ClubMatcher;
use crate::scrape::PageFetcher;

/// 空输入时的固定回复，不触发 LLM 调用
const EMPTY_INPUT_FALLBACK: &str = "I didn't receive any input. Please try again.";

// ==================== 状态 ====================

pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub matcher: ClubMatcher,
    pub llm: OpenAIClient,
    pub fetcher: PageFetcher,
}

// ==================== 请求类型 ====================

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Deserialize)]
pub struct ClubCheckRequest {
    #[serde(default)]
    pub query: String,
}

// ==================== 响应类型 ====================

#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Serialize)]
pub struct ClubCheckResponse {
    #[serde(rename = "match")]
    pub matched: bool,
    pub message: String,
}

// ==================== 处理器 ====================

/// 健康检查
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// 聊天转发
///
/// 空输入返回固定回复；LLM 失败时把错误文本嵌入响应体。
/// 无论成败都返回 200，错误信息由调用方从 `response` 字段读取。
async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> impl IntoResponse {
    if req.message.is_empty() {
        return Json(ChatResponse {
            response: EMPTY_INPUT_FALLBACK.to_string(),
        });
    }

    match state.llm.ask(&req.message).await {
        Ok(answer) => Json(ChatResponse { response: answer }),
        Err(e) => {
            error!("LLM request failed: {}", e);
            Json(ChatResponse {
                response: format!("Error: {}", e),
            })
        }
    }
}

/// 学术诚信信息页摘要
async fn academic_integrity_info(
    State(state): State<Arc<AppState>>,
    Path(topic): Path<String>,
) -> impl IntoResponse {
    match state.fetcher.fetch_topic(&state.catalog, &topic).await {
        Ok(page) => Json(serde_json::json!({
            "summary": page.summary,
            "more_info": page.more_info,
        })),
        Err(e) => Json(serde_json::json!({
            "error": e.to_string(),
        })),
    }
}

/// 社团匹配查询
async fn check_club(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ClubCheckRequest>,
) -> impl IntoResponse {
    let result = state.matcher.check(&req.query);

    Json(ClubCheckResponse {
        matched: result.matched,
        message: result.message,
    })
}

// ==================== 路由 ====================

pub fn create_router(state: Arc<AppState>, static_dir: &str) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/health", get(health_check))
        .route("/chat", post(chat))
        .route("/scrape/academic-integrity/{topic}", get(academic_integrity_info))
        .route("/scrape/clubs/check", post(check_club))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .with_state(state)
}

// ==================== 服务器启动 ====================

pub async fn start_web_server(
    bind_addr: &str,
    static_dir: &str,
    state: Arc<AppState>,
) -> anyhow::Result<()> {
    let app = create_router(state, static_dir);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("Web server started on http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
