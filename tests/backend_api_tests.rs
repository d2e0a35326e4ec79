//! AskSFU 后端API集成测试

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use asksfu::catalog::Catalog;
use asksfu::llm::OpenAIClient;
use asksfu::matcher::ClubMatcher;
use asksfu::scrape::PageFetcher;
use asksfu::web::{create_router, AppState};

// 创建测试用的app状态
//
// LLM 指向本机不可达端口：聊天接口只要没有真正发起调用就不会失败。
fn create_test_app_state() -> Arc<AppState> {
    let catalog = Arc::new(Catalog::builtin());
    let matcher = ClubMatcher::new(catalog.clone()).unwrap();
    let llm = OpenAIClient::new_with_base_url(
        "test-key".to_string(),
        "gpt-4o-mini".to_string(),
        "http://127.0.0.1:9".to_string(),
    );
    let fetcher = PageFetcher::new(Duration::from_secs(2)).unwrap();

    Arc::new(AppState {
        catalog,
        matcher,
        llm,
        fetcher,
    })
}

// 在随机端口上启动测试服务器
async fn spawn_test_server() -> SocketAddr {
    let state = create_test_app_state();
    let app = create_router(state, "./static");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // 等待服务器启动
    tokio::time::sleep(Duration::from_millis(100)).await;

    addr
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let addr = spawn_test_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{}/api/health", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);

    let json_value: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json_value["status"], "ok");
}

#[tokio::test]
async fn test_chat_empty_message_returns_fallback() {
    let addr = spawn_test_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{}/chat", addr))
        .json(&serde_json::json!({ "message": "" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);

    let json_value: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        json_value["response"],
        "I didn't receive any input. Please try again."
    );
}

#[tokio::test]
async fn test_chat_missing_field_returns_fallback() {
    let addr = spawn_test_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{}/chat", addr))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);

    let json_value: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        json_value["response"],
        "I didn't receive any input. Please try again."
    );
}

#[tokio::test]
async fn test_chat_llm_failure_embedded_in_response() {
    let addr = spawn_test_server().await;
    let client = reqwest::Client::new();

    // LLM 不可达，错误信息以 200 状态嵌入响应体
    let response = client
        .post(format!("http://{}/chat", addr))
        .json(&serde_json::json!({ "message": "What programs does SFU offer?" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);

    let json_value: serde_json::Value = response.json().await.unwrap();
    let text = json_value["response"].as_str().unwrap();
    assert!(text.starts_with("Error:"));
}

#[tokio::test]
async fn test_club_check_direct_match() {
    let addr = spawn_test_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{}/scrape/clubs/check", addr))
        .json(&serde_json::json!({ "query": "debate" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);

    let json_value: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json_value["match"], true);
    assert!(json_value["message"]
        .as_str()
        .unwrap()
        .contains("Debate Society"));
}

#[tokio::test]
async fn test_club_check_no_match() {
    let addr = spawn_test_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{}/scrape/clubs/check", addr))
        .json(&serde_json::json!({ "query": "xyzzy" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);

    let json_value: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json_value["match"], false);
    assert!(json_value["message"]
        .as_str()
        .unwrap()
        .starts_with("❌ No exact match for 'xyzzy'"));
}

#[tokio::test]
async fn test_club_check_lists_at_most_three_clubs() {
    let addr = spawn_test_server().await;
    let client = reqwest::Client::new();

    // "students" 命中大量社团，回复中最多列 3 个
    let response = client
        .post(format!("http://{}/scrape/clubs/check", addr))
        .json(&serde_json::json!({ "query": "students" }))
        .send()
        .await
        .unwrap();

    let json_value: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json_value["match"], true);

    let listed = json_value["message"]
        .as_str()
        .unwrap()
        .lines()
        .filter(|line| line.starts_with("- "))
        .count();
    assert!(listed <= 3);
    assert!(listed >= 1);
}

#[tokio::test]
async fn test_academic_integrity_unknown_topic() {
    let addr = spawn_test_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!(
            "http://{}/scrape/academic-integrity/nonexistent",
            addr
        ))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);

    let json_value: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        json_value["error"],
        "Invalid academic integrity topic requested."
    );
}
