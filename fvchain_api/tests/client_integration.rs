use std::time::Duration;

use fvchain_api::clock::FixedClock;
use fvchain_api::types::HealthStatus;
use fvchain_api::{Client, ClientConfig};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

async fn mount_network_info(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/network/info"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("network_info.json")))
        .mount(server)
        .await;
}

#[tokio::test]
async fn get_network_info_success() {
    let mock_server = MockServer::start().await;
    mount_network_info(&mock_server).await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let info = client.get_network_info().await.unwrap();
    assert_eq!(info.latest_block_height, 152340);
    assert_eq!(info.active_nodes, 7);
    assert_eq!(info.network_id, "fvchain-mainnet");
    assert_eq!(info.chain_id, "FVChain");

    assert_eq!(client.get_current_block_height().await.unwrap(), 152340);
}

#[tokio::test]
async fn default_headers_are_sent() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/network/info"))
        .and(header("content-type", "application/json"))
        .and(header("x-api-key", "k1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new(&mock_server.uri()).with_header("X-Api-Key", "k1");
    let client = Client::with_config(config).unwrap();
    let info = client.get_network_info().await.unwrap();
    assert_eq!(info.latest_block_height, 0);
    assert_eq!(info.chain_id, "");
}

#[tokio::test]
async fn get_latest_blocks_caps_limit_at_100() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/blocks/latest"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("blocks_latest.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let blocks = client.get_latest_blocks(500).await.unwrap();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0]["height"], 152340);
}

#[tokio::test]
async fn get_latest_blocks_keeps_small_limit() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/blocks/latest"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 0})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let blocks = client.get_latest_blocks(5).await.unwrap();
    assert!(blocks.is_empty());
}

#[tokio::test]
async fn get_latest_transactions_caps_limit_at_200() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/transactions"))
        .and(query_param("limit", "200"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("transactions.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let txs = client.get_latest_transactions(201).await.unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0]["amount"], 12.5);
}

#[tokio::test]
async fn passthrough_endpoints_return_raw_json() {
    let mock_server = MockServer::start().await;
    let cases = [
        ("/network/nodes", json!({"nodes": [{"id": "n1"}]})),
        ("/blocks/42", json!({"height": 42, "nonce": 7})),
        ("/transactions/0xabc", json!({"hash": "0xabc"})),
        ("/mining/detection/stats", json!({"detected_miners": 3})),
        ("/admin/rate-limit/stats", json!({"blocked_ips": 0})),
    ];
    for (p, body) in &cases {
        Mock::given(method("GET"))
            .and(path(*p))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&mock_server)
            .await;
    }

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    assert_eq!(client.get_network_nodes().await.unwrap(), cases[0].1);
    assert_eq!(client.get_block_by_height(42).await.unwrap(), cases[1].1);
    assert_eq!(client.get_transaction_by_hash("0xabc").await.unwrap(), cases[2].1);
    assert_eq!(client.get_mining_stats().await.unwrap(), cases[3].1);
    assert_eq!(client.get_rate_limit_stats().await.unwrap(), cases[4].1);
}

#[tokio::test]
async fn transaction_hash_is_percent_encoded() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/transactions/0xabc%20def"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"hash": "0xabc def"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let tx = client.get_transaction_by_hash("0xabc def").await.unwrap();
    assert_eq!(tx["hash"], "0xabc def");
}

#[tokio::test]
async fn create_wallet_returns_private_key() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wallet/create"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("wallet_create.json")))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let wallet = client.create_wallet().await.unwrap();
    assert_eq!(wallet.address, "fvc0123456789abcdef0123456789abcdef0123emyl");
    assert!(wallet.private_key.unwrap().starts_with("4c0883a6"));
    assert_eq!(wallet.balance, None);
}

#[tokio::test]
async fn get_wallet_balance_posts_address() {
    let mock_server = MockServer::start().await;
    let address = "fvc0123456789abcdef0123456789abcdef0123emyl";
    Mock::given(method("POST"))
        .and(path("/wallet/balance"))
        .and(body_json(json!({"address": address})))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("wallet_balance.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let wallet = client.get_wallet_balance(address).await.unwrap();
    assert_eq!(wallet.address, address);
    assert_eq!(wallet.balance, Some(1250.75));
    assert_eq!(wallet.private_key, None);
}

#[tokio::test]
async fn get_wallet_balance_defaults_missing_fields() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/wallet/balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let wallet = client.get_wallet_balance("fvcqueried").await.unwrap();
    assert_eq!(wallet.address, "fvcqueried");
    assert_eq!(wallet.balance, Some(0.0));
}

#[tokio::test]
async fn get_miner_status_sends_device_id() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/miner/status"))
        .and(query_param("device_id", "device_1700000000_abc123xyz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"is_mining": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let status = client
        .get_miner_status("device_1700000000_abc123xyz")
        .await
        .unwrap();
    assert_eq!(status["is_mining"], true);
}

#[tokio::test]
async fn heartbeat_defaults_timestamp_to_clock() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/mining/heartbeat"))
        .and(body_json(json!({
            "device_id": "device_1",
            "session_token": "session_1",
            "timestamp": 1700000000
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri())
        .unwrap()
        .with_clock(FixedClock::from_unix(1_700_000_000));
    let resp = client
        .send_mining_heartbeat("device_1", "session_1", None)
        .await
        .unwrap();
    assert_eq!(resp["status"], "ok");
}

#[tokio::test]
async fn heartbeat_uses_explicit_timestamp() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/mining/heartbeat"))
        .and(body_json(json!({
            "device_id": "device_1",
            "session_token": "session_1",
            "timestamp": 123
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    client
        .send_mining_heartbeat("device_1", "session_1", Some(123))
        .await
        .unwrap();
}

#[tokio::test]
async fn server_error_carries_message_and_code() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/blocks/999999"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "not found", "code": "NOT_FOUND"})),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client.get_block_by_height(999999).await.unwrap_err();
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.error_code(), "NOT_FOUND");
    assert_eq!(err.message(), "not found");
}

#[tokio::test]
async fn server_error_without_json_is_synthesized() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/network/info"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client.get_network_info().await.unwrap_err();
    assert_eq!(err.status_code(), 500);
    assert_eq!(err.error_code(), "HTTP_ERROR");
    assert_eq!(err.message(), "HTTP 500 Error");
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/network/nodes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client.get_network_nodes().await.unwrap_err();
    assert_eq!(err.status_code(), 0);
    assert_eq!(err.error_code(), "JSON_DECODE_ERROR");
}

#[tokio::test]
async fn slow_server_times_out() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/network/info"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new(&mock_server.uri()).with_timeout(Duration::from_millis(200));
    let client = Client::with_config(config).unwrap();
    let err = client.get_network_info().await.unwrap_err();
    assert_eq!(err.status_code(), 0);
    assert_eq!(err.error_code(), "TIMEOUT_ERROR");
    assert_eq!(err.message(), "Request timeout");
}

#[tokio::test]
async fn dot_transaction_hash_is_not_sent() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"transactions": [1, 2, 3]})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    for hash in [".", ".."] {
        let err = client.get_transaction_by_hash(hash).await.unwrap_err();
        assert_eq!(err.status_code(), 0);
        assert_eq!(err.error_code(), "REQUEST_ERROR");
    }
}

#[tokio::test]
async fn redirect_loop_is_a_request_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/network/info"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "/network/info"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client.get_network_info().await.unwrap_err();
    assert_eq!(err.status_code(), 0);
    assert_eq!(err.error_code(), "REQUEST_ERROR");
    assert!(err.message().starts_with("Request error:"), "{}", err.message());
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let client = Client::with_base_url("http://127.0.0.1:1").unwrap();
    let err = client.get_network_info().await.unwrap_err();
    assert_eq!(err.status_code(), 0);
    assert_eq!(err.error_code(), "NETWORK_ERROR");
    assert!(!client.is_server_reachable().await);
}

#[tokio::test]
async fn health_reports_healthy_node() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/network/info"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("network_info.json")))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri())
        .unwrap()
        .with_clock(FixedClock::from_unix(1_700_000_000));
    let health = client.get_server_health().await;
    assert_eq!(health.status, HealthStatus::Healthy);
    assert!(health.reachable);
    assert_eq!(health.block_height, Some(152340));
    assert_eq!(health.active_nodes, Some(7));
    assert_eq!(health.error, None);
    assert_eq!(health.timestamp.timestamp(), 1_700_000_000);
}

#[tokio::test]
async fn health_reports_unhealthy_node() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/network/info"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({"message": "syncing", "code": "NODE_SYNCING"})),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let health = client.get_server_health().await;
    assert_eq!(health.status, HealthStatus::Unhealthy);
    assert!(!health.reachable);
    assert_eq!(health.error.as_deref(), Some("syncing"));
    assert_eq!(health.block_height, None);
    assert_eq!(health.active_nodes, None);
}
