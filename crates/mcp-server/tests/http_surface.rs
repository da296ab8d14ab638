mod support;

use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use support::{aircraft_card, TestServer};
use useless_catalog::Catalog;
use useless_widget::WidgetBundle;

const WIDGET_URI: &str = "ui://widget/learning-card.html";

async fn single_card_server() -> Result<TestServer> {
    TestServer::start(
        Catalog::new(vec![aircraft_card()]),
        WidgetBundle::new("window.__card = true;"),
    )
    .await
}

#[tokio::test]
async fn health_reports_card_count() -> Result<()> {
    let server = single_card_server().await?;
    let body: Value = server.client.get(server.url("/")).send().await?.json().await?;
    assert_eq!(
        body,
        json!({
            "name": "Useless - Cross-Occupational Learning MCP Server",
            "version": env!("CARGO_PKG_VERSION"),
            "status": "running",
            "cards": 1,
            "endpoint": "/mcp",
        })
    );
    Ok(())
}

#[tokio::test]
async fn empty_catalog_still_serves() -> Result<()> {
    let server = TestServer::start(Catalog::empty(), WidgetBundle::missing()).await?;
    let body: Value = server.client.get(server.url("/")).send().await?.json().await?;
    assert_eq!(body["cards"], 0);

    let (status, reply) = server
        .rpc(json!({"jsonrpc": "2.0", "id": 1, "method": "tools/call", "params": {"name": "list_all_cards"}}))
        .await?;
    assert_eq!(status, 200);
    assert!(reply.get("error").is_none(), "unexpected error: {reply}");
    let text = reply["result"]["content"][0]["text"].as_str().unwrap_or_default();
    assert!(text.contains("# Available Learning Cards"));
    assert!(!text.contains("## "));
    Ok(())
}

#[tokio::test]
async fn get_card_scenarios() -> Result<()> {
    let server = single_card_server().await?;

    let (status, by_id) = server
        .rpc(json!({
            "jsonrpc": "2.0",
            "id": 10,
            "method": "tools/call",
            "params": {"name": "get_learning_card", "arguments": {"id": "aircraft-oil-change"}}
        }))
        .await?;
    assert_eq!(status, 200);
    assert_eq!(by_id["id"], 10);
    assert_eq!(
        by_id["result"]["structuredContent"]["card"],
        serde_json::to_value(aircraft_card())?
    );

    let (_, by_occupation) = server
        .rpc(json!({
            "jsonrpc": "2.0",
            "id": 10,
            "method": "tools/call",
            "params": {"name": "get_learning_card", "arguments": {"occupation": "aircraft engineer"}}
        }))
        .await?;
    assert_eq!(by_occupation, by_id);

    let (_, missing) = server
        .rpc(json!({
            "jsonrpc": "2.0",
            "id": 11,
            "method": "tools/call",
            "params": {"name": "get_learning_card", "arguments": {"id": "nonexistent"}}
        }))
        .await?;
    assert_eq!(
        missing["result"]["content"][0]["text"],
        "No learning card found matching your criteria. Try using list_all_cards to see available options."
    );
    assert!(missing["result"].get("structuredContent").is_none());
    Ok(())
}

#[tokio::test]
async fn search_echoes_query() -> Result<()> {
    let server = single_card_server().await?;
    let (_, reply) = server
        .rpc(json!({
            "jsonrpc": "2.0",
            "id": "s1",
            "method": "tools/call",
            "params": {"name": "search_cards", "arguments": {"query": "TURBINE"}}
        }))
        .await?;
    let text = reply["result"]["content"][0]["text"].as_str().unwrap_or_default();
    assert!(text.contains("# Search Results for \"TURBINE\""), "{text}");
    assert!(text.contains("Found 1 matching card(s):"));
    Ok(())
}

#[tokio::test]
async fn protocol_errors_are_200_with_error_envelope() -> Result<()> {
    let server = single_card_server().await?;

    let (status, reply) = server
        .rpc(json!({"jsonrpc": "2.0", "id": 21, "method": "sampling/createMessage"}))
        .await?;
    assert_eq!(status, 200);
    assert_eq!(
        reply,
        json!({
            "jsonrpc": "2.0",
            "id": 21,
            "error": {"code": -32601, "message": "Method not found: sampling/createMessage"}
        })
    );

    let (status, reply) = server
        .rpc(json!({"jsonrpc": "2.0", "id": 22, "method": "tools/call", "params": {"name": "rm_rf"}}))
        .await?;
    assert_eq!(status, 200);
    assert_eq!(reply["error"]["code"], -32603);
    assert_eq!(reply["error"]["message"], "Unknown tool: rm_rf");
    Ok(())
}

#[tokio::test]
async fn odd_params_never_block_routing() -> Result<()> {
    let server = single_card_server().await?;

    let (status, reply) = server
        .rpc(json!({"jsonrpc": "2.0", "id": 23, "method": "initialize", "params": {"name": 5}}))
        .await?;
    assert_eq!(status, 200);
    assert_eq!(reply["result"]["serverInfo"]["name"], "useless");

    let (status, reply) = server
        .rpc(json!({"jsonrpc": "2.0", "id": 24, "method": "prompts/list", "params": "x"}))
        .await?;
    assert_eq!(status, 200);
    assert_eq!(reply["id"], 24);
    assert_eq!(reply["error"]["code"], -32601);

    let (status, reply) = server
        .rpc(json!({"jsonrpc": "2.0", "id": 25, "method": "resources/read", "params": [WIDGET_URI]}))
        .await?;
    assert_eq!(status, 200);
    assert_eq!(reply["error"]["code"], -32602);
    Ok(())
}

#[tokio::test]
async fn resources_read_known_and_unknown() -> Result<()> {
    let server = single_card_server().await?;

    let (_, listed) = server
        .rpc(json!({"jsonrpc": "2.0", "id": 30, "method": "resources/list"}))
        .await?;
    assert_eq!(listed["result"]["resources"][0]["uri"], WIDGET_URI);

    let (_, read) = server
        .rpc(json!({"jsonrpc": "2.0", "id": 31, "method": "resources/read", "params": {"uri": WIDGET_URI}}))
        .await?;
    let text = read["result"]["contents"][0]["text"].as_str().unwrap_or_default();
    assert_eq!(
        text,
        "<div id=\"root\"></div>\n<script type=\"module\">window.__card = true;</script>"
    );

    let (status, unknown) = server
        .rpc(json!({"jsonrpc": "2.0", "id": 32, "method": "resources/read", "params": {"uri": "ui://nope"}}))
        .await?;
    assert_eq!(status, 200);
    assert_eq!(unknown["error"]["code"], -32602);
    assert_eq!(unknown["error"]["message"], "Unknown resource: ui://nope");
    Ok(())
}

#[tokio::test]
async fn unprocessable_bodies_get_500() -> Result<()> {
    let server = single_card_server().await?;

    let response = server
        .client
        .post(server.url("/mcp"))
        .header("content-type", "application/json")
        .body("{ definitely not json")
        .send()
        .await?;
    assert_eq!(response.status().as_u16(), 500);
    let reply: Value = response.json().await?;
    assert_eq!(reply["id"], Value::Null);
    assert_eq!(reply["error"]["code"], -32603);

    let (status, reply) = server.rpc(json!({"id": 40, "params": {}})).await?;
    assert_eq!(status, 500);
    assert_eq!(reply["id"], 40);
    assert_eq!(reply["error"]["code"], -32603);
    Ok(())
}

#[tokio::test]
async fn preview_renders_card_html() -> Result<()> {
    let server = single_card_server().await?;

    let response = server
        .client
        .get(server.url("/cards/aircraft-oil-change/preview?theme=dark"))
        .send()
        .await?;
    assert_eq!(response.status().as_u16(), 200);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"), "{content_type}");
    let html = response.text().await?;
    assert!(html.contains("Changing Aircraft Engine Oil"));
    assert!(html.contains("Maintenance &amp; Safety"));
    assert!(html.contains("#D84315 0%"));

    let missing = server
        .client
        .get(server.url("/cards/nonexistent/preview"))
        .send()
        .await?;
    assert_eq!(missing.status().as_u16(), 404);
    Ok(())
}
