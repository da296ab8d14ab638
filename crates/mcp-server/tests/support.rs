#![allow(dead_code)]

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use useless_catalog::{Catalog, Record};
use useless_mcp::{router, AppState, McpServer};
use useless_widget::{CardRenderer, WidgetBundle};

pub fn aircraft_card() -> Record {
    Record {
        id: "aircraft-oil-change".to_string(),
        title: "Changing Aircraft Engine Oil".to_string(),
        occupation: "Aircraft Engineer".to_string(),
        category: "Maintenance & Safety".to_string(),
        description: "How turbine engines get fresh oil between flights.".to_string(),
        steps: vec!["Step A".to_string(), "Step B".to_string()],
        fun_fact: "Jet engine oil is fully synthetic.".to_string(),
        key_takeaway: "Routine checks prevent in-flight failures.".to_string(),
    }
}

pub struct TestServer {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
}

impl TestServer {
    pub async fn start(catalog: Catalog, widget: WidgetBundle) -> Result<Self> {
        let state = Arc::new(AppState {
            server: McpServer::new(catalog, widget),
            renderer: CardRenderer::new()?,
        });
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, router(state)).await;
        });
        Ok(Self {
            addr,
            client: reqwest::Client::new(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub async fn rpc(&self, body: serde_json::Value) -> Result<(u16, serde_json::Value)> {
        let response = self.client.post(self.url("/mcp")).json(&body).send().await?;
        let status = response.status().as_u16();
        Ok((status, response.json().await?))
    }
}
