//! JSON-RPC method routing for `POST /mcp`.
//!
//! Every request is handled on its own; the server keeps no per-caller
//! state and replies with exactly one envelope.

use crate::tools::{call_tool, tool_definitions};
use serde_json::{json, Value};
use thiserror::Error;
use useless_catalog::Catalog;
use useless_protocol::{request_id_hint, ErrorCode, Reply, Request};
use useless_widget::{WidgetBundle, WIDGET_URI};

pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "useless";
/// Placeholder for an absent `uri` or tool `name` in error messages.
pub const MISSING_PARAM: &str = "<missing>";
pub const SERVER_DESCRIPTION: &str = "Cross-occupational learning app teaching how professionals in different fields perform specific tasks. Perfect for learning something new, understanding job procedures, or discovering useless but interesting facts about different occupations.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Initialize,
    ResourcesList,
    ResourcesRead,
    ToolsList,
    ToolsCall,
}

impl Method {
    pub const ALL: [Method; 5] = [
        Self::Initialize,
        Self::ResourcesList,
        Self::ResourcesRead,
        Self::ToolsList,
        Self::ToolsCall,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initialize => "initialize",
            Self::ResourcesList => "resources/list",
            Self::ResourcesRead => "resources/read",
            Self::ToolsList => "tools/list",
            Self::ToolsCall => "tools/call",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.as_str() == name)
    }
}

/// A body that never made it to method routing.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Invalid JSON body: {0}")]
    Body(#[source] serde_json::Error),

    #[error("Invalid request envelope: {source}")]
    Envelope {
        id: Value,
        #[source]
        source: serde_json::Error,
    },
}

impl RequestError {
    /// Correlation id for the error reply, when one could be recovered.
    pub fn id(&self) -> Value {
        match self {
            Self::Body(_) => Value::Null,
            Self::Envelope { id, .. } => id.clone(),
        }
    }

    pub fn into_reply(self) -> Reply {
        Reply::failure(self.id(), ErrorCode::InternalError, self.to_string())
    }
}

/// Catalog and widget bundle, both fixed at startup.
pub struct McpServer {
    catalog: Catalog,
    widget: WidgetBundle,
}

impl McpServer {
    pub fn new(catalog: Catalog, widget: WidgetBundle) -> Self {
        Self { catalog, widget }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Parses a raw body and dispatches it.
    pub fn handle_body(&self, body: &[u8]) -> Result<Reply, RequestError> {
        let value: Value = serde_json::from_slice(body).map_err(RequestError::Body)?;
        self.handle_value(value)
    }

    pub fn handle_value(&self, value: Value) -> Result<Reply, RequestError> {
        let id = request_id_hint(&value);
        let request =
            Request::from_value(value).map_err(|source| RequestError::Envelope { id, source })?;
        Ok(self.handle(request))
    }

    pub fn handle(&self, request: Request) -> Reply {
        log::info!("MCP request: {}", request.method);

        let Some(method) = Method::from_name(&request.method) else {
            return Reply::failure(
                request.id,
                ErrorCode::MethodNotFound,
                format!("Method not found: {}", request.method),
            );
        };

        match method {
            Method::Initialize => Reply::success(request.id, self.initialize()),
            Method::ResourcesList => Reply::success(
                request.id,
                json!({ "resources": [self.widget.descriptor()] }),
            ),
            Method::ResourcesRead => self.read_resource(request),
            Method::ToolsList => Reply::success(request.id, json!({ "tools": tool_definitions() })),
            Method::ToolsCall => self.handle_tool_call(request),
        }
    }

    fn initialize(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {},
                "resources": {},
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION"),
                "description": SERVER_DESCRIPTION,
            },
        })
    }

    fn read_resource(&self, request: Request) -> Reply {
        let uri = request.str_param("uri").map(|uri| uri.map(str::to_string));
        let uri = match uri {
            Ok(uri) => uri,
            Err(err) => {
                return Reply::failure(request.id, ErrorCode::InvalidParams, err.to_string())
            }
        };

        match uri.as_deref() {
            Some(WIDGET_URI) => Reply::success(
                request.id,
                json!({ "contents": [self.widget.contents()] }),
            ),
            other => Reply::failure(
                request.id,
                ErrorCode::InvalidParams,
                format!("Unknown resource: {}", other.unwrap_or(MISSING_PARAM)),
            ),
        }
    }

    fn handle_tool_call(&self, request: Request) -> Reply {
        let call = request.str_param("name").and_then(|name| {
            let arguments = request.param("arguments")?.cloned();
            Ok((name.unwrap_or(MISSING_PARAM).to_string(), arguments))
        });
        let (name, arguments) = match call {
            Ok(call) => call,
            Err(err) => {
                log::warn!("Rejected tools/call: {err}");
                return Reply::failure(request.id, ErrorCode::InternalError, err.to_string());
            }
        };

        let outcome = call_tool(&self.catalog, &name, arguments)
            .map_err(|err| err.to_string())
            .and_then(|result| serde_json::to_value(result).map_err(|err| err.to_string()));

        match outcome {
            Ok(result) => Reply::success(request.id, result),
            Err(message) => {
                log::warn!("Tool call '{name}' failed: {message}");
                Reply::failure(request.id, ErrorCode::InternalError, message)
            }
        }
    }
}
