use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    useless_mcp::main_entry().await
}
