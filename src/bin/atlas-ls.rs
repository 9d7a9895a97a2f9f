use anyhow::Result;
use atlas_lint::lsp::server::serve;

#[tokio::main]
async fn main() -> Result<()> {
    serve().await
}
