use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tokio::io::{stdin, stdout};
use tower_lsp::{LspService, Server};

use crate::config::ServerArgs;
use crate::lsp::backend::Backend;

/// Start the LSP server on stdio
pub async fn serve() -> Result<()> {
    let args = ServerArgs::parse();

    // stderr only: stdout carries the protocol
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level.as_str()),
    )
    .target(env_logger::Target::Stderr)
    .init();

    // Under the smoke test, exit after a short delay so the test can read stdout to EOF.
    if std::env::var("ATLAS_LS_TEST_EXIT").as_deref() == Ok("1") {
        tokio::spawn(async {
            tokio::time::sleep(Duration::from_secs(1)).await;
            std::process::exit(0);
        });
    }

    log::info!("starting atlas-ls {}", env!("CARGO_PKG_VERSION"));
    let (service, socket) = LspService::build(Backend::new).finish();

    Server::new(stdin(), stdout(), socket).serve(service).await;

    Ok(())
}
