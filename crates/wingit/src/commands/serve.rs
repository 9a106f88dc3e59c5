use anyhow::Context;
use tokio::io::BufReader;

use crate::app::App;
use crate::cli::SourceArgs;
use crate::mcp::McpServer;
use crate::settings::Settings;

/// Run the MCP server on stdin/stdout until the host closes stdin
pub fn run(sources: &SourceArgs) -> anyhow::Result<()> {
    let settings = Settings::resolve(sources)?;
    // the personal checklist is required; refuse to start without it
    let app = App::load(&settings)?;

    let runtime = super::runtime().context("starting async runtime")?;
    runtime.block_on(async {
        let mut server = McpServer::new(app);
        server
            .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    })?;
    Ok(())
}
