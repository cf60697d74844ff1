use super::args::{Cli, Commands, SessionCommand};
use super::handlers;
use anyhow::Result;
use stint_runtime::{Config, resolve_workspace_root};

pub fn run(cli: Cli) -> Result<()> {
    let workspace_root = resolve_workspace_root(cli.workspace.as_deref())?;
    let config = Config::load(&workspace_root)?;

    match cli.command {
        Commands::Session { command } => match command {
            SessionCommand::Start { name } => {
                handlers::session::start(&workspace_root, &config, name, cli.format)
            }
            SessionCommand::Pause => {
                handlers::session::pause(&workspace_root, &config, cli.format)
            }
            SessionCommand::Stop => handlers::session::stop(&workspace_root, &config, cli.format),
        },

        Commands::Status {
            follow,
            interval_ms,
        } => handlers::status::handle(&workspace_root, &config, cli.format, follow, interval_ms),

        Commands::Watch => handlers::watch::handle(&workspace_root, &config, cli.format),

        Commands::Serve { port, root } => {
            let port = port.unwrap_or(config.serve.port);
            let root = root
                .map(|r| workspace_root.join(r))
                .unwrap_or_else(|| config.serve_root(&workspace_root));
            handlers::serve::handle(root, port)
        }
    }
}
