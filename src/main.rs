use clap::Parser;
use std::process;
use timesheet_mcp::cli::{Cli, Commands};
use timesheet_mcp::cli_handlers;
use timesheet_mcp::config::Config;
use timesheet_mcp::mcp::run_mcp_server;

#[tokio::main]
async fn main() {
    // Logs go to stderr so MCP stdio framing stays clean
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Projects => cli_handlers::handle_projects().await,
        Commands::Check {
            year,
            month,
            ignore_excess,
        } => cli_handlers::handle_check(year, month, ignore_excess).await,
        Commands::Log {
            project_id,
            hours,
            dates,
            rate,
            activity,
            comment,
        } => {
            cli_handlers::handle_log(project_id, hours, &dates, rate, activity, comment.as_deref())
                .await
        }
        Commands::Mcp => {
            let config = match Config::from_env() {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            };
            if let Err(e) = run_mcp_server(config).await {
                eprintln!("MCP server error: {e}");
                process::exit(1);
            }
            return;
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
