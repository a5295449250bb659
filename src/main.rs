//! postbridge MCP Server & CLI (Rust)
//!
//! Dual-mode application:
//! - MCP Server Mode (default): Model Context Protocol server using stdio
//! - CLI Mode: Command-line utility for direct tool execution
//!
//! Exposes the Post Bridge cross-posting API as tools: social accounts,
//! posts, post results and media (including local file upload).

mod api;
mod cli;
mod config;
mod error;
mod http;
mod mcp;
mod platforms;
mod tools;

use anyhow::Result;
use api::Api;
use clap::Parser;
use cli::{Cli, Commands, MediaCommands, PostResultsCommands, PostsCommands, SocialAccountsCommands};
use config::ApiConfig;
use error::AppError;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Detect mode: CLI if args present, MCP server otherwise
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        // CLI mode - parse arguments and execute
        run_cli_mode().await
    } else {
        // MCP server mode - default behavior
        run_mcp_mode().await
    }
}

/// Run in CLI mode
async fn run_cli_mode() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();

    let command = match cli.command {
        Some(command) => command,
        None => {
            eprintln!("Error: No command specified. Use --help for usage information.");
            std::process::exit(1);
        }
    };

    match execute_command(command).await {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(get_exit_code(&e));
        }
    }
}

/// Build the API clients and execute a single CLI command
async fn execute_command(command: Commands) -> Result<String, AppError> {
    let config = ApiConfig::from_env()?;
    let api = Api::new(&config)?;

    let result = match command {
        Commands::SocialAccounts(command) => match command {
            SocialAccountsCommands::List(args) => {
                tools::social_accounts::execute_list(args, &api.social_accounts).await?
            }
            SocialAccountsCommands::Get(args) => {
                tools::social_accounts::execute_get(args, &api.social_accounts).await?
            }
        },
        Commands::Posts(command) => match command {
            PostsCommands::List(args) => tools::posts::execute_list(args, &api.posts).await?,
            PostsCommands::Get(args) => tools::posts::execute_get(args, &api.posts).await?,
            PostsCommands::Create(args) => tools::posts::execute_create(args, &api.posts).await?,
            PostsCommands::Update(args) => tools::posts::execute_update(args, &api.posts).await?,
            PostsCommands::Delete(args) => tools::posts::execute_delete(args, &api.posts).await?,
        },
        Commands::PostResults(command) => match command {
            PostResultsCommands::List(args) => {
                tools::post_results::execute_list(args, &api.post_results).await?
            }
            PostResultsCommands::Get(args) => {
                tools::post_results::execute_get(args, &api.post_results).await?
            }
        },
        Commands::Media(command) => match command {
            MediaCommands::List(args) => tools::media::execute_list(args, &api.media).await?,
            MediaCommands::Get(args) => tools::media::execute_get(args, &api.media).await?,
            MediaCommands::Delete(args) => tools::media::execute_delete(args, &api.media).await?,
            MediaCommands::CreateUploadUrl(args) => {
                tools::media::execute_create_upload_url(args, &api.media).await?
            }
            // Upload reports failures inside its result payload
            MediaCommands::Upload(args) => tools::upload::execute_upload(args, &api.media).await,
        },
    };

    Ok(result
        .content
        .first()
        .map(|c| c.text.clone())
        .unwrap_or_default())
}

/// Map AppError to exit code
fn get_exit_code(err: &AppError) -> i32 {
    match err {
        AppError::InvalidInput(_) | AppError::Config(_) => 1,
        AppError::Network(_) | AppError::Api(_) => 2,
        AppError::Timeout(_) => 4,
        _ => 5,
    }
}

/// Run in MCP server mode
async fn run_mcp_mode() -> Result<()> {
    // Log to stderr: stdout carries the JSON-RPC stream
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    info!("Starting postbridge MCP Server");

    // A missing token is fatal before the protocol loop starts
    let config = ApiConfig::from_env().map_err(|e| anyhow::anyhow!(e.message()))?;
    let api = Api::new(&config).map_err(|e| anyhow::anyhow!(e.message()))?;

    mcp::handle_stdio(api).await?;

    Ok(())
}
