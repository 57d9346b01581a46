pub mod args;
pub mod commands;

pub use args::{ServeArgs, ToolsArgs};
use crate::core::config::ConfigLoader;
use clap::{Parser, Subcommand};

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\nOPTIONS:\n{options}\n\
COMMANDS:\n{subcommands}\n";

const SERVE_EXAMPLE: &str = "Example:\n    zaia-mcp serve --zaia-bin /usr/local/bin/zaia";

/// Example plus the environment variables read at startup.
fn serve_long_help() -> String {
    let mut help = String::from("ENVIRONMENT:\n");
    for line in ConfigLoader::env_var_documentation() {
        help.push_str("    ");
        help.push_str(line);
        help.push('\n');
    }
    help.push('\n');
    help.push_str(SERVE_EXAMPLE);
    help
}

#[derive(Parser)]
#[command(name = "zaia-mcp")]
#[command(version = crate::VERSION)]
#[command(about = "MCP server for the Zerops zaia and zcli command-line tools")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = "Register `zaia-mcp` (or `zaia-mcp serve`) as a stdio MCP server in your client. Logs go to stderr."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(
        about = "Serve MCP over stdio (default)",
        long_about = "Serve speaks the Model Context Protocol on stdin/stdout and runs zaia or zcli for every tool call.",
        after_help = SERVE_EXAMPLE,
        after_long_help = serve_long_help()
    )]
    Serve(ServeArgs),
    #[command(
        about = "Print the tool catalogue as JSON",
        long_about = "Tools lists every exposed tool with its target program, title and behavior hints.",
        after_help = "Example:\n    zaia-mcp tools --schemas"
    )]
    Tools(ToolsArgs),
}

pub async fn run(args: Args) -> crate::Result<()> {
    match args.command.unwrap_or_else(|| Command::Serve(ServeArgs::default())) {
        Command::Serve(serve_args) => commands::serve(serve_args).await,
        Command::Tools(tools_args) => commands::tools(tools_args).await,
    }
}
