use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Config file (default: $XDG_CONFIG_HOME/zaia-mcp/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// zaia binary to run, a name on PATH or a path
    #[arg(long, value_name = "BIN", help_heading = "Program Overrides")]
    pub zaia_bin: Option<String>,

    /// zcli binary to run, a name on PATH or a path
    #[arg(long, value_name = "BIN", help_heading = "Program Overrides")]
    pub zcli_bin: Option<String>,

    /// Keep the inherited PATH instead of asking the login shell
    #[arg(long, help_heading = "Program Overrides")]
    pub no_shell_path: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ToolsArgs {
    /// Include each tool's JSON input schema
    #[arg(long)]
    pub schemas: bool,
}
