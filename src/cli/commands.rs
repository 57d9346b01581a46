use crate::cli::args::{ServeArgs, ToolsArgs};
use crate::core::config::{ConfigLoader, ConfigOverrides};
use crate::core::executor::{CliExecutor, Executor};
use crate::server::{self, ZaiaServer};
use crate::tools::ToolCatalog;
use crate::utils::env::ProcessEnv;
use anyhow::Context;
use serde_json::{json, Value};
use std::sync::Arc;

pub async fn serve(args: ServeArgs) -> crate::Result<()> {
    let overrides = ConfigOverrides {
        zaia_bin: args.zaia_bin,
        zcli_bin: args.zcli_bin,
        no_shell_path: args.no_shell_path,
    };
    let config = ConfigLoader::load(args.config.as_deref(), &overrides)
        .context("failed to load configuration")?;

    let _logging = crate::logging::init(&config.logging)?;

    let env = if config.programs.resolve_shell_path {
        ProcessEnv::resolve()
    } else {
        ProcessEnv::inherited()
    };
    tracing::info!(
        zaia = %config.programs.zaia,
        zcli = %config.programs.zcli,
        path = ?env.path(),
        "starting zaia-mcp"
    );

    let executor: Arc<dyn Executor> = Arc::new(CliExecutor::with_env(
        &config.programs.zaia,
        &config.programs.zcli,
        env,
    ));
    server::serve_stdio(ZaiaServer::new(executor)).await
}

pub async fn tools(args: ToolsArgs) -> crate::Result<()> {
    let catalog = ToolCatalog::standard();
    let rows = catalog
        .iter()
        .map(|entry| {
            let mut row = serde_json::to_value(entry.summary())?;
            if args.schemas {
                if let Value::Object(map) = &mut row {
                    map.insert(
                        "inputSchema".to_string(),
                        Value::Object(entry.schema().as_ref().clone()),
                    );
                }
            }
            Ok(row)
        })
        .collect::<Result<Vec<_>, serde_json::Error>>()?;

    println!("{}", serde_json::to_string_pretty(&json!({ "tools": rows }))?);
    Ok(())
}
