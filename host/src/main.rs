use anyhow::Result;
use clap::Parser;
use tracing::info;

use host::{build_host_app, load_config, Args};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut cfg = load_config(&args.config)?;
    args.apply_overrides(&mut cfg);
    info!(host = ?cfg.host, waves = cfg.waves.components.len(), script = cfg.script.len(), "Host config loaded");

    let mut app = build_host_app(cfg, args.fast)?;
    app.insert_resource(args);
    app.run();
    Ok(())
}
