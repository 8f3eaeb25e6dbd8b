mod app_state;
mod cli;

use std::path::{Path, PathBuf};

use toolbox_common::PlatformError;
use toolbox_config::toml_loader::{default_config_path, default_state_path};
use toolbox_config::{
    FileThemeStorage, MemoryThemeStorage, ThemeStorage, ThemeStore, ToolboxConfig,
};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn init_logging(directive: Option<&str>) {
    let filter = EnvFilter::from_default_env();
    let filter = match directive.unwrap_or("toolbox=info").parse() {
        Ok(d) => filter.add_directive(d),
        Err(e) => {
            eprintln!("invalid log level {directive:?}: {e}");
            filter.add_directive(LevelFilter::INFO.into())
        }
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_config(path: Option<&Path>) -> ToolboxConfig {
    if let Some(p) = path {
        tracing::info!("Using config override: {}", p.display());
    }
    toolbox_config::load_config(path).unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        ToolboxConfig::default()
    })
}

fn write_config(config: &ToolboxConfig, path: Option<PathBuf>) -> toolbox_common::Result<()> {
    let path = match path {
        Some(p) => p,
        None => default_config_path()?,
    };
    toolbox_config::save_config_to_path(config, &path)?;
    println!("Config written to {}", path.display());
    Ok(())
}

fn open_theme_store(config: &ToolboxConfig) -> ThemeStore {
    let storage: Box<dyn ThemeStorage> = match default_state_path() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "theme state file");
            Box::new(FileThemeStorage::new(path, &config.theme.storage_key))
        }
        Err(e) => {
            tracing::warn!("Theme preference will not persist: {e}");
            Box::new(MemoryThemeStorage::default())
        }
    };
    ThemeStore::open(storage, config.theme.default)
}

/// Resolve the tool directory against the working directory.
fn tools_dir(config: &ToolboxConfig, cli_override: Option<PathBuf>) -> toolbox_common::Result<PathBuf> {
    let dir = cli_override.unwrap_or_else(|| PathBuf::from(&config.content.base_dir));
    if dir.is_absolute() {
        return Ok(dir);
    }
    let cwd = std::env::current_dir()
        .map_err(|e| PlatformError::PathError(format!("cannot resolve working directory: {e}")))?;
    Ok(cwd.join(dir))
}

fn run(args: cli::Args) -> toolbox_common::Result<()> {
    let config = load_config(args.config.as_deref());
    tracing::info!(tools = config.tools.len(), "Config loaded");

    if args.write_config {
        return write_config(&config, args.config);
    }

    let mut theme = open_theme_store(&config);
    if let Some(t) = args.theme {
        theme.set(t);
    }
    tracing::info!(theme = %theme.current(), "Theme preference loaded");

    let tools_dir = tools_dir(&config, args.tools_dir)?;

    let event_loop = EventLoop::new()
        .map_err(|e| PlatformError::WindowError(format!("failed to create event loop: {e}")))?;
    let mut app = app_state::ToolboxApp::new(config, theme, tools_dir);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| PlatformError::WindowError(format!("event loop error: {e}")))?;
    Ok(())
}

fn main() {
    let args = cli::parse();
    init_logging(args.log_level.as_deref());

    tracing::info!("Toolbox v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(args) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}
