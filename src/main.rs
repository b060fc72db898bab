mod app;
mod config;
mod error;
mod input;
mod model;
mod persistence;
mod server;
mod ui;
mod vcs;
mod view;

use std::io::ErrorKind;
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::Arc;

use anyhow::{Result, bail};
use clap::Parser;
use env_logger::Env;

use config::{AppConfig, load_config};
use persistence::{CollapseStore, FileCollapseStore, MemoryCollapseStore};
use server::DifflyAppData;

#[derive(Parser, Debug)]
#[command(
    name = "diffly",
    about = "Preview working-tree changes in the browser as a side-by-side diff"
)]
struct Cli {
    /// Port to listen on; the next free port is used when it is busy
    #[arg(short, long)]
    port: Option<u16>,

    /// Don't open the browser on startup
    #[arg(long)]
    no_open: bool,

    /// Maximum number of commits shown in the history tab
    #[arg(long, value_name = "N")]
    log_limit: Option<usize>,

    /// Repository directory (defaults to the current directory)
    #[arg(short = 'C', long = "repo", value_name = "DIR")]
    repo: Option<PathBuf>,
}

impl Cli {
    /// Flags override the config file, which overrides defaults.
    fn settings(&self, config: AppConfig) -> AppConfig {
        AppConfig {
            port: self.port.unwrap_or(config.port),
            open_browser: config.open_browser && !self.no_open,
            log_limit: self.log_limit.unwrap_or(config.log_limit),
        }
    }
}

#[actix_web::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = match load_config() {
        Ok(outcome) => {
            for warning in &outcome.warnings {
                log::warn!("{warning}");
            }
            outcome.config.unwrap_or_default()
        }
        Err(e) => {
            log::warn!("Ignoring config file: {e:#}");
            AppConfig::default()
        }
    };
    let settings = cli.settings(config);

    let start = match &cli.repo {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let backend = match vcs::discover(&start) {
        Ok(backend) => backend,
        Err(e) => {
            log::debug!("Repository discovery failed: {e}");
            eprintln!("Error: No git repository found");
            std::process::exit(1);
        }
    };

    let store: Arc<dyn CollapseStore> = match FileCollapseStore::in_data_dir() {
        Ok(store) => Arc::new(store),
        Err(e) => {
            log::warn!("Collapsed files will not be remembered: {e}");
            Arc::new(MemoryCollapseStore::new())
        }
    };

    let (listener, port) = bind_first_free(settings.port)?;
    if port != settings.port {
        println!("Port {} is busy, using port {} instead", settings.port, port);
    }

    let url = format!("http://localhost:{port}");
    println!("Diffly server running at {url}");
    println!("Repository: {}", backend.info().root_path.display());

    if settings.open_browser {
        println!("Opening browser...");
        if let Err(e) = open_browser(&url) {
            log::debug!("Browser launch failed: {e}");
            println!("Could not automatically open browser. Please visit: {url}");
        }
    }

    let app_data = DifflyAppData::new(backend, store, settings.log_limit);
    server::run(app_data, listener).await?;

    println!("\nShutting down Diffly server...");
    Ok(())
}

/// Bind to `port` or the closest free port above it.
fn bind_first_free(port: u16) -> Result<(TcpListener, u16)> {
    for candidate in port..=u16::MAX {
        match TcpListener::bind(("127.0.0.1", candidate)) {
            Ok(listener) => return Ok((listener, candidate)),
            Err(e) if e.kind() == ErrorKind::AddrInUse => continue,
            Err(e) => return Err(e.into()),
        }
    }
    bail!("No free port at or above {port}")
}

fn browser_command(url: &str) -> Command {
    #[cfg(target_os = "macos")]
    {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    }

    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    }

    #[cfg(not(any(target_os = "macos", windows)))]
    {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

fn open_browser(url: &str) -> Result<()> {
    browser_command(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}
