#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;
use std::time::Duration;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

use crate::context::LaunchOptions;

/// Launch options, set once from the command line
static LAUNCH_OPTIONS: OnceLock<LaunchOptions> = OnceLock::new();

/// Get the launch options (set from command line or default)
pub fn get_launch_options() -> LaunchOptions {
    LAUNCH_OPTIONS.get().cloned().unwrap_or_default()
}

/// Portfolio - single-page personal portfolio
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Personal portfolio: skills, projects and contact details")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Start in dark mode
    #[arg(long)]
    dark: bool,

    /// Delay between typed characters in the hero line
    #[arg(long, default_value_t = 100)]
    typing_delay_ms: u64,
}

fn main() {
    let default_filter = "portfolio_desktop=info,portfolio_core=info,portfolio_ui=info";
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let args = Args::parse();

    let options = LaunchOptions {
        dark_mode: args.dark,
        typing_delay: Duration::from_millis(args.typing_delay_ms),
    };
    let _ = LAUNCH_OPTIONS.set(options.clone());

    tracing::info!(
        dark_mode = options.dark_mode,
        typing_delay_ms = args.typing_delay_ms,
        "Starting portfolio"
    );

    let profile = portfolio_core::DEFAULT_CATALOG.profile;
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(format!("{} - Portfolio", profile.name))
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
