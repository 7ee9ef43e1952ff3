use clap::Parser;
use ev_station_dashboard::models::{Method, K};
use ev_station_dashboard::session::{Control, Session};
use ev_station_dashboard::{DashboardConfig, DashboardError};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Renders the EV charging station placement results as a static dashboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct DashboardApp {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the six input CSV files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Directory the rendered page is written to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Number of new stations (defaults to the configured K, clamped to the data)
    #[arg(long)]
    k: Option<K>,

    /// Site-selection method: ILP or GREEDY
    #[arg(long, default_value = "ILP")]
    method: Method,

    /// Do not overlay the recommended sites
    #[arg(long)]
    hide_recommended: bool,

    /// Read control changes from stdin and re-render after each one
    #[arg(long)]
    interactive: bool,
}

fn run(args: DashboardApp) -> Result<(), DashboardError> {
    let mut config = DashboardConfig::load(args.config.as_deref())?;
    if let Some(dir) = args.data_dir {
        config.data.dir = dir;
    }
    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }
    let output_dir = config.output_dir.clone();

    let mut session = Session::new(config)?;
    if let Some(k) = args.k {
        session.apply(Control::SetK(k));
    }
    session.apply(Control::SetMethod(args.method));
    session.apply(Control::ShowRecommended(!args.hide_recommended));

    if args.interactive {
        let stdin = io::stdin();
        session.run(stdin.lock(), io::stdout(), &output_dir)
    } else {
        println!("{}", session.render(&output_dir)?);
        println!("Dashboard written to {}", output_dir.display());
        Ok(())
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = DashboardApp::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
