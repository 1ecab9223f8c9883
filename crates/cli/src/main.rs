use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kiosk_site::SiteRegistry;
use kiosk_tui::RunOptions;
use kiosk_types::{DEFAULT_NARROW_WIDTH, TabSelection};

#[derive(Parser)]
#[command(name = "kiosk", version, about = "Terminal brochure for Lodestar Software")]
struct Cli {
    /// Load a site document from this file instead of the embedded one
    #[arg(long, value_name = "FILE")]
    site: Option<PathBuf>,
    /// Path to open at startup (e.g. /services)
    #[arg(long, value_name = "PATH")]
    start: Option<String>,
    /// Collapse to the drawer layout below this terminal width
    #[arg(long, value_name = "COLS", default_value_t = DEFAULT_NARROW_WIDTH)]
    narrow_width: u16,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the site document and exit
    Check,
    /// Print the merged route table in reconciliation scan order
    Routes,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let site = load_site(&cli)?;

    match cli.command {
        Some(Command::Check) => {
            println!(
                "site ok: {} ({} routes, {} pages)",
                site.company().name,
                site.routes().entries().len(),
                site.page_count()
            );
            Ok(())
        }
        Some(Command::Routes) => {
            print_routes(&site);
            Ok(())
        }
        None => {
            let options = RunOptions {
                start_path: cli.start,
                narrow_width: cli.narrow_width,
            };
            kiosk_tui::run(site, options).await
        }
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn load_site(cli: &Cli) -> Result<SiteRegistry> {
    match &cli.site {
        Some(path) => SiteRegistry::from_path(path).with_context(|| format!("loading site document {}", path.display())),
        None => SiteRegistry::from_embedded().context("embedded site document is invalid"),
    }
}

fn print_routes(site: &SiteRegistry) {
    for descriptor in site.routes().entries() {
        let target = match descriptor.target {
            TabSelection::Tab(index) => match descriptor.submenu {
                Some(position) => format!("tab {index}, submenu {position}"),
                None => format!("tab {index}"),
            },
            TabSelection::CallToAction => "call-to-action".to_string(),
        };
        println!("{:<20} {:<18} {target}", descriptor.path, descriptor.name);
    }
}
