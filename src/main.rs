use clap::{Parser, Subcommand};
use simple_pages::{config, output, render, server, site};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "simple-pages")]
#[command(about = "Minimal markdown content server")]
#[command(long_about = "\
Minimal markdown content server

Your filesystem is the data source. Top-level directories become sections in
the navigation menu, markdown files inside them become pages, and the newest
files are listed first.

Content structure:

  content/
  ├── 1-blog/                 # Section \"Blog\" (first in order: served at /)
  │   ├── hello-world.md      # Document at /1-blog/hello-world
  │   └── second-post.md
  ├── 2-about/                # Section \"About\" at /2-about
  │   └── me.md               # Single document: shown in full
  └── .drafts/                # Hidden: not a section

  templates/
  └── template.html           # MiniJinja page template

Run 'simple-pages gen-config' to generate a documented config.toml and
'simple-pages gen-template' for the stock template.")]
#[command(version)]
struct Cli {
    /// Config file (TOML, or JSON with the legacy key names)
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE, global = true)]
    config: PathBuf,

    /// Log request and reload activity (overrides RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the site over HTTP (default)
    Serve,
    /// Validate config, content and template without serving
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print the stock template.html
    GenTemplate,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let site_config = config::load_config(&cli.config)?;
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(server::run_server(site_config, Some(cli.config)))?;
        }
        Command::Check => check(&cli.config)?,
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::GenTemplate => {
            print!("{}", render::STOCK_TEMPLATE);
        }
    }

    Ok(())
}

/// Load everything a request would touch and render the home page once.
fn check(config_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    println!("==> Checking {}", config_path.display());
    let site_config = config::load_config(config_path)?;
    let sections = site::inventory(&site_config)?;
    output::print_check_output(&sections, &site_config);
    site::render_home(&site_config)?;
    println!("==> Site is valid");
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
