use clap::{Parser, Subcommand, ValueEnum};
use erlide_domain::{CliOverrides, NameMode};
use std::process::ExitCode;
use tracing::info;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "erlide")]
#[command(version)]
#[command(about = "Detect the host names Erlang nodes can use to reach this machine")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Path to the erl executable used as the detection peer
    #[arg(long, value_name = "PATH", global = true)]
    erl: Option<String>,

    /// Upper bound in seconds for each probe node
    #[arg(long, value_name = "SECS", global = true)]
    probe_timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Where connectivity problems are reported
    #[arg(long, value_enum, default_value_t = NotifyTarget::Console, global = true)]
    notify: NotifyTarget,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Probe the Erlang runtime and print the usable host names
    Detect {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the host names reported by the operating system
    Local,
    /// Exit successfully if HOST names this machine
    IsThisHost { host: String },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum NotifyTarget {
    /// Print to stderr
    Console,
    /// Emit as log events
    Log,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        erl_path: cli.erl.clone(),
        probe_timeout_secs: cli.probe_timeout,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting erlide v{}", env!("CARGO_PKG_VERSION"));

    let services = di::Services::new(&config, cli.notify);

    match cli.command {
        Command::Detect { json } => {
            services.detect.execute_default().await;
            let report = services.get_names.execute();

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("long:  {}", describe(report.resolved_long_name.as_deref()));
                println!("short: {}", describe(report.resolved_short_name.as_deref()));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Local => {
            println!("long:  {}", services.local.host_name(NameMode::Long).await);
            println!("short: {}", services.local.host_name(NameMode::Short).await);
            Ok(ExitCode::SUCCESS)
        }
        Command::IsThisHost { host } => {
            services.detect.execute_default().await;
            if services.cache.is_this_host(&host) {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn describe(name: Option<&str>) -> &str {
    name.unwrap_or("(unavailable)")
}
