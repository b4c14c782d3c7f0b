use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use trip_doctor::checks;
use trip_doctor::config::EnvConfig;
use trip_doctor::logger::Logger;
use trip_doctor::runner::{self, RunnerConfig};

/// trip-doctor - preflight diagnostics for the travel assistant stack
#[derive(Parser)]
#[command(name = "trip-doctor")]
#[command(about = "Preflight diagnostics for the travel assistant deployment")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available diagnostic suites
#[derive(Subcommand)]
enum Commands {
    /// Offline environment diagnostics (no API key required)
    Basic(SuiteArgs),
    /// Live chat API connection diagnostics
    Api(SuiteArgs),
}

#[derive(Args)]
struct SuiteArgs {
    /// Pass-rate threshold for exit code 0, overriding the suite's default
    #[arg(long, value_name = "RATE")]
    threshold: Option<f64>,
}

const EXIT_FAILURE: i32 = 1;
const EXIT_INTERRUPTED: i32 = 130;

fn main() {
    let cli = Cli::parse();
    let logger = Logger::new();
    install_interrupt_handler(logger.clone());

    let result = match &cli.command {
        Commands::Basic(args) => run_suite(&logger, Suite::Basic, args),
        Commands::Api(args) => run_suite(&logger, Suite::Api, args),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(EXIT_FAILURE),
        Err(e) => {
            logger.error(&format!("diagnostics aborted: {:#}", e));
            std::process::exit(EXIT_FAILURE);
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Suite {
    Basic,
    Api,
}

impl Suite {
    fn title(self) -> &'static str {
        match self {
            Suite::Basic => "basic environment diagnostics",
            Suite::Api => "chat API connection diagnostics",
        }
    }

    fn default_threshold(self) -> f64 {
        match self {
            Suite::Basic => checks::BASIC_PASS_THRESHOLD,
            Suite::Api => checks::API_PASS_THRESHOLD,
        }
    }

    fn build(self, config: &EnvConfig) -> Vec<trip_doctor::Check> {
        match self {
            Suite::Basic => checks::basic_suite(config),
            Suite::Api => checks::api_suite(config),
        }
    }
}

/// Runs one suite to completion and reports whether it met its threshold.
fn run_suite(logger: &Logger, suite: Suite, args: &SuiteArgs) -> Result<bool> {
    let config = EnvConfig::load();
    let runner_config =
        RunnerConfig::with_threshold(args.threshold.unwrap_or(suite.default_threshold()));

    logger.info(&format!("starting {}", suite.title()));
    logger.info("============================================================");

    let report = runner::run(logger, suite.build(&config));
    runner::print_summary(logger, &report);

    Ok(runner_config.meets_threshold(&report))
}

/// Maps a user interrupt to exit code 130.
///
/// The watcher thread owns its own small runtime so the diagnostics stay
/// synchronous; it only wakes when SIGINT arrives.
fn install_interrupt_handler(logger: Logger) {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_io()
            .build()
        {
            Ok(runtime) => runtime,
            Err(_) => return,
        };
        runtime.block_on(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                logger.warn("diagnostics interrupted by user");
                std::process::exit(EXIT_INTERRUPTED);
            }
        });
    });
}
