use anyhow::Result;
use caseconv::cli::output::{print_conversions, print_summary, OutputFormat};
use caseconv::config::Overrides;
use caseconv::{cli, CaseConvention, Config};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use tracing_subscriber::{filter::LevelFilter, fmt};

#[derive(Parser, Debug)]
#[command(name = "caseconv")]
#[command(version, about = "Convert strings to camelCase, kebab-case or dot.case", long_about = None)]
struct Cli {
    /// Strings to convert
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Target case (camel, kebab, dot)
    #[arg(short, long, env = "CASECONV_CASE")]
    case: Option<CaseConvention>,

    /// Convert to every supported case
    #[arg(short, long)]
    all: bool,

    /// Show the words each input splits into
    #[arg(short, long)]
    tokens: bool,

    /// Parse each input as a JSON literal (e.g. null, 42, "text")
    #[arg(long)]
    json_input: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, env = "CASECONV_FORMAT")]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if some inputs are invalid
    #[arg(long)]
    no_fail: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print example conversions
    Demo {
        /// Only show this case (defaults to all)
        #[arg(short, long)]
        case: Option<CaseConvention>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(determine_log_level(cli.verbose));

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "caseconv", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(Overrides {
        convention: cli.case,
        all_conventions: cli.all,
        format: cli.format,
        no_color: cli.no_color,
        show_tokens: cli.tokens,
        no_fail: cli.no_fail,
    });

    if let Some(command) = cli.command {
        return handle_command(command, &config);
    }

    if cli.inputs.is_empty() {
        anyhow::bail!("No inputs specified. Use --help for usage information.");
    }

    let values = cli::parse_inputs(&cli.inputs, cli.json_input)?;
    let result = cli::run(&values, &config);

    print_conversions(&result, config.color, &config.format);
    if config.format == OutputFormat::Text {
        print_summary(&result, config.color);
    }

    if result.invalid_count > 0 && config.fail_on_invalid {
        std::process::exit(1);
    }

    Ok(())
}

fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Demo { case } => {
            let conventions = match case {
                Some(convention) => vec![convention],
                None => CaseConvention::ALL.to_vec(),
            };
            cli::demo::run(&conventions, config.color);
        }
    }
    Ok(())
}

fn determine_log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_tracing(level: LevelFilter) {
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("Tracing subscriber already set; skipping re-initialization.");
    }
}
