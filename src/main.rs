use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{eyre, Result};
use std::process::ExitCode;

/// Exit code reported when evaluation halted on a runtime error.
const HALTED_EXIT_CODE: u8 = 70;

#[derive(Debug, Parser)]
#[clap(name = "turtle", version)]
pub struct CLArgs {
    #[clap(subcommand)]
    pub routine: TurtleCommand,
}

#[derive(Debug, Subcommand)]
pub enum TurtleCommand {
    /// List the bundled demo programs.
    List,
    /// Print a demo program to stderr.
    Print {
        demo: String,
        #[clap(long = "format", value_enum, default_value = "turtle")]
        format: ProgramFormat,
    },
    /// Evaluate a demo program, writing primitives to stdout.
    Run {
        demo: String,
        #[clap(long = "seed")]
        seed: Option<u64>,
        #[clap(long = "max-call-depth", default_value_t = turtle::interpreter::DEFAULT_MAX_CALL_DEPTH)]
        max_call_depth: usize,
        #[clap(long = "error-format", value_enum, default_value = "basic")]
        error_format: ErrorFormat,
    },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ProgramFormat {
    Debug,
    Turtle,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ErrorFormat {
    Debug,
    Basic,
}

fn main() -> ExitCode {
    turtle_main().expect("Encountered an error!")
}

fn turtle_main() -> Result<ExitCode> {
    color_eyre::install()?;
    init_tracing();
    let args = CLArgs::parse();
    match args.routine {
        TurtleCommand::List => {
            for name in turtle::demo::DEMO_NAMES {
                println!("{name}");
            }
        }
        TurtleCommand::Print { demo, format } => {
            print(&demo, &format)?;
        }
        TurtleCommand::Run {
            demo,
            seed,
            max_call_depth,
            error_format,
        } => {
            eprintln!("Running {demo:?}...");
            let config = turtle::interpreter::InterpreterConfig {
                seed,
                max_call_depth,
            };
            if !run(&demo, config, &error_format)? {
                return Ok(ExitCode::from(HALTED_EXIT_CODE));
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Installs a subscriber only when `RUST_LOG` asks for one.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn load(demo: &str) -> Result<turtle::ast::Program> {
    turtle::demo::get_demo(demo).ok_or_else(|| eyre!("Unknown demo {demo:?}"))
}

fn print(demo: &str, format: &ProgramFormat) -> Result<()> {
    use turtle::ast::formatter::{DebugFormatter, ProgramFormatter, TurtleFormatter};

    let program = load(demo)?;
    let formatter: Box<dyn ProgramFormatter> = match format {
        ProgramFormat::Debug => Box::new(DebugFormatter),
        ProgramFormat::Turtle => Box::new(TurtleFormatter),
    };
    eprint!("{}", formatter.format(&program));
    Ok(())
}

fn run(
    demo: &str,
    config: turtle::interpreter::InterpreterConfig,
    error_format: &ErrorFormat,
) -> Result<bool> {
    use turtle::interpreter::{
        context::StdioContext,
        formatter::{BasicFormatter, DebugFormatter, ErrorFormatter},
        TreeWalkInterpreter,
    };

    let program = load(demo)?;
    let formatter: Box<dyn ErrorFormatter> = match error_format {
        ErrorFormat::Debug => Box::new(DebugFormatter),
        ErrorFormat::Basic => Box::new(BasicFormatter),
    };
    let mut interpreter =
        TreeWalkInterpreter::new(StdioContext, config).with_error_formatter(formatter);
    // The interpreter already reported the failure on the diagnostic channel.
    Ok(interpreter.run(&program).is_ok())
}
