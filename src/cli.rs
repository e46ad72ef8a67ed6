use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use solver24::solver::search::is_target;
use solver24::{Expression, Solver24, validate_numbers};

/// Highest `--max-card` accepted; the survey holds every hand in memory
pub const MAX_SURVEY_CARD: i64 = 100;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// solver24 - Make 24 from four numbers with + - * /
#[derive(Parser, Debug)]
#[command(name = "solver24")]
#[command(about = "Decide whether four numbers can make 24 and show how")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print an expression over the numbers that equals 24
    Solve {
        /// The four numbers
        #[arg(num_args = 4, required = true, allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },
    /// Print whether the numbers can make 24
    Check {
        /// The four numbers
        #[arg(num_args = 4, required = true, allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },
    /// Evaluate an expression and tell whether it equals 24
    Verify {
        /// Expression such as "((8 + 4) * 3) - 12"
        expression: String,
    },
    /// Count solvable hands of four cards from 1 to MAX_CARD
    Survey {
        /// Highest card value (1 to 100)
        #[arg(
            short,
            long,
            default_value_t = 13,
            value_parser = clap::value_parser!(u32).range(1..=MAX_SURVEY_CARD)
        )]
        max_card: u32,
    },
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub command: Command,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    if let Command::Solve { numbers } | Command::Check { numbers } = &args.command {
        validate_numbers(numbers).context("Invalid numbers")?;
    }

    Ok(CliConfig {
        command: args.command,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logger")?;
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = Solver24::new();

    match config.command {
        Command::Solve { numbers } => {
            info!("Searching for 24 using {:?}", numbers);
            match solver.get_solution(&numbers) {
                Some(expr) => println!("{}", expr),
                None => {
                    warn!("No matching expression found");
                    println!("No solution.");
                }
            }
        }
        Command::Check { numbers } => {
            println!("{}", solver.has_solution(&numbers));
        }
        Command::Verify { expression } => {
            let value = Expression::parse(&expression)
                .context("Could not parse expression")?
                .evaluate()
                .context("Could not evaluate expression")?;
            let verdict = if is_target(value) { "24" } else { "not 24" };
            println!("{} = {} ({})", expression.trim(), value, verdict);
        }
        Command::Survey { max_card } => {
            let report = solver.survey(max_card);
            println!(
                "{} of {} hands solvable ({:.1}%)",
                report.solvable,
                report.total,
                report.solvable_ratio() * 100.0
            );
            for hand in &report.unsolvable {
                println!("  no solution: {:?}", hand);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_solve_command() {
        let args = CliArgs::try_parse_from(["solver24", "solve", "8", "4", "3", "12"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(matches!(args.log_level, LogLevel::Warn));
            match args.command {
                Command::Solve { numbers } => assert_eq!(numbers, vec![8.0, 4.0, 3.0, 12.0]),
                other => panic!("unexpected command {:?}", other),
            }
        }
    }

    #[test]
    fn test_parse_negative_numbers() {
        let args = CliArgs::try_parse_from(["solver24", "check", "-1", "5", "5", "0"]);
        assert!(args.is_ok());
        if let Ok(CliArgs {
            command: Command::Check { numbers },
            ..
        }) = args
        {
            assert_eq!(numbers, vec![-1.0, 5.0, 5.0, 0.0]);
        }
    }

    #[test]
    fn test_wrong_number_count_rejected() {
        let args = CliArgs::try_parse_from(["solver24", "solve", "1", "2", "3"]);
        assert!(args.is_err());
    }

    #[test]
    fn test_survey_default_and_log_level() {
        let args = CliArgs::try_parse_from(["solver24", "survey", "--log-level", "debug"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(matches!(args.log_level, LogLevel::Debug));
            assert!(matches!(args.command, Command::Survey { max_card: 13 }));
        }

        let args = CliArgs::try_parse_from(["solver24", "survey", "-m", "6"]);
        assert!(matches!(
            args.map(|a| a.command),
            Ok(Command::Survey { max_card: 6 })
        ));
    }

    #[test]
    fn test_survey_max_card_is_bounded() {
        assert!(CliArgs::try_parse_from(["solver24", "survey", "-m", "0"]).is_err());
        assert!(CliArgs::try_parse_from(["solver24", "survey", "-m", "101"]).is_err());
        assert!(CliArgs::try_parse_from(["solver24", "survey", "-m", "4000000000"]).is_err());

        let args = CliArgs::try_parse_from(["solver24", "survey", "-m", "100"]);
        assert!(matches!(
            args.map(|a| a.command),
            Ok(Command::Survey { max_card: 100 })
        ));
    }

    #[test]
    fn test_verify_command() {
        let args = CliArgs::try_parse_from(["solver24", "verify", "((8 + 4) * 3) - 12"]);
        assert!(matches!(
            args.map(|a| a.command),
            Ok(Command::Verify { expression }) if expression == "((8 + 4) * 3) - 12"
        ));
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
