use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use coinchange::{
    coin_usage, compare_with, parse_denominations, solve_dp_with, solve_greedy_with,
    validate_amount, DenominationStats, Locale, Preset, Report, SolverConfig, Verdict,
    AMOUNT_RANGE,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Both,
    Dp,
    Greedy,
}

/// Compare dynamic programming and greedy coin change.
#[derive(Parser, Debug)]
#[command(name = "coin-change")]
struct Args {
    /// Target amount
    #[arg(short, long)]
    amount: usize,

    /// Comma-separated coin values
    #[arg(short, long, default_value = "1,5,10,25", conflicts_with = "preset")]
    coins: String,

    /// Named coin system: us, euro or uk
    #[arg(short, long)]
    preset: Option<Preset>,

    #[arg(long, value_enum, default_value_t = Algorithm::Both)]
    algorithm: Algorithm,

    /// Trace language: en or id
    #[arg(long, default_value = "en")]
    locale: Locale,

    /// Print every solver step
    #[arg(long)]
    trace: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> coinchange::Result<()> {
    let coins = match args.preset {
        Some(preset) => preset.denominations(),
        None => parse_denominations(&args.coins)?,
    };
    let amount = validate_amount(args.amount, &AMOUNT_RANGE)?;
    let config = SolverConfig {
        locale: args.locale,
        ..SolverConfig::default()
    };

    if let Some(stats) = DenominationStats::new(&coins, amount) {
        println!(
            "Amount {} | {} denominations {:?} | largest {} | smallest {}",
            stats.amount, stats.denominations, coins, stats.largest, stats.smallest
        );
    }

    match args.algorithm {
        Algorithm::Both => {
            let comparison = compare_with(&coins, amount, &config)?;
            print_report("Dynamic Programming", &comparison.dp, args.trace, &config);
            print_report("Greedy", &comparison.greedy, args.trace, &config);
            match comparison.verdict() {
                Verdict::GreedyOptimal => println!("Greedy matches the optimum."),
                Verdict::GreedySuboptimal { extra_coins } => {
                    println!("Greedy uses {extra_coins} more coin(s) than the optimum.")
                }
                Verdict::GreedyFailed => println!("Greedy fails where a solution exists."),
                Verdict::Unsolvable => println!("The amount cannot be formed."),
            }
        }
        Algorithm::Dp => {
            let report = solve_dp_with(&coins, amount, &config)?;
            print_report("Dynamic Programming", &report, args.trace, &config);
        }
        Algorithm::Greedy => {
            let report = solve_greedy_with(&coins, amount, &config)?;
            print_report("Greedy", &report, args.trace, &config);
        }
    }
    Ok(())
}

fn print_report(name: &str, report: &Report, show_trace: bool, config: &SolverConfig) {
    println!();
    match report.count() {
        Some(count) => {
            println!("{name}: {count} coin(s) {:?}", report.coins());
            for (coin, used) in coin_usage(report.coins()).iter().rev() {
                println!("  {coin:>6} x {used}");
            }
        }
        None => println!("{name}: no solution"),
    }
    if show_trace {
        for line in report.log_lines(config.locale) {
            println!("  {line}");
        }
    }
}
