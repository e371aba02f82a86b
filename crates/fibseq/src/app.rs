//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::info;

use fibseq_core::{parse_index, DefaultFactory, FibError, FibIterator, MAX_INDEX};
use fibseq_seq::{filter_seq, map_seq, reduce_seq};

use crate::completion::generate_completion;
use crate::config::{AppConfig, Commands, FibArgs};
use crate::orchestrator::{
    analyze_comparison_results, execute_calculations, get_calculators_to_run, ResultPresenter,
};
use crate::output::write_to_file;
use crate::presenter::CLIResultPresenter;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);

    match &config.command {
        Commands::Fib(args) => run_fib(args, &presenter),
        Commands::Range { start, end } => {
            let end = check_index(*end)?;
            for (n, value) in FibIterator::terms(*start, end)? {
                presenter.present_term(n, &value);
            }
            Ok(())
        }
        Commands::Filter { below, values } => {
            let kept = filter_seq(values, |v, _, _| v < below);
            presenter.present_sequence("filter", &kept);
            Ok(())
        }
        Commands::Map { scale, values } => {
            let scale = i128::from(*scale);
            let mapped = map_seq(values, |v, _, _| i128::from(*v) * scale);
            presenter.present_sequence("map", &mapped);
            Ok(())
        }
        Commands::Reduce { initial, values } => {
            // Widen so sums of i64 inputs cannot overflow.
            let widened = map_seq(values, |v, _, _| i128::from(*v));
            let total = reduce_seq(&widened, |acc, v| acc + v, initial.map(i128::from))?;
            presenter.present_scalar("reduce", &total);
            Ok(())
        }
        Commands::Completion { shell } => {
            let mut cmd = <AppConfig as clap::CommandFactory>::command();
            generate_completion(&mut cmd, *shell, &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Reject indices the front end will not compute.
fn check_index(n: u64) -> Result<u64, FibError> {
    if n > MAX_INDEX {
        return Err(FibError::LimitExceeded {
            n,
            limit: MAX_INDEX,
        });
    }
    Ok(n)
}

fn run_fib(args: &FibArgs, presenter: &CLIResultPresenter) -> Result<()> {
    let n = check_index(parse_index(&args.n)?)?;
    let opts = args.options()?;

    let factory = DefaultFactory::new();
    let calculators = get_calculators_to_run(&args.algo, &factory)?;
    info!(n, algo = %args.algo, "starting calculation");

    let results = execute_calculations(&calculators, n, &opts);

    for result in &results {
        match &result.outcome {
            Ok(value) => {
                presenter.present_result(
                    &result.algorithm,
                    n,
                    value,
                    result.duration,
                    args.details,
                );
            }
            Err(e) if results.len() > 1 => {
                presenter.present_error(&format!("{}: {e}", result.algorithm));
            }
            Err(_) => {}
        }
    }

    if results.len() > 1 {
        presenter.present_comparison(&results);
        analyze_comparison_results(&results)?;
    }

    let value = match results.iter().find_map(|r| r.outcome.as_ref().ok()) {
        Some(value) => value,
        None => {
            // Every strategy failed: surface the first failure.
            let first = results
                .iter()
                .find_map(|r| r.outcome.clone().err())
                .unwrap_or_else(|| FibError::Config("no calculators selected".into()));
            return Err(first.into());
        }
    };

    if let Some(path) = &args.output {
        write_to_file(path, value).with_context(|| format!("writing result to {path}"))?;
    }

    Ok(())
}
