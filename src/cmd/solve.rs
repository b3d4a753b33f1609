use crate::reports;
use breachforge::config::{Config, OutputFormat};
use breachforge::error::BfResult;
use breachforge::puzzle::Puzzle;
use breachforge::search::{ProgressCallback, SearchOptions, Searcher};
use breachforge::selector::select_top;
use clap::{ArgMatches, Args};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// Puzzle file (.json or text), `-` for stdin; the built-in sample when omitted
    pub puzzle: Option<PathBuf>,

    #[command(flatten)]
    pub config: Config,
}

struct CliLogger;
impl ProgressCallback for CliLogger {
    fn on_progress(&self, collected: usize, paths_examined: u64) -> bool {
        info!("Now have {} good chains ({} checked)", collected, paths_examined);
        true
    }
}

pub fn run(args: &SolveArgs, config_file: Option<&Path>, matches: &ArgMatches) -> BfResult<()> {
    let puzzle = match &args.puzzle {
        Some(path) => {
            info!("📂 Loading Puzzle: {}", path.display());
            Puzzle::load_from_file(path)?
        }
        None => {
            info!("📂 No puzzle given. Using the built-in sample.");
            Puzzle::sample()
        }
    };

    // defaults < config file < puzzle buffer < typed flags
    let mut config = match config_file {
        Some(path) => {
            info!("⚙️  Loading Config from: {}", path.display());
            Config::load_from_file(path)?
        }
        None => Config::default(),
    };
    if let Some(n) = puzzle.buffer_len {
        config.search.buffer_len = n;
    }
    config.merge_from_cli(&args.config, matches);

    let options = SearchOptions::from(&config);
    let searcher = Searcher::new(&puzzle.grid, &puzzle.targets, options)?;

    info!(
        "🔎 Searching {}x{} grid for {} targets with a buffer of {}",
        puzzle.grid.size(),
        puzzle.grid.size(),
        puzzle.targets.len(),
        config.search.buffer_len
    );
    let report = searcher.run(&CliLogger);
    info!("⏱️  Search took {:.2?}", report.elapsed);

    let solved = report.is_solved();
    let interrupted = report.interrupted;
    let paths_examined = report.paths_examined;
    let collected = report.outcome.candidates().len();
    let best = select_top(report.outcome.into_candidates(), config.display.top);

    match config.display.format {
        OutputFormat::Json => reports::print_json(&reports::JsonReport {
            solved,
            interrupted,
            paths_examined,
            collected,
            solutions: &best,
        })?,
        OutputFormat::Table => {
            if solved {
                println!("Full solution found after checking {} chains", paths_examined);
            } else {
                println!(
                    "Only partial solution(s) found after checking {} chains",
                    paths_examined
                );
            }
            if interrupted {
                println!("Search was interrupted before the space was exhausted.");
            }
            println!(
                "Printing solutions (filtered from a list of {})",
                collected
            );
            reports::print_board("Puzzle", &puzzle.grid);
            reports::print_summary(&best, &puzzle.targets);
            for candidate in &best {
                reports::print_solution(candidate, puzzle.grid.size());
            }
        }
    }

    Ok(())
}
