use breachforge::consts::DEFAULT_BUFFER_LEN;
use breachforge::error::BfResult;
use breachforge::generator::{self, GeneratorParams};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(long, default_value_t = 6)]
    pub size: usize,

    #[arg(long, default_value_t = 3)]
    pub targets: usize,

    #[arg(long, default_value_t = 2)]
    pub min_len: usize,

    #[arg(long, default_value_t = 4)]
    pub max_len: usize,

    #[arg(short = 'b', long, default_value_t = DEFAULT_BUFFER_LEN)]
    pub buffer_len: usize,

    /// Comma separated tokens to draw from (default: 1C,55,7A,BD,E9,FF)
    #[arg(long, value_delimiter = ',')]
    pub pool: Vec<String>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Write the puzzle here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &GenerateArgs) -> BfResult<()> {
    let pool = if args.pool.is_empty() {
        generator::default_pool()
    } else {
        args.pool
            .iter()
            .map(|t| t.trim().to_ascii_uppercase())
            .collect()
    };

    let params = GeneratorParams {
        size: args.size,
        target_count: args.targets,
        min_target_len: args.min_len,
        max_target_len: args.max_len,
        buffer_len: args.buffer_len,
        pool,
        seed: args.seed,
    };

    let puzzle = generator::generate(&params)?;
    let json = serde_json::to_string_pretty(&puzzle.to_file_data())?;

    match &args.output {
        Some(path) => {
            fs::write(path, json)?;
            info!("💾 Puzzle written to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
