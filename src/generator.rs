use crate::error::{BfResult, BreachError};
use crate::grid::Grid;
use crate::puzzle::Puzzle;
use crate::targets::{Target, TargetSet};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

/// The byte codes that show up on breach boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
pub enum HexCode {
    #[strum(serialize = "1C")]
    H1C,
    #[strum(serialize = "55")]
    H55,
    #[strum(serialize = "7A")]
    H7A,
    #[strum(serialize = "BD")]
    HBD,
    #[strum(serialize = "E9")]
    HE9,
    #[strum(serialize = "FF")]
    HFF,
}

pub fn default_pool() -> Vec<String> {
    HexCode::iter().map(|c| c.to_string()).collect()
}

#[derive(Debug, Clone)]
pub struct GeneratorParams {
    pub size: usize,
    pub target_count: usize,
    pub min_target_len: usize,
    pub max_target_len: usize,
    pub buffer_len: usize,
    pub pool: Vec<String>,
    pub seed: Option<u64>,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            size: 6,
            target_count: 3,
            min_target_len: 2,
            max_target_len: 4,
            buffer_len: 8,
            pool: default_pool(),
            seed: None,
        }
    }
}

/// Random board and targets drawn uniformly from the token pool.
/// The same seed always yields the same puzzle.
pub fn generate(params: &GeneratorParams) -> BfResult<Puzzle> {
    if params.size == 0 {
        return Err(BreachError::Config("Grid size must be at least 1".to_string()));
    }
    if params.pool.is_empty() {
        return Err(BreachError::Config("Token pool is empty".to_string()));
    }
    if params.min_target_len == 0 || params.min_target_len > params.max_target_len {
        return Err(BreachError::Config(format!(
            "Bad target length range {}..={}",
            params.min_target_len, params.max_target_len
        )));
    }

    let mut rng = match params.seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };
    let pool = &params.pool;
    let pick = |rng: &mut fastrand::Rng| pool[rng.usize(..pool.len())].clone();

    let rows = (0..params.size)
        .map(|_| (0..params.size).map(|_| pick(&mut rng)).collect())
        .collect::<Vec<Vec<String>>>();
    let grid = Grid::new(rows)?;

    let targets = (0..params.target_count)
        .map(|_| {
            let len = rng.usize(params.min_target_len..=params.max_target_len);
            Target::new((0..len).map(|_| pick(&mut rng)).collect())
        })
        .collect::<BfResult<Vec<_>>>()?;
    let targets = TargetSet::new(targets)?;

    debug!(
        "Generated {}x{} puzzle with {} targets (seed {:?})",
        params.size,
        params.size,
        targets.len(),
        params.seed
    );

    Ok(Puzzle {
        grid,
        targets,
        buffer_len: Some(params.buffer_len),
    })
}
