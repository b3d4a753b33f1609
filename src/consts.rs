/// Separator used when joining tokens for run matching.
/// Tokens containing it are rejected at load time.
pub const TOKEN_DELIMITER: char = ';';

/// Width of the score bitmask. One bit per target.
pub const MAX_TARGETS: usize = u32::BITS as usize;

/// Default number of picks in a walk.
pub const DEFAULT_BUFFER_LEN: usize = 8;

/// Fire the progress hook every this many collected candidates.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 10_000;

/// How often (in examined paths) the wall-clock limit is polled.
pub const TIME_CHECK_INTERVAL: u64 = 1024;

/// Placeholder for cells a walk never visits in the matrix rendering.
pub const UNVISITED_MARK: &str = "xx";
