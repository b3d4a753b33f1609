use crate::consts::{DEFAULT_BUFFER_LEN, DEFAULT_PROGRESS_INTERVAL};
use crate::error::BfResult;
use clap::{parser::ValueSource, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::Display;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub display: DisplayParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Number of picks in a walk
    #[arg(short = 'b', long, default_value_t = DEFAULT_BUFFER_LEN)]
    pub buffer_len: usize,
    #[arg(long, default_value_t = 0)]
    pub start_row: usize,
    #[arg(long, default_value_t = 0)]
    pub start_col: usize,
    /// Let the first pick be any cell of the start row
    #[arg(long, default_value_t = false)]
    pub free_start: bool,
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    pub progress_interval: usize,
    /// Wall-clock limit in seconds
    #[arg(short = 'T', long)]
    pub max_time: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            buffer_len: DEFAULT_BUFFER_LEN,
            start_row: 0,
            start_col: 0,
            free_start: false,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            max_time: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DisplayParams {
    /// Show at most this many distinct-score solutions
    #[arg(long)]
    pub top: Option<usize>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> BfResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Copies over every value the user typed on the command line, leaving
    /// defaulted flags alone so file values survive.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(search.buffer_len);
        update_if_present!(search.start_row);
        update_if_present!(search.start_col);
        update_if_present!(search.free_start);
        update_if_present!(search.progress_interval);
        update_if_present!(search.max_time);

        update_if_present!(display.top);
        update_if_present!(display.format);
    }
}
