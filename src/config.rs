use crate::error::BoggleResult;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub rules: ScoringRules,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SearchParams {
    /// Fold ASCII case when comparing word letters to cells
    #[arg(long, default_value_t = false)]
    pub ignore_case: bool,
}

/// Points awarded to a found word by its length.
#[derive(Args, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    #[arg(long, default_value_t = 11)]
    pub points_eight_plus: u32,
    #[arg(long, default_value_t = 5)]
    pub points_seven: u32,
    #[arg(long, default_value_t = 3)]
    pub points_six: u32,
    #[arg(long, default_value_t = 2)]
    pub points_five: u32,
    #[arg(long, default_value_t = 1)]
    pub points_four: u32,

    // 3-letter words only count on boards with exactly this many rows
    #[arg(long, default_value_t = 1)]
    pub points_three: u32,
    #[arg(long, default_value_t = 4)]
    pub three_letter_rows: usize,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            points_eight_plus: 11,
            points_seven: 5,
            points_six: 3,
            points_five: 2,
            points_four: 1,
            points_three: 1,
            three_letter_rows: 4,
        }
    }
}

impl ScoringRules {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> BoggleResult<Self> {
        let path = path.as_ref();
        debug!("Reading scoring rules from {}", path.display());
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overlays only the rule options the user actually typed.
    pub fn merge_from_cli(&mut self, cli_rules: &ScoringRules, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli_rules.$field;
                }
            };
        }

        update_if_present!(points_eight_plus);
        update_if_present!(points_seven);
        update_if_present!(points_six);
        update_if_present!(points_five);
        update_if_present!(points_four);
        update_if_present!(points_three);
        update_if_present!(three_letter_rows);
    }
}
