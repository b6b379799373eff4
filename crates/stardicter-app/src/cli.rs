use std::path::PathBuf;

use clap::Parser;
use stardicter_config::Config;

/// Convert free bilingual word lists into StarDict dictionaries
#[derive(Debug, Parser)]
#[command(name = "stardicter", version)]
pub struct Args {
    /// Dictionaries to build
    #[arg(value_name = "DICT")]
    pub dictionaries: Vec<String>,

    /// List known dictionaries and exit
    #[arg(long)]
    pub list: bool,

    /// Transliterate output to ASCII
    #[arg(long)]
    pub ascii: bool,

    /// Strip markup from entries
    #[arg(long)]
    pub notags: bool,

    /// Prefix for checksum cache keys
    #[arg(long, value_name = "PREFIX")]
    pub keyprefix: Option<String>,

    /// Override source language code
    #[arg(long, value_name = "LANG")]
    pub source: Option<String>,

    /// Override target language code
    #[arg(long, value_name = "LANG")]
    pub target: Option<String>,

    /// Build only the forward direction
    #[arg(long)]
    pub unidirectional: bool,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// Read source data from a local file instead of downloading it
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Build even when the source did not change
    #[arg(long)]
    pub force: bool,

    /// Also store a copy of the source file
    #[arg(long)]
    pub write_source: bool,

    /// Checksum cache location
    #[arg(long, value_name = "PATH")]
    pub cache: Option<PathBuf>,

    /// JSON config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log as JSON lines
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Command line flags applied over `config`
    pub fn apply(&self, mut config: Config) -> Config {
        config.convert.ascii |= self.ascii;
        config.convert.notags |= self.notags;
        if let Some(keyprefix) = &self.keyprefix {
            config.convert.keyprefix = keyprefix.clone();
        }
        if self.source.is_some() {
            config.convert.source = self.source.clone();
        }
        if self.target.is_some() {
            config.convert.target = self.target.clone();
        }
        if self.unidirectional {
            config.convert.bidirectional = Some(false);
        }
        if let Some(cache) = &self.cache {
            config.cache.path = cache.clone();
        }
        config
    }
}
