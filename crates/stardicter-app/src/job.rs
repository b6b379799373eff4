use std::path::Path;

use anyhow::Context;
use stardicter_config::Config;
use stardicter_core::fetch;
use stardicter_core::package::PackageSummary;
use stardicter_core::{ChecksumCache, DictBuilder, Source};

pub enum Outcome {
    Unchanged,
    Written(Vec<PackageSummary>),
}

/// Build settings shared by every dictionary of one invocation
pub struct Job<'a> {
    pub config: &'a Config,
    pub directory: &'a Path,
    pub file: Option<&'a Path>,
    pub force: bool,
    pub write_source: bool,
}

impl Job<'_> {
    /// Fetch, convert and record the checksum of one dictionary
    pub async fn run(
        &self,
        source: Box<dyn Source>,
        client: &reqwest::Client,
        cache: &mut ChecksumCache,
    ) -> anyhow::Result<Outcome> {
        let data = match self.file {
            Some(path) => fetch::read_file(path, source.download_charset())
                .with_context(|| format!("Failed to read {}", path.display()))?,
            None => source
                .download(client)
                .await
                .with_context(|| format!("Failed to download {}", source.name()))?,
        };

        let builder = DictBuilder::new(source, self.config, data);

        if !self.force && !builder.was_changed(cache) {
            return Ok(Outcome::Unchanged);
        }

        let dictionaries = builder.parse();
        let written = builder
            .write_dict(&dictionaries, self.directory)
            .with_context(|| format!("Failed to write {}", builder.filename(true)))?;

        if self.write_source {
            builder.write_source(self.directory)?;
        }

        builder
            .save_checksum(cache)
            .with_context(|| format!("Failed to save checksum to {}", cache.path().display()))?;

        Ok(Outcome::Written(written))
    }
}
