use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use stardicter_config::Config;
use stardicter_config::convert::ConvertConfig;
use stardicter_config::package::PackageConfig;

use crate::cache::ChecksumCache;
use crate::checksum::{self, ChangeDetector};
use crate::convert::TextConverter;
use crate::dictionary::{Aggregator, Dictionaries};
use crate::error::Result;
use crate::fetch;
use crate::package::{PackageSummary, PackageWriter};
use crate::readme;
use crate::source::Source;

/// Converts the data of one source into StarDict packages
pub struct DictBuilder {
    source: Box<dyn Source>,
    convert: ConvertConfig,
    package: PackageConfig,
    converter: TextConverter,
    data: String,
    date: NaiveDate,
}

impl DictBuilder {
    pub fn new(source: Box<dyn Source>, config: &Config, data: String) -> Self {
        Self {
            converter: TextConverter::from_config(&config.convert),
            source,
            convert: config.convert.clone(),
            package: config.package.clone(),
            data,
            date: Local::now().date_naive(),
        }
    }

    /// Date stamped into `.ifo` files, today by default
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn source(&self) -> &dyn Source {
        self.source.as_ref()
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn source_lang(&self) -> &str {
        self.convert
            .source
            .as_deref()
            .unwrap_or_else(|| self.source.source_lang())
    }

    pub fn target_lang(&self) -> &str {
        self.convert
            .target
            .as_deref()
            .unwrap_or_else(|| self.source.target_lang())
    }

    pub fn bidirectional(&self) -> bool {
        self.convert
            .bidirectional
            .unwrap_or_else(|| self.source.bidirectional())
    }

    /// Base file name of the package for one direction
    pub fn filename(&self, forward: bool) -> String {
        let (from, to) = if forward {
            (self.source_lang(), self.target_lang())
        } else {
            (self.target_lang(), self.source_lang())
        };
        format!(
            "{}{from}-{to}{}",
            self.source.file_prefix(),
            self.convert.suffix()
        )
    }

    /// Parse the source data into forward and reverse dictionaries
    pub fn parse(&self) -> Dictionaries {
        tracing::info!("Parsing {} dictionary", self.source.name());
        Aggregator::new(
            self.source.as_ref(),
            self.bidirectional(),
            self.convert.max_key_chars,
        )
        .aggregate(&self.data)
    }

    pub fn checksum(&self) -> String {
        checksum::compute(self.source.as_ref(), &self.data)
    }

    pub fn change_detector(&self) -> ChangeDetector {
        let key = ChangeDetector::cache_key(&self.convert.keyprefix, &self.filename(true));
        ChangeDetector::new(key, self.checksum())
    }

    /// Source differs from the last saved run
    pub fn was_changed(&self, cache: &ChecksumCache) -> bool {
        self.change_detector().was_changed(cache)
    }

    pub fn save_checksum(&self, cache: &mut ChecksumCache) -> Result<()> {
        self.change_detector().save(cache)
    }

    /// Write README and packages for all directions into `directory`
    pub fn write_dict(
        &self,
        dictionaries: &Dictionaries,
        directory: &Path,
    ) -> Result<Vec<PackageSummary>> {
        fs::write(
            directory.join("README"),
            readme::render(
                self.source.as_ref(),
                &self.package.website,
                &dictionaries.description,
            ),
        )?;

        let writer = PackageWriter::new(&self.converter, &self.package, self.date);
        let mut written = vec![writer.write(
            &directory.join(self.filename(true)),
            &self.source.display_name(true),
            &dictionaries.forward,
        )?];

        if self.bidirectional() {
            written.push(writer.write(
                &directory.join(self.filename(false)),
                &self.source.display_name(false),
                &dictionaries.reverse,
            )?);
        }

        Ok(written)
    }

    /// File name used for the archived source copy
    pub fn source_filename(&self) -> Option<String> {
        let url = self.source.download_url()?;
        let name = url.rsplit('/').next().filter(|name| !name.is_empty())?;
        Some(name.strip_suffix(".gz").unwrap_or(name).to_string())
    }

    /// Archive the source data in its original charset
    pub fn write_source(&self, directory: &Path) -> Result<Option<PathBuf>> {
        let Some(name) = self.source_filename() else {
            tracing::warn!("{} has no download location, not archiving source", self.source.name());
            return Ok(None);
        };

        let path = directory.join(name);
        fs::write(&path, fetch::encode(&self.data, self.source.download_charset())?)?;
        tracing::info!("Wrote source copy to {}", path.display());
        Ok(Some(path))
    }
}
