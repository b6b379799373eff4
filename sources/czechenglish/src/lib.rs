use stardicter_core::Source;

/// Prefix of the export timestamp in the data header
const DATE_HEADER: &str = "# Date:";

/// GNU/FDL English-Czech dictionary
pub struct CzechEnglishSource;

impl CzechEnglishSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CzechEnglishSource {
    fn default() -> Self {
        Self::new()
    }
}

impl Source for CzechEnglishSource {
    fn name(&self) -> &str {
        "GNU/FDL Anglicko-Český slovník"
    }

    fn source_lang(&self) -> &str {
        "en"
    }

    fn target_lang(&self) -> &str {
        "cs"
    }

    fn url(&self) -> Option<&str> {
        Some("https://www.svobodneslovniky.cz/")
    }

    fn license(&self) -> &str {
        "GNU/FDL"
    }

    fn download_url(&self) -> Option<&str> {
        Some("https://www.svobodneslovniky.cz/data/en-cs.txt.gz")
    }

    fn download_gzip(&self) -> bool {
        true
    }

    /// The export date changes daily even when no word did
    fn is_data_line(&self, line: &str) -> bool {
        !line.starts_with(DATE_HEADER)
    }
}
