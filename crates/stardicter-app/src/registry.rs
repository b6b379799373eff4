use stardicter_core::{GenericSource, Source};
use stardicter_source_czechenglish::CzechEnglishSource;

/// Names accepted on the command line
pub const DICTIONARIES: &[&str] = &["czechenglish", "generic"];

pub fn create(name: &str) -> Option<Box<dyn Source>> {
    match name {
        "czechenglish" => Some(Box::new(CzechEnglishSource::new())),
        "generic" => Some(Box::new(GenericSource::new())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_resolves() {
        for name in DICTIONARIES {
            assert!(create(name).is_some(), "{name} not registered");
        }
        assert!(create("klingon").is_none());
    }
}
