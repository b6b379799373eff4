//! StarDict package serialization.
//!
//! One direction of a dictionary is written as three files:
//!
//! ```text
//! <base>.idx   repeated { key bytes, 0x00, offset: u32 BE, length: u32 BE }
//! <base>.dict  entry texts concatenated in index order
//! <base>.ifo   key=value metadata
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use byteorder::{BigEndian, WriteBytesExt};
use chrono::NaiveDate;
use stardicter_config::package::PackageConfig;

use crate::collate;
use crate::convert::TextConverter;
use crate::dictionary::Dictionary;
use crate::entry::format_entry;
use crate::error::{Result, StardictError};

pub const IFO_MAGIC: &str = "StarDict's dict ifo file";
pub const IFO_VERSION: &str = "2.4.2";
/// Every entry is Pango markup
pub const SAME_TYPE_SEQUENCE: &str = "g";

/// What was written for one direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSummary {
    pub base: PathBuf,
    pub word_count: usize,
    pub idx_size: u64,
    pub dict_size: u64,
}

fn with_extension(base: &Path, extension: &str) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

pub struct PackageWriter<'a> {
    converter: &'a TextConverter,
    package: &'a PackageConfig,
    date: NaiveDate,
}

impl<'a> PackageWriter<'a> {
    pub fn new(converter: &'a TextConverter, package: &'a PackageConfig, date: NaiveDate) -> Self {
        Self {
            converter,
            package,
            date,
        }
    }

    /// Write `<base>.idx`, `<base>.dict` and `<base>.ifo`
    pub fn write(&self, base: &Path, name: &str, words: &Dictionary) -> Result<PackageSummary> {
        let mut dict = BufWriter::new(File::create(with_extension(base, "dict"))?);
        let mut idx = BufWriter::new(File::create(with_extension(base, "idx"))?);

        let (word_count, idx_size, dict_size) = self.write_streams(&mut idx, &mut dict, words)?;
        dict.flush()?;
        idx.flush()?;

        let mut ifo = BufWriter::new(File::create(with_extension(base, "ifo"))?);
        ifo.write_all(self.ifo(name, word_count, idx_size).as_bytes())?;
        ifo.flush()?;

        tracing::info!(
            "Wrote {} with {word_count} words ({idx_size} index bytes, {dict_size} data bytes)",
            base.display()
        );

        Ok(PackageSummary {
            base: base.to_path_buf(),
            word_count,
            idx_size,
            dict_size,
        })
    }

    /// Serialize index and data, returns (count, index size, data size)
    pub fn write_streams<I: Write, D: Write>(
        &self,
        idx: &mut I,
        dict: &mut D,
        words: &Dictionary,
    ) -> Result<(usize, u64, u64)> {
        let mut offset: u64 = 0;
        let mut idx_size: u64 = 0;
        let mut count = 0;

        for key in collate::order(words.keys(), self.converter) {
            let entry = self.converter.convert(&format_entry(&words[key]));
            let length = entry.len() as u64;

            if offset + length > u64::from(u32::MAX) {
                return Err(StardictError::TooLarge {
                    key: key.to_string(),
                    limit: u64::from(u32::MAX),
                });
            }

            dict.write_all(&entry)?;

            let key_bytes = self.converter.convert(key);
            idx.write_all(&key_bytes)?;
            idx.write_u8(0)?;
            idx.write_u32::<BigEndian>(offset as u32)?;
            idx.write_u32::<BigEndian>(length as u32)?;

            idx_size += key_bytes.len() as u64 + 9;
            offset += length;
            count += 1;
        }

        Ok((count, idx_size, offset))
    }

    /// Contents of the `.ifo` file
    pub fn ifo(&self, name: &str, word_count: usize, idx_size: u64) -> String {
        let strip = |text: String| self.converter.strip(&text).into_owned();

        let mut ifo = String::new();
        ifo.push_str(IFO_MAGIC);
        ifo.push('\n');
        ifo.push_str(&format!("version={IFO_VERSION}\n"));
        ifo.push_str(&strip(format!("bookname={name}\n")));
        ifo.push_str(&format!("wordcount={word_count}\n"));
        ifo.push_str(&format!("idxfilesize={idx_size}\n"));
        ifo.push_str(&strip(format!("author={}\n", self.package.author)));
        ifo.push_str(&strip(format!("website={}\n", self.package.website)));
        ifo.push_str(&format!("sametypesequence={SAME_TYPE_SEQUENCE}\n"));
        ifo.push_str(&format!("date={}\n", self.date.format("%Y.%m.%d")));
        ifo
    }
}

#[cfg(test)]
mod tests {
    use stardicter_types::Word;

    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    fn dictionary(entries: &[(&str, &str)]) -> Dictionary {
        let mut words = Dictionary::new();
        for (headword, translation) in entries {
            words
                .entry(headword.to_string())
                .or_default()
                .push(Word::new(*headword, *translation));
        }
        words
    }

    #[test]
    fn index_records_are_contiguous() {
        let converter = TextConverter::new(false, false);
        let package = PackageConfig::default();
        let writer = PackageWriter::new(&converter, &package, date());

        let words = dictionary(&[("b", "yy"), ("a", "x"), ("c", "zzz")]);
        let (mut idx, mut dict) = (Vec::new(), Vec::new());
        let (count, idx_size, dict_size) = writer.write_streams(&mut idx, &mut dict, &words).unwrap();

        assert_eq!(count, 3);
        assert_eq!(idx_size, idx.len() as u64);
        assert_eq!(dict_size, dict.len() as u64);

        let mut expected = Vec::new();
        expected.extend_from_slice(b"a\0\0\0\0\0\0\0\0\x07");
        expected.extend_from_slice(b"b\0\0\0\0\x07\0\0\0\x08");
        expected.extend_from_slice(b"c\0\0\0\0\x0f\0\0\0\x09");
        assert_eq!(idx, expected);
        assert_eq!(dict, b"\n    x\n\n    yy\n\n    zzz\n");
    }

    #[test]
    fn ifo_layout() {
        let converter = TextConverter::new(false, false);
        let package = PackageConfig::default();
        let writer = PackageWriter::new(&converter, &package, date());

        assert_eq!(
            writer.ifo("Test <b>dict</b>", 3, 42),
            "StarDict's dict ifo file\n\
             version=2.4.2\n\
             bookname=Test <b>dict</b>\n\
             wordcount=3\n\
             idxfilesize=42\n\
             author=Stardicter\n\
             website=https://cihar.com/software/slovnik/\n\
             sametypesequence=g\n\
             date=2024.03.09\n"
        );
    }

    #[test]
    fn ifo_strips_tags_in_notags_mode() {
        let converter = TextConverter::new(false, true);
        let package = PackageConfig::default();
        let writer = PackageWriter::new(&converter, &package, date());

        assert!(writer.ifo("Test <b>dict</b>", 0, 0).contains("bookname=Test dict\n"));
    }

    #[test]
    fn writes_three_files() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("aa-bb");
        let converter = TextConverter::new(false, false);
        let package = PackageConfig::default();
        let writer = PackageWriter::new(&converter, &package, date());

        let summary = writer
            .write(&base, "Generic", &dictionary(&[("dog", "pes")]))
            .unwrap();

        assert_eq!(summary.word_count, 1);
        let idx = std::fs::read(dir.path().join("aa-bb.idx")).unwrap();
        let dict = std::fs::read(dir.path().join("aa-bb.dict")).unwrap();
        let ifo = std::fs::read_to_string(dir.path().join("aa-bb.ifo")).unwrap();

        assert_eq!(idx.len() as u64, summary.idx_size);
        assert_eq!(dict.len() as u64, summary.dict_size);
        assert!(ifo.contains(&format!("idxfilesize={}\n", idx.len())));
        assert!(ifo.contains("wordcount=1\n"));
    }
}
