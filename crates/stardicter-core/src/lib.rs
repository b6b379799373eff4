pub mod builder;
pub mod cache;
pub mod checksum;
pub mod collate;
pub mod convert;
pub mod deaccent;
pub mod dictionary;
pub mod entry;
pub mod error;
pub mod fetch;
pub mod package;
pub mod readme;
pub mod source;

#[cfg(test)]
mod tests;

pub use builder::DictBuilder;
pub use cache::ChecksumCache;
pub use checksum::ChangeDetector;
pub use dictionary::{Dictionaries, Dictionary};
pub use error::{Result, StardictError};
pub use fetch::FetchError;
pub use source::{GenericSource, Source};
