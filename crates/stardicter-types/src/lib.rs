pub mod category;
pub mod word;

pub use category::{Category, Classified, IRREGULAR_MARKER};
pub use word::Word;
