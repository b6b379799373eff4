
use std::path::Path;

use byteorder::{BigEndian, ByteOrder};

/// One decoded `.idx` record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRecord {
    pub key: Vec<u8>,
    pub offset: u32,
    pub length: u32,
}

/// Decode a whole `.idx` file
pub fn read_index(path: &Path) -> Vec<IndexRecord> {
    let data = std::fs::read(path).unwrap();
    let mut records = Vec::new();
    let mut rest = data.as_slice();

    while !rest.is_empty() {
        let end = rest.iter().position(|b| *b == 0).expect("key terminator");
        let key = rest[..end].to_vec();
        let offset = BigEndian::read_u32(&rest[end + 1..end + 5]);
        let length = BigEndian::read_u32(&rest[end + 5..end + 9]);
        records.push(IndexRecord { key, offset, length });
        rest = &rest[end + 9..];
    }

    records
}
