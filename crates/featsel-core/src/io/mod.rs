//! Reading and writing delimited tables.
pub mod table_reader;
pub mod table_writer;

use std::path::Path;

pub use table_reader::{read_table, read_table_from, TableReaderConfig};
pub use table_writer::{write_table, write_table_to};

/// Tab for `.tsv` files, comma otherwise.
pub fn delimiter_for(path: &Path) -> u8 {
    let is_tsv = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("tsv"))
        .unwrap_or(false);
    if is_tsv {
        b'\t'
    } else {
        b','
    }
}
