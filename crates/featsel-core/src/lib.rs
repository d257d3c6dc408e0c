//! featsel-core: mutual-information driven feature selection over tabular data.
//!
//! This crate provides a small table model with a compressed (grouped-row)
//! form, mutual-information scorers and a bounded scorer cache, three
//! selection strategies (hill climbing, incremental and max-MI), and the
//! reconstruction of the selected table with forced features and the target
//! column put back in place.
//!
//! `feature_selection::feature_selection` is the entry point; `io` reads and
//! writes delimited tables for the command line tool.
pub mod config;
pub mod error;
pub mod feature_selection;
pub mod instance;
pub mod io;
pub mod optimization;
pub mod reconstruction;
pub mod scoring;
pub mod stats;
pub mod table;
