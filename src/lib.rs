//! Institution CSV statement parsing.
//!
//! Each supported institution is a [`formats::Format`] carrying its exact
//! header and a row mapper. [`parser::CsvParser`] tokenizes the file, rejects
//! it outright on a header mismatch, and otherwise maps every data row on its
//! own, so one bad row never hides the good ones.

pub mod error;
pub mod fields;
pub mod fmt;
pub mod formats;
pub mod header;
pub mod ids;
pub mod models;
pub mod parser;
pub mod processor;
pub mod review;
pub mod settings;
pub mod tokenizer;
