pub mod nofluff_parser;

pub use nofluff_parser::NoFluffParser;
