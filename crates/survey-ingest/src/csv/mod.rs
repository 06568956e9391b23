//! Delimiter-separated line tokenizing.

mod tokenizer;

pub use tokenizer::{DEFAULT_DELIMITER, tokenize_default, tokenize_line};
