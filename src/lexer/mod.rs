//! Lexical analysis for the C-like source language.
//!
//! The lexer makes a single forward pass over the source and emits every
//! character as part of some token, so concatenating the lexemes of a
//! successful scan reproduces the input. It handles:
//!
//! - Punctuation and one- or two-character operators
//! - Runs of spaces, and individual tabs, carriage returns and newlines
//! - String, number, identifier and preprocessor-directive sub-scanners
//! - Reclassification of reserved words through the keyword table

pub mod keywords;
pub mod lexer;
pub mod tokens;
