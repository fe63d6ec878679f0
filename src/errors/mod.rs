//! Error types produced while scanning.
//!
//! Every condition that stops the lexer is returned to the caller as an
//! [`errors::Error`] carrying the source position it happened at:
//!
//! - Unterminated string literals
//! - Characters no token can start with
//! - Allocation failures while growing the token buffer or a lexeme

pub mod errors;
