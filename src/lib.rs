#![allow(clippy::module_inception)]

use std::rc::Rc;

use colored::*;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

pub use crate::lexer::lexer::tokenize;

/// Byte offset into a named source.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Returns the 1-based line number, the text of the line, and the byte
/// column of `position` within it.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos >= content.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        start = end;
    }

    None
}

/// Renders a caret diagnostic for `error` against the source it was raised on.
pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: message
        -> main.c
           |
        20 | int a = @;
           | --------^
    */

    let position = error.get_position();
    let mut rendered = String::new();

    let header = "Error:".red().bold();
    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("{} {}\n", header, error.get_error_name()));
    } else {
        rendered.push_str(&format!(
            "{} {} ({})\n",
            header,
            error.get_error_name(),
            error.get_tip()
        ));
    }
    rendered.push_str(&format!("-> {}\n", position.1));

    let (line, line_text, line_pos) = match get_line_at_position(source, position.0) {
        Some(found) => found,
        None => return rendered,
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    rendered.push_str(&format!(
        "{} | {}\n",
        line_string,
        line_text_removed.trim_end()
    ));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    rendered
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.bytes().take_while(|byte| *byte == b' ').count();

    (String::from(&string[start..]), start)
}
