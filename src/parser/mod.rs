// file: src/parser/mod.rs
// version: 1.0.0
// guid: 8c3e6da7-ae7a-4c3b-9d97-99be2bc2732d

//! Indentation tree parser for `pcs resource config` output
//!
//! Each line has the shape `name:` or `name:value`, and nesting is expressed
//! only through leading whitespace. A line with a value is a leaf; a line
//! without one opens a branch whose children are the following, deeper
//! indented lines.
//!
//! ```
//! use pcs_resource_agent::parser::{parse, Section};
//!
//! let tree = parse("foo:\n bar:baz").unwrap();
//! let foo = &tree["foo"];
//! assert_eq!(foo.lookup(&["bar"]).and_then(Section::as_leaf), Some("baz"));
//! ```

pub mod section;

pub use section::{ResourceTree, Section};

use crate::error::ParseError;

/// A non-blank input line with its original 1-based number.
#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    number: usize,
    indent: usize,
    text: &'a str,
}

/// Number of leading whitespace characters in `line`.
pub fn indent_of(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// A branch whose children are still being collected.
struct Frame<'a> {
    depth: usize,
    name: &'a str,
    tree: ResourceTree,
}

/// Parse a complete configuration dump into a tree.
///
/// Blank lines are skipped, so the trailing newline `pcs` prints is harmless.
/// Any inconsistency aborts the whole parse; there is no partial result.
///
/// Open branches live on an explicit stack rather than the call stack, so
/// nesting depth is bounded only by memory.
pub fn parse(text: &str) -> Result<ResourceTree, ParseError> {
    let lines: Vec<Line<'_>> = text
        .lines()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(index, text)| Line {
            number: index + 1,
            indent: indent_of(text),
            text,
        })
        .collect();

    if lines.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut root = ResourceTree::new();
    let mut open: Vec<Frame<'_>> = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        while open.last().is_some_and(|frame| line.indent < frame.depth) {
            close_frame(&mut open, &mut root);
        }

        let depth = open.last().map_or(0, |frame| frame.depth);
        if line.indent > depth {
            return Err(ParseError::Structure {
                line: line.number,
                expected: depth,
                found: line.indent,
            });
        }

        let (name, value) = split_line(*line)?;
        if !value.is_empty() {
            let tree = open.last_mut().map_or(&mut root, |frame| &mut frame.tree);
            tree.insert(name.to_string(), Section::Leaf(value.to_string()));
            continue;
        }

        let Some(next) = lines.get(index + 1) else {
            return Err(ParseError::IncompleteSection {
                line: line.number,
                name: name.to_string(),
            });
        };

        // Children must sit strictly deeper than their parent.
        if next.indent <= depth {
            return Err(ParseError::Structure {
                line: next.number,
                expected: depth + 1,
                found: next.indent,
            });
        }

        open.push(Frame {
            depth: next.indent,
            name,
            tree: ResourceTree::new(),
        });
    }

    while !open.is_empty() {
        close_frame(&mut open, &mut root);
    }

    Ok(root)
}

/// Pop the innermost open branch and attach it to its parent.
fn close_frame(open: &mut Vec<Frame<'_>>, root: &mut ResourceTree) {
    let Some(frame) = open.pop() else {
        return;
    };
    let parent = open.last_mut().map_or(root, |parent| &mut parent.tree);
    parent.insert(
        frame.name.to_string(),
        Section::Branch {
            name: String::new(),
            value: frame.tree,
        },
    );
}

/// Split on the first `:` into a name and a trimmed value.
fn split_line(line: Line<'_>) -> Result<(&str, &str), ParseError> {
    let (name, value) = line
        .text
        .split_once(':')
        .ok_or(ParseError::MalformedLine { line: line.number })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::MalformedLine { line: line.number });
    }

    Ok((name, value.trim()))
}
