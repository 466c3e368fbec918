// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Template rendering for cloud-init documents.
//!
//! Builders hand a template and a serializable request to a [`TemplateRenderer`].
//! The default implementation is [`MiniJinjaRenderer`], which renders with strict
//! undefined handling and registers two filters:
//!
//! - `yaml_block(indent)` - render file content as a YAML scalar that round-trips exactly
//! - `shell_words` - render a sequence as single-quoted, space-separated shell words

use crate::addons::quote_addons;
use crate::errors::RenderError;
use minijinja::{Environment, Error, UndefinedBehavior, Value};
use serde::Serialize;
use std::fmt::Write as _;

/// Renders a named template against serializable data.
pub trait TemplateRenderer {
    /// Render `template` with `data`, returning the rendered bytes.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the template is malformed or references a missing field.
    fn render<T: Serialize + ?Sized>(
        &self,
        name: &str,
        template: &str,
        data: &T,
    ) -> Result<Vec<u8>, RenderError>;
}

/// Template renderer backed by minijinja.
///
/// The environment is built once per renderer and never mutated afterwards, so a
/// renderer can be shared freely across threads.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniJinjaRenderer {
    /// Create a renderer with the cloud-init filters registered
    #[must_use]
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.add_filter("yaml_block", yaml_block);
        env.add_filter("shell_words", shell_words);
        Self { env }
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render<T: Serialize + ?Sized>(
        &self,
        name: &str,
        template: &str,
        data: &T,
    ) -> Result<Vec<u8>, RenderError> {
        self.env
            .render_named_str(name, template, data)
            .map(String::into_bytes)
            .map_err(|e| RenderError::template(name, e))
    }
}

/// Indentation indicator used for literal blocks, relative to the owning mapping
const BLOCK_INDENT_STEP: usize = 2;

/// Render `value` as a YAML scalar for a mapping whose keys sit at column `indent`.
///
/// The result goes right after `key: ` in the template. Content that YAML can
/// carry verbatim becomes a literal block with an explicit indentation indicator
/// (so leading whitespace on the first line survives) and the chomping indicator
/// matching its trailing newlines. Anything else becomes a double-quoted scalar.
#[must_use]
pub fn yaml_block(value: &str, indent: usize) -> String {
    if !value.chars().all(is_literal_safe) {
        return double_quoted(value);
    }

    let body = value.trim_end_matches('\n');
    let trailing = value.len() - body.len();
    let chomping = match trailing {
        0 => "-",
        1 if !body.is_empty() => "",
        _ => "+",
    };

    let mut block = format!("|{BLOCK_INDENT_STEP}{chomping}");
    if value.is_empty() {
        return block;
    }

    let pad = " ".repeat(indent + BLOCK_INDENT_STEP);
    let lines: Vec<&str> = if body.is_empty() {
        Vec::new()
    } else {
        body.split('\n').collect()
    };
    for line in lines {
        block.push('\n');
        if !line.is_empty() {
            block.push_str(&pad);
            block.push_str(line);
        }
    }
    // Kept trailing line breaks beyond the one closing the last line
    for _ in 1..trailing {
        block.push('\n');
    }
    if body.is_empty() {
        block.push('\n');
    }
    block
}

/// Whether `c` may appear unescaped inside a literal block.
fn is_literal_safe(c: char) -> bool {
    match c {
        '\t' | '\n' => true,
        '\u{2028}' | '\u{2029}' | '\u{feff}' | '\u{fffe}' | '\u{ffff}' => false,
        c => !c.is_control(),
    }
}

fn double_quoted(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            c if !is_literal_safe(c) => {
                let _ = write!(quoted, "\\u{:04X}", u32::from(c));
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Render a sequence as single-quoted, space-separated shell words.
///
/// # Errors
///
/// Returns an error if `value` is not iterable.
pub fn shell_words(value: Value) -> Result<String, Error> {
    let words: Vec<String> = value
        .try_iter()?
        .map(|item| match item.as_str() {
            Some(s) => s.to_string(),
            None => item.to_string(),
        })
        .collect();
    Ok(quote_addons(&words))
}
