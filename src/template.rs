//! Prompt Templates
//!
//! A template is a static body with one named slot, written `{{slot}}`
//! (spaces inside the braces are allowed). The slot may appear any number
//! of times; every occurrence receives the same value.
//!
//! Rendering is a single left-to-right pass over the body. Inserted text is
//! never scanned again, so a value that itself contains `{{...}}` lands in
//! the output literally and cannot be mistaken for a placeholder.

use crate::errors::{TemplateError, TemplateResult};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Versioned prompt template with a single named slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Stable identifier, e.g. `audit`
    pub name: &'static str,
    /// Bumped whenever the body text changes
    pub version: u32,
    /// Placeholder name substituted by [`Template::render`]
    pub slot: &'static str,
    /// Raw body including slot markers
    pub body: &'static str,
}

/// Piece of a template body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text copied as-is
    Text(&'a str),
    /// Placeholder with its trimmed name and byte offset of the `{{`
    Placeholder { name: &'a str, offset: usize },
}

impl Template {
    pub const fn new(
        name: &'static str,
        version: u32,
        slot: &'static str,
        body: &'static str,
    ) -> Self {
        Self {
            name,
            version,
            slot,
            body,
        }
    }

    /// Substitute `value` for every slot marker.
    ///
    /// Total: markers that do not name the slot, and a trailing `{{` with no
    /// closing braces, are copied through unchanged. [`Template::check`]
    /// rejects such bodies up front.
    pub fn render(&self, value: &str) -> String {
        let mut out = String::with_capacity(self.body.len() + value.len());
        let mut rest = self.body;

        while let Some(start) = rest.find(OPEN) {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + OPEN.len()..];
            match after_open.find(CLOSE) {
                Some(end) if after_open[..end].trim() == self.slot => {
                    out.push_str(value);
                    rest = &after_open[end + CLOSE.len()..];
                }
                Some(end) => {
                    let marker_len = OPEN.len() + end + CLOSE.len();
                    out.push_str(&rest[start..start + marker_len]);
                    rest = &rest[start + marker_len..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }

    /// Split the body into literal text and placeholders
    pub fn segments(&self) -> TemplateResult<Vec<Segment<'static>>> {
        let body = self.body;
        let mut segments = Vec::new();
        let mut pos = 0;

        while let Some(found) = body[pos..].find(OPEN) {
            let start = pos + found;
            if start > pos {
                segments.push(Segment::Text(&body[pos..start]));
            }
            let inner_start = start + OPEN.len();
            let end = body[inner_start..]
                .find(CLOSE)
                .map(|idx| inner_start + idx)
                .ok_or(TemplateError::Unterminated {
                    template: self.name,
                    offset: start,
                })?;
            let name = body[inner_start..end].trim();
            if name.is_empty() {
                return Err(TemplateError::EmptyPlaceholder {
                    template: self.name,
                    offset: start,
                });
            }
            segments.push(Segment::Placeholder {
                name,
                offset: start,
            });
            pos = end + CLOSE.len();
        }
        if pos < body.len() {
            segments.push(Segment::Text(&body[pos..]));
        }
        Ok(segments)
    }

    /// Strict structural check: every placeholder names the slot and the
    /// slot is used at least once
    pub fn check(&self) -> TemplateResult<()> {
        let mut used = false;
        for segment in self.segments()? {
            if let Segment::Placeholder { name, offset } = segment {
                if name != self.slot {
                    return Err(TemplateError::UnknownPlaceholder {
                        template: self.name,
                        name: name.to_string(),
                        offset,
                    });
                }
                used = true;
            }
        }
        if used {
            Ok(())
        } else {
            Err(TemplateError::MissingSlot {
                template: self.name,
                slot: self.slot,
            })
        }
    }

    /// Number of slot markers in the body
    pub fn slot_count(&self) -> usize {
        self.segments()
            .map(|segments| {
                segments
                    .iter()
                    .filter(|s| matches!(s, Segment::Placeholder { name, .. } if *name == self.slot))
                    .count()
            })
            .unwrap_or(0)
    }
}
