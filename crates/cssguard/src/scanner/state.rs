//! The brace-driven state machine behind [`super::sanitize_css`].

use cssguard_common::Rejection;

use crate::config::Configuration;
use crate::property::{sanitize_property, Declaration};

/// Where the scanner currently is in the block hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ScanContext {
    /// Outside any block.
    TopLevel,
    /// Inside an ordinary rule (or a discarded block nested in one).
    RuleBody,
    /// Inside an allow-listed at-rule. Everything until depth returns to
    /// zero is passed through untouched.
    AtRule { name: String },
}

/// A piece of output, tagged with how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    /// Selector, at-rule head, or at-rule body text emitted as-is.
    Verbatim(String),
    /// A top-level rule body rebuilt from sanitized declarations.
    Declarations(String),
}

impl Segment {
    fn as_str(&self) -> &str {
        match self {
            Segment::Verbatim(s) | Segment::Declarations(s) => s,
        }
    }
}

pub(crate) struct ScanState<'a> {
    config: &'a Configuration,
    context: ScanContext,
    depth: usize,
    buffer: String,
    segments: Vec<Segment>,
}

impl<'a> ScanState<'a> {
    pub(crate) fn new(config: &'a Configuration) -> Self {
        Self {
            config,
            context: ScanContext::TopLevel,
            depth: 0,
            buffer: String::new(),
            segments: Vec::new(),
        }
    }

    pub(crate) fn feed(&mut self, ch: char) {
        match ch {
            '{' => self.open_block(),
            '}' => self.close_block(),
            _ => self.buffer.push(ch),
        }
    }

    fn open_block(&mut self) {
        self.depth += 1;
        let head = std::mem::take(&mut self.buffer);

        let rule_name = head.split_whitespace().next().unwrap_or("");
        if self.config.allows_at_rule(rule_name) {
            tracing::trace!(at_rule = rule_name, depth = self.depth, "entering at-rule");
            self.context = ScanContext::AtRule {
                name: rule_name.to_string(),
            };
            self.push_verbatim(head, '{');
            return;
        }

        match self.context {
            ScanContext::AtRule { .. } => self.push_verbatim(head, '{'),
            _ if self.depth == 1 => {
                self.context = ScanContext::RuleBody;
                self.push_verbatim(head, '{');
            }
            _ => {
                let rejection = Rejection::DisallowedStructuralContext(head.trim().to_string());
                tracing::debug!(depth = self.depth, reason = %rejection, "block head dropped");
            }
        }
    }

    fn close_block(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        let body = std::mem::take(&mut self.buffer);

        match &self.context {
            ScanContext::AtRule { name } => {
                if self.depth == 0 {
                    tracing::trace!(at_rule = %name, "leaving at-rule");
                    self.context = ScanContext::TopLevel;
                }
                self.push_verbatim(body, '}');
            }
            _ if self.depth == 0 => {
                let mut joined = self.sanitize_declarations(&body);
                joined.push('}');
                self.segments.push(Segment::Declarations(joined));
                self.context = ScanContext::TopLevel;
            }
            _ => self.push_verbatim(body, '}'),
        }
    }

    fn sanitize_declarations(&self, body: &str) -> String {
        body.split(';')
            .filter(|chunk| !chunk.trim().is_empty())
            .map(Declaration::parse)
            .map(|decl| sanitize_property(self.config, &decl.property, &decl.value))
            .filter(|decl| !decl.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn push_verbatim(&mut self, mut text: String, brace: char) {
        text.push(brace);
        self.segments.push(Segment::Verbatim(text));
    }

    /// Stop scanning and hand back the tagged output.
    pub(crate) fn into_segments(self) -> Vec<Segment> {
        if self.depth != 0 {
            tracing::debug!(depth = self.depth, "input ended inside an open block");
        }
        if !self.buffer.trim().is_empty() {
            tracing::debug!(
                discarded = self.buffer.trim().len(),
                "trailing text outside any block dropped"
            );
        }
        self.segments
    }
}

pub(crate) fn render(segments: &[Segment]) -> String {
    segments.iter().map(Segment::as_str).collect()
}
