use std::env;
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use super::error_codes::{
    CIRCULAR_INCLUDE, DUPLICATE_TYPE, ErrorCode, INCLUDE_NOT_FOUND, MALFORMED_DEFINITION,
    SYNTAX_ERROR, UNKNOWN_DOMAIN, UNKNOWN_TYPE,
};
use super::format::format_message;
use super::position::SourceLocation;

/// The typed cause of a failed compilation call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("{message}")]
    Syntax { message: String },

    #[error("{reason}")]
    MalformedDefinition { reason: String },

    #[error("unknown domain `{tag}`")]
    UnknownDomain { tag: String },

    /// `scope` names what was searched, e.g. "domain `v2`" or "sum `thing`".
    #[error("unknown type `{tag}` in {scope}")]
    UnknownType { tag: String, scope: String },

    #[error("duplicate type `{tag}` in {scope}")]
    DuplicateType { tag: String, scope: String },

    #[error("cannot find include file \"{path}\" (tried: {})", join_paths(.attempted, ", "))]
    IncludeFileNotFound {
        path: String,
        attempted: Vec<PathBuf>,
    },

    #[error("circular include: {}", join_paths(.cycle, " -> "))]
    CircularInclude { cycle: Vec<PathBuf> },
}

impl ErrorKind {
    pub fn error_code(&self) -> &'static ErrorCode {
        match self {
            ErrorKind::Syntax { .. } => &SYNTAX_ERROR,
            ErrorKind::MalformedDefinition { .. } => &MALFORMED_DEFINITION,
            ErrorKind::UnknownDomain { .. } => &UNKNOWN_DOMAIN,
            ErrorKind::UnknownType { .. } => &UNKNOWN_TYPE,
            ErrorKind::DuplicateType { .. } => &DUPLICATE_TYPE,
            ErrorKind::IncludeFileNotFound { .. } => &INCLUDE_NOT_FOUND,
            ErrorKind::CircularInclude { .. } => &CIRCULAR_INCLUDE,
        }
    }

    /// The value substituted into the catalog hint template.
    fn hint_subject(&self) -> Option<&str> {
        match self {
            ErrorKind::UnknownDomain { tag }
            | ErrorKind::UnknownType { tag, .. }
            | ErrorKind::DuplicateType { tag, .. } => Some(tag),
            ErrorKind::IncludeFileNotFound { path, .. } => Some(path),
            _ => None,
        }
    }
}

fn join_paths(paths: &[PathBuf], separator: &str) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// A located compilation error.
///
/// Every stage returns this value instead of continuing with partial state.
/// `Display` renders the single-line form `<file>:<line>:<col>: <message>`;
/// [`Diagnostic::render`] produces the longer report with a source excerpt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    kind: ErrorKind,
    location: Option<SourceLocation>,
    hints: Vec<String>,
}

impl Diagnostic {
    /// Builds a diagnostic, attaching the catalog hint for its kind.
    pub fn new(kind: ErrorKind) -> Self {
        let hints = match (kind.error_code().hint, kind.hint_subject()) {
            (Some(template), Some(subject)) => vec![format_message(template, &[subject])],
            _ => Vec::new(),
        };
        Self {
            kind,
            location: None,
            hints,
        }
    }

    pub fn syntax(message: impl Into<String>, location: SourceLocation) -> Self {
        Self::new(ErrorKind::Syntax {
            message: message.into(),
        })
        .with_location(location)
    }

    pub fn malformed(reason: impl Into<String>, location: SourceLocation) -> Self {
        Self::new(ErrorKind::MalformedDefinition {
            reason: reason.into(),
        })
        .with_location(location)
    }

    pub fn unknown_domain(tag: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownDomain { tag: tag.into() })
    }

    pub fn unknown_type(tag: impl Into<String>, scope: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownType {
            tag: tag.into(),
            scope: scope.into(),
        })
    }

    pub fn duplicate_type(tag: impl Into<String>, scope: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateType {
            tag: tag.into(),
            scope: scope.into(),
        })
    }

    pub fn include_not_found(path: impl Into<String>, attempted: Vec<PathBuf>) -> Self {
        Self::new(ErrorKind::IncludeFileNotFound {
            path: path.into(),
            attempted,
        })
    }

    pub fn circular_include(cycle: Vec<PathBuf>) -> Self {
        Self::new(ErrorKind::CircularInclude { cycle })
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Sets the location unless one is already present.
    pub fn or_location(mut self, location: Option<&SourceLocation>) -> Self {
        if self.location.is_none() {
            self.location = location.cloned();
        }
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    pub fn code(&self) -> &'static str {
        self.kind.error_code().code
    }

    pub fn title(&self) -> &'static str {
        self.kind.error_code().title
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Multi-line report; colored unless `NO_COLOR` is set.
    pub fn render(&self, source: Option<&str>) -> String {
        self.render_with_color(source, env::var_os("NO_COLOR").is_none())
    }

    pub fn render_with_color(&self, source: Option<&str>, use_color: bool) -> String {
        let mut out = String::new();
        let yellow = "\u{1b}[33m";
        let reset = "\u{1b}[0m";
        let file = self
            .location
            .as_ref()
            .map(|location| location.file())
            .unwrap_or("<unknown>");

        if use_color {
            out.push_str(yellow);
        }
        out.push_str(&format!("-- {} -- {} -- [{}]\n", self.title(), file, self.code()));
        if use_color {
            out.push_str(reset);
        }

        out.push('\n');
        out.push_str(&self.to_string());
        out.push('\n');

        if let Some(location) = &self.location
            && let Some(line_text) = source.and_then(|src| get_source_line(src, location.line))
        {
            let gutter_width = location.line.to_string().len();
            let caret_indent = location
                .column
                .saturating_sub(1)
                .min(line_text.chars().count());
            out.push('\n');
            out.push_str(&format!(
                "{:>width$} | {}\n",
                location.line,
                line_text,
                width = gutter_width
            ));
            out.push_str(&format!(
                "{:>width$} | {}",
                "",
                " ".repeat(caret_indent),
                width = gutter_width
            ));
            if use_color {
                out.push_str(yellow);
            }
            out.push('^');
            if use_color {
                out.push_str(reset);
            }
            out.push('\n');
        }

        for hint in &self.hints {
            out.push_str(&format!("\nHint: {}", hint));
        }

        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{}: {}", location, self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for Diagnostic {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl From<ErrorKind> for Diagnostic {
    fn from(kind: ErrorKind) -> Self {
        Diagnostic::new(kind)
    }
}

fn get_source_line(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source.lines().nth(line - 1)
}
