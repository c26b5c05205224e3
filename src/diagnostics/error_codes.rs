//! Stable codes, titles and hint templates for every error kind.

/// Catalog entry for one error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCode {
    pub code: &'static str,
    pub title: &'static str,
    pub hint: Option<&'static str>,
}

pub const SYNTAX_ERROR: ErrorCode = ErrorCode {
    code: "T001",
    title: "SYNTAX ERROR",
    hint: None,
};

pub const MALFORMED_DEFINITION: ErrorCode = ErrorCode {
    code: "T002",
    title: "MALFORMED DEFINITION",
    hint: None,
};

pub const UNKNOWN_DOMAIN: ErrorCode = ErrorCode {
    code: "T003",
    title: "UNKNOWN DOMAIN",
    hint: Some("Domain `{}` must be defined before it is referenced."),
};

pub const UNKNOWN_TYPE: ErrorCode = ErrorCode {
    code: "T004",
    title: "UNKNOWN TYPE",
    hint: Some("Check the spelling of `{}` or define it in the same domain."),
};

pub const DUPLICATE_TYPE: ErrorCode = ErrorCode {
    code: "T005",
    title: "DUPLICATE TYPE",
    hint: Some("Exclude `{}` first if you meant to replace it."),
};

pub const INCLUDE_NOT_FOUND: ErrorCode = ErrorCode {
    code: "T006",
    title: "INCLUDE NOT FOUND",
    hint: Some("Add the directory containing `{}` with --root."),
};

pub const CIRCULAR_INCLUDE: ErrorCode = ErrorCode {
    code: "T007",
    title: "CIRCULAR INCLUDE",
    hint: None,
};
