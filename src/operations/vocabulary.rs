//! Operation vocabulary
//!
//! The fixed set of operation names the image service understands, and how
//! each is recorded when reached through dynamic dispatch:
//!
//! - **Simple** operations are flags: `fit-in`, `grayscale`, ... are stored as `true`
//!   and encode as the bare name.
//! - **Concatenated** operations carry an argument: `blur`, `quality`, ... are stored
//!   as sanitized text and encode as `name:value`.
//! - **Dedicated** operations have their own builder method and encoding rule
//!   (`resize`, `crop`, `face`, `palette`). `overlay` encodes like a
//!   concatenated operation but is only set through its own method.

use std::str::FromStr;

use crate::error::RezizerError;

/// How an operation is recorded by dynamic dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Simple,
    Concatenated,
    /// Only settable through its own builder method
    Dedicated,
}

/// A registry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationSpec {
    /// Canonical name as it appears in the path
    pub name: &'static str,
    pub kind: OperationKind,
    /// camelCase method name that maps onto this operation
    pub renamed_from: Option<&'static str>,
}

impl OperationSpec {
    const fn new(name: &'static str, kind: OperationKind) -> Self {
        Self {
            name,
            kind,
            renamed_from: None,
        }
    }

    const fn renamed(name: &'static str, kind: OperationKind, from: &'static str) -> Self {
        Self {
            name,
            kind,
            renamed_from: Some(from),
        }
    }
}

use OperationKind::{Concatenated, Dedicated, Simple};

/// Every known operation
pub const REGISTRY: &[OperationSpec] = &[
    // Simple
    OperationSpec::new("distort", Simple),
    OperationSpec::new("extend", Simple),
    OperationSpec::new("fit", Simple),
    OperationSpec::renamed("fit-in", Simple, "fitIn"),
    OperationSpec::new("flip", Simple),
    OperationSpec::new("flop", Simple),
    OperationSpec::new("tile", Simple),
    OperationSpec::new("grayscale", Simple),
    OperationSpec::new("invert", Simple),
    OperationSpec::new("map", Simple),
    OperationSpec::new("max", Simple),
    OperationSpec::new("min", Simple),
    OperationSpec::new("progressive", Simple),
    OperationSpec::new("round", Simple),
    // Concatenated
    OperationSpec::new("tint", Concatenated),
    OperationSpec::new("background", Concatenated),
    OperationSpec::new("blur", Concatenated),
    OperationSpec::new("format", Concatenated),
    OperationSpec::renamed("max-age", Concatenated, "maxAge"),
    OperationSpec::renamed("max-kb", Concatenated, "maxKb"),
    OperationSpec::new("overlay", Concatenated),
    OperationSpec::new("quality", Concatenated),
    OperationSpec::new("rotate", Concatenated),
    OperationSpec::new("align", Concatenated),
    OperationSpec::new("retina", Concatenated),
    // Dedicated
    OperationSpec::new("resize", Dedicated),
    OperationSpec::new("crop", Dedicated),
    OperationSpec::new("face", Dedicated),
    OperationSpec::new("palette", Dedicated),
];

/// Resolve a method name (canonical or camelCase alias) to its registry entry
pub fn lookup(method: &str) -> Option<&'static OperationSpec> {
    REGISTRY
        .iter()
        .find(|spec| spec.name == method || spec.renamed_from == Some(method))
}

/// Whether `name` belongs to the concatenated vocabulary
pub fn is_concatenated(name: &str) -> bool {
    REGISTRY
        .iter()
        .any(|spec| spec.kind == Concatenated && spec.name == name)
}

/// What dynamic dispatch records for a method call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Store `name -> true`
    Flag(&'static str),
    /// Store `name -> sanitized argument text`
    Argument(&'static str),
}

impl Dispatch {
    pub fn name(&self) -> &'static str {
        match self {
            Dispatch::Flag(name) | Dispatch::Argument(name) => name,
        }
    }
}

impl FromStr for Dispatch {
    type Err = RezizerError;

    /// Map a method name onto its dynamic-dispatch action
    ///
    /// `overlay` and the dedicated operations have their own builder methods
    /// and are not reachable here.
    fn from_str(method: &str) -> Result<Self, Self::Err> {
        match lookup(method) {
            Some(spec) if spec.kind == Simple => Ok(Dispatch::Flag(spec.name)),
            Some(spec) if spec.kind == Concatenated && spec.name != "overlay" => {
                Ok(Dispatch::Argument(spec.name))
            }
            _ => Err(RezizerError::unknown_operation(method)),
        }
    }
}

/// Join dispatch arguments with `,` and strip everything except ASCII
/// alphanumerics, `,` and `.`
pub fn sanitize<S: AsRef<str>>(args: &[S]) -> String {
    args.iter()
        .map(|arg| arg.as_ref())
        .collect::<Vec<&str>>()
        .join(",")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ',' || *c == '.')
        .collect()
}
