//! The value-type lattice shared by every phase after the lexer.
//!
//! An identifier's entity kind is a pure function of its lexeme prefix —
//! `i_`, `f_`, `b_`, or (by default) `s_` — and a literal's entity kind is a
//! pure function of its token kind. Both the parser (to tag `Ident`/`Literal`
//! nodes) and the code generator (to choose `.locals` types and `conv.*`
//! instructions) need the same four-way classification, so it lives here
//! rather than in either crate.

use std::fmt;

/// INT, FLOAT, STRING, or BOOL — the four value types this language has.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Int,
    Float,
    String,
    Bool,
}

impl EntityKind {
    /// Classifies an identifier lexeme by its prefix: `i_` → INT, `f_` →
    /// FLOAT, `b_` → BOOL, anything else → STRING. Callers are expected to
    /// have already validated the lexeme shape (§3/§4.1); this function does
    /// not re-check it and simply inspects the first byte.
    pub fn from_ident_prefix(lexeme: &str) -> Self {
        match lexeme.as_bytes().first() {
            Some(b'i') => EntityKind::Int,
            Some(b'f') => EntityKind::Float,
            Some(b'b') => EntityKind::Bool,
            _ => EntityKind::String,
        }
    }

    /// The CIL local/type name this kind lowers to (§4.4's `.locals`
    /// statement and `System.<Class>::Parse` selection).
    pub fn cil_type_name(self) -> &'static str {
        match self {
            EntityKind::Int => "int64",
            EntityKind::Float => "float64",
            EntityKind::String => "string",
            EntityKind::Bool => "bool",
        }
    }

    /// The `System.<Class>` used by `Parse`/boxed-numeric call sites for
    /// this kind (§4.4's `ReadStmt` lowering). Strings are read verbatim
    /// and never parsed, so this is only meaningful for the other three.
    pub fn parse_class_name(self) -> Option<&'static str> {
        match self {
            EntityKind::Int => Some("Int64"),
            EntityKind::Float => Some("Double"),
            EntityKind::Bool => Some("Bool"),
            EntityKind::String => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Int => "INT",
            EntityKind::Float => "FLOAT",
            EntityKind::String => "STRING",
            EntityKind::Bool => "BOOL",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_classification_covers_all_four_kinds() {
        assert_eq!(EntityKind::from_ident_prefix("i_count"), EntityKind::Int);
        assert_eq!(EntityKind::from_ident_prefix("f_rate"), EntityKind::Float);
        assert_eq!(EntityKind::from_ident_prefix("b_done"), EntityKind::Bool);
        assert_eq!(EntityKind::from_ident_prefix("s_name"), EntityKind::String);
    }

    #[test]
    fn unrecognized_prefix_defaults_to_string() {
        assert_eq!(EntityKind::from_ident_prefix("xcount"), EntityKind::String);
    }

    #[test]
    fn cil_type_names_match_locals_syntax() {
        assert_eq!(EntityKind::Int.cil_type_name(), "int64");
        assert_eq!(EntityKind::Float.cil_type_name(), "float64");
        assert_eq!(EntityKind::String.cil_type_name(), "string");
        assert_eq!(EntityKind::Bool.cil_type_name(), "bool");
    }

    #[test]
    fn only_non_string_kinds_have_a_parse_class() {
        assert_eq!(EntityKind::Int.parse_class_name(), Some("Int64"));
        assert_eq!(EntityKind::Float.parse_class_name(), Some("Double"));
        assert_eq!(EntityKind::Bool.parse_class_name(), Some("Bool"));
        assert_eq!(EntityKind::String.parse_class_name(), None);
    }
}
