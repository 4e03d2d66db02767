//! pgc-util — shared foundation types for the pgc compiler crates.
//!
//! This crate holds the things every compiler phase needs and none of them
//! should redefine on their own: a typed-index vector ([`IndexVec`],
//! [`Idx`]) for the LL(1) parse table and similar dense lookup structures, a
//! source [`Position`] type carried by every lexer token, and the
//! [`EntityKind`] value-type lattice shared by the parser and code
//! generator.

pub mod entity_kind;
pub mod index_vec;
pub mod position;

pub use entity_kind::EntityKind;
pub use index_vec::{Idx, IndexVec};
pub use position::Position;
