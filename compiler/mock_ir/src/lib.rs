//! Data model for mock synthesis.
//!
//! Everything the synthesis pipeline consumes or produces lives here:
//!
//! ```text
//! ContractTable (input, built by an interface source)
//!     │   InterfaceContract ── MethodSignature / PropertyDescriptor / EventDescriptor
//!     ▼
//! SynthesizedTypePlan (output, one per interface)
//!     │
//!     ▼
//! NamespaceGroup (plans bucketed by target namespace, handed to an emitter)
//! ```
//!
//! Contracts reference their base interfaces by [`ContractId`], so a table is
//! an adjacency list over the inheritance graph. All types are plain data:
//! `Clone`, `Eq`, `Hash`, `Debug`, and `serde`-serializable behind the `serde`
//! feature.

mod contract;
mod member;
mod plan;
mod ty;

pub use contract::{
    ContractId, ContractKind, ContractTable, InterfaceContract, QualifiedName, TableError,
};
pub use member::{EventDescriptor, MemberKind, MethodSignature, Param, PropertyDescriptor};
pub use plan::{
    AccessorBody, AccessorKind, BackingField, Constructor, DefaultBody, FieldId, NamespaceGroup,
    SynthesizedTypePlan,
};
pub use ty::{DefaultValue, TypeKind, TypeRef};
