//! Interface-to-stub synthesis.
//!
//! # Pipeline
//!
//! ```text
//! ContractTable + ContractId
//!     │
//!     ▼
//! flatten() ──► FlattenedMembers      (transitive, deduplicated)
//!     │
//!     ▼
//! classify() ──► ClassifiedMembers    (accessors vs. plain methods)
//!     │
//!     ▼
//! synthesize() ──► SynthesizedTypePlan
//!     │
//!     ▼
//! group_by_namespace() ──► Vec<NamespaceGroup>
//! ```
//!
//! Every stage is a pure function of its inputs. [`synthesize_contract`] runs
//! the first three stages for one interface; [`synthesize_all`] runs them for
//! a batch, optionally in parallel, and keeps per-interface failures apart
//! from the plans that succeeded.
//!
//! # Tracing
//!
//! - `RUST_LOG=mock_synth=debug`: one event per synthesized interface.
//! - `RUST_LOG=mock_synth=trace`: every contract visited while flattening.

mod batch;
mod classify;
mod error;
mod group;
mod member_set;
mod naming;
mod reflect;
mod synthesize;

#[cfg(test)]
mod test_helpers;

pub use batch::{synthesize_all, synthesize_interfaces, BatchFailure, BatchOutcome, Parallelism};
pub use classify::{classify, AccessorRole, ClassifiedAccessor, ClassifiedMembers};
pub use error::SynthError;
pub use group::group_by_namespace;
pub use member_set::MemberSet;
pub use naming::{
    backing_field_name, name_for, strip_interface_marker, target_namespace, MockName,
    MOCKS_NAMESPACE, MOCK_PREFIX,
};
pub use reflect::{flatten, FlattenedMembers};
pub use synthesize::{synthesize, synthesize_contract};
