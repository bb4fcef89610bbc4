//! Synthesis errors.

use mock_ir::{ContractKind, QualifiedName};

/// Failure to synthesize a stub for one contract.
///
/// Failures are per contract: a batch keeps going and reports them alongside
/// the plans that succeeded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SynthError {
    /// The contract is not an interface.
    #[error(
        "only interfaces can be mocked; `{type_name}` is declared as a {kind}, not an interface"
    )]
    InvalidContractKind {
        type_name: QualifiedName,
        kind: ContractKind,
    },
}

impl SynthError {
    /// The type the failure is about.
    pub fn type_name(&self) -> &QualifiedName {
        match self {
            SynthError::InvalidContractKind { type_name, .. } => type_name,
        }
    }
}
