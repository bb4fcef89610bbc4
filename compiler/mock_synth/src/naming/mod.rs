//! Names for synthesized stubs.
//!
//! `Acme.IWidget` becomes `Acme.Mocks.Mock_Widget`: the interface-marker `I`
//! is dropped, `Mock_` is prepended, and the stub lives in a `Mocks` namespace
//! nested under the interface's own.

use mock_ir::InterfaceContract;

/// Prefix of every stub type name.
pub const MOCK_PREFIX: &str = "Mock_";

/// Namespace segment appended to the interface's namespace.
pub const MOCKS_NAMESPACE: &str = "Mocks";

/// Name and namespace of a stub type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockName {
    pub type_name: String,
    pub target_namespace: String,
}

pub fn name_for(contract: &InterfaceContract) -> MockName {
    MockName {
        type_name: format!("{MOCK_PREFIX}{}", strip_interface_marker(&contract.name)),
        target_namespace: target_namespace(&contract.namespace),
    }
}

/// Drop one leading `I`, whatever follows it: `IWidget` becomes `Widget` and
/// `Item` becomes `tem`.
pub fn strip_interface_marker(name: &str) -> &str {
    name.strip_prefix('I').unwrap_or(name)
}

pub fn target_namespace(namespace: &str) -> String {
    if namespace.is_empty() {
        MOCKS_NAMESPACE.to_string()
    } else {
        format!("{namespace}.{MOCKS_NAMESPACE}")
    }
}

/// Field backing the named property: `Count` is stored in `_Count`.
pub fn backing_field_name(property: &str) -> String {
    format!("_{property}")
}

#[cfg(test)]
mod tests;
