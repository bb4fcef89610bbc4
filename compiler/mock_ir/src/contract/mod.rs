//! Interface contracts and the table that owns them.
//!
//! A [`ContractTable`] is an arena of [`InterfaceContract`] values. Contracts
//! refer to the interfaces they extend through [`ContractId`] handles, which
//! makes the table an adjacency-list view of the inheritance graph. Handles are
//! only ever minted by the table, so a lookup through one cannot miss.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{EventDescriptor, MethodSignature, PropertyDescriptor};

/// Handle to a contract inside a [`ContractTable`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContractId(u32);

impl ContractId {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "declaration sets never approach u32::MAX types"
    )]
    #[inline]
    fn from_index(index: usize) -> Self {
        ContractId(index as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Namespace-qualified type name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualifiedName {
    pub namespace: String,
    pub name: String,
}

impl QualifiedName {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        QualifiedName {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Split a dotted path: `Acme.Core.IWidget` becomes (`Acme.Core`, `IWidget`).
    pub fn parse(path: &str) -> Self {
        match path.rsplit_once('.') {
            Some((namespace, name)) => QualifiedName::new(namespace, name),
            None => QualifiedName::new("", path),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}.{}", self.namespace, self.name)
        }
    }
}

/// What sort of type a contract describes.
///
/// Interface sources may hand over every declared type; only interfaces can
/// be synthesized.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContractKind {
    Interface,
    Class,
    Struct,
    Enum,
    Delegate,
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContractKind::Interface => "interface",
            ContractKind::Class => "class",
            ContractKind::Struct => "struct",
            ContractKind::Enum => "enum",
            ContractKind::Delegate => "delegate",
        };
        f.write_str(s)
    }
}

/// A type declaration as supplied by an interface source.
///
/// Only the members declared directly on this type are listed; inherited
/// members are reached through `bases`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterfaceContract {
    pub name: String,
    pub namespace: String,
    pub kind: ContractKind,
    pub methods: Vec<MethodSignature>,
    pub properties: Vec<PropertyDescriptor>,
    pub events: Vec<EventDescriptor>,
    /// Directly extended interfaces, in declaration order.
    pub bases: Vec<ContractId>,
}

impl InterfaceContract {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>, kind: ContractKind) -> Self {
        InterfaceContract {
            name: name.into(),
            namespace: namespace.into(),
            kind,
            methods: Vec::new(),
            properties: Vec::new(),
            events: Vec::new(),
            bases: Vec::new(),
        }
    }

    /// An empty interface.
    pub fn interface(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(namespace, name, ContractKind::Interface)
    }

    #[must_use]
    pub fn with_method(mut self, method: MethodSignature) -> Self {
        self.methods.push(method);
        self
    }

    #[must_use]
    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    #[must_use]
    pub fn with_event(mut self, event: EventDescriptor) -> Self {
        self.events.push(event);
        self
    }

    #[must_use]
    pub fn with_base(mut self, base: ContractId) -> Self {
        self.bases.push(base);
        self
    }

    pub fn is_interface(&self) -> bool {
        self.kind == ContractKind::Interface
    }

    pub fn qualified_name(&self) -> QualifiedName {
        QualifiedName::new(self.namespace.clone(), self.name.clone())
    }
}

/// Errors raised while building a [`ContractTable`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("type `{0}` is declared more than once")]
    Duplicate(QualifiedName),
    #[error("contract {0:?} is not in the table")]
    UnknownContract(ContractId),
    #[error("contract `{contract}` refers to base {base:?}, which is not in the table")]
    UnknownBase {
        contract: QualifiedName,
        base: ContractId,
    },
}

/// Arena of contracts, indexed by [`ContractId`] and by qualified name.
#[derive(Clone, Debug, Default)]
pub struct ContractTable {
    contracts: Vec<InterfaceContract>,
    by_name: FxHashMap<QualifiedName, ContractId>,
}

impl ContractTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contract. Its bases must already be in the table.
    pub fn insert(&mut self, contract: InterfaceContract) -> Result<ContractId, TableError> {
        let qualified = contract.qualified_name();
        if self.by_name.contains_key(&qualified) {
            return Err(TableError::Duplicate(qualified));
        }
        if let Some(&base) = contract.bases.iter().find(|b| b.index() >= self.contracts.len()) {
            return Err(TableError::UnknownBase {
                contract: qualified,
                base,
            });
        }

        let id = ContractId::from_index(self.contracts.len());
        self.by_name.insert(qualified, id);
        self.contracts.push(contract);
        Ok(id)
    }

    /// Append a base to an existing contract.
    ///
    /// Used by interface sources that resolve base names after every type has
    /// been registered, so forward references work.
    pub fn add_base(&mut self, id: ContractId, base: ContractId) -> Result<(), TableError> {
        let len = self.contracts.len();
        let Some(contract) = self.contracts.get_mut(id.index()) else {
            return Err(TableError::UnknownContract(id));
        };
        if base.index() >= len {
            return Err(TableError::UnknownBase {
                contract: contract.qualified_name(),
                base,
            });
        }
        contract.bases.push(base);
        Ok(())
    }

    pub fn get(&self, id: ContractId) -> &InterfaceContract {
        &self.contracts[id.index()]
    }

    pub fn lookup(&self, name: &QualifiedName) -> Option<ContractId> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    /// All contracts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ContractId, &InterfaceContract)> {
        self.contracts
            .iter()
            .enumerate()
            .map(|(i, c)| (ContractId::from_index(i), c))
    }

    /// Ids of every interface-kinded contract, in insertion order.
    pub fn interfaces(&self) -> Vec<ContractId> {
        self.iter()
            .filter(|(_, c)| c.is_interface())
            .map(|(id, _)| id)
            .collect()
    }
}
