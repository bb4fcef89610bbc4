//! Interface flattening.
//!
//! Collects every method, property, and event an interface declares or
//! inherits. The walk is an explicit depth-first worklist over the table's
//! base lists: a contract's own members come first, then each base's, in
//! declaration order.
//!
//! Correctness rests on set deduplication, not on the visited set. The visited
//! set only stops shared bases of a diamond from being walked twice.

use mock_ir::{
    ContractId, ContractTable, EventDescriptor, InterfaceContract, MethodSignature,
    PropertyDescriptor,
};
use rustc_hash::FxHashSet;
use tracing::{trace, warn};

use crate::MemberSet;

/// The transitive, deduplicated member set of one interface.
///
/// `methods` contains plain methods and the accessor signatures of every
/// property and event, whether or not the interface source listed them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlattenedMembers {
    pub methods: Vec<MethodSignature>,
    pub properties: Vec<PropertyDescriptor>,
    pub events: Vec<EventDescriptor>,
}

/// Flatten the member set of `root` and everything it extends.
pub fn flatten(table: &ContractTable, root: ContractId) -> FlattenedMembers {
    let mut methods = MemberSet::new();
    let mut properties = MemberSet::new();
    let mut events = MemberSet::new();

    let mut visited = FxHashSet::default();
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        if !visited.insert(id) {
            continue;
        }
        let contract = table.get(id);
        trace!(
            contract = %contract.qualified_name(),
            bases = contract.bases.len(),
            "visiting contract"
        );

        collect_methods(contract, &mut methods);
        collect_properties(contract, &mut properties);
        collect_events(contract, &mut events);

        // Reversed so the first base is popped first.
        stack.extend(contract.bases.iter().rev().copied());
    }

    for property in properties.iter() {
        for accessor in property.getter().into_iter().chain(property.setter()) {
            methods.insert(accessor.clone(), accessor);
        }
    }
    for event in events.iter() {
        for accessor in [event.adder(), event.remover()] {
            methods.insert(accessor.clone(), accessor);
        }
    }

    FlattenedMembers {
        methods: methods.into_vec(),
        properties: properties.into_vec(),
        events: events.into_vec(),
    }
}

fn collect_methods(
    contract: &InterfaceContract,
    methods: &mut MemberSet<MethodSignature, MethodSignature>,
) {
    for method in &contract.methods {
        if methods.contains(method) {
            continue;
        }
        let mut method = method.clone();
        if method.declaring.is_none() {
            method.declaring = Some(contract.qualified_name());
        }
        methods.insert(method.clone(), method);
    }
}

/// Properties are identified by name. A redeclaration merges its accessors
/// into the first declaration, so `get` on one path and `set` on another
/// yield one read-write property.
fn collect_properties(
    contract: &InterfaceContract,
    properties: &mut MemberSet<String, PropertyDescriptor>,
) {
    for property in &contract.properties {
        match properties.get_mut(&property.name) {
            Some(existing) => {
                if existing.ty != property.ty {
                    warn!(
                        property = %property.name,
                        kept = %existing.ty,
                        ignored = %property.ty,
                        contract = %contract.qualified_name(),
                        "property redeclared with a different type"
                    );
                }
                existing.has_getter |= property.has_getter;
                existing.has_setter |= property.has_setter;
            }
            None => {
                properties.insert(property.name.clone(), property.clone());
            }
        }
    }
}

fn collect_events(contract: &InterfaceContract, events: &mut MemberSet<String, EventDescriptor>) {
    for event in &contract.events {
        events.insert(event.name.clone(), event.clone());
    }
}
