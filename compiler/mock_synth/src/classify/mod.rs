//! Member classification.
//!
//! Splits a flattened method set into accessor methods, which get bodies
//! wired to a property's backing field (or no-op event bodies), and plain
//! methods, which get default-value bodies. Classification is set
//! subtraction: the result does not depend on the order properties and events
//! are processed in.

use mock_ir::{EventDescriptor, MethodSignature, PropertyDescriptor};
use rustc_hash::FxHashSet;

/// What an accessor does for its owner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AccessorRole {
    Get,
    Set,
    Add,
    Remove,
}

/// An accessor method and the property or event that owns it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedAccessor {
    pub signature: MethodSignature,
    pub owner: String,
    pub role: AccessorRole,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassifiedMembers {
    /// Property accessors in property order, then event accessors in event
    /// order.
    pub accessors: Vec<ClassifiedAccessor>,
    /// Methods needing an independent default body, in method-set order.
    pub plain: Vec<MethodSignature>,
}

/// Partition `methods` into accessors of `properties`/`events` and the rest.
///
/// An accessor the method set does not list is still classified as an
/// accessor: the property requires it either way.
pub fn classify(
    methods: &[MethodSignature],
    properties: &[PropertyDescriptor],
    events: &[EventDescriptor],
) -> ClassifiedMembers {
    let declared: FxHashSet<&MethodSignature> = methods.iter().collect();

    let mut accessors = Vec::with_capacity(properties.len() * 2 + events.len() * 2);
    let mut push = |signature: MethodSignature, owner: &str, role: AccessorRole| {
        // Prefer the listed signature: it carries the declaring interface.
        let signature = declared
            .get(&signature)
            .map_or(signature, |&listed| listed.clone());
        accessors.push(ClassifiedAccessor {
            signature,
            owner: owner.to_string(),
            role,
        });
    };

    for property in properties {
        if let Some(getter) = property.getter() {
            push(getter, &property.name, AccessorRole::Get);
        }
        if let Some(setter) = property.setter() {
            push(setter, &property.name, AccessorRole::Set);
        }
    }
    for event in events {
        push(event.adder(), &event.name, AccessorRole::Add);
        push(event.remover(), &event.name, AccessorRole::Remove);
    }

    let accessor_set: FxHashSet<&MethodSignature> =
        accessors.iter().map(|a| &a.signature).collect();
    let plain = methods
        .iter()
        .filter(|m| !accessor_set.contains(m))
        .cloned()
        .collect();

    ClassifiedMembers { accessors, plain }
}
