//! Stub plan synthesis.
//!
//! Turns one interface's classified members into a [`SynthesizedTypePlan`]:
//!
//! - one public parameterless constructor,
//! - one backing field per property,
//! - getters that return the field and setters that overwrite it,
//! - no-op event `add`/`remove` bodies,
//! - default-value bodies for every plain method.

use mock_ir::{
    AccessorBody, AccessorKind, BackingField, Constructor, ContractId, ContractTable,
    DefaultBody, EventDescriptor, FieldId, InterfaceContract, MethodSignature, PropertyDescriptor,
    SynthesizedTypePlan, TypeRef,
};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::classify::{AccessorRole, ClassifiedAccessor};
use crate::naming::{backing_field_name, name_for, MockName};
use crate::{classify, flatten, ClassifiedMembers, SynthError};

/// Flatten, classify, and synthesize the contract `id`.
#[tracing::instrument(
    level = "debug",
    skip(table),
    fields(contract = %table.get(id).qualified_name())
)]
pub fn synthesize_contract(
    table: &ContractTable,
    id: ContractId,
) -> Result<SynthesizedTypePlan, SynthError> {
    let contract = table.get(id);
    check_kind(contract)?;

    let flat = flatten(table, id);
    let classified = classify(&flat.methods, &flat.properties, &flat.events);
    synthesize(contract, &classified, &flat.properties, &flat.events)
}

/// Build the plan for `contract` from its flattened, classified members.
///
/// Fails with [`SynthError::InvalidContractKind`] if `contract` is not an
/// interface; no partial plan is produced.
pub fn synthesize(
    contract: &InterfaceContract,
    classified: &ClassifiedMembers,
    properties: &[PropertyDescriptor],
    events: &[EventDescriptor],
) -> Result<SynthesizedTypePlan, SynthError> {
    check_kind(contract)?;

    let MockName {
        type_name,
        target_namespace,
    } = name_for(contract);

    let mut fields = FieldAllocator::default();
    for property in properties {
        fields.field_for(property);
    }

    let accessor_bodies: Vec<AccessorBody> = classified
        .accessors
        .iter()
        .map(|accessor| accessor_body(accessor, &mut fields))
        .collect();

    let default_method_bodies: Vec<DefaultBody> = classified
        .plain
        .iter()
        .map(|method| default_body(method, &accessor_bodies))
        .collect();

    let plan = SynthesizedTypePlan {
        type_name,
        target_namespace,
        implemented_contract: contract.qualified_name(),
        constructor: Constructor,
        backing_fields: fields.finish(),
        accessor_bodies,
        default_method_bodies,
        events: events.to_vec(),
    };

    debug!(
        stub = %plan.qualified_name(),
        fields = plan.backing_fields.len(),
        accessors = plan.accessor_bodies.len(),
        methods = plan.default_method_bodies.len(),
        "synthesized stub plan"
    );
    Ok(plan)
}

fn check_kind(contract: &InterfaceContract) -> Result<(), SynthError> {
    if contract.is_interface() {
        Ok(())
    } else {
        Err(SynthError::InvalidContractKind {
            type_name: contract.qualified_name(),
            kind: contract.kind,
        })
    }
}

/// Hands out one backing field per property name.
#[derive(Default)]
struct FieldAllocator {
    fields: Vec<BackingField>,
    by_property: FxHashMap<String, FieldId>,
}

impl FieldAllocator {
    fn field_for(&mut self, property: &PropertyDescriptor) -> FieldId {
        if let Some(&id) = self.by_property.get(&property.name) {
            return id;
        }
        let id = FieldId(u32::try_from(self.fields.len()).unwrap_or(u32::MAX));
        self.fields.push(BackingField {
            field_name: backing_field_name(&property.name),
            property: property.clone(),
        });
        self.by_property.insert(property.name.clone(), id);
        id
    }

    fn finish(self) -> Vec<BackingField> {
        self.fields
    }
}

fn accessor_body(accessor: &ClassifiedAccessor, fields: &mut FieldAllocator) -> AccessorBody {
    let kind = match accessor.role {
        AccessorRole::Get => AccessorKind::Get(fields.field_for(&implied_property(accessor))),
        AccessorRole::Set => AccessorKind::Set(fields.field_for(&implied_property(accessor))),
        AccessorRole::Add => AccessorKind::Add,
        AccessorRole::Remove => AccessorKind::Remove,
    };
    AccessorBody {
        signature: accessor.signature.clone(),
        owner: accessor.owner.clone(),
        kind,
    }
}

/// The property an accessor belongs to, as far as its signature tells.
///
/// Only consulted when the owner is missing from the property list, so that
/// every getter and setter still gets a field to work on.
fn implied_property(accessor: &ClassifiedAccessor) -> PropertyDescriptor {
    let signature = &accessor.signature;
    let ty = match accessor.role {
        AccessorRole::Set => signature
            .params
            .first()
            .map_or_else(TypeRef::void, |p| p.ty.clone()),
        _ => signature.return_type.clone(),
    };
    PropertyDescriptor::new(
        accessor.owner.clone(),
        ty,
        accessor.role == AccessorRole::Get,
        accessor.role == AccessorRole::Set,
    )
}

fn default_body(method: &MethodSignature, accessors: &[AccessorBody]) -> DefaultBody {
    // `get_Count()` next to a `Count` getter would be an ambiguous member.
    let explicit = accessors.iter().any(|a| a.signature.same_slot(method));
    DefaultBody {
        signature: method.clone(),
        returns: method.return_type.default_value(),
        explicit,
    }
}

#[cfg(test)]
mod tests;
