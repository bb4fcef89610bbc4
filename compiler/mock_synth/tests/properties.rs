//! Property-based tests for the synthesis pipeline.
//!
//! Random acyclic interface hierarchies, with member names drawn from small
//! pools so that redeclarations and diamonds are common, checked against:
//! 1. Completeness: plan coverage equals the flattened method set
//! 2. Exclusivity: accessors never receive default bodies
//! 3. One backing field per distinct property
//! 4. Flattening agrees with a naive recursive collection

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::disallowed_types,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use std::collections::{HashMap, HashSet};

use mock_ir::{
    ContractId, ContractTable, EventDescriptor, InterfaceContract, MemberKind, MethodSignature,
    Param, PropertyDescriptor, TypeRef,
};
use mock_synth::{classify, flatten, synthesize_contract};
use proptest::prelude::*;
use proptest::sample::Index;

const METHOD_NAMES: &[&str] = &["Run", "Stop", "Find", "get_Value", "Dispose"];
const RETURN_TYPES: &[&str] = &["void", "int", "string", "bool", "double"];
const PARAM_TYPES: &[&str] = &["int", "string", "bool"];
const PROPERTY_NAMES: &[&str] = &["Value", "Name", "Id"];
const PROPERTY_TYPES: &[&str] = &["int", "string"];
const EVENT_NAMES: &[&str] = &["Changed", "Closed"];

#[derive(Clone, Debug)]
struct MethodDecl {
    name: usize,
    ret: usize,
    params: Vec<usize>,
}

#[derive(Clone, Debug)]
struct PropertyDecl {
    name: usize,
    ty: usize,
    get: bool,
    set: bool,
}

#[derive(Clone, Debug)]
struct Decl {
    methods: Vec<MethodDecl>,
    properties: Vec<PropertyDecl>,
    events: Vec<usize>,
    bases: Vec<Index>,
}

fn method_strategy() -> impl Strategy<Value = MethodDecl> {
    (
        0..METHOD_NAMES.len(),
        0..RETURN_TYPES.len(),
        proptest::collection::vec(0..PARAM_TYPES.len(), 0..3),
    )
        .prop_map(|(name, ret, params)| MethodDecl { name, ret, params })
}

fn property_strategy() -> impl Strategy<Value = PropertyDecl> {
    (
        0..PROPERTY_NAMES.len(),
        0..PROPERTY_TYPES.len(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(name, ty, get, set)| PropertyDecl { name, ty, get, set })
}

fn decl_strategy() -> impl Strategy<Value = Decl> {
    (
        proptest::collection::vec(method_strategy(), 0..4),
        proptest::collection::vec(property_strategy(), 0..3),
        proptest::collection::vec(0..EVENT_NAMES.len(), 0..2),
        proptest::collection::vec(any::<Index>(), 0..3),
    )
        .prop_map(|(methods, properties, events, bases)| Decl {
            methods,
            properties,
            events,
            bases,
        })
}

fn ty(name: &str) -> TypeRef {
    TypeRef::builtin(name).expect("pools only hold builtin types")
}

/// Build a table where declaration `i` may only extend declarations `< i`.
fn build(decls: &[Decl]) -> (ContractTable, Vec<ContractId>) {
    let mut table = ContractTable::new();
    let mut ids: Vec<ContractId> = Vec::new();
    for (i, decl) in decls.iter().enumerate() {
        let mut contract = InterfaceContract::interface("Gen", format!("I{i}"));
        for m in &decl.methods {
            let params = m
                .params
                .iter()
                .enumerate()
                .map(|(p, &t)| Param::new(format!("p{p}"), ty(PARAM_TYPES[t])))
                .collect();
            contract = contract.with_method(MethodSignature::new(
                METHOD_NAMES[m.name],
                ty(RETURN_TYPES[m.ret]),
                params,
            ));
        }
        for p in &decl.properties {
            contract = contract.with_property(PropertyDescriptor::new(
                PROPERTY_NAMES[p.name],
                ty(PROPERTY_TYPES[p.ty]),
                p.get,
                p.set,
            ));
        }
        for &e in &decl.events {
            contract = contract.with_event(EventDescriptor::new(
                EVENT_NAMES[e],
                TypeRef::reference("EventHandler"),
            ));
        }
        if i > 0 {
            let mut seen = HashSet::new();
            for base in &decl.bases {
                let base = ids[base.index(i)];
                if seen.insert(base) {
                    contract = contract.with_base(base);
                }
            }
        }
        ids.push(table.insert(contract).expect("generated names are unique"));
    }
    (table, ids)
}

/// Recursive reference collection, with no visited set and no ordering.
fn naive_methods(table: &ContractTable, id: ContractId) -> HashSet<MethodSignature> {
    fn walk(
        table: &ContractTable,
        id: ContractId,
        methods: &mut HashSet<MethodSignature>,
        properties: &mut HashMap<String, PropertyDescriptor>,
        events: &mut HashMap<String, EventDescriptor>,
    ) {
        let contract = table.get(id);
        methods.extend(contract.methods.iter().cloned());
        for p in &contract.properties {
            let entry = properties
                .entry(p.name.clone())
                .or_insert_with(|| PropertyDescriptor::new(p.name.clone(), p.ty.clone(), false, false));
            entry.has_getter |= p.has_getter;
            entry.has_setter |= p.has_setter;
        }
        for e in &contract.events {
            events.entry(e.name.clone()).or_insert_with(|| e.clone());
        }
        for &base in &contract.bases {
            walk(table, base, methods, properties, events);
        }
    }

    let mut methods = HashSet::new();
    let mut properties = HashMap::new();
    let mut events = HashMap::new();
    walk(table, id, &mut methods, &mut properties, &mut events);
    for p in properties.values() {
        methods.extend(p.getter());
        methods.extend(p.setter());
    }
    for e in events.values() {
        methods.insert(e.adder());
        methods.insert(e.remover());
    }
    methods
}

proptest! {
    #[test]
    fn flatten_matches_naive_collection(decls in proptest::collection::vec(decl_strategy(), 1..8)) {
        let (table, ids) = build(&decls);
        for &id in &ids {
            let flat = flatten(&table, id);
            let as_set: HashSet<MethodSignature> = flat.methods.iter().cloned().collect();
            prop_assert_eq!(as_set.len(), flat.methods.len(), "duplicate in flattened methods");
            prop_assert_eq!(as_set, naive_methods(&table, id));
        }
    }

    #[test]
    fn plan_covers_every_method_exactly_once(decls in proptest::collection::vec(decl_strategy(), 1..8)) {
        let (table, ids) = build(&decls);
        for &id in &ids {
            let flat = flatten(&table, id);
            let plan = synthesize_contract(&table, id).unwrap();

            let covered: Vec<&MethodSignature> = plan.covered_methods().collect();
            let covered_set: HashSet<&MethodSignature> = covered.iter().copied().collect();
            prop_assert_eq!(covered.len(), covered_set.len(), "member covered twice");

            let expected: HashSet<&MethodSignature> = flat.methods.iter().collect();
            prop_assert_eq!(covered_set, expected);
        }
    }

    #[test]
    fn accessors_are_exclusive(decls in proptest::collection::vec(decl_strategy(), 1..8)) {
        let (table, ids) = build(&decls);
        for &id in &ids {
            let plan = synthesize_contract(&table, id).unwrap();
            for body in &plan.default_method_bodies {
                prop_assert_eq!(body.signature.kind, MemberKind::Plain);
            }
            for accessor in &plan.accessor_bodies {
                prop_assert!(plan.default_for(&accessor.signature).is_none());
            }
        }
    }

    #[test]
    fn one_field_per_distinct_property(decls in proptest::collection::vec(decl_strategy(), 1..8)) {
        let (table, ids) = build(&decls);
        for &id in &ids {
            let flat = flatten(&table, id);
            let plan = synthesize_contract(&table, id).unwrap();

            let names: HashSet<&str> = plan.backing_fields.iter().map(|f| f.field_name.as_str()).collect();
            prop_assert_eq!(names.len(), plan.backing_fields.len());
            prop_assert_eq!(plan.backing_fields.len(), flat.properties.len());
        }
    }

    #[test]
    fn classification_ignores_property_order(decls in proptest::collection::vec(decl_strategy(), 1..6)) {
        let (table, ids) = build(&decls);
        let top = *ids.last().unwrap();
        let flat = flatten(&table, top);

        let mut reversed = flat.properties.clone();
        reversed.reverse();
        let mut events = flat.events.clone();
        events.reverse();

        let forward = classify(&flat.methods, &flat.properties, &flat.events);
        let backward = classify(&flat.methods, &reversed, &events);

        prop_assert_eq!(&forward.plain, &backward.plain);
        let f: HashSet<&MethodSignature> = forward.accessors.iter().map(|a| &a.signature).collect();
        let b: HashSet<&MethodSignature> = backward.accessors.iter().map(|a| &a.signature).collect();
        prop_assert_eq!(f, b);
    }
}
