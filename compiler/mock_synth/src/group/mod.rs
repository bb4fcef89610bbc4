//! Namespace grouping.

use mock_ir::{NamespaceGroup, SynthesizedTypePlan};
use rustc_hash::FxHashMap;

/// Bucket plans by target namespace.
///
/// Stable: groups appear in the order their first plan appears, and plans
/// keep their relative input order within a group. Nothing is sorted.
pub fn group_by_namespace(
    plans: impl IntoIterator<Item = SynthesizedTypePlan>,
) -> Vec<NamespaceGroup> {
    let mut groups: Vec<NamespaceGroup> = Vec::new();
    let mut index: FxHashMap<String, usize> = FxHashMap::default();

    for plan in plans {
        let slot = match index.get(&plan.target_namespace) {
            Some(&slot) => slot,
            None => {
                let slot = groups.len();
                index.insert(plan.target_namespace.clone(), slot);
                groups.push(NamespaceGroup {
                    namespace: plan.target_namespace.clone(),
                    plans: Vec::new(),
                });
                slot
            }
        };
        groups[slot].plans.push(plan);
    }

    groups
}
