use std::collections::HashSet;

use crate::descriptors::{DescriptorTable, HierarchyDescriptor, Slot};

/// Depth-first walk over `start` and every type in its subtype set.
///
/// Each slot is visited once however many paths reach it. Returns the
/// visited slots in visit order.
pub(crate) fn walk_subtree<D, F>(table: &mut DescriptorTable<D>, start: Slot, mut visit: F) -> Vec<Slot>
where
    D: HierarchyDescriptor,
    F: FnMut(&mut D),
{
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![start];

    while let Some(slot) = stack.pop() {
        if !visited.insert(slot) {
            continue;
        }
        visit(table.at_mut(slot));
        order.push(slot);

        let next: Vec<Slot> = table
            .at(slot)
            .sub_type_names()
            .iter()
            .rev()
            .filter_map(|name| table.slot_of(name))
            .filter(|s| !visited.contains(s))
            .collect();
        stack.extend(next);
    }

    order
}
