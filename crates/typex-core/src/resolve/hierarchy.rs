use std::collections::HashSet;

use super::ErrorSink;
use crate::descriptors::{DescriptorTable, HierarchyDescriptor, Slot};
use crate::errors::{Result, TypeXError};
use crate::model::{AttributeDef, SupertypedDef, TypeCategory};

fn missing_name(category: TypeCategory, type_name: &str, source_label: &str) -> TypeXError {
    match category {
        TypeCategory::Classification => TypeXError::MissingClassificationSupertypeName {
            type_name: type_name.to_string(),
            source_label: source_label.to_string(),
        },
        _ => TypeXError::MissingSupertypeName {
            type_name: type_name.to_string(),
            source_label: source_label.to_string(),
        },
    }
}

fn missing_def(
    category: TypeCategory,
    type_name: &str,
    supertype_name: &str,
    source_label: &str,
) -> TypeXError {
    match category {
        TypeCategory::Classification => TypeXError::MissingClassificationSupertypeDef {
            type_name: type_name.to_string(),
            supertype_name: supertype_name.to_string(),
            source_label: source_label.to_string(),
        },
        _ => TypeXError::MissingSupertypeDef {
            type_name: type_name.to_string(),
            supertype_name: supertype_name.to_string(),
            source_label: source_label.to_string(),
        },
    }
}

/// Walk the supertype chain of a type up to its root.
///
/// Returns slots self-first. A broken link is reported against the type that
/// holds it, which may be an ancestor of `start`. A cycle is reported against
/// its lexically smallest member so every walk into it yields the same error.
///
/// # Errors
///
/// Missing-name, missing-definition or cycle errors for `category`.
pub(crate) fn supertype_chain<D: HierarchyDescriptor>(
    table: &DescriptorTable<D>,
    start: Slot,
    category: TypeCategory,
    source_label: &str,
) -> Result<Vec<Slot>> {
    let mut chain = vec![start];
    let mut visited = HashSet::from([start]);
    let mut current = start;

    while let Some(link) = table.at(current).def().supertype() {
        let holder = table.at(current).def().type_name();
        let super_name = link
            .name()
            .ok_or_else(|| missing_name(category, holder, source_label))?;
        let super_slot = table
            .slot_of(super_name)
            .ok_or_else(|| missing_def(category, holder, super_name, source_label))?;

        if !visited.insert(super_slot) {
            let entry = chain
                .iter()
                .position(|&s| s == super_slot)
                .unwrap_or_default();
            let smallest = chain[entry..]
                .iter()
                .map(|&s| table.at(s).def().type_name())
                .min()
                .unwrap_or(holder);
            return Err(TypeXError::SupertypeCycle {
                category,
                type_name: smallest.to_string(),
                source_label: source_label.to_string(),
            });
        }

        chain.push(super_slot);
        current = super_slot;
    }

    Ok(chain)
}

/// Record every type in the subtype set of each of its ancestors
pub(crate) fn link_subtypes<D: HierarchyDescriptor>(
    table: &mut DescriptorTable<D>,
    category: TypeCategory,
    sink: &mut ErrorSink,
) -> Result<()> {
    let source_label = sink.source_label().to_string();
    let slots: Vec<Slot> = table.slots().collect();

    for slot in slots {
        let chain = match supertype_chain(table, slot, category, &source_label) {
            Ok(chain) => chain,
            Err(err) => {
                sink.record(err)?;
                continue;
            }
        };

        let name = table.at(slot).def().type_name().to_string();
        for (depth, &ancestor) in chain.iter().enumerate().skip(1) {
            table.at_mut(ancestor).add_sub_type_name(&name, depth == 1);
        }
    }

    Ok(())
}

/// Compute inherited attributes: root-most ancestor first, own attributes last
pub(crate) fn inherit_attributes<D: HierarchyDescriptor>(
    table: &mut DescriptorTable<D>,
    category: TypeCategory,
    sink: &mut ErrorSink,
) -> Result<()> {
    let source_label = sink.source_label().to_string();
    let slots: Vec<Slot> = table.slots().collect();

    for slot in slots {
        let chain = match supertype_chain(table, slot, category, &source_label) {
            Ok(chain) => chain,
            Err(err) => {
                sink.record(err)?;
                continue;
            }
        };

        let attributes: Vec<AttributeDef> = chain
            .iter()
            .rev()
            .flat_map(|&s| table.at(s).def().own_attributes().iter().cloned())
            .collect();
        table.at_mut(slot).set_inherited_attributes(attributes);
    }

    Ok(())
}
