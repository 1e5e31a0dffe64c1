use super::{propagate, ErrorSink};
use crate::descriptors::{DescriptorTable, EntityDescriptor, RelationshipDescriptor, Slot};
use crate::errors::{Result, TypeXError};
use crate::model::EndPosition;

fn resolve_end(
    relationship: &RelationshipDescriptor,
    end: EndPosition,
    entities: &DescriptorTable<EntityDescriptor>,
    source_label: &str,
) -> Result<Slot> {
    let name = relationship.end_type_name(end);
    name.and_then(|n| entities.slot_of(n))
        .ok_or_else(|| TypeXError::MissingEndDef {
            relationship_name: relationship.name().to_string(),
            end,
            entity_type_name: name.map(str::to_string),
            source_label: source_label.to_string(),
        })
}

/// Mark each relationship on both end entity types and all their subtypes
pub(crate) fn apply_relationships(
    relationships: &DescriptorTable<RelationshipDescriptor>,
    entities: &mut DescriptorTable<EntityDescriptor>,
    sink: &mut ErrorSink,
) -> Result<()> {
    let source_label = sink.source_label().to_string();

    for relationship in relationships.iter() {
        let mut ends = Vec::with_capacity(2);
        for end in [EndPosition::End1, EndPosition::End2] {
            match resolve_end(relationship, end, entities, &source_label) {
                Ok(slot) => ends.push(slot),
                Err(err) => sink.record(err)?,
            }
        }
        if ends.len() != 2 {
            continue;
        }

        let name = relationship.name();
        for slot in ends {
            entities.at_mut(slot).add_direct_relationship(name);
            propagate::walk_subtree(entities, slot, |d| d.add_inherited_relationship(name));
        }
    }

    Ok(())
}
