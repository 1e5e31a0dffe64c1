use super::{propagate, ErrorSink};
use crate::descriptors::{ClassificationDescriptor, DescriptorTable, EntityDescriptor, Slot};
use crate::errors::{Result, TypeXError};
use crate::model::TypeLink;

fn resolve_valid_entity(
    classification_name: &str,
    link: &TypeLink,
    entities: &DescriptorTable<EntityDescriptor>,
    source_label: &str,
) -> Result<Slot> {
    let name = link
        .name()
        .ok_or_else(|| TypeXError::MissingValidEntityName {
            classification_name: classification_name.to_string(),
            source_label: source_label.to_string(),
        })?;
    entities
        .slot_of(name)
        .ok_or_else(|| TypeXError::MissingValidEntityDef {
            classification_name: classification_name.to_string(),
            entity_type_name: name.to_string(),
            source_label: source_label.to_string(),
        })
}

/// Mark each classification on its valid entity types and all their subtypes
pub(crate) fn apply_valid_entities(
    classifications: &mut DescriptorTable<ClassificationDescriptor>,
    entities: &mut DescriptorTable<EntityDescriptor>,
    sink: &mut ErrorSink,
) -> Result<()> {
    let source_label = sink.source_label().to_string();
    let slots: Vec<Slot> = classifications.slots().collect();

    for slot in slots {
        let classification = classifications.at(slot);
        let name = classification.name().to_string();
        let links = classification.classification_def().valid_entity_types.clone();

        let mut covered = Vec::new();
        for link in &links {
            let entity_slot = match resolve_valid_entity(&name, link, entities, &source_label) {
                Ok(s) => s,
                Err(err) => {
                    sink.record(err)?;
                    continue;
                }
            };

            entities.at_mut(entity_slot).add_direct_classification(&name);
            let visited = propagate::walk_subtree(entities, entity_slot, |d| {
                d.add_inherited_classification(&name)
            });
            covered.extend(visited);
        }

        let target = classifications.at_mut(slot);
        for entity_slot in covered {
            target.add_valid_entity_type_name(entities.at(entity_slot).name());
        }
    }

    Ok(())
}
