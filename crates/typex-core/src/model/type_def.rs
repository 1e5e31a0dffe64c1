use serde::{Deserialize, Serialize};

use super::{ClassificationDef, EntityDef, EnumDef, RelationshipDef, TypeCategory};

/// A raw type definition tagged by category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum TypeDef {
    Entity(EntityDef),
    Relationship(RelationshipDef),
    Classification(ClassificationDef),
    Enum(EnumDef),
}

impl TypeDef {
    pub fn category(&self) -> TypeCategory {
        match self {
            TypeDef::Entity(_) => TypeCategory::Entity,
            TypeDef::Relationship(_) => TypeCategory::Relationship,
            TypeDef::Classification(_) => TypeCategory::Classification,
            TypeDef::Enum(_) => TypeCategory::Enum,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TypeDef::Entity(d) => &d.name,
            TypeDef::Relationship(d) => &d.name,
            TypeDef::Classification(d) => &d.name,
            TypeDef::Enum(d) => &d.name,
        }
    }

    pub fn guid(&self) -> &str {
        match self {
            TypeDef::Entity(d) => &d.guid,
            TypeDef::Relationship(d) => &d.guid,
            TypeDef::Classification(d) => &d.guid,
            TypeDef::Enum(d) => &d.guid,
        }
    }
}

impl From<EntityDef> for TypeDef {
    fn from(def: EntityDef) -> Self {
        TypeDef::Entity(def)
    }
}

impl From<RelationshipDef> for TypeDef {
    fn from(def: RelationshipDef) -> Self {
        TypeDef::Relationship(def)
    }
}

impl From<ClassificationDef> for TypeDef {
    fn from(def: ClassificationDef) -> Self {
        TypeDef::Classification(def)
    }
}

impl From<EnumDef> for TypeDef {
    fn from(def: EnumDef) -> Self {
        TypeDef::Enum(def)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_json_shape() {
        let json = r#"{
            "category": "entity",
            "name": "Asset",
            "guid": "g-asset",
            "supertype": { "name": "Referenceable" },
            "attributes": [ { "name": "displayName", "typeName": "string" } ]
        }"#;
        let def: TypeDef = serde_json::from_str(json).unwrap();

        assert_eq!(def.category(), TypeCategory::Entity);
        assert_eq!(def.name(), "Asset");
        match def {
            TypeDef::Entity(e) => {
                assert_eq!(
                    e.supertype.and_then(|l| l.name),
                    Some("Referenceable".to_string())
                );
                assert_eq!(e.attributes[0].name, "displayName");
            }
            other => panic!("expected entity, got {:?}", other.category()),
        }
    }
}
