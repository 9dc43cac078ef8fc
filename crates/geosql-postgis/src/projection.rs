//! Projected-property metadata.
//!
//! A view lists the properties being loaded; storage descriptors (one per
//! mapped table) carry the resolved storage type of each property. Both are
//! produced by the data-access layer and only read here.

use geosql_core::SpatialKind;
use serde::{Deserialize, Serialize};

/// Declared storage type of a projected property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclaredType {
    Geography,
    Geometry,
    #[serde(other)]
    Other,
}

impl DeclaredType {
    pub fn spatial_kind(self) -> Option<SpatialKind> {
        match self {
            Self::Geography => Some(SpatialKind::Geography),
            Self::Geometry => Some(SpatialKind::Geometry),
            Self::Other => None,
        }
    }
}

impl From<SpatialKind> for DeclaredType {
    fn from(kind: SpatialKind) -> Self {
        match kind {
            SpatialKind::Geography => Self::Geography,
            SpatialKind::Geometry => Self::Geometry,
        }
    }
}

/// One entry per property in the view being loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnProjection {
    pub name: String,
    pub declared_type: DeclaredType,
}

impl ColumnProjection {
    pub fn new(name: impl Into<String>, declared_type: DeclaredType) -> Self {
        Self {
            name: name.into(),
            declared_type,
        }
    }

    pub fn other(name: impl Into<String>) -> Self {
        Self::new(name, DeclaredType::Other)
    }

    pub fn geography(name: impl Into<String>) -> Self {
        Self::new(name, DeclaredType::Geography)
    }

    pub fn geometry(name: impl Into<String>) -> Self {
        Self::new(name, DeclaredType::Geometry)
    }

    pub fn is_spatial(&self) -> bool {
        self.declared_type.spatial_kind().is_some()
    }
}

/// A property of the view, in select-list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewProperty {
    pub name: String,
}

impl ViewProperty {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Storage info of a single property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropStorage {
    pub name: String,
    pub property_type: DeclaredType,
}

/// Storage descriptor for one mapped table of the view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageStruct {
    #[serde(default)]
    pub props: Vec<PropStorage>,
}

impl StorageStruct {
    pub fn new(props: Vec<PropStorage>) -> Self {
        Self { props }
    }

    /// Add a property, builder style.
    #[must_use]
    pub fn with_prop(mut self, name: impl Into<String>, property_type: DeclaredType) -> Self {
        self.props.push(PropStorage {
            name: name.into(),
            property_type,
        });
        self
    }

    fn find(&self, name: &str) -> Option<&PropStorage> {
        self.props.iter().find(|p| p.name == name)
    }
}

/// Resolve the declared type of each view property.
///
/// The first storage descriptor that knows a property wins; properties no
/// descriptor knows resolve to [`DeclaredType::Other`]. Output keeps view order.
pub fn resolve_projections(
    view: &[ViewProperty],
    storage: &[StorageStruct],
) -> Vec<ColumnProjection> {
    view.iter()
        .map(|prop| {
            let declared_type = storage
                .iter()
                .find_map(|s| s.find(&prop.name))
                .map_or(DeclaredType::Other, |p| p.property_type);
            ColumnProjection::new(prop.name.clone(), declared_type)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_first_descriptor_wins() {
        let view = vec![
            ViewProperty::new("id"),
            ViewProperty::new("location"),
            ViewProperty::new("area"),
            ViewProperty::new("unmapped"),
        ];
        let storage = vec![
            StorageStruct::default()
                .with_prop("id", DeclaredType::Other)
                .with_prop("location", DeclaredType::Geography),
            StorageStruct::default()
                .with_prop("location", DeclaredType::Other)
                .with_prop("area", DeclaredType::Geometry),
        ];

        let resolved = resolve_projections(&view, &storage);
        assert_eq!(
            resolved,
            vec![
                ColumnProjection::other("id"),
                ColumnProjection::geography("location"),
                ColumnProjection::geometry("area"),
                ColumnProjection::other("unmapped"),
            ]
        );
    }

    #[test]
    fn test_is_spatial() {
        assert!(ColumnProjection::geography("g").is_spatial());
        assert!(ColumnProjection::geometry("g").is_spatial());
        assert!(!ColumnProjection::other("g").is_spatial());
    }

    #[test]
    fn test_declared_type_deserialize() {
        let storage: StorageStruct = serde_json::from_str(
            r#"{"props":[{"name":"geo","property_type":"geography"},{"name":"n","property_type":"int4"}]}"#,
        )
        .unwrap();
        assert_eq!(storage.props[0].property_type, DeclaredType::Geography);
        assert_eq!(storage.props[1].property_type, DeclaredType::Other);
        assert_eq!(
            DeclaredType::from(SpatialKind::Geometry).spatial_kind(),
            Some(SpatialKind::Geometry)
        );
    }
}
