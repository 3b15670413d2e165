use serde::{Deserialize, Serialize};

/// Ontology mapping document describing how one vocabulary is translated into
/// another.
///
/// Every section is optional in the source JSON and defaults to empty.
/// Unknown keys are ignored so that mapping files can carry extra metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OntologyMapping {
    /// Ontologies consumed and produced by the mapping.
    pub header: MappingHeader,
    /// Namespace prefixes rewritten before interface lookup.
    pub namespace_remaps: Vec<NamespaceRemap>,
    /// Explicit interface translations.
    pub interface_remaps: Vec<InterfaceRemap>,
    /// Explicit relationship translations.
    pub relationship_remaps: Vec<RelationshipRemap>,
    /// Input properties copied onto output properties.
    pub property_projections: Vec<PropertyProjection>,
    /// Output properties filled from the first populated input property.
    pub fill_properties: Vec<FillProperty>,
    /// Value rewrites applied to matching output properties.
    pub object_transformations: Vec<ObjectTransformation>,
}

impl OntologyMapping {
    /// Counts the entries of every section of the document.
    #[must_use]
    pub fn summary(&self) -> MappingSummary {
        MappingSummary {
            input_ontologies: self.header.input_ontologies.len(),
            output_ontologies: self.header.output_ontologies.len(),
            namespace_remaps: self.namespace_remaps.len(),
            interface_remaps: self.interface_remaps.len(),
            relationship_remaps: self.relationship_remaps.len(),
            property_projections: self.property_projections.len(),
            fill_properties: self.fill_properties.len(),
            object_transformations: self.object_transformations.len(),
        }
    }
}

/// Header listing the ontologies on each side of the mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MappingHeader {
    pub input_ontologies: Vec<OntologyDescriptor>,
    pub output_ontologies: Vec<OntologyDescriptor>,
}

/// Identifies an ontology by name and version.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OntologyDescriptor {
    pub name: String,
    pub version: String,
    pub dtdl_version: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NamespaceRemap {
    pub original_namespace: String,
    pub new_namespace: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InterfaceRemap {
    pub input_dtmi: String,
    pub output_dtmi: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RelationshipRemap {
    pub input_relationship: String,
    pub output_relationship: String,
}

/// Copies an input property onto an output property of matching interfaces.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PropertyProjection {
    /// Regular expression selecting the output interfaces the rule applies to.
    pub output_dtmi_filter: String,
    pub output_property_name: String,
    pub input_property_name: String,
    /// Whether projected values are appended to a collection.
    pub is_output_property_collection: bool,
    /// Lower values win when several projections target the same property.
    pub priority: i32,
}

/// Fills an output property from the first input property carrying a value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FillProperty {
    pub output_dtmi_filter: String,
    pub output_property_name: String,
    pub input_property_names: Vec<String>,
}

/// Rewrites a property value on matching interfaces.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ObjectTransformation {
    pub output_dtmi_filter: String,
    pub output_property_name: String,
    pub input_property_name: String,
    pub input_property_value: Option<String>,
    pub output_property_value: Option<String>,
}

/// Entry counts for each section of an [`OntologyMapping`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MappingSummary {
    pub input_ontologies: usize,
    pub output_ontologies: usize,
    pub namespace_remaps: usize,
    pub interface_remaps: usize,
    pub relationship_remaps: usize,
    pub property_projections: usize,
    pub fill_properties: usize,
    pub object_transformations: usize,
}
