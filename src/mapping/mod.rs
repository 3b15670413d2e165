//! Ontology mapping documents and the loaders that resolve them.
//!
//! A mapping definition is a JSON document (comments allowed) bundled with the
//! application. Loaders resolve it by suffix against a [`ResourceCatalog`],
//! decode it, and classify every failure into [`OntologyMappingError`]. The
//! catalog is a port so that embedded directories, in-memory tables and test
//! stubs can all back the same loader.

pub mod catalog;
pub mod entities;
pub mod loader;
pub mod value_objects;

pub use catalog::{EmbeddedResources, InMemoryResources, ResourceCatalog};
pub use entities::{
    FillProperty, InterfaceRemap, MappingHeader, MappingSummary, NamespaceRemap,
    ObjectTransformation, OntologyDescriptor, OntologyMapping, PropertyProjection,
    RelationshipRemap,
};
pub use loader::{EmbeddedOntologyMappingLoader, OntologyMappingError, OntologyMappingLoader};
pub use value_objects::ResourcePath;
