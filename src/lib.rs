//! Loads ontology mapping definitions embedded in the application into
//! validated [`OntologyMapping`](mapping::OntologyMapping) documents.
//!
//! ```
//! use ontomap::mapping::{EmbeddedOntologyMappingLoader, OntologyMappingLoader};
//!
//! let loader = EmbeddedOntologyMappingLoader::new("mappings/v1/brick_to_rec.json")?;
//! let mapping = loader.load_ontology_mapping()?;
//! assert!(!mapping.interface_remaps.is_empty());
//! # Ok::<(), ontomap::mapping::OntologyMappingError>(())
//! ```

pub mod config;
pub mod logger;
pub mod mapping;

pub use mapping::{
    EmbeddedOntologyMappingLoader, OntologyMapping, OntologyMappingError, OntologyMappingLoader,
};
