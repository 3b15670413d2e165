use std::io::{self, Read};

use json_comments::CommentSettings;
use tracing::{debug, info, warn};

use super::{
    catalog::{EmbeddedResources, ResourceCatalog},
    entities::OntologyMapping,
    value_objects::ResourcePath,
};
use crate::config::MappingSettings;

/// Contract implemented by components able to produce an [`OntologyMapping`].
pub trait OntologyMappingLoader {
    /// Loads and validates the mapping document.
    ///
    /// # Errors
    ///
    /// Implementations report resolution, read and decoding failures through
    /// [`OntologyMappingError`].
    fn load_ontology_mapping(&self) -> Result<OntologyMapping, OntologyMappingError>;
}

/// Errors raised while constructing a loader or loading a mapping document.
#[derive(Debug, thiserror::Error)]
pub enum OntologyMappingError {
    /// A required argument was empty or whitespace.
    #[error("value for `{name}` must not be empty or whitespace")]
    InvalidArgument { name: &'static str },
    /// The path did not select exactly one catalog entry.
    #[error(
        "expected exactly one embedded resource matching `{path}`, found {}",
        .candidates.len()
    )]
    ResourceSelection {
        path: String,
        candidates: Vec<String>,
    },
    /// The catalog listed the resource but no stream could be opened.
    #[error("embedded resource `{path}` could not be opened")]
    ResourceNotFound { path: String },
    /// Reading the resource stream failed midway.
    #[error("failed to read embedded resource `{path}`: {source}")]
    ResourceRead { path: String, source: io::Error },
    /// The resource is not valid JSON for an ontology mapping.
    #[error("Mappings file '{path}' is malformed.")]
    MappingFileMalformed {
        path: String,
        source: serde_json::Error,
    },
    /// The resource decoded to `null`.
    #[error("Mappings file '{path}' is empty.")]
    MappingFileEmpty { path: String },
}

impl OntologyMappingError {
    /// Returns the resource path the failure relates to, as supplied by the
    /// caller.
    #[must_use]
    pub fn resource_path(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { .. } => None,
            Self::ResourceSelection { path, .. }
            | Self::ResourceNotFound { path }
            | Self::ResourceRead { path, .. }
            | Self::MappingFileMalformed { path, .. }
            | Self::MappingFileEmpty { path } => Some(path),
        }
    }

    /// Whether the mapping file content is at fault and an operator can fix it
    /// by correcting the source document.
    #[must_use]
    pub fn is_mapping_file_error(&self) -> bool {
        matches!(
            self,
            Self::MappingFileMalformed { .. } | Self::MappingFileEmpty { .. }
        )
    }

    /// Whether the failure points at how resources were bundled rather than at
    /// their content.
    #[must_use]
    pub fn is_packaging_error(&self) -> bool {
        matches!(
            self,
            Self::ResourceSelection { .. }
                | Self::ResourceNotFound { .. }
                | Self::ResourceRead { .. }
        )
    }

    fn selection(path: &ResourcePath, candidates: Vec<String>) -> Self {
        Self::ResourceSelection {
            path: path.to_string(),
            candidates,
        }
    }

    fn not_found(path: &ResourcePath) -> Self {
        Self::ResourceNotFound {
            path: path.to_string(),
        }
    }

    fn read(path: &ResourcePath, source: io::Error) -> Self {
        Self::ResourceRead {
            path: path.to_string(),
            source,
        }
    }

    fn malformed(path: &ResourcePath, source: serde_json::Error) -> Self {
        Self::MappingFileMalformed {
            path: path.to_string(),
            source,
        }
    }

    fn empty(path: &ResourcePath) -> Self {
        Self::MappingFileEmpty {
            path: path.to_string(),
        }
    }
}

/// Loads an ontology mapping from a resource catalog by suffix match.
///
/// The loader holds only the configured path and the catalog handle.
/// Resolution, reading and decoding happen afresh on every call.
#[derive(Clone, Debug)]
pub struct EmbeddedOntologyMappingLoader<C: ResourceCatalog = EmbeddedResources> {
    catalog: C,
    resource_path: ResourcePath,
}

impl EmbeddedOntologyMappingLoader<EmbeddedResources> {
    /// Creates a loader resolving against the mappings bundled with this crate.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyMappingError::InvalidArgument`] for a blank path.
    pub fn new(resource_path: impl Into<String>) -> Result<Self, OntologyMappingError> {
        Self::with_catalog(EmbeddedResources::bundled(), resource_path)
    }

    /// Builds a loader for the bundled mappings from configuration settings.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyMappingError::InvalidArgument`] when no resource is
    /// configured or the configured value is blank.
    pub fn from_config(settings: &MappingSettings) -> Result<Self, OntologyMappingError> {
        Self::new(settings.resource.clone().unwrap_or_default())
    }
}

impl<C: ResourceCatalog> EmbeddedOntologyMappingLoader<C> {
    /// Creates a loader resolving against the supplied catalog.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyMappingError::InvalidArgument`] for a blank path.
    pub fn with_catalog(
        catalog: C,
        resource_path: impl Into<String>,
    ) -> Result<Self, OntologyMappingError> {
        Ok(Self {
            catalog,
            resource_path: ResourcePath::new(resource_path)?,
        })
    }

    /// Returns the configured resource path.
    #[must_use]
    pub fn resource_path(&self) -> &ResourcePath {
        &self.resource_path
    }

    /// Returns the catalog the loader resolves against.
    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    fn resolve(&self) -> Result<String, OntologyMappingError> {
        let mut candidates: Vec<String> = self
            .catalog
            .resource_names()
            .into_iter()
            .filter(|name| self.resource_path.matches(name))
            .collect();

        if candidates.len() != 1 {
            warn!(
                resource_path = %self.resource_path,
                matches = candidates.len(),
                "ontology_mapping_selection_failed"
            );
            return Err(OntologyMappingError::selection(
                &self.resource_path,
                candidates,
            ));
        }
        Ok(candidates.remove(0))
    }

    fn read(&self, name: &str) -> Result<String, OntologyMappingError> {
        let Some(mut stream) = self.catalog.open_resource(name) else {
            return Err(OntologyMappingError::not_found(&self.resource_path));
        };

        let mut bytes = Vec::new();
        stream
            .read_to_end(&mut bytes)
            .map_err(|source| OntologyMappingError::read(&self.resource_path, source))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn decode(&self, text: &str) -> Result<OntologyMapping, OntologyMappingError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let stripped = CommentSettings::c_style().strip_comments(text.as_bytes());
        let mapping: Option<OntologyMapping> = serde_json::from_reader(stripped)
            .map_err(|source| OntologyMappingError::malformed(&self.resource_path, source))?;

        mapping.ok_or_else(|| OntologyMappingError::empty(&self.resource_path))
    }
}

impl<C: ResourceCatalog> OntologyMappingLoader for EmbeddedOntologyMappingLoader<C> {
    fn load_ontology_mapping(&self) -> Result<OntologyMapping, OntologyMappingError> {
        info!(resource_path = %self.resource_path, "loading ontology mapping");

        let name = self.resolve()?;
        debug!(resource_path = %self.resource_path, resource = %name, "ontology_mapping_resolved");

        let text = self.read(&name)?;
        let mapping = self.decode(&text).map_err(|err| {
            warn!(err.msg = %err, err.detail = ?err, "ontology_mapping_rejected");
            err
        })?;

        debug!(
            resource_path = %self.resource_path,
            summary = ?mapping.summary(),
            "ontology_mapping_loaded"
        );
        Ok(mapping)
    }
}
