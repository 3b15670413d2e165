use std::{
    collections::BTreeMap,
    io::{Cursor, Read},
    sync::Arc,
};

use include_dir::{include_dir, Dir};

/// Mapping definitions compiled into this crate.
static BUNDLED: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/resources");

/// Contract describing the set of resources bundled with the running process.
///
/// Implementors must be safe for concurrent reads: loaders resolve against the
/// catalog on every call and never cache what they find.
pub trait ResourceCatalog: Send + Sync {
    /// Lists the fully qualified name of every known resource.
    fn resource_names(&self) -> Vec<String>;

    /// Opens a read stream for the named resource.
    ///
    /// Returns `None` when the resource cannot be opened, even if it is listed
    /// by [`ResourceCatalog::resource_names`].
    fn open_resource(&self, name: &str) -> Option<Box<dyn Read + '_>>;
}

impl<C: ResourceCatalog + ?Sized> ResourceCatalog for Arc<C> {
    fn resource_names(&self) -> Vec<String> {
        (**self).resource_names()
    }

    fn open_resource(&self, name: &str) -> Option<Box<dyn Read + '_>> {
        (**self).open_resource(name)
    }
}

/// Catalog adapter over a directory embedded with [`include_dir`].
///
/// Resource names are the `/` separated paths of the embedded files, relative
/// to the embedded root.
#[derive(Clone, Copy, Debug)]
pub struct EmbeddedResources {
    root: &'static Dir<'static>,
}

impl EmbeddedResources {
    /// Wraps an embedded directory.
    #[must_use]
    pub const fn new(root: &'static Dir<'static>) -> Self {
        Self { root }
    }

    /// Returns the mapping definitions shipped with this crate.
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(&BUNDLED)
    }
}

impl Default for EmbeddedResources {
    fn default() -> Self {
        Self::bundled()
    }
}

fn collect_names(dir: &Dir<'_>, names: &mut Vec<String>) {
    for file in dir.files() {
        let name = file
            .path()
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        names.push(name);
    }
    for child in dir.dirs() {
        collect_names(child, names);
    }
}

impl ResourceCatalog for EmbeddedResources {
    fn resource_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        collect_names(self.root, &mut names);
        names.sort();
        names
    }

    fn open_resource(&self, name: &str) -> Option<Box<dyn Read + '_>> {
        let file = self.root.get_file(name)?;
        Some(Box::new(Cursor::new(file.contents())))
    }
}

/// Catalog adapter holding resource contents in memory.
///
/// Useful for hosts that compile mappings in with `include_bytes!` under names
/// of their own choosing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InMemoryResources {
    resources: BTreeMap<String, Vec<u8>>,
}

impl InMemoryResources {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a resource, replacing any previous content under `name`.
    #[must_use]
    pub fn with_resource(mut self, name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(name, contents);
        self
    }

    /// Registers a resource, returning the content it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        contents: impl Into<Vec<u8>>,
    ) -> Option<Vec<u8>> {
        self.resources.insert(name.into(), contents.into())
    }

    /// Returns the number of registered resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Returns `true` when no resource is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl ResourceCatalog for InMemoryResources {
    fn resource_names(&self) -> Vec<String> {
        self.resources.keys().cloned().collect()
    }

    fn open_resource(&self, name: &str) -> Option<Box<dyn Read + '_>> {
        let contents = self.resources.get(name)?;
        Some(Box::new(Cursor::new(contents.as_slice())))
    }
}
