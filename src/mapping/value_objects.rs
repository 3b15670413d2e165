use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use super::loader::OntologyMappingError;

const PARAMETER_NAME: &str = "resource_path";

/// Value object naming the embedded mapping resource a loader resolves.
///
/// The path is the trailing, identifying part of a fully qualified resource
/// name, e.g. `mappings/v1/brick_to_rec.json`. Blank paths are rejected at
/// construction time so that a loader never starts resolution without one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourcePath {
    value: String,
    key: String,
}

impl ResourcePath {
    /// Validates and constructs a new [`ResourcePath`].
    ///
    /// # Errors
    ///
    /// Returns [`OntologyMappingError::InvalidArgument`] when `value` is empty
    /// or only contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, OntologyMappingError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(OntologyMappingError::InvalidArgument {
                name: PARAMETER_NAME,
            });
        }
        let key = fold(&value);
        Ok(Self { value, key })
    }

    /// Returns the text supplied by the caller.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Checks whether a fully qualified resource name ends with this path.
    ///
    /// Comparison ignores case and treats `/`, `\` and `.` as the same
    /// separator, so manifest style names (`App.Resources.mappings.x.json`)
    /// and path style names (`resources/mappings/x.json`) both match
    /// `mappings/x.json`.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        fold(candidate).ends_with(&self.key)
    }
}

fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            '/' | '\\' => '.',
            other => other,
        })
        .collect()
}

impl Display for ResourcePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for ResourcePath {
    type Err = OntologyMappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl TryFrom<String> for ResourcePath {
    type Error = OntologyMappingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ResourcePath {
    type Error = OntologyMappingError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::ResourcePath;
    use crate::mapping::OntologyMappingError;

    #[test]
    fn keeps_original_text() {
        let path = ResourcePath::new("Mappings/Demo.json").expect("valid path");
        assert_eq!(path.as_str(), "Mappings/Demo.json");
        assert_eq!(path.to_string(), "Mappings/Demo.json");
    }

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("\t\n")]
    fn rejects_blank_paths(#[case] value: &str) {
        let err = ResourcePath::new(value).expect_err("blank path");
        assert!(matches!(
            err,
            OntologyMappingError::InvalidArgument {
                name: "resource_path"
            }
        ));
    }

    #[rstest]
    #[case("mappings/demo.json", "MyApp.Resources.mappings.demo.json")]
    #[case("mappings/demo.json", "resources/mappings/demo.json")]
    #[case("MAPPINGS.DEMO.JSON", "mappings/demo.json")]
    #[case("mappings\\demo.json", "mappings/demo.json")]
    #[case("demo.json", "demo.json")]
    fn matches_suffix_ignoring_case_and_separators(#[case] path: &str, #[case] name: &str) {
        let path = ResourcePath::new(path).expect("valid path");
        assert!(path.matches(name), "`{path}` should match `{name}`");
    }

    #[rstest]
    #[case("mappings/demo.json", "mappings/demo.json.bak")]
    #[case("mappings/demo.json", "mappings/other.json")]
    #[case("v2/demo.json", "v1/demo.json")]
    fn rejects_non_suffix_names(#[case] path: &str, #[case] name: &str) {
        let path = ResourcePath::new(path).expect("valid path");
        assert!(!path.matches(name), "`{path}` should not match `{name}`");
    }

    #[test]
    fn parses_from_str() {
        let path: ResourcePath = "demo.json".parse().expect("valid path");
        assert_eq!(path.as_str(), "demo.json");
        assert!("   ".parse::<ResourcePath>().is_err());
    }
}
