#![allow(clippy::expect_used, clippy::panic)]

/// Fixture loader
///
/// A fixture file is a JSON array of cases; bare strings are comments.
/// A property key that is absent is not checked. Names listed in
/// `not_applicable` must report `Status::NotApplicable`.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
#[allow(dead_code, clippy::large_enum_variant)]
pub enum TestCase {
    /// A URI test case
    UriTest(UriCase),
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct UriCase {
    pub input: String,
    #[serde(default)]
    pub flags: u32,
    #[serde(default)]
    pub failure: Option<bool>,
    #[serde(default)]
    pub absolute_uri: Option<String>,
    #[serde(default)]
    pub authority: Option<String>,
    #[serde(default)]
    pub display_uri: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub extension: Option<String>,
    #[serde(default)]
    pub fragment: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub path_and_query: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub raw_uri: Option<String>,
    #[serde(default)]
    pub scheme_name: Option<String>,
    #[serde(default)]
    pub user_info: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub host_type: Option<u32>,
    #[serde(default)]
    pub port: Option<u32>,
    #[serde(default)]
    pub scheme: Option<u32>,
    #[serde(default)]
    pub not_applicable: Vec<String>,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct FixtureFailure {
    pub test_num: usize,
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<FixtureFailure>,
}

impl FixtureResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

/// Parse fixture JSON
pub fn load_fixture(data: &str) -> Vec<TestCase> {
    serde_json::from_str(data).expect("Failed to parse fixture data")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_comment_and_case() {
        let tests = load_fixture(
            r#"["a comment", {"input": "http://h/", "flags": 16, "port": 80, "not_applicable": ["query"]}]"#,
        );
        assert_eq!(tests.len(), 2);
        assert!(matches!(tests[0], TestCase::Comment(_)));
        let TestCase::UriTest(case) = &tests[1] else {
            panic!("expected a URI case");
        };
        assert_eq!(case.flags, 16);
        assert_eq!(case.port, Some(80));
        assert_eq!(case.not_applicable, ["query"]);
        assert_eq!(case.failure, None);
    }
}
