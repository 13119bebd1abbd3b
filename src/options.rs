//! Configuration options for record extraction.

/// Cross-reference sources excluded from extraction by default.
///
/// These catalog entries link back to consumer drug sites that carry no
/// usable alternate identifier.
pub const DENIED_SOURCES: [&str; 3] = ["RxList", "Drugs.com", "PDRhealth"];

/// Configuration options for record extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use drugbank_extract::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize the deny-list
/// let options = Options {
///     denied_sources: vec!["RxList".to_string()],
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// External-link sources to drop during extraction.
    ///
    /// Default: [`DENIED_SOURCES`]
    pub denied_sources: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            denied_sources: DENIED_SOURCES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Options {
    /// Whether a source name is deny-listed.
    #[must_use]
    pub fn is_denied(&self, source: &str) -> bool {
        self.denied_sources.iter().any(|s| s == source)
    }
}
