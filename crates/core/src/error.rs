use thiserror::Error;

/// Result type for gqlinline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for gqlinline operations
#[derive(Error, Debug)]
pub enum Error {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing errors when processing source code
    #[error("Parse error: {0}")]
    Parse(String),

    /// A requested document name is absent from the artifact mapping
    #[error("Artifact entry not found: {name}")]
    ArtifactLookup { name: String },

    /// Artifact manifests that cannot be read or deserialized
    #[error("Artifact manifest error: {0}")]
    ArtifactManifest(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Any other error
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Creates a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates an artifact lookup error
    pub fn artifact_lookup(name: impl Into<String>) -> Self {
        Self::ArtifactLookup { name: name.into() }
    }

    /// Creates an artifact manifest error
    pub fn artifact_manifest(msg: impl Into<String>) -> Self {
        Self::ArtifactManifest(msg.into())
    }

    /// Creates an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Adds context to any error
    pub fn with_context<E>(context: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::WithContext {
            context: context.into(),
            source: Box::new(source),
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::with_context(context, e))
    }
}
