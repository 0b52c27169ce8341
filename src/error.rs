use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub(crate) enum ValidationError {
    #[error("invalid URL: {reference}")]
    InvalidUrl { reference: String },

    #[error("file or directory not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("output filename must end with .png, .jpg or .svg: {filename}")]
    InvalidOutputExtension { filename: String },
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum LoadError {
    #[error("Cargo.toml not found: {}", path.display())]
    ManifestNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Every fetch failure lands here; the cause only survives as text.
    #[error("failed to fetch manifest from {url}: {message}")]
    FetchError { url: String, message: String },
}

impl LoadError {
    pub(crate) fn fetch(url: &str, error: &(dyn std::error::Error + 'static)) -> Self {
        let mut message = error.to_string();
        let mut source = error.source();

        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }

        Self::FetchError {
            url: url.to_string(),
            message,
        }
    }
}
