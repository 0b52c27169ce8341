use std::{fs, path::PathBuf, time::Duration};

use tracing::debug;

use crate::error::LoadError;

pub(crate) const MANIFEST_FILE_NAME: &str = "Cargo.toml";

pub(crate) trait ManifestSource {
    fn fetch(&self, reference: &str) -> Result<String, LoadError>;
}

/// Reads the manifest from the filesystem.
pub(crate) struct LocalSource;

/// Downloads the manifest with a single blocking GET.
pub(crate) struct RemoteSource;

impl LocalSource {
    pub(crate) fn manifest_path(reference: &str) -> PathBuf {
        if reference.ends_with(MANIFEST_FILE_NAME) {
            PathBuf::from(reference)
        } else {
            PathBuf::from(reference).join(MANIFEST_FILE_NAME)
        }
    }
}

impl ManifestSource for LocalSource {
    fn fetch(&self, reference: &str) -> Result<String, LoadError> {
        let path = Self::manifest_path(reference);
        debug!(path = %path.display(), "reading local manifest");

        if !path.exists() {
            return Err(LoadError::ManifestNotFound { path });
        }

        fs::read_to_string(&path).map_err(|source| LoadError::ReadError { path, source })
    }
}

impl ManifestSource for RemoteSource {
    fn fetch(&self, reference: &str) -> Result<String, LoadError> {
        debug!(url = reference, "fetching remote manifest");

        // No timeout: a stalled server blocks until the connection is closed.
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|error| LoadError::fetch(reference, &error))?;

        let response = client
            .get(reference)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|error| LoadError::fetch(reference, &error))?;
        debug!(status = %response.status(), "remote manifest received");

        let body = response
            .bytes()
            .map_err(|error| LoadError::fetch(reference, &error))?;

        String::from_utf8(body.to_vec()).map_err(|error| LoadError::fetch(reference, &error))
    }
}
