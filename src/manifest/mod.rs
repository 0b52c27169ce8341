use tracing::debug;

use self::source::{LocalSource, ManifestSource, RemoteSource};
use crate::{cli::Mode, error::LoadError};

pub(crate) mod dependencies;
pub(crate) mod source;

pub(crate) struct Manifest {
    text: String,
}

impl Manifest {
    pub(crate) fn load(reference: &str, mode: Mode) -> Result<Self, LoadError> {
        match mode {
            Mode::Local => Self::fetch(&LocalSource, reference),
            Mode::Remote => Self::fetch(&RemoteSource, reference),
        }
    }

    pub(crate) fn fetch<Source>(source: &Source, reference: &str) -> Result<Self, LoadError>
    where
        Source: ManifestSource,
    {
        let text = source.fetch(reference)?;
        debug!(bytes = text.len(), "manifest loaded");

        Ok(Self { text })
    }

    pub(crate) fn dependencies(&self) -> Vec<String> {
        dependencies::extract(&self.text)
    }
}
