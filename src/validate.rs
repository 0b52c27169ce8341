use std::path::Path;

use reqwest::Url;

use crate::{cli::Mode, error::ValidationError};

const OUTPUT_EXTENSIONS: [&str; 3] = [".png", ".jpg", ".svg"];

pub(crate) fn validate_repo(reference: &str, mode: Mode) -> Result<(), ValidationError> {
    match mode {
        Mode::Remote => {
            let has_host = Url::parse(reference)
                .ok()
                .is_some_and(|url| url.host_str().is_some_and(|host| !host.is_empty()));

            if !has_host {
                return Err(ValidationError::InvalidUrl {
                    reference: reference.to_string(),
                });
            }
        },
        Mode::Local => {
            let path = Path::new(reference);

            if !path.exists() {
                return Err(ValidationError::NotFound { path: path.to_path_buf() });
            }
        },
    }

    Ok(())
}

pub(crate) fn validate_output(filename: &str) -> Result<(), ValidationError> {
    if OUTPUT_EXTENSIONS.iter().any(|extension| filename.ends_with(extension)) {
        return Ok(());
    }

    Err(ValidationError::InvalidOutputExtension {
        filename: filename.to_string(),
    })
}
