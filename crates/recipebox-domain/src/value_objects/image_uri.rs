//! Links to ingredient images

use std::fmt;

use serde::{Serialize, Serializer};
use url::Url;

use crate::errors::{DomainError, DomainResult};

/// File extensions accepted as images (matched literally)
const IMAGE_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".gif"];

/// Absolute URI whose path names a jpg, jpeg, png or gif file
///
/// A missing or unusable image is modelled as `Option::<ImageUri>::None`,
/// never as an empty `ImageUri`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUri(Url);

impl ImageUri {
    pub fn new(uri: &str) -> DomainResult<Self> {
        let parsed = Url::parse(uri).map_err(|e| DomainError::InvalidImageUri {
            uri: uri.to_string(),
            reason: format!("not a valid uri ({})", e),
        })?;

        match path_extension(parsed.path()) {
            Some(ext) if IMAGE_EXTENSIONS.contains(&ext.as_str()) => Ok(Self(parsed)),
            _ => Err(DomainError::InvalidImageUri {
                uri: uri.to_string(),
                reason: "not recognized as a link to an image file".to_string(),
            }),
        }
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    pub fn path(&self) -> &str {
        self.0.path()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Extension of the percent-decoded last path segment, including the leading dot
fn path_extension(path: &str) -> Option<String> {
    let segment = path.rsplit('/').next()?;
    let file_name = urlencoding::decode(segment).ok()?;
    file_name.rfind('.').map(|idx| file_name[idx..].to_string())
}

impl fmt::Display for ImageUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ImageUri {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0.as_str())
    }
}
