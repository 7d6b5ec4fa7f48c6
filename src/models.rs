use crate::error::{UploadError, ValidationError};
use crate::{DEFAULT_REGION, OBJECT_COUNT_CAP};
use chrono::{DateTime, Utc};
use std::fmt;
use std::path::{Path, PathBuf};

/// A non-empty bucket name. Naming rules beyond that are left to the service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketName(String);

impl BucketName {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyBucketName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BucketName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A region identifier such as `eu-west-1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region(String);

impl Region {
    pub fn new(region: impl Into<String>) -> Self {
        Self(region.into())
    }

    /// Treats a missing or blank value as "use the default region".
    pub fn parse(value: Option<String>) -> Option<Self> {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(Self)
    }

    pub fn default_region() -> Self {
        Self(DEFAULT_REGION.to_string())
    }

    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_REGION
    }

    /// Maps a location-lookup answer onto a concrete region.
    ///
    /// The service reports its default region as an absent (or empty)
    /// location constraint.
    pub fn from_location_constraint(constraint: Option<&str>) -> Self {
        match constraint {
            Some(c) if !c.is_empty() => Self(c.to_string()),
            _ => Self::default_region(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the bucket listing.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketRecord {
    pub name: String,
    pub created: Option<DateTime<Utc>>,
    /// `None` when the per-bucket region lookup failed.
    pub region: Option<Region>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersioningStatus {
    Enabled,
    Suspended,
    Disabled,
    Unknown,
}

impl VersioningStatus {
    /// A bucket that never had versioning configured reports no status at all.
    pub fn from_status(status: Option<&str>) -> Self {
        match status {
            Some("Enabled") => Self::Enabled,
            Some("Suspended") => Self::Suspended,
            None | Some("") => Self::Disabled,
            Some(_) => Self::Unknown,
        }
    }
}

impl fmt::Display for VersioningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Enabled => "Enabled",
            Self::Suspended => "Suspended",
            Self::Disabled => "Disabled",
            Self::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// Detail for a single bucket. Each field is `None` when its lookup failed.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketDetail {
    pub region: Option<Region>,
    pub versioning: Option<VersioningStatus>,
    /// Never larger than [`OBJECT_COUNT_CAP`].
    pub object_count: Option<usize>,
}

impl BucketDetail {
    pub(crate) fn clamp_count(count: usize) -> usize {
        count.min(OBJECT_COUNT_CAP)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub path: PathBuf,
    pub bucket: BucketName,
    pub key: String,
}

impl UploadRequest {
    /// Builds a request, deriving the object key from the file name when none is given.
    pub fn new(
        path: impl Into<PathBuf>,
        bucket: BucketName,
        key: Option<String>,
    ) -> Result<Self, UploadError> {
        let path = path.into();
        let key = match key.filter(|k| !k.is_empty()) {
            Some(key) => key,
            None => default_object_key(&path).ok_or_else(|| UploadError::FileNotFound(path.clone()))?,
        };
        Ok(Self { path, bucket, key })
    }

    pub fn uri(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.key)
    }
}

/// Final path segment of `path`, if it has one.
pub fn default_object_key(path: &Path) -> Option<String> {
    path.file_name().map(|name| name.to_string_lossy().into_owned())
}
