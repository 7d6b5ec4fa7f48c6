use std::path::PathBuf;
use thiserror::Error;

/// Problems detected locally, before any remote call is made.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Bucket name cannot be empty")]
    EmptyBucketName,
    #[error("Invalid endpoint '{0}': {1}")]
    InvalidEndpoint(String, String),
}

/// Failure reported by an [`ObjectStore`](crate::ObjectStore) call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("bucket name is already taken by another account")]
    BucketAlreadyExists,
    #[error("bucket already exists and is owned by you")]
    BucketAlreadyOwnedByYou,
    #[error("{code}: {message}")]
    Service { code: String, message: String },
    #[error("{0}")]
    Transport(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CreationError {
    #[error("Bucket name '{0}' is already taken globally")]
    NameTaken(String),
    #[error("Error creating bucket: {code}: {message}")]
    Service { code: String, message: String },
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UploadError {
    #[error("Error: File '{}' not found", .0.display())]
    FileNotFound(PathBuf),
    #[error("Error uploading file: {0}")]
    Remote(String),
}

impl From<StoreError> for UploadError {
    fn from(err: StoreError) -> Self {
        UploadError::Remote(err.to_string())
    }
}
