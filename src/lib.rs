pub mod cli;
pub mod common;
pub mod error;
pub mod models;
pub mod operations;
pub mod prompt;
pub mod report;
pub mod store;

pub use error::{CreationError, StoreError, UploadError, ValidationError};
pub use models::{BucketDetail, BucketName, BucketRecord, Region, UploadRequest, VersioningStatus};
pub use operations::{BucketManager, Created, Uploaded};
pub use store::{ObjectStore, OwnedBucket, S3Store};

/// Region the service treats as its default; buckets there report no location constraint.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Upper bound on objects inspected when counting a bucket's contents.
pub const OBJECT_COUNT_CAP: usize = 1000;
