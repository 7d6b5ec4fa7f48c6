//! The remote object store as seen by the bucket tools.
//!
//! [`ObjectStore`] is the seam between the operations and the service;
//! [`S3Store`] implements it on top of `aws-sdk-s3`.

use crate::error::StoreError;
use crate::models::Region;
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Region as AwsRegion;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use chrono::{DateTime, Utc};
use log::debug;
use std::path::Path;

/// A bucket as returned by the "list my buckets" call.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedBucket {
    pub name: String,
    pub created: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Creates a bucket, with an explicit location constraint when `location` is set.
    async fn create_bucket(&self, name: &str, location: Option<&str>) -> Result<(), StoreError>;

    /// All buckets owned by the caller, in the order the service returns them.
    async fn list_buckets(&self) -> Result<Vec<OwnedBucket>, StoreError>;

    /// Raw location constraint; `None` means the service's default region.
    async fn bucket_location(&self, name: &str) -> Result<Option<String>, StoreError>;

    /// Raw versioning status; `None` when versioning was never configured.
    async fn bucket_versioning(&self, name: &str) -> Result<Option<String>, StoreError>;

    /// Number of keys on the first listing page, requesting at most `max_keys`.
    async fn count_objects(&self, name: &str, max_keys: usize) -> Result<usize, StoreError>;

    /// Streams the file at `path` into `bucket/key`, returning the ETag if one was sent back.
    async fn put_object(&self, bucket: &str, key: &str, path: &Path)
    -> Result<Option<String>, StoreError>;

    /// The same store with its requests sent to `region`.
    ///
    /// Bucket-scoped calls must reach the bucket's own region; the service
    /// answers anything else with a redirect.
    fn for_region(&self, region: &Region) -> Self
    where
        Self: Sized;
}

pub struct S3Store {
    client: Client,
}

impl S3Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

fn classify<E, R>(err: SdkError<E, R>) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    match err.as_service_error() {
        Some(service) => StoreError::Service {
            code: service.code().unwrap_or("Unknown").to_string(),
            message: service.message().unwrap_or_default().to_string(),
        },
        None => StoreError::Transport(DisplayErrorContext(&err).to_string()),
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn create_bucket(&self, name: &str, location: Option<&str>) -> Result<(), StoreError> {
        debug!("CreateBucket {} (location constraint: {:?})", name, location);
        let mut request = self.client.create_bucket().bucket(name);
        if let Some(location) = location {
            let config = CreateBucketConfiguration::builder()
                .location_constraint(BucketLocationConstraint::from(location))
                .build();
            request = request.create_bucket_configuration(config);
        }

        let err = match request.send().await {
            Ok(_) => return Ok(()),
            Err(err) => err,
        };

        let (taken, owned) = err
            .as_service_error()
            .map(|e| (e.is_bucket_already_exists(), e.is_bucket_already_owned_by_you()))
            .unwrap_or((false, false));
        if taken {
            Err(StoreError::BucketAlreadyExists)
        } else if owned {
            Err(StoreError::BucketAlreadyOwnedByYou)
        } else {
            Err(classify(err))
        }
    }

    async fn list_buckets(&self) -> Result<Vec<OwnedBucket>, StoreError> {
        debug!("ListBuckets");
        let output = self.client.list_buckets().send().await.map_err(classify)?;

        let buckets = output
            .buckets()
            .iter()
            .map(|b| OwnedBucket {
                name: b.name().unwrap_or_default().to_string(),
                created: b
                    .creation_date()
                    .and_then(|d| DateTime::<Utc>::from_timestamp(d.secs(), d.subsec_nanos())),
            })
            .collect();
        Ok(buckets)
    }

    async fn bucket_location(&self, name: &str) -> Result<Option<String>, StoreError> {
        debug!("GetBucketLocation {}", name);
        let output = self
            .client
            .get_bucket_location()
            .bucket(name)
            .send()
            .await
            .map_err(classify)?;
        Ok(output.location_constraint().map(|c| c.as_str().to_string()))
    }

    async fn bucket_versioning(&self, name: &str) -> Result<Option<String>, StoreError> {
        debug!("GetBucketVersioning {}", name);
        let output = self
            .client
            .get_bucket_versioning()
            .bucket(name)
            .send()
            .await
            .map_err(classify)?;
        Ok(output.status().map(|s| s.as_str().to_string()))
    }

    async fn count_objects(&self, name: &str, max_keys: usize) -> Result<usize, StoreError> {
        debug!("ListObjectsV2 {} (max keys {})", name, max_keys);
        let output = self
            .client
            .list_objects_v2()
            .bucket(name)
            .max_keys(i32::try_from(max_keys).unwrap_or(i32::MAX))
            .send()
            .await
            .map_err(classify)?;
        let count = match output.key_count() {
            Some(n) => usize::try_from(n).unwrap_or(0),
            None => output.contents().len(),
        };
        Ok(count)
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        path: &Path,
    ) -> Result<Option<String>, StoreError> {
        debug!("PutObject {}/{} from {}", bucket, key, path.display());
        let body = ByteStream::from_path(path)
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let output = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body)
            .send()
            .await
            .map_err(classify)?;
        Ok(output.e_tag().map(str::to_string))
    }

    fn for_region(&self, region: &Region) -> Self {
        let config = self
            .client
            .config()
            .to_builder()
            .region(AwsRegion::new(region.as_str().to_string()))
            .build();
        debug!("regional client for {}", region);
        Self::new(Client::from_conf(config))
    }
}
