use crate::error::{CreationError, StoreError, UploadError};
use crate::models::{BucketDetail, BucketName, BucketRecord, Region, UploadRequest, VersioningStatus};
use crate::store::ObjectStore;
use crate::OBJECT_COUNT_CAP;
use log::{debug, warn};
use std::path::Path;

/// Successful outcome of a create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Created {
    New { name: BucketName, region: Region },
    /// The caller already owns a bucket with this name.
    AlreadyOwned { name: BucketName },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uploaded {
    pub uri: String,
    pub e_tag: Option<String>,
}

pub struct BucketManager<S> {
    store: S,
}

impl<S: ObjectStore> BucketManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn create_bucket(
        &self,
        name: &BucketName,
        region: Option<&Region>,
    ) -> Result<Created, CreationError> {
        // The default region is addressed without a location constraint.
        let constraint = region.filter(|r| !r.is_default()).map(Region::as_str);

        match self.store.create_bucket(name.as_str(), constraint).await {
            Ok(()) => Ok(Created::New {
                name: name.clone(),
                region: region.cloned().unwrap_or_else(Region::default_region),
            }),
            Err(StoreError::BucketAlreadyOwnedByYou) => {
                debug!("bucket {} already owned by caller", name);
                Ok(Created::AlreadyOwned { name: name.clone() })
            }
            Err(StoreError::BucketAlreadyExists) => Err(CreationError::NameTaken(name.to_string())),
            Err(StoreError::Service { code, message }) => {
                Err(CreationError::Service { code, message })
            }
            Err(StoreError::Transport(msg)) => Err(CreationError::Unexpected(msg)),
        }
    }

    /// Lists owned buckets and resolves each one's region.
    ///
    /// A failed region lookup leaves that record's region empty; it never
    /// fails the listing.
    pub async fn list_buckets(&self) -> Result<Vec<BucketRecord>, StoreError> {
        let buckets = self.store.list_buckets().await?;

        let mut records = Vec::with_capacity(buckets.len());
        for bucket in buckets {
            let region = self.bucket_region(&bucket.name).await;
            records.push(BucketRecord {
                name: bucket.name,
                created: bucket.created,
                region,
            });
        }
        Ok(records)
    }

    pub async fn bucket_region(&self, name: &str) -> Option<Region> {
        match self.store.bucket_location(name).await {
            Ok(constraint) => Some(Region::from_location_constraint(constraint.as_deref())),
            Err(e) => {
                warn!("region lookup for {} failed: {}", name, e);
                None
            }
        }
    }

    /// Region, versioning and object count for one bucket, each looked up independently.
    ///
    /// Versioning and count are asked of the bucket's own region; when the
    /// region is unknown they go to the store as configured.
    pub async fn describe_bucket(&self, name: &BucketName) -> BucketDetail {
        let region = self.bucket_region(name.as_str()).await;

        let regional;
        let store = match &region {
            Some(r) => {
                regional = self.store.for_region(r);
                &regional
            }
            None => &self.store,
        };

        let versioning = match store.bucket_versioning(name.as_str()).await {
            Ok(status) => Some(VersioningStatus::from_status(status.as_deref())),
            Err(e) => {
                warn!("versioning lookup for {} failed: {}", name, e);
                None
            }
        };

        let object_count = match store.count_objects(name.as_str(), OBJECT_COUNT_CAP).await {
            Ok(count) => Some(BucketDetail::clamp_count(count)),
            Err(e) => {
                warn!("object count for {} failed: {}", name, e);
                None
            }
        };

        BucketDetail {
            region,
            versioning,
            object_count,
        }
    }

    pub async fn upload(&self, request: &UploadRequest) -> Result<Uploaded, UploadError> {
        check_source(&request.path).await?;

        let regional;
        let store = match self.bucket_region(request.bucket.as_str()).await {
            Some(region) => {
                regional = self.store.for_region(&region);
                &regional
            }
            None => &self.store,
        };

        let e_tag = store
            .put_object(request.bucket.as_str(), &request.key, &request.path)
            .await?;
        debug!("uploaded {} (etag {:?})", request.uri(), e_tag);

        Ok(Uploaded {
            uri: request.uri(),
            e_tag,
        })
    }
}

/// Fails with [`UploadError::FileNotFound`] unless `path` is a regular file we can open.
pub async fn check_source(path: &Path) -> Result<(), UploadError> {
    let not_found = || UploadError::FileNotFound(path.to_path_buf());

    let metadata = tokio::fs::metadata(path).await.map_err(|_| not_found())?;
    if !metadata.is_file() {
        return Err(not_found());
    }
    tokio::fs::File::open(path).await.map_err(|_| not_found())?;
    Ok(())
}
