use async_trait::async_trait;
use bucketkit::{DEFAULT_REGION, ObjectStore, OwnedBucket, Region, StoreError};
use chrono::{TimeZone, Utc};
use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateBucket { name: String, location: Option<String> },
    ListBuckets,
    BucketLocation(String),
    BucketVersioning(String),
    CountObjects { name: String, max_keys: usize },
    PutObject { bucket: String, key: String, body: Vec<u8> },
}

#[derive(Debug, Clone)]
pub struct FakeBucket {
    pub name: String,
    pub owner: String,
    pub location: Option<String>,
    pub versioning: Option<String>,
    pub objects: usize,
}

/// Bucket namespace shared by every caller of the fake service.
#[derive(Debug, Default)]
pub struct World {
    pub buckets: Vec<FakeBucket>,
}

pub type SharedWorld = Arc<Mutex<World>>;

pub fn new_world() -> SharedWorld {
    Arc::new(Mutex::new(World::default()))
}

/// In-memory service acting on behalf of one caller, through one regional endpoint.
pub struct FakeStore {
    caller: String,
    region: String,
    world: SharedWorld,
    calls: Arc<Mutex<Vec<Call>>>,
    failing_location: HashSet<String>,
    failing_versioning: HashSet<String>,
    failing_count: HashSet<String>,
    pub ignore_max_keys: bool,
    pub fail_list: Option<StoreError>,
    pub fail_create: Option<StoreError>,
}

impl FakeStore {
    pub fn new(caller: &str) -> Self {
        Self::in_world(caller, new_world())
    }

    pub fn in_world(caller: &str, world: SharedWorld) -> Self {
        Self {
            caller: caller.to_string(),
            region: DEFAULT_REGION.to_string(),
            world,
            calls: Arc::new(Mutex::new(Vec::new())),
            failing_location: HashSet::new(),
            failing_versioning: HashSet::new(),
            failing_count: HashSet::new(),
            ignore_max_keys: false,
            fail_list: None,
            fail_create: None,
        }
    }

    pub fn with_bucket(self, name: &str, location: Option<&str>, versioning: Option<&str>, objects: usize) -> Self {
        self.world.lock().unwrap().buckets.push(FakeBucket {
            name: name.to_string(),
            owner: self.caller.clone(),
            location: location.map(str::to_string),
            versioning: versioning.map(str::to_string),
            objects,
        });
        self
    }

    pub fn in_region(mut self, region: &str) -> Self {
        self.region = region.to_string();
        self
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn failing_location(mut self, name: &str) -> Self {
        self.failing_location.insert(name.to_string());
        self
    }

    pub fn failing_versioning(mut self, name: &str) -> Self {
        self.failing_versioning.insert(name.to_string());
        self
    }

    pub fn failing_count(mut self, name: &str) -> Self {
        self.failing_count.insert(name.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn access_denied() -> StoreError {
        StoreError::Service {
            code: "AccessDenied".to_string(),
            message: "Access Denied".to_string(),
        }
    }

    /// Bucket-scoped requests only succeed against the bucket's own region.
    fn find_here(&self, name: &str) -> Result<FakeBucket, StoreError> {
        let bucket = self.find(name)?;
        let home = Region::from_location_constraint(bucket.location.as_deref());
        if home.as_str() != self.region {
            return Err(StoreError::Service {
                code: "PermanentRedirect".to_string(),
                message: format!(
                    "The bucket you are attempting to access must be addressed using the {} endpoint.",
                    home
                ),
            });
        }
        Ok(bucket)
    }

    fn find(&self, name: &str) -> Result<FakeBucket, StoreError> {
        self.world
            .lock()
            .unwrap()
            .buckets
            .iter()
            .find(|b| b.name == name)
            .cloned()
            .ok_or_else(|| StoreError::Service {
                code: "NoSuchBucket".to_string(),
                message: "The specified bucket does not exist".to_string(),
            })
    }
}

#[async_trait]
impl ObjectStore for FakeStore {
    async fn create_bucket(&self, name: &str, location: Option<&str>) -> Result<(), StoreError> {
        self.record(Call::CreateBucket {
            name: name.to_string(),
            location: location.map(str::to_string),
        });
        if let Some(err) = &self.fail_create {
            return Err(err.clone());
        }

        let mut world = self.world.lock().unwrap();
        if let Some(existing) = world.buckets.iter().find(|b| b.name == name) {
            return if existing.owner == self.caller {
                Err(StoreError::BucketAlreadyOwnedByYou)
            } else {
                Err(StoreError::BucketAlreadyExists)
            };
        }
        world.buckets.push(FakeBucket {
            name: name.to_string(),
            owner: self.caller.clone(),
            location: location.map(str::to_string),
            versioning: None,
            objects: 0,
        });
        Ok(())
    }

    async fn list_buckets(&self) -> Result<Vec<OwnedBucket>, StoreError> {
        self.record(Call::ListBuckets);
        if let Some(err) = &self.fail_list {
            return Err(err.clone());
        }

        let created = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).single();
        Ok(self
            .world
            .lock()
            .unwrap()
            .buckets
            .iter()
            .filter(|b| b.owner == self.caller)
            .map(|b| OwnedBucket {
                name: b.name.clone(),
                created,
            })
            .collect())
    }

    async fn bucket_location(&self, name: &str) -> Result<Option<String>, StoreError> {
        self.record(Call::BucketLocation(name.to_string()));
        if self.failing_location.contains(name) {
            return Err(Self::access_denied());
        }
        Ok(self.find(name)?.location)
    }

    async fn bucket_versioning(&self, name: &str) -> Result<Option<String>, StoreError> {
        self.record(Call::BucketVersioning(name.to_string()));
        if self.failing_versioning.contains(name) {
            return Err(Self::access_denied());
        }
        Ok(self.find_here(name)?.versioning)
    }

    async fn count_objects(&self, name: &str, max_keys: usize) -> Result<usize, StoreError> {
        self.record(Call::CountObjects {
            name: name.to_string(),
            max_keys,
        });
        if self.failing_count.contains(name) {
            return Err(StoreError::Transport("connection reset".to_string()));
        }
        let objects = self.find_here(name)?.objects;
        Ok(if self.ignore_max_keys { objects } else { objects.min(max_keys) })
    }

    async fn put_object(&self, bucket: &str, key: &str, path: &Path) -> Result<Option<String>, StoreError> {
        let body = tokio::fs::read(path)
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        self.record(Call::PutObject {
            bucket: bucket.to_string(),
            key: key.to_string(),
            body,
        });
        self.find_here(bucket)?;
        Ok(Some("\"d41d8cd98f00b204e9800998ecf8427e\"".to_string()))
    }

    fn for_region(&self, region: &Region) -> Self {
        Self {
            caller: self.caller.clone(),
            region: region.as_str().to_string(),
            world: self.world.clone(),
            calls: self.calls.clone(),
            failing_location: self.failing_location.clone(),
            failing_versioning: self.failing_versioning.clone(),
            failing_count: self.failing_count.clone(),
            ignore_max_keys: self.ignore_max_keys,
            fail_list: self.fail_list.clone(),
            fail_create: self.fail_create.clone(),
        }
    }
}
