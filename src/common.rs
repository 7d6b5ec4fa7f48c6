use crate::DEFAULT_REGION;
use crate::error::ValidationError;
use crate::models::Region;
use crate::store::S3Store;
use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region as AwsRegion};
use aws_sdk_s3::Client;
use log::debug;
use std::env;
use url::Url;

/// How to reach the object store. Credentials are left to the SDK's own chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub region: Option<String>,
    pub endpoint: Option<String>,
    pub profile: Option<String>,
}

impl ClientConfig {
    /// Command-line values first, then `S3_ENDPOINT` / `AWS_PROFILE` from the environment.
    pub fn resolve(
        endpoint: Option<String>,
        profile: Option<String>,
        region: Option<String>,
    ) -> Result<Self, ValidationError> {
        let endpoint = endpoint
            .or_else(|| env::var("S3_ENDPOINT").ok())
            .filter(|e| !e.trim().is_empty())
            .map(|e| normalize_endpoint(&e))
            .transpose()?;
        let profile = profile.or_else(|| env::var("AWS_PROFILE").ok());

        Ok(Self {
            region,
            endpoint,
            profile,
        })
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Points the client at the region a bucket is created in; no region means the default one.
    pub fn for_target(self, region: Option<&Region>) -> Self {
        self.with_region(region.map_or(DEFAULT_REGION, Region::as_str))
    }
}

/// Adds an `https://` scheme when missing and strips trailing slashes.
pub fn normalize_endpoint(endpoint: &str) -> Result<String, ValidationError> {
    let endpoint = endpoint.trim();
    let base_url = if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        format!("https://{}", endpoint)
    } else {
        endpoint.to_string()
    };
    let base_url = base_url.trim_end_matches('/').to_string();

    Url::parse(&base_url)
        .map_err(|e| ValidationError::InvalidEndpoint(endpoint.to_string(), e.to_string()))?;
    Ok(base_url)
}

pub async fn create_client(config: &ClientConfig) -> Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    // Without a flag or SDK-level setting, requests go to the default region.
    loader = match &config.region {
        Some(region) => loader.region(AwsRegion::new(region.clone())),
        None => loader.region(RegionProviderChain::default_provider().or_else(DEFAULT_REGION)),
    };
    if let Some(endpoint) = &config.endpoint {
        loader = loader.endpoint_url(endpoint);
    }
    if let Some(profile) = &config.profile {
        loader = loader.profile_name(profile);
    }
    let sdk_config = loader.load().await;
    debug!("client region: {:?}", sdk_config.region());

    // S3-compatible endpoints generally only understand path-style addressing.
    let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
        .force_path_style(config.endpoint.is_some())
        .build();

    Client::from_conf(s3_config)
}

pub async fn create_store(config: &ClientConfig) -> S3Store {
    S3Store::new(create_client(config).await)
}
