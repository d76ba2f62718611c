//! S3 blob store implementation

use async_trait::async_trait;
use aws_sdk_s3::error::{DisplayErrorContext, SdkError};
use aws_sdk_s3::operation::put_object::PutObjectError;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use bytes::Bytes;
use tracing::debug;

use crate::domain::storage::{BlobStore, BlobVersion, StoredBlob, WritePrecondition};
use crate::domain::DomainError;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Connection settings for an S3 (or S3-compatible) bucket
#[derive(Debug, Clone)]
pub struct S3Config {
    pub bucket: String,
    pub region: Option<String>,
    /// Custom endpoint, e.g. a local MinIO
    pub endpoint_url: Option<String>,
    pub force_path_style: bool,
}

impl S3Config {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            region: None,
            endpoint_url: None,
            force_path_style: false,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    pub fn with_force_path_style(mut self, force_path_style: bool) -> Self {
        self.force_path_style = force_path_style;
        self
    }
}

/// Blob store reading and writing whole objects in a single bucket
#[derive(Debug, Clone)]
pub struct S3BlobStore {
    client: S3Client,
    bucket: String,
}

impl S3BlobStore {
    /// Wrap an existing client
    pub fn new(client: S3Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Build a client from the default AWS credential chain
    pub async fn connect(config: &S3Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

        if let Some(region) = &config.region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }

        let shared = loader.load().await;
        let mut builder =
            aws_sdk_s3::config::Builder::from(&shared).force_path_style(config.force_path_style);

        if let Some(endpoint_url) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint_url);
        }

        Self::new(S3Client::from_conf(builder.build()), &config.bucket)
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn get(&self, key: &str) -> Result<Option<StoredBlob>, DomainError> {
        let response = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await;

        let output = match response {
            Ok(output) => output,
            Err(err) => {
                if let SdkError::ServiceError(service_err) = &err {
                    if service_err.err().is_no_such_key() {
                        debug!(bucket = %self.bucket, key = %key, "Object does not exist");
                        return Ok(None);
                    }
                }

                return Err(DomainError::storage(format!(
                    "Failed to read s3://{}/{}: {}",
                    self.bucket,
                    key,
                    DisplayErrorContext(&err)
                )));
            }
        };

        let version = output.e_tag().map(BlobVersion::new);
        let bytes = output
            .body
            .collect()
            .await
            .map_err(|e| {
                DomainError::storage(format!(
                    "Failed to read body of s3://{}/{}: {}",
                    self.bucket, key, e
                ))
            })?
            .into_bytes();

        let mut blob = StoredBlob::new(bytes);
        blob.version = version;
        Ok(Some(blob))
    }

    async fn put(
        &self,
        key: &str,
        bytes: Bytes,
        precondition: WritePrecondition,
    ) -> Result<Option<BlobVersion>, DomainError> {
        let request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(JSON_CONTENT_TYPE)
            .body(ByteStream::from(bytes));

        let request = match &precondition {
            WritePrecondition::None => request,
            WritePrecondition::MatchVersion(version) => request.if_match(version.as_str()),
            WritePrecondition::MustNotExist => request.if_none_match("*"),
        };

        match request.send().await {
            Ok(output) => Ok(output.e_tag().map(BlobVersion::new)),
            Err(err) if is_precondition_failure(&err) => Err(DomainError::conflict(format!(
                "s3://{}/{} was modified concurrently",
                self.bucket, key
            ))),
            Err(err) => Err(DomainError::storage(format!(
                "Failed to write s3://{}/{}: {}",
                self.bucket,
                key,
                DisplayErrorContext(&err)
            ))),
        }
    }
}

/// 412 for a failed `If-Match`/`If-None-Match`, 409 for a racing conditional write
fn is_precondition_failure(err: &SdkError<PutObjectError>) -> bool {
    err.raw_response()
        .map(|response| matches!(response.status().as_u16(), 409 | 412))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_s3_config_builder() {
        let config = S3Config::new("units-bucket")
            .with_region("eu-west-1")
            .with_endpoint_url("http://localhost:9000")
            .with_force_path_style(true);

        assert_eq!(config.bucket, "units-bucket");
        assert_eq!(config.region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:9000"));
        assert!(config.force_path_style);
    }

    #[test]
    fn test_s3_config_defaults() {
        let config = S3Config::new("units-bucket");
        assert!(config.region.is_none());
        assert!(config.endpoint_url.is_none());
        assert!(!config.force_path_style);
    }
}
