use bucketkit::cli::{UPLOAD_USAGE_EXAMPLES, UploadFileArgs};
use bucketkit::common::{self, ClientConfig};
use bucketkit::operations::check_source;
use bucketkit::{BucketManager, BucketName, UploadRequest, Uploaded};
use clap::Parser;
use clap::error::ErrorKind;
use dotenv::dotenv;
use std::process::ExitCode;

async fn run(args: UploadFileArgs) -> anyhow::Result<(String, Uploaded)> {
    let bucket = BucketName::new(args.bucket_name)?;
    let request = UploadRequest::new(&args.file_path, bucket, args.object_name)?;

    // Local problems are reported before any client is built.
    check_source(&request.path).await?;

    let config = ClientConfig::resolve(
        args.connection.endpoint,
        args.connection.profile,
        args.region,
    )?;
    let manager = BucketManager::new(common::create_store(&config).await);

    let uploaded = manager.upload(&request).await?;
    Ok((args.file_path, uploaded))
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init();

    let args = match UploadFileArgs::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            e.print().ok();
            println!("{}", UPLOAD_USAGE_EXAMPLES);
            return ExitCode::FAILURE;
        }
    };

    match run(args).await {
        Ok((file_path, uploaded)) => {
            println!("✓ Successfully uploaded {} to {}", file_path, uploaded.uri);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("✗ {}", e);
            ExitCode::FAILURE
        }
    }
}
