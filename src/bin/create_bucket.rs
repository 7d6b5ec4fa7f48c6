use bucketkit::cli::CreateBucketArgs;
use bucketkit::common::{self, ClientConfig};
use bucketkit::prompt::arg_or_prompt;
use bucketkit::report::creation_line;
use bucketkit::{BucketManager, BucketName, Created, DEFAULT_REGION, Region};
use clap::Parser;
use dotenv::dotenv;
use std::process::ExitCode;

async fn run(args: CreateBucketArgs) -> anyhow::Result<Created> {
    let name = arg_or_prompt(args.name, "Enter bucket name: ")?.unwrap_or_default();
    let region = arg_or_prompt(
        args.region,
        &format!("Enter AWS region (press Enter for {}): ", DEFAULT_REGION),
    )?;
    let region = Region::parse(region);

    let name = BucketName::new(name)?;

    let config = ClientConfig::resolve(args.connection.endpoint, args.connection.profile, None)?
        .for_target(region.as_ref());
    let manager = BucketManager::new(common::create_store(&config).await);

    Ok(manager.create_bucket(&name, region.as_ref()).await?)
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init();
    let args = CreateBucketArgs::parse();

    match run(args).await {
        // Owning the bucket already counts as success.
        Ok(created) => {
            println!("{}", creation_line(&created));
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("✗ {}", e);
            ExitCode::FAILURE
        }
    }
}
