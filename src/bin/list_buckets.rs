use bucketkit::cli::ListBucketsArgs;
use bucketkit::common::{self, ClientConfig};
use bucketkit::prompt::arg_or_prompt;
use bucketkit::report::{self, rule};
use bucketkit::{BucketManager, BucketName};
use clap::Parser;
use dotenv::dotenv;
use std::io;
use std::process::ExitCode;

async fn run(args: ListBucketsArgs) -> anyhow::Result<()> {
    println!("AWS S3 Bucket Lister");
    println!("{}", rule('='));

    let config = ClientConfig::resolve(
        args.connection.endpoint,
        args.connection.profile,
        args.region,
    )?;
    let manager = BucketManager::new(common::create_store(&config).await);

    let records = manager
        .list_buckets()
        .await
        .map_err(|e| anyhow::anyhow!("Error accessing S3: {}", e))?;
    report::write_bucket_table(&mut io::stdout(), &records)?;

    if records.is_empty() {
        return Ok(());
    }

    if args.details.is_none() {
        println!("\n{}", rule('='));
    }
    let choice = arg_or_prompt(
        args.details,
        "\nEnter bucket name for details (or press Enter to skip): ",
    )?;

    if let Some(choice) = choice {
        let name = BucketName::new(choice)?;
        let detail = manager.describe_bucket(&name).await;
        report::write_bucket_detail(&mut io::stdout(), name.as_str(), &detail)?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init();
    let args = ListBucketsArgs::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("✗ {}", e);
            ExitCode::FAILURE
        }
    }
}
