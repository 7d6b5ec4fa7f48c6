use clap::{Args, Parser};

/// Connection options shared by every tool.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Custom S3-compatible endpoint (optional, defaults to S3_ENDPOINT env var)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Named credentials profile (optional, defaults to AWS_PROFILE env var)
    #[arg(long)]
    pub profile: Option<String>,
}

#[derive(Parser, Debug)]
#[command(name = "create-bucket")]
#[command(about = "Create an S3 bucket, prompting for anything not given", long_about = None)]
pub struct CreateBucketArgs {
    /// Bucket name
    pub name: Option<String>,

    /// Region to create the bucket in (default: us-east-1)
    pub region: Option<String>,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Parser, Debug)]
#[command(name = "list-buckets")]
#[command(about = "List your S3 buckets and optionally inspect one", long_about = None)]
pub struct ListBucketsArgs {
    /// Print details for this bucket instead of prompting for one
    #[arg(short, long)]
    pub details: Option<String>,

    /// Region for the client (optional, the SDK default chain applies otherwise)
    #[arg(long)]
    pub region: Option<String>,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Parser, Debug)]
#[command(name = "upload-file")]
#[command(about = "Upload a local file to an S3 bucket", long_about = None)]
pub struct UploadFileArgs {
    /// Path to the file to upload
    pub file_path: String,

    /// Name of the target bucket
    pub bucket_name: String,

    /// Object key (default: the file's name)
    pub object_name: Option<String>,

    /// Region for the client (optional, the SDK default chain applies otherwise)
    #[arg(long)]
    pub region: Option<String>,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

pub const UPLOAD_USAGE_EXAMPLES: &str = "\nExample:\n  upload-file myfile.txt my-bucket\n  upload-file myfile.txt my-bucket custom-name.txt";
