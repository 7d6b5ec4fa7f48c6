//! Human-readable rendering of bucket listings and details.

use crate::models::{BucketDetail, BucketRecord};
use crate::operations::Created;
use crate::OBJECT_COUNT_CAP;
use std::io::{self, Write};

const RULE_WIDTH: usize = 70;

pub fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

/// Status line for a successful create, including the already-owned case.
pub fn creation_line(created: &Created) -> String {
    match created {
        Created::New { name, region } => {
            format!("✓ Bucket '{}' created successfully in region '{}'", name, region)
        }
        Created::AlreadyOwned { name } => {
            format!("✓ Bucket '{}' already exists and is owned by you", name)
        }
    }
}

pub fn write_bucket_table(out: &mut impl Write, records: &[BucketRecord]) -> io::Result<()> {
    if records.is_empty() {
        writeln!(out, "No S3 buckets found in your account.")?;
        return Ok(());
    }

    writeln!(out, "\n{}", rule('='))?;
    writeln!(out, "Found {} S3 bucket(s) in your account:", records.len())?;
    writeln!(out, "{}\n", rule('='))?;

    for (idx, record) in records.iter().enumerate() {
        let created = record
            .created
            .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "Unknown".to_string());
        let region = record
            .region
            .as_ref()
            .map(|r| r.to_string())
            .unwrap_or_else(|| "Unknown".to_string());

        writeln!(out, "{}. Bucket Name: {}", idx + 1, record.name)?;
        writeln!(out, "   Created On: {}", created)?;
        writeln!(out, "   Region: {}", region)?;
        writeln!(out, "{}", rule('-'))?;
    }
    Ok(())
}

pub fn write_bucket_detail(
    out: &mut impl Write,
    name: &str,
    detail: &BucketDetail,
) -> io::Result<()> {
    writeln!(out, "\nDetails for bucket: {}", name)?;
    writeln!(out, "{}", rule('='))?;

    match &detail.region {
        Some(region) => writeln!(out, "Region: {}", region)?,
        None => writeln!(out, "Region: Unknown")?,
    }
    match detail.versioning {
        Some(status) => writeln!(out, "Versioning: {}", status)?,
        None => writeln!(out, "Versioning: Unable to retrieve")?,
    }
    match detail.object_count {
        Some(count) => writeln!(out, "Object Count (first {}): {}", OBJECT_COUNT_CAP, count)?,
        None => writeln!(out, "Object Count: Unable to retrieve")?,
    }

    writeln!(out, "{}", rule('='))
}
