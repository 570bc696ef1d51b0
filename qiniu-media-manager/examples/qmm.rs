/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::error::Error;
use std::time::Duration;

use clap::Parser;
use qiniu_media_manager::client::DEFAULT_DOWNLOAD_EXPIRY;
use qiniu_media_manager::types::PfopStatus;

type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "qmm")]
#[command(about = "Inspect and manage objects and media jobs in Qiniu object storage.")]
pub struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, clap::Subcommand)]
enum Command {
    /// List the objects of a bucket
    Ls {
        bucket: String,

        /// Only list keys starting with this prefix
        #[arg(long)]
        prefix: Option<String>,

        /// Objects requested per page
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Show the metadata of an object
    Stat { bucket: String, key: String },

    /// Show the status of a persistent operation
    Status { persistent_id: String },

    /// Wait for a persistent operation to finish
    Wait {
        persistent_id: String,

        /// Milliseconds between status polls
        #[arg(long, default_value_t = 400)]
        delay_ms: u64,

        /// Give up after this many polls
        #[arg(long)]
        max_attempts: Option<u32>,
    },

    /// Sign a private download URL
    SignUrl {
        url: String,

        /// Seconds until the URL expires
        #[arg(long, default_value_t = DEFAULT_DOWNLOAD_EXPIRY.as_secs())]
        expires: u64,
    },

    /// Delete an object
    Rm { bucket: String, key: String },
}

fn print_status(status: &PfopStatus) {
    println!("{} code={} {}", status.id, status.code, status.desc);
    for item in status.items() {
        let produced = item.key.as_deref().unwrap_or("-");
        println!("  {} code={} key={produced}", item.cmd, item.code);
        if let Some(error) = &item.error {
            println!("    error: {error}");
        }
    }
}

async fn run(args: Args) -> Result<(), BoxError> {
    let config = qiniu_media_manager::from_env().load()?;
    let client = qiniu_media_manager::Client::new(config);

    match args.command {
        Command::Ls {
            bucket,
            prefix,
            limit,
        } => {
            let count = client
                .list_objects()
                .bucket(bucket)
                .set_prefix(prefix)
                .set_limit(limit)
                .for_each_item(|item| println!("{}\t{}\t{}", item.key, item.fsize, item.hash))
                .await?;
            tracing::info!("listed {count} objects");
        }
        Command::Stat { bucket, key } => {
            let stat = client.stat_object().bucket(bucket).key(key).send().await?;
            println!("{stat:#?}");
        }
        Command::Status { persistent_id } => {
            let status = client
                .pfop_status()
                .persistent_id(persistent_id)
                .send()
                .await?;
            print_status(&status);
        }
        Command::Wait {
            persistent_id,
            delay_ms,
            max_attempts,
        } => {
            let mut wait = client
                .wait_pfop()
                .persistent_id(persistent_id)
                .delay(Duration::from_millis(delay_ms));
            if let Some(max_attempts) = max_attempts {
                wait = wait.max_attempts(max_attempts);
            }
            match wait.send().await {
                Ok(status) => print_status(&status),
                Err(err) => {
                    if let Some(status) = err.pfop_status() {
                        print_status(status);
                    }
                    return Err(err.into());
                }
            }
        }
        Command::SignUrl { url, expires } => {
            println!(
                "{}",
                client.private_download_url(&url, Duration::from_secs(expires))
            );
        }
        Command::Rm { bucket, key } => {
            client.delete_object().bucket(bucket).key(key).send().await?;
            println!("deleted");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let result = run(args).await;
    if let Err(ref err) = result {
        tracing::error!("command failed: {err}");
        let mut source = err.source();
        while let Some(cause) = source {
            tracing::error!("  caused by: {cause}");
            source = cause.source();
        }
    }
    result
}
