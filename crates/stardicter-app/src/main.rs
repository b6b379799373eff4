use std::fs;

use anyhow::Context;
use clap::Parser;
use stardicter_config::Config;
use stardicter_core::ChecksumCache;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod job;
pub mod registry;

use self::cli::Args;
use self::job::{Job, Outcome};

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.json);

    if args.list {
        for name in registry::DICTIONARIES {
            println!("{name}");
        }
        return Ok(());
    }

    if args.dictionaries.is_empty() {
        anyhow::bail!(
            "No dictionary given, choose from: {}",
            registry::DICTIONARIES.join(", ")
        );
    }

    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::new(),
    };
    let config = args.apply(config);

    fs::create_dir_all(&args.directory)
        .with_context(|| format!("Failed to create {}", args.directory.display()))?;

    let client = reqwest::Client::new();
    let mut cache = ChecksumCache::open(&config.cache.path);

    for name in &args.dictionaries {
        let source = registry::create(name)
            .with_context(|| format!("Unknown dictionary: {name}"))?;

        let job = Job {
            config: &config,
            directory: &args.directory,
            file: args.file.as_deref(),
            force: args.force,
            write_source: args.write_source,
        };

        match job.run(source, &client, &mut cache).await? {
            Outcome::Unchanged => tracing::info!("{name}: source unchanged, skipped"),
            Outcome::Written(packages) => {
                tracing::info!("{name}: wrote {} packages", packages.len())
            }
        }
    }

    Ok(())
}
