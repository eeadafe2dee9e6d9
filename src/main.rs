use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::builder::TypedValueParser;
use clap::{ArgAction, Parser};
use external_contributors::enrich::DEFAULT_POOL_SIZE;
use external_contributors::github::{GitHubClient, DEFAULT_API_URL};
use external_contributors::model::RosterSource;
use external_contributors::{pipeline, Config, Mode};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

const DEFAULT_REPOS: &str = "cockroach,pebble,docs,activerecord-cockroachdb-adapter,cockroach-go,\
cockroach-operator,django-cockroachdb,sequelize-cockroachdb,sqlalchemy-cockroachdb";
const DEFAULT_BLOCKLIST: &str = "petermattis-square,craig[bot],nigeltao,dependabot,dependabot[bot],\
alimi,timgraham,papb,chrislovecnm,marlabrizel,rkruze";

#[derive(Parser, Debug, Clone)]
#[command(about = "Yearly report of external contributors to an organization's repositories")]
struct Args {
    /// Organization owning the scanned repositories.
    #[arg(long = "organization", default_value = "cockroachdb")]
    organization: String,
    #[arg(long = "authors_organization", default_value = "cockroachdb")]
    authors_organization: String,
    #[arg(long = "authors_repo", default_value = "cockroach")]
    authors_repo: String,
    #[arg(long = "authors_path", default_value = "AUTHORS")]
    authors_path: String,
    /// Substring identifying internal emails.
    #[arg(long = "internal_domain", default_value = "@cockroachlabs.com")]
    internal_domain: String,
    /// Comma separated repositories; empty scans every organization repository.
    #[arg(long = "repos", default_value = DEFAULT_REPOS)]
    repos: String,
    /// Comma separated logins to exclude.
    #[arg(long = "blocklist", default_value = DEFAULT_BLOCKLIST)]
    blocklist: String,
    #[arg(long = "intermediate_output_file", default_value = "intermediate_output.json")]
    intermediate_output_file: PathBuf,
    #[arg(long = "output", default_value = "output.md")]
    output: PathBuf,
    /// Generate the report from the intermediate output file instead of collecting.
    #[arg(long = "use_intermediate")]
    use_intermediate: bool,
    /// Only collect commits authored at or after this RFC 3339 instant.
    #[arg(long = "since")]
    since: Option<DateTime<Utc>>,
    /// Only collect commits authored at or before this RFC 3339 instant.
    #[arg(long = "until")]
    until: Option<DateTime<Utc>>,
    #[arg(
        long = "lookup_pool_size",
        default_value_t = DEFAULT_POOL_SIZE,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
    )]
    lookup_pool_size: usize,
    #[arg(long = "github_token", env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: Option<String>,
    #[arg(long = "github_api_url", default_value = DEFAULT_API_URL)]
    github_api_url: String,
    /// Hide progress bars.
    #[arg(long = "quiet")]
    quiet: bool,
    /// Increase log verbosity (-v, -vv).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> Config {
        let roster = RosterSource::new(
            &self.authors_organization,
            &self.authors_repo,
            &self.authors_path,
        );
        Config {
            internal_domain: self.internal_domain.clone(),
            repositories: self.repos.clone(),
            blocklist: self.blocklist.clone(),
            checkpoint_path: self.intermediate_output_file.clone(),
            output_path: self.output.clone(),
            mode: if self.use_intermediate {
                Mode::FromCheckpoint
            } else {
                Mode::Collect
            },
            since: self.since,
            until: self.until,
            lookup_pool_size: self.lookup_pool_size,
            show_progress: !self.quiet,
            ..Config::new(&self.organization, roster)
        }
    }
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(verbose >= 2)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    debug!("Started with verbosity level: {}", args.verbose);

    let config = args.config();
    let client = GitHubClient::new(&args.github_api_url, args.github_token.clone())?;
    let report = pipeline::run(Arc::new(client), &config, Utc::now())
        .await
        .context("external contributor report failed")?;

    println!("{report}");
    Ok(())
}
