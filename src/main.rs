mod config;
mod pr;
mod report;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::{debug, info, info_span};
use tracing_subscriber::EnvFilter;

/// PR Creator: opens a GitHub Pull Request from a head branch into master
/// and prints the created PR as JSON.
#[derive(Parser, Debug)]
#[command(name = "pr-creator", version, about)]
struct Cli {
    /// Path under the repos API (e.g., owner/repo/pulls)
    #[arg(allow_hyphen_values = true)]
    url: Option<String>,

    /// Pull request title
    #[arg(allow_hyphen_values = true)]
    title: Option<String>,

    /// Branch to merge from
    #[arg(allow_hyphen_values = true)]
    head: Option<String>,

    /// API token; defaults to the GITHUB_TOKEN environment variable
    #[arg(allow_hyphen_values = true)]
    auth: Option<String>,

    /// Anything past the token is ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (Some(url), Some(title), Some(head)) = (cli.url, cli.title, cli.head) else {
        println!("{}", Cli::command().render_usage());
        std::process::exit(1);
    };

    if let Err(e) = run(url, title, head, cli.auth).await {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(
    url: String,
    title: String,
    head: String,
    auth: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let _main_span = info_span!("pr_create", repo_path = %url, head = %head).entered();

    info!("loading configuration");
    let config = config::Config::load()?;
    let token = config
        .github_token(auth.as_deref())
        .ok_or(pr::PrError::MissingToken)?;
    debug!(api_url = %config.api_url(), "resolved configuration");

    let request = pr::PullRequestRequest {
        repo_path: url,
        title,
        head,
        token,
    };

    info!("creating pull request");
    let outcome = pr::create_pull_request(&request, &config).await?;
    report::print(&outcome)?;
    info!("done");

    Ok(())
}
