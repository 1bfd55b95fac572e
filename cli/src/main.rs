//! gutenquote CLI - quotes from random Project Gutenberg ebooks

mod fetch;
mod twitter;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use gutenquote::render::{self, JsonFormat};
use gutenquote::select::choose_quote;
use gutenquote::source::{book_url, page_link, DEFAULT_MIRROR};
use gutenquote::{extract_quotes, Catalog, CatalogEntry, Error, QuoteCard};

use fetch::fetch_book;
use twitter::{post_status, Credentials};

#[derive(Parser)]
#[command(name = "gutenquote")]
#[command(version)]
#[command(about = "Print a short quote from a Project Gutenberg ebook", long_about = None)]
struct Cli {
    #[command(flatten)]
    quote: QuoteArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information
    Version,
}

#[derive(Args)]
struct QuoteArgs {
    /// Print more information during the run
    #[arg(short, long)]
    debug: bool,

    /// Manually specify the book number
    #[arg(short, long, value_name = "BOOK")]
    manual: Option<u32>,

    /// Post the quote to Twitter
    #[arg(short, long)]
    twitter: bool,

    /// Catalog of book filenames, one per line
    #[arg(long, value_name = "FILE", default_value = "catalog.txt")]
    catalog: PathBuf,

    /// Gutenberg mirror to download from
    #[arg(long, value_name = "URL", default_value = DEFAULT_MIRROR)]
    mirror: String,

    /// Give up after this many failed downloads
    #[arg(long, value_name = "N", default_value_t = 20)]
    max_download_errors: u32,

    /// Print the quote as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    credentials: CredentialArgs,
}

#[derive(Args)]
struct CredentialArgs {
    /// Twitter consumer key
    #[arg(long, env = "TWITTER_CONSUMER_KEY", hide_env_values = true, default_value = "")]
    consumer_key: String,

    /// Twitter consumer secret
    #[arg(long, env = "TWITTER_CONSUMER_SECRET", hide_env_values = true, default_value = "")]
    consumer_secret: String,

    /// Twitter access token
    #[arg(long, env = "TWITTER_ACCESS_TOKEN", hide_env_values = true, default_value = "")]
    access_token: String,

    /// Twitter access token secret
    #[arg(
        long,
        env = "TWITTER_ACCESS_TOKEN_SECRET",
        hide_env_values = true,
        default_value = ""
    )]
    access_token_secret: String,
}

impl CredentialArgs {
    fn to_credentials(&self) -> Result<Credentials, twitter::PostError> {
        Credentials::new(
            self.consumer_key.as_str(),
            self.consumer_secret.as_str(),
            self.access_token.as_str(),
            self.access_token_secret.as_str(),
        )
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.quote.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => cmd_quote(&cli.quote),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_quote(args: &QuoteArgs) -> Result<(), Box<dyn std::error::Error>> {
    // Fail on missing credentials before spending any downloads
    let credentials = if args.twitter {
        Some(args.credentials.to_credentials()?)
    } else {
        None
    };

    let catalog = Catalog::load(&args.catalog)?;

    let rt = tokio::runtime::Runtime::new()?;
    let card = rt.block_on(find_quote(args, &catalog))?;

    if args.json {
        println!("{}", render::to_json(&card, JsonFormat::Pretty)?);
    } else {
        println!("{}", render::to_text(&card));
    }

    if let Some(credentials) = credentials {
        log::debug!("posting to twitter");
        let client = fetch::client()?;
        rt.block_on(post_status(
            &client,
            &credentials,
            &render::status_text(&card),
        ))?;
        println!("{}", "Posted to Twitter".green());
    }

    Ok(())
}

/// Pick books until one yields a quote.
///
/// With an explicit book number there is nothing else to try, so every
/// failure ends the run. Otherwise rejected books are skipped and failed
/// downloads are retried up to the configured limit.
async fn find_quote(
    args: &QuoteArgs,
    catalog: &Catalog,
) -> Result<QuoteCard, Box<dyn std::error::Error>> {
    let client = fetch::client()?;
    let mut download_errors = 0;

    loop {
        let entry = next_entry(args.manual, catalog)?;
        let link = page_link(entry.id);
        let url = book_url(&args.mirror, entry.id, &entry.filename);
        log::debug!("page link: {}", link);

        let text = match fetch_book(&client, &url).await {
            Ok(text) => text,
            Err(e) if e.is_status() => {
                download_errors += 1;
                log::error!("{} - {}", e, entry.id);
                if args.manual.is_some() {
                    return Err(e.into());
                }
                if download_errors >= args.max_download_errors {
                    return Err(format!(
                        "download limit ({}) reached",
                        args.max_download_errors
                    )
                    .into());
                }
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let extraction = match extract_quotes(&text) {
            Ok(extraction) => extraction,
            Err(e) if e.is_rejection() && args.manual.is_none() => {
                log::info!("{} - {}", e, entry.id);
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        log::debug!("title: {}", extraction.title());
        log::debug!("author: {}", extraction.author());
        log::debug!("paragraphs found: {}", extraction.paragraph_count);
        for quote in &extraction.quotes {
            log::debug!("quote was found: {}", quote);
        }

        let quote = choose_quote(&extraction.quotes, &mut rand::thread_rng())
            .ok_or(Error::QuoteNotFound)?;

        return Ok(QuoteCard::new(entry.id, &extraction.metadata, quote, link));
    }
}

fn next_entry(manual: Option<u32>, catalog: &Catalog) -> gutenquote::Result<CatalogEntry> {
    match manual {
        Some(id) => catalog.find(id),
        None => catalog.choose(&mut rand::thread_rng()),
    }
}

fn cmd_version() {
    println!("{} {}", "gutenquote".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Quotes from Project Gutenberg ebooks");
    println!();
    println!("Viewer: {}", gutenquote::source::VIEWER_BASE.dimmed());
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["gutenquote"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.quote.debug);
        assert!(!cli.quote.twitter);
        assert_eq!(cli.quote.manual, None);
        assert_eq!(cli.quote.catalog, PathBuf::from("catalog.txt"));
        assert_eq!(cli.quote.mirror, DEFAULT_MIRROR);
        assert_eq!(cli.quote.max_download_errors, 20);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::try_parse_from(["gutenquote", "-d", "-m", "1342", "-t"]).unwrap();
        assert!(cli.quote.debug);
        assert!(cli.quote.twitter);
        assert_eq!(cli.quote.manual, Some(1342));
    }

    #[test]
    fn test_cli_rejects_non_numeric_book() {
        assert!(Cli::try_parse_from(["gutenquote", "-m", "moby"]).is_err());
    }

    #[test]
    fn test_cli_version_subcommand() {
        let cli = Cli::try_parse_from(["gutenquote", "version"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Version)));
    }

    #[test]
    fn test_cli_credentials_from_flags() {
        let cli = Cli::try_parse_from([
            "gutenquote",
            "--consumer-key",
            "ck",
            "--consumer-secret",
            "cs",
            "--access-token",
            "at",
            "--access-token-secret",
            "ats",
        ])
        .unwrap();
        assert!(cli.quote.credentials.to_credentials().is_ok());
    }

    #[test]
    fn test_next_entry_manual() {
        let catalog = Catalog::parse("11.txt\n1342-0.txt\n");
        let entry = next_entry(Some(1342), &catalog).unwrap();
        assert_eq!(entry.filename, "1342-0.txt");
        assert!(next_entry(Some(99), &catalog).is_err());
    }

    #[test]
    fn test_next_entry_random_ignores_unnumbered_lines() {
        let catalog = Catalog::parse("README\n2701.txt\n");
        for _ in 0..20 {
            assert_eq!(next_entry(None, &catalog).unwrap().id, 2701);
        }
    }
}
