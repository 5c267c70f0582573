//! anisync-tool: sync a Kitsu library back to MyAnimeList from the terminal.
//!
//! Talks to Kitsu and MyAnimeList directly, without the anisync server.
//! Credentials not given as options or environment variables are asked for
//! interactively, and the sync is confirmed once more before anything is
//! written unless `-y` is passed.

mod report;

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use anisync::remote::{
    Credentials, HttpResources, RemoteConfig, RemoteError, SyncClient, DEFAULT_KITSU_BASE_URL,
    DEFAULT_MAL_BASE_URL, DEFAULT_MAL_USER_AGENT,
};

/// Sync a Kitsu anime library back to MyAnimeList
#[derive(Parser, Debug)]
#[command(name = "anisync-tool", version)]
#[command(after_help = "Examples:\n  \
    anisync-tool --kitsu-user-id 12345\n  \
    anisync-tool -y --kitsu-user-id 12345 --mal-username AnimeFan --mal-password secret\n  \
    KITSU_USER_ID=12345 MAL_USERNAME=AnimeFan MAL_PASSWORD=secret anisync-tool")]
struct Args {
    /// Kitsu user ID
    #[arg(long, env = "KITSU_USER_ID")]
    kitsu_user_id: Option<String>,

    /// MyAnimeList username
    #[arg(long, env = "MAL_USERNAME")]
    mal_username: Option<String>,

    /// MyAnimeList password
    #[arg(long, env = "MAL_PASSWORD", hide_env_values = true)]
    mal_password: Option<String>,

    /// Answer yes in the final confirmation
    #[arg(short = 'y', long = "yes")]
    yes: bool,

    /// MyAnimeList base URL
    #[arg(long, env = "MAL_BASE_URL", default_value = DEFAULT_MAL_BASE_URL, hide = true)]
    mal_base_url: String,

    /// Kitsu base URL
    #[arg(long, env = "KITSU_BASE_URL", default_value = DEFAULT_KITSU_BASE_URL, hide = true)]
    kitsu_base_url: String,

    /// HTTP timeout in seconds
    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value_t = 30)]
    timeout: u64,
}

#[tokio::main]
async fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(Args::parse()).await {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let kitsu_user_id = match args.kitsu_user_id.filter(|s| !s.is_empty()) {
        Some(id) => id,
        None => prompt(&mut input, &mut out, "Enter Kitsu user ID: ")?,
    };
    let mal_username = match args.mal_username.filter(|s| !s.is_empty()) {
        Some(name) => name,
        None => prompt(&mut input, &mut out, "Enter MyAnimeList username: ")?,
    };
    let mal_password = match args.mal_password.filter(|s| !s.is_empty()) {
        Some(password) => password,
        None => rpassword::prompt_password(format!(
            "Enter MyAnimeList password for username {}: ",
            mal_username
        ))
        .context("could not read password")?,
    };
    if kitsu_user_id.is_empty() || mal_username.is_empty() || mal_password.is_empty() {
        bail!("Kitsu user ID, MyAnimeList username and password are required");
    }

    let config = RemoteConfig {
        mal_base_url: args.mal_base_url,
        kitsu_base_url: args.kitsu_base_url,
        mal_user_agent: DEFAULT_MAL_USER_AGENT.to_string(),
        timeout: Duration::from_secs(args.timeout),
    };
    let http = config.http_client().context("could not build HTTP client")?;
    let credentials = Credentials::new(&mal_username, &mal_password);
    let client = SyncClient::new(Arc::new(HttpResources::new(http, &config, Some(credentials))));

    check_verification(client.verify_mal_credentials(&mal_username, &mal_password).await)?;
    writeln!(out, "Verification was successful!")?;

    let diff = client.diff(&mal_username, &kitsu_user_id).await?;
    report::write_diff(&mut out, &diff, &mal_username)?;

    if !diff.has_work() {
        writeln!(
            out,
            "No anime need to be added or updated in MyAnimeList account {:?}.",
            mal_username
        )?;
        return Ok(());
    }

    if !args.yes && !confirm(&mut input, &mut out)? {
        return Ok(());
    }

    writeln!(out, "Starting Update...")?;
    let result = client.sync(&diff).await;
    report::write_sync(&mut out, &result)?;

    Ok(())
}

/// MyAnimeList answers 401 for a wrong username or password
fn check_verification(result: Result<(), RemoteError>) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(RemoteError::Status { status: 401, .. }) => {
            bail!("MyAnimeList username and password do not match")
        }
        Err(e) => Err(e).context("could not verify MyAnimeList credentials"),
    }
}

fn prompt(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> io::Result<String> {
    write!(out, "{}", label)?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn confirm(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<bool> {
    let answer = prompt(input, out, "Do you want to continue? [y/N] ")?;
    Ok(answer.to_lowercase().starts_with('y'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_trims_input() {
        let mut input = io::Cursor::new("  AnimeFan \n");
        let mut out = Vec::new();

        let answer = prompt(&mut input, &mut out, "Enter MyAnimeList username: ").unwrap();

        assert_eq!(answer, "AnimeFan");
        assert_eq!(String::from_utf8(out).unwrap(), "Enter MyAnimeList username: ");
    }

    #[test]
    fn test_password_input_is_not_trimmed() {
        let mut input = io::Cursor::new("  pass word \n");
        let mut out = Vec::new();

        let password = rpassword::prompt_password_from_bufread(&mut input, &mut out, "Password: ").unwrap();

        assert_eq!(password, "  pass word ");
    }

    #[test]
    fn test_verification_outcome() {
        let request = anisync::shared::api::RemoteRequest {
            method: "GET".into(),
            url: "https://myanimelist.net/api/account/verify_credentials.xml".into(),
        };

        assert!(check_verification(Ok(())).is_ok());

        let rejected = check_verification(Err(RemoteError::Status {
            status: 401,
            request: request.clone(),
            body: "Invalid credentials".into(),
        }))
        .unwrap_err();
        assert_eq!(rejected.to_string(), "MyAnimeList username and password do not match");

        let unreachable = check_verification(Err(RemoteError::Transport {
            request,
            message: "operation timed out".into(),
        }))
        .unwrap_err();
        assert_eq!(unreachable.to_string(), "could not verify MyAnimeList credentials");
        assert!(format!("{:#}", unreachable).contains("operation timed out"));
    }

    #[test]
    fn test_confirm() {
        for (answer, expected) in [("y\n", true), ("Yes\n", true), ("n\n", false), ("\n", false), ("", false)] {
            let mut input = io::Cursor::new(answer);
            assert_eq!(confirm(&mut input, &mut Vec::new()).unwrap(), expected, "{:?}", answer);
        }
    }

    #[test]
    fn test_args() {
        let args = Args::try_parse_from([
            "anisync-tool",
            "-y",
            "--kitsu-user-id",
            "12345",
            "--mal-username",
            "AnimeFan",
        ])
        .unwrap();
        assert!(args.yes);
        assert_eq!(args.kitsu_user_id.as_deref(), Some("12345"));
        assert_eq!(args.timeout, 30);
    }
}
