//! access-admin - inspect and edit ProjectHub access rights
//!
//! Opens an edit session against the access-rights API for a role or a
//! user, applies toggles in order, and saves the result.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use projecthub_access::access::{AccessGrant, ToggleKey};
use projecthub_access::config::Config;
use projecthub_access::utils::logging::init_logging;
use projecthub_access::{EditSession, EditTarget, HttpAccessRightsClient, SessionContext};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

#[derive(Debug, Parser)]
#[command(name = "access-admin", version, long_version = LONG_VERSION, about)]
struct Cli {
    /// YAML configuration file; environment variables are used when absent
    #[arg(long, short, global = true, env = "ACCESS_CONFIG")]
    config: Option<PathBuf>,

    /// Bearer token of the signed-in administrator
    #[arg(long, global = true, env = "ACCESS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Tenant identifier sent with every request
    #[arg(long, global = true, env = "ACCESS_TENANT_ID")]
    tenant: Option<String>,

    /// Print grants as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the access rights of a role
    ShowRole {
        #[arg(long)]
        role_id: String,
    },
    /// Show the effective access rights of a user within a role
    ShowUser {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        role_id: String,
    },
    /// Toggle rights of a role and save
    GrantRole {
        #[arg(long)]
        role_id: String,
        /// Key such as `users_canEdit`; repeat to apply several in order
        #[arg(long = "toggle", required = true)]
        toggles: Vec<ToggleKey>,
    },
    /// Toggle user-specific rights within a role and save
    GrantUser {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        role_id: String,
        /// Key such as `users_canEdit`; repeat to apply several in order
        #[arg(long = "toggle", required = true)]
        toggles: Vec<ToggleKey>,
    },
}

impl Command {
    fn target(&self) -> EditTarget {
        match self {
            Command::ShowRole { role_id } | Command::GrantRole { role_id, .. } => {
                EditTarget::role(role_id.as_str())
            }
            Command::ShowUser { user_id, role_id } | Command::GrantUser { user_id, role_id, .. } => {
                EditTarget::user(user_id.as_str(), role_id.as_str())
            }
        }
    }

    fn toggles(&self) -> &[ToggleKey] {
        match self {
            Command::GrantRole { toggles, .. } | Command::GrantUser { toggles, .. } => toggles,
            Command::ShowRole { .. } | Command::ShowUser { .. } => &[],
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::from_env()?,
    };
    init_logging(&config.logging)?;

    let Some(token) = cli.token.clone() else {
        bail!("no access token given; pass --token or set ACCESS_TOKEN");
    };
    let mut ctx = SessionContext::new(token);
    if let Some(tenant) = &cli.tenant {
        ctx = ctx.with_tenant(tenant.as_str());
    }

    let client = HttpAccessRightsClient::new(&config.client)?;
    let target = cli.command.target();

    let mut session =
        EditSession::open(&client, &ctx, target.clone(), config.access.view_only_set())
            .await
            .with_context(|| format!("failed to load access rights for {}", target))?;

    let toggles = cli.command.toggles();
    if toggles.is_empty() {
        return print_grants(&session.pending_grants(), cli.json);
    }

    for key in toggles {
        if !session.toggle(key) {
            warn!("Toggle {} had no effect", key);
        }
    }

    if !session.is_dirty() {
        info!("No changes to save for {}", target);
        return print_grants(&session.pending_grants(), cli.json);
    }

    let saved = session
        .save(&client, &ctx)
        .await
        .with_context(|| format!("failed to save access rights for {}", target))?;

    print_grants(&saved, cli.json)
}

fn print_grants(grants: &[AccessGrant], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(grants)?);
        return Ok(());
    }

    let width = grants
        .iter()
        .map(|grant| grant.module_name.len())
        .max()
        .unwrap_or(0)
        .max("MODULE".len());

    println!("{:<width$}  VIEW   EDIT   DELETE", "MODULE", width = width);
    for grant in grants {
        println!(
            "{:<width$}  {:<5}  {:<5}  {:<5}",
            grant.module_name,
            grant.can_view,
            grant.can_edit,
            grant.can_delete,
            width = width
        );
    }
    Ok(())
}
