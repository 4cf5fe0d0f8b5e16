use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dialoguer::Input;
use dotenvy::dotenv;
use lectern_cli::commands;
use lectern_cli::token::{TokenRequest, issue_token};
use lectern_config::{GuardConfig, JwtConfig};
use lectern_models::{Role, UserId};

#[derive(Parser)]
#[command(name = "lectern-cli")]
#[command(about = "Lectern CLI - Inspect role registries and the access guard", long_about = None)]
struct Cli {
    /// Role registry file (defaults to REGISTRY_PATH, then the built-in table)
    #[arg(long, global = true)]
    registry: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every role with its home, prefixes and grants
    Roles,
    /// Ask the access guard about a navigation
    Check {
        /// Role of the caller; omit for an anonymous caller
        #[arg(short = 'r', long)]
        role: Option<String>,

        /// Requested path
        #[arg(short = 'p', long)]
        path: String,

        /// Roles allowed on the view (defaults to the registry's view grants)
        #[arg(short = 'a', long, value_delimiter = ',')]
        allow: Option<Vec<Role>>,
    },
    /// Show the sidebar navigation of a role
    Nav {
        #[arg(short = 'r', long)]
        role: String,
    },
    /// Validate a role registry file
    Validate {
        /// Path to the registry JSON file
        path: PathBuf,
    },
    /// Issue a development access token
    IssueToken {
        /// User ID (random if omitted)
        #[arg(long)]
        id: Option<UserId>,

        /// Display name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Role carried by the token
        #[arg(short = 'r', long)]
        role: Option<String>,

        /// Accept a role outside the known set
        #[arg(long)]
        allow_unknown_role: bool,
    },
}

fn main() {
    dotenv().ok();

    let cli = Cli::parse();
    let guard_config = GuardConfig::from_env();
    let registry_path = cli.registry.or(guard_config.registry_path.clone());

    let result = match cli.command {
        Commands::Roles => {
            commands::load_registry(registry_path.as_deref()).map(|r| commands::list_roles(&r))
        }
        Commands::Check { role, path, allow } => commands::load_registry(registry_path.as_deref())
            .and_then(|registry| {
                commands::check(
                    registry,
                    &guard_config.login_route,
                    role.as_deref(),
                    &path,
                    allow.as_deref(),
                )
            }),
        Commands::Nav { role } => commands::load_registry(registry_path.as_deref())
            .and_then(|registry| commands::navigation(&registry, &role)),
        Commands::Validate { path } => commands::validate(&path),
        Commands::IssueToken {
            id,
            name,
            email,
            role,
            allow_unknown_role,
        } => handle_issue_token(id, name, email, role, allow_unknown_role),
    };

    match result {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            eprintln!("\n❌ Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn handle_issue_token(
    id: Option<UserId>,
    name: Option<String>,
    email: Option<String>,
    role: Option<String>,
    allow_unknown_role: bool,
) -> anyhow::Result<String> {
    let name = match name {
        Some(name) => name,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let email = match email {
        Some(email) => email,
        None => Input::new().with_prompt("Email address").interact_text()?,
    };

    let role = match role {
        Some(role) => role,
        None => Input::new()
            .with_prompt("Role")
            .default(Role::Student.as_str().to_string())
            .interact_text()?,
    };

    let request = TokenRequest {
        id,
        name,
        email,
        role,
    };

    issue_token(request, &JwtConfig::from_env(), allow_unknown_role)
}
