//! # Apollo CLI Entry Point
//!
//! ## Usage
//!
//! ```bash
//! export APOLLO_URL=http://cmdb.internal/api
//! export APOLLO_TOKEN=secret
//!
//! # Fetch one resource
//! apollo get --id 42
//! apollo get --type host --name host1
//!
//! # List resources of a type, optionally within an ops group
//! apollo find --type host --group sre | jq '.[].attributes.name'
//!
//! # Ops groups
//! apollo groups --user alice
//! apollo members sre
//! apollo owner sre
//!
//! # Print the operation table
//! apollo operations
//! ```

use anyhow::{bail, Result};
use apollo_client::{ApolloClient, OPERATIONS};
use apollo_cli::settings;
use argh::FromArgs;
use serde::Serialize;

#[derive(FromArgs)]
/// Apollo - command-line access to the Apollo CMDB
struct Cli {
    /// service endpoint, e.g. http://cmdb.internal/api (default: $APOLLO_URL)
    #[argh(option)]
    url: Option<String>,

    /// auth token sent with every call (default: $APOLLO_TOKEN)
    #[argh(option)]
    token: Option<String>,

    /// per-call deadline in milliseconds, 0 disables it
    #[argh(option, long = "timeout-ms", default = "60000")]
    timeout_ms: u64,

    #[argh(subcommand)]
    command: Commands,
}

/// Available subcommands.
///
/// Every subcommand except `operations` talks to the service.
#[derive(FromArgs)]
#[argh(subcommand)]
enum Commands {
    Get(GetArgs),
    Find(FindArgs),
    Types(TypesArgs),
    Groups(GroupsArgs),
    Members(MembersArgs),
    Owner(OwnerArgs),
    Operations(OperationsArgs),
}

/// Arguments for fetching a single resource.
///
/// Either `--id` or both `--type` and `--name` must be given.
#[derive(FromArgs)]
#[argh(subcommand, name = "get")]
/// fetch one resource by id or by type and name
struct GetArgs {
    /// resource id
    #[argh(option)]
    id: Option<i64>,

    /// resource type, used with --name
    #[argh(option, long = "type")]
    type_name: Option<String>,

    /// resource name, used with --type
    #[argh(option)]
    name: Option<String>,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "find")]
/// list the resources of a type
struct FindArgs {
    /// resource type
    #[argh(option, long = "type")]
    type_name: String,

    /// restrict to resources owned by this ops group
    #[argh(option)]
    group: Option<String>,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "types")]
/// list resource types
struct TypesArgs {}

#[derive(FromArgs)]
#[argh(subcommand, name = "groups")]
/// list ops groups
struct GroupsArgs {
    /// only groups this user belongs to
    #[argh(option)]
    user: Option<String>,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "members")]
/// list the members of an ops group
struct MembersArgs {
    /// ops group name
    #[argh(positional)]
    group: String,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "owner")]
/// show the owner of an ops group
struct OwnerArgs {
    /// ops group name
    #[argh(positional)]
    group: String,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "operations")]
/// print every client operation with its wire method and parameters
struct OperationsArgs {}

#[tokio::main]
async fn main() -> Result<()> {
    let cli: Cli = argh::from_env();

    // Default to WARN so stdout stays clean JSON; RUST_LOG overrides
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if let Commands::Operations(_) = cli.command {
        return run_operations();
    }

    let config = settings::resolve(cli.url, cli.token, cli.timeout_ms)?;
    tracing::debug!(?config, "resolved client configuration");
    let client = ApolloClient::new(config)?;

    let result = run(&client, cli.command).await;
    client.close();
    result
}

/// Executes a networked subcommand and prints its result.
async fn run(client: &ApolloClient, command: Commands) -> Result<()> {
    match command {
        Commands::Get(args) => match (args.id, args.type_name, args.name) {
            (Some(id), None, None) => print_json(&client.query_resource_by_id(id).await?),
            (None, Some(type_name), Some(name)) => {
                print_json(&client.query_resource_by_type_and_name(&type_name, &name).await?)
            }
            _ => bail!("get needs either --id or both --type and --name"),
        },
        Commands::Find(args) => {
            let resources = match args.group {
                Some(group) => client.query_resources_by_group_and_type(&args.type_name, &group).await?,
                None => client.query_resources_by_type(&args.type_name).await?,
            };
            print_json(&resources)
        }
        Commands::Types(_) => print_json(&client.list_types().await?),
        Commands::Groups(args) => {
            let groups = match args.user {
                Some(user) => client.list_ops_groups_with_user(&user).await?,
                None => client.list_ops_groups().await?,
            };
            print_json(&groups)
        }
        Commands::Members(args) => print_json(&client.list_users(&args.group).await?),
        Commands::Owner(args) => print_json(&client.query_ops_group_owner(&args.group).await?),
        Commands::Operations(_) => run_operations(),
    }
}

#[derive(Serialize)]
struct OperationRow {
    name: &'static str,
    method: &'static str,
    params: &'static [&'static str],
    result: String,
}

fn run_operations() -> Result<()> {
    let rows: Vec<_> = OPERATIONS
        .iter()
        .map(|op| OperationRow {
            name: op.name,
            method: op.method.as_str(),
            params: op.params,
            result: op.result.to_string(),
        })
        .collect();
    print_json(&rows)
}

/// Outputs compact JSON to stdout
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_get_by_id() {
        let cli: Cli = Cli::from_args(&["apollo"], &["--url", "http://127.0.0.1:8080", "get", "--id", "42"]).unwrap();
        assert_eq!(cli.url.as_deref(), Some("http://127.0.0.1:8080"));
        assert_eq!(cli.timeout_ms, 60000);
        match cli.command {
            Commands::Get(GetArgs { id, type_name, name }) => {
                assert_eq!(id, Some(42));
                assert!(type_name.is_none());
                assert!(name.is_none());
            }
            _ => panic!("Expected Get command"),
        }
    }

    #[test]
    fn test_cli_parse_get_by_type_and_name() {
        let cli: Cli = Cli::from_args(&["apollo"], &["get", "--type", "host", "--name", "host1"]).unwrap();
        match cli.command {
            Commands::Get(GetArgs { id, type_name, name }) => {
                assert!(id.is_none());
                assert_eq!(type_name.as_deref(), Some("host"));
                assert_eq!(name.as_deref(), Some("host1"));
            }
            _ => panic!("Expected Get command"),
        }
    }

    #[test]
    fn test_cli_parse_find_with_group() {
        let cli: Cli = Cli::from_args(
            &["apollo"],
            &["--token", "secret", "--timeout-ms", "0", "find", "--type", "host", "--group", "sre"],
        )
        .unwrap();
        assert_eq!(cli.token.as_deref(), Some("secret"));
        assert_eq!(cli.timeout_ms, 0);
        match cli.command {
            Commands::Find(FindArgs { type_name, group }) => {
                assert_eq!(type_name, "host");
                assert_eq!(group.as_deref(), Some("sre"));
            }
            _ => panic!("Expected Find command"),
        }
    }

    #[test]
    fn test_cli_parse_find_requires_type() {
        assert!(Cli::from_args(&["apollo"], &["find"]).is_err());
    }

    #[test]
    fn test_cli_parse_groups() {
        let cli: Cli = Cli::from_args(&["apollo"], &["groups", "--user", "alice"]).unwrap();
        match cli.command {
            Commands::Groups(GroupsArgs { user }) => assert_eq!(user.as_deref(), Some("alice")),
            _ => panic!("Expected Groups command"),
        }
    }

    #[test]
    fn test_cli_parse_members_and_owner() {
        let cli: Cli = Cli::from_args(&["apollo"], &["members", "sre"]).unwrap();
        assert!(matches!(cli.command, Commands::Members(MembersArgs { ref group }) if group == "sre"));

        let cli: Cli = Cli::from_args(&["apollo"], &["owner", "dba"]).unwrap();
        assert!(matches!(cli.command, Commands::Owner(OwnerArgs { ref group }) if group == "dba"));
    }

    #[test]
    fn test_cli_parse_operations() {
        let cli: Cli = Cli::from_args(&["apollo"], &["operations"]).unwrap();
        assert!(matches!(cli.command, Commands::Operations(_)));
    }

    #[test]
    fn test_cli_parse_unknown_command() {
        assert!(Cli::from_args(&["apollo"], &["reboot"]).is_err());
    }

    #[tokio::test]
    async fn test_get_without_selector_fails() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let client = ApolloClient::new(apollo_client::ClientConfig::new(url, "t")).unwrap();
        let command = Commands::Get(GetArgs { id: None, type_name: Some("host".into()), name: None });
        let err = run(&client, command).await.unwrap_err();
        assert!(err.to_string().contains("--id"));
    }
}
