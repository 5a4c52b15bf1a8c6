use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd;
mod config;
mod git;
mod histogram;
mod proc;
mod utils;

use cmd::{ConnectVerb, RemoteArgs, ReportArgs, ScanArgs, ServersArgs, StartArgs};

/// Bro - developer workstation helper
///
/// Commands:
///   bro hello                      greeting + progress bar
///   bro servers [--json]           configured alias -> address table
///   bro ssh  <server> [user]       remote shell session (user defaults to dev)
///   bro sftp <server> [user]       remote file transfer session
///   bro start <name>               start a known local service
///   bro scan <hostname> [range]    nmap ping scan over hostname/range
///   bro commits [--json]           commit-date histogram for the CWD repo
///   bro authors-commits [--json]   per-author commit histogram
///
/// Global flags:
///   -v / -vv        Increase verbosity
///   -q / --quiet    Errors only
///
/// Configuration (config.yml, YAML):
///   servers:        alias -> address mapping
///   dev_password:   shared dev secret printed before remote sessions
///   Path: $BRO_CONFIG, else config.yml beside the executable, else ./config.yml
///
/// Exit codes: 0 for normal completion (including "nothing to do"
/// informational paths); 1 when an ssh/sftp alias is not configured.
#[derive(Parser, Debug)]
#[command(
    name = "bro",
    version,
    author,
    about = "Bro - a developer workstation helper",
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Silence all non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Say hello to bro
    Hello,

    /// List configured servers
    Servers(ServersArgs),

    /// Open a remote shell session to a configured server
    Ssh(RemoteArgs),

    /// Open a remote file-transfer session to a configured server
    Sftp(RemoteArgs),

    /// Start a known local development service
    Start(StartArgs),

    /// Ping-scan a host or network
    Scan(ScanArgs),

    /// Commit-date histogram for the repository in the CWD
    Commits(ReportArgs),

    /// Per-author commit histogram
    #[command(alias = "authors_commits")]
    AuthorsCommits(ReportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = utils::derive_level(cli.verbose, cli.quiet);
    utils::init_logging(level);

    match cli.command {
        Commands::Hello => cmd::execute_hello(),
        Commands::Servers(args) => cmd::execute_servers(args),
        Commands::Ssh(args) => cmd::execute_remote(ConnectVerb::Ssh, args),
        Commands::Sftp(args) => cmd::execute_remote(ConnectVerb::Sftp, args),
        Commands::Start(args) => cmd::execute_start(args),
        Commands::Scan(args) => cmd::execute_scan(args),
        Commands::Commits(args) => cmd::execute_commits(args),
        Commands::AuthorsCommits(args) => cmd::execute_authors_commits(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_verb() {
        for argv in [
            vec!["bro", "hello"],
            vec!["bro", "servers"],
            vec!["bro", "ssh", "web"],
            vec!["bro", "sftp", "web", "alice"],
            vec!["bro", "start", "redis"],
            vec!["bro", "scan", "10.0.0.0", "24"],
            vec!["bro", "commits"],
            vec!["bro", "authors-commits"],
            vec!["bro", "authors_commits"],
        ] {
            assert!(
                Cli::try_parse_from(argv.iter().copied()).is_ok(),
                "failed to parse {argv:?}"
            );
        }
    }

    #[test]
    fn global_flags_apply_after_verb() {
        let cli = Cli::try_parse_from(["bro", "commits", "-v"]).unwrap();
        assert_eq!(cli.verbose, 1);
        let cli = Cli::try_parse_from(["bro", "servers", "-q"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn unknown_verb_rejected() {
        assert!(Cli::try_parse_from(["bro", "frobnicate"]).is_err());
    }
}
