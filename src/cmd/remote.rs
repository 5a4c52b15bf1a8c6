/*!
`remote.rs`

Implements the `ssh` and `sftp` subcommands: resolve a server alias from
configuration and hand off to the matching remote-connection client.

Behavior:
  - Alias miss: red "<alias>: server not found in the list", exit 1, and
    no external process is started.
  - Alias hit: print the invocation plus the dev password hint, then run
    the client with inherited stdio and wait for it.
  - Client spawn/run failure: reported as red text, exit not elevated
    (best-effort path).
*/

use anyhow::Result;
use clap::Args;
use std::fmt;

use crate::cmd::format::{Role, StyleOptions, color};
use crate::config::{Config, UnknownAlias};
use crate::log_debug;
use crate::proc::CommandSpec;

/// Which remote-connection client to hand off to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectVerb {
    Ssh,
    Sftp,
}

impl ConnectVerb {
    pub fn program(&self) -> &'static str {
        match self {
            ConnectVerb::Ssh => "ssh",
            ConnectVerb::Sftp => "sftp",
        }
    }
}

impl fmt::Display for ConnectVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// CLI arguments shared by `bro ssh` and `bro sftp`.
#[derive(Args, Debug)]
pub struct RemoteArgs {
    /// Server alias from config.yml
    #[arg(value_name = "SERVER")]
    pub server: String,

    /// Remote user
    #[arg(value_name = "USER", default_value = "dev")]
    pub user: String,
}

/// Entry point for the ssh/sftp subcommands.
pub fn execute_remote(verb: ConnectVerb, args: RemoteArgs) -> Result<()> {
    let config = Config::load()?;
    let outcome = connect_with(&config, verb, &args.server, &args.user, |spec| {
        let status = spec.run()?;
        log_debug!("{} exited with {}", spec.program, status);
        Ok(())
    });
    if let Err(miss) = outcome {
        let style = StyleOptions::detect();
        println!("{}", color(Role::Error, miss.to_string(), &style));
        std::process::exit(1);
    }
    Ok(())
}

/// Build and run the remote invocation for a resolved alias.
///
/// Resolution happens before the runner is touched, so an unknown alias can
/// never cause a partial side effect. The runner's own failure is reported
/// but swallowed.
fn connect_with<R>(
    config: &Config,
    verb: ConnectVerb,
    server: &str,
    user: &str,
    runner: R,
) -> Result<(), UnknownAlias>
where
    R: FnOnce(&CommandSpec) -> Result<()>,
{
    let address = config.resolve(server)?;
    let spec = CommandSpec::new(verb.program(), vec![format!("{user}@{address}")]);

    let style = StyleOptions::detect();
    println!(
        "{}",
        color(
            Role::Status,
            format!(
                "Running: {} use Password: {} for dev",
                spec, config.dev_password
            ),
            &style
        )
    );
    if let Err(e) = runner(&spec) {
        println!("{}", color(Role::Error, e.to_string(), &style));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::cell::RefCell;

    fn config() -> Config {
        Config::from_yaml("servers:\n  web: 10.0.0.1\ndev_password: s3cret\n").unwrap()
    }

    #[test]
    fn hit_builds_user_at_address_argv() {
        let seen = RefCell::new(None);
        connect_with(&config(), ConnectVerb::Ssh, "web", "dev", |spec| {
            *seen.borrow_mut() = Some(spec.clone());
            Ok(())
        })
        .unwrap();
        let spec = seen.into_inner().unwrap();
        assert_eq!(spec.program, "ssh");
        assert_eq!(spec.args, vec!["dev@10.0.0.1"]);
    }

    #[test]
    fn sftp_verb_selects_sftp_client() {
        let seen = RefCell::new(None);
        connect_with(&config(), ConnectVerb::Sftp, "web", "alice", |spec| {
            *seen.borrow_mut() = Some(spec.clone());
            Ok(())
        })
        .unwrap();
        let spec = seen.into_inner().unwrap();
        assert_eq!(spec.program, "sftp");
        assert_eq!(spec.args, vec!["alice@10.0.0.1"]);
    }

    #[test]
    fn miss_never_invokes_runner() {
        let invoked = RefCell::new(false);
        let err = connect_with(&config(), ConnectVerb::Ssh, "db", "dev", |_| {
            *invoked.borrow_mut() = true;
            Ok(())
        })
        .unwrap_err();
        assert_eq!(err, UnknownAlias("db".into()));
        assert!(!*invoked.borrow(), "no process invocation on alias miss");
    }

    #[test]
    fn runner_failure_is_swallowed() {
        let out = connect_with(&config(), ConnectVerb::Ssh, "web", "dev", |_| {
            anyhow::bail!("spawn failed")
        });
        assert!(out.is_ok(), "external process failure is best-effort");
    }

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(subcommand)]
        cmd: TestSub,
    }

    #[derive(clap::Subcommand, Debug)]
    enum TestSub {
        Ssh(RemoteArgs),
    }

    #[test]
    fn clap_user_defaults_to_dev() {
        let cli = TestCli::try_parse_from(["t", "ssh", "web"]).unwrap();
        match cli.cmd {
            TestSub::Ssh(a) => {
                assert_eq!(a.server, "web");
                assert_eq!(a.user, "dev");
            }
        }
    }

    #[test]
    fn clap_accepts_explicit_user() {
        let cli = TestCli::try_parse_from(["t", "ssh", "web", "alice"]).unwrap();
        match cli.cmd {
            TestSub::Ssh(a) => assert_eq!(a.user, "alice"),
        }
    }
}
