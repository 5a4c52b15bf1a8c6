/*!
`start.rs`

Implements the `start` subcommand: launch one of a fixed set of local
development services from a command template.

Known services (via `Service` enum):
  - server   : static file server on port 5000
  - mongodb  : forked mongod with journaling
  - redis    : redis-server with the local conf
  - vm / tm  : headless VirtualBox "turingmachine"

Unknown names are informational, not an error: a fixed "teach me" message
is printed and the process exits 0.
*/

use anyhow::Result;
use clap::Args;
use std::fmt;

use crate::cmd::format::{Role, StyleOptions, color};
use crate::log_debug;
use crate::proc::CommandSpec;

/// Enumeration of the services the tool knows how to start. Exhaustive
/// match keeps every known name handled at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Server,
    Mongodb,
    Redis,
    Vm,
}

impl Service {
    /// Parse a user-supplied name; `None` means "not a known service".
    /// Case-sensitive on purpose: names are part of a fixed vocabulary.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "server" => Some(Service::Server),
            "mongodb" => Some(Service::Mongodb),
            "redis" => Some(Service::Redis),
            "vm" | "tm" => Some(Service::Vm),
            _ => None,
        }
    }

    /// The fixed command template for this service.
    pub fn template(&self) -> &'static str {
        match self {
            Service::Server => "python3 -m http.server 5000",
            Service::Mongodb => "mongod --journal --fork --logpath=/dev/null",
            Service::Redis => "redis-server ~/.env/conf/redis.conf",
            Service::Vm => "VBoxManage startvm turingmachine --type headless",
        }
    }

    /// Optional announcement line printed before the command.
    fn announcement(&self) -> Option<&'static str> {
        match self {
            Service::Server => None,
            Service::Mongodb => Some("Starting mongodb server"),
            Service::Redis => Some("Starting redis server"),
            Service::Vm => Some("Starting VirtualBox loading turingmachine"),
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Service::Server => "server",
            Service::Mongodb => "mongodb",
            Service::Redis => "redis",
            Service::Vm => "vm",
        };
        f.write_str(s)
    }
}

/// CLI arguments for `bro start <name>`
#[derive(Args, Debug)]
pub struct StartArgs {
    /// Service to start (server|mongodb|redis|vm|tm)
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Entry point for the start subcommand.
pub fn execute_start(args: StartArgs) -> Result<()> {
    let style = StyleOptions::detect();

    let Some(service) = Service::from_name(&args.name) else {
        println!(
            "{}",
            color(
                Role::Status,
                format!("Teach me how to start {}, I will do it next time.", args.name),
                &style
            )
        );
        return Ok(());
    };

    let spec = CommandSpec::from_template(service.template())?;
    if let Some(line) = service.announcement() {
        println!("{}", color(Role::Status, line, &style));
    }
    println!("{}", color(Role::Status, format!("Running {}", spec), &style));

    match spec.run() {
        Ok(status) => log_debug!("{} exited with {status}", service),
        Err(e) => println!("{}", color(Role::Error, e.to_string(), &style)),
    }
    Ok(())
}
