/*!
Command dispatcher module.

Layout:
  src/cmd/
    mod.rs       (module declarations + re-exports)
    hello.rs     (greeting + progress bar)
    servers.rs   (ServersArgs + execute_servers)
    remote.rs    (ConnectVerb, RemoteArgs + execute_remote: ssh/sftp)
    start.rs     (Service, StartArgs + execute_start)
    scan.rs      (ScanArgs + execute_scan)
    report.rs    (ReportArgs + execute_commits / execute_authors_commits)
    format.rs    (color / box header / table primitives)

Conventions:
  - Each subcommand module exposes `execute_*` returning `anyhow::Result<()>`.
  - Argument structs derive `clap::Args` and are kept minimal.
  - Human output goes through format.rs; JSON paths bypass it.
*/

pub mod format;
pub mod hello;
pub mod remote;
pub mod report;
pub mod scan;
pub mod servers;
pub mod start;

pub use hello::execute_hello;
pub use remote::{ConnectVerb, RemoteArgs, execute_remote};
pub use report::{ReportArgs, execute_authors_commits, execute_commits};
pub use scan::{ScanArgs, execute_scan};
pub use servers::{ServersArgs, execute_servers};
pub use start::{StartArgs, execute_start};
