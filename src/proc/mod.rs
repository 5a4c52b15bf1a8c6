//! Structured external process invocation.
//!
//! CommandSpec holds a program plus argv; fixed command templates are
//! tokenized with shell-style rules (`shell_words`) but execution never
//! goes through a shell, so configured or user-supplied strings cannot
//! inject extra commands.

use crate::log_trace;
use anyhow::{Context, Result, bail};
use std::fmt;
use std::process::{Command, ExitStatus, Stdio};

/// A fully-resolved external command: program name plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Tokenize a fixed command template (e.g. a service start line) into a
    /// spec. Rejects empty templates.
    pub fn from_template(template: &str) -> Result<Self> {
        let parts = shell_words::split(template.trim())
            .context("Failed to tokenize command template")?;
        let Some((program, args)) = parts.split_first() else {
            bail!("Empty command template");
        };
        if program.is_empty() {
            bail!("Empty program name in command template");
        }
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    /// Run blocking with inherited stdio (interactive children: ssh, sftp,
    /// nmap, service daemons). Waits for the child to exit.
    pub fn run(&self) -> Result<ExitStatus> {
        log_trace!("exec: {}", self);
        Command::new(&self.program)
            .args(&self.args)
            .status()
            .with_context(|| format!("Failed to run '{}'", self))
    }

    /// Run blocking, capturing stdout as UTF-8 (lossy). stderr is
    /// suppressed to keep captured output clean for parsing.
    pub fn run_capture(&self) -> Result<String> {
        log_trace!("exec (captured): {}", self);
        let out = Command::new(&self.program)
            .args(&self.args)
            .stderr(Stdio::null())
            .output()
            .with_context(|| format!("Failed to run '{}'", self))?;
        Ok(String::from_utf8_lossy(&out.stdout).into_owned())
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}", self.program)
        } else {
            write!(f, "{} {}", self.program, self.args.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_splits_into_argv() {
        let spec = CommandSpec::from_template("mongod --journal --fork --logpath=/dev/null")
            .unwrap();
        assert_eq!(spec.program, "mongod");
        assert_eq!(spec.args, vec!["--journal", "--fork", "--logpath=/dev/null"]);
    }

    #[test]
    fn template_respects_quoting() {
        let spec = CommandSpec::from_template(r#"sh -c "echo hi""#).unwrap();
        assert_eq!(spec.args, vec!["-c", "echo hi"]);
    }

    #[test]
    fn empty_template_rejected() {
        assert!(CommandSpec::from_template("   ").is_err());
    }

    #[test]
    fn display_joins_program_and_args() {
        let spec = CommandSpec::new("ssh", vec!["dev@10.0.0.1".into()]);
        assert_eq!(spec.to_string(), "ssh dev@10.0.0.1");
        let bare = CommandSpec::new("nmap", vec![]);
        assert_eq!(bare.to_string(), "nmap");
    }
}
