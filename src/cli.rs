// CLI layer: flag parsing, operation selection and output rendering.
// Everything group-related is delegated to `SecurityGroups`; this
// module only handles user-facing concerns.

use clap::Parser;

use crate::api::HttpDirectory;
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::groups::SecurityGroups;

/// Manage the security groups attached to one compute instance.
#[derive(Parser, Debug)]
#[command(name = "secgrp")]
#[command(about = "Manage the security groups attached to a compute instance")]
#[command(after_help = "Examples:
  $ secgrp --id i-1234567890abcdef --list
  $ secgrp --id i-1234567890abcdef --sgid sg-1234567890abcdefg --add
  $ secgrp --id i-1234567890abcdef --sgid sg-1234567890abcdefg --remove")]
pub struct Cli {
    /// Compute instance ID to operate on.
    #[arg(long, value_name = "instanceId")]
    pub id: Option<String>,

    /// Security group ID to add or remove (ignored by --list).
    #[arg(long, value_name = "groupId", default_value = "")]
    pub sgid: String,

    /// Add the security group to the instance.
    #[arg(long)]
    pub add: bool,

    /// Remove the security group from the instance.
    #[arg(long)]
    pub remove: bool,

    /// List the security groups of the instance as JSON.
    #[arg(long)]
    pub list: bool,
}

/// The one operation a run performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Remove,
    List,
}

impl Cli {
    /// Select the operation from the boolean flags. When several are
    /// set, list wins over add and add wins over remove; this matches
    /// the historical flag-check order and is kept for compatibility.
    pub fn operation(&self) -> Result<Operation> {
        if self.list {
            return Ok(Operation::List);
        }

        if self.add {
            return Ok(Operation::Add);
        }

        if self.remove {
            return Ok(Operation::Remove);
        }

        Err(Error::NoOperationSpecified)
    }
}

/// Entry point used by `main`: wires configuration, client and service
/// together, runs the selected operation, prints list output.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let instance_id = match cli.id.as_deref() {
        Some(id) if !id.is_empty() => id,
        _ => return Err(Error::MissingArgument("instance ID").into()),
    };

    let directory = HttpDirectory::new(ApiConfig::from_env())?;
    let sg = SecurityGroups::new(directory, instance_id);

    match cli.operation()? {
        Operation::Add => sg.add(&cli.sgid)?,
        Operation::Remove => sg.remove(&cli.sgid)?,
        Operation::List => {
            let groups = sg.list()?;
            println!("{}", serde_json::to_string_pretty(&groups)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn list_wins_over_add_and_remove() {
        let cli = parse(&["secgrp", "--id", "i-1", "--list", "--add", "--remove"]);
        assert_eq!(cli.operation().unwrap(), Operation::List);
    }

    #[test]
    fn add_wins_over_remove() {
        let cli = parse(&["secgrp", "--id", "i-1", "--add", "--remove"]);
        assert_eq!(cli.operation().unwrap(), Operation::Add);
    }

    #[test]
    fn remove_alone_is_selected() {
        let cli = parse(&["secgrp", "--id", "i-1", "--sgid", "sg-1", "--remove"]);
        assert_eq!(cli.operation().unwrap(), Operation::Remove);
    }

    #[test]
    fn no_operation_flag_is_an_error() {
        let cli = parse(&["secgrp", "--id", "i-1"]);
        assert!(matches!(
            cli.operation().unwrap_err(),
            Error::NoOperationSpecified
        ));
    }

    #[test]
    fn sgid_defaults_to_empty() {
        let cli = parse(&["secgrp", "--id", "i-1", "--list"]);
        assert_eq!(cli.sgid, "");
    }

    #[test]
    fn id_is_optional_at_the_parser_level() {
        // validated in run() so the error goes through the normal
        // stderr-plus-exit-1 path instead of a clap usage error
        let cli = parse(&["secgrp", "--list"]);
        assert_eq!(cli.id, None);
    }
}
