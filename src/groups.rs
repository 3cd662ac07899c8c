// Per-instance security-group operations. Every mutation is a
// read-modify-write against the group directory: fetch the current set,
// plan the full replacement list, submit it.

use log::info;

use crate::api::{GroupDirectory, GroupIdentifier};
use crate::error::{Error, Result};
use crate::plan;

/// Security-group operations bound to one instance and one directory
/// handle. Generic over the directory so tests can swap in a fake.
pub struct SecurityGroups<D> {
    directory: D,
    instance_id: String,
}

impl<D: GroupDirectory> SecurityGroups<D> {
    pub fn new(directory: D, instance_id: impl Into<String>) -> Self {
        SecurityGroups {
            directory,
            instance_id: instance_id.into(),
        }
    }

    /// Attach `group_id` to the instance. Rejects an empty id and an id
    /// the instance already has, before any write request goes out.
    pub fn add(&self, group_id: &str) -> Result<()> {
        if group_id.is_empty() {
            return Err(Error::MissingArgument("security group ID"));
        }

        let groups = self.list()?;
        let group_ids = plan::plan_add(&groups, group_id)?;
        self.directory.modify(&self.instance_id, &group_ids)?;
        info!("attached {} to {}", group_id, self.instance_id);
        Ok(())
    }

    /// Detach `group_id` from the instance. Rejects an empty id and an
    /// id the instance does not have.
    pub fn remove(&self, group_id: &str) -> Result<()> {
        if group_id.is_empty() {
            return Err(Error::MissingArgument("security group ID"));
        }

        let groups = self.list()?;
        let group_ids = plan::plan_remove(&groups, group_id)?;
        self.directory.modify(&self.instance_id, &group_ids)?;
        info!("detached {} from {}", group_id, self.instance_id);
        Ok(())
    }

    /// Groups currently attached to the instance, in directory order.
    pub fn list(&self) -> Result<Vec<GroupIdentifier>> {
        self.directory.describe(&self.instance_id)
    }
}
