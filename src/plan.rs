// Group-set planning: the pure logic that turns the current group set
// plus one intended change into the full replacement list the compute
// API expects. No I/O happens here, so it is testable without a network.

use crate::api::GroupIdentifier;
use crate::error::{Error, Result};

/// True iff some element of `groups` has the given id.
pub fn contains_id(groups: &[GroupIdentifier], id: &str) -> bool {
    groups.iter().any(|g| g.id == id)
}

/// Plan attaching `group_id`: all current ids in their existing order,
/// with `group_id` appended last. Fails with `AlreadyPresent` if the
/// instance already has it, so a redundant add never reaches the API.
pub fn plan_add(current: &[GroupIdentifier], group_id: &str) -> Result<Vec<String>> {
    if contains_id(current, group_id) {
        return Err(Error::AlreadyPresent(group_id.to_string()));
    }

    let mut ids: Vec<String> = current.iter().map(|g| g.id.clone()).collect();
    ids.push(group_id.to_string());
    Ok(ids)
}

/// Plan detaching `group_id`: all current ids in their existing order,
/// excluding every occurrence of `group_id` (a filter, so duplicates in
/// the source data are all dropped). Fails with `NotFound` if the
/// instance does not have it, so a no-op remove never reaches the API.
pub fn plan_remove(current: &[GroupIdentifier], group_id: &str) -> Result<Vec<String>> {
    if !contains_id(current, group_id) {
        return Err(Error::NotFound(group_id.to_string()));
    }

    let ids = current
        .iter()
        .filter(|g| g.id != group_id)
        .map(|g| g.id.clone())
        .collect();
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn group(id: &str, name: &str) -> GroupIdentifier {
        GroupIdentifier {
            id: id.into(),
            name: name.into(),
        }
    }

    fn testgroups() -> Vec<GroupIdentifier> {
        vec![group("sg-AAA", "g1"), group("sg-BBB", "g2")]
    }

    #[test]
    fn contains_id_finds_an_attached_group() {
        assert!(contains_id(&testgroups(), "sg-AAA"));
    }

    #[test]
    fn contains_id_misses_an_unattached_group() {
        assert!(!contains_id(&testgroups(), "sg-ZZZ"));
    }

    #[test]
    fn add_appends_the_new_group_last() {
        let got = plan_add(&testgroups(), "sg-CCC").unwrap();
        assert_eq!(got, vec!["sg-AAA", "sg-BBB", "sg-CCC"]);
    }

    #[test]
    fn add_rejects_a_group_already_attached() {
        let groups = testgroups();
        let err = plan_add(&groups, "sg-AAA").unwrap_err();
        assert!(matches!(err, Error::AlreadyPresent(id) if id == "sg-AAA"));
        // the input is untouched
        assert_eq!(groups, testgroups());
    }

    #[test]
    fn remove_filters_the_group_out() {
        let got = plan_remove(&testgroups(), "sg-BBB").unwrap();
        assert_eq!(got, vec!["sg-AAA"]);
    }

    #[test]
    fn remove_rejects_a_group_not_attached() {
        let err = plan_remove(&testgroups(), "sg-ZZZ").unwrap_err();
        assert!(matches!(err, Error::NotFound(id) if id == "sg-ZZZ"));
    }

    #[test]
    fn remove_drops_every_occurrence_of_a_duplicated_id() {
        let groups = vec![
            group("sg-AAA", "g1"),
            group("sg-BBB", "g2"),
            group("sg-AAA", "g1-again"),
        ];
        let got = plan_remove(&groups, "sg-AAA").unwrap();
        assert_eq!(got, vec!["sg-BBB"]);
    }

    #[test]
    fn empty_set_rejects_remove_and_accepts_add() {
        let err = plan_remove(&[], "sg-AAA").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(plan_add(&[], "sg-AAA").unwrap(), vec!["sg-AAA"]);
    }
}
