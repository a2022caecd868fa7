use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cluster::ClusterRef;
use crate::common::ItemList;
use crate::host::HostRef;
use crate::role::RoleRef;
use crate::service::ServiceRef;

/// An asynchronous server-side operation.
///
/// A command is `active` until it finishes; `success` and `resultMessage`
/// are unset until then. Hierarchy is carried by identifier (`parentId`,
/// `childrenIds`), never by embedded command objects. Use [`CommandIndex`]
/// to walk a fetched batch as a tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_data_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_ref: Option<ClusterRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_ref: Option<ServiceRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_ref: Option<RoleRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_ref: Option<HostRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children_ids: Option<Vec<i64>>,
}

impl Command {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            active: true,
            ..Default::default()
        }
    }

    /// Finished and reported success.
    pub fn succeeded(&self) -> bool {
        !self.active && self.success == Some(true)
    }

    pub fn duration(&self) -> Option<chrono::Duration> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }
}

pub type CommandList = ItemList<Command>;

/// Result of a bulk operation: the commands that were started plus, per
/// rejected item, why no command could be issued for it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCommandList {
    #[serde(default = "Vec::new")]
    pub items: Vec<Command>,
    #[serde(default = "Vec::new")]
    pub errors: Vec<String>,
}

/// Inconsistency found while indexing a command batch.
#[derive(Debug, Error)]
pub enum CommandGraphError {
    #[error("duplicate command id {0}")]
    DuplicateId(i64),
    #[error("command {child} references unknown parent {parent}")]
    UnknownParent { child: i64, parent: i64 },
    #[error("parent chain of command {0} forms a cycle")]
    Cycle(i64),
}

/// Id-keyed view over a flat batch of commands, answering parent/child
/// queries. Building the index verifies the batch is a forest: unique ids,
/// resolvable parents, acyclic parent chains.
#[derive(Debug)]
pub struct CommandIndex<'a> {
    by_id: HashMap<i64, &'a Command>,
    children: HashMap<i64, Vec<i64>>,
    roots: Vec<i64>,
}

impl<'a> CommandIndex<'a> {
    pub fn build(commands: &'a [Command]) -> Result<Self, CommandGraphError> {
        let mut by_id: HashMap<i64, &Command> = HashMap::with_capacity(commands.len());
        for command in commands {
            if by_id.insert(command.id, command).is_some() {
                return Err(CommandGraphError::DuplicateId(command.id));
            }
        }

        let mut children: HashMap<i64, Vec<i64>> = HashMap::new();
        let mut roots = Vec::new();
        for command in commands {
            match command.parent_id {
                Some(parent) => {
                    if !by_id.contains_key(&parent) {
                        return Err(CommandGraphError::UnknownParent {
                            child: command.id,
                            parent,
                        });
                    }
                    children.entry(parent).or_default().push(command.id);
                }
                None => roots.push(command.id),
            }
        }

        // A parent chain longer than the batch must revisit an id.
        for command in commands {
            let mut current = command.parent_id;
            let mut steps = 0usize;
            while let Some(parent) = current {
                steps += 1;
                if steps > commands.len() {
                    return Err(CommandGraphError::Cycle(command.id));
                }
                current = by_id[&parent].parent_id;
            }
        }

        Ok(Self {
            by_id,
            children,
            roots,
        })
    }

    pub fn get(&self, id: i64) -> Option<&'a Command> {
        self.by_id.get(&id).copied()
    }

    pub fn parent_of(&self, id: i64) -> Option<&'a Command> {
        self.by_id
            .get(&id)
            .and_then(|command| command.parent_id)
            .and_then(|parent| self.get(parent))
    }

    pub fn children_of(&self, id: i64) -> Vec<&'a Command> {
        self.children
            .get(&id)
            .map(|ids| ids.iter().filter_map(|&child| self.get(child)).collect())
            .unwrap_or_default()
    }

    /// Commands with no parent, in batch order.
    pub fn roots(&self) -> Vec<&'a Command> {
        self.roots.iter().filter_map(|&id| self.get(id)).collect()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(id: i64, parent: Option<i64>) -> Command {
        Command {
            parent_id: parent,
            ..Command::new(id, format!("cmd-{}", id))
        }
    }

    #[test]
    fn test_command_wire_shape_uses_ids_not_nesting() {
        let command = Command {
            parent_id: Some(7),
            children_ids: Some(vec![42, 43]),
            ..Command::new(40, "RollingRestart")
        };
        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(json["parentId"], 7);
        assert_eq!(json["childrenIds"][1], 43);
        assert_eq!(json["active"], true);
    }

    #[test]
    fn test_succeeded_requires_finished() {
        let mut command = Command::new(1, "Restart");
        command.success = Some(true);
        assert!(!command.succeeded());
        command.active = false;
        assert!(command.succeeded());
    }

    #[test]
    fn test_index_answers_parent_and_children() {
        let batch = vec![command(1, None), command(2, Some(1)), command(3, Some(1))];
        let index = CommandIndex::build(&batch).unwrap();
        assert_eq!(index.len(), 3);
        assert_eq!(index.roots().len(), 1);
        assert_eq!(index.parent_of(2).unwrap().id, 1);
        let children: Vec<i64> = index.children_of(1).iter().map(|c| c.id).collect();
        assert_eq!(children, vec![2, 3]);
        assert!(index.children_of(3).is_empty());
    }

    #[test]
    fn test_index_rejects_duplicate_ids() {
        let batch = vec![command(1, None), command(1, None)];
        assert!(matches!(
            CommandIndex::build(&batch),
            Err(CommandGraphError::DuplicateId(1))
        ));
    }

    #[test]
    fn test_index_rejects_unknown_parent() {
        let batch = vec![command(1, Some(99))];
        assert!(matches!(
            CommandIndex::build(&batch),
            Err(CommandGraphError::UnknownParent { child: 1, parent: 99 })
        ));
    }

    #[test]
    fn test_index_rejects_cycle() {
        let batch = vec![command(1, Some(2)), command(2, Some(1))];
        assert!(matches!(
            CommandIndex::build(&batch),
            Err(CommandGraphError::Cycle(_))
        ));
    }

    #[test]
    fn test_bulk_command_list_collects_errors() {
        let list = BulkCommandList {
            items: vec![Command::new(5, "Restart")],
            errors: vec!["role hdfs1-dn-9 is decommissioned".to_string()],
        };
        let json = serde_json::to_string(&list).unwrap();
        let back: BulkCommandList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
