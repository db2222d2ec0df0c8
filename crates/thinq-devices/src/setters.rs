//! Per-device-type setter registration.
//!
//! Each mapping table declares which properties can be set directly and how
//! their value is validated. Properties that only make sense together (an
//! hour and a minute of the same timer) are registered as a group and are
//! always written in one multi-attribute command.

use crate::command::CommandKind;
use std::collections::HashMap;

/// A directly settable property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setter {
    pub kind: CommandKind,
    /// Properties re-sent with their current value in the same command.
    pub companions: Vec<String>,
}

/// Properties that are written together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetterGroup {
    pub name: String,
    pub members: Vec<String>,
    /// A member dropped from the command when its value is zero.
    pub omit_when_zero: Option<String>,
}

/// Resolved setter of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetterRef<'a> {
    Single(&'a Setter),
    Group(&'a SetterGroup),
}

impl SetterRef<'_> {
    /// Name callers use to invoke the setter: the group name or the property itself.
    pub fn name<'a>(&'a self, property: &'a str) -> &'a str {
        match self {
            Self::Single(_) => property,
            Self::Group(group) => &group.name,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetterTable {
    setters: HashMap<String, Setter>,
    groups: Vec<SetterGroup>,
}

impl SetterTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn add(mut self, property: &str, kind: CommandKind) -> Self {
        self.setters.insert(
            property.to_string(),
            Setter {
                kind,
                companions: Vec::new(),
            },
        );
        self
    }

    pub fn plain(self, property: &str) -> Self {
        self.add(property, CommandKind::Plain)
    }

    pub fn enumerated(self, property: &str) -> Self {
        self.add(property, CommandKind::Enum)
    }

    pub fn range(self, property: &str) -> Self {
        self.add(property, CommandKind::Range)
    }

    /// Range setter that also re-sends the current value of `companions`.
    ///
    /// Every member, companions included, must satisfy its writable range.
    pub fn paired(mut self, property: &str, companions: &[&str]) -> Self {
        self.setters.insert(
            property.to_string(),
            Setter {
                kind: CommandKind::Range,
                companions: companions.iter().map(|c| c.to_string()).collect(),
            },
        );
        self
    }

    pub fn group(mut self, name: &str, members: &[&str]) -> Self {
        self.groups.push(SetterGroup {
            name: name.to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
            omit_when_zero: None,
        });
        self
    }

    pub fn group_omitting_zero(self, name: &str, members: &[&str], optional: &str) -> Self {
        let mut table = self.group(name, members);
        if let Some(group) = table.groups.last_mut() {
            group.omit_when_zero = Some(optional.to_string());
        }
        table
    }

    pub fn setter(&self, property: &str) -> Option<&Setter> {
        self.setters.get(property)
    }

    pub fn group_named(&self, name: &str) -> Option<&SetterGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Groups take precedence over single setters.
    pub fn resolve(&self, property: &str) -> Option<SetterRef<'_>> {
        self.groups
            .iter()
            .find(|g| g.members.iter().any(|m| m == property))
            .map(SetterRef::Group)
            .or_else(|| self.setters.get(property).map(SetterRef::Single))
    }

    pub fn is_empty(&self) -> bool {
        self.setters.is_empty() && self.groups.is_empty()
    }
}
