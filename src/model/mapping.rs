use anyhow::{Result, anyhow};
use serde::Serialize;
use std::collections::BTreeMap;

use super::role::Role;

/// Role to Xcursor alias table. Built once at startup, read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CursorMapping {
    aliases: BTreeMap<Role, Vec<String>>,
}

impl Default for CursorMapping {
    fn default() -> Self {
        let aliases = Role::ALL
            .into_iter()
            .map(|role| {
                let names = role
                    .default_aliases()
                    .iter()
                    .map(|s| s.to_string())
                    .collect();
                (role, names)
            })
            .collect();
        Self { aliases }
    }
}

#[derive(Serialize)]
struct MappingDump<'a> {
    aliases: BTreeMap<&'static str, &'a [String]>,
}

impl CursorMapping {
    /// Aliases for `role`. Empty means the role has no mapping.
    pub fn expand(&self, role: Role) -> &[String] {
        self.aliases.get(&role).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn set_aliases(&mut self, role: Role, aliases: Vec<String>) {
        self.aliases.insert(role, aliases);
    }

    /// Replace the alias lists of the roles named in `overrides`.
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, Vec<String>>) -> Result<Self> {
        for (name, aliases) in overrides {
            let role =
                Role::from_name(name).ok_or_else(|| anyhow!("Unknown cursor role: {}", name))?;
            if let Some(bad) = aliases.iter().find(|a| !is_valid_alias(a)) {
                return Err(anyhow!("Invalid alias {:?} for role {}", bad, role));
            }
            self.set_aliases(role, aliases.clone());
        }
        Ok(self)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        let dump = MappingDump {
            aliases: self
                .aliases
                .iter()
                .map(|(role, names)| (role.name(), names.as_slice()))
                .collect(),
        };
        toml::to_string_pretty(&dump)
    }
}

// Aliases become file names inside `cursors/`
fn is_valid_alias(alias: &str) -> bool {
    !alias.is_empty() && alias != "." && alias != ".." && !alias.contains(['/', '\\'])
}
