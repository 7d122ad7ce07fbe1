use std::collections::{BTreeMap, HashMap};

use crate::{
    foundation::error::{AuroraError, AuroraResult},
    theme::preset::{ThemeId, ThemePreset},
};

/// Name → theme → preset mapping. Read-only once built.
#[derive(Clone, Debug)]
pub struct ThemeRegistry {
    presets: [ThemePreset; ThemeId::COUNT],
    names: HashMap<String, ThemeId>,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ThemeRegistry {
    /// Built-in presets and aliases.
    pub fn builtin() -> Self {
        let presets = ThemeId::ALL.map(ThemeId::builtin_preset);
        let mut names = HashMap::with_capacity(ThemeId::COUNT + ThemeId::ALIASES.len());
        for id in ThemeId::ALL {
            names.insert(id.id().to_string(), id);
        }
        for (alias, id) in ThemeId::ALIASES {
            names.insert(alias.to_string(), id);
        }
        Self { presets, names }
    }

    /// Built-ins with per-theme preset replacements.
    pub fn with_overrides(overrides: &BTreeMap<ThemeId, ThemePreset>) -> AuroraResult<Self> {
        let mut registry = Self::builtin();
        for (id, preset) in overrides {
            preset.validate().map_err(|e| {
                AuroraError::validation(format!("override for theme '{}': {e}", id.id()))
            })?;
            registry.presets[id.index()] = *preset;
        }
        Ok(registry)
    }

    /// Resolve a canonical name or alias. Unknown names yield `None`.
    pub fn resolve(&self, name: &str) -> Option<ThemeId> {
        self.names.get(name).copied()
    }

    /// Preset for a resolved theme.
    pub fn preset(&self, id: ThemeId) -> &ThemePreset {
        &self.presets[id.index()]
    }

    /// Alias names pointing at `id`, sorted.
    pub fn aliases_of(&self, id: ThemeId) -> Vec<&str> {
        let mut out: Vec<&str> = self
            .names
            .iter()
            .filter(|(name, target)| **target == id && name.as_str() != id.id())
            .map(|(name, _)| name.as_str())
            .collect();
        out.sort_unstable();
        out
    }

    /// JSON listing of every theme with its aliases and preset.
    pub fn to_json(&self) -> serde_json::Value {
        let themes: Vec<serde_json::Value> = ThemeId::ALL
            .iter()
            .map(|&id| {
                serde_json::json!({
                    "id": id,
                    "aliases": self.aliases_of(id),
                    "preset": self.preset(id),
                })
            })
            .collect();
        serde_json::json!({ "themes": themes })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/registry.rs"]
mod tests;
