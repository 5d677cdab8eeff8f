//! RuleSet loading - turns configuration entries into ordered sections.
//!
//! Loading is a two-phase build:
//! 1. **Seed**: the built-in sections are registered in their fixed order
//! 2. **Override**: configuration entries replace seeded fields by exact
//!    section name, and unknown section names are appended in first-seen order
//!
//! A section missing either required field after both phases is dropped with
//! an error log. All other sections are unaffected.

mod defaults;
mod section;

pub use defaults::*;
pub use section::*;

use serde::{Deserialize, Serialize};
use swap_world::{ConfigEntry, ConfigStore};
use tracing::{debug, error, warn};

/// Ordered collection of sections. Order is significant: the first matching
/// section wins during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    sections: Vec<Section>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a rule set from sections, keeping their order.
    pub fn from_sections(sections: impl IntoIterator<Item = Section>) -> Self {
        Self {
            sections: sections.into_iter().collect(),
        }
    }

    /// Append a section after all existing ones.
    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Look up a section by exact name.
    pub fn get(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Raw field values collected for one section before parsing.
#[derive(Debug)]
struct PendingSection {
    name: String,
    active_on: Option<String>,
    priority_list: Option<String>,
    active_on_overridden: bool,
    priority_list_overridden: bool,
}

impl PendingSection {
    fn empty(name: String) -> Self {
        Self {
            name,
            active_on: None,
            priority_list: None,
            active_on_overridden: false,
            priority_list_overridden: false,
        }
    }

    fn seeded(default: &DefaultSection) -> Self {
        Self {
            active_on: Some(to_comma_separated(default.active_on)),
            priority_list: Some(to_comma_separated(default.priority_list)),
            ..Self::empty(default.name.to_string())
        }
    }

    /// Apply one configuration entry. Within the override phase the first
    /// value for a field wins.
    fn apply(&mut self, field: &str, value: String) {
        let (slot, overridden) = match field {
            ACTIVE_ON_FIELD => (&mut self.active_on, &mut self.active_on_overridden),
            PRIORITY_LIST_FIELD => (&mut self.priority_list, &mut self.priority_list_overridden),
            _ => {
                debug!(section = %self.name, field, "ignoring unknown configuration field");
                return;
            }
        };

        if *overridden {
            warn!(section = %self.name, field, "duplicate configuration field, keeping first value");
            return;
        }

        *slot = Some(value);
        *overridden = true;
    }
}

/// Build a rule set from configuration entries layered over the built-in
/// sections.
pub fn load<I>(entries: I) -> RuleSet
where
    I: IntoIterator<Item = ConfigEntry>,
{
    let mut pending: Vec<PendingSection> = DEFAULT_SECTIONS.iter().map(PendingSection::seeded).collect();

    for entry in entries {
        let ConfigEntry { key, value } = entry;
        let index = match pending.iter().position(|p| p.name == key.section) {
            Some(index) => index,
            None => {
                pending.push(PendingSection::empty(key.section));
                pending.len() - 1
            }
        };
        pending[index].apply(&key.key, value);
    }

    let mut ruleset = RuleSet::new();
    for section in pending {
        match Section::from_fields(
            section.name,
            section.active_on.as_deref(),
            section.priority_list.as_deref(),
        ) {
            Ok(section) => ruleset.push(section),
            Err(err) => error!(%err, "dropping configuration section"),
        }
    }

    debug!(sections = ruleset.len(), "built tool rule set");
    ruleset
}

/// Bind the built-in sections into `store`, then load every entry it holds.
///
/// Binding writes the defaults into a fresh store so the configuration is
/// immediately usable and editable; existing values are left untouched.
pub fn load_from_store<S>(store: &mut S) -> RuleSet
where
    S: ConfigStore + ?Sized,
{
    for default in &DEFAULT_SECTIONS {
        store.get_or_create(
            default.name,
            ACTIVE_ON_FIELD,
            &to_comma_separated(default.active_on),
        );
        store.get_or_create(
            default.name,
            PRIORITY_LIST_FIELD,
            &to_comma_separated(default.priority_list),
        );
    }

    load(store.all_entries())
}
