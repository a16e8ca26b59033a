use std::collections::HashMap;

use crate::api::Parameter;
use crate::model::{ColumnWidths, ParameterId};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Owns every added parameter, and indexes each by all of its aliases.
///
/// Parameters live in an arena and are addressed by [`ParameterId`].
/// A parameter with both a short and a long alias is reachable through two index keys, but remains one record.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    arena: Vec<Parameter>,
    index: HashMap<String, ParameterId>,
    widths: ColumnWidths,
}

impl Registry {
    /// Add a parameter, applying last-alias-wins replacement against any parameter already indexed.
    ///
    /// For the incoming short alias: if it is already indexed to `E` and the long aliases differ,
    /// `E`'s long alias key is removed and the short alias is re-pointed at the incoming parameter.
    /// The long alias is handled symmetrically (removing `E`'s short alias key).
    /// When the aliases match exactly, the existing record is kept and `None` is returned.
    /// A parameter that claims no alias is not stored.
    pub(crate) fn insert(&mut self, parameter: Parameter) -> Option<ParameterId> {
        let id = ParameterId(self.arena.len());
        let short = parameter.short_alias().to_string();
        let long = parameter.long_alias().to_string();
        self.arena.push(parameter);
        let mut claimed = false;

        if !short.is_empty() {
            match self.index.get(&short).copied() {
                Some(existing) => {
                    let stale = self.arena[existing.0].long_alias().to_string();

                    if stale != long {
                        self.evict(&stale, existing);
                        self.index.insert(short.clone(), id);
                        claimed = true;
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("Alias '{short}' moved from {existing} to {id}.");
                        }
                    }
                }
                None => {
                    self.index.insert(short.clone(), id);
                    claimed = true;
                }
            }
        }

        if !long.is_empty() {
            match self.index.get(&long).copied() {
                Some(existing) => {
                    let stale = self.arena[existing.0].short_alias().to_string();

                    if stale != short {
                        self.evict(&stale, existing);
                        self.index.insert(long.clone(), id);
                        claimed = true;
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("Alias '{long}' moved from {existing} to {id}.");
                        }
                    }
                }
                None => {
                    self.index.insert(long.clone(), id);
                    claimed = true;
                }
            }
        }

        if !claimed {
            self.arena.pop();
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Parameter {id} claimed no alias, discarding.");
            }
            return None;
        }

        if self.arena[id.0].seed() {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Parameter {id} seeded from its default.");
            }
        }

        Some(id)
    }

    // Only remove the key while it still refers to the superseded parameter.
    fn evict(&mut self, alias: &str, owner: ParameterId) {
        if !alias.is_empty() && self.index.get(alias) == Some(&owner) {
            self.index.remove(alias);
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Alias '{alias}' evicted from {owner}.");
            }
        }
    }

    pub(crate) fn resolve(&self, alias: &str) -> Option<ParameterId> {
        self.index.get(alias).copied()
    }

    pub(crate) fn get(&self, alias: &str) -> Option<&Parameter> {
        self.resolve(alias).map(|id| &self.arena[id.0])
    }

    pub(crate) fn parameter_mut(&mut self, id: ParameterId) -> &mut Parameter {
        &mut self.arena[id.0]
    }

    /// Every reachable parameter, exactly once, in registration order.
    ///
    /// An index entry counts only if its parameter has no long alias, or the long alias still resolves back to it.
    /// This drops the short-alias half of a parameter whose long alias was taken over by a later registration.
    pub(crate) fn ids(&self) -> Vec<ParameterId> {
        let mut ids: Vec<ParameterId> = self
            .index
            .values()
            .copied()
            .filter(|id| {
                let long = self.arena[id.0].long_alias();
                long.is_empty() || self.index.get(long) == Some(id)
            })
            .collect();
        ids.sort();
        ids.dedup();
        ids
    }

    pub(crate) fn parameters(&self) -> Vec<&Parameter> {
        self.ids().into_iter().map(|id| &self.arena[id.0]).collect()
    }

    /// The number of required parameters that do not yet hold a value.
    pub(crate) fn unbound_required(&self) -> usize {
        self.parameters()
            .iter()
            .filter(|p| p.is_required() && p.value_as_str().is_empty())
            .count()
    }

    /// Grow the help column widths to fit every reachable parameter.
    pub(crate) fn widen(&mut self) -> ColumnWidths {
        let mut widths = self.widths;

        for parameter in self.parameters() {
            widths.widen(
                parameter.short_alias(),
                parameter.long_alias(),
                parameter.default_value(),
            );
        }

        self.widths = widths;
        widths
    }

    #[cfg(test)]
    pub(crate) fn widths(&self) -> ColumnWidths {
        self.widths
    }

    pub(crate) fn clear(&mut self) {
        self.arena.clear();
        self.index.clear();
        self.widths = ColumnWidths::default();
    }
}
