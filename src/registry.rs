//! Live set of meteors visible to targeting.
//!
//! Meteors are kept in registration order so that scans are reproducible.
//! Removal is immediate; there is no tombstoning, so a destroyed meteor can
//! never be observed by a later read.

use crate::color::MeteorColor;
use crate::meteor::{Meteor, MeteorId};

/// Registered meteors, owned by the simulation session.
#[derive(Debug, Clone, Default)]
pub struct MeteorRegistry {
    meteors: Vec<Meteor>,
}

impl MeteorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            meteors: Vec::new(),
        }
    }

    /// Registers `meteor`. Registering an id twice keeps the first entry.
    ///
    /// Returns `true` when the meteor was newly added.
    pub fn register(&mut self, meteor: Meteor) -> bool {
        if self.contains(meteor.id) {
            return false;
        }
        self.meteors.push(meteor);
        true
    }

    /// Deregisters and returns the meteor with `id`, if present.
    pub fn remove(&mut self, id: MeteorId) -> Option<Meteor> {
        let index = self.meteors.iter().position(|m| m.id == id)?;
        Some(self.meteors.remove(index))
    }

    /// Looks up a registered meteor.
    #[must_use]
    pub fn get(&self, id: MeteorId) -> Option<&Meteor> {
        self.meteors.iter().find(|m| m.id == id)
    }

    /// Mutable lookup of a registered meteor.
    pub fn get_mut(&mut self, id: MeteorId) -> Option<&mut Meteor> {
        self.meteors.iter_mut().find(|m| m.id == id)
    }

    /// `true` if a meteor with `id` is registered.
    #[must_use]
    pub fn contains(&self, id: MeteorId) -> bool {
        self.get(id).is_some()
    }

    /// `true` if any registered meteor has `color`.
    #[must_use]
    pub fn contains_color(&self, color: MeteorColor) -> bool {
        self.meteors.iter().any(|m| m.color == color)
    }

    /// Registered meteors in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Meteor> {
        self.meteors.iter()
    }

    /// Mutable iteration in registration order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Meteor> {
        self.meteors.iter_mut()
    }

    /// Removes and returns every meteor for which `reject` returns `true`.
    pub fn drain_where<F>(&mut self, mut reject: F) -> Vec<Meteor>
    where
        F: FnMut(&Meteor) -> bool,
    {
        let (rejected, kept) = std::mem::take(&mut self.meteors)
            .into_iter()
            .partition(|m| reject(m));
        self.meteors = kept;
        rejected
    }

    /// Number of registered meteors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.meteors.len()
    }

    /// `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meteors.is_empty()
    }
}

impl<'a> IntoIterator for &'a MeteorRegistry {
    type Item = &'a Meteor;
    type IntoIter = std::slice::Iter<'a, Meteor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Meteor> for MeteorRegistry {
    fn from_iter<I: IntoIterator<Item = Meteor>>(iter: I) -> Self {
        let mut registry = Self::new();
        for meteor in iter {
            registry.register(meteor);
        }
        registry
    }
}
