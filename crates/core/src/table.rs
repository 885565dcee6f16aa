//! Descriptor table
//!
//! Wraps the compiled-in descriptor slice. Single-valued descriptors come
//! first, followed by group parent descriptors; the boundary is computed once
//! at construction.

use crate::descriptor::Descriptor;

/// Immutable, ordered descriptor table
pub struct ConfigTable<S: 'static> {
    descriptors: &'static [Descriptor<S>],
    singles: usize,
}

impl<S: 'static> ConfigTable<S> {
    /// Wrap a descriptor slice
    ///
    /// Group parent descriptors must trail every single-valued descriptor;
    /// the first group parent marks the end of the single range.
    pub fn new(descriptors: &'static [Descriptor<S>]) -> Self {
        let singles = descriptors
            .iter()
            .position(Descriptor::is_group)
            .unwrap_or(descriptors.len());
        Self {
            descriptors,
            singles,
        }
    }

    /// Total descriptor count (the gatekeeper bound)
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// True if the table holds no descriptors
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Number of single-valued descriptors
    pub fn single_count(&self) -> usize {
        self.singles
    }

    /// True if `index` addresses a single-valued descriptor
    pub fn is_single(&self, index: usize) -> bool {
        index < self.singles
    }

    /// Descriptor at `index`
    pub fn get(&self, index: usize) -> Option<&'static Descriptor<S>> {
        self.descriptors.get(index)
    }

    /// Iterate over all descriptors in index order
    pub fn iter(&self) -> impl Iterator<Item = &'static Descriptor<S>> {
        self.descriptors.iter()
    }

    /// Iterate over single-valued descriptors with their indices
    pub fn singles(&self) -> impl Iterator<Item = (usize, &'static Descriptor<S>)> {
        self.descriptors[..self.singles].iter().enumerate()
    }
}
