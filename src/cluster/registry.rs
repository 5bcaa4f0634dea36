//! Object-to-cluster lookup used while merging.
//!
//! Every object identifier maps to the handle of the cluster that currently
//! holds it as a leaf. The registry never owns clusters; the engine keeps
//! them in slots addressed by [`ClusterHandle`].

use std::collections::hash_map::{Entry, HashMap};

use crate::error::{Error, Result};

/// Slot of a cluster in the engine's working set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClusterHandle(pub(crate) usize);

/// Map from object identifier to the cluster that contains it.
#[derive(Debug, Default)]
pub struct ClusterRegistry {
    owners: HashMap<String, ClusterHandle>,
}

impl ClusterRegistry {
    /// Create a registry sized for `n` objects.
    pub fn with_capacity(n: usize) -> Result<Self> {
        let mut owners = HashMap::new();
        owners
            .try_reserve(n)
            .map_err(|_| Error::OutOfMemory { what: "cluster registry" })?;
        Ok(Self { owners })
    }

    /// Record that `name` lives in `cluster`. Each name registers once.
    pub fn register(&mut self, name: &str, cluster: ClusterHandle) -> Result<()> {
        match self.owners.entry(name.to_owned()) {
            Entry::Occupied(_) => Err(Error::DuplicateObject(name.to_owned())),
            Entry::Vacant(slot) => {
                slot.insert(cluster);
                Ok(())
            }
        }
    }

    /// Move an already registered `name` to `cluster`.
    pub fn repoint(&mut self, name: &str, cluster: ClusterHandle) -> Result<()> {
        let owner = self
            .owners
            .get_mut(name)
            .ok_or_else(|| Error::invalid_op("repoint", "object is not registered"))?;
        *owner = cluster;
        Ok(())
    }

    /// Cluster currently holding `name`.
    pub fn lookup(&self, name: &str) -> Option<ClusterHandle> {
        self.owners.get(name).copied()
    }

    /// True if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.owners.contains_key(name)
    }

    /// Number of registered objects.
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Number of distinct clusters referenced.
    pub fn n_clusters(&self) -> usize {
        let mut handles: Vec<_> = self.owners.values().copied().collect();
        handles.sort_unstable();
        handles.dedup();
        handles.len()
    }

    /// All `(object, cluster)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ClusterHandle)> + '_ {
        self.owners.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut reg = ClusterRegistry::with_capacity(2).unwrap();
        reg.register("a", ClusterHandle(0)).unwrap();
        reg.register("b", ClusterHandle(1)).unwrap();

        assert_eq!(reg.len(), 2);
        assert_eq!(reg.lookup("a"), Some(ClusterHandle(0)));
        assert_eq!(reg.lookup("missing"), None);
        assert!(reg.contains("b"));
        assert!(!reg.contains("B"));
        assert_eq!(reg.n_clusters(), 2);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut reg = ClusterRegistry::default();
        reg.register("a", ClusterHandle(0)).unwrap();
        let err = reg.register("a", ClusterHandle(1)).unwrap_err();
        assert!(matches!(err, Error::DuplicateObject(name) if name == "a"));
        assert_eq!(reg.lookup("a"), Some(ClusterHandle(0)));
    }

    #[test]
    fn test_repoint() {
        let mut reg = ClusterRegistry::default();
        reg.register("a", ClusterHandle(0)).unwrap();
        reg.register("b", ClusterHandle(1)).unwrap();
        reg.repoint("b", ClusterHandle(0)).unwrap();

        assert_eq!(reg.lookup("b"), Some(ClusterHandle(0)));
        assert_eq!(reg.n_clusters(), 1);
        assert!(reg.repoint("c", ClusterHandle(0)).is_err());

        let mut pairs: Vec<_> = reg.iter().collect();
        pairs.sort();
        assert_eq!(pairs, vec![("a", ClusterHandle(0)), ("b", ClusterHandle(0))]);
    }
}
