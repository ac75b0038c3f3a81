//! Markers: named tags attached to a log call independent of its level
//!
//! A marker may reference other markers, so a single tag such as `SECURITY`
//! can be routed by filters that look for either `SECURITY` itself or one of
//! the markers it contains. Markers compare by name.

use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

// Serializes reference changes so the cycle check and the insert are atomic
static GRAPH_LOCK: Mutex<()> = parking_lot::const_mutex(());

struct MarkerInner {
    name: String,
    contained: RwLock<Vec<Marker>>,
}

/// Cheaply cloneable handle to a named marker
#[derive(Clone)]
pub struct Marker {
    inner: Arc<MarkerInner>,
}

impl Marker {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(MarkerInner {
                name: name.into(),
                contained: RwLock::new(Vec::new()),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Add `marker` as a reference.
    ///
    /// Returns false if it was already contained, or if adding it would make
    /// this marker reachable from itself.
    pub fn add(&self, marker: Marker) -> bool {
        let _graph = GRAPH_LOCK.lock();
        if marker == *self || marker.reaches(self) {
            return false;
        }
        let mut contained = self.inner.contained.write();
        if contained.contains(&marker) {
            return false;
        }
        contained.push(marker);
        true
    }

    /// Remove `marker` and return true if it was contained
    pub fn remove(&self, marker: &Marker) -> bool {
        let _graph = GRAPH_LOCK.lock();
        let mut contained = self.inner.contained.write();
        let before = contained.len();
        contained.retain(|m| m != marker);
        contained.len() != before
    }

    /// True if this is `marker` or directly references it
    pub fn is_or_contains(&self, marker: &Marker) -> bool {
        self == marker || self.inner.contained.read().contains(marker)
    }

    /// True if this is named `name` or directly references a marker named `name`
    pub fn is_or_contains_name(&self, name: &str) -> bool {
        self.name() == name || self.inner.contained.read().iter().any(|m| m.name() == name)
    }

    pub fn has_references(&self) -> bool {
        !self.inner.contained.read().is_empty()
    }

    /// Snapshot of the directly referenced markers
    pub fn references(&self) -> Vec<Marker> {
        self.inner.contained.read().clone()
    }

    fn reaches(&self, target: &Marker) -> bool {
        self.inner
            .contained
            .read()
            .iter()
            .any(|m| m == target || m.reaches(target))
    }
}

impl PartialEq for Marker {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner.name == other.inner.name
    }
}

impl Eq for Marker {}

impl Hash for Marker {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.name.hash(state);
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let contained = self.inner.contained.read();
        if contained.is_empty() {
            return f.write_str(self.name());
        }
        write!(f, "{}[", self.name())?;
        for (i, marker) in contained.iter().enumerate() {
            if i != 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", marker)?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Marker")
            .field("name", &self.inner.name)
            .field("references", &self.inner.contained.read().len())
            .finish()
    }
}

/// Get-or-create store of shared markers
#[derive(Default)]
pub struct MarkerRegistry {
    markers: Mutex<HashMap<String, Marker>>,
}

impl MarkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the marker named `name`, creating it on first use
    pub fn get(&self, name: &str) -> Marker {
        self.markers
            .lock()
            .entry(name.to_string())
            .or_insert_with(|| Marker::new(name))
            .clone()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.markers.lock().contains_key(name)
    }

    /// Drop a marker from the registry. Outstanding handles stay valid.
    pub fn detach(&self, name: &str) -> bool {
        self.markers.lock().remove(name).is_some()
    }
}

/// Process-wide marker registry
pub fn markers() -> &'static MarkerRegistry {
    static REGISTRY: OnceLock<MarkerRegistry> = OnceLock::new();
    REGISTRY.get_or_init(MarkerRegistry::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_or_contains() {
        let security = Marker::new("SECURITY");
        let audit = Marker::new("AUDIT");
        assert!(security.is_or_contains(&security));
        assert!(!security.is_or_contains(&audit));

        assert!(security.add(audit.clone()));
        assert!(security.is_or_contains(&audit));
        assert!(security.is_or_contains_name("AUDIT"));
        assert!(!audit.is_or_contains(&security));
    }

    #[test]
    fn test_add_rejects_duplicates_and_cycles() {
        let a = Marker::new("A");
        let b = Marker::new("B");
        assert!(a.add(b.clone()));
        assert!(!a.add(b.clone()));
        assert!(!b.add(a.clone()));
        assert!(!a.add(a.clone()));
    }

    #[test]
    fn test_remove() {
        let a = Marker::new("A");
        let b = Marker::new("B");
        a.add(b.clone());
        assert!(a.remove(&b));
        assert!(!a.remove(&b));
        assert!(!a.has_references());
    }

    #[test]
    fn test_display() {
        let a = Marker::new("A");
        assert_eq!(a.to_string(), "A");
        let b = Marker::new("B");
        b.add(Marker::new("C"));
        a.add(b);
        a.add(Marker::new("D"));
        assert_eq!(a.to_string(), "A[B[C],D]");
    }

    #[test]
    fn test_equality_by_name() {
        assert_eq!(Marker::new("X"), Marker::new("X"));
        assert_ne!(Marker::new("X"), Marker::new("Y"));
    }

    #[test]
    fn test_registry_get_or_create() {
        let registry = MarkerRegistry::new();
        assert!(!registry.exists("NET"));
        let first = registry.get("NET");
        let second = registry.get("NET");
        assert!(Arc::ptr_eq(&first.inner, &second.inner));
        assert!(registry.exists("NET"));
        assert!(registry.detach("NET"));
        assert!(!registry.exists("NET"));
    }
}
