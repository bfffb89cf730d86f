//! Plugin configuration trees.
//!
//! A configuration is a small element tree (name, optional text value,
//! children). Product builds attach one configuration to several plugin
//! executions; [`SharedConfiguration`] is the handle that makes those
//! executions alias the same tree instead of holding copies.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

/// A configuration element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigNode {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ConfigNode>,
}

impl ConfigNode {
    /// Create an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        ConfigNode {
            name: name.into(),
            value: None,
            children: Vec::new(),
        }
    }

    /// Set the text value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Append a child element.
    pub fn with_child(mut self, child: ConfigNode) -> Self {
        self.children.push(child);
        self
    }

    /// First child with the given name.
    pub fn child(&self, name: &str) -> Option<&ConfigNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// First child with the given name, mutably.
    pub fn child_mut(&mut self, name: &str) -> Option<&mut ConfigNode> {
        self.children.iter_mut().find(|c| c.name == name)
    }

    /// Walk down a path of child names.
    pub fn find(&self, path: &[&str]) -> Option<&ConfigNode> {
        path.iter().try_fold(self, |node, name| node.child(name))
    }

    /// Walk down a path of child names, mutably.
    pub fn find_mut(&mut self, path: &[&str]) -> Option<&mut ConfigNode> {
        let mut node = self;
        for name in path {
            node = node.child_mut(name)?;
        }
        Some(node)
    }
}

/// A configuration tree shared between several owners.
///
/// Cloning the handle does not copy the tree: every clone observes writes
/// made through any other clone.
#[derive(Clone, Serialize)]
#[serde(transparent)]
pub struct SharedConfiguration(Arc<RwLock<ConfigNode>>);

impl SharedConfiguration {
    /// Wrap a tree in a new shared handle.
    pub fn new(root: ConfigNode) -> Self {
        SharedConfiguration(Arc::new(RwLock::new(root)))
    }

    /// Borrow the tree for reading.
    pub fn read(&self) -> RwLockReadGuard<'_, ConfigNode> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Borrow the tree for writing.
    pub fn write(&self) -> RwLockWriteGuard<'_, ConfigNode> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Text value at a path below the root.
    pub fn value_at(&self, path: &[&str]) -> Option<String> {
        self.read().find(path).and_then(|n| n.value.clone())
    }

    /// Replace the text value at a path below the root.
    ///
    /// Returns `false` if the path does not exist.
    pub fn set_value_at(&self, path: &[&str], value: impl Into<String>) -> bool {
        match self.write().find_mut(path) {
            Some(node) => {
                node.value = Some(value.into());
                true
            }
            None => false,
        }
    }

    /// Whether two handles refer to the same tree.
    pub fn ptr_eq(&self, other: &SharedConfiguration) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SharedConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedConfiguration").field(&*self.read()).finish()
    }
}
