//! # Containers
//!
//! A container is an ordered, named registry of [`DataCategory`] tables.
//! PDBx data files map each `data_` block to a [`DataContainer`]; PDBx
//! dictionaries map each definition save-frame to a
//! [`DefinitionContainer`]. Both share [`ContainerBase`], which preserves
//! first-insertion order across overwrite, rename, and remove.
//!
//! Entries are keyed through the [`Named`] capability trait rather than by
//! structural typing, so anything exposing a name can be registered by the
//! same machinery.

use std::collections::HashMap;
use std::io::{self, Write};
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::category::DataCategory;

mod data;
mod definition;

#[cfg(test)]
mod tests;

pub use data::DataContainer;
pub use definition::DefinitionContainer;

/// Capability of carrying a registry name.
///
/// Implemented by every entry variant (categories and the container
/// specializations themselves). An empty name marks the object as unnamed;
/// unnamed objects are ignored by [`ContainerBase::append`] and
/// [`ContainerBase::replace`].
pub trait Named {
    /// The registry name of this object.
    fn name(&self) -> &str;
}

impl Named for DataCategory {
    fn name(&self) -> &str {
        self.name()
    }
}

/// Which flavor of scope a container represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerKind {
    /// A `data_` block of a PDBx data file.
    Data,
    /// A definition section of a PDBx dictionary.
    Definition,
}

/// Verbosity of the diagnostic dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Schema plus the first rows of each category.
    #[default]
    Brief,
    /// Every row of every category.
    Full,
}

/// Ordered registry of named categories.
///
/// The key list is always exactly the catalog's key set, in first-insertion
/// order; rename keeps the renamed entry's position, and remove deletes from
/// both structures atomically. The registry exclusively owns its entries.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerBase {
    name: String,
    kind: ContainerKind,
    object_order: Vec<String>,
    catalog: HashMap<String, DataCategory>,
}

impl ContainerBase {
    /// Create an empty registry.
    pub fn new(name: impl Into<String>, kind: ContainerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            object_order: Vec::new(),
            catalog: HashMap::new(),
        }
    }

    /// Container name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the container itself (entries are unaffected).
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Container kind.
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// Whether an entry of this name exists.
    pub fn exists(&self, name: &str) -> bool {
        self.catalog.contains_key(name)
    }

    /// Fetch an entry by name.
    pub fn get(&self, name: &str) -> Option<&DataCategory> {
        self.catalog.get(name)
    }

    /// Fetch an entry mutably by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut DataCategory> {
        self.catalog.get_mut(name)
    }

    /// Entry names in first-insertion order.
    pub fn object_name_list(&self) -> &[String] {
        &self.object_order
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.object_order.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.object_order.is_empty()
    }

    /// Add an entry, keyed by its [`Named`] name.
    ///
    /// A new name is pushed to the end of the order list; an existing name
    /// keeps its position and has its content overwritten. Unnamed (empty
    /// name) objects are ignored.
    pub fn append(&mut self, obj: DataCategory) {
        let name = Named::name(&obj).to_string();
        if name.is_empty() {
            return;
        }
        if !self.catalog.contains_key(&name) {
            self.object_order.push(name.clone());
        }
        self.catalog.insert(name, obj);
    }

    /// Overwrite an entry only if one of the same name already exists.
    /// Never changes order and never introduces new keys.
    pub fn replace(&mut self, obj: DataCategory) {
        let name = Named::name(&obj).to_string();
        if !name.is_empty() && self.catalog.contains_key(&name) {
            self.catalog.insert(name, obj);
        }
    }

    /// Atomically rename an entry, keeping its position and updating the
    /// entry's own stored name. Returns `false` and leaves the registry
    /// untouched if `cur_name` is absent.
    pub fn rename(&mut self, cur_name: &str, new_name: &str) -> bool {
        let Some(i) = self.object_order.iter().position(|n| n == cur_name) else {
            return false;
        };
        let Some(mut obj) = self.catalog.remove(cur_name) else {
            return false;
        };
        self.object_order[i] = new_name.to_string();
        obj.set_name(new_name);
        self.catalog.insert(new_name.to_string(), obj);
        true
    }

    /// Atomically remove an entry from both the order list and the catalog.
    /// Returns `false` if `cur_name` is absent.
    pub fn remove(&mut self, cur_name: &str) -> bool {
        if self.catalog.remove(cur_name).is_none() {
            return false;
        }
        self.object_order.retain(|n| n != cur_name);
        true
    }

    /// Human-readable dump of the container and its categories. Not a
    /// stable wire format.
    pub fn print_it(&self, fh: &mut impl Write, verbosity: Verbosity) -> io::Result<()> {
        let kind = match self.kind {
            ContainerKind::Data => "data",
            ContainerKind::Definition => "definition",
        };
        writeln!(
            fh,
            "+ {kind} container: {:>30} contains {:4} categories",
            self.name,
            self.object_order.len()
        )?;
        for name in &self.object_order {
            writeln!(fh, "--------------------------------------------")?;
            writeln!(fh, "Data category: {name}")?;
            if let Some(category) = self.catalog.get(name) {
                match verbosity {
                    Verbosity::Brief => category.print_it(fh)?,
                    Verbosity::Full => category.dump_it(fh)?,
                }
            }
        }
        Ok(())
    }
}

/// Shared dereference target for the container specializations, so the base
/// registry API is available on both without delegation boilerplate.
macro_rules! impl_container_deref {
    ($ty:ty) => {
        impl Deref for $ty {
            type Target = ContainerBase;

            fn deref(&self) -> &ContainerBase {
                &self.base
            }
        }

        impl DerefMut for $ty {
            fn deref_mut(&mut self) -> &mut ContainerBase {
                &mut self.base
            }
        }

        impl Named for $ty {
            fn name(&self) -> &str {
                self.base.name()
            }
        }
    };
}

impl_container_deref!(DataContainer);
impl_container_deref!(DefinitionContainer);
