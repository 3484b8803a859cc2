use super::{ContainerBase, ContainerKind};

/// Container for the categories of one `data_` block.
#[derive(Debug, Clone, PartialEq)]
pub struct DataContainer {
    pub(super) base: ContainerBase,
    global: bool,
}

impl DataContainer {
    /// Create an empty data block container.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: ContainerBase::new(name, ContainerKind::Data),
            global: false,
        }
    }

    /// Mark this container as a shared/global scope rather than an ordinary
    /// data block.
    pub fn set_global(&mut self) {
        self.global = true;
    }

    /// Whether this container is a shared/global scope.
    pub fn is_global(&self) -> bool {
        self.global
    }

    /// Apply `f` to the whole block once. Typed replacement for
    /// dictionary-driven data-block methods; no dynamic code evaluation is
    /// involved.
    pub fn apply_block_method<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self),
    {
        f(self);
    }
}
