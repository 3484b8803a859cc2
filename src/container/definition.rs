use std::io::{self, Write};

use super::{ContainerBase, ContainerKind, Verbosity};

/// Sub-entry name marking a table-level (category) definition.
const CATEGORY_ENTRY: &str = "category";

/// Sub-entry name marking a column-level (item) definition.
const ITEM_ENTRY: &str = "item";

/// Container for the categories of one dictionary definition section.
#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionContainer {
    pub(super) base: ContainerBase,
}

impl DefinitionContainer {
    /// Create an empty definition container.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: ContainerBase::new(name, ContainerKind::Definition),
        }
    }

    /// Whether this definition describes a table-level schema element
    /// (it holds a `category` sub-entry).
    pub fn is_category(&self) -> bool {
        self.base.exists(CATEGORY_ENTRY)
    }

    /// Whether this definition describes a column-level schema element
    /// (it holds an `item` sub-entry).
    pub fn is_attribute(&self) -> bool {
        self.base.exists(ITEM_ENTRY)
    }

    /// Human-readable dump including the definition type line.
    pub fn print_it(&self, fh: &mut impl Write, verbosity: Verbosity) -> io::Result<()> {
        writeln!(
            fh,
            "Definition container: {:>30} contains {:4} categories",
            self.base.name(),
            self.base.object_name_list().len()
        )?;
        let definition_type = if self.is_category() {
            "category"
        } else if self.is_attribute() {
            "item"
        } else {
            "undefined"
        };
        writeln!(fh, "Definition type: {definition_type}")?;
        for name in self.base.object_name_list() {
            writeln!(fh, "--------------------------------------------")?;
            writeln!(fh, "Definition category: {name}")?;
            if let Some(category) = self.base.get(name) {
                match verbosity {
                    Verbosity::Brief => category.print_it(fh)?,
                    Verbosity::Full => category.dump_it(fh)?,
                }
            }
        }
        Ok(())
    }
}
