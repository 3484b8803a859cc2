//! # pdbx-model - An Order-Preserving PDBx/mmCIF Container Model
//!
//! `pdbx-model` implements the in-memory data model behind PDBx/mmCIF
//! structured-text files: named data blocks holding named category tables,
//! each with an ordered attribute schema and positional rows, plus the exact
//! value-formatting rules the format requires for lossless round-tripping.
//!
//! ## Key Features
//!
//! - **Declaration-order preservation**: containers and categories keep the
//!   order in which entries were first appended, across overwrite, rename,
//!   and remove operations.
//!
//! - **Case-insensitive attribute schema**: attribute lookup ignores case
//!   while storage preserves the caller's spelling; re-appending an existing
//!   attribute re-spells it in place without duplicating the column.
//!
//! - **Exact serialization contract**: [`format::format_value`] reproduces
//!   the PDBx quoting rules (numeric inference, null markers, quote-style
//!   selection, semicolon multi-line blocks) bit-for-bit, so downstream text
//!   emitters can round-trip scientific data files.
//!
//! - **Tolerant of legacy data**: read paths degrade gracefully (empty or
//!   null-padded results), the write path logs and absorbs index errors, and
//!   structural mismatches surface only as diagnostic warnings.
//!
//! ## Quick Start
//!
//! ```rust
//! use pdbx_model::category::DataCategory;
//! use pdbx_model::container::DataContainer;
//! use pdbx_model::value::CifValue;
//!
//! let mut category = DataCategory::new("atom_site");
//! category.append_attribute("id");
//! category.append_attribute("type_symbol");
//! category.append(vec![CifValue::from(1), CifValue::from("N")]);
//! category.append(vec![CifValue::from(2), CifValue::from("C")]);
//!
//! let mut block = DataContainer::new("1ABC");
//! block.append(category);
//!
//! let atom_site = block.get("atom_site").unwrap();
//! assert_eq!(atom_site.row_count(), 2);
//! assert_eq!(atom_site.get_value_formatted(Some("id"), Some(0)).unwrap(), "1");
//! ```
//!
//! ## Data Model
//!
//! | Term | Meaning |
//! |------|---------|
//! | Container | Ordered, named registry of categories (one data block or one dictionary definition scope) |
//! | Category | Named table: ordered attribute schema + row list |
//! | Attribute | Named column within a category |
//! | Null marker | `?` (not reported) or `.` (inapplicable) |
//! | Cursor | Per-category implicit `(row, attribute)` default for accessors |
//!
//! ## Value Formatting
//!
//! [`format::format_value`] classifies and renders a scalar in a fixed
//! precedence order:
//!
//! | Precedence | Input | Output | Kind |
//! |------------|-------|--------|------|
//! | 1 | null | `?` | NullValue |
//! | 2 | integer / `^[0-9]+$` text | digits | Integer |
//! | 3 | float / float-pattern text | numeric text | Float |
//! | 4 | `.` or `?` | unchanged | NullValue |
//! | 5 | empty text | `.` | NullValue |
//! | 6 | no whitespace, no quotes | unquoted (double-quoted if it starts with `_`) | UnquotedString / ItemName |
//! | 7 | whitespace or quotes | quoted or semicolon block | see [`format::QuotingMode`] |
//!
//! ## Architecture
//!
//! - [`name`]: splitting `_category.attribute` data names
//! - [`value`]: the [`value::CifValue`] scalar cell type
//! - [`format`]: the quoting/type-inference algorithm
//! - [`category`]: the [`category::DataCategory`] table and its mutation API
//! - [`container`]: ordered registries ([`container::DataContainer`],
//!   [`container::DefinitionContainer`])

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod category;
pub mod container;
pub mod format;
pub mod name;
pub mod value;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::category::{CategoryError, DataCategory};
    pub use crate::container::{
        ContainerBase, ContainerKind, DataContainer, DefinitionContainer, Named, Verbosity,
    };
    pub use crate::format::{data_kind_of, format_value, DataKind, FormatKind, QuotingMode};
    pub use crate::name::{attribute_part, category_part};
    pub use crate::value::{CifValue, NULL_INAPPLICABLE, NULL_UNKNOWN};
}
