//! # Data Categories
//!
//! A [`DataCategory`] is one named table inside a container: an ordered
//! attribute schema plus a list of positional rows. Attribute lookup is
//! case-insensitive while storage preserves the caller's spelling, and rows
//! are allowed to be shorter than the schema - read paths pad with the `?`
//! null marker instead of failing.
//!
//! ## Error policy
//!
//! The read/write asymmetry is deliberate and mirrors decades of tolerant
//! handling of legacy PDBx data:
//!
//! - index-style reads ([`DataCategory::get_row`],
//!   [`DataCategory::get_full_row`]) degrade to empty/padded results;
//! - name/cursor reads ([`DataCategory::get_value`],
//!   [`DataCategory::get_value_formatted`]) return a typed
//!   [`CategoryError`];
//! - the write path ([`DataCategory::set_value`]) logs failures through the
//!   `log` crate and returns silently, leaving the category in whatever
//!   partially-extended state resulted;
//! - rename/remove report plain `bool` so housekeeping loops stay free of
//!   error plumbing.

use std::collections::HashMap;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::format::{data_kind_of, format_value, DataKind, FormatKind, QuotingMode};
use crate::value::CifValue;

mod error;


pub use error::CategoryError;

/// A named table: ordered attribute schema + row list.
///
/// Rows are plain value vectors aligned positionally to the schema, with no
/// back-reference to the category. The category logically owns its row
/// storage once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct DataCategory {
    name: String,
    attribute_names: Vec<String>,
    rows: Vec<Vec<CifValue>>,
    /// lowercased name -> canonical (case-preserving) name
    catalog: HashMap<String, String>,
    current_row_index: usize,
    current_attribute: Option<String>,
    quoting: QuotingMode,
}

/// Serialized shape of a category (schema + rows, no cursor state).
#[derive(Serialize, Deserialize)]
struct CategorySnapshot {
    name: String,
    attributes: Vec<String>,
    rows: Vec<Vec<CifValue>>,
}

#[derive(Serialize)]
struct CategorySnapshotRef<'a> {
    name: &'a str,
    attributes: &'a [String],
    rows: &'a [Vec<CifValue>],
}

impl DataCategory {
    /// Create an empty category.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_data(name, Vec::new(), Vec::new())
    }

    /// Create a category from an attribute list and row list.
    ///
    /// The category takes ownership of both; row/schema alignment is not
    /// checked here (short rows surface later as dump warnings and padded
    /// reads, never as construction failures).
    pub fn with_data(
        name: impl Into<String>,
        attribute_names: Vec<String>,
        rows: Vec<Vec<CifValue>>,
    ) -> Self {
        let mut category = Self {
            name: name.into(),
            attribute_names,
            rows,
            catalog: HashMap::new(),
            current_row_index: 0,
            current_attribute: None,
            quoting: QuotingMode::default(),
        };
        category.rebuild_catalog();
        category
    }

    fn rebuild_catalog(&mut self) {
        self.catalog.clear();
        for attribute in &self.attribute_names {
            self.catalog
                .insert(attribute.to_lowercase(), attribute.clone());
        }
    }

    /// Category name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the category.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Quote-style policy used by the formatted accessors.
    pub fn quoting_mode(&self) -> QuotingMode {
        self.quoting
    }

    /// Switch the quote-style policy (see [`QuotingMode`]).
    pub fn set_quoting_mode(&mut self, mode: QuotingMode) {
        self.quoting = mode;
    }

    // ---- bulk accessors -------------------------------------------------

    /// All rows, in order.
    pub fn row_list(&self) -> &[Vec<CifValue>] {
        &self.rows
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The ordered attribute schema, with original casing.
    pub fn attribute_list(&self) -> &[String] {
        &self.attribute_names
    }

    /// Number of attributes in the schema.
    pub fn attribute_count(&self) -> usize {
        self.attribute_names.len()
    }

    /// `(attribute, position)` pairs in schema order.
    pub fn attribute_list_with_order(&self) -> Vec<(&str, usize)> {
        self.attribute_names
            .iter()
            .enumerate()
            .map(|(i, a)| (a.as_str(), i))
            .collect()
    }

    /// Position of an attribute in the schema (exact-case match).
    pub fn attribute_index(&self, attribute_name: &str) -> Option<usize> {
        self.attribute_names.iter().position(|a| a == attribute_name)
    }

    /// Whether the schema contains an attribute (exact-case match).
    pub fn has_attribute(&self, attribute_name: &str) -> bool {
        self.attribute_index(attribute_name).is_some()
    }

    /// Fully qualified `_category.attribute` item names, in schema order.
    pub fn item_name_list(&self) -> Vec<String> {
        self.attribute_names
            .iter()
            .map(|a| format!("_{}.{}", self.name, a))
            .collect()
    }

    /// The cursor attribute, if one has been established.
    pub fn current_attribute(&self) -> Option<&str> {
        self.current_attribute.as_deref()
    }

    /// The cursor row index.
    pub fn row_index(&self) -> usize {
        self.current_row_index
    }

    // ---- wholesale replacement ------------------------------------------

    /// Replace the row storage outright.
    pub fn set_row_list(&mut self, rows: Vec<Vec<CifValue>>) {
        self.rows = rows;
    }

    /// Replace the attribute schema outright, rebuilding the lookup catalog.
    pub fn set_attribute_name_list(&mut self, attribute_names: Vec<String>) {
        self.attribute_names = attribute_names;
        self.rebuild_catalog();
    }

    // ---- row operations -------------------------------------------------

    /// Append a row. No length check against the schema.
    pub fn append(&mut self, row: Vec<CifValue>) {
        self.rows.push(row);
    }

    /// Row at `index`, or an empty slice if out of range. Never fails.
    pub fn get_row(&self, index: usize) -> &[CifValue] {
        self.rows.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Row at `index`, padded in place on the right with `?` markers to the
    /// schema length. An invalid index yields a fresh all-`?` row.
    pub fn get_full_row(&mut self, index: usize) -> Vec<CifValue> {
        let width = self.attribute_names.len();
        match self.rows.get_mut(index) {
            Some(row) => {
                while row.len() < width {
                    row.push(CifValue::null_marker());
                }
                row.clone()
            }
            None => vec![CifValue::null_marker(); width],
        }
    }

    /// Remove the row at `index`, clamping the cursor back into bounds.
    /// Returns `false` without mutation if `index` is out of range.
    pub fn remove_row(&mut self, index: usize) -> bool {
        if index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        if self.current_row_index >= self.rows.len() {
            self.current_row_index = self.rows.len().saturating_sub(1);
        }
        true
    }

    // ---- schema operations ----------------------------------------------

    /// Add an attribute to the schema.
    ///
    /// Deduplication is case-insensitive: if a same-name-different-case
    /// attribute already exists it is re-spelled in place at its original
    /// position. Existing rows are never touched; see
    /// [`DataCategory::append_attribute_extend_rows`] for the row-extending
    /// variant.
    pub fn append_attribute(&mut self, attribute_name: &str) {
        self.append_attribute_inner(attribute_name, false);
    }

    /// Add an attribute to the schema, appending a `?` marker to every
    /// existing row when the attribute is genuinely new, so that rows stay
    /// aligned with the longer schema.
    pub fn append_attribute_extend_rows(&mut self, attribute_name: &str) {
        self.append_attribute_inner(attribute_name, true);
    }

    fn append_attribute_inner(&mut self, attribute_name: &str, extend_rows: bool) {
        let lowercase = attribute_name.to_lowercase();
        if let Some(canonical) = self.catalog.get(&lowercase).cloned() {
            if let Some(i) = self.attribute_index(&canonical) {
                self.attribute_names[i] = attribute_name.to_string();
            }
            self.catalog.insert(lowercase, attribute_name.to_string());
            log::debug!(
                "category {}: re-spelled existing attribute as {}",
                self.name,
                attribute_name
            );
        } else {
            self.attribute_names.push(attribute_name.to_string());
            self.catalog.insert(lowercase, attribute_name.to_string());
            if extend_rows {
                for row in &mut self.rows {
                    row.push(CifValue::null_marker());
                }
            }
        }
    }

    /// Rename an attribute (exact-case `cur`). Returns `false` and leaves
    /// the schema untouched if `cur` is absent.
    pub fn rename_attribute(&mut self, cur_attribute_name: &str, new_attribute_name: &str) -> bool {
        let Some(i) = self.attribute_index(cur_attribute_name) else {
            return false;
        };
        self.attribute_names[i] = new_attribute_name.to_string();
        self.catalog.remove(&cur_attribute_name.to_lowercase());
        self.catalog.insert(
            new_attribute_name.to_lowercase(),
            new_attribute_name.to_string(),
        );
        true
    }

    // ---- scalar access --------------------------------------------------

    fn resolve_attribute<'a>(
        &'a self,
        attribute_name: Option<&'a str>,
    ) -> Result<&'a str, CategoryError> {
        attribute_name
            .or(self.current_attribute.as_deref())
            .ok_or_else(|| CategoryError::CursorUnset {
                category: self.name.clone(),
            })
    }

    fn cell_position(
        &self,
        attribute_name: Option<&str>,
        row_index: Option<usize>,
    ) -> Result<(usize, usize), CategoryError> {
        let attribute = self.resolve_attribute(attribute_name)?;
        let column =
            self.attribute_index(attribute)
                .ok_or_else(|| CategoryError::AttributeNotFound {
                    category: self.name.clone(),
                    attribute: attribute.to_string(),
                })?;
        let row = row_index.unwrap_or(self.current_row_index);
        if row >= self.rows.len() {
            return Err(CategoryError::RowOutOfRange {
                category: self.name.clone(),
                row,
                rows: self.rows.len(),
            });
        }
        Ok((row, column))
    }

    /// Value at `(row, attribute)`, defaulting either coordinate to the
    /// cursor when omitted.
    ///
    /// Unlike the index-style reads this signals a typed error for a missing
    /// attribute, an out-of-range row, a short row, or an unset cursor.
    pub fn get_value(
        &self,
        attribute_name: Option<&str>,
        row_index: Option<usize>,
    ) -> Result<&CifValue, CategoryError> {
        let (row, column) = self.cell_position(attribute_name, row_index)?;
        self.rows[row]
            .get(column)
            .ok_or_else(|| CategoryError::ColumnOutOfRange {
                category: self.name.clone(),
                column,
                columns: self.rows[row].len(),
            })
    }

    /// Write a value at `(row, attribute)`, defaulting to the cursor.
    ///
    /// Best effort by design: the row list is auto-extended with empty rows
    /// up to the target index and a too-short target row is null-padded, but
    /// an unresolvable attribute is logged (with category, attribute, index
    /// and value context) and swallowed rather than propagated.
    pub fn set_value(
        &mut self,
        value: CifValue,
        attribute_name: Option<&str>,
        row_index: Option<usize>,
    ) {
        let attribute = match attribute_name.or(self.current_attribute.as_deref()) {
            Some(a) => a.to_string(),
            None => {
                log::warn!(
                    "DataCategory(set_value) no cursor attribute: category {} value {:?}",
                    self.name,
                    value
                );
                return;
            }
        };
        let row = row_index.unwrap_or(self.current_row_index);
        let Some(column) = self.attribute_index(&attribute) else {
            log::warn!(
                "DataCategory(set_value) unknown attribute: category {} attribute {} index {} value {:?}",
                self.name,
                attribute,
                row,
                value
            );
            return;
        };
        let width = self.attribute_names.len();
        while self.rows.len() <= row {
            self.rows.push(vec![CifValue::Null; width]);
        }
        let target = &mut self.rows[row];
        if target.len() <= column {
            target.resize(column + 1, CifValue::Null);
        }
        target[column] = value;
    }

    /// Replace every cell in `attribute_name`'s column exactly equal to
    /// `old_value`. Returns the number of replacements; 0 if the attribute
    /// is absent.
    pub fn replace_value(
        &mut self,
        old_value: &CifValue,
        new_value: &CifValue,
        attribute_name: &str,
    ) -> usize {
        let Some(column) = self.attribute_index(attribute_name) else {
            return 0;
        };
        let mut replaced = 0;
        for row in &mut self.rows {
            if let Some(cell) = row.get_mut(column) {
                if cell == old_value {
                    *cell = new_value.clone();
                    replaced += 1;
                }
            }
        }
        replaced
    }

    /// Substring-replace within every text cell of `attribute_name`'s
    /// column. Returns whether any cell changed; `false` if the attribute is
    /// absent. Non-text cells are left alone.
    pub fn replace_substring(
        &mut self,
        old_value: &str,
        new_value: &str,
        attribute_name: &str,
    ) -> bool {
        let Some(column) = self.attribute_index(attribute_name) else {
            return false;
        };
        let mut changed = false;
        for row in &mut self.rows {
            if let Some(CifValue::Text(text)) = row.get_mut(column) {
                if text.contains(old_value) {
                    *text = text.replace(old_value, new_value);
                    changed = true;
                }
            }
        }
        changed
    }

    // ---- formatted access -----------------------------------------------

    /// Serialized text form of the value at `(row, attribute)`, with the
    /// same cursor defaulting and error behavior as
    /// [`DataCategory::get_value`].
    pub fn get_value_formatted(
        &self,
        attribute_name: Option<&str>,
        row_index: Option<usize>,
    ) -> Result<String, CategoryError> {
        let value = self.get_value(attribute_name, row_index)?;
        Ok(format_value(value, self.quoting).0)
    }

    /// Serialized text form of the value at positional `(attribute_index,
    /// row_index)`.
    pub fn get_value_formatted_by_index(
        &self,
        attribute_index: usize,
        row_index: usize,
    ) -> Result<String, CategoryError> {
        let row = self
            .rows
            .get(row_index)
            .ok_or_else(|| CategoryError::RowOutOfRange {
                category: self.name.clone(),
                row: row_index,
                rows: self.rows.len(),
            })?;
        let value = row
            .get(attribute_index)
            .ok_or_else(|| CategoryError::ColumnOutOfRange {
                category: self.name.clone(),
                column: attribute_index,
                columns: row.len(),
            })?;
        Ok(format_value(value, self.quoting).0)
    }

    /// Per-column widest detected kind over the rows (sampled with `step`,
    /// clamped to at least 1), and the coarse format category each maps to.
    ///
    /// Missing cells in short rows count as null; the fold never fails.
    pub fn get_format_type_list(&self, step: usize) -> (Vec<FormatKind>, Vec<DataKind>) {
        let step = step.max(1);
        let mut kinds = vec![DataKind::NullValue; self.attribute_names.len()];
        for row in self.rows.iter().step_by(step) {
            for (column, widest) in kinds.iter_mut().enumerate() {
                let kind = row
                    .get(column)
                    .map(|v| data_kind_of(v, self.quoting))
                    .unwrap_or_default();
                *widest = (*widest).max(kind);
            }
        }
        let formats = kinds.iter().map(|k| k.format_kind()).collect();
        (formats, kinds)
    }

    /// Per-column maximum plain-text width (in characters) over the rows,
    /// sampled with `step`. Missing cells count as zero width.
    pub fn get_attribute_value_max_length_list(&self, step: usize) -> Vec<usize> {
        let step = step.max(1);
        let mut widths = vec![0usize; self.attribute_names.len()];
        for row in self.rows.iter().step_by(step) {
            for (column, width) in widths.iter_mut().enumerate() {
                if let Some(value) = row.get(column) {
                    *width = (*width).max(value.to_string().chars().count());
                }
            }
        }
        widths
    }

    // ---- typed method application ---------------------------------------

    /// Apply `f` to the `attribute_name` cell of every row.
    ///
    /// The attribute is appended to the schema first (case-insensitive
    /// dedup), a single empty row is created if the category has none, and
    /// short rows are null-padded so the target cell always exists. The
    /// cursor tracks the visited rows and is left on the last one.
    ///
    /// This is the typed replacement for dictionary-driven per-attribute
    /// methods; no dynamic code evaluation is involved.
    pub fn apply_attribute_method<F>(&mut self, attribute_name: &str, mut f: F)
    where
        F: FnMut(&mut CifValue),
    {
        self.current_attribute = Some(attribute_name.to_string());
        self.append_attribute(attribute_name);
        let Some(column) = self.attribute_index(attribute_name) else {
            // append_attribute just inserted this exact spelling
            return;
        };
        if self.rows.is_empty() {
            self.rows.push(vec![CifValue::Null; self.attribute_names.len()]);
        }
        for i in 0..self.rows.len() {
            self.current_row_index = i;
            let row = &mut self.rows[i];
            if row.len() <= column {
                row.resize(column + 1, CifValue::Null);
            }
            f(&mut row[column]);
        }
    }

    /// Reset the cursor row and apply `f` to the whole category once.
    pub fn apply_category_method<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.current_row_index = 0;
        f(self);
    }

    // ---- diagnostics ----------------------------------------------------

    /// Brief human-readable dump: schema, row count, and the first two rows.
    ///
    /// Rows whose length disagrees with the schema are reported as a
    /// `+WARNING` line instead of their values. Not a stable wire format.
    pub fn print_it(&self, fh: &mut impl Write) -> io::Result<()> {
        writeln!(fh, "--------------------------------------------")?;
        writeln!(
            fh,
            "  Category: {} attribute list length: {}",
            self.name,
            self.attribute_names.len()
        )?;
        for attribute in &self.attribute_names {
            writeln!(fh, "  Category: {} attribute: {}", self.name, attribute)?;
        }
        writeln!(fh, "  Row value list length: {}", self.rows.len())?;
        for row in self.rows.iter().take(2) {
            if row.len() == self.attribute_names.len() {
                for (attribute, value) in self.attribute_names.iter().zip(row) {
                    let text: String = value.to_string().chars().take(30).collect();
                    writeln!(fh, "        {attribute:<30}: {text} ...")?;
                }
            } else {
                writeln!(
                    fh,
                    "+WARNING - {} data length {} attribute name length {} mismatched",
                    self.name,
                    row.len(),
                    self.attribute_names.len()
                )?;
            }
        }
        Ok(())
    }

    /// Full human-readable dump: schema and every row's values.
    pub fn dump_it(&self, fh: &mut impl Write) -> io::Result<()> {
        writeln!(fh, "--------------------------------------------")?;
        writeln!(
            fh,
            "  Category: {} attribute list length: {}",
            self.name,
            self.attribute_names.len()
        )?;
        for attribute in &self.attribute_names {
            writeln!(fh, "  Category: {} attribute: {}", self.name, attribute)?;
        }
        writeln!(fh, "  Value list length: {}", self.rows.len())?;
        for row in &self.rows {
            for (attribute, value) in self.attribute_names.iter().zip(row) {
                writeln!(fh, "        {attribute:<30}: {value}")?;
            }
        }
        Ok(())
    }

    // ---- JSON snapshots -------------------------------------------------

    /// Serialize name, schema, and rows to JSON (cursor state excluded).
    pub fn to_json(&self) -> Result<String, CategoryError> {
        let snapshot = CategorySnapshotRef {
            name: &self.name,
            attributes: &self.attribute_names,
            rows: &self.rows,
        };
        Ok(serde_json::to_string(&snapshot)?)
    }

    /// Rebuild a category from a JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self, CategoryError> {
        let snapshot: CategorySnapshot = serde_json::from_str(json)?;
        Ok(Self::with_data(
            snapshot.name,
            snapshot.attributes,
            snapshot.rows,
        ))
    }
}
