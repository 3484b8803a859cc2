use super::*;
use crate::value::CifValue;
use pretty_assertions::assert_eq;

fn category(name: &str) -> DataCategory {
    let mut c = DataCategory::new(name);
    c.append_attribute("id");
    c.append(vec![CifValue::from(1)]);
    c
}

#[test]
fn order_preserved_across_rename_and_remove() {
    let mut block = DataContainer::new("1ABC");
    block.append(category("X"));
    block.append(category("Y"));
    block.append(category("Z"));
    assert_eq!(block.object_name_list(), &["X", "Y", "Z"]);

    assert!(block.rename("Y", "W"));
    assert_eq!(block.object_name_list(), &["X", "W", "Z"]);
    // The entry's own stored name was updated too.
    assert_eq!(block.get("W").unwrap().name(), "W");
    assert!(!block.exists("Y"));

    assert!(block.remove("W"));
    assert_eq!(block.object_name_list(), &["X", "Z"]);
    assert!(!block.exists("W"));
}

#[test]
fn rename_or_remove_missing_is_a_no_op() {
    let mut block = DataContainer::new("1ABC");
    block.append(category("X"));
    assert!(!block.rename("nope", "W"));
    assert!(!block.remove("nope"));
    assert_eq!(block.object_name_list(), &["X"]);
}

#[test]
fn append_overwrites_in_place() {
    let mut block = DataContainer::new("1ABC");
    block.append(category("X"));
    block.append(category("Y"));

    let mut replacement = category("X");
    replacement.append(vec![CifValue::from(2)]);
    block.append(replacement);

    // Position preserved, content overwritten.
    assert_eq!(block.object_name_list(), &["X", "Y"]);
    assert_eq!(block.get("X").unwrap().row_count(), 2);
}

#[test]
fn replace_only_touches_existing_names() {
    let mut block = DataContainer::new("1ABC");
    block.append(category("X"));

    // Absent name: no-op, no new key, no order change.
    block.replace(category("Y"));
    assert_eq!(block.object_name_list(), &["X"]);
    assert!(!block.exists("Y"));

    let mut replacement = category("X");
    replacement.append(vec![CifValue::from(2)]);
    block.replace(replacement);
    assert_eq!(block.get("X").unwrap().row_count(), 2);
}

#[test]
fn unnamed_entries_are_ignored() {
    let mut block = DataContainer::new("1ABC");
    block.append(DataCategory::new(""));
    assert!(block.is_empty());
}

#[test]
fn lookup_and_kind() {
    let mut block = DataContainer::new("1ABC");
    block.append(category("X"));
    assert_eq!(block.kind(), ContainerKind::Data);
    assert_eq!(block.len(), 1);
    assert!(block.exists("X"));
    assert!(block.get("missing").is_none());
    block.get_mut("X").unwrap().append(vec![CifValue::from(2)]);
    assert_eq!(block.get("X").unwrap().row_count(), 2);
}

#[test]
fn global_flag() {
    let mut block = DataContainer::new("global");
    assert!(!block.is_global());
    block.set_global();
    assert!(block.is_global());
}

#[test]
fn definition_predicates() {
    let mut def = DefinitionContainer::new("_atom_site.id");
    assert_eq!(def.kind(), ContainerKind::Definition);
    assert!(!def.is_category());
    assert!(!def.is_attribute());

    def.append(category("item"));
    assert!(def.is_attribute());
    assert!(!def.is_category());

    def.append(category("category"));
    assert!(def.is_category());
}

#[test]
fn container_rename_keeps_container_name_independent() {
    let mut block = DataContainer::new("first");
    block.set_name("second");
    assert_eq!(Named::name(&block), "second");
}

#[test]
fn print_it_brief_and_full() {
    let mut block = DataContainer::new("1ABC");
    block.append(category("X"));

    let mut out = Vec::new();
    block.print_it(&mut out, Verbosity::Brief).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("+ data container:"));
    assert!(text.contains("Data category: X"));
    assert!(text.contains("Row value list length: 1"));

    let mut out = Vec::new();
    block.print_it(&mut out, Verbosity::Full).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Value list length: 1"));
}

#[test]
fn definition_print_it_reports_type() {
    let mut def = DefinitionContainer::new("defn");
    def.append(category("item"));
    let mut out = Vec::new();
    def.print_it(&mut out, Verbosity::Brief).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Definition container:"));
    assert!(text.contains("Definition type: item"));
    assert!(text.contains("Definition category: item"));
}

#[test]
fn apply_block_method_runs_once() {
    let mut block = DataContainer::new("1ABC");
    block.append(category("X"));
    block.apply_block_method(|b| {
        b.append(category("Y"));
    });
    assert_eq!(block.object_name_list(), &["X", "Y"]);
}
