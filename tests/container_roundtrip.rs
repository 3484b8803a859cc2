//! Integration tests for pdbx-model
//!
//! These tests drive the public API end to end: build a data block the way a
//! parser or topology bridge would, mutate it, and format it back out.

use pdbx_model::prelude::*;

/// Build an `atom_site`-shaped category the way a file parser would.
fn atom_site() -> DataCategory {
    let mut category = DataCategory::new("atom_site");
    for attribute in ["group_PDB", "id", "type_symbol", "Cartn_x", "pdbx_formal_charge"] {
        category.append_attribute(attribute);
    }
    category.append(vec![
        CifValue::from("ATOM"),
        CifValue::from("1"),
        CifValue::from("N"),
        CifValue::from("11.104"),
        CifValue::from("?"),
    ]);
    category.append(vec![
        CifValue::from("ATOM"),
        CifValue::from("2"),
        CifValue::from("C"),
        CifValue::from("-12.50"),
        CifValue::from("?"),
    ]);
    category
}

#[test]
fn build_mutate_format_cycle() {
    let mut block = DataContainer::new("1ABC");
    block.append(atom_site());

    let mut entity = DataCategory::new("entity");
    entity.append_attribute("id");
    entity.append_attribute("pdbx_description");
    entity.append(vec![
        CifValue::from(1),
        CifValue::from("T4 lysozyme, C-terminal 'core' fragment"),
    ]);
    block.append(entity);

    assert_eq!(block.object_name_list(), &["atom_site", "entity"]);

    // Addressing through split data names, as a parser does.
    let item = "_atom_site.type_symbol";
    let category = block.get(category_part(item)).expect("category present");
    let attribute = attribute_part(item).expect("attribute present");
    assert_eq!(
        category.get_value(Some(attribute), Some(1)).unwrap(),
        &CifValue::from("C")
    );

    // Formatting for text emission: numbers bare, markers idempotent,
    // embedded single quotes force double quoting.
    let atom_site = block.get("atom_site").unwrap();
    assert_eq!(atom_site.get_value_formatted(Some("id"), Some(0)).unwrap(), "1");
    assert_eq!(
        atom_site.get_value_formatted(Some("Cartn_x"), Some(1)).unwrap(),
        "-12.50"
    );
    assert_eq!(
        atom_site
            .get_value_formatted(Some("pdbx_formal_charge"), Some(0))
            .unwrap(),
        "?"
    );
    let entity = block.get("entity").unwrap();
    assert_eq!(
        entity
            .get_value_formatted(Some("pdbx_description"), Some(0))
            .unwrap(),
        "\"T4 lysozyme, C-terminal 'core' fragment\""
    );

    // Column type inference drives loop emission decisions downstream.
    let (formats, kinds) = block.get("atom_site").unwrap().get_format_type_list(1);
    assert_eq!(kinds[1], DataKind::Integer);
    assert_eq!(kinds[3], DataKind::Float);
    assert_eq!(formats[0], FormatKind::UnquotedString);
    assert_eq!(formats[4], FormatKind::NullValue);
}

#[test]
fn schema_evolution_keeps_rows_aligned() {
    let mut block = DataContainer::new("1ABC");
    block.append(atom_site());

    let category = block.get_mut("atom_site").unwrap();
    category.append_attribute_extend_rows("occupancy");
    assert_eq!(category.attribute_count(), 6);
    for i in 0..category.row_count() {
        assert_eq!(category.get_row(i).len(), 6);
    }
    category.set_value(CifValue::from("1.00"), Some("occupancy"), Some(0));
    assert_eq!(
        category.get_value_formatted(Some("occupancy"), Some(0)).unwrap(),
        "1.00"
    );
    assert_eq!(
        category.get_value_formatted(Some("occupancy"), Some(1)).unwrap(),
        "?"
    );
}

#[test]
fn block_housekeeping_without_error_plumbing() {
    let mut block = DataContainer::new("1ABC");
    block.append(atom_site());

    // Batch renames proceed on booleans; a bad target is not an error.
    assert!(block.rename("atom_site", "atom_site_anisotrop"));
    assert!(!block.rename("atom_site", "whatever"));
    assert_eq!(block.object_name_list(), &["atom_site_anisotrop"]);

    let category = block.get_mut("atom_site_anisotrop").unwrap();
    assert!(category.rename_attribute("id", "local_id"));
    assert!(!category.rename_attribute("id", "local_id"));
    assert_eq!(category.replace_value(&CifValue::from("ATOM"), &CifValue::from("HETATM"), "group_PDB"), 2);

    assert!(block.remove("atom_site_anisotrop"));
    assert!(block.is_empty());
}

#[test]
fn json_snapshot_survives_category_roundtrip() {
    let category = atom_site();
    let json = category.to_json().unwrap();
    let restored = DataCategory::from_json(&json).unwrap();
    assert_eq!(restored.attribute_list(), category.attribute_list());
    assert_eq!(restored.row_list(), category.row_list());
    assert_eq!(
        restored.get_value_formatted_by_index(0, 0).unwrap(),
        "ATOM"
    );
}

#[test]
fn dictionary_definitions() {
    let mut definition = DefinitionContainer::new("_atom_site.id");
    let mut item = DataCategory::new("item");
    item.append_attribute("name");
    item.append(vec![CifValue::from("_atom_site.id")]);
    definition.append(item);

    assert!(definition.is_attribute());
    assert!(!definition.is_category());

    let mut out = Vec::new();
    definition.print_it(&mut out, Verbosity::Full).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Definition type: item"));
}
