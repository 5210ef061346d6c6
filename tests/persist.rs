use std::collections::BTreeMap;
use std::fs;

use inventory::{persist, Item};
use tempfile::TempDir;

fn sample() -> BTreeMap<String, Item> {
    let mut items = BTreeMap::new();
    items.insert("A1".to_owned(), Item::new("A1", "Pen", 10, 0.50));
    items.insert("B7".to_owned(), Item::new("B7", "Lápiz número 2", 0, 0.1 + 0.2));
    items.insert("C3".to_owned(), Item::new("C3", "Ream of paper", 120, 1234.5678));
    items
}

#[test]
fn missing_file_loads_empty() {
    let dir = TempDir::new().unwrap();

    let map: BTreeMap<String, Item> = persist::load(dir.path().join("inventory.json")).unwrap();
    let list: Vec<Item> = persist::load(dir.path().join("removed_items.json")).unwrap();

    assert!(map.is_empty());
    assert!(list.is_empty());
}

#[test]
fn map_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");

    persist::save(&path, &sample()).unwrap();
    let loaded: BTreeMap<String, Item> = persist::load(&path).unwrap();

    assert_eq!(loaded, sample());
    assert_eq!(loaded["B7"].price, 0.1 + 0.2);
}

#[test]
fn sequence_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("removed_items.json");
    let items = sample().into_iter().map(|(_, item)| item).rev().collect::<Vec<_>>();

    persist::save(&path, &items).unwrap();
    let loaded: Vec<Item> = persist::load(&path).unwrap();

    assert_eq!(loaded, items);
}

#[test]
fn saved_json_is_indented_and_keeps_non_ascii() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");

    persist::save(&path, &sample()).unwrap();
    let text = fs::read_to_string(&path).unwrap();

    assert!(text.contains("\"Lápiz número 2\""));
    assert!(text.contains("\n    \"A1\": {\n        \"identifier\": \"A1\","));
    assert!(text.contains("\"quantity\": 10,"));
    assert!(text.contains("\"price\": 0.5\n"));
}

#[test]
fn save_overwrites_whole_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");

    persist::save(&path, &sample()).unwrap();
    persist::save(&path, &BTreeMap::<String, Item>::new()).unwrap();

    let loaded: BTreeMap<String, Item> = persist::load(&path).unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn save_leaves_no_temporary_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");

    persist::save(&path, &sample()).unwrap();

    let names = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["inventory.json".to_owned()]);
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("inventory.json");

    let result = persist::save(&path, &sample());

    assert!(matches!(result, Err(inventory::Error::IOError(_))));
}

#[test]
fn load_rejects_wrong_shape() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");
    fs::write(&path, r#"{"A1": {"identifier": "A1", "name": "Pen", "quantity": -1, "price": 0.5}}"#).unwrap();

    let result: inventory::Result<BTreeMap<String, Item>> = persist::load(&path);

    assert!(matches!(result, Err(inventory::Error::DeserializeError(_))));
}
