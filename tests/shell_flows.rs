// tests/shell_flows.rs

//! Menu flows driven end to end against a directory-backed store.

mod common;

use common::{files_on_disk, load, run_shell, run_shell_bytes, sample_recipe, seed, setup_store, FIXED_DATE};
use std::fs;

#[test]
fn test_add_recipe() {
    let (_temp, store) = setup_store();

    let out = run_shell(
        &store,
        "2\nMy Soup\nAna\n45mins\n2 carrots\n1 onion\nexit\nChop\nSimmer\nexit\n5\n",
    );

    assert!(out.contains("Recipe saved!"));
    assert!(out.contains("Current list: [2 carrots, 1 onion]"));
    assert_eq!(files_on_disk(&store), vec!["recipe_My_Soup.json"]);

    let saved = load(&store, "My Soup");
    assert_eq!(saved.title, "My Soup");
    assert_eq!(saved.author, "Ana");
    assert_eq!(saved.date, FIXED_DATE);
    assert_eq!(saved.instructions.time, "45mins");
    assert_eq!(saved.instructions.ingredients, vec!["2 carrots", "1 onion"]);
    assert_eq!(saved.instructions.steps, vec!["1. Chop", "2. Simmer"]);
}

#[test]
fn test_add_recipe_blank_defaults() {
    let (_temp, store) = setup_store();

    run_shell(&store, "2\n\n\n10mins\nexit\nexit\n5\n");

    assert_eq!(files_on_disk(&store), vec!["recipe_untitled_recipe.json"]);
    let saved = load(&store, "untitled_recipe");
    assert_eq!(saved.title, "untitled_recipe");
    assert_eq!(saved.author, "unknown");
}

#[test]
fn test_add_same_title_overwrites() {
    let (_temp, store) = setup_store();
    seed(&store, &sample_recipe("My Soup"));

    run_shell(&store, "2\nMy Soup\nBo\n5mins\nexit\nexit\n5\n");

    assert_eq!(files_on_disk(&store), vec!["recipe_My_Soup.json"]);
    assert_eq!(load(&store, "My Soup").author, "Bo");
}

#[test]
fn test_add_with_quotes_and_commas() {
    let (_temp, store) = setup_store();

    run_shell(
        &store,
        "2\nMom's \"best\" chili\nPat, Jr.\n1hrs\nbeans, soaked\n\"hot\" sauce\nexit\nStir, then taste\nexit\n5\n",
    );

    let saved = load(&store, "Mom's \"best\" chili");
    assert_eq!(saved.author, "Pat, Jr.");
    assert_eq!(saved.instructions.ingredients, vec!["beans, soaked", "\"hot\" sauce"]);
    assert_eq!(saved.instructions.steps, vec!["1. Stir, then taste"]);
}

#[test]
fn test_view_recipe() {
    let (_temp, store) = setup_store();
    seed(&store, &sample_recipe("Pie"));
    seed(&store, &sample_recipe("My Soup"));

    let out = run_shell(&store, "1\n1\n5\n");

    // Listed in name order, so "My_Soup" is first
    assert!(out.contains("Available Recipes:\n1. My_Soup\n2. Pie"));
    assert!(out.contains("--- My Soup ---"));
    assert!(out.contains("By: Ana | Created: 2024-01-15 10:30 | Cook Time: 45mins"));
    assert!(out.contains("--- Ingredients ---\n2 carrots\n1 onion"));
    assert!(out.contains("--- Steps ---\n1. Chop\n2. Simmer"));
}

#[test]
fn test_view_excludes_foreign_files() {
    let (_temp, store) = setup_store();
    seed(&store, &sample_recipe("Soup"));
    fs::write(store.root().join("shopping.txt"), "eggs").unwrap();
    fs::write(store.root().join("recipe_Old.json.bak"), "{}").unwrap();

    let out = run_shell(&store, "1\n0\n5\n");

    assert!(out.contains("Available Recipes:\n1. Soup\n\nEnter the number"));
    assert!(!out.contains("Old"));
    assert!(!out.contains("shopping"));
}

#[test]
fn test_view_empty() {
    let (_temp, store) = setup_store();
    let out = run_shell(&store, "1\n5\n");
    assert!(out.contains("No recipes found to view."));
}

#[test]
fn test_view_malformed_recipe_keeps_running() {
    let (_temp, store) = setup_store();
    fs::create_dir_all(store.root()).unwrap();
    fs::write(
        store.root().join("recipe_Broken.json"),
        r#"{"title": "Broken", "author": "x", "date": "y",
            "instructions": {"time": "1min", "ingredients": []}}"#,
    )
    .unwrap();

    let out = run_shell(&store, "1\n1\n9\n5\n");

    assert!(out.contains("Recipe 'Broken' is unreadable"));
    assert!(out.contains("missing field `steps`"));
    // The menu came back after the failure
    assert!(out.contains("Invalid choice, please select option 1-5"));
}

#[test]
fn test_add_recipe_with_invalid_utf8_input() {
    let (_temp, store) = setup_store();
    seed(&store, &sample_recipe("Soup"));

    let out = run_shell_bytes(&store, b"2\nTart\nAna\n30mins\ncr\xE8me\nexit\nBake\nexit\n1\n2\n5\n");

    assert!(out.contains("Recipe saved!"));
    assert_eq!(files_on_disk(&store), vec!["recipe_Soup.json", "recipe_Tart.json"]);
    assert_eq!(load(&store, "Tart").instructions.ingredients, vec!["cr\u{FFFD}me"]);
    assert!(out.contains("By: Ana | Created: 2024-06-01 14:30 | Cook Time: 30mins"));
}

#[test]
fn test_view_non_utf8_recipe_file() {
    let (_temp, store) = setup_store();
    fs::create_dir_all(store.root()).unwrap();
    fs::write(store.root().join("recipe_Tart.json"), b"{\"title\": \"cr\xE8me\"}").unwrap();

    let out = run_shell(&store, "1\n1\n5\n");

    assert!(out.contains("Recipe 'Tart' is unreadable"));
    assert!(!out.contains("Could not read recipe"));
}

#[test]
fn test_edit_rename_moves_file() {
    let (_temp, store) = setup_store();
    seed(&store, &sample_recipe("Soup"));

    let out = run_shell(&store, "4\n1\n1\nStew\n5\n");

    assert!(out.contains("Recipe updated!"));
    assert_eq!(files_on_disk(&store), vec!["recipe_Stew.json"]);

    let stew = load(&store, "Stew");
    assert_eq!(stew.title, "Stew");
    assert_eq!(stew.date, "2024-01-15 10:30 (edited)");
    assert_eq!(stew.instructions, sample_recipe("Soup").instructions);
}

#[test]
fn test_edit_rename_to_same_identity_leaves_one_file() {
    let (_temp, store) = setup_store();
    seed(&store, &sample_recipe("Soup"));

    run_shell(&store, "4\n1\n1\nsoup \n5\n");

    let files = files_on_disk(&store);
    assert_eq!(files.len(), 1);
    assert_eq!(load(&store, "soup").title, "soup");
}

#[test]
fn test_edit_author_keeps_identity() {
    let (_temp, store) = setup_store();
    seed(&store, &sample_recipe("Soup"));

    run_shell(&store, "4\n1\n2\nBo\n5\n");
    run_shell(&store, "4\n1\n2\n\n5\n");

    assert_eq!(files_on_disk(&store), vec!["recipe_Soup.json"]);
    let soup = load(&store, "Soup");
    assert_eq!(soup.author, "unknown");
    assert_eq!(soup.date, "2024-01-15 10:30 (edited)");
}

#[test]
fn test_edit_instructions() {
    let (_temp, store) = setup_store();
    seed(&store, &sample_recipe("Beans"));

    run_shell(&store, "4\n1\n3\n8hrs\nbeans\nwater\nexit\nSoak\nBoil\nexit\n5\n");

    let beans = load(&store, "Beans");
    assert_eq!(beans.instructions.time, "8hrs");
    assert_eq!(beans.instructions.ingredients, vec!["beans", "water"]);
    assert_eq!(beans.instructions.steps, vec!["1. Soak", "2. Boil"]);
    assert_eq!(beans.author, "Ana");
}

#[test]
fn test_edit_malformed_recipe_is_not_touched() {
    let (_temp, store) = setup_store();
    fs::create_dir_all(store.root()).unwrap();
    let path = store.root().join("recipe_Broken.json");
    fs::write(&path, "{ \"title\": ").unwrap();

    let out = run_shell(&store, "4\n1\n5\n");

    assert!(out.contains("Recipe 'Broken' is unreadable"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ \"title\": ");
}

#[test]
fn test_delete_recipe() {
    let (_temp, store) = setup_store();
    seed(&store, &sample_recipe("Soup"));
    seed(&store, &sample_recipe("Stew"));

    let out = run_shell(&store, "3\n1\n5\n");

    assert!(out.contains("Deleted."));
    assert_eq!(files_on_disk(&store), vec!["recipe_Stew.json"]);
}

#[test]
fn test_delete_out_of_range() {
    let (_temp, store) = setup_store();
    seed(&store, &sample_recipe("Soup"));

    let out = run_shell(&store, "3\n5\n5\n");

    assert!(out.contains("no recipe at position 5"));
    assert_eq!(files_on_disk(&store), vec!["recipe_Soup.json"]);
}

#[test]
fn test_delete_nothing() {
    let (_temp, store) = setup_store();
    let out = run_shell(&store, "3\n5\n");
    assert!(out.contains("Nothing to delete."));
}
