use std::{fs, path::Path};

use edit_script::{Difference, Item, difference};
use pretty_assertions::assert_eq;
use serde::Deserialize;

/// A pair of texts diffed character by character, with the expected script
/// written as `remove <old>` and `insert <old> <new>` lines.
#[derive(Debug, Deserialize)]
struct ExampleDocument {
    old: String,
    new: String,
    items: Option<Vec<String>>,
}

impl ExampleDocument {
    fn old(&self) -> Vec<char> { self.old.chars().collect() }

    fn new(&self) -> Vec<char> { self.new.chars().collect() }

    fn expected_items(&self) -> Option<Vec<Item>> {
        self.items
            .as_ref()
            .map(|items| items.iter().map(|item| parse_item(item)).collect())
    }
}

#[test]
fn test_documents_produce_the_expected_scripts() {
    for doc in &get_all_documents() {
        if let Some(expected) = doc.expected_items() {
            assert_eq!(
                difference(&doc.old(), &doc.new()).into_items(),
                expected,
                "{doc:?}"
            );
        }
    }
}

#[test]
fn test_documents_round_trip() {
    for doc in &get_all_documents() {
        let (old, new) = (doc.old(), doc.new());
        let difference = difference(&old, &new);

        assert_eq!(difference.validate(old.len(), new.len()), Ok(()), "{doc:?}");
        assert_eq!(difference.reconstruct(&old, &new), new, "{doc:?}");

        let mut current = old.clone();
        difference.apply_to(&new, &mut current);
        assert_eq!(current, new, "{doc:?}");
    }
}

#[test]
fn test_documents_have_minimal_scripts() {
    for doc in &get_all_documents() {
        let (old, new) = (doc.old(), doc.new());

        assert_eq!(
            difference(&old, &new).len(),
            old.len() + new.len() - 2 * longest_common_subsequence(&old, &new),
            "{doc:?}"
        );
    }
}

#[test]
fn test_pinned_scripts_are_valid() {
    for doc in &get_all_documents() {
        if let Some(expected) = doc.expected_items() {
            let (old, new) = (doc.old(), doc.new());

            assert_eq!(
                Difference::from(expected).try_reconstruct(&old, &new),
                Ok(new),
                "{doc:?}"
            );
        }
    }
}

fn parse_item(item: &str) -> Item {
    let parts: Vec<&str> = item.split_whitespace().collect();
    let index = |i: usize| -> usize {
        parts[i]
            .parse()
            .unwrap_or_else(|_| panic!("Invalid index in item `{item}`"))
    };

    match parts[0] {
        "remove" if parts.len() == 2 => Item::Remove { old_index: index(1) },
        "insert" if parts.len() == 3 => Item::Insert {
            old_index: index(1),
            new_index: index(2),
        },
        _ => panic!("Invalid item `{item}`"),
    }
}

fn longest_common_subsequence(old: &[char], new: &[char]) -> usize {
    let mut row = vec![0; new.len() + 1];

    for o in old {
        let mut diagonal = 0;
        for (j, n) in new.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if o == n {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }

    row[new.len()]
}

fn get_all_documents() -> Vec<ExampleDocument> {
    let examples_dir = Path::new("tests/examples");
    let entries = fs::read_dir(examples_dir)
        .expect("Failed to read examples directory")
        .collect::<Vec<_>>();

    let mut documents = Vec::new();

    for entry in entries {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();

        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("yml") {
            let file = fs::File::open(&path).expect("Failed to open example file");
            for document in serde_yaml::Deserializer::from_reader(file) {
                let doc =
                    ExampleDocument::deserialize(document).expect("Failed to deserialize document");
                documents.push(doc);
            }
        }
    }

    assert!(!documents.is_empty(), "No example documents found");

    documents
}
