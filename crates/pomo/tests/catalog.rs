//! Tests for the Catalog data model.

use pomo::{Catalog, CatalogStats, Entry};

fn fuzzy(msgid: &str, msgstr: &str) -> Entry {
    Entry::builder().msgid(msgid).msgstr(msgstr).fuzzy(true).build()
}

#[test]
fn new_catalog_is_empty() {
    let catalog = Catalog::new();
    assert!(catalog.is_empty());
    assert!(catalog.header().is_none());
    assert_eq!(catalog.stats(), CatalogStats::default());
}

#[test]
fn entries_keep_insertion_order() {
    let mut catalog = Catalog::new();
    catalog.add_or_replace("b", "B");
    catalog.add_or_replace("a", "A");
    catalog.add_or_replace("c", "C");
    let ids: Vec<&[u8]> = catalog.iter().map(|e| e.msgid.as_slice()).collect();
    assert_eq!(ids, vec![b"b".as_slice(), b"a", b"c"]);
}

#[test]
fn add_or_replace_keeps_the_last_value_at_the_first_position() {
    let mut catalog = Catalog::new();
    catalog.add_or_replace("Save", "Sauver");
    catalog.add_or_replace("Cancel", "Annuler");
    catalog.add_or_replace("Save", "Enregistrer");

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.entries()[0], Entry::new("Save", "Enregistrer"));
    assert_eq!(catalog.entries()[1], Entry::new("Cancel", "Annuler"));
}

#[test]
fn insert_returns_the_replaced_entry() {
    let mut catalog = Catalog::new();
    assert_eq!(catalog.insert(Entry::new("k", "old")), None);
    assert_eq!(
        catalog.insert(Entry::new("k", "new")),
        Some(Entry::new("k", "old"))
    );
    assert_eq!(catalog.get(b"k").unwrap().msgstr, b"new");
}

#[test]
fn header_is_the_context_free_empty_msgid() {
    let mut catalog = Catalog::new();
    catalog.add_or_replace("Hello", "Bonjour");
    catalog.insert(Entry::builder().msgctxt("x").msgid("").msgstr("not header").build());
    assert!(catalog.header().is_none());

    catalog.add_or_replace("", "Content-Type: text/plain; charset=UTF-8\n");
    let header = catalog.header().unwrap();
    assert!(header.is_header());
    assert_eq!(header.msgstr, b"Content-Type: text/plain; charset=UTF-8\n");
}

#[test]
fn same_msgid_in_different_contexts_are_distinct() {
    let catalog: Catalog = [
        Entry::new("Open", "Ouvert"),
        Entry::builder().msgctxt("menu").msgid("Open").msgstr("Ouvrir").build(),
        Entry::builder().msgctxt("menu").msgid("Open").msgstr("Ouvrir…").build(),
    ]
    .into_iter()
    .collect();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(b"Open").unwrap().msgstr, b"Ouvert");
    assert_eq!(
        catalog
            .get_with_context(Some(b"menu".as_slice()), b"Open")
            .unwrap()
            .msgstr,
        "Ouvrir…".as_bytes()
    );
}

#[test]
fn stats_skip_the_header() {
    let catalog: Catalog = [
        Entry::new("", "Content-Type: text/plain; charset=UTF-8\n"),
        Entry::new("Hello", "Bonjour"),
        Entry::new("Bye", ""),
        fuzzy("Save", "Sauver"),
        fuzzy("Quit", ""),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        catalog.stats(),
        CatalogStats {
            messages: 4,
            fuzzy: 2,
            untranslated: 2,
        }
    );
}

#[test]
fn without_fuzzy_drops_fuzzy_messages_but_keeps_the_header() {
    let header = Entry::builder()
        .msgid("")
        .msgstr("Content-Type: text/plain; charset=UTF-8\n")
        .fuzzy(true)
        .build();
    let catalog: Catalog = [header.clone(), Entry::new("Hello", "Bonjour"), fuzzy("Save", "Sauver")]
        .into_iter()
        .collect();

    let filtered = catalog.without_fuzzy();
    assert_eq!(filtered.entries(), &[header, Entry::new("Hello", "Bonjour")]);
    assert!(filtered.get(b"Save").is_none());
    assert_eq!(catalog.len(), 3);
}
