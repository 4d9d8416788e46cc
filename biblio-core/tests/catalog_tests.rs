//! File-level tests for biblio-core
//!
//! These tests exercise the store, importer, exporter and settings against
//! real files in a temporary directory.

use biblio_core::config::AppConfig;
use biblio_core::export::{encoder_for_format, export_file, HtmlEncoder};
use biblio_core::import::{self, ImportFormat};
use biblio_core::{Book, Catalog, CatalogStore, BiblioError, StorageError};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// Fixtures
// =============================================================================

const DELIMITED_IMPORT: &str = "\
ISBN;Titre;Langue;Auteurs;Date de parution;Genre;Description
978-2-07-036822-8;Le Petit Prince;Français;Antoine de Saint-Exupéry;06/04/1943;Conte;\"Un aviateur échoue dans le désert\"
978-2-07-040850-4;L'Étranger;Français;Albert Camus;19/05/1942;Roman;Meursault
978-0-452-28423-4;1984;English;George Orwell;08/06/1949;Dystopia;
";

const VERTICAL_IMPORT: &str = "\
978-2-253-00401-1
Germinal
Français
Émile Zola
02/03/1885
La grève des mineurs
Roman
978-0-261-10221-7
The Hobbit
English
J.R.R. Tolkien
21/09/1937
There and back again
Fantasy
";

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new("Ma Bibliothèque", "Les livres du salon");
    catalog.add(
        Book::new("978-0-261-10221-7", "The Hobbit")
            .with_language("English")
            .with_authors("J.R.R. Tolkien")
            .with_date("21/09/1937")
            .with_genre("Fantasy"),
    );
    catalog.add(
        Book::new("978-2-07-036822-8", "Le Petit Prince")
            .with_language("Français")
            .with_authors("Antoine de Saint-Exupéry")
            .with_date("06/04/1943")
            .with_genre("Conte")
            .with_description("Un aviateur\nrencontre un prince"),
    );
    catalog.add(Book::new("978-0-452-28423-4", "1984").with_authors("George Orwell"));
    catalog
}

// =============================================================================
// Store
// =============================================================================

#[test]
fn test_load_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let store = CatalogStore::new(dir.path().join("library.db"));

    match store.load() {
        Err(e) => assert!(e.is_not_found()),
        Ok(_) => panic!("Expected NotFound"),
    }
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let store = CatalogStore::new(dir.path().join("library.db"));
    let catalog = sample_catalog();

    store.save(&catalog).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded.name, catalog.name);
    assert_eq!(loaded.len(), 3);
    // Line breaks in a description are flattened on save
    assert_eq!(loaded.books[1].description, "Un aviateur rencontre un prince");
    assert_eq!(loaded.books[0], catalog.books[0]);
}

#[test]
fn test_save_overwrites_previous_content() {
    let dir = TempDir::new().unwrap();
    let store = CatalogStore::new(dir.path().join("library.db"));

    store.save(&sample_catalog()).unwrap();
    store.save(&Catalog::new("Small", "One book")).unwrap();

    let content = fs::read_to_string(store.path()).unwrap();
    assert_eq!(content, "Small\nOne book\n");
    assert!(!dir.path().join("library.db.tmp").exists());
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let store = CatalogStore::new(dir.path().join("missing").join("library.db"));

    match store.save(&sample_catalog()) {
        Err(StorageError::WriteFailure { path, .. }) => assert!(path.ends_with("library.db")),
        other => panic!("Expected WriteFailure, got {:?}", other),
    }
}

#[test]
fn test_clear_persists_immediately() {
    let dir = TempDir::new().unwrap();
    let store = CatalogStore::new(dir.path().join("library.db"));
    let mut catalog = sample_catalog();
    store.save(&catalog).unwrap();

    store.clear(&mut catalog).unwrap();

    assert!(catalog.is_empty());
    let reloaded = store.load().unwrap();
    assert!(reloaded.is_empty());
    assert_eq!(reloaded.name, "Ma Bibliothèque");
}

#[test]
fn test_load_skips_malformed_lines() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "library.db",
        "Shelf\nDesc\n1;Dune;EN;Herbert;1965;SF;Spice\ngarbage\n2;Emma;EN;Austen;1815;Novel\n",
    );

    let catalog = CatalogStore::new(path).load().unwrap();
    assert_eq!(catalog.len(), 2);
}

// =============================================================================
// Import
// =============================================================================

#[test]
fn test_import_delimited_fixture() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "books.csv", DELIMITED_IMPORT);
    assert_eq!(import::detect_format(DELIMITED_IMPORT), ImportFormat::Delimited);

    let mut catalog = Catalog::default();
    let added = import::import_file(&mut catalog, &path).unwrap();

    assert_eq!(added, 3);
    assert_eq!(catalog.books[0].description, "Un aviateur échoue dans le désert");
    assert_eq!(catalog.books[2].description, "");
}

#[test]
fn test_import_vertical_fixture() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "old.txt", VERTICAL_IMPORT);
    assert_eq!(import::detect_format(VERTICAL_IMPORT), ImportFormat::Vertical);

    let mut catalog = Catalog::default();
    let added = import::import_file(&mut catalog, &path).unwrap();

    assert_eq!(added, 2);
    assert_eq!(catalog.books[0].description, "La grève des mineurs");
    assert_eq!(catalog.books[0].genre, "Roman");
    assert_eq!(catalog.books[1].authors, "J.R.R. Tolkien");
}

#[test]
fn test_import_skips_existing_ids() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "books.csv", DELIMITED_IMPORT);
    let mut catalog = sample_catalog();

    let added = import::import_file(&mut catalog, &path).unwrap();

    // Le Petit Prince and 1984 are already in the catalog
    assert_eq!(added, 1);
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.books[1].genre, "Conte");
    assert_eq!(catalog.books[3].title, "L'Étranger");

    assert_eq!(import::import_file(&mut catalog, &path).unwrap(), 0);
    assert_eq!(catalog.len(), 4);
}

#[test]
fn test_import_missing_file() {
    let mut catalog = Catalog::default();
    let result = import::import_file(&mut catalog, &PathBuf::from("/nonexistent/books.csv"));
    assert!(matches!(result, Err(StorageError::NotFound(_))));
    assert!(catalog.is_empty());
}

#[test]
fn test_import_does_not_save() {
    let dir = TempDir::new().unwrap();
    let store = CatalogStore::new(dir.path().join("library.db"));
    store.save(&Catalog::default()).unwrap();
    let path = write(&dir, "books.csv", DELIMITED_IMPORT);

    let mut catalog = store.load().unwrap();
    import::import_file(&mut catalog, &path).unwrap();

    assert!(store.load().unwrap().is_empty());
}

// =============================================================================
// Export
// =============================================================================

#[test]
fn test_export_html_groups_sections() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalogue.html");
    let catalog = sample_catalog();

    export_file(&catalog, &HtmlEncoder::new(), &path).unwrap();
    let html = fs::read_to_string(&path).unwrap();

    let num = html.find("id=\"section-num\"").unwrap();
    let p = html.find("id=\"section-P\"").unwrap();
    let t = html.find("id=\"section-T\"").unwrap();
    assert!(num < p && p < t);
    assert!(html.contains("<title>Ma Bibliothèque - Catalogue</title>"));

    // Export sorts a copy only
    assert_eq!(catalog.books[0].title, "The Hobbit");
}

#[test]
fn test_export_csv_then_import() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalogue.csv");
    let catalog = sample_catalog();
    let encoder = encoder_for_format("csv").unwrap();

    export_file(&catalog, encoder.as_ref(), &path).unwrap();

    let mut copy = Catalog::default();
    assert_eq!(import::import_file(&mut copy, &path).unwrap(), 3);
    assert_eq!(copy.books[0], catalog.books[0]);
}

#[test]
fn test_export_to_unwritable_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("catalogue.html");
    assert!(export_file(&sample_catalog(), &HtmlEncoder::new(), &path).is_err());
}

// =============================================================================
// Settings
// =============================================================================

#[test]
fn test_config_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = AppConfig::load(&dir.path().join("app.conf"));
    assert!(matches!(
        result,
        Err(BiblioError::Storage(StorageError::NotFound(_)))
    ));
}

#[test]
fn test_config_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.conf");
    let mut config = AppConfig::default();
    config.page_size = 4;
    config.set_banner_lines(["*** My books ***"]);

    config.save(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "4\n*** My books ***\n");
    assert_eq!(AppConfig::load(&path).unwrap(), config);
}

#[test]
fn test_config_with_bad_page_size() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "app.conf", "zero\nbanner\n");
    assert!(matches!(AppConfig::load(&path), Err(BiblioError::Parse(_))));
}
