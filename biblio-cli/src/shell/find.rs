//! Search menu

use super::browse::show_list;
use super::{header, parse_choice, rule, Flow};
use crate::console::{Console, Style};
use biblio_core::search::search;
use biblio_core::{AppConfig, Catalog, SearchMode};

/// Pick a search mode, run the query and browse the results
pub fn find<C: Console>(console: &mut C, config: &AppConfig, catalog: &Catalog) -> Flow {
    header(console, config, "SEARCH");
    console.print(Style::Emphasis, "[1] By ISBN");
    console.print(Style::Emphasis, "[2] By title");
    console.print(Style::Emphasis, "[3] By publisher code");
    console.print(Style::Emphasis, "[4] Back to main menu");
    console.print(Style::Emphasis, "[5] Quit the application");
    rule(console);

    let mode = match console.prompt("> Your choice: ").as_deref().and_then(parse_choice) {
        Some(1) => SearchMode::ExactId,
        Some(2) => SearchMode::Title,
        Some(3) => SearchMode::IdFragment,
        Some(5) => return Flow::Quit,
        _ => return Flow::Continue,
    };

    let label = match mode {
        SearchMode::ExactId => "ISBN: ",
        SearchMode::Title => "Title contains: ",
        SearchMode::IdFragment => "Publisher code: ",
    };
    let Some(query) = console.prompt(label) else {
        return Flow::Continue;
    };

    let results = search(&catalog.books, mode, query.trim());
    tracing::debug!(mode = %mode, matches = results.len(), "Shell search");

    if results.is_empty() {
        console.print(Style::Error, "(x) No results found.");
        console.pause();
    } else {
        show_list(console, config, None, &results, "SEARCH RESULTS");
    }
    Flow::Continue
}
