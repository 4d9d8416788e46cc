//! Interactive menu-driven shell
//!
//! Every handler receives the current [`Session`] and hands back the updated
//! one, so unsaved changes are tracked without global state.

mod browse;
mod find;
mod manage;
mod settings;

use crate::console::{Console, Style};
use biblio_core::export::{export_file, HtmlEncoder};
use biblio_core::types::{DEFAULT_DESCRIPTION, DEFAULT_NAME};
use biblio_core::{AppConfig, Catalog, CatalogStore, Session};
use std::path::{Path, PathBuf};

/// Name of the page written by the export menu, next to the catalog file
pub const EXPORT_FILE_NAME: &str = "catalogue.html";

const RULE: &str = "------------------------------------------------------------";

/// What the caller should do after a handler returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Files the shell writes besides the catalog
#[derive(Debug, Clone)]
pub struct ShellPaths {
    pub config: PathBuf,
    pub export: PathBuf,
}

/// Load settings, writing the defaults when the file is missing or unusable
pub fn load_or_create_config(path: &Path) -> AppConfig {
    match AppConfig::load(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::info!("Settings unavailable ({}), writing defaults to {}", e, path.display());
            let config = AppConfig::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to write default settings: {}", e);
            }
            config
        }
    }
}

/// Parse a numbered menu choice
pub fn parse_choice(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}

/// Clear the screen and draw the banner with a screen title
fn header<C: Console>(console: &mut C, config: &AppConfig, title: &str) {
    console.clear();
    console.write(Style::Plain, &config.banner);
    if !config.banner.ends_with('\n') {
        console.write(Style::Plain, "\n");
    }
    console.print(Style::Title, &format!(" {} ", title));
    console.print(Style::Plain, "");
}

fn rule<C: Console>(console: &mut C) {
    console.print(Style::Muted, RULE);
}

/// Show an error both on screen and in the log
fn report_error<C: Console>(console: &mut C, message: &str, error: &dyn std::error::Error) {
    tracing::error!("{}: {}", message, error);
    console.print(Style::Error, &format!("(x) {}: {}", message, error));
}

/// Save the catalog, telling the user how it went
fn save_catalog<C: Console>(
    console: &mut C,
    store: &CatalogStore,
    catalog: &Catalog,
    session: Session,
) -> Session {
    match store.save(catalog) {
        Ok(()) => {
            console.print(Style::Success, "(v) Catalog saved.");
            session.saved()
        }
        Err(e) => {
            report_error(console, "Could not save the catalog", &e);
            session
        }
    }
}

/// Read lines until a blank one (or end of input)
fn read_block<C: Console>(console: &mut C, label: &str) -> Vec<String> {
    let mut lines = Vec::new();
    while let Some(line) = console.prompt(label) {
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    lines
}

/// The interactive application
pub struct Shell<C: Console> {
    console: C,
    store: CatalogStore,
    paths: ShellPaths,
    config: AppConfig,
    catalog: Catalog,
}

impl<C: Console> Shell<C> {
    pub fn new(console: C, store: CatalogStore, paths: ShellPaths, config: AppConfig) -> Self {
        Self {
            console,
            store,
            paths,
            config,
            catalog: Catalog::default(),
        }
    }

    /// The console, for inspecting a finished session
    #[cfg(test)]
    pub fn console(&self) -> &C {
        &self.console
    }

    /// The in-memory catalog
    #[cfg(test)]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Open the catalog (or set up a new one) and run the main menu until quit
    pub fn run(&mut self) {
        self.catalog = match self.store.load() {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::info!("{}, starting first-run setup", e);
                self.first_run()
            }
        };

        let mut session = Session::new();
        loop {
            header(&mut self.console, &self.config, "MAIN MENU");
            self.console.print(Style::Emphasis, "[1] Browse the catalog");
            self.console.print(Style::Emphasis, "[2] Manage books");
            self.console.print(Style::Emphasis, "[3] Search");
            self.console.print(Style::Emphasis, "[4] Export to HTML");
            self.console.print(Style::Emphasis, "[5] Settings");
            self.console.print(Style::Emphasis, "[6] Quit");
            if session.is_dirty() {
                self.console.print(Style::Warn, "(!) You have unsaved changes.");
            }
            rule(&mut self.console);

            let Some(input) = self.console.prompt("> Your choice: ") else {
                if session.is_dirty() {
                    tracing::warn!("Input closed with unsaved changes");
                    self.console
                        .print(Style::Warn, "Input closed; unsaved changes were discarded.");
                }
                return;
            };

            let flow = match parse_choice(&input) {
                Some(1) => {
                    browse::show_list(
                        &mut self.console,
                        &self.config,
                        Some(&self.catalog),
                        &self.catalog.books,
                        "CATALOG",
                    );
                    Flow::Continue
                }
                Some(2) => {
                    session = manage::manage(
                        &mut self.console,
                        &self.config,
                        &self.store,
                        &mut self.catalog,
                        session,
                    );
                    Flow::Continue
                }
                Some(3) => find::find(&mut self.console, &self.config, &self.catalog),
                Some(4) => {
                    self.export();
                    Flow::Continue
                }
                Some(5) => {
                    session = settings::settings(
                        &mut self.console,
                        &mut self.config,
                        &self.paths.config,
                        &mut self.catalog,
                        session,
                    );
                    Flow::Continue
                }
                Some(6) => Flow::Quit,
                _ => {
                    self.console.print(Style::Warn, "Invalid choice.");
                    self.console.pause();
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                let (flow, next) = self.quit(session);
                session = next;
                if flow == Flow::Quit {
                    return;
                }
            }
        }
    }

    /// Ask for a name and description, then save the new catalog
    fn first_run(&mut self) -> Catalog {
        let console = &mut self.console;
        header(console, &self.config, "WELCOME");
        console.print(Style::Warn, "(i) No catalog file found.");
        console.print(Style::Plain, "Let's set up your library.");
        console.print(Style::Plain, "");

        let name = console
            .prompt("Name of your library: ")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_NAME.to_string());

        console.print(Style::Plain, "Description (blank line to finish):");
        let lines = read_block(console, "  > ");
        let description = if lines.is_empty() {
            DEFAULT_DESCRIPTION.to_string()
        } else {
            lines.join("\n")
        };

        let catalog = Catalog::new(name, description);
        save_catalog(console, &self.store, &catalog, Session::new());
        console.pause();
        catalog
    }

    /// Write the HTML catalogue page
    fn export(&mut self) {
        let console = &mut self.console;
        header(console, &self.config, "HTML EXPORT");
        console.print(Style::Plain, "Sorting and grouping books...");

        match export_file(&self.catalog, &HtmlEncoder::new(), &self.paths.export) {
            Ok(()) => console.print(
                Style::Success,
                &format!(
                    "(v) Export done! Open '{}' in your browser.",
                    self.paths.export.display()
                ),
            ),
            Err(e) => report_error(console, "Could not write the export file", &e),
        }
        console.pause();
    }

    /// Leave, offering to save pending changes first
    fn quit(&mut self, session: Session) -> (Flow, Session) {
        let console = &mut self.console;
        if !session.is_dirty() {
            console.print(Style::Success, "Goodbye!");
            return (Flow::Quit, session);
        }

        console.clear();
        console.print(Style::Error, "=== UNSAVED CHANGES ===");
        console.print(Style::Plain, "You have changes that were not saved.");
        console.print(Style::Emphasis, "[1] Save and quit");
        console.print(Style::Emphasis, "[2] Quit without saving");
        console.print(Style::Emphasis, "[3] Cancel");

        match console.prompt("> Your choice: ").as_deref().and_then(parse_choice) {
            Some(1) => {
                let session = save_catalog(console, &self.store, &self.catalog, session);
                if session.is_dirty() {
                    console.pause();
                    (Flow::Continue, session)
                } else {
                    console.print(Style::Success, "Goodbye!");
                    (Flow::Quit, session)
                }
            }
            Some(2) => {
                console.print(Style::Warn, "Changes discarded. Goodbye!");
                (Flow::Quit, session)
            }
            _ => (Flow::Continue, session),
        }
    }
}
