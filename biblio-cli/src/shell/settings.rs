//! Settings menu
//!
//! Page size and banner are written to the settings file right away; catalog
//! name and description only mark the session as modified.

use super::{header, parse_choice, read_block, report_error, rule};
use crate::console::{Console, Style};
use biblio_core::config::parse_page_size;
use biblio_core::{AppConfig, Catalog, Session};
use std::path::Path;

pub fn settings<C: Console>(
    console: &mut C,
    config: &mut AppConfig,
    config_path: &Path,
    catalog: &mut Catalog,
    mut session: Session,
) -> Session {
    loop {
        header(console, config, "SETTINGS");
        console.print(Style::Emphasis, "[1] Edit catalog name and description");
        console.print(
            Style::Emphasis,
            &format!("[2] Books per page (currently {})", config.page_size),
        );
        console.print(Style::Emphasis, "[3] Edit the banner");
        console.print(Style::Emphasis, "[4] Back to main menu");
        rule(console);

        let Some(input) = console.prompt("> Your choice: ") else {
            return session;
        };

        match parse_choice(&input) {
            Some(1) => session = edit_identity(console, catalog, session),
            Some(2) => edit_page_size(console, config, config_path),
            Some(3) => edit_banner(console, config, config_path),
            Some(4) => return session,
            _ => {
                console.print(Style::Warn, "Invalid choice.");
                console.pause();
            }
        }
    }
}

/// Rename the catalog; blank answers keep the current values
fn edit_identity<C: Console>(console: &mut C, catalog: &mut Catalog, session: Session) -> Session {
    console.print(Style::Muted, "Leave blank to keep the current value.");
    let mut changed = false;

    console.print(Style::Plain, &format!("Current name: {}", catalog.name));
    if let Some(name) = console.prompt("New name: ").filter(|s| !s.trim().is_empty()) {
        catalog.name = name.trim().to_string();
        changed = true;
    }

    console.print(
        Style::Plain,
        &format!("Current description: {}", catalog.description),
    );
    if let Some(description) = console
        .prompt("New description: ")
        .filter(|s| !s.trim().is_empty())
    {
        catalog.description = description.trim().to_string();
        changed = true;
    }

    let session = if changed {
        console.print(Style::Success, "(v) Updated. Remember to save.");
        session.modified()
    } else {
        console.print(Style::Plain, "Nothing changed.");
        session
    };
    console.pause();
    session
}

fn edit_page_size<C: Console>(console: &mut C, config: &mut AppConfig, config_path: &Path) {
    let Some(input) = console.prompt("Books per page: ") else {
        return;
    };
    match parse_page_size(&input) {
        Ok(size) => {
            config.page_size = size;
            save_config(console, config, config_path);
        }
        Err(e) => console.print(Style::Warn, &format!("(!) {}", e)),
    }
    console.pause();
}

fn edit_banner<C: Console>(console: &mut C, config: &mut AppConfig, config_path: &Path) {
    console.print(Style::Emphasis, "[1] Enter a new banner");
    console.print(Style::Emphasis, "[2] Restore the default banner");
    console.print(Style::Emphasis, "[3] Cancel");

    match console.prompt("> Your choice: ").as_deref().and_then(parse_choice) {
        Some(1) => {
            console.print(Style::Plain, "Type the banner (blank line to finish):");
            let lines = read_block(console, "");
            if lines.is_empty() {
                console.print(Style::Plain, "Banner unchanged.");
            } else {
                config.set_banner_lines(lines);
                save_config(console, config, config_path);
            }
        }
        Some(2) => {
            config.reset_banner();
            save_config(console, config, config_path);
        }
        _ => console.print(Style::Plain, "Cancelled."),
    }
    console.pause();
}

fn save_config<C: Console>(console: &mut C, config: &AppConfig, config_path: &Path) {
    match config.save(config_path) {
        Ok(()) => console.print(Style::Success, "(v) Settings saved."),
        Err(e) => report_error(console, "Could not save the settings", &e),
    }
}
