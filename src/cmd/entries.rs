// Copyright 2025 The termdrill Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io::BufRead;
use std::io::Write;

use termdrill_core::Entry;
use termdrill_core::Glossary;
use termdrill_core::error::Fallible;
use termdrill_core::fail;

use crate::console::Console;
use crate::context::Context;

/// Print every entry, sorted by term, followed by the total.
pub fn list_entries<R: BufRead, W: Write>(glossary: &Glossary, console: &Console<R, W>) {
    if glossary.is_empty() {
        console.print("> There aren't any entries to display");
        return;
    }
    for entry in glossary.sorted() {
        console.entry(entry.term(), entry.definition());
    }
    console.div();
    console.print(&format!("> Total entries: {}", glossary.len()));
}

/// Print a single entry. Returns whether it was found.
pub fn show_entry<R: BufRead, W: Write>(
    glossary: &Glossary,
    term: &str,
    console: &Console<R, W>,
) -> bool {
    match glossary.get(term) {
        Some(definition) => {
            console.entry(term, definition);
            true
        }
        None => {
            console.print(&format!("> No entry found for '{term}'."));
            false
        }
    }
}

/// Add an entry, or replace an existing one when `replace` is set.
pub fn add_entry<R: BufRead, W: Write>(
    ctx: &mut Context,
    term: &str,
    definition: &str,
    replace: bool,
    console: &Console<R, W>,
) -> Fallible<()> {
    let entry = Entry::new(term, definition)?;
    if ctx.glossary.contains(entry.term()) && !replace {
        return fail(format!(
            "an entry for '{}' already exists. Pass --replace to overwrite it.",
            entry.term()
        ));
    }
    let term = entry.term().to_string();
    let updated = ctx.glossary.with_entry(entry);
    report_commit(ctx.commit(updated)?, console);
    console.print(&format!("> Successfully added entry for '{term}'."));
    Ok(())
}

pub fn delete_entry<R: BufRead, W: Write>(
    ctx: &mut Context,
    term: &str,
    console: &Console<R, W>,
) -> Fallible<()> {
    if !ctx.glossary.contains(term) {
        return fail(format!("no entry found for '{term}'."));
    }
    let updated = ctx.glossary.without_term(term);
    report_commit(ctx.commit(updated)?, console);
    console.print(&format!("> Successfully removed entry for '{term}'."));
    Ok(())
}

pub fn clear_entries<R: BufRead, W: Write>(
    ctx: &mut Context,
    console: &Console<R, W>,
) -> Fallible<()> {
    let removed = ctx.glossary.len();
    report_commit(ctx.commit(Glossary::new())?, console);
    console.print(&format!("> Removed {removed} entries."));
    Ok(())
}

/// Warn that changes stay in memory while test mode is on.
pub fn alert_test_mode<R: BufRead, W: Write>(test_mode: bool, console: &Console<R, W>) {
    if test_mode {
        console.print("> [TEST MODE] Changes will not be saved to file.");
    }
}

fn report_commit<R: BufRead, W: Write>(saved: bool, console: &Console<R, W>) {
    alert_test_mode(!saved, console);
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tempfile::TempDir;
    use tempfile::tempdir;
    use termdrill_core::TinyRng;

    use super::*;
    use crate::store::Store;

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    fn setup(test_mode: bool) -> Fallible<(TempDir, Context, TestConsole)> {
        let dir = tempdir()?;
        let store = Store::new(dir.path().join("data.txt"));
        let ctx = Context::open(store, test_mode, TinyRng::from_seed(0))?;
        let console = Console::new(Cursor::new(Vec::new()), Vec::new());
        Ok((dir, ctx, console))
    }

    fn output(console: TestConsole) -> String {
        String::from_utf8_lossy(&console.into_writer()).to_string()
    }

    #[test]
    fn test_list_sorted() -> Fallible<()> {
        let (_dir, ctx, console) = setup(true)?;
        list_entries(&ctx.glossary, &console);
        let text = output(console);
        let aftermath = text.find("> aftermath").unwrap_or(usize::MAX);
        let whimsy = text.find("> whimsy").unwrap_or(0);
        assert!(aftermath < whimsy);
        assert!(text.ends_with("> Total entries: 10\n"));
        Ok(())
    }

    #[test]
    fn test_list_empty() -> Fallible<()> {
        let (_dir, ctx, console) = setup(false)?;
        list_entries(&ctx.glossary, &console);
        assert_eq!(output(console), "> There aren't any entries to display\n");
        Ok(())
    }

    #[test]
    fn test_show_entry() -> Fallible<()> {
        let (_dir, ctx, console) = setup(true)?;
        assert!(show_entry(&ctx.glossary, "caprice", &console));
        assert!(!show_entry(&ctx.glossary, "Caprice", &console));
        let text = output(console);
        assert!(text.contains("> caprice\n      a sudden desire\n"));
        assert!(text.contains("> No entry found for 'Caprice'."));
        Ok(())
    }

    #[test]
    fn test_add_requires_replace() -> Fallible<()> {
        let (_dir, mut ctx, console) = setup(false)?;
        add_entry(&mut ctx, "cat", "feline", false, &console)?;
        assert!(add_entry(&mut ctx, "cat", "kitty", false, &console).is_err());
        assert_eq!(ctx.glossary.get("cat"), Some("feline"));
        add_entry(&mut ctx, "cat", "kitty", true, &console)?;
        assert_eq!(ctx.store.load()?.get("cat"), Some("kitty"));
        Ok(())
    }

    #[test]
    fn test_add_rejects_delimiter() -> Fallible<()> {
        let (_dir, mut ctx, console) = setup(false)?;
        assert!(add_entry(&mut ctx, "a||b", "c", false, &console).is_err());
        assert!(ctx.glossary.is_empty());
        Ok(())
    }

    #[test]
    fn test_delete() -> Fallible<()> {
        let (_dir, mut ctx, console) = setup(false)?;
        add_entry(&mut ctx, "cat", "feline", false, &console)?;
        add_entry(&mut ctx, "dog", "canine", false, &console)?;
        delete_entry(&mut ctx, "cat", &console)?;
        assert!(delete_entry(&mut ctx, "cat", &console).is_err());
        let saved = ctx.store.load()?;
        assert_eq!(saved.len(), 1);
        assert!(saved.contains("dog"));
        Ok(())
    }

    #[test]
    fn test_clear_in_test_mode() -> Fallible<()> {
        let (_dir, mut ctx, console) = setup(true)?;
        clear_entries(&mut ctx, &console)?;
        assert!(ctx.glossary.is_empty());
        let text = output(console);
        assert!(text.contains("[TEST MODE]"));
        assert!(text.contains("> Removed 10 entries."));
        Ok(())
    }
}
