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
use termdrill_core::QUIT_TOKEN;
use termdrill_core::QuizDirection;
use termdrill_core::error::Fallible;

use crate::cmd::entries::alert_test_mode;
use crate::cmd::entries::list_entries;
use crate::cmd::entries::show_entry;
use crate::cmd::study::flip_cards;
use crate::cmd::study::take_quiz;
use crate::console::Console;
use crate::context::Context;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MenuOption {
    ViewAll,
    Search,
    AddOrEdit,
    Delete,
    TestKnowledge,
    LoadSaved,
    ClearAll,
    TestMode,
    Quit,
}

impl MenuOption {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "1" => Some(MenuOption::ViewAll),
            "2" => Some(MenuOption::Search),
            "3" => Some(MenuOption::AddOrEdit),
            "4" => Some(MenuOption::Delete),
            "5" => Some(MenuOption::TestKnowledge),
            "6" => Some(MenuOption::LoadSaved),
            "7" => Some(MenuOption::ClearAll),
            "8" => Some(MenuOption::TestMode),
            "9" => Some(MenuOption::Quit),
            _ => None,
        }
    }
}

/// Run the interactive menu until the user quits or the input ends.
pub fn run_menu<R: BufRead, W: Write>(ctx: &mut Context, console: &Console<R, W>) -> Fallible<()> {
    loop {
        let option = match choose_option(ctx.test_mode, console) {
            Some(option) => option,
            None => break,
        };
        log::debug!("Menu option: {option:?}");
        match option {
            MenuOption::ViewAll => {
                list_entries(&ctx.glossary, console);
                console.pause("> Press ENTER to go back. ");
            }
            MenuOption::Search => search(ctx, console),
            MenuOption::AddOrEdit => add_or_edit(ctx, console)?,
            MenuOption::Delete => delete(ctx, console)?,
            MenuOption::TestKnowledge => test_knowledge(ctx, console)?,
            MenuOption::LoadSaved => load_saved(ctx, console)?,
            MenuOption::ClearAll => clear_all(ctx, console)?,
            MenuOption::TestMode => toggle_test_mode(ctx, console),
            MenuOption::Quit => break,
        }
        console.check()?;
        if console.is_closed() {
            break;
        }
    }
    console.check()
}

/// Show the menu until a valid option is entered.
fn choose_option<R: BufRead, W: Write>(
    test_mode: bool,
    console: &Console<R, W>,
) -> Option<MenuOption> {
    console.div();
    loop {
        console.print("> MENU:");
        console.print("  1 - View all definitions");
        console.print("  2 - Search for a definition");
        console.print("  3 - Add/edit an entry");
        console.print("  4 - Delete an entry");
        console.print("  5 - Test your knowledge");
        console.print("  6 - Load saved data");
        console.print("  7 - Clear all entries");
        let tag = if test_mode {
            console.print("  8 - Test Mode: [ON] OFF");
            "[TEST MODE] "
        } else {
            console.print("  8 - Test Mode: ON [OFF]");
            ""
        };
        console.print("  9 - Quit the program");
        console.div();
        let choice = console.ask(&format!("> {tag}Enter an option (1-9): "))?;
        console.div();
        if let Some(option) = MenuOption::parse(&choice) {
            return Some(option);
        }
    }
}

fn search<R: BufRead, W: Write>(ctx: &Context, console: &Console<R, W>) {
    let prompt = "> Search for a term or 'quit' to go back: ";
    while let Some(term) = console.ask(prompt) {
        if term == QUIT_TOKEN {
            break;
        }
        console.div();
        show_entry(&ctx.glossary, &term, console);
        console.div();
    }
}

fn add_or_edit<R: BufRead, W: Write>(ctx: &mut Context, console: &Console<R, W>) -> Fallible<()> {
    alert_test_mode(ctx.test_mode, console);
    let Some(term) = console.ask("> Enter a term: ") else {
        return Ok(());
    };
    let Some(definition) = console.ask("> Enter a definition: ") else {
        return Ok(());
    };
    let entry = match Entry::new(term, definition) {
        Ok(entry) => entry,
        Err(e) => {
            console.div();
            console.print(&format!("> Invalid entry: {}", e.message()));
            console.pause("> Press ENTER to go back. ");
            return Ok(());
        }
    };
    console.div();
    console.entry(entry.term(), entry.definition());
    console.div();
    if console.confirm("> Is this correct? (Y/N): ") != Some(true) {
        return Ok(());
    }
    if let Some(existing) = ctx.glossary.get(entry.term()) {
        console.div();
        console.print(&format!("> An entry for {} already exists:", entry.term()));
        console.entry(entry.term(), existing);
        console.div();
        if console.confirm("> Replace? (Y/N): ") != Some(true) {
            return Ok(());
        }
    }
    let term = entry.term().to_string();
    let updated = ctx.glossary.with_entry(entry);
    ctx.commit(updated)?;
    console.div();
    console.print(&format!("> Successfully added entry for '{term}'."));
    console.pause("> Press ENTER to go back. ");
    Ok(())
}

fn delete<R: BufRead, W: Write>(ctx: &mut Context, console: &Console<R, W>) -> Fallible<()> {
    alert_test_mode(ctx.test_mode, console);
    let Some(term) = console.ask("> Enter a term to delete or 'quit' to go back: ") else {
        return Ok(());
    };
    if term == QUIT_TOKEN {
        return Ok(());
    }
    if !show_entry(&ctx.glossary, &term, console) {
        return Ok(());
    }
    console.div();
    if console.confirm("> Delete? (Y/N): ") != Some(true) {
        return Ok(());
    }
    let updated = ctx.glossary.without_term(&term);
    ctx.commit(updated)?;
    console.div();
    console.print(&format!("> Successfully removed entry for '{term}'."));
    console.pause("> Press ENTER to go back. ");
    Ok(())
}

fn test_knowledge<R: BufRead, W: Write>(
    ctx: &mut Context,
    console: &Console<R, W>,
) -> Fallible<()> {
    let version = loop {
        console.print("> TEST YOUR KNOWLEDGE:");
        console.print("  1 - Multiple-choice quiz: Choose the definition");
        console.print("  2 - Multiple-choice quiz: Choose the term");
        console.print("  3 - Flash cards");
        console.div();
        let Some(version) = console.ask("> Enter an option (1-3) or 'quit' to go back: ") else {
            return Ok(());
        };
        let version = version.to_lowercase();
        if version == QUIT_TOKEN {
            return Ok(());
        }
        console.div();
        if matches!(version.as_str(), "1" | "2" | "3") {
            break version;
        }
    };
    match version.as_str() {
        "1" => {
            take_quiz(ctx, QuizDirection::TermToDefinition, console)?;
        }
        "2" => {
            take_quiz(ctx, QuizDirection::DefinitionToTerm, console)?;
        }
        _ => {
            flip_cards(ctx, console)?;
        }
    }
    Ok(())
}

fn load_saved<R: BufRead, W: Write>(ctx: &mut Context, console: &Console<R, W>) -> Fallible<()> {
    let path = ctx.store.path().display().to_string();
    if !ctx.store.exists() {
        console.print(&format!("> Save file ({path}) could not be found."));
        console.div();
        if console.confirm("> Create new save file? (Y/N): ") != Some(true) {
            return Ok(());
        }
        ctx.store.create()?;
        console.div();
        console.print(&format!("> Local save file created ({path})."));
    } else {
        if console.confirm("> Load saved data? (Y/N): ") != Some(true) {
            return Ok(());
        }
        console.div();
    }
    let was_test_mode = ctx.test_mode;
    // A broken file leaves the current glossary and test mode as they were.
    if let Err(e) = ctx.reload() {
        console.print(&format!("> Could not load '{path}': {}", e.message()));
        console.pause("> Press ENTER to go back. ");
        return Ok(());
    }
    console.print(&format!("> Successfully loaded '{path}'."));
    if was_test_mode {
        console.print("> TEST MODE has been disabled.");
    }
    console.print(&format!("> Total entries: {}", ctx.glossary.len()));
    console.pause("> Press ENTER to go back. ");
    Ok(())
}

fn clear_all<R: BufRead, W: Write>(ctx: &mut Context, console: &Console<R, W>) -> Fallible<()> {
    alert_test_mode(ctx.test_mode, console);
    console.print(&format!("> Total entries: {}", ctx.glossary.len()));
    if console.confirm("> Clear all entries? (Y/N): ") == Some(true) {
        ctx.commit(Glossary::new())?;
    }
    Ok(())
}

fn toggle_test_mode<R: BufRead, W: Write>(ctx: &mut Context, console: &Console<R, W>) {
    if ctx.test_mode {
        console.print("> TEST MODE is already enabled.");
        console.print("> You may disable TEST MODE by loading your saved data from");
        console.print("  the menu (option 6) at any time.");
        console.pause("> Press ENTER to go back. ");
        return;
    }
    console.print("> Sample entries will be generated for testing purposes.");
    console.print("> This disables all saved data file modification functionalities.");
    console.print("> You may disable TEST MODE by loading your saved data from");
    console.print("  the menu (option 6) at any time.");
    console.div();
    if console.confirm("> Continue? (Y/N): ") == Some(true) {
        console.div();
        ctx.enable_test_mode();
        console.print("> TEST MODE has been enabled.");
        console.pause("> Press ENTER to go back. ");
    }
}

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;
    use std::io::Cursor;

    use tempfile::tempdir;
    use termdrill_core::TinyRng;

    use super::*;
    use crate::store::Store;

    /// Run the menu over a script and return the output and final context.
    fn drive(dir: &std::path::Path, test_mode: bool, script: &str) -> Fallible<(Context, String)> {
        let store = Store::new(dir.join("data.txt"));
        let mut ctx = Context::open(store, test_mode, TinyRng::from_seed(42))?;
        let console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        run_menu(&mut ctx, &console)?;
        let text = String::from_utf8_lossy(&console.into_writer()).to_string();
        Ok((ctx, text))
    }

    #[test]
    fn test_parse_option() {
        assert_eq!(MenuOption::parse("1"), Some(MenuOption::ViewAll));
        assert_eq!(MenuOption::parse("9"), Some(MenuOption::Quit));
        assert_eq!(MenuOption::parse("0"), None);
        assert_eq!(MenuOption::parse("view"), None);
    }

    #[test]
    fn test_quit_immediately() -> Fallible<()> {
        let dir = tempdir()?;
        let (_, text) = drive(dir.path(), false, "9\n")?;
        assert!(text.contains("> MENU:"));
        assert!(text.contains("Test Mode: ON [OFF]"));
        Ok(())
    }

    #[test]
    fn test_invalid_option_redisplays_menu() -> Fallible<()> {
        let dir = tempdir()?;
        let (_, text) = drive(dir.path(), false, "banana\n9\n")?;
        assert_eq!(text.matches("> MENU:").count(), 2);
        Ok(())
    }

    #[test]
    fn test_add_then_view() -> Fallible<()> {
        let dir = tempdir()?;
        let script = "3\ncat\nfeline\nmaybe\ny\n\n1\n\n9\n";
        let (ctx, text) = drive(dir.path(), false, script)?;
        assert_eq!(ctx.glossary.get("cat"), Some("feline"));
        assert_eq!(read_to_string(dir.path().join("data.txt"))?, "cat||feline\n");
        assert!(text.contains("> Successfully added entry for 'cat'."));
        assert!(text.contains("> Total entries: 1"));
        Ok(())
    }

    #[test]
    fn test_replace_needs_confirmation() -> Fallible<()> {
        let dir = tempdir()?;
        std::fs::write(dir.path().join("data.txt"), "cat||feline\n")?;
        let script = "3\ncat\nkitty\ny\nn\n9\n";
        let (ctx, text) = drive(dir.path(), false, script)?;
        assert!(text.contains("> An entry for cat already exists:"));
        assert_eq!(ctx.glossary.get("cat"), Some("feline"));
        Ok(())
    }

    #[test]
    fn test_delete_entry() -> Fallible<()> {
        let dir = tempdir()?;
        std::fs::write(dir.path().join("data.txt"), "cat||feline\ndog||canine\n")?;
        let script = "4\ncat\ny\n\n9\n";
        let (ctx, _) = drive(dir.path(), false, script)?;
        assert!(!ctx.glossary.contains("cat"));
        assert_eq!(read_to_string(dir.path().join("data.txt"))?, "dog||canine\n");
        Ok(())
    }

    #[test]
    fn test_search_loop() -> Fallible<()> {
        let dir = tempdir()?;
        let script = "2\ncaprice\nnothing\nquit\n9\n";
        let (_, text) = drive(dir.path(), true, script)?;
        assert!(text.contains("> caprice\n      a sudden desire"));
        assert!(text.contains("> No entry found for 'nothing'."));
        Ok(())
    }

    #[test]
    fn test_test_mode_then_load() -> Fallible<()> {
        let dir = tempdir()?;
        std::fs::write(dir.path().join("data.txt"), "cat||feline\n")?;
        let script = "8\ny\n\n7\ny\n6\ny\n\n9\n";
        let (ctx, text) = drive(dir.path(), false, script)?;
        assert!(text.contains("> TEST MODE has been enabled."));
        assert!(text.contains("> TEST MODE has been disabled."));
        // Clearing in test mode left the file alone.
        assert!(!ctx.test_mode);
        assert_eq!(ctx.glossary.get("cat"), Some("feline"));
        Ok(())
    }

    #[test]
    fn test_load_broken_file_stays_in_menu() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("data.txt");
        std::fs::write(&path, "broken line\n")?;
        let script = "6\ny\n\n1\n\n9\n";
        let (ctx, text) = drive(dir.path(), true, script)?;
        assert!(text.contains("> Could not load"));
        assert!(text.contains("Missing '||' between term and definition."));
        assert!(!text.contains("> Successfully loaded"));
        // Still in test mode, with the sample entries listed afterwards.
        assert!(ctx.test_mode);
        assert!(text.contains("> Total entries: 10"));
        assert_eq!(text.matches("> MENU:").count(), 3);
        Ok(())
    }

    #[test]
    fn test_quiz_from_menu() -> Fallible<()> {
        let dir = tempdir()?;
        // Pick the term quiz, start it, then quit on the first question.
        let script = "5\n1\n\nquit\n9\n";
        let (_, text) = drive(dir.path(), true, script)?;
        assert!(text.contains("> Match the term to the correct definition."));
        assert!(text.contains("> Question 1 of 10:"));
        assert!(!text.contains("Your score"));
        Ok(())
    }

    #[test]
    fn test_end_of_input_leaves_menu() -> Fallible<()> {
        let dir = tempdir()?;
        let (_, text) = drive(dir.path(), false, "3\ncat\n")?;
        assert_eq!(text.matches("> MENU:").count(), 1);
        Ok(())
    }
}
