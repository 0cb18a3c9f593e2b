// ============================================================================
// tsconv-cli/src/menu.rs
// ============================================================================
//
// INTERACTIVE MENU: Marker Editing Before EDL Export
//
// The menu is a small state machine: `MainMenu` asks for an action, each
// action runs to completion (or is cancelled) and hands control back to
// `MainMenu`, until the user picks `Exit`.
//
// Recoverable core errors (bad index, bad color, shift below zero) are shown
// and the menu continues; anything else ends the session.
//
// AI-ASSISTANT-INFO: Interactive editing menu for the edl command

use crate::error::{CliResult, FileAction, FileContext};
use crate::prompt::{Answer, Prompt, describe_shift};
use crate::terminal;
use log::debug;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tsconv_core::{CoreError, TimestampCollection, WriteOptions};

/// States of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    Convert,
    List,
    RenameSingle,
    EditColorSingle,
    EditColorGroup,
    ShiftTimestamps,
    Exit,
}

impl MenuState {
    /// Selectable actions, in menu order.
    pub const ACTIONS: [MenuState; 7] = [
        MenuState::Convert,
        MenuState::List,
        MenuState::RenameSingle,
        MenuState::EditColorSingle,
        MenuState::EditColorGroup,
        MenuState::ShiftTimestamps,
        MenuState::Exit,
    ];

    pub fn key(self) -> &'static str {
        match self {
            MenuState::MainMenu => "0",
            MenuState::Convert => "1",
            MenuState::List => "2",
            MenuState::RenameSingle => "3",
            MenuState::EditColorSingle => "4",
            MenuState::EditColorGroup => "5",
            MenuState::ShiftTimestamps => "6",
            MenuState::Exit => "Q",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuState::MainMenu => "Main menu",
            MenuState::Convert => "Convert to EDL",
            MenuState::List => "List timestamps",
            MenuState::RenameSingle => "Rename timestamp",
            MenuState::EditColorSingle => "Change single timestamp's color",
            MenuState::EditColorGroup => "Change timestamp color by name group",
            MenuState::ShiftTimestamps => "Shift all timestamps' times",
            MenuState::Exit => "Exit",
        }
    }

    /// Looks up a selectable action by its key (case-insensitive).
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ACTIONS
            .into_iter()
            .find(|state| state.key().eq_ignore_ascii_case(key.trim()))
    }
}

/// One interactive editing session over a parsed InfoWriter log.
pub struct EdlSession<R, W> {
    markers: TimestampCollection,
    output_path: PathBuf,
    title: Option<String>,
    prompt: Prompt<R, W>,
}

impl<R: BufRead, W: Write> EdlSession<R, W> {
    pub fn new(
        markers: TimestampCollection,
        output_path: PathBuf,
        title: Option<String>,
        prompt: Prompt<R, W>,
    ) -> Self {
        Self {
            markers,
            output_path,
            title,
            prompt,
        }
    }

    pub fn markers(&self) -> &TimestampCollection {
        &self.markers
    }

    /// Runs the menu until the user exits.
    pub fn run(&mut self) -> CliResult<()> {
        let mut state = MenuState::MainMenu;
        while state != MenuState::Exit {
            debug!("Menu state: {:?}", state);
            let outcome = match state {
                MenuState::MainMenu => self.main_menu(),
                MenuState::Convert => self.convert(),
                MenuState::List => self.list(),
                MenuState::RenameSingle => self.rename_single(),
                MenuState::EditColorSingle => self.edit_color_single(),
                MenuState::EditColorGroup => self.edit_color_group(),
                MenuState::ShiftTimestamps => self.shift_timestamps(),
                MenuState::Exit => Ok(MenuState::Exit),
            };
            state = match outcome {
                Ok(next) => next,
                Err(e) if e.is_recoverable() => {
                    self.prompt.say(&terminal::error(&e.to_string()))?;
                    MenuState::MainMenu
                }
                Err(e) => return Err(e),
            };
        }
        self.prompt.say("\nCheers, enjoy your day\n")
    }

    fn main_menu(&mut self) -> CliResult<MenuState> {
        self.prompt.say(&format!(
            "\nTimestamp file has {} timestamps ({} different event names)\n",
            self.markers.len(),
            self.markers.group_count()
        ))?;
        self.prompt.say("Choose what to do:")?;
        for action in MenuState::ACTIONS {
            if action == MenuState::Exit {
                self.prompt.say(&format!(
                    "{}{}",
                    terminal::styling::ITEM_INDENT,
                    terminal::styling::MENU_SEPARATOR
                ))?;
            }
            self.prompt.say(&format!(
                "{}{}. {}",
                terminal::styling::ITEM_INDENT,
                action.key(),
                action.label()
            ))?;
        }

        loop {
            let answer = self.prompt.ask("\nOption: ")?;
            match MenuState::from_key(&answer) {
                Some(next) => return Ok(next),
                None => self.prompt.say(&format!("Incorrect option {}", answer))?,
            }
        }
    }

    fn convert(&mut self) -> CliResult<MenuState> {
        let title = match &self.title {
            Some(title) => title.clone(),
            None => self.prompt.ask("Type title to be added on top of file: ")?,
        };

        self.prompt.say(&format!(
            "Will convert to file {}",
            terminal::emphasis(&self.output_path.display().to_string())
        ))?;
        if !self.prompt.confirm("Is that okay?")? {
            return Ok(MenuState::MainMenu);
        }

        let exists = self.output_path.exists();
        if exists
            && !self.prompt.confirm(&format!(
                "File {} already exists, overwrite?",
                self.output_path.display()
            ))?
        {
            return Ok(MenuState::MainMenu);
        }

        let options = WriteOptions::edl(title).overwrite(exists);
        let written = tsconv_core::write(&self.markers, &self.output_path, &options)
            .for_file(FileAction::Write, &self.output_path);
        if let Err(e) = written {
            // Edits stay in memory, so the user can pick another action or retry.
            self.prompt.say(&terminal::error(&e.to_string()))?;
            return Ok(MenuState::MainMenu);
        }

        self.prompt.say(&terminal::success(&format!(
            "Generated EDL file {}",
            self.output_path.display()
        )))?;
        Ok(MenuState::MainMenu)
    }

    fn list(&mut self) -> CliResult<MenuState> {
        self.prompt.say("Available Timestamps:")?;
        let lines: Vec<String> = self
            .markers
            .iter()
            .enumerate()
            .map(|(i, t)| terminal::marker_with_color(i + 1, t))
            .collect();
        for line in lines {
            self.prompt.say(&line)?;
        }
        Ok(MenuState::MainMenu)
    }

    fn describe(&self, index: usize) -> CliResult<String> {
        self.markers
            .get(index)
            .map(|t| terminal::marker_with_color(index + 1, t))
            .ok_or_else(|| CoreError::Validation(format!("No timestamp number {}", index + 1)))
    }

    fn rename_single(&mut self) -> CliResult<MenuState> {
        let Some(index) = self.prompt.choose_index("timestamp", self.markers.len())? else {
            return Ok(MenuState::MainMenu);
        };
        let before = self.describe(index)?;
        self.prompt.say(&format!("Will rename timestamp:\n{}", before))?;

        let new_name = loop {
            let name = self.prompt.ask("\nNew name: ")?;
            if name.is_empty() {
                self.prompt.say("Name cannot be empty")?;
                continue;
            }
            self.prompt.say(&format!("\nWill rename timestamp to {}", name))?;
            match self.prompt.confirm_or_cancel("Is this okay?")? {
                Answer::Yes => break name,
                Answer::No => continue,
                Answer::Cancel => {
                    self.prompt.say("Aborting rename")?;
                    return Ok(MenuState::MainMenu);
                }
            }
        };

        self.markers.rename(index, new_name)?;
        let after = self.describe(index)?;
        self.prompt.say(&format!("\nRenamed timestamp:\n{}", after))?;
        self.prompt.say("Note that changes are NOT written back to the input file")?;
        Ok(MenuState::MainMenu)
    }

    fn edit_color_single(&mut self) -> CliResult<MenuState> {
        let Some(index) = self.prompt.choose_index("timestamp", self.markers.len())? else {
            return Ok(MenuState::MainMenu);
        };
        let before = self.describe(index)?;
        self.prompt.say(&format!("Will edit color of timestamp:\n{}", before))?;

        let Some(color) = self.prompt.choose_color()? else {
            return Ok(MenuState::MainMenu);
        };
        self.markers.set_color(index, color)?;

        let after = self.describe(index)?;
        self.prompt.say(&format!("\nTimestamp edited, now is:\n{}", after))?;
        Ok(MenuState::MainMenu)
    }

    fn edit_color_group(&mut self) -> CliResult<MenuState> {
        self.prompt.say("\nAvailable name groups:")?;
        let groups: Vec<String> = self.markers.group_names().map(str::to_string).collect();
        for (i, name) in groups.iter().enumerate() {
            let size = self.markers.group(name).map_or(0, |g| g.len());
            self.prompt
                .say(&terminal::numbered(i + 1, &format!("{} ({} timestamps)", name, size)))?;
        }

        let Some(index) = self.prompt.choose_index("group", groups.len())? else {
            return Ok(MenuState::MainMenu);
        };
        let name = groups
            .get(index)
            .ok_or_else(|| CoreError::Validation(format!("No name group number {}", index + 1)))?;
        let size = self.markers.group(name).map_or(0, |g| g.len());
        self.prompt.say(&format!(
            "Will batch-edit color of {} timestamps titled {}",
            size, name
        ))?;

        let Some(color) = self.prompt.choose_color()? else {
            return Ok(MenuState::MainMenu);
        };
        let updated = self.markers.set_group_color(name, color)?;
        self.prompt.say(&terminal::success(&format!(
            "Updated {} timestamps from group {}",
            updated, name
        )))?;
        Ok(MenuState::MainMenu)
    }

    fn shift_timestamps(&mut self) -> CliResult<MenuState> {
        self.prompt
            .say("\nThis option will shift all timestamps by the provided time.")?;
        let Some(seconds) = self.prompt.ask_shift()? else {
            return Ok(MenuState::MainMenu);
        };

        self.prompt.say(&format!(
            "\nWill shift all timestamps by {} ({} seconds)",
            describe_shift(seconds),
            seconds
        ))?;
        if !self.prompt.confirm("Is this okay?")? {
            return Ok(MenuState::MainMenu);
        }

        self.markers.shift_all(seconds)?;
        self.prompt.say(&terminal::success(&format!(
            "Shifted all timestamps by {}",
            describe_shift(seconds)
        )))?;
        Ok(MenuState::MainMenu)
    }
}
