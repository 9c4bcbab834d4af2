//! Menu-driven shell state machine.
//!
//! # Responsibility
//! - Drive Create/View/Search/Edit flows from an `InputSource`.
//! - Render every screen through `shell::frame`.
//!
//! # Invariants
//! - Every flow returns to `Menu` unless input ends or Exit is chosen.
//! - Invalid selections are reported in a frame and never abort the loop.
//! - Only storage I/O failures and output failures leave `run` as errors.
//! - Edit targets are resolved by stable ID against a fresh load.

use crate::clock::Clock;
use crate::model::note::{Note, NoteEdit, NoteId};
use crate::service::note_service::{NoteService, NoteServiceError};
use crate::shell::frame::{render_framed, render_header};
use crate::shell::input::InputSource;
use crate::store::{NoteStore, StoreError};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};

const MENU_INVALID: &str = "Invalid choice. Please enter a number from 1 to 4.";
const SELECTION_INVALID: &str = "Invalid choice.";
const EDIT_TARGET_MISSING: &str = "Note no longer exists; edit skipped.";
const FAREWELL: &str = "Goodbye!";

/// Fatal shell error. Ends the session.
#[derive(Debug)]
pub enum ShellError {
    /// Writing to the terminal or reading input failed.
    Io(io::Error),
    /// The notes file could not be read or written.
    Store(StoreError),
}

impl Display for ShellError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "terminal i/o failed: {err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ShellError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<io::Error> for ShellError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<StoreError> for ShellError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Shell screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Menu,
    Create,
    View,
    Search,
    Edit(NoteId),
    Exit,
}

/// Parsed answer to a "pick a note" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Back,
    /// Zero-based position in the listed notes.
    Index(usize),
    Invalid,
}

/// Parses a 1-based selection among `count` listed notes.
///
/// `b`/`B` means back.
pub fn parse_selection(answer: &str, count: usize) -> Selection {
    let answer = answer.trim();
    if answer.eq_ignore_ascii_case("b") {
        return Selection::Back;
    }
    match answer.parse::<usize>() {
        Ok(number) if (1..=count).contains(&number) => Selection::Index(number - 1),
        _ => Selection::Invalid,
    }
}

/// Interactive notes shell.
pub struct Shell<S: NoteStore, C: Clock, I: InputSource, W: Write> {
    service: NoteService<S, C>,
    input: I,
    out: W,
}

impl<S: NoteStore, C: Clock, I: InputSource, W: Write> Shell<S, C, I, W> {
    pub fn new(service: NoteService<S, C>, input: I, out: W) -> Self {
        Self {
            service,
            input,
            out,
        }
    }

    /// Runs the menu loop until Exit is chosen or input ends.
    ///
    /// # Errors
    /// - `ShellError::Store` on storage I/O failure.
    /// - `ShellError::Io` on terminal read/write failure.
    pub fn run(&mut self) -> Result<(), ShellError> {
        let mut state = ShellState::Menu;
        while state != ShellState::Exit {
            debug!("event=shell_transition module=shell state={:?}", state);
            state = self.step(state)?;
        }
        self.out.flush()?;
        info!("event=shell_exit module=shell status=ok");
        Ok(())
    }

    /// Executes one screen and returns the next state.
    pub fn step(&mut self, state: ShellState) -> Result<ShellState, ShellError> {
        match state {
            ShellState::Menu => self.menu(),
            ShellState::Create => self.create(),
            ShellState::View => self.view(),
            ShellState::Search => self.search(),
            ShellState::Edit(id) => self.edit(id),
            ShellState::Exit => Ok(ShellState::Exit),
        }
    }

    fn menu(&mut self) -> Result<ShellState, ShellError> {
        self.print(&render_header("Home Page"))?;
        self.print("1. Create Note\n2. View Notes\n3. Search Notes\n4. Exit\n")?;
        let Some(choice) = self.prompt("Choose an option (1-4): ")? else {
            return self.farewell();
        };

        match choice.as_str() {
            "1" => Ok(ShellState::Create),
            "2" => Ok(ShellState::View),
            "3" => Ok(ShellState::Search),
            "4" => self.farewell(),
            _ => {
                self.framed(MENU_INVALID)?;
                Ok(ShellState::Menu)
            }
        }
    }

    fn create(&mut self) -> Result<ShellState, ShellError> {
        self.print(&render_header("Create Note"))?;
        let Some(title) = self.prompt("Enter note title: ")? else {
            return self.farewell();
        };
        let Some(content) = self.prompt("Enter note content: ")? else {
            return self.farewell();
        };

        match self.service.create_note(title, content) {
            Ok(_) => self.framed("Note created successfully.")?,
            Err(err) => {
                let message = recoverable_store_error(err)?;
                self.framed(&format!("Note not saved: {message}"))?;
            }
        }
        Ok(ShellState::Menu)
    }

    fn view(&mut self) -> Result<ShellState, ShellError> {
        self.print(&render_header("View Notes"))?;
        let notes = self.service.list_notes()?;
        if notes.is_empty() {
            self.framed("No notes available.")?;
            return Ok(ShellState::Menu);
        }
        self.pick_and_offer_edit(&notes)
    }

    fn search(&mut self) -> Result<ShellState, ShellError> {
        self.print(&render_header("Search Notes"))?;
        let Some(keyword) = self.prompt("Enter keyword to search in notes: ")? else {
            return self.farewell();
        };

        let matches = self.service.search_notes(&keyword)?;
        if matches.is_empty() {
            self.framed("No matching notes found.")?;
            return Ok(ShellState::Menu);
        }
        self.print(&format!("Found {} matching notes:\n", matches.len()))?;
        self.pick_and_offer_edit(&matches)
    }

    fn edit(&mut self, id: NoteId) -> Result<ShellState, ShellError> {
        self.print(&render_header("Edit Note"))?;
        let Some(current) = self.service.get_note(id)? else {
            self.framed(EDIT_TARGET_MISSING)?;
            return Ok(ShellState::Menu);
        };

        let title_prompt = format!(
            "Enter new title (or press Enter to keep '{}'): ",
            current.title
        );
        let Some(title) = self.prompt(&title_prompt)? else {
            return self.farewell();
        };
        let Some(content) =
            self.prompt("Enter new content (or press Enter to keep existing content): ")?
        else {
            return self.farewell();
        };

        match self
            .service
            .edit_note(id, NoteEdit::from_input(&title, &content))
        {
            Ok(_) => self.framed("Note updated successfully.")?,
            Err(NoteServiceError::NoteNotFound(_)) => self.framed(EDIT_TARGET_MISSING)?,
            Err(NoteServiceError::Store(err)) => {
                let message = recoverable_store_error(err)?;
                self.framed(&format!("Note not updated: {message}"))?;
            }
        }
        Ok(ShellState::Menu)
    }

    /// Lists `notes`, reads a selection, shows detail and offers an edit.
    fn pick_and_offer_edit(&mut self, notes: &[Note]) -> Result<ShellState, ShellError> {
        for (idx, note) in notes.iter().enumerate() {
            self.print(&format!(
                "{}. {} (Last Modified: {})\n",
                idx + 1,
                note.title,
                note.last_modified
            ))?;
        }
        let Some(answer) =
            self.prompt("Enter the number of the note to view or 'b' to go back: ")?
        else {
            return self.farewell();
        };

        let note = match parse_selection(&answer, notes.len()) {
            Selection::Back => return Ok(ShellState::Menu),
            Selection::Invalid => {
                self.framed(SELECTION_INVALID)?;
                return Ok(ShellState::Menu);
            }
            Selection::Index(idx) => &notes[idx],
        };

        self.print(&render_header("Note Detail"))?;
        self.framed(&format!(
            "Title: {}\nContent: {}\nLast Modified: {}",
            note.title, note.content, note.last_modified
        ))?;
        let Some(answer) = self.prompt("Would you like to edit this note? (y/n): ")? else {
            return self.farewell();
        };
        if answer.trim().eq_ignore_ascii_case("y") {
            Ok(ShellState::Edit(note.id))
        } else {
            Ok(ShellState::Menu)
        }
    }

    fn farewell(&mut self) -> Result<ShellState, ShellError> {
        self.framed(FAREWELL)?;
        Ok(ShellState::Exit)
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>, ShellError> {
        self.print(text)?;
        self.out.flush()?;
        Ok(self.input.read_line()?)
    }

    fn framed(&mut self, text: &str) -> io::Result<()> {
        self.print(&render_framed(text))
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }
}

// Unencodable fields are user-fixable; anything else ends the session.
fn recoverable_store_error(err: StoreError) -> Result<String, ShellError> {
    match err {
        StoreError::UnencodableField { .. } => Ok(err.to_string()),
        other => Err(ShellError::Store(other)),
    }
}
