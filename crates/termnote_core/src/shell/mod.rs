//! Interactive terminal shell.
//!
//! # Responsibility
//! - Present the menu and the Create/View/Search/Edit flows.
//! - Keep terminal I/O behind `InputSource` and `std::io::Write` so sessions
//!   can be scripted.

pub mod frame;
pub mod input;
pub mod session;

pub use input::{InputSource, LineInput, ScriptedInput};
pub use session::{parse_selection, Selection, Shell, ShellError, ShellState};
