//! The interactive session: prompts, partial-update merging, the current
//! project and the menu loop tying them together.

pub mod editor;
mod error;
mod input;
mod menu;
mod selection;

pub use error::{ConsoleError, ConsoleResult};
pub use input::InputReader;
pub use menu::{Command, EXIT_SELECTION, MenuController, SessionState};
pub use selection::SelectionState;
