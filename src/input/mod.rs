mod editor;
pub mod history;
mod terminal;

pub use editor::LineEditor;
pub use history::History;
pub use terminal::RawMode;
