pub mod editor;
pub mod format;
pub mod results;
