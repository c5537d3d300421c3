pub mod admin_panel;
pub mod calendar;
pub mod dropzone;
pub mod header;
pub mod prompt;
