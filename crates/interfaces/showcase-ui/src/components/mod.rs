pub mod forms;
pub mod guide;
pub mod header;
pub mod progress;
