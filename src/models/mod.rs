pub mod entry;
pub mod entry_type;
