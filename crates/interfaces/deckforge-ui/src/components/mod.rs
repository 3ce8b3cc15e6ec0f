pub mod deck_list;
pub mod forms;
pub mod header;
