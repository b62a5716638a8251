pub mod constants;
pub mod slug;
pub mod types;
