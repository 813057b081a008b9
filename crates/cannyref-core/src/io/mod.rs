pub mod hex;
pub mod png;
pub mod text;
