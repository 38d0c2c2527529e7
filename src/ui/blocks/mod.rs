pub mod banner;
pub mod header;
pub mod warning;
