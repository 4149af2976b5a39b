#[macro_use]
pub mod smallcharset;
pub mod str;
