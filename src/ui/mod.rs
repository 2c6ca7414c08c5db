pub mod common;
pub mod icon;
pub mod leads;
pub mod pages;

pub use icon::{Icon, icons};
