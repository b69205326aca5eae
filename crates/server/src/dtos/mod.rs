pub mod artist;
pub mod common;
pub mod show;
pub mod venue;
