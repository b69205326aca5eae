pub mod artist;
pub mod health;
pub mod root;
pub mod show;
pub mod venue;
