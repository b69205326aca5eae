pub mod artist;
pub mod schedule;
pub mod show;
pub mod venue;
