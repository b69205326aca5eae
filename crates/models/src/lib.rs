pub mod datetime;
pub mod forms;
pub mod genres;
pub mod location;
pub mod schedule;
pub mod search;
