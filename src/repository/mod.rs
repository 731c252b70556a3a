//! Database operations, each taking the connection it runs against.

pub mod reviews;
pub mod trips;
pub mod users;
