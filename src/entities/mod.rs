pub mod review;
pub mod role;
pub mod trip;
pub mod user;
