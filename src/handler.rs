pub mod admin;
pub mod developers;
pub mod home;
pub mod properties;
pub mod tasks;
pub mod tests;
pub mod users;
