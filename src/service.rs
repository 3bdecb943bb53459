pub mod forms;
pub mod listing;
pub mod policy;
pub mod session;
pub mod upload;
