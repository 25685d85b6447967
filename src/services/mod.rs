pub mod auth;
pub mod lessons;
pub mod listsync;
pub mod preview;
pub mod upload;
