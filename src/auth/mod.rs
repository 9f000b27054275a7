pub mod oauth;
pub mod sessions;
pub mod token;
