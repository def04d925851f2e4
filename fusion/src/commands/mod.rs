pub mod admin;
pub mod email;
pub mod export;
pub mod migrate;
pub mod serve;
