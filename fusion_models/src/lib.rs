pub mod contact;
pub mod content;
pub mod email_address;
mod macros;
