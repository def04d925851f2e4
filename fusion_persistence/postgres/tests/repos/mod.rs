#[path = "../common/mod.rs"]
mod common;

mod roles;
mod services;
mod team_members;
