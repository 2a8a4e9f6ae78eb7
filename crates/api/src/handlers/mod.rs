//! HTTP request handlers, one module per resource.

pub mod admin;
pub mod auth;
pub mod company;
pub mod register;
pub mod student;
