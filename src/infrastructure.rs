pub mod http;
pub mod utils;
pub mod web;
