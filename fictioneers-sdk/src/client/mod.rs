pub mod core;
mod http;
