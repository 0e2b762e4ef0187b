pub mod server;
pub mod submit;
