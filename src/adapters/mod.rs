// Adapters layer: the HTTP server in front of the roster store and a client for it.

pub mod client;
pub mod http;
