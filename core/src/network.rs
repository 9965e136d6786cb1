pub mod http;
pub mod netinfo;
