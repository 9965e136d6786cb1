mod endpoint;
mod sweep;
