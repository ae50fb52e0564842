pub mod handlers;

pub const HEALTHY_MESSAGE: &str = "API is running";
