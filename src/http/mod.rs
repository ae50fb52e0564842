pub mod cors;
pub mod middleware;
pub mod responses;
pub mod router;
#[cfg(test)]
pub mod tests;
