pub mod attendance;
pub mod employees;
mod proxy;
