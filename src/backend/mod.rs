//! Backend of the application: the hosted-service client, the local
//! session cache, and the pure data shaping the views render.

pub mod api;
pub mod models;
pub mod session;
pub mod utils;
