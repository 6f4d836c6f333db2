//! Port definitions (interfaces to be implemented by adapters)

pub mod log_sink;
pub mod model_gateway;
pub mod rulebook_loader;
