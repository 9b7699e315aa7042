mod service_context_provider;

pub use service_context_provider::*;
