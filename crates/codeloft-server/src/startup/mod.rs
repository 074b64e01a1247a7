//! Server startup: HTTP binding, logging, and shutdown handling

pub mod http;
pub mod logging;
pub mod shutdown;

pub use http::api_server;
pub use logging::init_logging;
pub use shutdown::wait_for_shutdown_signal;
