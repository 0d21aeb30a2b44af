use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards domain log lines to `tracing` under the `products` target, so
/// `RUST_LOG=products=debug` narrows output to the product use cases.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "products", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "products", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "products", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "products", "{}", message);
    }
}
