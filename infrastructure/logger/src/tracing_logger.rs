use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Florista -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Florista -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Florista -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Florista -- ", "{}", message);
    }
}
