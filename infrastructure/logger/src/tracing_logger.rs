use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "ChatBackend -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "ChatBackend -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "ChatBackend -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "ChatBackend -- ", "{}", message);
    }
}
