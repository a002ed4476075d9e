use std::time::Instant;

use tracing::{error, info, warn};

use crate::shared::error::{ErrorKind, ServiceError};

/// Emits one event for a finished service call.
///
/// Caller mistakes (missing fields, duplicates, unknown ids) are warnings,
/// internal failures are errors with their cause attached.
pub fn log_outcome<T>(
    service: &'static str,
    operation: &'static str,
    started: Instant,
    result: &Result<T, ServiceError>,
) {
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match result {
        Ok(_) => info!(service, operation, elapsed_ms, "call succeeded"),
        Err(err) if err.kind() == ErrorKind::Internal => {
            let cause = std::error::Error::source(err)
                .map(ToString::to_string)
                .unwrap_or_default();
            error!(
                service,
                operation,
                elapsed_ms,
                kind = err.kind().code(),
                error = %err,
                cause = %cause,
                "call failed"
            );
        }
        Err(err) => warn!(
            service,
            operation,
            elapsed_ms,
            kind = err.kind().code(),
            error = %err,
            "call rejected"
        ),
    }
}
