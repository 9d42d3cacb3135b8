//! Error handling utilities for MCP server

use liftoff_core::TrackerError;
use rmcp::ErrorData;

/// Helper to convert tracker errors to MCP errors
///
/// Caller mistakes, missing releases and deletes that removed nothing become
/// `invalid_params` so the client can correct the request; everything else
/// is an internal error.
pub fn to_mcp_error(message: &str, error: &TrackerError) -> ErrorData {
    let text = format!("{message}: {error}");
    let caller_error = error.is_validation()
        || error.is_not_found()
        || matches!(error, TrackerError::DeletionFailed { .. });

    if caller_error {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}
