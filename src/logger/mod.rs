//! Logger module
//!
//! Operator-facing output for the service:
//! - Startup banner and filesystem notices
//! - Per-request access log lines
//! - Error and warning logging (stderr)

mod format;

pub use format::AccessLogEntry;

use std::fmt::Display;

/// Write to info/access log
fn write_info(message: &str) {
    println!("{message}");
}

/// Write to error log
fn write_error(message: &str) {
    eprintln!("{message}");
}

/// The two startup lines announcing the listener and the customers URL
pub fn server_start_lines(base_url: &str, customers_path: &str) -> [String; 2] {
    [
        format!("Server running on {base_url}"),
        format!("Access customers at {base_url}{customers_path}"),
    ]
}

pub fn log_server_start(base_url: &str, customers_path: &str) {
    for line in server_start_lines(base_url, customers_path) {
        write_info(&line);
    }
}

pub fn log_directory_created(dir: &str) {
    write_info(&format!("Created directory: {dir}"));
}

pub fn log_startup_failed(err: &impl Display) {
    write_error(&format!("Error: {err}"));
}

pub fn log_customers_error(err: &impl Display) {
    write_error(&format!("[ERROR] Error fetching customers: {err}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}

pub fn log_shutdown(signal: &str) {
    write_info(&format!("[INFO] {signal} received, shutting down"));
}
