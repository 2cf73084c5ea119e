//! Shared cache-control policies for HTTP handlers.

/// Responses that must never be stored by clients or intermediaries.
pub const NO_STORE: &str = "no-store";

/// Build the cache-control header tuple for query and probe responses.
pub const fn no_store_header() -> (&'static str, &'static str) {
    ("Cache-Control", NO_STORE)
}
