//! Internal unit tests, grouped by module.
