//! Unit tests for pagecanvas.

mod perf_tests;
mod settings_watcher_tests;
