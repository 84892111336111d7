pub mod fixtures;
pub mod tracing;

pub use fixtures::{fixture_path, load_fixture_config};
pub use tracing::{CapturedEvent, captured_events, init_test_tracing};
