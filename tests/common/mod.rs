pub mod fixtures;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Initialize test logging once; safe to call from every test.
#[allow(dead_code)]
pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}
