//! Logging targets understood by the terminal formatter in `reconr-cli`.

/// Target for raw presentation lines, printed without a level prefix.
pub const PRINT_TARGET: &str = "reconr::print";

/// Target for positive status lines.
pub const SUCCESS_TARGET: &str = "reconr::success";

/// Emits an `INFO` event the terminal renders as a success line.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}
