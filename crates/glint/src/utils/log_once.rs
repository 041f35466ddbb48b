//! Log macros that fire at most once per call site, for diagnostics sitting
//! on hot paths.

#[macro_export]
macro_rules! log_once {
    ($lvl:expr, $($arg:tt)+) => {{
        static ONCE: std::sync::Once = std::sync::Once::new();
        ONCE.call_once(|| {
            log::log!($lvl, $($arg)+);
        });
    }};
}

#[macro_export]
macro_rules! error_once {
    ($($arg:tt)+) => {
        $crate::log_once!(log::Level::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn_once {
    ($($arg:tt)+) => {
        $crate::log_once!(log::Level::Warn, $($arg)+)
    };
}

pub use {error_once, log_once, warn_once};
