//! Internal logging macros over the `log` facade.
//!
//! With the `logging` feature disabled they expand to a no-op that still
//! type-checks their arguments.

#[cfg(feature = "logging")]
macro_rules! engine_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "checkers_engine", $($arg)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! engine_debug {
    ($($arg:tt)+) => {{
        let _ = format_args!($($arg)+);
    }};
}

#[cfg(feature = "logging")]
macro_rules! engine_trace {
    ($($arg:tt)+) => {
        log::trace!(target: "checkers_engine", $($arg)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! engine_trace {
    ($($arg:tt)+) => {{
        let _ = format_args!($($arg)+);
    }};
}

#[cfg(feature = "logging")]
macro_rules! engine_info {
    ($($arg:tt)+) => {
        log::info!(target: "checkers_engine", $($arg)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! engine_info {
    ($($arg:tt)+) => {{
        let _ = format_args!($($arg)+);
    }};
}
