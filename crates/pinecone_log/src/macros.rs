//! Macros for timing the evaluation of math operations.
//!
//! Durations are reported in microseconds, since a single vector or
//! quaternion operation rarely takes longer than that.

/// Evaluates `$expression` and returns its value along with the elapsed
/// microseconds as an `f64`.
#[doc(hidden)]
#[macro_export]
macro_rules! __timed_micros {
    ($expression:expr) => {{
        let start = ::std::time::Instant::now();
        let value = $expression;
        (value, start.elapsed().as_secs_f64() * 1e6)
    }};
}

/// Evaluates a math expression and reports its duration at the `info` level
/// as `"<message> took <t> µs"`. The message takes format arguments before
/// the `;`. Returns the value of the expression.
///
/// ```ignore
/// let angle = with_timing_info_logging!("Angle between {} and {}", a, b; a.angle_to(&b));
/// ```
#[macro_export]
macro_rules! with_timing_info_logging {
    ($message:expr $(,$arg:expr)*; $expression:expr) => {{
        let (value, micros) = $crate::__timed_micros!($expression);
        $crate::info!(concat!($message, " took {:.3} µs")$(,$arg)*, micros);
        value
    }};
}

/// Like [`with_timing_info_logging`], but brackets the evaluation with a
/// `trace` message on either side, so operations that panic or never finish
/// still leave their start in the log.
#[macro_export]
macro_rules! with_trace_logging {
    ($message:expr $(,$arg:expr)*; $expression:expr) => {{
        $crate::trace!(concat!("Begin: ", $message)$(,$arg)*);
        let (value, micros) = $crate::__timed_micros!($expression);
        $crate::trace!(concat!("({:.3} µs) Done: ", $message), micros $(,$arg)*);
        value
    }};
}
