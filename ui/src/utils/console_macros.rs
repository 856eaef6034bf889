/// Browser console logging with a `js_sys::Date::now()` timestamp prefix.
/// These only work inside the browser; code exercised by native unit tests
/// logs through `tracing` instead.
#[doc(hidden)]
#[macro_export]
macro_rules! __console_stamped {
    ($level:ident, $fmt:expr) => {
        gloo_console::$level!(format!("[{}] {}", js_sys::Date::now(), $fmt))
    };
    ($level:ident, $fmt:expr, $($arg:tt)*) => {
        gloo_console::$level!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => { $crate::__console_stamped!(info, $($arg)*) };
}

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => { $crate::__console_stamped!(log, $($arg)*) };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => { $crate::__console_stamped!(warn, $($arg)*) };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => { $crate::__console_stamped!(error, $($arg)*) };
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => { $crate::__console_stamped!(debug, $($arg)*) };
}

/// Log a serializable value as pretty JSON, falling back to its Debug form
#[macro_export]
macro_rules! console_json {
    ($label:expr, $value:expr) => {
        match serde_json::to_string_pretty(&$value) {
            Ok(json) => $crate::console_log!("{}: {}", $label, json),
            Err(_) => $crate::console_log!("{}: {:?}", $label, $value),
        }
    };
}
