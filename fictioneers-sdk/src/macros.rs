/// Logs at the given level on whichever backend the target uses.
///
/// Native builds go through [`tracing`], wasm builds through `log`; under
/// `cfg(test)` lines are printed with their level instead. The backends are
/// reached through this crate, so callers need neither as a dependency.
///
/// # Examples
/// ```
/// use fictioneers::cross_log;
/// # fn main() {
/// cross_log!(debug, "GET {}", "/users/me");
/// cross_log!(warn, "token exchange rejected with {}", 401);
/// # }
/// ```
#[macro_export]
macro_rules! cross_log {
    ($level:ident, $($arg:tt)*) => {
        #[cfg(all(not(test), target_arch = "wasm32"))]
        $crate::__log::$level!(target: "fictioneers", $($arg)*);
        #[cfg(all(not(test), not(target_arch = "wasm32")))]
        $crate::__tracing::$level!(target: "fictioneers", $($arg)*);
        #[cfg(test)]
        println!("[fictioneers {}] {}", stringify!($level), format_args!($($arg)*));
    };
}
