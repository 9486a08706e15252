//! Browser console logging setup.
//!
//! Everything in the crate logs through the `log` facade. The browser build
//! routes it to the JS console; other builds leave the facade to the host.

/// Install the panic hook and console logger. Safe to call more than once.
pub fn init(level: log::Level) {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(level).is_err() {
            log::debug!("console logger already installed");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = level;
    }
}
