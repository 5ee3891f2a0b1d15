use log::Level;
use std::fmt;

/// Receiver for the checker's progress messages.
///
/// Messages are observational only; nothing a sink does can change a result.
pub trait Diagnostics {
    fn emit(&self, level: Level, message: fmt::Arguments<'_>);
}

/// Forwards to the `log` facade under the `dupcheck::checker` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn emit(&self, level: Level, message: fmt::Arguments<'_>) {
        log::log!(target: "dupcheck::checker", level, "{message}");
    }
}

/// Drops every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Diagnostics for Silent {
    fn emit(&self, _level: Level, _message: fmt::Arguments<'_>) {}
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn emit(&self, level: Level, message: fmt::Arguments<'_>) {
        (**self).emit(level, message)
    }
}
