//! Sends `log` records to the debugger with `OutputDebugStringW`, readable
//! with DebugView. Release builds don't install anything.
#[cfg(debug_assertions)]
use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::OnceCell;

static INSTALLED: OnceCell<()> = OnceCell::new();

#[cfg(debug_assertions)]
struct DebugOutputLogger;

#[cfg(debug_assertions)]
static LOGGER: DebugOutputLogger = DebugOutputLogger;

#[cfg(debug_assertions)]
impl Log for DebugOutputLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "VirtualDesktopManager {} {}: {}\0",
            record.level(),
            record.target(),
            record.args()
        );
        let wide = line.encode_utf16().collect::<Vec<_>>();
        unsafe {
            windows::Win32::System::Diagnostics::Debug::OutputDebugStringW(
                windows::core::PCWSTR::from_raw(wide.as_ptr()),
            );
        }
    }

    fn flush(&self) {}
}

/// Install the logger once, a logger set by the host process wins.
pub(crate) fn init() {
    INSTALLED.get_or_init(|| {
        #[cfg(debug_assertions)]
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Debug);
        }
    });
}
