/// Macro for prefixed status logging to stderr (only when stderr is a terminal).
///
/// Usage:
/// ```ignore
/// log_status!("scaffold", "Created {} under {}", folder_name, base);
/// log_status!("scaffold", "Folder {} already exists", folder_name);
/// ```
#[macro_export]
macro_rules! log_status {
    ($prefix:expr, $($arg:tt)*) => {
        if ::std::io::IsTerminal::is_terminal(&::std::io::stderr()) {
            eprintln!(concat!("[", $prefix, "] {}"), format_args!($($arg)*));
        }
    };
}

pub mod error;
pub mod family;
pub mod normalize;
pub mod scaffold;

// Re-export the public surface for ergonomic library use
pub use error::{Error, Result};
pub use family::{Family, FAMILY_UNIT};
pub use normalize::remove_accents;
pub use scaffold::{build_folder, folder_exists, BuildReport, BuildStatus, UNIT_LEAVES};
