//! # rinstall-process
//!
//! **Purpose**: Child process execution for recursive-install
//!
//! Runs a command line in a given working directory, waits for it with an
//! optional timeout, and reports how it finished as a [`CommandStatus`].
//!
//! ## Features
//!
//! - **Shell Commands**: `sh -c` / `cmd /C` wrapping via [`ProcessConfig::shell`]
//! - **Timeout Support**: Per-process timeouts; a timed command runs in its own
//!   process group so the whole tree can be killed
//! - **Exit Classification**: Exit code, signal, timeout and launch failure are
//!   kept distinct so callers choose which ones to ignore
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use rinstall_process::{ProcessConfig, ProcessManager};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let manager = ProcessManager::new();
//!
//! let config = ProcessConfig::shell("npm install")
//!     .working_dir("packages/api")
//!     .timeout(Some(Duration::from_secs(600)));
//!
//! let status = manager.run(config).await;
//! println!("npm install {}", status);
//! # }
//! ```

pub mod child;
pub mod config;
pub mod error;
pub mod manager;
pub mod status;

pub use child::ManagedChild;
pub use config::ProcessConfig;
pub use error::{ProcessError, Result};
pub use manager::ProcessManager;
pub use status::{CommandStatus, FALLBACK_EXIT_CODE};
