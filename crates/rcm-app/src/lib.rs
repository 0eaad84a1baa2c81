//! Application glue for the Resident Care Manager.
//!
//! Wires the view-state core to its collaborators: the session/role gate,
//! the notification sink, account settings, the async resident backend, the
//! CSV download sink, and the document-store-backed request board. Every
//! failure is caught at the operation boundary here and converted into a
//! notification; nothing propagates as an unhandled fault.

pub mod board;
pub mod error;
pub mod notify;
pub mod screen;
pub mod session;
pub mod settings;

pub use board::{RequestBoard, Timestamp};
pub use error::{AppError, Result};
pub use notify::{MemoryNotifier, Notice, Notifier, TracingNotifier};
pub use screen::ResidentScreen;
pub use session::{LOGIN_ROUTE, Session, guard_screen};
pub use settings::{AccountSettings, MIN_PASSWORD_LEN};
