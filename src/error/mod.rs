pub mod notify;

pub use notify::{NotifyError, NotifyResult};
