// Service exports
pub mod session;

pub use session::{SessionError, SessionKey, SessionStats, SessionStore, BABY_DATA_KEY, RECOMMENDATIONS_KEY};
