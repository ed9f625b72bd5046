pub mod root_words;
pub mod session;

pub use root_words::{RootWordSource, FALLBACK_ROOT_WORD};
pub use session::{GameSession, SessionSnapshot};
