mod error;
mod ledger;
mod lessons;
mod urls;

pub use error::StoreError;
pub use ledger::DownloadLedger;
pub use lessons::{AUDIO_EXTENSIONS, LessonFileManager, is_audio_file, parse_lesson_file};
pub use urls::UrlStore;
