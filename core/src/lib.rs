pub mod config;
pub mod fit;
pub mod gate;
pub mod poll;
pub mod upload;
pub mod visitor;

pub use config::PageConfig;
pub use fit::{fit_within, FittedSize};
pub use gate::{ProcessingGate, ProcessingGuard};
pub use poll::{PollClock, PollPhase};
pub use upload::{validate_upload, FileFacts, UploadRejection, PROCESSING_FAILED_MESSAGE};
pub use visitor::{parse_count, welcome_message, BannerUpdate, CountParseError, VisitorCount};
