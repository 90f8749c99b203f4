//! Domain entities - Objects with identity and lifecycle

mod audio_artifact;
mod extracted_text;
mod session;
mod uploaded_file;

pub use audio_artifact::{AUDIO_DOWNLOAD_FILE_NAME, AUDIO_MIME_TYPE, AudioArtifact};
pub use extracted_text::ExtractedText;
pub use session::{RECENT_UPLOADS_VISIBLE, RecentUploads, SessionPreferences};
pub use uploaded_file::UploadedFile;
