pub mod artifact;
pub mod summary;
pub mod tts;

pub use artifact::AudioArtifact;
pub use summary::summary_sentence;
pub use tts::TtsClient;

pub mod prelude {
    pub use super::{summary_sentence, AudioArtifact, TtsClient};
    pub use np_core::{Error, Result};
}
