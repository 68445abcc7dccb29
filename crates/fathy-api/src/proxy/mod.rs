//! Speech-to-speech proxy.
//!
//! Audio uploaded to the talk endpoint is forwarded as multipart to the
//! external speech service; an audio reply is relayed back unchanged.

mod client;
mod handler;

pub use client::{
    secure_filename, SpeechClient, SpeechRequest, SpeechResponse, DEFAULT_WHISPER_LANGUAGE,
    DEFAULT_XTTS_LANGUAGE,
};
pub(crate) use handler::talk_to_fathy_s2s;
