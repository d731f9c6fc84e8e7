//! The view-video flow of the therapist dashboard: ask the backend for the download info of an
//! assignment, fetch the encrypted video and open it.
//!
//! The transport is abstracted by [`VideoSource`], so any HTTP client (or a test double) can
//! serve the two requests. Failures are never retried here, the caller restarts the whole flow.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, VideoCryptError},
    video::decrypt_video,
};

/// MIME type the decrypted plaintext is presented with
pub const VIDEO_MIME_TYPE: &str = "video/mp4";

/// Request path of the download info endpoint for an assignment, relative to the API base URL.
pub fn download_info_path(assignment_id: &str) -> String {
    format!("/api/getdownloadurl/{assignment_id}")
}

/// Body of the download info endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadInfo {
    /// base64 encoded AES key of the video
    pub aes_key: String,
    /// location of the encrypted video
    pub download_url: String,
}

impl DownloadInfo {
    /// Parses the JSON body of the download info endpoint.
    pub fn from_json<B>(body: B) -> Result<Self>
    where
        B: AsRef<[u8]>,
    {
        serde_json::from_slice(body.as_ref()).map_err(|err| {
            log::debug!("Failed to parse download info: {err}");
            VideoCryptError::InvalidDownloadInfo(err.to_string())
        })
    }
}

// the key must not leak into logs
impl fmt::Debug for DownloadInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DownloadInfo")
            .field("aes_key", &"<redacted>")
            .field("download_url", &self.download_url)
            .finish()
    }
}

/// Transport for the two requests of the view-video flow.
pub trait VideoSource {
    /// Requests the download info for an assignment.
    /// Transport failures are reported as [`VideoCryptError::Transport`].
    fn download_info(&self, assignment_id: &str) -> Result<DownloadInfo>;

    /// Downloads the raw encrypted frame from `download_url`.
    /// Transport failures are reported as [`VideoCryptError::Transport`].
    fn fetch(&self, download_url: &str) -> Result<Vec<u8>>;
}

/// A decrypted video, ready to be handed to a player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecryptedVideo {
    data: Vec<u8>,
    mime_type: &'static str,
}

impl DecryptedVideo {
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

/// Runs the complete view-video flow for an assignment.
///
/// Any failure means the video is unavailable. Nothing partially decrypted is returned.
pub fn fetch_and_decrypt<S>(source: &S, assignment_id: &str) -> Result<DecryptedVideo>
where
    S: VideoSource + ?Sized,
{
    log::debug!("Fetching download info for assignment {assignment_id}");
    let info = source.download_info(assignment_id)?;

    log::trace!("Downloading encrypted video from {}", info.download_url);
    let encrypted = source.fetch(&info.download_url)?;

    let data = decrypt_video(&encrypted, &info.aes_key).inspect_err(|err| {
        log::warn!("Video of assignment {assignment_id} is unavailable: {err}");
    })?;

    Ok(DecryptedVideo {
        data,
        mime_type: VIDEO_MIME_TYPE,
    })
}
