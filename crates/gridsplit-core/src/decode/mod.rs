//! Upload intake and image decoding.
//!
//! This module provides functionality for:
//! - Rejecting uploads whose MIME type is not `image/*`
//! - Decoding JPEG, PNG, WebP and GIF bytes into a [`SourceImage`]
//! - Applying EXIF orientation so the image is framed upright
//!
//! All operations are synchronous; the browser side awaits the file read and
//! hands the bytes over in one call.

mod intake;
mod load;
mod types;

pub use intake::{accept_upload, is_image_mime, IntakeError};
pub use load::decode_image;
pub use types::{DecodeError, Orientation, SourceImage};
