//! Export naming and media payload helpers
//!
//! Pure functions only: nothing here touches the filesystem.

pub mod data_uri;
pub mod naming;

pub use data_uri::{
    AudioKind, ImageKind, decode_data_uri, detect_image_kind, encode_data_uri,
    strip_data_uri_prefix,
};
pub use naming::{ExportKind, ExportName, resolve_export_name};
