//! HTTP protocol layer.
//!
//! Path decoding, content-type inference, and response building, kept
//! separate from the filesystem logic in `handler`.

pub mod mime;
pub mod path;
pub mod response;

pub use path::{PathError, RequestPath};
pub use response::{
    build_400_response, build_403_response, build_404_response, build_405_response,
    build_500_response, build_file_response, build_html_response, build_redirect_response,
};
