//! Responsive `<img>` attributes.
//!
//! Local images are left to the site build's own optimizer. Remote images get
//! a width-based `srcset` using `?w=` query parameters.

use serde::Serialize;

/// Widths offered in the `srcset` of remote images.
pub const SRCSET_WIDTHS: [u32; 5] = [480, 768, 1024, 1280, 1600];

/// Width used for the plain `src` of remote images.
pub const DEFAULT_WIDTH: u32 = 800;

const SIZES: &str = "(max-width: 768px) 100vw, (max-width: 1024px) 50vw, 800px";

/// Attributes for an `<img>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageAttrs {
    /// Image source
    pub src: String,
    /// Alt text
    pub alt: String,
    /// Candidate sources, remote images only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srcset: Option<String>,
    /// Layout hint for `srcset`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
    /// `loading` attribute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loading: Option<&'static str>,
    /// `decoding` attribute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoding: Option<&'static str>,
}

/// Build `<img>` attributes for `src`.
pub fn responsive_image_attrs(src: &str, alt: &str) -> ImageAttrs {
    if !src.starts_with("http") {
        return ImageAttrs {
            src: src.to_string(),
            alt: alt.to_string(),
            srcset: None,
            sizes: None,
            loading: None,
            decoding: None,
        };
    }

    let base = src.split('?').next().unwrap_or(src);
    let srcset = SRCSET_WIDTHS
        .iter()
        .map(|w| format!("{base}?w={w} {w}w"))
        .collect::<Vec<_>>()
        .join(", ");

    ImageAttrs {
        src: format!("{base}?w={DEFAULT_WIDTH}"),
        alt: alt.to_string(),
        srcset: Some(srcset),
        sizes: Some(SIZES.to_string()),
        loading: Some("lazy"),
        decoding: Some("async"),
    }
}
