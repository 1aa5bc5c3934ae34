//! Fixed values written by the head synchronizer.
//!
//! Defaults apply when the page config leaves a field empty; the image
//! dimensions and social handle are always written as-is.

/// Default `og:type`.
pub const OG_TYPE: &str = "website";

/// Default `twitter:card`.
pub const TWITTER_CARD: &str = "summary_large_image";

/// Default `language` meta.
pub const LANGUAGE: &str = "English";

/// Default `robots` meta.
pub const ROBOTS: &str = "index, follow, max-snippet:-1, max-image-preview:large, max-video-preview:-1";

/// Mobile-responsive `viewport` meta.
pub const VIEWPORT: &str = "width=device-width, initial-scale=1.0, maximum-scale=5.0";

/// Value of a newly created `meta[charset]`.
pub const CHARSET: &str = "UTF-8";

/// `twitter:site` and `twitter:creator`.
pub const TWITTER_HANDLE: &str = "@voipcat";

/// Image metadata written alongside every `og:image`, whatever the image is.
pub struct OgImageDefaults {
    pub width: &'static str,
    pub height: &'static str,
    pub mime: &'static str,
}

pub const OG_IMAGE: OgImageDefaults = OgImageDefaults {
    width: "1200",
    height: "630",
    mime: "image/png",
};
