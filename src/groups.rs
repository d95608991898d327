//! MIME type groups as used for content sniffing.
//!
//! Each group is decided on the essence, type and subtype only, parameters
//! are never taken into account.

use crate::media_type::MediaType;

const FONT_ESSENCES: &[&str] = &[
    "application/font-cff",
    "application/font-off",
    "application/font-sfnt",
    "application/font-ttf",
    "application/font-woff",
    "application/vnd.ms-fontobject",
    "application/vnd.ms-opentype",
];

const ARCHIVE_ESSENCES: &[&str] = &[
    "application/x-rar-compressed",
    "application/zip",
    "application/x-gzip",
];

const JAVASCRIPT_ESSENCES: &[&str] = &[
    "application/ecmascript",
    "application/javascript",
    "application/x-ecmascript",
    "application/x-javascript",
    "text/ecmascript",
    "text/javascript",
    "text/javascript1.0",
    "text/javascript1.1",
    "text/javascript1.2",
    "text/javascript1.3",
    "text/javascript1.4",
    "text/javascript1.5",
    "text/jscript",
    "text/livescript",
    "text/x-ecmascript",
    "text/x-javascript",
];

impl MediaType {
    pub fn is_image(&self) -> bool {
        self.type_() == "image"
    }

    pub fn is_audio_or_video(&self) -> bool {
        matches!(self.type_(), "audio" | "video") || self.essence() == "application/ogg"
    }

    pub fn is_font(&self) -> bool {
        self.type_() == "font" || FONT_ESSENCES.contains(&self.essence())
    }

    pub fn is_zip_based(&self) -> bool {
        self.subtype().ends_with("+zip") || self.essence() == "application/zip"
    }

    pub fn is_archive(&self) -> bool {
        ARCHIVE_ESSENCES.contains(&self.essence())
    }

    pub fn is_xml(&self) -> bool {
        self.subtype().ends_with("+xml") || matches!(self.essence(), "text/xml" | "application/xml")
    }

    pub fn is_html(&self) -> bool {
        self.essence() == "text/html"
    }

    /// XML, HTML or PDF.
    pub fn is_scriptable(&self) -> bool {
        self.is_xml() || self.is_html() || self.essence() == "application/pdf"
    }

    pub fn is_javascript(&self) -> bool {
        JAVASCRIPT_ESSENCES.contains(&self.essence())
    }

    pub fn is_json(&self) -> bool {
        self.subtype().ends_with("+json") || matches!(self.essence(), "application/json" | "text/json")
    }
}
