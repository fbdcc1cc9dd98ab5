//! Askama templates.
//!
//! - `index.html` - Upload form posting to `/translate`; renders the JSON
//!   result or error in place, with a download of the translation

use askama::Template;
use askama_web::WebTemplate;
use doc_translator_core::{LanguageOption, source_languages};

/// Landing page with upload form.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Source language choices; the first one is preselected
    pub source_languages: Vec<LanguageOption>,
    /// Value for the file input's `accept` attribute
    pub accept: &'static str,
    /// File name offered when downloading the translation
    pub download_name: &'static str,
}

impl IndexTemplate {
    pub fn new() -> Self {
        Self {
            source_languages: source_languages(),
            accept: ".pdf,.docx,.txt",
            download_name: "translated-document.txt",
        }
    }
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self::new()
    }
}
