//! Page routes - server-rendered HTML.

use crate::templates::IndexTemplate;

/// Landing page with upload form.
pub async fn index() -> IndexTemplate {
    IndexTemplate::new()
}
