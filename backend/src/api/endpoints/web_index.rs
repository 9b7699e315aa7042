use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

pub const INDEX_FILE: &str = "index.html";

/// Static files from `web_root`, unknown paths answer with the index page
/// so client side navigation keeps working.
pub fn web_root_service(web_root: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(web_root)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(web_root.join(INDEX_FILE)))
}
