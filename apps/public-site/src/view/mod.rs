//! Server-side page rendering.
//!
//! Each section is a pure function from literal content to an HTML
//! fragment; [`render_home_page`] composes them inside the layout.

mod html;
mod layout;
mod sections;

/// The full landing page: header, the five sections, footer.
pub fn render_home_page() -> String {
    let main = [
        sections::hero(),
        sections::quick_access_tiles(),
        sections::about(),
        sections::news(),
        sections::contact(),
    ]
    .concat();

    layout::document(&format!(r#"<main class="min-h-screen">{main}</main>"#))
}
