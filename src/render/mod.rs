//! Server-side page rendering.
//!
//! The page is a pure function of `PageState` and `Config`. All visible text
//! comes from the dictionary of the state's language and is escaped here.

pub mod assets;
pub mod html;
pub mod modal;
pub mod sections;

use crate::config::Config;
use crate::i18n::LanguageStrings;
use crate::page::PageState;
use anyhow::{Context, Result};
use chrono::Datelike;
use html::escape_html;
use std::fs;
use std::path::Path;

/// Everything a section renderer reads.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub state: &'a PageState,
    pub strings: &'static LanguageStrings,
    pub scene_enabled: bool,
    /// Year shown in the copyright line
    pub year: i32,
}

impl<'a> RenderContext<'a> {
    pub fn new(state: &'a PageState, config: &Config) -> Self {
        Self {
            state,
            strings: state.language().strings(),
            scene_enabled: config.scene_enabled,
            year: chrono::Local::now().year(),
        }
    }
}

/// Render the complete HTML document for `state`.
pub fn render_page(state: &PageState, config: &Config) -> String {
    render_document(&RenderContext::new(state, config))
}

/// Render the complete HTML document from a prepared context.
pub fn render_document(ctx: &RenderContext) -> String {
    let language = ctx.state.language();
    let direction = language.direction();

    let mut page = String::with_capacity(64 * 1024);
    page.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"{}\" dir=\"{}\" class=\"{} {}\">\n<head>\
         <meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{}</title>\
         <meta name=\"description\" content=\"{}\">\
         <meta property=\"og:site_name\" content=\"{}\">\
         <link rel=\"stylesheet\" href=\"/assets/site.css\">\
         <script src=\"/assets/site.js\" defer></script>\
         </head>\n<body id=\"top\">\n",
        language.code(),
        direction.as_str(),
        direction.as_str(),
        language.font_class(),
        escape_html(ctx.strings.hero.title),
        escape_html(ctx.strings.hero.subtitle),
        escape_html(ctx.strings.brand.name)
    ));

    page.push_str(&sections::render_nav(ctx));
    page.push_str(&sections::render_mobile_menu(ctx));
    page.push_str(&sections::render_hero(ctx));
    page.push_str("<main>");
    page.push_str(&sections::render_stats(ctx));
    page.push_str(&sections::render_about(ctx));
    page.push_str(&sections::render_facilities(ctx));
    page.push_str(&sections::render_timeline(ctx));
    page.push_str(&sections::render_dashboard(ctx));
    page.push_str("</main>");
    page.push_str(&sections::render_footer(ctx));
    page.push_str("\n</body>\n</html>\n");
    page
}

/// Write a rendered page to `path`, creating parent directories.
pub fn save_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
