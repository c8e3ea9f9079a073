//! News dialog markup.

use crate::content::Icon;
use crate::render::html::{escape_html, icon};
use crate::render::RenderContext;

/// The news dialog for the current state. Empty while closed.
///
/// The backdrop and the close control are both links to the same state with
/// the dialog dismissed. The content panel is layered above the backdrop, so
/// clicks inside it never reach the backdrop link.
pub fn render_news_modal(ctx: &RenderContext) -> String {
    let state = ctx.state;
    let language = state.language();
    let Some(view) = state.modal().view(language) else {
        return String::new();
    };

    let dismiss = format!("{}#timeline", state.with_news_closed().query_string());
    let dismiss = escape_html(&dismiss);
    let close_label = escape_html(view.close_label);

    let mut html = format!(
        "<div class=\"modal\" role=\"dialog\" aria-modal=\"true\" aria-labelledby=\"news-title\">\
         <a href=\"{}\" class=\"modal-backdrop\" aria-label=\"{}\" tabindex=\"-1\"></a>\
         <div class=\"modal-panel text-{}\">\
         <div class=\"modal-header\"><a href=\"{}\" class=\"modal-close\" aria-label=\"{}\">{}</a></div>\
         <div class=\"modal-body\"><time class=\"modal-date\" datetime=\"{}\">{}</time>\
         <h2 id=\"news-title\" class=\"{}\">{}</h2><div class=\"modal-text\">",
        dismiss,
        close_label,
        language.direction().text_align(),
        dismiss,
        close_label,
        icon(Icon::X),
        view.date,
        view.date,
        language.font_class(),
        escape_html(view.title)
    );

    for paragraph in &view.paragraphs {
        html.push_str(&format!("<p>{}</p>", escape_html(paragraph)));
    }
    html.push_str("</div><div class=\"modal-gallery\">");
    for image in &view.images {
        html.push_str(&format!(
            "<figure class=\"modal-image\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"></figure>",
            escape_html(image.url),
            escape_html(&image.alt)
        ));
    }
    html.push_str("</div></div></div></div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::timeline::NEWS;
    use crate::i18n::Language;
    use crate::page::PageState;

    fn render(state: &PageState) -> String {
        render_news_modal(&RenderContext {
            state,
            strings: state.language().strings(),
            scene_enabled: false,
            year: 2026,
        })
    }

    #[test]
    fn test_closed_modal_renders_nothing() {
        assert_eq!(render(&PageState::default()), "");
    }

    #[test]
    fn test_open_modal_english() {
        let state = PageState::default().with_news(&NEWS[0]);
        let html = render(&state);

        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("aria-modal=\"true\""));
        assert!(html.contains("2025-11-25"));
        assert!(html.contains(&escape_html(NEWS[0].text(Language::ENGLISH).title)));
        assert_eq!(html.matches("<figure").count(), 4);
        assert!(html.contains("alt=\"Event photo 2\""));
        assert_eq!(html.matches("<p>").count(), 2);
    }

    #[test]
    fn test_dismiss_links_close_dialog() {
        let state = PageState::new(Language::ARABIC).with_news(&NEWS[0]);
        let html = render(&state);

        assert!(html.contains("href=\"?lang=ar#timeline\" class=\"modal-backdrop\""));
        assert!(html.contains("href=\"?lang=ar#timeline\" class=\"modal-close\""));
        assert!(html.contains("aria-label=\"إغلاق\""));
        assert!(html.contains("text-right"));
    }
}
