//! Renderers for the page sections, in document order.

use crate::content::dashboard::{self, ring_circumference, ring_dash_offset, OVERALL_PROGRESS, RING_RADIUS, ZONE_GRID};
use crate::content::links::{
    contact_mailto, CONTACT_EMAIL, HERO_IMAGE_URL, INDUSTRIAL_AUTHORITY_URL, LOGO_URL, MAP_EMBED_URL, MAP_URL,
};
use crate::content::{facilities, stats, timeline, Icon};
use crate::page::navigation::SectionId;
use crate::page::reveal::{FACILITY_STAGGER, METRIC_STAGGER, TIMELINE_STAGGER, ZONE_STAGGER};
use crate::render::html::{escape_html, external_link_open, icon};
use crate::render::modal::render_news_modal;
use crate::render::RenderContext;
use crate::scene;

fn section_link(section: SectionId, label: &str, class: &str, href_prefix: &str) -> String {
    format!(
        "<a href=\"{}#{}\" class=\"{}\" data-section=\"{}\">{}</a>",
        href_prefix,
        section.as_str(),
        class,
        section.as_str(),
        escape_html(label)
    )
}

fn map_iframe(title: &str) -> String {
    format!(
        "<iframe class=\"map-embed\" src=\"{}\" title=\"{}\" allowfullscreen loading=\"lazy\" \
         referrerpolicy=\"no-referrer-when-downgrade\"></iframe>",
        escape_html(MAP_EMBED_URL),
        escape_html(title)
    )
}

/// Fixed navigation bar: logo, section links, language toggle, menu button.
pub fn render_nav(ctx: &RenderContext) -> String {
    let state = ctx.state;
    let strings = ctx.strings;
    let style = if state.is_scrolled() { "nav-opaque" } else { "nav-transparent" };

    let mut html = format!("<nav id=\"site-nav\" class=\"nav {}\">", style);
    html.push_str("<div class=\"container nav-inner\">");

    // Logo scrolls back to the top
    html.push_str(&format!(
        "<a href=\"#top\" class=\"nav-logo\" title=\"{}\" data-scroll-top>\
         <img src=\"{}\" alt=\"{}\" class=\"logo-image\">\
         <span class=\"wordmark\"><span class=\"wordmark-main\">{}</span>\
         <span class=\"wordmark-sub\">{}</span></span></a>",
        escape_html(strings.nav.back_to_top),
        escape_html(LOGO_URL),
        escape_html(strings.brand.logo_alt),
        escape_html(strings.brand.wordmark),
        escape_html(strings.brand.wordmark_sub)
    ));

    html.push_str("<div class=\"nav-links\">");
    for section in SectionId::ALL {
        html.push_str(&section_link(section, section.label(strings), "nav-link", ""));
    }
    html.push_str(&format!(
        "<a href=\"{}\" class=\"lang-toggle\" hreflang=\"{}\">{}{}</a>",
        escape_html(&state.with_language_toggled().query_string()),
        state.language().toggled().code(),
        icon(Icon::Globe),
        escape_html(strings.nav.language_switch)
    ));
    html.push_str("</div>");

    let (menu_label, menu_icon) = if state.is_menu_open() {
        (strings.nav.close_menu, Icon::X)
    } else {
        (strings.nav.open_menu, Icon::Menu)
    };
    // The script closes the menu in place; these attributes let it restore
    // the closed-menu button without a reload
    let reopen = state.with_menu_closed().with_menu_toggled();
    html.push_str(&format!(
        "<a href=\"{}\" class=\"menu-toggle\" aria-label=\"{}\" aria-expanded=\"{}\" aria-controls=\"mobile-menu\" \
         data-open-href=\"{}\" data-open-label=\"{}\">{}</a>",
        escape_html(&state.with_menu_toggled().query_string()),
        escape_html(menu_label),
        state.is_menu_open(),
        escape_html(&reopen.query_string()),
        escape_html(strings.nav.open_menu),
        icon(menu_icon)
    ));

    html.push_str("</div></nav>");
    html
}

/// Full-screen mobile menu. Empty while closed.
pub fn render_mobile_menu(ctx: &RenderContext) -> String {
    let state = ctx.state;
    if !state.is_menu_open() {
        return String::new();
    }
    let strings = ctx.strings;
    // Following a link lands on the same page with the menu closed
    let closed = state.with_menu_closed().query_string();

    let mut html = String::from("<div id=\"mobile-menu\" class=\"mobile-menu\">");
    for section in SectionId::ALL {
        html.push_str(&section_link(section, section.label(strings), "mobile-link", &escape_html(&closed)));
    }
    html.push_str(&format!(
        "<a href=\"{}\" class=\"lang-toggle lang-toggle-large\" hreflang=\"{}\">{}{}</a>",
        escape_html(&state.with_language_toggled().query_string()),
        state.language().toggled().code(),
        icon(Icon::Globe),
        escape_html(strings.nav.language_switch)
    ));
    html.push_str("</div>");
    html
}

pub fn render_hero(ctx: &RenderContext) -> String {
    let strings = ctx.strings;
    let align = ctx.state.language().direction().text_align();

    let mut html = String::from("<header class=\"hero\"><div class=\"hero-background\">");
    html.push_str(&format!(
        "<img src=\"{}\" alt=\"\" class=\"hero-image\"><div class=\"hero-gradient\"></div>",
        escape_html(HERO_IMAGE_URL)
    ));
    if ctx.scene_enabled {
        html.push_str("<div class=\"hero-scene\" aria-hidden=\"true\">");
        html.push_str(&scene::render_svg());
        html.push_str("</div>");
    }
    html.push_str("</div>");

    html.push_str(&format!(
        "<div class=\"container hero-content text-{}\">\
         <div class=\"hero-badge\"><span class=\"pulse-dot\"></span>{}</div>\
         <h1>{}<br><span class=\"accent\">{}</span></h1>\
         <p class=\"hero-subtitle\">{}</p>\
         <div class=\"hero-actions\">{}{}</div></div></header>",
        align,
        escape_html(strings.hero.group),
        escape_html(strings.hero.title_lead),
        escape_html(strings.hero.title_accent),
        escape_html(strings.hero.subtitle),
        section_link(SectionId::Factories, strings.hero.cta, "button button-primary", ""),
        section_link(SectionId::Contact, strings.nav.contact, "button button-outline", "")
    ));
    html
}

pub fn render_stats(ctx: &RenderContext) -> String {
    let mut html = String::from("<section class=\"stats\"><div class=\"container stats-grid\">");
    for (stat, label) in stats::localized(ctx.state.language()) {
        html.push_str(&format!(
            "<div class=\"stat-card\">{}<div class=\"stat-value\"><span class=\"value\">{}</span>\
             <span class=\"unit\">{}</span></div><div class=\"stat-label\">{}</div>\
             <div class=\"stat-bar\"><div class=\"stat-bar-fill\"></div></div></div>",
            icon(stat.icon),
            escape_html(stat.value),
            escape_html(stat.unit),
            escape_html(label)
        ));
    }
    html.push_str("</div></section>");
    html
}

pub fn render_about(ctx: &RenderContext) -> String {
    let strings = ctx.strings;
    format!(
        "<section id=\"about\" class=\"about\"><div class=\"container about-grid\">\
         <div class=\"about-map\">{}<div class=\"map-caption\">{}{}{}</a></div></div>\
         <div class=\"about-text\"><div class=\"eyebrow\">{}</div><h2>{}</h2><p>{}</p><p>{}</p></div>\
         </div></section>",
        map_iframe(strings.about.map_title),
        external_link_open(MAP_URL, "map-link"),
        icon(Icon::MapPin),
        escape_html(strings.about.open_map),
        escape_html(strings.nav.about),
        escape_html(strings.about.title),
        escape_html(strings.about.text1),
        escape_html(strings.about.text2)
    )
}

pub fn render_facilities(ctx: &RenderContext) -> String {
    let strings = ctx.strings;
    let mut html = format!(
        "<section id=\"factories\" class=\"factories\"><div class=\"container\">\
         <div class=\"section-heading\"><div class=\"eyebrow\">{}</div><h2>{}</h2><p>{}</p></div>\
         <div class=\"facility-grid\">",
        escape_html(strings.factories.label),
        escape_html(strings.factories.title),
        escape_html(strings.factories.desc)
    );

    for (index, (facility, name)) in facilities::localized(ctx.state.language()).enumerate() {
        html.push_str(&format!(
            "<div class=\"facility reveal\" style=\"transition-delay:{}\">",
            FACILITY_STAGGER.css_delay(index)
        ));
        let body = format!(
            "{}<span class=\"facility-number\">{}</span><h3>{}</h3><div class=\"facility-rule\"></div>",
            icon(facility.icon),
            facility.number,
            escape_html(name)
        );
        match facility.url {
            Some(url) => {
                html.push_str(&external_link_open(url, "facility-card is-link"));
                html.push_str(&body);
                html.push_str("</a>");
            }
            None => {
                html.push_str("<div class=\"facility-card\">");
                html.push_str(&body);
                html.push_str("</div>");
            }
        }
        html.push_str("</div>");
    }

    html.push_str("</div></div></section>");
    html
}

pub fn render_timeline(ctx: &RenderContext) -> String {
    let state = ctx.state;
    let strings = ctx.strings;
    let track_class = if state.language().is_rtl() {
        "timeline-track is-reversed"
    } else {
        "timeline-track"
    };

    let mut html = format!(
        "<section id=\"timeline\" class=\"timeline\"><div class=\"container\">\
         <div class=\"section-heading\"><h2>{}</h2><p>{}</p></div>\
         <div class=\"timeline-rail\"><div class=\"timeline-line\" aria-hidden=\"true\"></div>\
         <div class=\"timeline-progress reveal-draw\" style=\"--line-target:{}%\" aria-hidden=\"true\"></div>\
         <ol class=\"{}\">",
        escape_html(strings.timeline.title),
        escape_html(strings.timeline.desc),
        timeline::PROGRESS_LINE_PERCENT,
        track_class
    );

    for (index, (phase, title)) in timeline::localized(state.language()).enumerate() {
        let status = phase.status.as_str();
        html.push_str(&format!(
            "<li class=\"phase phase-{} reveal\" style=\"transition-delay:{}\">\
             <div class=\"phase-node\"><span>{}</span></div>",
            status,
            TIMELINE_STAGGER.css_delay(index),
            escape_html(phase.year)
        ));
        if phase.status == timeline::PhaseStatus::Active {
            html.push_str("<span class=\"pulse-ring\" aria-hidden=\"true\"></span>");
        }
        html.push_str(&format!("<div class=\"phase-card\"><h4>{}</h4>", escape_html(title)));
        match phase.news_record() {
            Some(record) => html.push_str(&format!(
                "<a href=\"{}#timeline\" class=\"news-button\" aria-haspopup=\"dialog\">{}{}</a>",
                escape_html(&state.with_news(record).query_string()),
                icon(Icon::Image),
                escape_html(strings.timeline.view_news)
            )),
            None => html.push_str("<div class=\"phase-rule\"></div>"),
        }
        html.push_str("</div></li>");
    }

    html.push_str("</ol></div></div>");
    html.push_str(&render_news_modal(ctx));
    html.push_str("</section>");
    html
}

pub fn render_dashboard(ctx: &RenderContext) -> String {
    let strings = &ctx.strings.dashboard;
    let circumference = ring_circumference();
    let center = RING_RADIUS + 20.0;

    let mut html = format!(
        "<section id=\"progress\" class=\"dashboard\"><div class=\"container\">\
         <div class=\"dashboard-heading\"><div class=\"live-badge\"><span class=\"pulse-dot\"></span>{}</div>\
         <h2>{}</h2><p>{}</p></div><div class=\"dashboard-grid\">",
        escape_html(strings.live_feed),
        escape_html(strings.title),
        escape_html(strings.desc)
    );

    // Overall progress ring
    html.push_str(&format!(
        "<div class=\"panel ring-panel\"><svg class=\"progress-ring\" viewBox=\"0 0 {size} {size}\" aria-hidden=\"true\">\
         <circle class=\"ring-track\" cx=\"{c}\" cy=\"{c}\" r=\"{r}\"/>\
         <circle class=\"ring-value reveal-draw\" cx=\"{c}\" cy=\"{c}\" r=\"{r}\" stroke-dasharray=\"{circ:.2}\" \
         stroke-dashoffset=\"{circ:.2}\" style=\"--ring-target:{off:.2}\"/>\
         </svg><div class=\"ring-label\"><strong>{pct}<span>%</span></strong><span>{status}</span></div>\
         <div class=\"on-track\">{on_track}</div>\
         <div class=\"schedule\"><span>{start}</span><span>{end}</span></div></div>",
        size = center * 2.0,
        c = center,
        r = RING_RADIUS,
        circ = circumference,
        off = ring_dash_offset(OVERALL_PROGRESS),
        pct = OVERALL_PROGRESS,
        status = escape_html(strings.phase_status),
        on_track = escape_html(strings.on_track),
        start = escape_html(strings.schedule_start),
        end = escape_html(strings.schedule_end),
    ));

    // Per-system progress bars
    html.push_str("<div class=\"panel metrics-panel\"><ul class=\"metric-list\">");
    for (index, (metric, label)) in dashboard::localized(ctx.state.language()).enumerate() {
        html.push_str(&format!(
            "<li class=\"metric reveal\" style=\"transition-delay:{}\">{}<span class=\"metric-label\">{}</span>\
             <span class=\"metric-value\">{}%</span>\
             <div class=\"metric-bar\" role=\"progressbar\" aria-valuenow=\"{}\" aria-valuemin=\"0\" aria-valuemax=\"100\" aria-label=\"{}\">\
             <div class=\"metric-bar-fill\" style=\"--bar-target:{}%;transition-delay:{}\"></div></div></li>",
            METRIC_STAGGER.css_delay(index),
            icon(metric.icon),
            escape_html(label),
            metric.percent,
            metric.percent,
            escape_html(label),
            metric.percent,
            METRIC_STAGGER.css_delay(index)
        ));
    }
    html.push_str("</ul></div>");

    // Zone allocation grid
    html.push_str(&format!(
        "<div class=\"panel zone-panel\"><h3>{}{}<span class=\"live-tag\">{}</span></h3>\
         <div class=\"zone-grid\" style=\"grid-template-columns:repeat({},1fr)\">",
        icon(Icon::Server),
        escape_html(strings.zone_title),
        escape_html(strings.live),
        ZONE_GRID.columns
    ));
    for cell in ZONE_GRID.cells() {
        let class = if cell.allocated { "zone-cell is-allocated" } else { "zone-cell" };
        html.push_str(&format!(
            "<div class=\"{} reveal\" style=\"transition-delay:{}\"></div>",
            class,
            ZONE_STAGGER.css_delay(cell.index)
        ));
    }
    html.push_str(&format!(
        "</div><div class=\"zone-footer\"><span>{}</span>{}</div></div>",
        escape_html(strings.capacity),
        section_link(SectionId::Contact, strings.reserve, "reserve-link", "")
    ));

    html.push_str("</div></div></section>");
    html
}

/// Footer with the contact section anchor.
pub fn render_footer(ctx: &RenderContext) -> String {
    let strings = ctx.strings;
    let copyright = strings.footer.copyright.replace("{year}", &ctx.year.to_string());

    let mut html = String::from("<footer id=\"contact\" class=\"footer\"><div class=\"container footer-grid\">");

    // Brand column
    html.push_str(&format!(
        "<div class=\"footer-brand\"><div class=\"wordmark\"><span class=\"wordmark-main\">{}</span>\
         <span class=\"wordmark-sub\">{}</span></div><p>{}<br>{}</p>\
         <div class=\"copyright\">{}</div></div>",
        escape_html(strings.brand.wordmark),
        escape_html(strings.brand.wordmark_sub),
        escape_html(strings.footer.company),
        escape_html(strings.footer.group),
        escape_html(&copyright)
    ));

    // Contact column
    html.push_str(&format!(
        "<div class=\"footer-contact\"><h3>{}</h3><p>{}</p>\
         {}{}<span>{}</span></a>\
         <div class=\"contact-row\">{}<span>{}</span></div>\
         <a href=\"{}\" class=\"contact-row\">{}<span>{}</span></a>\
         {}{}<span>{}</span></a></div>",
        escape_html(strings.contact.title),
        escape_html(strings.contact.desc),
        external_link_open(MAP_URL, "contact-row"),
        icon(Icon::MapPin),
        escape_html(strings.footer.address),
        icon(Icon::Scroll),
        escape_html(strings.footer.cr),
        escape_html(&contact_mailto()),
        icon(Icon::Mail),
        escape_html(CONTACT_EMAIL),
        external_link_open(INDUSTRIAL_AUTHORITY_URL, "contact-row"),
        icon(Icon::ExternalLink),
        escape_html(strings.contact.authority)
    ));

    // Map column
    html.push_str(&format!(
        "<div class=\"footer-map\"><h3>{}</h3><div class=\"map-frame\">{}{}<span class=\"map-overlay\">{}{}</span></a></div></div>",
        escape_html(strings.contact.location),
        map_iframe(strings.about.map_title),
        external_link_open(MAP_URL, "map-overlay-link"),
        icon(Icon::ExternalLink),
        escape_html(strings.contact.open_maps)
    ));

    html.push_str("</div></footer>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Language, ENGLISH_STRINGS};
    use crate::page::PageState;

    fn context(state: &PageState) -> RenderContext<'_> {
        RenderContext {
            state,
            strings: state.language().strings(),
            scene_enabled: false,
            year: 2026,
        }
    }

    // ==================== Navigation Tests ====================

    #[test]
    fn test_nav_style_follows_scroll_flag() {
        use crate::page::scroll::ScrollObserver;
        let observer = ScrollObserver::default();
        let mut state = PageState::default();

        state.apply_scroll(&observer, 0.0);
        assert!(render_nav(&context(&state)).contains("nav nav-transparent"));

        state.apply_scroll(&observer, 120.0);
        assert!(render_nav(&context(&state)).contains("nav nav-opaque"));
    }

    #[test]
    fn test_nav_language_toggle_link() {
        let mut state = PageState::default();
        state.toggle_menu();
        let html = render_nav(&context(&state));

        // Toggle targets the other language with the menu closed
        assert!(html.contains("href=\"?lang=ar\" class=\"lang-toggle\""));
        assert!(html.contains("العربية"));
        assert!(html.contains("aria-expanded=\"true\""));
    }

    #[test]
    fn test_nav_section_links() {
        let html = render_nav(&context(&PageState::default()));
        for section in SectionId::ALL {
            assert!(html.contains(&format!("data-section=\"{}\"", section.as_str())));
        }
        assert!(html.contains("data-scroll-top"));
    }

    #[test]
    fn test_mobile_menu_only_when_open() {
        let mut state = PageState::default();
        assert!(render_mobile_menu(&context(&state)).is_empty());

        state.toggle_menu();
        let html = render_mobile_menu(&context(&state));
        assert!(html.contains("id=\"mobile-menu\""));
        assert!(html.contains("href=\"?lang=en#about\""));
    }

    // ==================== Hero Tests ====================

    #[test]
    fn test_hero_scene_gate() {
        let state = PageState::default();
        let mut ctx = context(&state);
        assert!(!render_hero(&ctx).contains("hero-scene"));
        assert!(render_hero(&ctx).contains("hero-gradient"));

        ctx.scene_enabled = true;
        let html = render_hero(&ctx);
        assert!(html.contains("hero-scene"));
        assert!(html.contains("<svg class=\"scene\""));
    }

    #[test]
    fn test_hero_alignment_follows_direction() {
        let english = PageState::new(Language::ENGLISH);
        let arabic = PageState::new(Language::ARABIC);
        assert!(render_hero(&context(&english)).contains("text-left"));
        assert!(render_hero(&context(&arabic)).contains("text-right"));
    }

    // ==================== Facility Tests ====================

    #[test]
    fn test_facility_links() {
        let html = render_facilities(&context(&PageState::default()));
        assert_eq!(html.matches("class=\"facility reveal\"").count(), 8);
        assert_eq!(html.matches("facility-card is-link").count(), 1);
        assert!(html.contains("href=\"https://www.nkaluminum.sa\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(html.contains("transition-delay:0.35s"));
    }

    // ==================== Timeline Tests ====================

    #[test]
    fn test_timeline_phases() {
        let html = render_timeline(&context(&PageState::default()));
        assert!(html.contains("phase phase-done"));
        assert_eq!(html.matches("pulse-ring").count(), 1);
        assert!(html.contains("href=\"?lang=en&amp;news=signing-ceremony#timeline\""));
        assert!(!html.contains("role=\"dialog\""));
    }

    #[test]
    fn test_timeline_progress_line() {
        let html = render_timeline(&context(&PageState::default()));
        let line = html.find("class=\"timeline-line\"").unwrap();
        let progress = html.find("class=\"timeline-progress reveal-draw\"").unwrap();
        let track = html.find("class=\"timeline-track").unwrap();

        assert!(line < progress && progress < track);
        assert!(html.contains("--line-target:60%"));
    }

    #[test]
    fn test_menu_toggle_carries_reopen_target() {
        let state = PageState::default().with_menu_toggled();
        let html = render_nav(&context(&state));

        // Open menu: the link closes it, the data attributes reopen it
        assert!(html.contains("href=\"?lang=en\" class=\"menu-toggle\""));
        assert!(html.contains("data-open-href=\"?lang=en&amp;menu=open\""));
        assert!(html.contains(&format!("data-open-label=\"{}\"", ENGLISH_STRINGS.nav.open_menu)));
        assert!(html.contains("icon-x"));
    }

    #[test]
    fn test_timeline_mirrors_in_rtl() {
        let html = render_timeline(&context(&PageState::new(Language::ARABIC)));
        assert!(html.contains("timeline-track is-reversed"));
        assert!(html.contains("صور الحفل"));
    }

    // ==================== Dashboard Tests ====================

    #[test]
    fn test_dashboard_ring_and_grid() {
        let html = render_dashboard(&context(&PageState::default()));
        assert_eq!(html.matches("class=\"zone-cell").count(), 42);
        assert_eq!(html.matches("zone-cell is-allocated").count(), 16);
        assert_eq!(html.matches("class=\"metric reveal\"").count(), 7);
    }

    #[test]
    fn test_dashboard_ring_starts_empty_and_targets_progress() {
        let html = render_dashboard(&context(&PageState::default()));
        let circumference = ring_circumference();

        // Drawn from an empty stroke up to the overall progress
        assert!(html.contains(&format!(
            "stroke-dasharray=\"{0:.2}\" stroke-dashoffset=\"{0:.2}\"",
            circumference
        )));
        assert!(html.contains(&format!("--ring-target:{:.2}", ring_dash_offset(OVERALL_PROGRESS))));
        assert!(html.contains("class=\"ring-value reveal-draw\""));
    }

    #[test]
    fn test_dashboard_bars_grow_with_stagger() {
        let html = render_dashboard(&context(&PageState::default()));

        // No inline final width: the bar grows to its target once revealed
        assert!(!html.contains("style=\"width:"));
        assert!(html.contains("--bar-target:70%;transition-delay:0.00s"));
        assert!(html.contains(&format!("transition-delay:{}", METRIC_STAGGER.css_delay(6))));
        assert_eq!(html.matches("--bar-target:").count(), 7);
    }

    // ==================== Footer Tests ====================

    #[test]
    fn test_footer_contact_details() {
        let html = render_footer(&context(&PageState::default()));
        assert!(html.contains("id=\"contact\""));
        assert!(html.contains("href=\"mailto:Business@everwinpark.com\""));
        assert!(html.contains("© 2026 Everwin Property Company"));
        assert!(html.contains("https://modon.gov.sa"));
        assert!(!html.contains("{year}"));
    }
}
