//! Stylesheet and client script served next to the page.
//!
//! The script only adds progressive behaviour: the opaque navigation style
//! past the scroll threshold, smooth section scrolling with the header
//! allowance, closing the mobile menu in place, keeping the current section
//! across a language switch, and one-shot reveal of animated elements.
//! Every link still works without it.

use crate::config::Config;
use crate::content::Icon;

pub const STYLESHEET: &str = r#":root {
  --teal: #0D9488;
  --sand: #C5A059;
  --slate-50: #F8FAFC;
  --slate-200: #e2e8f0;
  --slate-400: #94a3b8;
  --slate-600: #475569;
  --slate-800: #1e293b;
  --slate-900: #0f172a;
}
* { box-sizing: border-box; }
html { scroll-behavior: auto; }
body { margin: 0; background: var(--slate-50); color: var(--slate-800); }
.font-sans { font-family: "Inter", system-ui, sans-serif; }
.font-arabic { font-family: "Tajawal", "Noto Kufi Arabic", system-ui, sans-serif; }
.text-left { text-align: left; }
.text-right { text-align: right; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }
a { color: inherit; }

.nav { position: fixed; top: 0; left: 0; right: 0; z-index: 50; transition: all .3s; }
.nav-transparent { background: transparent; padding: 1.5rem 0; color: #fff; }
.nav-opaque { background: rgba(255,255,255,.95); backdrop-filter: blur(12px); box-shadow: 0 4px 12px rgba(0,0,0,.08); padding: .5rem 0; color: var(--slate-900); }
.nav-inner { display: flex; justify-content: space-between; align-items: center; }
.nav-logo { display: flex; align-items: center; gap: .75rem; text-decoration: none; }
.logo-image { height: 2.5rem; width: auto; }
.wordmark { display: flex; flex-direction: column; }
.wordmark-main { font-size: 1.5rem; font-weight: 700; line-height: 1; font-family: Georgia, serif; }
.wordmark-sub { font-size: .6rem; font-weight: 700; letter-spacing: .2em; margin-top: .25rem; color: var(--sand); }
.nav-opaque .wordmark-sub { color: var(--teal); }
.nav-links { display: none; align-items: center; gap: 2rem; font-size: .875rem; }
.nav-link { text-transform: uppercase; text-decoration: none; }
.nav-link:hover { color: var(--sand); }
.lang-toggle { display: inline-flex; gap: .5rem; align-items: center; padding: .5rem 1rem; border-radius: 999px; background: rgba(255,255,255,.2); font-size: .75rem; font-weight: 700; text-decoration: none; }
.nav-opaque .lang-toggle { background: #f1f5f9; }
.menu-toggle { padding: .5rem; }
@media (min-width: 768px) { .nav-links { display: flex; } .menu-toggle { display: none; } }

.mobile-menu { position: fixed; inset: 0; z-index: 40; background: #fff; color: var(--slate-900); display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 2rem; font-size: 1.25rem; font-weight: 700; }
.mobile-link { text-decoration: none; }

.hero { position: relative; height: 100vh; display: flex; align-items: center; overflow: hidden; background: linear-gradient(to bottom, var(--slate-50), var(--slate-200)); }
.hero-background { position: absolute; inset: 0; z-index: 0; }
.hero-image { width: 100%; height: 100%; object-fit: cover; }
.hero-gradient { position: absolute; inset: 0; background: linear-gradient(to right, rgba(15,23,42,.9), rgba(15,23,42,.6), rgba(15,23,42,.2)); }
.hero-scene { position: absolute; inset: 0; opacity: .9; pointer-events: none; }
.hero-scene .scene { width: 100%; height: 100%; }
.scene-block { animation: scene-float var(--float-period, 12.566s) ease-in-out infinite; }
@keyframes scene-float {
  0%, 100% { transform: translateY(0); }
  25% { transform: translateY(calc(var(--float-amp) * -1)); }
  75% { transform: translateY(var(--float-amp)); }
}
.hero-content { position: relative; z-index: 10; color: #fff; margin-top: 5rem; }
.hero-badge { display: inline-flex; align-items: center; gap: .5rem; margin-bottom: 1.5rem; padding: .5rem 1rem; border: 1px solid rgba(255,255,255,.2); border-radius: 999px; font-size: .75rem; font-weight: 700; text-transform: uppercase; }
.pulse-dot { width: .5rem; height: .5rem; border-radius: 50%; background: var(--sand); animation: pulse 2s infinite; }
.hero h1 { font-size: clamp(3rem, 7vw, 6rem); line-height: 1.1; margin: 0 0 1.5rem; }
.accent { color: var(--sand); }
.hero-subtitle { font-size: 1.25rem; max-width: 36rem; color: var(--slate-200); }
.hero-actions { display: flex; gap: 1rem; margin-top: 2.5rem; }
.button { padding: 1rem 2rem; border-radius: .5rem; font-weight: 700; text-decoration: none; }
.button-primary { background: var(--teal); color: #fff; }
.button-outline { border: 2px solid #fff; color: #fff; }

.stats { position: relative; z-index: 20; margin: -5rem 1rem 0; background: #fff; border-radius: .75rem; box-shadow: 0 20px 40px rgba(0,0,0,.1); padding: 3rem 0; }
.stats-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.5rem; }
@media (min-width: 1024px) { .stats-grid { grid-template-columns: repeat(3, 1fr); } }
.stat-card { position: relative; padding: 1.5rem; border-radius: .75rem; background: var(--slate-900); color: #cbd5e1; }
.stat-value .value { font-size: 2.5rem; font-weight: 700; color: var(--sand); }
.stat-value .unit { font-size: .875rem; color: #64748b; margin-inline-start: .25rem; }
.stat-bar { height: .25rem; background: var(--slate-800); margin-top: 1rem; border-radius: 999px; overflow: hidden; }
.stat-bar-fill { height: 100%; width: 33%; background: var(--teal); transition: width .7s; }
.stat-card:hover .stat-bar-fill { width: 100%; }

section { padding: 6rem 0; }
.section-heading { text-align: center; margin-bottom: 4rem; }
.eyebrow { font-size: .75rem; font-weight: 700; letter-spacing: .1em; text-transform: uppercase; color: var(--teal); margin-bottom: .75rem; }
.about-grid { display: grid; gap: 3rem; align-items: center; }
@media (min-width: 768px) { .about-grid { grid-template-columns: 5fr 7fr; } }
.about-map, .map-frame { position: relative; aspect-ratio: 4 / 3; border-radius: 1rem; overflow: hidden; }
.map-embed { width: 100%; height: 100%; border: 0; filter: grayscale(1); transition: filter .7s; }
.about-map:hover .map-embed { filter: none; }
.map-caption { position: absolute; bottom: 0; left: 0; right: 0; padding: 1rem; text-align: center; background: rgba(255,255,255,.9); }
.map-link { color: var(--teal); font-weight: 700; }

.facility-grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); }
.facility-card { display: flex; flex-direction: column; height: 100%; padding: 2rem; border: 1px solid var(--slate-200); border-radius: .75rem; background: #fff; text-decoration: none; cursor: default; }
.facility-card.is-link { cursor: pointer; }
.facility-card.is-link .icon { background: var(--teal); color: #fff; }
.facility-number { font-size: 2.25rem; font-weight: 900; color: #f1f5f9; align-self: flex-end; }
.facility-rule { height: .25rem; width: 3rem; background: var(--slate-200); border-radius: 999px; transition: all .5s; }
.facility-card:hover .facility-rule { width: 100%; background: var(--teal); }

.timeline { background: var(--slate-900); color: #fff; overflow: hidden; }
.timeline-rail { position: relative; }
.timeline-line, .timeline-progress { display: none; position: absolute; top: 3rem; inset-inline-start: 0; height: 2px; }
.timeline-line { width: 100%; background: var(--slate-600); opacity: .3; }
.timeline-progress { width: var(--line-target); background: var(--teal); box-shadow: 0 0 10px var(--teal); }
.js .timeline-progress { width: 0; transition: width 1.5s ease-in-out; }
.js .timeline-progress.is-visible { width: var(--line-target); }
.timeline-track { position: relative; z-index: 1; list-style: none; padding: 0; display: flex; flex-direction: column; align-items: center; gap: 3rem; }
@media (min-width: 768px) {
  .timeline-line, .timeline-progress { display: block; }
  .timeline-track { flex-direction: row; justify-content: space-between; }
  .timeline-track.is-reversed { flex-direction: row-reverse; }
}
.phase { position: relative; text-align: center; }
.phase-node { width: 6rem; height: 6rem; border-radius: 50%; display: flex; align-items: center; justify-content: center; border: 4px solid var(--slate-600); background: var(--slate-800); font-weight: 700; }
.phase-active .phase-node { background: var(--teal); border-color: #fff; }
.phase-future { opacity: .6; }
.pulse-ring { position: absolute; top: 0; left: 0; width: 6rem; height: 6rem; border-radius: 50%; background: rgba(13,148,136,.3); animation: ping 1.5s cubic-bezier(0,0,.2,1) infinite; }
.phase-card { margin-top: 1.5rem; padding: 1rem; border-radius: .5rem; background: rgba(255,255,255,.05); }
.news-button { display: inline-flex; gap: .4rem; align-items: center; padding: .25rem .75rem; border: 1px solid rgba(13,148,136,.5); border-radius: 999px; color: var(--teal); font-size: .75rem; font-weight: 700; text-decoration: none; }
.phase-rule { height: 2px; width: 0; background: var(--sand); margin: .5rem auto 0; transition: width .3s; }
.phase:hover .phase-rule { width: 50%; }

.modal { position: fixed; inset: 0; z-index: 100; display: flex; align-items: center; justify-content: center; padding: 1rem; }
.modal-backdrop { position: absolute; inset: 0; background: rgba(15,23,42,.8); backdrop-filter: blur(12px); }
.modal-panel { position: relative; width: 100%; max-width: 64rem; max-height: 90vh; overflow-y: auto; border-radius: 1rem; background: #fff; color: var(--slate-800); }
.modal-header { height: 8rem; position: relative; background: linear-gradient(to right, var(--teal), var(--slate-900)); }
.modal-close { position: absolute; top: 1rem; inset-inline-end: 1rem; padding: .5rem; border-radius: 50%; background: rgba(0,0,0,.2); color: #fff; }
.modal-body { padding: 2.5rem; }
.modal-date { display: inline-block; padding: .25rem .75rem; border-radius: 999px; background: rgba(13,148,136,.1); color: var(--teal); font-size: .75rem; font-weight: 700; }
.modal-gallery { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); }
.modal-image { margin: 0; height: 20rem; border-radius: .75rem; overflow: hidden; background: var(--slate-900); }
.modal-image img { width: 100%; height: 100%; object-fit: contain; }

.dashboard { background: var(--slate-900); color: #cbd5e1; }
.dashboard-grid { display: grid; gap: 1.5rem; }
@media (min-width: 1024px) { .dashboard-grid { grid-template-columns: 1fr 1fr 1fr; } }
.live-badge, .live-tag { display: inline-flex; gap: .5rem; align-items: center; color: var(--teal); font-size: .75rem; font-weight: 700; }
.panel { padding: 2rem; border: 1px solid var(--slate-800); border-radius: 1rem; background: rgba(30,41,59,.5); }
.progress-ring { width: 100%; max-width: 260px; transform: rotate(-90deg); }
.ring-track { fill: none; stroke: var(--slate-800); stroke-width: 12; }
.ring-value { fill: none; stroke: var(--teal); stroke-width: 12; stroke-linecap: round; }
html:not(.js) .ring-value { stroke-dashoffset: var(--ring-target); }
.js .ring-value { transition: stroke-dashoffset 1.5s ease-out; }
.js .ring-value.is-visible { stroke-dashoffset: var(--ring-target); }
.ring-label strong { font-size: 3.75rem; color: #fff; }
.schedule { display: flex; justify-content: space-between; font-size: .75rem; }
.metric-list { list-style: none; padding: 0; display: grid; gap: 1rem; }
.metric-bar { height: .5rem; border-radius: 999px; background: var(--slate-800); overflow: hidden; }
.metric-bar-fill { height: 100%; width: var(--bar-target); background: linear-gradient(to right, var(--teal), var(--sand)); }
.js .metric-bar-fill { width: 0; transition: width 1s ease-out; }
.js .metric.is-visible .metric-bar-fill { width: var(--bar-target); }
.zone-grid { display: grid; gap: .25rem; }
.zone-cell { aspect-ratio: 1; border-radius: .125rem; background: var(--slate-800); }
.zone-cell.is-allocated { background: var(--teal); }
.zone-footer { display: flex; justify-content: space-between; margin-top: 1rem; font-size: .75rem; }

.footer { background: #fff; color: var(--slate-600); padding: 4rem 0; border-top: 1px solid var(--slate-200); }
.footer-grid { display: grid; gap: 3rem; }
@media (min-width: 768px) { .footer-grid { grid-template-columns: repeat(3, 1fr); } }
.footer .wordmark-main { color: var(--slate-900); font-size: 1.875rem; }
.footer .wordmark-sub { color: var(--teal); }
.contact-row { display: flex; gap: .75rem; align-items: flex-start; margin-bottom: 1rem; text-decoration: none; }
.copyright { font-size: .75rem; color: var(--slate-400); }
.map-frame { aspect-ratio: auto; height: 12rem; border: 1px solid var(--slate-200); }
.map-frame .map-embed { filter: none; }
.map-overlay-link { position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; opacity: 0; transition: opacity .3s; }
.map-frame:hover .map-overlay-link { opacity: 1; background: rgba(0,0,0,.1); }
.map-overlay { padding: .5rem 1rem; border-radius: 999px; background: #fff; font-size: .75rem; font-weight: 700; }

.icon { display: inline-block; width: 1em; height: 1em; vertical-align: -0.125em; }

.js .reveal { opacity: 0; transform: translateY(20px); transition-property: opacity, transform; transition-duration: .5s; }
.js .reveal.is-visible { opacity: 1; transform: none; }

@keyframes pulse { 50% { opacity: .5; } }
@keyframes ping { 75%, 100% { transform: scale(1.5); opacity: 0; } }

@media (prefers-reduced-motion: reduce) {
  .scene-block, .pulse-dot, .pulse-ring { animation: none; }
  .js .reveal { opacity: 1; transform: none; transition: none; }
  .js .ring-value { stroke-dashoffset: var(--ring-target); transition: none; }
  .js .metric-bar-fill { width: var(--bar-target); transition: none; }
  .js .timeline-progress { width: var(--line-target); transition: none; }
}
"#;

/// Client script with the page behaviour constants baked in.
pub fn site_script(config: &Config) -> String {
    format!(
        r##"(function () {{
  "use strict";
  var SCROLL_THRESHOLD = {threshold};
  var HEADER_OFFSET = {offset};
  var root = document.documentElement;
  root.classList.add("js");

  var nav = document.getElementById("site-nav");
  function onScroll() {{
    if (!nav) return;
    var scrolled = window.scrollY > SCROLL_THRESHOLD;
    nav.classList.toggle("nav-opaque", scrolled);
    nav.classList.toggle("nav-transparent", !scrolled);
  }}
  window.addEventListener("scroll", onScroll, {{ passive: true }});
  onScroll();

  root.style.scrollPaddingTop = HEADER_OFFSET + "px";

  function closeMenu() {{
    var menu = document.getElementById("mobile-menu");
    if (!menu) return;
    menu.remove();
    var toggle = document.querySelector(".menu-toggle");
    if (toggle) {{
      toggle.setAttribute("aria-expanded", "false");
      toggle.setAttribute("href", toggle.getAttribute("data-open-href"));
      toggle.setAttribute("aria-label", toggle.getAttribute("data-open-label"));
      var glyph = toggle.querySelector(".icon");
      if (glyph) glyph.classList.replace("icon-{open_icon}", "icon-{closed_icon}");
    }}
    var url = new URL(window.location.href);
    if (url.searchParams.has("menu")) {{
      url.searchParams.delete("menu");
      history.replaceState(null, "", url.pathname + url.search + url.hash);
    }}
  }}

  function currentSection() {{
    var current = "";
    document.querySelectorAll(".nav-links [data-section]").forEach(function (link) {{
      var section = document.getElementById(link.getAttribute("data-section"));
      if (section && section.getBoundingClientRect().top - HEADER_OFFSET <= 1) {{
        current = section.id;
      }}
    }});
    return current;
  }}

  document.addEventListener("click", function (event) {{
    var toggle = event.target.closest(".lang-toggle");
    if (!toggle) return;
    var section = currentSection();
    if (section) {{
      toggle.setAttribute("href", toggle.getAttribute("href").split("#")[0] + "#" + section);
    }}
  }});

  document.addEventListener("click", function (event) {{
    var link = event.target.closest("[data-section], [data-scroll-top]");
    if (!link) return;
    event.preventDefault();
    closeMenu();
    if (link.hasAttribute("data-scroll-top")) {{
      window.scrollTo({{ top: 0, behavior: "smooth" }});
      return;
    }}
    var target = document.getElementById(link.getAttribute("data-section"));
    if (!target) return;
    var top = target.getBoundingClientRect().top + window.scrollY - HEADER_OFFSET;
    window.scrollTo({{ top: top, behavior: "smooth" }});
  }});

  var pending = document.querySelectorAll(".reveal, .reveal-draw");
  if (!("IntersectionObserver" in window)) {{
    pending.forEach(function (el) {{ el.classList.add("is-visible"); }});
    return;
  }}
  var observer = new IntersectionObserver(function (entries) {{
    entries.forEach(function (entry) {{
      if (!entry.isIntersecting) return;
      entry.target.classList.add("is-visible");
      observer.unobserve(entry.target);
    }});
  }});
  pending.forEach(function (el) {{ observer.observe(el); }});
}})();
"##,
        threshold = config.scroll_threshold,
        offset = config.header_offset,
        open_icon = Icon::X.name(),
        closed_icon = Icon::Menu.name()
    )
}
