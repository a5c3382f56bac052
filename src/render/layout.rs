//! Whole-page views: the loading, error and ready layouts plus the document shell.

use crate::config::site::SiteConfig;
use crate::core::page::LoadState;
use crate::core::progress;
use crate::core::theme::{RootClassMarker, ThemeController};
use crate::domain::model::PortfolioData;
use crate::render::card::render_cards;
use crate::render::external_link;
use crate::render::icons::Icon;
use crate::render::timeline::render_timeline;
use chrono::{Datelike, Utc};
use maud::{html, Markup, PreEscaped, DOCTYPE};

pub const LOADING_TEXT: &str = "Loading Portfolio...";
pub const ERROR_HEADING: &str = "Oops! Something went wrong.";

/// Everything a view needs besides the load state.
pub struct PageContext<'a> {
    pub site: &'a SiteConfig,
    pub root_class: Option<&'static str>,
    pub dark: bool,
    pub progress: f64,
    pub year: i32,
}

impl<'a> PageContext<'a> {
    pub fn new(site: &'a SiteConfig, theme: &ThemeController<RootClassMarker>) -> Self {
        Self {
            site,
            root_class: theme.marker().class(),
            dark: theme.is_dark(),
            progress: 0.0,
            year: Utc::now().year(),
        }
    }

    pub fn with_progress(mut self, percent: f64) -> Self {
        self.progress = percent;
        self
    }
}

pub fn render_document(state: &LoadState, ctx: &PageContext<'_>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" class=[ctx.root_class] {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (ctx.site.site.title) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                @match state {
                    LoadState::Loading => { (loading_view(ctx.progress)) }
                    LoadState::Error(message) => { (error_view(message)) }
                    LoadState::Ready(data) => { (ready_view(data, ctx)) }
                }
                script { (PreEscaped(TOGGLE_SCRIPT)) }
            }
        }
    }
}

fn loading_view(percent: f64) -> Markup {
    let shown = percent.round() as u32;
    html! {
        main class="view view--loading" {
            div class="spinner" {}
            p class="pulse" { (LOADING_TEXT) }
            div class="progress" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow=(shown) {
                div class="progress-bar" style={ "width: " (shown) "%" } {}
            }
            p class="progress-caption" { (shown) "% " (progress::caption(percent)) }
        }
    }
}

fn error_view(message: &str) -> Markup {
    html! {
        main class="view view--error" {
            h2 { (ERROR_HEADING) }
            p { (message) }
        }
    }
}

fn ready_view(data: &PortfolioData, ctx: &PageContext<'_>) -> Markup {
    let owner = &ctx.site.owner;
    let name = data.profile.name.as_deref().unwrap_or(&owner.name);
    let image = data.profile.image.as_deref().unwrap_or(&owner.image);
    let about = data.profile.about.as_deref().unwrap_or(&owner.about);

    html! {
        div class="page" {
            header class="site-header" {
                h1 class="owner-name" { (name) }
                div class="header-actions" {
                    a class="resume-button" href=(ctx.site.site.resume_href())
                        target="_blank" rel="noopener noreferrer"
                        download=(ctx.site.site.resume_download_name) {
                        "Download resume"
                    }
                    (theme_toggle(ctx.dark))
                }
            }

            section class="hero" {
                div class="hero-image" {
                    img src=(image) alt="Profile" referrerpolicy="no-referrer";
                }
                div class="hero-text" {
                    h2 { "Hello...👋" }
                    p class="about" { (about) }
                }
            }

            section class="experience" {
                h2 { "Experience" }
                (render_timeline(&data.experience))
            }

            section class="work" {
                h2 { "Work" }
                (render_cards(&data.work))
            }

            (footer(image, ctx))
        }
    }
}

fn theme_toggle(dark: bool) -> Markup {
    let label = if dark { "Switch to light mode" } else { "Switch to dark mode" };
    let pressed = if dark { "true" } else { "false" };
    html! {
        button class="theme-toggle" type="button" data-theme-toggle aria-label=(label) aria-pressed=(pressed) {
            (Icon::Sun.render(20))
            (Icon::Moon.render(20))
        }
    }
}

fn footer(image: &str, ctx: &PageContext<'_>) -> Markup {
    let links = &ctx.site.links;
    html! {
        footer class="site-footer" {
            div class="footer-image" {
                img src=(image) alt="Footer Profile" referrerpolicy="no-referrer";
            }
            nav class="footer-links" {
                a class="footer-link" href={ "mailto:" (links.email) } {
                    (Icon::Mail.render(18))
                    span { (links.email) }
                }
                span class="separator" { "|" }
                (external_link(&links.linkedin, "LinkedIn", Icon::Linkedin, "footer-link"))
                span class="separator" { "|" }
                (external_link(&links.github, "GitHub", Icon::Github, "footer-link"))
            }
            div class="footer-note" { (links.credit) " · " (ctx.year) }
        }
    }
}

const TOGGLE_SCRIPT: &str = r#"
document.querySelectorAll('[data-theme-toggle]').forEach(function (button) {
  button.addEventListener('click', function () {
    var dark = document.documentElement.classList.toggle('dark');
    button.setAttribute('aria-pressed', String(dark));
    button.setAttribute('aria-label', dark ? 'Switch to light mode' : 'Switch to dark mode');
  });
});
"#;

const STYLESHEET: &str = r#"
*, *::before, *::after { box-sizing: border-box; }
html { --bg: #e7e5e4; --fg: #111827; --muted: #4b5563; --line: #d1d5db; --card: #f3f4f6; --accent: #2563eb; }
html.dark { --bg: #111827; --fg: #ffffff; --muted: #9ca3af; --line: #374151; --card: #1f2937; }
body { margin: 0; min-height: 100vh; background: var(--bg); color: var(--fg); font-family: system-ui, sans-serif; transition: background-color .3s, color .3s; }
a { color: inherit; }
.view { height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 0 1rem; text-align: center; }
.view--error { background: #fef2f2; color: #dc2626; }
.spinner { width: 3rem; height: 3rem; border-radius: 50%; border-bottom: 2px solid var(--accent); animation: spin 1s linear infinite; margin-bottom: 1rem; }
.pulse { animation: pulse 2s ease-in-out infinite; }
.progress { width: 16rem; height: .375rem; background: var(--line); border-radius: 999px; overflow: hidden; }
.progress-bar { height: 100%; background: var(--accent); transition: width .2s; }
.progress-caption { font-size: .75rem; opacity: .6; }
.page { max-width: 72rem; margin: 0 auto; padding: 3rem 1.5rem; }
.site-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 5rem; }
.header-actions { display: flex; align-items: center; gap: 1rem; }
.resume-button { padding: .5rem 1rem; border: 1px solid var(--line); border-radius: .5rem; font-size: .875rem; text-decoration: none; }
.theme-toggle { padding: .5rem; border: 0; border-radius: .5rem; background: var(--fg); color: var(--bg); cursor: pointer; }
html.dark .icon-moon, html:not(.dark) .theme-toggle .icon-sun { display: none; }
.hero { display: flex; flex-direction: column; align-items: center; gap: 5rem; margin-bottom: 5rem; }
.hero-image { width: 16rem; height: 16rem; flex-shrink: 0; border-radius: 1rem; overflow: hidden; background: var(--card); }
.hero-image img, .footer-image img { width: 100%; height: 100%; object-fit: cover; }
.about { font-size: 1.125rem; line-height: 1.6; opacity: .8; }
section { margin-bottom: 5rem; }
.timeline { position: relative; max-width: 42rem; margin: 0 auto; padding: 5rem 0 2.5rem; }
.timeline-axis { position: absolute; left: 50%; top: 0; height: 100%; width: 2px; transform: translateX(-50%); background: var(--line); }
.timeline-rows { display: flex; flex-direction: column; gap: 3rem; }
.timeline-row { position: relative; display: flex; align-items: center; width: 100%; }
.timeline-row--right { flex-direction: row-reverse; }
.timeline-content, .timeline-spacer { width: 50%; }
.timeline-row--left .timeline-content { padding-right: 2rem; text-align: right; }
.timeline-row--right .timeline-content { padding-left: 2rem; text-align: left; }
.timeline-role { margin: 0; font-size: 1.125rem; }
.timeline-company { margin: .25rem 0 0; font-size: .875rem; opacity: .7; }
.timeline-year { margin: .25rem 0 0; font-size: .75rem; opacity: .5; }
.timeline-marker { position: absolute; left: 50%; transform: translateX(-50%); z-index: 10; display: flex; align-items: center; justify-content: center; }
.marker { display: block; border-radius: 50%; }
.marker--past { width: 1rem; height: 1rem; background: var(--fg); border: 4px solid var(--bg); }
.marker--future { position: relative; display: flex; align-items: center; justify-content: center; }
.marker-ping { position: absolute; width: 2rem; height: 2rem; border-radius: 50%; background: var(--line); opacity: .75; animation: ping 1s cubic-bezier(0, 0, .2, 1) infinite; }
.marker-core { position: relative; width: 1.25rem; height: 1.25rem; border-radius: 50%; background: var(--bg); border: 2px solid var(--fg); }
.card-grid { display: grid; grid-template-columns: 1fr; gap: 5rem; }
.card { background: var(--card); border-radius: .5rem; padding: 1.5rem; transition: background-color .3s; }
.card-title { margin: 0 0 .5rem; font-size: 1.125rem; }
.card-description { margin: 0 0 1rem; font-size: .875rem; color: var(--muted); display: -webkit-box; -webkit-line-clamp: 2; -webkit-box-orient: vertical; overflow: hidden; }
.card-links { display: flex; gap: 1rem; }
.site-footer { display: flex; flex-direction: column; align-items: center; gap: 1.5rem; padding-top: 2.5rem; border-top: 1px solid var(--line); }
.footer-image { width: 6rem; height: 6rem; border-radius: 50%; overflow: hidden; background: var(--card); }
.footer-links { display: flex; flex-wrap: wrap; justify-content: center; align-items: center; gap: 1rem; width: 100%; }
.footer-link { display: flex; align-items: center; gap: .5rem; font-size: .875rem; text-decoration: none; }
.footer-link:hover { color: var(--accent); }
.separator { color: var(--line); }
.footer-note { opacity: .6; }
@media (min-width: 768px) {
  .hero { flex-direction: row; }
  .about { width: 75%; }
  .card-grid { grid-template-columns: repeat(2, 1fr); }
}
@keyframes spin { to { transform: rotate(360deg); } }
@keyframes pulse { 50% { opacity: .5; } }
@keyframes ping { 75%, 100% { transform: scale(2); opacity: 0; } }
"#;
