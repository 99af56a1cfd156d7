pub mod pages;

use axum::http::StatusCode;
use savvy_core::card::Card;
use savvy_core::config::SiteConfig;
use savvy_core::section::{SectionData, SectionState};
use savvy_core::types::Section;
use std::fmt::Write as _;

// ---------------------------------------------------------------------------
// Escaping
// ---------------------------------------------------------------------------

/// Minimal HTML escaper for text nodes and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

const NAV_LINKS: &[(&str, &str)] = &[
    ("/about", "About"),
    ("/services", "Services"),
    ("/savvy-lab", "Lab"),
    ("/savvy-hub", "Hub"),
    ("/savvy-impact", "Impact"),
    ("/contact", "Contact"),
];

/// Full page shell: head, nav, footer, and the reveal script that drives
/// the one-shot entrance animations.
pub fn layout(cfg: &SiteConfig, title: &str, body: &str) -> String {
    let site_name = escape(&cfg.site.name);
    let mut nav = String::new();
    for (href, label) in NAV_LINKS {
        let _ = write!(nav, "<a class=\"nav-link\" href=\"{href}\">{label}</a>");
    }
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{} — {}</title>\n\
         <link rel=\"stylesheet\" href=\"/assets/site.css\">\n\
         </head>\n<body>\n\
         <header class=\"site-header\">\n\
         <a class=\"site-logo\" href=\"/\">{}</a>\n\
         <nav class=\"site-nav\">{}</nav>\n\
         </header>\n\
         <main>\n{}\n</main>\n\
         <footer class=\"site-footer\">\n\
         <p>&copy; {} {}</p>\n\
         <a href=\"{}\" rel=\"noopener\">Studio</a>\n\
         </footer>\n\
         <script src=\"/assets/reveal.js\" defer></script>\n\
         </body>\n</html>\n",
        escape(title),
        site_name,
        site_name,
        nav,
        body,
        chrono::Utc::now().format("%Y"),
        site_name,
        escape(&cfg.site.studio_url),
    )
}

// ---------------------------------------------------------------------------
// Cards and grids
// ---------------------------------------------------------------------------

pub fn card(card: &Card) -> String {
    let media = match &card.image_url {
        Some(url) => format!(
            "<img class=\"card-media\" src=\"{}\" alt=\"{}\" loading=\"lazy\">",
            escape(url),
            escape(&card.title)
        ),
        None => "<div class=\"card-media card-media--blank\" aria-hidden=\"true\"></div>"
            .to_string(),
    };
    let category = card
        .category
        .as_ref()
        .map(|c| format!("<span class=\"card-category\">{}</span>", escape(c)))
        .unwrap_or_default();
    let description = card
        .description
        .as_ref()
        .map(|d| format!("<p class=\"card-description\">{}</p>", escape(d)))
        .unwrap_or_default();

    format!(
        "<article class=\"{}\" data-reveal>\n\
         <a class=\"card-link\" href=\"{}\">\n{}\n\
         <div class=\"card-body\">\n{}\
         <h3 class=\"card-title\">{}</h3>\n{}\
         <span class=\"card-cta\">{}</span>\n\
         </div>\n</a>\n</article>",
        card.size.css_class(),
        escape(&card.href),
        media,
        category,
        escape(&card.title),
        description,
        escape(&card.cta_text),
    )
}

pub fn grid(cards: &[Card]) -> String {
    let mut out = String::from("<div class=\"grid\">\n");
    for c in cards {
        out.push_str(&card(c));
        out.push('\n');
    }
    out.push_str("</div>");
    out
}

/// Empty state shown when a section fetched zero documents, or when its
/// fetch failed; the two cases are deliberately indistinguishable here.
pub fn empty_state(section: Section) -> String {
    format!(
        "<div class=\"empty-state\">\n\
         <p class=\"empty-state-copy\">Fresh work is on the way.</p>\n\
         <a class=\"button\" href=\"{}\">Explore {}</a>\n\
         </div>",
        section.listing_path(),
        escape(section.heading()),
    )
}

/// One content section: heading row plus grid or empty state.
pub fn content_section(data: &SectionData) -> String {
    let body = match &data.state {
        SectionState::Empty => empty_state(data.spec.section),
        SectionState::Populated(cards) => grid(cards),
    };
    format!(
        "<section class=\"content-section content-section--{}\">\n\
         <div class=\"content-section-head\">\n\
         <h2>{}</h2>\n\
         <a class=\"content-section-more\" href=\"{}\">View all</a>\n\
         </div>\n{}\n</section>",
        data.spec.section,
        escape(data.spec.title),
        data.spec.section.listing_path(),
        body,
    )
}

// ---------------------------------------------------------------------------
// Not found / error fragments
// ---------------------------------------------------------------------------

/// Not-found fragment with a way back to the parent listing.
pub fn not_found(section: Option<Section>) -> String {
    let (href, label) = match section {
        Some(s) => (s.listing_path(), s.heading()),
        None => ("/", "the home page"),
    };
    format!(
        "<section class=\"not-found\">\n\
         <h1>Not Found</h1>\n\
         <p>That page has moved on, or never existed.</p>\n\
         <a class=\"button\" href=\"{href}\">Back to {label}</a>\n\
         </section>"
    )
}

pub fn error_page(status: StatusCode) -> String {
    if status == StatusCode::NOT_FOUND {
        return not_found(None);
    }
    let copy = if status == StatusCode::BAD_REQUEST {
        "That request didn't make sense to us."
    } else {
        "Something went wrong on our side."
    };
    format!(
        "<section class=\"not-found\">\n\
         <h1>{}</h1>\n\
         <p>{copy}</p>\n\
         <a class=\"button\" href=\"/\">Back to the home page</a>\n\
         </section>",
        status.as_u16()
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
