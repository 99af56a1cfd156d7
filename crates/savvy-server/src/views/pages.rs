use super::{content_section, escape, grid, empty_state, layout};
use savvy_core::card::Card;
use savvy_core::config::SiteConfig;
use savvy_core::document::ContentDocument;
use savvy_core::image::ImageUrlBuilder;
use savvy_core::scaffold::PageManifest;
use savvy_core::section::SectionData;
use savvy_core::types::Section;

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

pub fn home(cfg: &SiteConfig, sections: &[SectionData]) -> String {
    let mut body = String::from(
        "<section class=\"hero\">\n\
         <h1>We design and build products people keep.</h1>\n\
         <p>Ghost Savvy is a studio for brands, products, and the stories between them.</p>\n\
         <a class=\"button\" href=\"/contact\">Start a project</a>\n\
         </section>\n",
    );
    for data in sections {
        body.push_str(&content_section(data));
        body.push('\n');
    }
    layout(cfg, "Home", &body)
}

// ---------------------------------------------------------------------------
// Static marketing pages
// ---------------------------------------------------------------------------

pub fn about(cfg: &SiteConfig) -> String {
    let body = "<section class=\"prose\">\n\
         <h1>About the studio</h1>\n\
         <p>We are a small team of designers and engineers shipping calm,\n\
         durable software for clients and for ourselves.</p>\n\
         <p>Half our week is client work. The other half goes into the Savvy\n\
         Lab, where we build the products we wish existed.</p>\n\
         </section>";
    layout(cfg, "About", body)
}

pub fn services(cfg: &SiteConfig) -> String {
    let body = "<section class=\"prose\">\n\
         <h1>Services</h1>\n\
         <ul class=\"service-list\">\n\
         <li><h3>Product design</h3><p>Research, interface, and identity under one roof.</p></li>\n\
         <li><h3>Engineering</h3><p>Web platforms built to be handed over, not babysat.</p></li>\n\
         <li><h3>Content systems</h3><p>Editorial models your team can actually run.</p></li>\n\
         </ul>\n\
         </section>";
    layout(cfg, "Services", body)
}

pub fn contact(cfg: &SiteConfig) -> String {
    let body = "<section class=\"prose\">\n\
         <h1>Say hello</h1>\n\
         <p>Tell us what you're making. We reply within two working days.</p>\n\
         <form class=\"contact-form\" method=\"post\" action=\"https://formspree.io/f/ghostsavvy\">\n\
         <label>Name <input name=\"name\" required></label>\n\
         <label>Email <input name=\"email\" type=\"email\" required></label>\n\
         <label>Project <textarea name=\"message\" rows=\"6\"></textarea></label>\n\
         <button class=\"button\" type=\"submit\">Send</button>\n\
         </form>\n\
         </section>";
    layout(cfg, "Contact", body)
}

// ---------------------------------------------------------------------------
// Listings and details
// ---------------------------------------------------------------------------

pub fn listing(cfg: &SiteConfig, data: &SectionData) -> String {
    let section = data.spec.section;
    let intro = match section {
        Section::Lab => "Products we build and run ourselves.",
        Section::Impact => "Client work with outcomes we can point at.",
        Section::Hub => "Essays, episodes, and events from the studio.",
    };
    let inner = match data.cards() {
        [] => empty_state(section),
        cards => grid(cards),
    };
    let body = format!(
        "<section class=\"listing\">\n\
         <h1>{}</h1>\n\
         <p class=\"listing-intro\">{}</p>\n{}\n\
         </section>",
        escape(section.heading()),
        intro,
        inner,
    );
    layout(cfg, section.heading(), &body)
}

/// Detail page for a CMS-backed document.
pub fn document_detail(
    cfg: &SiteConfig,
    section: Section,
    doc: &ContentDocument,
    images: &ImageUrlBuilder,
) -> String {
    let card = Card::from_document(doc, section, images);
    let media = match &card.image_url {
        Some(url) => format!(
            "<img class=\"detail-media\" src=\"{}\" alt=\"{}\">",
            escape(url),
            escape(&doc.title)
        ),
        None => String::new(),
    };
    let category = card
        .category
        .as_ref()
        .map(|c| format!("<span class=\"card-category\">{}</span>", escape(c)))
        .unwrap_or_default();
    let description = doc
        .description
        .as_ref()
        .map(|d| format!("<p class=\"detail-description\">{}</p>", escape(d)))
        .unwrap_or_default();
    let video = doc
        .video_url
        .as_ref()
        .map(|v| {
            format!(
                "<a class=\"button\" href=\"{}\" rel=\"noopener\">Watch</a>",
                escape(v)
            )
        })
        .unwrap_or_default();
    let date = doc
        .date
        .or(doc.created_at)
        .map(|d| format!("<time datetime=\"{}\">{}</time>", d.to_rfc3339(), d.format("%B %Y")))
        .unwrap_or_default();

    let body = format!(
        "<article class=\"detail\" data-reveal>\n{media}\n\
         <div class=\"detail-body\">\n{category}\n\
         <h1>{}</h1>\n{date}\n{description}\n{video}\n\
         <a class=\"detail-back\" href=\"{}\">&larr; {}</a>\n\
         </div>\n</article>",
        escape(&doc.title),
        section.listing_path(),
        escape(section.heading()),
    );
    layout(cfg, &doc.title, &body)
}

/// Detail page rendered from a checked-in page manifest instead of the CMS.
pub fn manifest_detail(cfg: &SiteConfig, manifest: &PageManifest) -> String {
    let mut body = format!(
        "<article class=\"detail detail--manifest\" data-reveal>\n\
         <div class=\"detail-body\">\n\
         <h1>{}</h1>\n\
         <p class=\"detail-subheadline\">{}</p>\n",
        escape(&manifest.hero.headline),
        escape(&manifest.hero.subheadline),
    );
    for para in manifest.body.split("\n\n").filter(|p| !p.trim().is_empty()) {
        body.push_str(&format!("<p>{}</p>\n", escape(para.trim())));
    }
    if let Some(cta) = &manifest.cta {
        body.push_str(&format!(
            "<a class=\"button\" href=\"{}\">{}</a>\n",
            escape(&cta.href),
            escape(&cta.label)
        ));
    }
    body.push_str("</div>\n</article>");
    layout(cfg, &manifest.title, &body)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use savvy_core::section::{SectionSpec, SectionState};
    use savvy_core::types::ContentType;

    fn cfg() -> SiteConfig {
        SiteConfig::default()
    }

    fn images() -> ImageUrlBuilder {
        ImageUrlBuilder::new("gs7prj", "production")
    }

    #[test]
    fn home_composes_every_section() {
        let sections: Vec<SectionData> = savvy_core::section::home_sections()
            .into_iter()
            .map(|spec| SectionData {
                spec,
                state: SectionState::Empty,
            })
            .collect();
        let html = home(&cfg(), &sections);
        assert!(html.contains("content-section--lab"));
        assert!(html.contains("content-section--impact"));
        assert!(html.contains("content-section--hub"));
    }

    #[test]
    fn listing_shows_empty_state_for_zero_results() {
        let data = SectionData {
            spec: SectionSpec {
                section: Section::Hub,
                title: "Savvy Hub",
                home_only: false,
                limit: 6,
            },
            state: SectionState::Empty,
        };
        let html = listing(&cfg(), &data);
        assert!(html.contains("empty-state"));
        assert!(!html.contains("class=\"grid\""));
    }

    #[test]
    fn document_detail_escapes_and_links_back() {
        let mut doc = ContentDocument::new("x", ContentType::Project, "Harborlight <Health>");
        doc.description = Some("Cut intake time.".into());
        let html = document_detail(&cfg(), Section::Impact, &doc, &images());
        assert!(html.contains("Harborlight &lt;Health&gt;"));
        assert!(html.contains("href=\"/savvy-impact\""));
    }

    #[test]
    fn manifest_detail_renders_hero_and_cta() {
        let manifest = PageManifest {
            project: "vynl".into(),
            title: "Vynl".into(),
            hero: savvy_core::scaffold::Hero {
                headline: "Vynl".into(),
                subheadline: "Records with friends.".into(),
            },
            body: "First paragraph.\n\nSecond paragraph.".into(),
            cta: Some(savvy_core::scaffold::PageCta {
                label: "Explore the Lab".into(),
                href: "/savvy-lab".into(),
            }),
        };
        let html = manifest_detail(&cfg(), &manifest);
        assert!(html.contains("<h1>Vynl</h1>"));
        assert!(html.contains("<p>First paragraph.</p>"));
        assert!(html.contains("Explore the Lab"));
    }
}
