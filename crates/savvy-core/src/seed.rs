use crate::client::ContentClient;
use crate::document::{ContentDocument, ImageRef};
use crate::error::SavvyError;
use crate::types::ContentType;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// SeedTarget
// ---------------------------------------------------------------------------

/// Which fixture set to push. Selected by the CLI's positional argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedTarget {
    Lab,
    Impact,
    Hub,
    All,
}

impl SeedTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            SeedTarget::Lab => "lab",
            SeedTarget::Impact => "impact",
            SeedTarget::Hub => "hub",
            SeedTarget::All => "all",
        }
    }
}

impl std::str::FromStr for SeedTarget {
    type Err = SavvyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lab" => Ok(SeedTarget::Lab),
            "impact" => Ok(SeedTarget::Impact),
            "hub" => Ok(SeedTarget::Hub),
            "all" => Ok(SeedTarget::All),
            _ => Err(SavvyError::UnknownSection(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn day(y: i32, m: u32, d: u32) -> Option<DateTime<Utc>> {
    Some(NaiveDate::from_ymd_opt(y, m, d)?.and_hms_opt(12, 0, 0)?.and_utc())
}

struct Fixture {
    title: &'static str,
    description: &'static str,
    category: &'static str,
    image: &'static str,
    date: Option<DateTime<Utc>>,
    featured_on_home: bool,
    featured_order: Option<u32>,
    cta: Option<&'static str>,
    highlight: bool,
}

fn build(doc_type: ContentType, idx: usize, f: Fixture) -> ContentDocument {
    let mut doc = ContentDocument::new(format!("seed-{}-{}", doc_type, idx), doc_type, f.title);
    doc.description = Some(f.description.to_string());
    doc.category = Some(f.category.to_string());
    doc.image = Some(ImageRef::new(f.image));
    doc.date = f.date;
    doc.featured = f.featured_order.is_some();
    doc.featured_on_home = f.featured_on_home;
    doc.featured_order = f.featured_order;
    doc.cta_text = f.cta.map(str::to_string);
    doc.highlight = f.highlight;
    doc
}

/// The eight lab products, partitioned across the three audience
/// categories (`developers` / `everyone` / `creators`).
pub fn lab_products() -> Vec<ContentDocument> {
    let fixtures = [
        Fixture {
            title: "Vynl",
            description: "Collect, trade, and spin records with friends.",
            category: "everyone",
            image: "image-labvynl01-1200x800-jpg",
            date: day(2024, 6, 2),
            featured_on_home: true,
            featured_order: Some(1),
            cta: Some("Try Vynl"),
            highlight: true,
        },
        Fixture {
            title: "Trekker",
            description: "Trail journals that write themselves.",
            category: "everyone",
            image: "image-labtrekker02-1200x800-jpg",
            date: day(2024, 5, 14),
            featured_on_home: true,
            featured_order: Some(2),
            cta: None,
            highlight: false,
        },
        Fixture {
            title: "Schema Studio",
            description: "Design content models visually, export them as code.",
            category: "developers",
            image: "image-labschema03-1200x800-jpg",
            date: day(2024, 4, 22),
            featured_on_home: true,
            featured_order: Some(3),
            cta: Some("Open the studio"),
            highlight: false,
        },
        Fixture {
            title: "Hookline",
            description: "Webhook fan-out with replay for small teams.",
            category: "developers",
            image: "image-labhookline04-1200x800-jpg",
            date: day(2024, 3, 9),
            featured_on_home: false,
            featured_order: None,
            cta: None,
            highlight: false,
        },
        Fixture {
            title: "Gridnote",
            description: "A masonry moodboard that stays fast at ten thousand pins.",
            category: "creators",
            image: "image-labgridnote05-1200x800-jpg",
            date: day(2024, 2, 27),
            featured_on_home: true,
            featured_order: Some(4),
            cta: None,
            highlight: false,
        },
        Fixture {
            title: "Palette Pipeline",
            description: "Brand palettes compiled straight into design tokens.",
            category: "creators",
            image: "image-labpalette06-1200x800-jpg",
            date: day(2024, 1, 18),
            featured_on_home: false,
            featured_order: None,
            cta: None,
            highlight: false,
        },
        Fixture {
            title: "Query Bench",
            description: "Profile and diff content queries before they ship.",
            category: "developers",
            image: "image-labquerybench07-1200x800-jpg",
            date: day(2023, 12, 5),
            featured_on_home: false,
            featured_order: None,
            cta: None,
            highlight: false,
        },
        Fixture {
            title: "Sundial",
            description: "A calm scheduling page for studios and their clients.",
            category: "everyone",
            image: "image-labsundial08-1200x800-jpg",
            date: day(2023, 11, 12),
            featured_on_home: true,
            featured_order: Some(5),
            cta: Some("Book time"),
            highlight: false,
        },
    ];
    fixtures
        .into_iter()
        .enumerate()
        .map(|(i, f)| build(ContentType::LabProduct, i + 1, f))
        .collect()
}

/// Client impact cases surfaced on the impact pages and the home page.
pub fn impact_projects() -> Vec<ContentDocument> {
    let fixtures = [
        Fixture {
            title: "Harborlight Health",
            description: "A telehealth rebuild that cut intake time by half.",
            category: "healthcare",
            image: "image-impharbor01-1600x900-jpg",
            date: day(2024, 5, 30),
            featured_on_home: true,
            featured_order: Some(1),
            cta: Some("Read the story"),
            highlight: true,
        },
        Fixture {
            title: "Fieldworks Co-op",
            description: "Farm-share logistics for two hundred member families.",
            category: "community",
            image: "image-impfieldworks02-1600x900-jpg",
            date: day(2024, 4, 3),
            featured_on_home: true,
            featured_order: Some(2),
            cta: None,
            highlight: false,
        },
        Fixture {
            title: "Open Shelf",
            description: "A library discovery layer adopted by three county systems.",
            category: "education",
            image: "image-impopenshelf03-1600x900-jpg",
            date: day(2024, 2, 11),
            featured_on_home: true,
            featured_order: Some(3),
            cta: None,
            highlight: false,
        },
        Fixture {
            title: "Riverline Transit",
            description: "Live arrival boards for a mid-size bus network.",
            category: "civic",
            image: "image-impriverline04-1600x900-jpg",
            date: day(2023, 10, 19),
            featured_on_home: false,
            featured_order: None,
            cta: None,
            highlight: false,
        },
    ];
    fixtures
        .into_iter()
        .enumerate()
        .map(|(i, f)| build(ContentType::Project, i + 1, f))
        .collect()
}

/// Editorial hub items: essays, podcast episodes, and event recaps.
pub fn hub_items() -> Vec<ContentDocument> {
    let fixtures = [
        Fixture {
            title: "Designing in the Open",
            description: "Why we publish our process, misfires included.",
            category: "essay",
            image: "image-hubopen01-1200x675-jpg",
            date: day(2024, 6, 10),
            featured_on_home: true,
            featured_order: Some(1),
            cta: Some("Watch"),
            highlight: true,
        },
        Fixture {
            title: "Field Notes 12: Content Models",
            description: "A working session on schemas that age well.",
            category: "podcast",
            image: "image-hubnotes02-1200x675-jpg",
            date: day(2024, 5, 28),
            featured_on_home: true,
            featured_order: Some(2),
            cta: None,
            highlight: false,
        },
        Fixture {
            title: "Studio Hours: Spring Recap",
            description: "Every question from our spring open office hours.",
            category: "event",
            image: "image-hubhours03-1200x675-jpg",
            date: day(2024, 5, 2),
            featured_on_home: false,
            featured_order: None,
            cta: None,
            highlight: false,
        },
        Fixture {
            title: "The Case for Boring Pipelines",
            description: "Shipping editorial sites without a platform team.",
            category: "essay",
            image: "image-hubboring04-1200x675-jpg",
            date: day(2024, 4, 16),
            featured_on_home: true,
            featured_order: Some(3),
            cta: None,
            highlight: false,
        },
        Fixture {
            title: "Field Notes 13: Motion with Restraint",
            description: "When an entrance animation earns its place.",
            category: "podcast",
            image: "image-hubmotion05-1200x675-jpg",
            date: day(2024, 3, 30),
            featured_on_home: true,
            featured_order: Some(4),
            cta: Some("Listen"),
            highlight: false,
        },
        Fixture {
            title: "Hiring a Studio, Honestly",
            description: "What we tell prospective clients before kickoff.",
            category: "essay",
            image: "image-hubhiring06-1200x675-jpg",
            date: day(2024, 2, 20),
            featured_on_home: false,
            featured_order: None,
            cta: None,
            highlight: false,
        },
    ];
    fixtures
        .into_iter()
        .enumerate()
        .map(|(i, f)| build(ContentType::HubContent, i + 1, f))
        .collect()
}

pub fn fixtures_for(target: SeedTarget) -> Vec<ContentDocument> {
    match target {
        SeedTarget::Lab => lab_products(),
        SeedTarget::Impact => impact_projects(),
        SeedTarget::Hub => hub_items(),
        SeedTarget::All => {
            let mut all = lab_products();
            all.extend(impact_projects());
            all.extend(hub_items());
            all
        }
    }
}

/// Bucket documents by their category label. Documents without a category
/// land under "uncategorized".
pub fn group_by_category(docs: &[ContentDocument]) -> BTreeMap<String, Vec<&ContentDocument>> {
    let mut buckets: BTreeMap<String, Vec<&ContentDocument>> = BTreeMap::new();
    for doc in docs {
        let key = doc
            .category
            .clone()
            .unwrap_or_else(|| "uncategorized".to_string());
        buckets.entry(key).or_default().push(doc);
    }
    buckets
}

// ---------------------------------------------------------------------------
// Seeding engine
// ---------------------------------------------------------------------------

/// Outcome of one seeding run. Failures carry the fixture title and the
/// error text; the run itself is considered complete either way.
#[derive(Debug, Default)]
pub struct SeedReport {
    pub created: Vec<String>,
    pub failed: Vec<(String, String)>,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.created.len() + self.failed.len()
    }
}

/// Push the target's fixtures one at a time, in order. A per-item failure
/// is logged and recorded but never halts the loop; re-running creates
/// duplicates because the CMS assigns fresh ids.
pub async fn run(client: &ContentClient, target: SeedTarget) -> SeedReport {
    let fixtures = fixtures_for(target);
    let mut report = SeedReport::default();

    for doc in &fixtures {
        match client.create(doc).await {
            Ok(created) => {
                tracing::info!(title = %doc.title, id = %created.id, "seeded document");
                report.created.push(created.id);
            }
            Err(e) => {
                tracing::warn!(title = %doc.title, error = %e, "failed to seed document");
                report.failed.push((doc.title.clone(), e.to_string()));
            }
        }
    }
    report
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CmsConfig;

    #[test]
    fn lab_products_partition_into_three_nonempty_buckets() {
        let products = lab_products();
        assert_eq!(products.len(), 8);

        let buckets = group_by_category(&products);
        assert_eq!(buckets.len(), 3);
        for key in ["developers", "everyone", "creators"] {
            assert!(!buckets[key].is_empty(), "empty bucket: {key}");
        }
        let total: usize = buckets.values().map(Vec::len).sum();
        assert_eq!(total, 8);
    }

    #[test]
    fn fixtures_have_unique_slugs_per_type() {
        for target in [SeedTarget::Lab, SeedTarget::Impact, SeedTarget::Hub] {
            let docs = fixtures_for(target);
            let mut slugs: Vec<_> = docs.iter().map(|d| d.route_key().to_string()).collect();
            slugs.sort();
            slugs.dedup();
            assert_eq!(slugs.len(), docs.len(), "duplicate slug in {target:?}");
        }
    }

    #[test]
    fn featured_fixtures_carry_an_order() {
        for doc in fixtures_for(SeedTarget::All) {
            if doc.featured_on_home {
                assert!(
                    doc.featured_order.is_some(),
                    "{} featured without an order",
                    doc.title
                );
            }
        }
    }

    #[test]
    fn all_concatenates_every_set() {
        let all = fixtures_for(SeedTarget::All);
        assert_eq!(
            all.len(),
            lab_products().len() + impact_projects().len() + hub_items().len()
        );
    }

    #[tokio::test]
    async fn run_continues_past_failures() {
        let mut server = mockito::Server::new_async().await;
        // Later-registered mocks match first: one fixture succeeds by body
        // match, everything else falls through to the failure mock.
        let _fail = server
            .mock("POST", "/data/mutate/production")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;
        let _ok = server
            .mock("POST", "/data/mutate/production")
            .match_body(mockito::Matcher::Regex("Harborlight Health".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"results":[{"id":"gen-1"}]}"#)
            .create_async()
            .await;

        let cms = CmsConfig {
            endpoint: Some(server.url()),
            ..Default::default()
        };
        let client = ContentClient::new(&cms).with_token("tok");
        let report = run(&client, SeedTarget::Impact).await;

        assert_eq!(report.total(), impact_projects().len());
        assert_eq!(report.created.len(), 1);
        assert_eq!(report.failed.len(), impact_projects().len() - 1);
    }
}
