// Resource catalog
// Static crisis contacts, wellness apps and articles served by GET /resources

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrisisContact {
    pub name: String,
    pub contact: String,
    pub description: String,
    /// "phone" or "text"
    #[serde(rename = "type")]
    pub contact_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppResource {
    pub name: String,
    pub description: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub category: String,
}

/// The full catalog, immutable for the life of the process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceCatalog {
    pub crisis: Vec<CrisisContact>,
    pub apps: Vec<AppResource>,
    pub articles: Vec<Article>,
}

static CATALOG: Lazy<ResourceCatalog> = Lazy::new(build_catalog);

/// Shared read-only catalog
pub fn catalog() -> &'static ResourceCatalog {
    &CATALOG
}

fn contact(name: &str, contact: &str, description: &str, contact_type: &str) -> CrisisContact {
    CrisisContact {
        name: name.to_string(),
        contact: contact.to_string(),
        description: description.to_string(),
        contact_type: contact_type.to_string(),
    }
}

fn app(name: &str, description: &str, category: &str) -> AppResource {
    AppResource {
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
    }
}

fn article(title: &str, description: &str, category: &str) -> Article {
    Article {
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
    }
}

fn build_catalog() -> ResourceCatalog {
    ResourceCatalog {
        crisis: vec![
            contact(
                "National Suicide Prevention Lifeline",
                "988",
                "24/7 crisis support",
                "phone",
            ),
            contact(
                "Crisis Text Line",
                "Text HOME to 741741",
                "24/7 text-based crisis support",
                "text",
            ),
            contact(
                "SAMHSA National Helpline",
                "1-800-662-4357",
                "Treatment referral and information service",
                "phone",
            ),
        ],
        apps: vec![
            app("Calm", "Meditation and sleep stories", "mindfulness"),
            app("Headspace", "Mindfulness and meditation", "mindfulness"),
            app("Sanvello", "Anxiety and mood tracking", "tracking"),
        ],
        articles: vec![
            article(
                "Understanding Anxiety",
                "Learn about anxiety, its symptoms, and healthy coping strategies.",
                "education",
            ),
            article(
                "Building Resilience",
                "Discover techniques to build emotional resilience and bounce back from challenges.",
                "skills",
            ),
            article(
                "Mindfulness and Meditation",
                "Explore mindfulness practices that can help reduce stress and improve mental well-being.",
                "mindfulness",
            ),
        ],
    }
}
