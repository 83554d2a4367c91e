//! Static landing-page copy and the featured-templates strip.

use vivento_api::ApiError;
use vivento_types::Template;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        title: "Canva Tipli Editor",
        description: "Drag & drop ilə dəvətnamələrinizi asanlıqla dizayn edin.",
    },
    Feature {
        title: "Qonaq İdarəetməsi",
        description: "Qonaqlarınızı əlavə edin, RSVP cavablarını izləyin.",
    },
    Feature {
        title: "Asan Paylaşım",
        description: "WhatsApp və email ilə bir kliklə paylaşın.",
    },
    Feature {
        title: "Mobil Uyğun",
        description: "Bütün cihazlarda mükəmməl görünən dizayn.",
    },
    Feature {
        title: "QR Kod",
        description: "Hər dəvətnamə üçün unikal QR kod.",
    },
    Feature {
        title: "Real-vaxt RSVP",
        description: "Qonaqlarınızdan dərhal cavab alın.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPlan {
    pub name: &'static str,
    /// AZN per month, as displayed.
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

pub const PRICING_PLANS: [PricingPlan; 3] = [
    PricingPlan {
        name: "Pulsuz",
        price: "0",
        features: &[
            "1 tədbir",
            "Maksimum 50 dəvətnamə",
            "Əsas şablonlar",
            "WhatsApp paylaşımı",
        ],
        popular: false,
    },
    PricingPlan {
        name: "Premium",
        price: "9.99",
        features: &[
            "Limitsiz tədbir",
            "Limitsiz dəvətnamə",
            "Premium şablonlar",
            "Email & WhatsApp",
            "QR kod generasiyası",
            "Detallı statistikalar",
        ],
        popular: true,
    },
    PricingPlan {
        name: "VIP",
        price: "19.99",
        features: &[
            "Bütün Premium xüsusiyyətlər",
            "Şəkil və video qalereya",
            "Öz brendinizi əlavə edin",
            "Priority dəstək",
        ],
        popular: false,
    },
];

/// How many templates the landing strip shows.
pub const FEATURED_TEMPLATE_COUNT: usize = 4;

/// Shown until (or instead of, if it fails) the templates fetch.
#[must_use]
pub fn builtin_templates() -> Vec<Template> {
    [
        ("builtin-toy", "Toy dəvətnaməsi", "toy", false),
        ("builtin-nisan", "Nişan mərasimi", "nişan", true),
        ("builtin-dogum", "Doğum günü", "doğum_günü", false),
        ("builtin-korporativ", "Korporativ tədbir", "korporativ", true),
    ]
    .into_iter()
    .map(|(id, name, category, is_premium)| Template {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        thumbnail_url: String::new(),
        is_premium,
    })
    .collect()
}

#[derive(Debug)]
pub struct FeaturedTemplates {
    templates: Vec<Template>,
    from_backend: bool,
}

impl Default for FeaturedTemplates {
    fn default() -> Self {
        Self {
            templates: builtin_templates(),
            from_backend: false,
        }
    }
}

impl FeaturedTemplates {
    #[must_use]
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    #[must_use]
    pub fn from_backend(&self) -> bool {
        self.from_backend
    }

    pub fn apply_fetch(&mut self, result: Result<Vec<Template>, ApiError>) {
        match result {
            Ok(templates) if !templates.is_empty() => {
                self.templates = templates
                    .into_iter()
                    .take(FEATURED_TEMPLATE_COUNT)
                    .collect();
                self.from_backend = true;
            }
            Ok(_) => {
                tracing::debug!("Backend has no templates; keeping built-in showcase");
            }
            Err(err) => {
                tracing::warn!("Template fetch failed: {err}");
            }
        }
    }
}
