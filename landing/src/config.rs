// Page configuration: theme palette and build-time site settings

use reachout_form::config::{ENDPOINT_KEY, PUBLIC_KEY_KEY, SERVICE_ID_KEY, TEMPLATE_ID_KEY};
use reachout_form::EmailConfig;

/// Colour palette and typography, exposed to the stylesheet as CSS custom
/// properties on the render root.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub brand: &'static str,
    pub brand_hover: &'static str,
    pub danger: &'static str,
    pub muted: &'static str,
    pub font_family: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#1976d2",
            secondary: "#dc004e",
            brand: "#2E1F47",
            brand_hover: "#443365",
            danger: "#ef4444",
            muted: "#64748B",
            font_family: r#""Roboto", "Helvetica", "Arial", sans-serif"#,
        }
    }
}

impl Theme {
    pub fn css_vars(&self) -> String {
        format!(
            "--color-primary: {}; --color-secondary: {}; --color-brand: {}; \
             --color-brand-hover: {}; --color-danger: {}; --color-muted: {}; \
             --font-family: {};",
            self.primary,
            self.secondary,
            self.brand,
            self.brand_hover,
            self.danger,
            self.muted,
            self.font_family,
        )
    }
}

/// Settings baked in at compile time (`EMAILJS_*`, `LANDING_WHATSAPP_NUMBER`).
#[derive(Clone, Debug, Default)]
pub struct SiteConfig {
    /// `None` when credentials are missing; the form then fails every send.
    pub email: Option<EmailConfig>,
    pub whatsapp_number: Option<&'static str>,
}

impl SiteConfig {
    pub fn from_build() -> Self {
        let email = match EmailConfig::from_lookup(build_env) {
            Ok(config) => {
                tracing::info!(service = %config.service_id, "email dispatch configured");
                Some(config)
            }
            Err(err) => {
                tracing::error!(error = %err, "email dispatch disabled");
                None
            }
        };

        Self {
            email,
            whatsapp_number: option_env!("LANDING_WHATSAPP_NUMBER").filter(|n| !n.is_empty()),
        }
    }
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        SERVICE_ID_KEY => option_env!("EMAILJS_SERVICE_ID"),
        TEMPLATE_ID_KEY => option_env!("EMAILJS_TEMPLATE_ID"),
        PUBLIC_KEY_KEY => option_env!("EMAILJS_PUBLIC_KEY"),
        ENDPOINT_KEY => option_env!("EMAILJS_ENDPOINT"),
        _ => None,
    };
    value.map(str::to_string)
}
