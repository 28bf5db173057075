use std::sync::LazyLock;
use std::time::Duration;

/// reCAPTCHA's public test key; always passes verification.
static TEST_SITE_KEY: &str = "6LeIxAcTAAAAAJcZVRqyHh71UMIEGNQ_MXjiZKhI";
static DEFAULT_TOKEN_TIMEOUT: Duration = Duration::from_secs(5);

pub static RECAPTCHA_ACTION: &str = "contact_form";

static GLOBAL_SETTINGS: LazyLock<SiteSettings> = LazyLock::new(|| {
    SiteSettings::new(
        option_env!("RECAPTCHA_SITE_KEY"),
        option_env!("RECAPTCHA_TIMEOUT_MS"),
    )
});

/// Settings baked in at compile time so the server and the hydrated client agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    pub recaptcha_site_key: &'static str,
    pub recaptcha_action: &'static str,
    pub token_timeout: Duration,
}

impl SiteSettings {
    fn new(site_key: Option<&'static str>, timeout_ms: Option<&str>) -> Self {
        let token_timeout = timeout_ms
            .and_then(|ms| ms.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TOKEN_TIMEOUT);
        Self {
            recaptcha_site_key: site_key.filter(|k| !k.is_empty()).unwrap_or(TEST_SITE_KEY),
            recaptcha_action: RECAPTCHA_ACTION,
            token_timeout,
        }
    }

    pub fn current() -> &'static SiteSettings {
        &GLOBAL_SETTINGS
    }

    pub fn recaptcha_script_url(&self) -> String {
        format!(
            "https://www.google.com/recaptcha/api.js?render={}",
            self.recaptcha_site_key
        )
    }
}
