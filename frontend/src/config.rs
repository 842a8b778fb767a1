use log::Level;

/// Web3Forms relay that receives the contact form.
pub const FORM_RELAY_URL: &str = "https://api.web3forms.com/submit";

/// Shown to the visitor whenever the relay can't take the message.
pub const FALLBACK_EMAIL: &str = "yukto.in@gmail.com";

pub const FORM_SUBJECT: &str = "New contact form submission - Yukto";
pub const FORM_FROM_NAME: &str = "Yukto Website";

/// How long a success/error message stays up.
pub const STATUS_CLEAR_MS: u32 = 5_000;

pub const NAV_SHADOW_AFTER_PX: f64 = 50.0;
pub const NAV_FIXED_OFFSET_PX: f64 = 80.0;
pub const SECTION_ACTIVE_OFFSET_PX: f64 = 100.0;
pub const NAV_HIGHLIGHT_DEBOUNCE_MS: u32 = 100;
pub const SCROLL_TOP_AFTER_PX: f64 = 500.0;

pub fn get_access_key() -> &'static str {
    option_env!("WEB3FORMS_ACCESS_KEY").unwrap_or("")
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
