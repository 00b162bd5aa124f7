mod env {
    pub const API_BASE_URL: Option<&str> = option_env!("MASCOT_CHAT_API_BASE_URL");
    pub const COLLAPSED_ICON: Option<&str> = option_env!("MASCOT_CHAT_COLLAPSED_ICON");
    pub const EXPANDED_ICON: Option<&str> = option_env!("MASCOT_CHAT_EXPANDED_ICON");
}

/// Build-time widget configuration: the backend base URL and the two mascot
/// icon assets (collapsed and expanded). Missing icon files degrade the
/// mascot visually but leave the widget functional.
#[derive(Clone, PartialEq, Debug)]
pub struct WidgetConfig {
    pub api_base_url: String,
    pub collapsed_icon: String,
    pub expanded_icon: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_base_url: env::API_BASE_URL.unwrap_or("http://localhost:5000").to_owned(),
            collapsed_icon: env::COLLAPSED_ICON
                .unwrap_or("images/mascot-closed.png")
                .to_owned(),
            expanded_icon: env::EXPANDED_ICON
                .unwrap_or("images/mascot-open.png")
                .to_owned(),
        }
    }
}

impl WidgetConfig {
    /// Icon for the floating toggle control: exactly one of the two mascot
    /// images, picked by the panel state.
    pub fn mascot_icon(&self, open: bool) -> &str {
        if open {
            &self.expanded_icon
        } else {
            &self.collapsed_icon
        }
    }
}
