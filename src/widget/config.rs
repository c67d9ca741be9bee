use serde::Serialize;

/// Studies every chart opens with.
pub const DEFAULT_STUDIES: [&str; 3] = [
    "MASimple@tv-basicstudies",
    "RSI@tv-basicstudies",
    "MACD@tv-basicstudies",
];

/// Options handed to `new TradingView.widget(..)`.
///
/// Field names serialize to the keys the widget library expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetConfig {
    pub autosize: bool,
    pub symbol: String,
    pub interval: String,
    pub timezone: String,
    pub theme: String,
    pub style: String,
    pub locale: String,
    pub enable_publishing: bool,
    pub withdateranges: bool,
    pub hide_side_toolbar: bool,
    pub allow_symbol_change: bool,
    pub details: bool,
    pub hotlist: bool,
    pub calendar: bool,
    pub container_id: String,
    pub show_popup_button: bool,
    pub popup_width: String,
    pub popup_height: String,
    pub studies: Vec<String>,
}

impl WidgetConfig {
    /// Daily candles with the default studies, bound to `container_id`.
    pub fn new(symbol: impl Into<String>, container_id: impl Into<String>) -> Self {
        Self {
            autosize: true,
            symbol: symbol.into(),
            interval: "D".to_string(),
            timezone: "Etc/UTC".to_string(),
            theme: "dark".to_string(),
            style: "1".to_string(),
            locale: "en".to_string(),
            enable_publishing: false,
            withdateranges: true,
            hide_side_toolbar: false,
            allow_symbol_change: true,
            details: true,
            hotlist: true,
            calendar: true,
            container_id: container_id.into(),
            show_popup_button: true,
            popup_width: "1000".to_string(),
            popup_height: "650".to_string(),
            studies: DEFAULT_STUDIES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }
}
