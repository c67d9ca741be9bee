//! Market news list shown on the dashboard.

mod model;

pub use model::NewsItem;

use crate::markup::escape_html;

pub const MARKET_NEWS: [NewsItem; 5] = [
    NewsItem {
        title: "Fed signals potential rate cuts in coming months",
        time: "2 hours ago",
        source: "Financial Times",
    },
    NewsItem {
        title: "Tech stocks rally as inflation data shows cooling",
        time: "4 hours ago",
        source: "Bloomberg",
    },
    NewsItem {
        title: "Bitcoin volatility increases amid regulatory concerns",
        time: "6 hours ago",
        source: "CoinDesk",
    },
    NewsItem {
        title: "Major bank earnings exceed analyst expectations",
        time: "8 hours ago",
        source: "CNBC",
    },
    NewsItem {
        title: "New AI trading algorithms show promising results",
        time: "10 hours ago",
        source: "TechCrunch",
    },
];

pub fn market_news() -> &'static [NewsItem] {
    &MARKET_NEWS
}

/// Renders `items` as the dashboard news list. Titles carry the hover cue.
pub fn render_news_list(items: &[NewsItem]) -> String {
    let mut out = String::from(r#"<div class="space-y-4">"#);
    for item in items {
        out.push_str(&format!(
            concat!(
                r#"<div class="border-b border-border/40 pb-3 last:border-0 last:pb-0">"#,
                r#"<h3 class="font-medium hover:text-blue-400 cursor-pointer transition-colors">{}</h3>"#,
                r#"<div class="flex justify-between text-xs text-muted-foreground mt-1">"#,
                r#"<span>{}</span><span>{}</span></div></div>"#
            ),
            escape_html(item.title),
            escape_html(item.time),
            escape_html(item.source),
        ));
    }
    out.push_str("</div>");
    out
}
