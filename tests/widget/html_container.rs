use finboard::widget::html::CONFIG_ATTR;
use finboard::{ChartWidget, HtmlContainer};

#[test]
fn children_are_removed_when_the_guard_drops() {
    let mut el = HtmlContainer::new();
    {
        let mounted = ChartWidget::new("AAPL").mount(&mut el).unwrap().unwrap();
        assert_eq!(mounted.container().children().len(), 1);
        assert!(mounted.container().render().contains(CONFIG_ATTR));
    }
    assert!(el.children().is_empty());
}

#[test]
fn update_leaves_a_single_config_block() {
    let mut el = HtmlContainer::new();
    let mut mounted = ChartWidget::new("AAPL").mount(&mut el).unwrap().unwrap();
    mounted.update(ChartWidget::new("SOLUSDT").stock(false)).unwrap();

    let out = mounted.container().render();
    assert_eq!(mounted.container().children().len(), 1);
    assert!(out.starts_with(r#"<div id="tradingview_SOLUSDT""#));
    assert!(out.contains(r#""symbol":"BINANCE:SOLUSDT""#));
    assert!(!out.contains(r#""symbol":"AAPL""#));
}

#[test]
fn detached_html_container_renders_nothing() {
    let mut el = HtmlContainer::detached();
    assert!(ChartWidget::new("AAPL").mount(&mut el).unwrap().is_none());
    assert!(el.children().is_empty());
}

#[test]
fn markup_breaking_symbols_are_escaped() {
    let out = ChartWidget::new("\"></script><img src=x>").render_html().unwrap();
    assert!(!out.contains("</script><img"));
    assert!(out.contains(r#"id="tradingview_&quot;&gt;&lt;/script&gt;&lt;img src=x&gt;""#));
    assert!(out.contains(r#"</script>"#));
}
