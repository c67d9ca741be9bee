use finboard::{ChartWidget, Container, FbError, WidgetConfig};

#[derive(Debug, Clone, PartialEq)]
enum Op {
    SetId(String),
    Inject(String),
    Clear,
}

/// Container that records what the widget does to it.
#[derive(Default)]
struct Recorder {
    id: String,
    detached: bool,
    fail_inject: bool,
    ops: Vec<Op>,
}

impl Recorder {
    fn detached() -> Self {
        Self {
            detached: true,
            ..Self::default()
        }
    }
}

impl Container for Recorder {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.ops.push(Op::SetId(id.clone()));
        self.id = id;
    }

    fn is_attached(&self) -> bool {
        !self.detached
    }

    fn inject(&mut self, config: &WidgetConfig) -> Result<(), FbError> {
        if self.fail_inject {
            return Err(FbError::Data("widget library missing".into()));
        }
        self.ops.push(Op::Inject(config.symbol.clone()));
        Ok(())
    }

    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }
}

#[test]
fn mount_injects_resolved_symbol() {
    let mut el = Recorder::default();
    {
        let mounted = ChartWidget::new("BTCUSDT").stock(false).mount(&mut el).unwrap().unwrap();
        assert_eq!(mounted.props().symbol, "BTCUSDT");
    }
    assert_eq!(
        el.ops,
        vec![
            Op::SetId("tradingview_BTCUSDT".into()),
            Op::Inject("BINANCE:BTCUSDT".into()),
            Op::Clear,
        ]
    );
}

#[test]
fn detached_container_is_left_alone() {
    let mut el = Recorder::detached();
    let mounted = ChartWidget::new("AAPL").mount(&mut el).unwrap();
    assert!(mounted.is_none());
    drop(mounted);
    assert!(el.ops.is_empty());
}

#[test]
fn symbol_change_clears_before_reinjecting() {
    let mut el = Recorder::default();
    {
        let mut mounted = ChartWidget::new("AAPL").mount(&mut el).unwrap().unwrap();
        mounted.update(ChartWidget::new("MSFT")).unwrap();
        assert_eq!(mounted.props().symbol, "MSFT");
    }
    assert_eq!(
        el.ops,
        vec![
            Op::SetId("tradingview_AAPL".into()),
            Op::Inject("AAPL".into()),
            Op::Clear,
            Op::SetId("tradingview_MSFT".into()),
            Op::Inject("MSFT".into()),
            Op::Clear,
        ]
    );
}

#[test]
fn asset_kind_change_rebuilds() {
    let mut el = Recorder::default();
    {
        let mut mounted = ChartWidget::new("ETHUSDT").mount(&mut el).unwrap().unwrap();
        mounted.update(ChartWidget::new("ETHUSDT").stock(false)).unwrap();
    }
    assert_eq!(
        el.ops,
        vec![
            Op::SetId("tradingview_ETHUSDT".into()),
            Op::Inject("ETHUSDT".into()),
            Op::Clear,
            Op::SetId("tradingview_ETHUSDT".into()),
            Op::Inject("BINANCE:ETHUSDT".into()),
            Op::Clear,
        ]
    );
}

#[test]
fn identical_props_do_not_touch_the_container() {
    let mut el = Recorder::default();
    {
        let mut mounted = ChartWidget::new("AAPL").mount(&mut el).unwrap().unwrap();
        mounted.update(ChartWidget::new("AAPL")).unwrap();
        mounted.update(ChartWidget::new("AAPL").theme("light")).unwrap();
        assert_eq!(mounted.props().theme, "light");
    }
    assert_eq!(
        el.ops,
        vec![
            Op::SetId("tradingview_AAPL".into()),
            Op::Inject("AAPL".into()),
            Op::Clear,
        ]
    );
}

#[test]
fn early_return_still_clears() {
    fn show_then_bail(el: &mut Recorder) -> Result<(), FbError> {
        let _mounted = ChartWidget::new("AAPL").mount(el)?;
        Err(FbError::Data("later step failed".into()))
    }

    let mut el = Recorder::default();
    assert!(show_then_bail(&mut el).is_err());
    assert_eq!(el.ops.last(), Some(&Op::Clear));
}

#[test]
fn failed_inject_clears_and_reports() {
    let mut el = Recorder {
        fail_inject: true,
        ..Recorder::default()
    };
    let err = ChartWidget::new("AAPL").mount(&mut el).err().unwrap();
    assert!(matches!(err, FbError::Data(_)));
    assert_eq!(el.ops, vec![Op::SetId("tradingview_AAPL".into()), Op::Clear]);
}
