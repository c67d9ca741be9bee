//! TradingView chart widget wrapper.
//!
//! [`ChartWidget`] holds the props (symbol and asset kind), [`Container`] is the element the
//! widget renders into, and [`MountedChart`] ties the injected configuration to the lifetime of a
//! borrow of that element: updating the props clears before re-injecting, and dropping the guard
//! clears on every exit path.

mod config;
pub mod html;

pub use config::{DEFAULT_STUDIES, WidgetConfig};
pub use html::HtmlContainer;

use crate::core::FbError;

/// Exchange prefix applied to non-stock symbols.
pub const CRYPTO_EXCHANGE_PREFIX: &str = "BINANCE:";

/// The element a chart widget is rendered into.
pub trait Container {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
    /// Whether the element is currently part of a document.
    fn is_attached(&self) -> bool;
    /// Hands a configuration to the widget library for this element.
    fn inject(&mut self, config: &WidgetConfig) -> Result<(), FbError>;
    /// Removes everything previously injected.
    fn clear(&mut self);
}

/// Props of a chart widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartWidget {
    pub symbol: String,
    pub is_stock: bool,
    pub theme: String,
}

impl ChartWidget {
    /// A stock chart for `symbol`.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            is_stock: true,
            theme: "dark".to_string(),
        }
    }

    pub fn stock(mut self, yes: bool) -> Self {
        self.is_stock = yes;
        self
    }

    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// The symbol as the widget library expects it.
    pub fn resolved_symbol(&self) -> String {
        if self.is_stock {
            self.symbol.clone()
        } else {
            format!("{CRYPTO_EXCHANGE_PREFIX}{}", self.symbol)
        }
    }

    pub fn container_id(&self) -> String {
        format!("tradingview_{}", self.symbol)
    }

    pub fn config(&self, container_id: &str) -> WidgetConfig {
        WidgetConfig::new(self.resolved_symbol(), container_id).theme(self.theme.clone())
    }

    /// Only symbol and asset kind decide whether the widget is rebuilt.
    fn same_target(&self, other: &ChartWidget) -> bool {
        self.symbol == other.symbol && self.is_stock == other.is_stock
    }

    /// Injects the widget into `container`.
    ///
    /// Returns `None` without touching the container if it is not attached.
    pub fn mount<C: Container>(
        self,
        container: &mut C,
    ) -> Result<Option<MountedChart<'_, C>>, FbError> {
        if !container.is_attached() {
            return Ok(None);
        }
        inject(container, &self)?;
        Ok(Some(MountedChart {
            container,
            props: self,
        }))
    }

    /// Server-side render: mount onto a fresh element, snapshot its markup, unmount.
    pub fn render_html(&self) -> Result<String, FbError> {
        let mut container = HtmlContainer::new();
        let mounted = self.clone().mount(&mut container)?;
        Ok(mounted.map(|m| m.container().render()).unwrap_or_default())
    }
}

fn inject<C: Container>(container: &mut C, props: &ChartWidget) -> Result<(), FbError> {
    container.set_id(props.container_id());
    let config = props.config(container.id());
    if let Err(err) = container.inject(&config) {
        container.clear();
        return Err(err);
    }
    tracing::debug!(symbol = %config.symbol, container = %config.container_id, "widget injected");
    Ok(())
}

/// A widget living in a container. Dropping it clears the container.
#[must_use = "dropping the guard immediately clears the container"]
pub struct MountedChart<'a, C: Container> {
    container: &'a mut C,
    props: ChartWidget,
}

impl<'a, C: Container> MountedChart<'a, C> {
    pub fn props(&self) -> &ChartWidget {
        &self.props
    }

    pub fn container(&self) -> &C {
        &*self.container
    }

    /// Applies new props. A changed symbol or asset kind clears the container before the new
    /// configuration is injected; anything else is only recorded.
    pub fn update(&mut self, props: ChartWidget) -> Result<(), FbError> {
        if self.props.same_target(&props) {
            self.props = props;
            return Ok(());
        }
        self.container.clear();
        self.props = props;
        if !self.container.is_attached() {
            return Ok(());
        }
        inject(self.container, &self.props)
    }
}

impl<C: Container> Drop for MountedChart<'_, C> {
    fn drop(&mut self) {
        self.container.clear();
    }
}
