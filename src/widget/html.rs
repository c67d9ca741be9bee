use crate::core::FbError;
use crate::markup::{escape_html, script_json};
use crate::widget::{Container, WidgetConfig};

/// Attribute the loader script looks for.
pub const CONFIG_ATTR: &str = "data-tradingview-config";

/// A server-side stand-in for the chart's DOM element.
///
/// Injected configurations become JSON `<script>` blocks that `widget-loader.js` hands to the
/// widget library; nothing is interpolated into executable script.
#[derive(Debug, Clone)]
pub struct HtmlContainer {
    id: String,
    attached: bool,
    children: Vec<String>,
}

impl HtmlContainer {
    /// An attached, empty container.
    pub fn new() -> Self {
        Self {
            id: String::new(),
            attached: true,
            children: Vec::new(),
        }
    }

    /// A container that is not part of any document; mounting onto it is a no-op.
    pub fn detached() -> Self {
        Self {
            attached: false,
            ..Self::new()
        }
    }

    pub fn children(&self) -> &[String] {
        &self.children
    }

    /// The element with its current children.
    pub fn render(&self) -> String {
        format!(
            r#"<div id="{}" class="h-full w-full">{}</div>"#,
            escape_html(&self.id),
            self.children.concat()
        )
    }
}

impl Default for HtmlContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl Container for HtmlContainer {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn inject(&mut self, config: &WidgetConfig) -> Result<(), FbError> {
        let json = script_json(config).map_err(|e| FbError::Data(format!("widget config: {e}")))?;
        self.children.push(format!(
            r#"<script type="application/json" {CONFIG_ATTR}>{json}</script>"#
        ));
        Ok(())
    }

    fn clear(&mut self) {
        self.children.clear();
    }
}
