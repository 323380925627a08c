use wasm_bindgen::JsCast;
use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions, Window};

use crate::config::ANIMATE_ATTRIBUTE;
use crate::navigator::AnchorViewport;
use crate::viewport::{BlockRect, LayoutProbe};

/// The live browser window, read through `web_sys`.
pub struct BrowserViewport {
    window: Window,
    document: Document,
}

impl BrowserViewport {
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(BrowserViewport { window, document })
    }
}

impl LayoutProbe for BrowserViewport {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0)
    }

    fn tagged_blocks(&self) -> Vec<BlockRect> {
        let selector = format!("[{ANIMATE_ATTRIBUTE}]");
        let nodes = match self.document.query_selector_all(&selector) {
            Ok(nodes) => nodes,
            Err(err) => {
                log::warn!("querying animated blocks failed: {:?}", err);
                return Vec::new();
            }
        };

        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .filter_map(|el| {
                let id = el.get_attribute(ANIMATE_ATTRIBUTE)?;
                Some(BlockRect::new(id, el.get_bounding_client_rect().top()))
            })
            .collect()
    }
}

impl AnchorViewport for BrowserViewport {
    fn anchor_top(&self, id: &str) -> Option<f64> {
        let el = self.document.get_element_by_id(id)?;
        Some(el.get_bounding_client_rect().top() + LayoutProbe::scroll_offset(self))
    }

    fn scroll_offset(&self) -> f64 {
        LayoutProbe::scroll_offset(self)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}
