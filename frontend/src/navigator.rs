use crate::dom::BrowserViewport;

/// Anchored regions the nav bar and footer link to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Rules,
    Life,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::About, Section::Rules, Section::Life, Section::Contact];

    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Rules => "rules",
            Section::Life => "life",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> String {
        nav_label(self.id())
    }
}

/// Button text for an anchor id: capitalised, first dash turned into a space.
pub fn nav_label(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>().replacen('-', " ", 1),
        None => String::new(),
    }
}

pub trait AnchorViewport {
    /// Document-relative top of the element whose id is `id`, if there is one.
    fn anchor_top(&self, id: &str) -> Option<f64>;
    fn scroll_offset(&self) -> f64;
    fn smooth_scroll_to(&self, top: f64);
}

/// Smooth-scrolls so the anchor `id` sits at the top of the viewport.
///
/// Unknown ids are ignored.
pub fn scroll_to_section<V: AnchorViewport + ?Sized>(viewport: &V, id: &str) {
    let Some(top) = viewport.anchor_top(id) else {
        log::debug!("no anchor #{id} on the page, ignoring navigation");
        return;
    };
    if (top - viewport.scroll_offset()).abs() < 0.5 {
        return;
    }
    viewport.smooth_scroll_to(top);
}

pub fn navigate(id: &str) {
    if let Some(viewport) = BrowserViewport::current() {
        scroll_to_section(&viewport, id);
    }
}
