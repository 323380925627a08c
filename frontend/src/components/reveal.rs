use std::rc::Rc;

use yew::prelude::*;

use crate::viewport::ViewportSnapshot;

/// Props for a page section whose blocks animate in as they are scrolled to.
#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub viewport: Rc<ViewportSnapshot>,
}

/// Classes for an element that animates in once its block has been revealed.
///
/// Hidden blocks stay fully transparent so the entrance animation has something to start from.
pub fn reveal_classes(visible: bool, animation: impl Into<Classes>) -> Classes {
    if visible {
        animation.into()
    } else {
        classes!("opacity-0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_blocks_are_transparent() {
        let classes = reveal_classes(false, "animate-fadeInUp delay-200");
        assert!(classes.contains("opacity-0"));
        assert!(!classes.contains("animate-fadeInUp"));
        assert_eq!(classes, classes!("opacity-0"));
    }

    #[test]
    fn visible_blocks_carry_animation_and_delay() {
        let classes = reveal_classes(true, "animate-slideInLeft delay-300");
        assert!(classes.contains("animate-slideInLeft"));
        assert!(classes.contains("delay-300"));
        assert!(!classes.contains("opacity-0"));
    }
}
