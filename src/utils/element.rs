use gpui::{AnyElement, ElementId, IntoElement, Pixels, SharedString, Styled};
use smallvec::SmallVec;

/// Derives namespaced element IDs for a component's internal state entities.
pub trait ElementIdExt {
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId;
}

impl ElementIdExt for ElementId {
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId {
        ElementId::NamedChild(Box::new(self.clone()), suffix.into())
    }
}

/// Applies a uniform corner radius to any styled element.
pub trait CornerRadiiExt: Styled + Sized {
    fn rounded_all(mut self, radius: Pixels) -> Self {
        let corners = &mut self.style().corner_radii;
        corners.top_left = Some(radius.into());
        corners.top_right = Some(radius.into());
        corners.bottom_right = Some(radius.into());
        corners.bottom_left = Some(radius.into());
        self
    }
}

impl<E: Styled> CornerRadiiExt for E {}

/// Builder methods for components with positional child slots, like a
/// button's leading and trailing icons.
pub trait PositionalParentElement: Sized {
    fn children_mut(&mut self) -> &mut PositionalChildren;

    fn child_top(mut self, child: impl IntoElement) -> Self {
        self.children_mut().top.push(child.into_any_element());
        self
    }

    fn child_bottom(mut self, child: impl IntoElement) -> Self {
        self.children_mut().bottom.push(child.into_any_element());
        self
    }

    fn child_left(mut self, child: impl IntoElement) -> Self {
        self.children_mut().left.push(child.into_any_element());
        self
    }

    fn child_right(mut self, child: impl IntoElement) -> Self {
        self.children_mut().right.push(child.into_any_element());
        self
    }
}

#[derive(Default)]
pub struct PositionalChildren {
    pub top: SmallVec<[AnyElement; 1]>,
    pub bottom: SmallVec<[AnyElement; 1]>,
    pub left: SmallVec<[AnyElement; 1]>,
    pub right: SmallVec<[AnyElement; 1]>,
}
