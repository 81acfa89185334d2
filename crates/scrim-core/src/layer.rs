use std::cell::RefCell;
use std::rc::{Rc, Weak};

use bitflags::bitflags;
use smallvec::SmallVec;

use crate::{Color, Rect, Size, Transform, Vec2};

bitflags! {
    /// How a layer reacts when its parent's frame changes size.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Autoresizing: u8 {
        const FLEXIBLE_WIDTH = 1 << 0;
        const FLEXIBLE_HEIGHT = 1 << 1;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub radius: f32,
    pub opacity: f32,
}

struct LayerInner {
    name: String,
    frame: Rect,
    alpha: f32,
    transform: Transform,
    background: Color,
    corner_radius: f32,
    shadow: Option<Shadow>,
    autoresizing: Autoresizing,
    mask: Option<Layer>,
    on_tap: Option<Rc<dyn Fn()>>,
    parent: Weak<RefCell<LayerInner>>,
    children: SmallVec<[Layer; 4]>,
}

/// Shared handle to one node of the retained layer tree.
///
/// Presentation controllers and transition animators mutate layers through
/// cloned handles from inside animation callbacks, so a `Layer` is a cheap
/// `Rc` clone. All access is single-threaded.
#[derive(Clone)]
pub struct Layer(Rc<RefCell<LayerInner>>);

impl std::fmt::Debug for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.0.borrow();
        f.debug_struct("Layer")
            .field("name", &inner.name)
            .field("frame", &inner.frame)
            .field("alpha", &inner.alpha)
            .field("children", &inner.children.len())
            .finish()
    }
}

impl Layer {
    pub fn new(name: impl Into<String>) -> Self {
        Layer(Rc::new(RefCell::new(LayerInner {
            name: name.into(),
            frame: Rect::default(),
            alpha: 1.0,
            transform: Transform::identity(),
            background: Color::TRANSPARENT,
            corner_radius: 0.0,
            shadow: None,
            autoresizing: Autoresizing::empty(),
            mask: None,
            on_tap: None,
            parent: Weak::new(),
            children: SmallVec::new(),
        })))
    }

    pub fn with_frame(name: impl Into<String>, frame: Rect) -> Self {
        let layer = Self::new(name);
        layer.0.borrow_mut().frame = frame;
        layer
    }

    pub fn name(&self) -> String {
        self.0.borrow().name.clone()
    }

    pub fn same_layer(&self, other: &Layer) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    // --- Geometry ---

    pub fn frame(&self) -> Rect {
        self.0.borrow().frame
    }

    /// Set the frame, propagating size deltas to children with flexible
    /// autoresizing (the constraint-pinning analog for full-bleed overlays).
    pub fn set_frame(&self, frame: Rect) {
        let (old, children) = {
            let mut inner = self.0.borrow_mut();
            let old = inner.frame;
            inner.frame = frame;
            (old, inner.children.clone())
        };
        let dw = frame.w - old.w;
        let dh = frame.h - old.h;
        if dw == 0.0 && dh == 0.0 {
            return;
        }
        for child in children {
            let flags = child.autoresizing();
            if flags.is_empty() {
                continue;
            }
            let mut child_frame = child.frame();
            if flags.contains(Autoresizing::FLEXIBLE_WIDTH) {
                child_frame.w += dw;
            }
            if flags.contains(Autoresizing::FLEXIBLE_HEIGHT) {
                child_frame.h += dh;
            }
            child.set_frame(child_frame);
        }
    }

    /// The layer's own coordinate space: its frame at a zero origin.
    pub fn bounds(&self) -> Rect {
        let frame = self.0.borrow().frame;
        Rect::new(0.0, 0.0, frame.w, frame.h)
    }

    pub fn center(&self) -> Vec2 {
        self.frame().center()
    }

    /// Reposition the frame so it is centered on `point`, preserving size.
    pub fn set_center(&self, point: Vec2) {
        let mut inner = self.0.borrow_mut();
        inner.frame.x = point.x - inner.frame.w / 2.0;
        inner.frame.y = point.y - inner.frame.h / 2.0;
    }

    pub fn size(&self) -> Size {
        self.frame().size()
    }

    // --- Visual attributes ---

    pub fn alpha(&self) -> f32 {
        self.0.borrow().alpha
    }

    pub fn set_alpha(&self, alpha: f32) {
        self.0.borrow_mut().alpha = alpha;
    }

    pub fn transform(&self) -> Transform {
        self.0.borrow().transform
    }

    pub fn set_transform(&self, transform: Transform) {
        self.0.borrow_mut().transform = transform;
    }

    pub fn background(&self) -> Color {
        self.0.borrow().background
    }

    pub fn set_background(&self, color: Color) {
        self.0.borrow_mut().background = color;
    }

    pub fn corner_radius(&self) -> f32 {
        self.0.borrow().corner_radius
    }

    pub fn set_corner_radius(&self, radius: f32) {
        self.0.borrow_mut().corner_radius = radius;
    }

    pub fn shadow(&self) -> Option<Shadow> {
        self.0.borrow().shadow
    }

    pub fn set_shadow(&self, shadow: Option<Shadow>) {
        self.0.borrow_mut().shadow = shadow;
    }

    pub fn autoresizing(&self) -> Autoresizing {
        self.0.borrow().autoresizing
    }

    pub fn set_autoresizing(&self, flags: Autoresizing) {
        self.0.borrow_mut().autoresizing = flags;
    }

    // --- Mask ---

    pub fn mask(&self) -> Option<Layer> {
        self.0.borrow().mask.clone()
    }

    /// Install or clear the clipping mask. Clearing an absent mask is a no-op.
    pub fn set_mask(&self, mask: Option<Layer>) {
        self.0.borrow_mut().mask = mask;
    }

    // --- Hierarchy ---

    pub fn parent(&self) -> Option<Layer> {
        self.0.borrow().parent.upgrade().map(Layer)
    }

    pub fn is_attached(&self) -> bool {
        self.0.borrow().parent.strong_count() > 0
    }

    pub fn child_count(&self) -> usize {
        self.0.borrow().children.len()
    }

    pub fn child_at(&self, index: usize) -> Option<Layer> {
        self.0.borrow().children.get(index).cloned()
    }

    pub fn index_of_child(&self, child: &Layer) -> Option<usize> {
        self.0
            .borrow()
            .children
            .iter()
            .position(|c| c.same_layer(child))
    }

    /// Append `child` as the frontmost layer.
    pub fn add_child(&self, child: &Layer) {
        child.remove_from_parent();
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
    }

    /// Insert `child` at `index` (0 = backmost). The index is clamped.
    pub fn insert_child(&self, index: usize, child: &Layer) {
        child.remove_from_parent();
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        let mut inner = self.0.borrow_mut();
        let index = index.min(inner.children.len());
        inner.children.insert(index, child.clone());
    }

    /// Detach from the parent. A no-op when already detached, so rollback
    /// paths may call it more than once.
    pub fn remove_from_parent(&self) {
        let Some(parent) = self.parent() else {
            return;
        };
        parent
            .0
            .borrow_mut()
            .children
            .retain(|c| !c.same_layer(self));
        self.0.borrow_mut().parent = Weak::new();
    }

    // --- Tap dispatch ---

    pub fn set_on_tap(&self, handler: Option<Rc<dyn Fn()>>) {
        self.0.borrow_mut().on_tap = handler;
    }

    /// Deliver a tap at `point` (in this layer's coordinate space). The
    /// frontmost child whose frame contains the point consumes the tap even
    /// when its subtree has no handler, so content layers shield whatever
    /// sits behind them. Returns whether any handler ran.
    pub fn dispatch_tap(&self, point: Vec2) -> bool {
        let children: Vec<Layer> = {
            let inner = self.0.borrow();
            inner.children.iter().rev().cloned().collect()
        };
        for child in children {
            let child_frame = child.frame();
            if !child_frame.contains(point) {
                continue;
            }
            let local = Vec2::new(point.x - child_frame.x, point.y - child_frame.y);
            return child.dispatch_tap(local);
        }
        let handler = self.0.borrow().on_tap.clone();
        if let Some(handler) = handler {
            if self.bounds().contains(point) {
                handler();
                return true;
            }
        }
        false
    }
}
