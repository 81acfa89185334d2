use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use scrim_core::{Layer, Timeline, TransitionAnimator, TransitionContext};

use crate::{MaskedTransitionAnimator, NavOperation};

struct ActiveTransition {
    ctx: TransitionContext,
    animator: Box<dyn TransitionAnimator>,
    operation: NavOperation,
    /// The page entering on a push; committed to the stack only when the
    /// transition completes.
    pushed: Option<Layer>,
}

/// Stack navigator that moves full-size pages through one container using
/// [`MaskedTransitionAnimator`].
///
/// Only the top page is attached to the container outside of a transition.
/// Push and pop are rejected while a transition is in flight; the stack
/// itself only changes when a transition completes, so an interrupted
/// operation leaves it untouched.
pub struct MaskedNavigator {
    container: Layer,
    timeline: Rc<RefCell<Timeline>>,
    stack: Vec<Layer>,
    transition: Option<ActiveTransition>,
}

impl MaskedNavigator {
    /// `root` becomes the permanent bottom of the stack and is attached
    /// immediately, sized to the container.
    pub fn new(container: Layer, root: Layer) -> Self {
        root.set_frame(container.bounds());
        container.add_child(&root);
        Self {
            container,
            timeline: Rc::new(RefCell::new(Timeline::new())),
            stack: vec![root],
            transition: None,
        }
    }

    pub fn container(&self) -> &Layer {
        &self.container
    }

    pub fn timeline(&self) -> Rc<RefCell<Timeline>> {
        self.timeline.clone()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn top(&self) -> Option<Layer> {
        self.stack.last().cloned()
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Push `page` onto the stack. Returns false when a transition is
    /// already in flight.
    pub fn push(&mut self, page: Layer, animated: bool, now: Instant) -> bool {
        if self.transition.is_some() {
            log::warn!("navigator: push rejected during an active transition");
            return false;
        }
        let Some(from) = self.stack.last().cloned() else {
            return false;
        };

        let mut animator = Box::new(MaskedTransitionAnimator::new(NavOperation::Push));
        let ctx = TransitionContext::new(self.container.clone(), self.timeline.clone(), now, animated)
            .with_from(from)
            .with_to(page.clone())
            .with_final_frame(self.container.bounds());
        ctx.set_transition_duration(animator.transition_duration(&ctx));

        log::debug!("navigator: push begins (animated: {animated})");
        animator.animate_transition(&ctx);
        self.transition = Some(ActiveTransition {
            ctx,
            animator,
            operation: NavOperation::Push,
            pushed: Some(page),
        });
        self.finalize_if_complete();
        true
    }

    /// Pop the top page. Returns false when the root is on top or a
    /// transition is already in flight.
    pub fn pop(&mut self, animated: bool, now: Instant) -> bool {
        if self.transition.is_some() {
            log::warn!("navigator: pop rejected during an active transition");
            return false;
        }
        // Never pop the root.
        if self.stack.len() <= 1 {
            return false;
        }
        let from = self.stack[self.stack.len() - 1].clone();
        let to = self.stack[self.stack.len() - 2].clone();

        let mut animator = Box::new(MaskedTransitionAnimator::new(NavOperation::Pop));
        let ctx = TransitionContext::new(self.container.clone(), self.timeline.clone(), now, animated)
            .with_from(from)
            .with_to(to)
            .with_final_frame(self.container.bounds());
        ctx.set_transition_duration(animator.transition_duration(&ctx));

        log::debug!("navigator: pop begins (animated: {animated})");
        animator.animate_transition(&ctx);
        self.transition = Some(ActiveTransition {
            ctx,
            animator,
            operation: NavOperation::Pop,
            pushed: None,
        });
        self.finalize_if_complete();
        true
    }

    /// Advance the timeline to `now` and commit or roll back a transition
    /// that finished.
    pub fn tick(&mut self, now: Instant) {
        self.timeline.borrow_mut().tick(now);
        self.finalize_if_complete();
    }

    fn finalize_if_complete(&mut self) {
        let signalled = self
            .transition
            .as_ref()
            .and_then(|active| active.ctx.transition_state());
        let Some(completed) = signalled else {
            return;
        };
        let Some(active) = self.transition.take() else {
            return;
        };
        let ActiveTransition {
            mut animator,
            operation,
            pushed,
            ..
        } = active;
        animator.animation_ended(completed);

        match (operation, completed) {
            (NavOperation::Push, true) => {
                if let Some(page) = pushed {
                    self.stack.push(page);
                }
                log::debug!("navigator: push finished");
            }
            (NavOperation::Push, false) => {
                log::debug!("navigator: push rolled back");
            }
            (NavOperation::Pop, true) => {
                self.stack.pop();
                log::debug!("navigator: pop finished");
            }
            (NavOperation::Pop, false) => {
                log::debug!("navigator: pop rolled back");
            }
        }
    }
}
