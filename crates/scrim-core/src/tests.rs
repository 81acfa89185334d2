#[cfg(test)]
mod tests {
    use crate::animation::*;
    use crate::layer::*;
    use crate::transition::*;
    use crate::{Color, Rect, Size, Transform, Vec2};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    #[test]
    fn test_rect_midpoints() {
        let rect = Rect::new(20.0, 224.0, 280.0, 120.0);
        assert_eq!(rect.mid_x(), 160.0);
        assert_eq!(rect.mid_y(), 284.0);
        assert_eq!(rect.max_y(), 344.0);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 10.0, 100.0, 50.0);
        assert!(rect.contains(Vec2::new(50.0, 30.0)));
        assert!(!rect.contains(Vec2::new(5.0, 30.0)));
        assert!(!rect.contains(Vec2::new(50.0, 70.0)));
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert_eq!(easing.interpolate(0.0), 0.0);
            assert_eq!(easing.interpolate(1.0), 1.0);
        }
    }

    #[test]
    fn test_transform_interpolation() {
        let start = Transform::scale(0.85);
        let end = Transform::identity();
        let mid = start.interpolate(&end, 0.5);
        assert!((mid.scale_x - 0.925).abs() < 1e-6);
        assert!((mid.scale_y - 0.925).abs() < 1e-6);
        assert_eq!(start.interpolate(&end, 1.0), Transform::identity());
    }

    #[test]
    fn test_timeline_progress_and_completion() {
        let t0 = Instant::now();
        let mut timeline = Timeline::new();
        let value = Rc::new(Cell::new(0.0f32));
        let completed = Rc::new(Cell::new(None::<bool>));

        timeline.animate(
            t0,
            AnimationSpec::tween(Duration::from_millis(1000), Easing::Linear),
            {
                let value = value.clone();
                move |t| value.set(t)
            },
            {
                let completed = completed.clone();
                move |c| completed.set(Some(c))
            },
        );

        assert_eq!(timeline.tick(t0 + Duration::from_millis(250)), 1);
        assert!((value.get() - 0.25).abs() < 0.01);
        assert_eq!(completed.get(), None);

        assert_eq!(timeline.tick(t0 + Duration::from_millis(1000)), 0);
        assert_eq!(value.get(), 1.0);
        assert_eq!(completed.get(), Some(true));
        assert!(timeline.is_idle());
    }

    #[test]
    fn test_timeline_cancel_reports_interrupted() {
        let t0 = Instant::now();
        let mut timeline = Timeline::new();
        let completed = Rc::new(Cell::new(None::<bool>));

        let handle = timeline.animate(
            t0,
            AnimationSpec::ease_out(Duration::from_millis(250)),
            |_| {},
            {
                let completed = completed.clone();
                move |c| completed.set(Some(c))
            },
        );
        timeline.tick(t0 + Duration::from_millis(100));
        assert!(timeline.cancel(handle));
        assert_eq!(completed.get(), Some(false));
        assert!(timeline.is_idle());
        // A second cancel of the same handle is a no-op.
        assert!(!timeline.cancel(handle));
    }

    #[test]
    fn test_timeline_zero_duration_completes_on_first_tick() {
        let t0 = Instant::now();
        let mut timeline = Timeline::new();
        let value = Rc::new(Cell::new(0.0f32));
        timeline.animate(
            t0,
            AnimationSpec::tween(Duration::ZERO, Easing::Linear),
            {
                let value = value.clone();
                move |t| value.set(t)
            },
            |c| assert!(c),
        );
        assert_eq!(timeline.tick(t0), 0);
        assert_eq!(value.get(), 1.0);
    }

    #[test]
    fn test_layer_attach_detach_idempotent() {
        let parent = Layer::with_frame("container", Rect::new(0.0, 0.0, 320.0, 568.0));
        let child = Layer::new("dimming");

        parent.insert_child(0, &child);
        assert!(child.is_attached());
        assert_eq!(parent.child_count(), 1);

        child.remove_from_parent();
        assert!(!child.is_attached());
        // Removing an already-detached layer must be a no-op.
        child.remove_from_parent();
        assert_eq!(parent.child_count(), 0);
    }

    #[test]
    fn test_layer_insert_at_back_keeps_z_order() {
        let parent = Layer::new("container");
        let content = Layer::new("content");
        let dimming = Layer::new("dimming");

        parent.add_child(&content);
        parent.insert_child(0, &dimming);

        assert_eq!(parent.index_of_child(&dimming), Some(0));
        assert_eq!(parent.index_of_child(&content), Some(1));
    }

    #[test]
    fn test_layer_reparenting_detaches_first() {
        let a = Layer::new("a");
        let b = Layer::new("b");
        let child = Layer::new("child");
        a.add_child(&child);
        b.add_child(&child);
        assert_eq!(a.child_count(), 0);
        assert_eq!(b.child_count(), 1);
        assert!(child.parent().unwrap().same_layer(&b));
    }

    #[test]
    fn test_autoresizing_tracks_parent_size() {
        let container = Layer::with_frame("container", Rect::new(0.0, 0.0, 320.0, 568.0));
        let dimming = Layer::with_frame("dimming", container.bounds());
        dimming.set_autoresizing(Autoresizing::FLEXIBLE_WIDTH | Autoresizing::FLEXIBLE_HEIGHT);
        let fixed = Layer::with_frame("content", Rect::new(20.0, 224.0, 280.0, 120.0));

        container.insert_child(0, &dimming);
        container.add_child(&fixed);

        container.set_frame(Rect::new(0.0, 0.0, 568.0, 320.0));
        assert_eq!(dimming.frame(), Rect::new(0.0, 0.0, 568.0, 320.0));
        assert_eq!(fixed.frame(), Rect::new(20.0, 224.0, 280.0, 120.0));
    }

    #[test]
    fn test_tap_dispatch_frontmost_first() {
        let container = Layer::with_frame("container", Rect::new(0.0, 0.0, 100.0, 100.0));
        let back = Layer::with_frame("back", Rect::new(0.0, 0.0, 100.0, 100.0));
        let front = Layer::with_frame("front", Rect::new(25.0, 25.0, 50.0, 50.0));

        let hits = Rc::new(RefCell::new(Vec::new()));
        back.set_on_tap(Some(Rc::new({
            let hits = hits.clone();
            move || hits.borrow_mut().push("back")
        })));
        front.set_on_tap(Some(Rc::new({
            let hits = hits.clone();
            move || hits.borrow_mut().push("front")
        })));

        container.add_child(&back);
        container.add_child(&front);

        assert!(container.dispatch_tap(Vec2::new(50.0, 50.0)));
        assert!(container.dispatch_tap(Vec2::new(10.0, 10.0)));
        assert_eq!(*hits.borrow(), vec!["front", "back"]);
    }

    #[test]
    fn test_tap_blocked_by_handlerless_front_layer() {
        let container = Layer::with_frame("container", Rect::new(0.0, 0.0, 100.0, 100.0));
        let back = Layer::with_frame("back", Rect::new(0.0, 0.0, 100.0, 100.0));
        let front = Layer::with_frame("front", Rect::new(25.0, 25.0, 50.0, 50.0));

        let hit = Rc::new(Cell::new(false));
        back.set_on_tap(Some(Rc::new({
            let hit = hit.clone();
            move || hit.set(true)
        })));
        container.add_child(&back);
        container.add_child(&front);

        // The front layer has no handler but still shields the back layer.
        assert!(!container.dispatch_tap(Vec2::new(50.0, 50.0)));
        assert!(!hit.get());
    }

    #[test]
    fn test_mask_set_and_clear() {
        let layer = Layer::with_frame("page", Rect::new(0.0, 0.0, 320.0, 568.0));
        assert!(layer.mask().is_none());
        let mask = Layer::with_frame("mask", layer.bounds());
        mask.set_background(Color::WHITE);
        layer.set_mask(Some(mask));
        assert!(layer.mask().is_some());
        layer.set_mask(None);
        assert!(layer.mask().is_none());
        // Clearing twice is fine.
        layer.set_mask(None);
        assert!(layer.mask().is_none());
    }

    #[test]
    fn test_context_completion_first_write_wins() {
        let container = Layer::new("container");
        let timeline = Rc::new(RefCell::new(Timeline::new()));
        let ctx = TransitionContext::new(container, timeline, Instant::now(), true);

        assert_eq!(ctx.transition_state(), None);
        ctx.complete_transition(false);
        ctx.complete_transition(true);
        assert_eq!(ctx.transition_state(), Some(false));
    }

    #[test]
    fn test_alongside_without_animation_applies_synchronously() {
        let container = Layer::new("container");
        let timeline = Rc::new(RefCell::new(Timeline::new()));
        let ctx = TransitionContext::new(container, timeline.clone(), Instant::now(), false);
        ctx.set_transition_duration(Duration::from_millis(250));

        let value = Rc::new(Cell::new(0.0f32));
        let handle = ctx.animate_alongside({
            let value = value.clone();
            move |t| value.set(t)
        });
        assert!(handle.is_none());
        assert_eq!(value.get(), 1.0);
        assert!(timeline.borrow().is_idle());
    }

    #[test]
    fn test_alongside_animated_schedules_on_timeline() {
        let t0 = Instant::now();
        let container = Layer::new("container");
        let timeline = Rc::new(RefCell::new(Timeline::new()));
        let ctx = TransitionContext::new(container, timeline.clone(), t0, true);
        ctx.set_transition_duration(Duration::from_millis(250));

        let value = Rc::new(Cell::new(0.0f32));
        let handle = ctx.animate_alongside({
            let value = value.clone();
            move |t| value.set(t)
        });
        assert!(handle.is_some());
        timeline.borrow_mut().tick(t0 + Duration::from_millis(250));
        assert_eq!(value.get(), 1.0);
    }

    #[test]
    fn test_black_with_opacity() {
        assert_eq!(Color::black_with_opacity(1.0), Color(0, 0, 0, 255));
        assert_eq!(Color::black_with_opacity(0.0), Color(0, 0, 0, 0));
        assert_eq!(Color::black_with_opacity(0.5), Color(0, 0, 0, 128));
    }

    #[test]
    fn test_size_helpers() {
        assert!(Size::new(0.0, 10.0).is_empty());
        assert!(!Size::new(5.0, 10.0).is_empty());
        assert_eq!(Rect::from_size(Size::new(3.0, 4.0)), Rect::new(0.0, 0.0, 3.0, 4.0));
    }
}
