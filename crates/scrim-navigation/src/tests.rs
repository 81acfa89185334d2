#[cfg(test)]
mod tests {
    use crate::*;
    use scrim_core::{Layer, Rect, Timeline, Transform, TransitionAnimator, TransitionContext};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    fn make_nav() -> (MaskedNavigator, Layer, Layer) {
        let container = Layer::with_frame("root", Rect::new(0.0, 0.0, 320.0, 568.0));
        let home = Layer::new("home");
        let nav = MaskedNavigator::new(container.clone(), home.clone());
        (nav, container, home)
    }

    #[test]
    fn test_new_attaches_root_at_container_size() {
        let (nav, container, home) = make_nav();
        assert_eq!(nav.depth(), 1);
        assert!(nav.top().unwrap().same_layer(&home));
        assert_eq!(container.child_count(), 1);
        assert_eq!(home.frame(), Rect::new(0.0, 0.0, 320.0, 568.0));
    }

    #[test]
    fn test_unanimated_push_swaps_pages_synchronously() {
        let (mut nav, container, home) = make_nav();
        let detail = Layer::new("detail");

        assert!(nav.push(detail.clone(), false, Instant::now()));
        assert!(!nav.is_transitioning());
        assert_eq!(nav.depth(), 2);
        assert!(nav.top().unwrap().same_layer(&detail));
        // Only the new top page is attached, unclipped and untranslated.
        assert_eq!(container.child_count(), 1);
        assert!(!home.is_attached());
        assert!(home.mask().is_none());
        assert_eq!(detail.transform(), Transform::identity());
    }

    #[test]
    fn test_animated_push_midflight_geometry() {
        let (mut nav, container, home) = make_nav();
        let detail = Layer::new("detail");
        let t0 = Instant::now();

        assert!(nav.push(detail.clone(), true, t0));
        assert!(nav.is_transitioning());
        assert_eq!(container.child_count(), 2);
        // Incoming page starts fully off-screen to the right.
        assert_eq!(detail.transform(), Transform::translate(320.0, 0.0));
        assert!(home.mask().is_some());

        // Halfway through 250 ms of ease-out: t = 0.75. The incoming page
        // moves at full speed, the outgoing one at half speed, and the mask
        // edge tracks between them.
        nav.tick(t0 + Duration::from_millis(125));
        assert!((detail.transform().translate_x - 80.0).abs() < 1e-3);
        assert!((home.transform().translate_x + 120.0).abs() < 1e-3);
        let mask = home.mask().unwrap();
        assert!((mask.frame().w - 200.0).abs() < 1e-3);

        nav.tick(t0 + Duration::from_millis(250));
        assert!(!nav.is_transitioning());
        assert_eq!(nav.depth(), 2);
        assert!(home.mask().is_none());
        assert!(!home.is_attached());
        assert_eq!(home.transform(), Transform::identity());
        assert_eq!(detail.transform(), Transform::identity());
    }

    #[test]
    fn test_push_rejected_while_transitioning() {
        let (mut nav, _container, _home) = make_nav();
        let t0 = Instant::now();

        assert!(nav.push(Layer::new("detail"), true, t0));
        assert!(!nav.push(Layer::new("other"), true, t0));
        assert!(!nav.pop(true, t0));
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_interrupted_push_rolls_back() {
        let (mut nav, container, home) = make_nav();
        let detail = Layer::new("detail");
        let t0 = Instant::now();

        nav.push(detail.clone(), true, t0);
        nav.tick(t0 + Duration::from_millis(80));
        nav.timeline().borrow_mut().cancel_all();
        nav.tick(t0 + Duration::from_millis(81));

        assert!(!nav.is_transitioning());
        assert_eq!(nav.depth(), 1);
        assert!(nav.top().unwrap().same_layer(&home));
        assert_eq!(container.child_count(), 1);
        assert!(home.is_attached());
        assert!(home.mask().is_none());
        assert_eq!(home.transform(), Transform::identity());
        assert!(!detail.is_attached());
    }

    #[test]
    fn test_pop_never_removes_root() {
        let (mut nav, _container, _home) = make_nav();
        assert!(!nav.pop(false, Instant::now()));
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_unanimated_pop_restores_previous_page() {
        let (mut nav, container, home) = make_nav();
        let detail = Layer::new("detail");
        let t0 = Instant::now();

        nav.push(detail.clone(), false, t0);
        assert!(nav.pop(false, t0));
        assert_eq!(nav.depth(), 1);
        assert!(nav.top().unwrap().same_layer(&home));
        assert_eq!(container.child_count(), 1);
        assert!(home.is_attached());
        assert!(home.mask().is_none());
        assert!(!detail.is_attached());
    }

    #[test]
    fn test_animated_pop_midflight_geometry() {
        let (mut nav, container, home) = make_nav();
        let detail = Layer::new("detail");
        let t0 = Instant::now();

        nav.push(detail.clone(), false, t0);
        assert!(nav.pop(true, t0));
        // Revealed page is re-inserted behind the departing one.
        assert_eq!(container.child_count(), 2);
        assert_eq!(container.index_of_child(&home), Some(0));
        assert_eq!(home.transform(), Transform::translate(-160.0, 0.0));
        assert!(home.mask().is_some());

        nav.tick(t0 + Duration::from_millis(125));
        assert!((detail.transform().translate_x - 240.0).abs() < 1e-3);
        assert!((home.transform().translate_x + 40.0).abs() < 1e-3);
        let mask = home.mask().unwrap();
        assert!((mask.frame().w - 280.0).abs() < 1e-3);

        nav.tick(t0 + Duration::from_millis(250));
        assert_eq!(nav.depth(), 1);
        assert!(home.mask().is_none());
        assert_eq!(home.transform(), Transform::identity());
        assert!(!detail.is_attached());
        assert_eq!(container.child_count(), 1);
    }

    #[test]
    fn test_interrupted_pop_keeps_top_page() {
        let (mut nav, container, home) = make_nav();
        let detail = Layer::new("detail");
        let t0 = Instant::now();

        nav.push(detail.clone(), false, t0);
        nav.pop(true, t0);
        nav.timeline().borrow_mut().cancel_all();
        nav.tick(t0 + Duration::from_millis(1));

        assert!(!nav.is_transitioning());
        assert_eq!(nav.depth(), 2);
        assert!(nav.top().unwrap().same_layer(&detail));
        assert_eq!(container.child_count(), 1);
        assert!(detail.is_attached());
        assert_eq!(detail.transform(), Transform::identity());
        assert!(!home.is_attached());
        assert!(home.mask().is_none());
    }

    #[test]
    fn test_masked_animator_reports_stock_duration() {
        let ctx = TransitionContext::new(
            Layer::new("container"),
            Rc::new(RefCell::new(Timeline::new())),
            Instant::now(),
            true,
        );
        let animator = MaskedTransitionAnimator::new(NavOperation::Push);
        assert_eq!(animator.operation(), NavOperation::Push);
        assert_eq!(animator.transition_duration(&ctx), NAVIGATION_TRANSITION_DURATION);

        let shorter = MaskedTransitionAnimator::new(NavOperation::Pop)
            .with_duration(Duration::from_millis(125));
        assert_eq!(shorter.transition_duration(&ctx), Duration::from_millis(125));
    }
}
