//! Headless walkthrough of the presentation styles: an alert, a
//! tap-dismissed sheet, and a masked push/pop, stepped at 60 fps with the
//! resulting layer states logged. Run with `RUST_LOG=debug` to watch the
//! transition lifecycle.

use std::rc::Rc;
use std::time::{Duration, Instant};

use scrim_core::{Layer, Rect, Size, Vec2};
use scrim_modal::{AlertHost, ModalPresenter, ModalSurface, SheetHost};
use scrim_navigation::MaskedNavigator;

const FRAME: Duration = Duration::from_millis(16);

fn step(presenter: &mut ModalPresenter, start: Instant, frames: u32) -> Instant {
    let mut now = start;
    for _ in 0..frames {
        now += FRAME;
        presenter.tick(now);
    }
    now
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let container = Layer::with_frame("screen", Rect::new(0.0, 0.0, 390.0, 844.0));
    let mut presenter = ModalPresenter::new(container.clone());
    let mut now = Instant::now();

    // An alert: centered, scale-and-fade, dimmed backdrop.
    let alert = Rc::new(AlertHost::new(
        Layer::new("alert-content"),
        Size::new(0.0, 140.0),
    ));
    let delegate = alert.delegate();
    presenter.present(alert.clone(), delegate, true, now)?;
    now = step(&mut presenter, now, 20);
    log::info!(
        "alert presented at {:?}, {} layers on screen",
        alert.layer().frame(),
        container.child_count()
    );

    presenter.dismiss(true, now)?;
    now = step(&mut presenter, now, 10);
    log::info!("alert dismissed, {} layers on screen", container.child_count());

    // A sheet: bottom-anchored, slide-up, tap the backdrop to dismiss.
    let sheet = Rc::new(SheetHost::new(Layer::new("sheet-content"), 300.0));
    sheet.set_dismiss_handler(|| log::info!("sheet dismissed by backdrop tap"));
    let delegate = sheet.delegate();
    presenter.present(sheet.clone(), delegate, true, now)?;
    now = step(&mut presenter, now, 10);
    log::info!("sheet presented at {:?}", sheet.layer().frame());

    presenter.handle_tap(Vec2::new(20.0, 20.0), now);
    now = step(&mut presenter, now, 10);
    log::info!("after tap, {} layers on screen", container.child_count());

    // Navigation: masked push, then pop.
    let nav_container = Layer::with_frame("nav", Rect::new(0.0, 0.0, 390.0, 844.0));
    let mut nav = MaskedNavigator::new(nav_container, Layer::new("home"));
    nav.push(Layer::new("detail"), true, now);
    for _ in 0..20 {
        now += FRAME;
        nav.tick(now);
    }
    log::info!("pushed, stack depth {}", nav.depth());
    nav.pop(true, now);
    for _ in 0..20 {
        now += FRAME;
        nav.tick(now);
    }
    log::info!("popped, stack depth {}", nav.depth());

    Ok(())
}
