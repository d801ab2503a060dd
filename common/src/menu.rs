//! Debug menu controller.
//!
//! Cycles through the pages of a [`Registry`] until the back control is
//! pressed:
//!
//! - **L**: next page (wraps from the last page to the first)
//! - **R**: leave the menu
//!
//! Each iteration draws one frame (`"<n>/<len>"` indicator, page title,
//! page body) and then handles the events that were pending when the frame
//! finished. Events arriving during that drain wait for the next iteration.

use core::fmt::Write;

use crate::config::{TEXT_MARGIN, TITLE_ROW};
use crate::events::{Control, Event, EventQueue};
use crate::graphics::Graphics;
use crate::registry::Registry;

/// Controller state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuState {
    /// Showing the page at `cursor`.
    Active { cursor: usize },
    /// Back was pressed; the caller must [`DebugMenu::finish`] the queue.
    Exited,
}

/// Debug menu over a page registry.
pub struct DebugMenu<'a> {
    registry: Registry<'a>,
    state: MenuState,
}

impl<'a> DebugMenu<'a> {
    pub const fn new(registry: Registry<'a>) -> Self {
        Self {
            registry,
            state: MenuState::Active { cursor: 0 },
        }
    }

    #[inline]
    pub const fn state(&self) -> MenuState { self.state }

    /// Index of the page on screen, `None` once exited.
    #[inline]
    pub const fn cursor(&self) -> Option<usize> {
        match self.state {
            MenuState::Active { cursor } => Some(cursor),
            MenuState::Exited => None,
        }
    }

    #[inline]
    pub const fn registry(&self) -> &Registry<'a> { &self.registry }

    /// Draw one frame of the current page. Does nothing once exited.
    pub fn render(
        &self,
        gfx: &mut dyn Graphics,
    ) {
        let MenuState::Active { cursor } = self.state else {
            return;
        };

        gfx.begin_frame(false);
        gfx.set_print_pos(TEXT_MARGIN, TITLE_ROW);
        match self.registry.entry(cursor) {
            Some((title, page)) => {
                let _ = write!(gfx, "{}/{}", cursor + 1, self.registry.len());
                gfx.print(title);
                page.render(gfx);
            }
            None => {
                let _ = write!(gfx, "0/{}", self.registry.len());
            }
        }
        gfx.end_frame();
    }

    /// Apply one event. Only the control is inspected.
    pub fn handle(
        &mut self,
        event: Event,
    ) -> MenuState {
        if let MenuState::Active { cursor } = self.state {
            match event.control {
                Control::ButtonR => {
                    debug!("debug menu: exit");
                    self.state = MenuState::Exited;
                }
                Control::ButtonL => {
                    let next = self.registry.next(cursor);
                    debug!("debug menu: page {}", next + 1);
                    self.state = MenuState::Active { cursor: next };
                }
                _ => {}
            }
        }
        self.state
    }

    /// Handle the events pending right now, leaving later arrivals queued.
    pub fn poll(
        &mut self,
        queue: &mut dyn EventQueue,
    ) -> MenuState {
        let pending = queue.len();
        for _ in 0..pending {
            let Some(event) = queue.pull_event() else {
                break;
            };
            self.handle(event);
        }
        self.state
    }

    /// One loop iteration: draw the frame, then drain the queue.
    pub fn step(
        &mut self,
        gfx: &mut dyn Graphics,
        queue: &mut dyn EventQueue,
    ) -> MenuState {
        self.render(gfx);
        self.poll(queue)
    }

    /// Release the queue after exit: drop leftovers and wake the producer.
    pub fn finish(queue: &mut dyn EventQueue) {
        queue.flush();
        queue.poke();
    }

    /// Run the menu until back is pressed. `idle` runs between iterations.
    pub fn run(
        mut self,
        gfx: &mut dyn Graphics,
        queue: &mut dyn EventQueue,
        mut idle: impl FnMut(),
    ) {
        info!("DEBUG/STATS MENU");
        while self.step(gfx, queue) != MenuState::Exited {
            idle();
        }
        Self::finish(queue);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use super::*;
    use crate::events::BoundedEventQueue;
    use crate::graphics::recorder::{DrawOp, Recorder};
    use crate::pages::DebugPage;
    use crate::registry::MenuEntry;
    use crate::stats::EventCounters;

    /// Page that prints its own name.
    struct Named(&'static str);

    impl DebugPage for Named {
        fn render(
            &self,
            gfx: &mut dyn Graphics,
        ) {
            gfx.print(self.0);
        }
    }

    static A: Named = Named("page-a");
    static B: Named = Named("page-b");
    static C: Named = Named("page-c");

    fn pages() -> Registry<'static> {
        let entries = Box::leak(Box::new([
            MenuEntry::page(" A", &A),
            MenuEntry::page(" B", &B),
            MenuEntry::page(" C", &C),
            MenuEntry::End,
        ]));
        Registry::new(entries)
    }

    fn next() -> Event { Event::press(Control::ButtonL) }

    fn back() -> Event { Event::press(Control::ButtonR) }

    /// Queue that feeds a producer event in while the consumer is draining.
    struct RacingQueue {
        events: VecDeque<Event>,
        late: Option<Event>,
        flushed: bool,
        pokes: u32,
    }

    impl EventQueue for RacingQueue {
        fn len(&self) -> usize { self.events.len() }

        fn pull_event(&mut self) -> Option<Event> {
            if let Some(late) = self.late.take() {
                self.events.push_back(late);
            }
            self.events.pop_front()
        }

        fn flush(&mut self) {
            self.events.clear();
            self.flushed = true;
        }

        fn poke(&mut self) { self.pokes += 1; }
    }

    /// Queue whose contents the `idle` callback can also reach.
    struct SharedQueue {
        events: Rc<RefCell<VecDeque<Event>>>,
        pokes: u32,
    }

    impl EventQueue for SharedQueue {
        fn len(&self) -> usize { self.events.borrow().len() }

        fn pull_event(&mut self) -> Option<Event> { self.events.borrow_mut().pop_front() }

        fn flush(&mut self) { self.events.borrow_mut().clear(); }

        fn poke(&mut self) { self.pokes += 1; }
    }

    #[test]
    fn test_starts_on_first_page() {
        let menu = DebugMenu::new(pages());
        assert_eq!(menu.state(), MenuState::Active { cursor: 0 });
        assert_eq!(menu.cursor(), Some(0));
    }

    #[test]
    fn test_advancing_len_times_returns_to_start() {
        let registry = pages();
        let mut menu = DebugMenu::new(registry);
        for _ in 0..registry.len() {
            menu.handle(next());
        }
        assert_eq!(menu.cursor(), Some(0));
    }

    #[test]
    fn test_advance_from_last_wraps_to_first() {
        let mut menu = DebugMenu::new(pages());
        menu.handle(next());
        menu.handle(next());
        assert_eq!(menu.cursor(), Some(2));
        assert_eq!(menu.handle(next()), MenuState::Active { cursor: 0 });
    }

    #[test]
    fn test_other_controls_are_ignored() {
        let mut menu = DebugMenu::new(pages());
        for control in [Control::ButtonUp, Control::ButtonDown, Control::EncoderL, Control::EncoderR] {
            menu.handle(Event::press(control));
            menu.handle(Event::encoder(control, 1));
        }
        assert_eq!(menu.cursor(), Some(0));

        // kind is not inspected
        menu.handle(Event::long_press(Control::ButtonL));
        assert_eq!(menu.cursor(), Some(1));
    }

    #[test]
    fn test_advance_then_back_exits_and_releases_queue() {
        let counters = EventCounters::new();
        let mut queue: BoundedEventQueue<8> = BoundedEventQueue::new(&counters);
        let mut gfx = Recorder::new();
        let mut menu = DebugMenu::new(pages());

        queue.push(next());
        assert_eq!(menu.step(&mut gfx, &mut queue), MenuState::Active { cursor: 1 });
        queue.push(back());
        queue.push(next());
        assert_eq!(menu.step(&mut gfx, &mut queue), MenuState::Exited);

        DebugMenu::finish(&mut queue);
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.pokes(), 1);
        assert_eq!(gfx.text_at(2, 2), "2/3 Bpage-b");
    }

    #[test]
    fn test_run_loops_until_back() {
        let events = Rc::new(RefCell::new(VecDeque::new()));
        let mut queue = SharedQueue {
            events: Rc::clone(&events),
            pokes: 0,
        };
        let mut gfx = Recorder::new();
        let mut idles = 0;

        events.borrow_mut().push_back(next());
        DebugMenu::new(pages()).run(&mut gfx, &mut queue, || {
            idles += 1;
            if idles == 3 {
                events.borrow_mut().push_back(back());
                events.borrow_mut().push_back(next());
            }
        });

        assert_eq!(idles, 3);
        assert_eq!(gfx.frames_ended(), 4);
        assert!(events.borrow().is_empty());
        assert_eq!(queue.pokes, 1);
    }

    #[test]
    fn test_drain_is_bounded_by_snapshot() {
        let mut queue = RacingQueue {
            events: VecDeque::from([next()]),
            late: Some(next()),
            flushed: false,
            pokes: 0,
        };
        let mut gfx = Recorder::new();
        let mut menu = DebugMenu::new(pages());

        assert_eq!(menu.step(&mut gfx, &mut queue), MenuState::Active { cursor: 1 });
        assert_eq!(queue.len(), 1);

        assert_eq!(menu.step(&mut gfx, &mut queue), MenuState::Active { cursor: 2 });
        assert_eq!(queue.len(), 0);
        assert!(!queue.flushed);
    }

    #[test]
    fn test_events_after_back_do_not_move_cursor() {
        let counters = EventCounters::new();
        let mut queue: BoundedEventQueue<8> = BoundedEventQueue::new(&counters);
        let mut menu = DebugMenu::new(pages());
        queue.push(back());
        queue.push(next());

        assert_eq!(menu.poll(&mut queue), MenuState::Exited);
        assert_eq!(queue.len(), 0);
        assert_eq!(menu.cursor(), None);
    }

    #[test]
    fn test_frame_layout() {
        let mut gfx = Recorder::new();
        let menu = DebugMenu::new(pages());
        menu.render(&mut gfx);

        assert_eq!(gfx.ops[..2], [DrawOp::BeginFrame(false), DrawOp::Pos(TEXT_MARGIN, TITLE_ROW)]);
        assert_eq!(gfx.text_at(TEXT_MARGIN, TITLE_ROW), "1/3 Apage-a");
        assert_eq!(gfx.ops.last(), Some(&DrawOp::EndFrame));
        assert_eq!(gfx.frames_ended(), 1);
    }

    #[test]
    fn test_indicator_follows_cursor() {
        let mut gfx = Recorder::new();
        let mut menu = DebugMenu::new(pages());
        menu.handle(next());
        menu.handle(next());
        menu.render(&mut gfx);
        assert_eq!(gfx.text_at(TEXT_MARGIN, TITLE_ROW), "3/3 Cpage-c");
    }

    #[test]
    fn test_exited_menu_draws_nothing() {
        let mut gfx = Recorder::new();
        let mut menu = DebugMenu::new(pages());
        menu.handle(back());
        menu.render(&mut gfx);
        assert!(gfx.ops.is_empty());
    }

    #[test]
    fn test_empty_registry_still_exits() {
        let counters = EventCounters::new();
        let mut queue: BoundedEventQueue<4> = BoundedEventQueue::new(&counters);
        let mut gfx = Recorder::new();
        let entries = [MenuEntry::End];
        let mut menu = DebugMenu::new(Registry::new(&entries));

        queue.push(next());
        assert_eq!(menu.step(&mut gfx, &mut queue), MenuState::Active { cursor: 0 });
        assert_eq!(gfx.frame_text(), "0/0");

        queue.push(back());
        assert_eq!(menu.step(&mut gfx, &mut queue), MenuState::Exited);
    }
}
