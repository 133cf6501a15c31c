use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::{Interval, Timeout};
use js_sys::Date;
use kagami_core::config::MAX_TIMER_MS;
use kagami_core::{BannerUpdate, PageConfig, PollClock, PollPhase, VisitorCount};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::dom::{set_visible, BANNER_ID, COUNTER_ID};

pub struct VisitorWatcher {
    document: Document,
    count: RefCell<VisitorCount>,
    clock: RefCell<PollClock>,
    steady_poll_ms: u32,
    frame: RefCell<Option<AnimationFrame>>,
    switch_timer: RefCell<Option<Timeout>>,
    interval: RefCell<Option<Interval>>,
}

impl VisitorWatcher {
    pub fn new(document: Document, config: &PageConfig, started_at_ms: f64) -> Rc<Self> {
        Rc::new(Self {
            document,
            count: RefCell::new(VisitorCount::new(config.celebrate_every)),
            clock: RefCell::new(PollClock::new(started_at_ms, config.warmup_ms)),
            steady_poll_ms: config.steady_poll_ms,
            frame: RefCell::new(None),
            switch_timer: RefCell::new(None),
            interval: RefCell::new(None),
        })
    }

    pub fn phase(&self) -> PollPhase {
        self.clock.borrow().phase()
    }

    pub fn last_count(&self) -> i64 {
        self.count.borrow().last()
    }

    pub fn start(self: &Rc<Self>) {
        if self.check_phase() {
            return;
        }
        self.poll_once();
        self.request_frame();
        self.schedule_switch();
    }

    pub fn stop(&self) {
        self.frame.borrow_mut().take();
        self.switch_timer.borrow_mut().take();
        self.interval.borrow_mut().take();
    }

    pub fn poll_once(&self) -> BannerUpdate {
        let text = self.read_counter();
        let update = self.count.borrow_mut().observe(text.as_deref());
        self.apply(&update);
        update
    }

    fn request_frame(self: &Rc<Self>) {
        let watcher = Rc::clone(self);
        let handle = request_animation_frame(move |_timestamp| {
            watcher.on_frame();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(self: &Rc<Self>) {
        self.frame.borrow_mut().take();
        if self.check_phase() {
            return;
        }
        self.poll_once();
        self.request_frame();
    }

    // Frames stop in background tabs, so a timer also drives the switch.
    fn schedule_switch(self: &Rc<Self>) {
        let remaining = self.clock.borrow().remaining_warmup_ms(Date::now());
        let watcher = Rc::clone(self);
        let delay = (remaining.ceil() as u32).saturating_add(1).min(MAX_TIMER_MS);
        *self.switch_timer.borrow_mut() = Some(Timeout::new(delay, move || {
            watcher.switch_timer.borrow_mut().take();
            if !watcher.check_phase() {
                watcher.schedule_switch();
            }
        }));
    }

    fn check_phase(self: &Rc<Self>) -> bool {
        let switched = self.clock.borrow_mut().advance(Date::now());
        match switched {
            Some(PollPhase::Steady) => {
                self.enter_steady();
                true
            }
            _ => self.phase() == PollPhase::Steady,
        }
    }

    fn enter_steady(self: &Rc<Self>) {
        self.frame.borrow_mut().take();
        self.switch_timer.borrow_mut().take();
        console::log!("visitor counter: steady polling every", self.steady_poll_ms, "ms");
        let watcher = Rc::clone(self);
        *self.interval.borrow_mut() = Some(Interval::new(self.steady_poll_ms, move || {
            watcher.poll_once();
        }));
    }

    fn read_counter(&self) -> Option<String> {
        let element = self.document.get_element_by_id(COUNTER_ID)?;
        let text = match element.dyn_ref::<HtmlElement>() {
            Some(element) => element.inner_text(),
            None => element.text_content().unwrap_or_default(),
        };
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    fn apply(&self, update: &BannerUpdate) {
        if *update == BannerUpdate::Unchanged {
            return;
        }
        let Some(banner) = self
            .document
            .get_element_by_id(BANNER_ID)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        else {
            console::warn!("visitor counter: banner element missing");
            return;
        };
        match update {
            BannerUpdate::Show { message, .. } => {
                banner.set_text_content(Some(message.as_str()));
                set_visible(&banner, true);
            }
            BannerUpdate::Hide => set_visible(&banner, false),
            BannerUpdate::Unchanged => {}
        }
    }
}
