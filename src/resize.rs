use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use kagami_core::{fit_within, FittedSize, PageConfig};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::Window;

use crate::dom::PageElements;
use crate::media::next_frame;
use crate::mirror::{MirrorCanvas, MirrorError, MirrorSource};

pub struct ResizeRerender {
    elements: PageElements,
    mirror: Rc<MirrorCanvas>,
    debounce_ms: u32,
    max_edge: u32,
    timer: RefCell<Option<Timeout>>,
    redraws: Cell<u32>,
}

impl ResizeRerender {
    pub fn new(elements: &PageElements, mirror: Rc<MirrorCanvas>, config: &PageConfig) -> Rc<Self> {
        Rc::new(Self {
            elements: elements.clone(),
            mirror,
            debounce_ms: config.resize_debounce_ms,
            max_edge: config.upload_max_edge,
            timer: RefCell::new(None),
            redraws: Cell::new(0),
        })
    }

    pub fn listen(self: &Rc<Self>, window: &Window) -> EventListener {
        let view = Rc::clone(self);
        EventListener::new(window, "resize", move |_event| {
            view.schedule();
        })
    }

    pub fn is_pending(&self) -> bool {
        self.timer.borrow().is_some()
    }

    pub fn redraws(&self) -> u32 {
        self.redraws.get()
    }

    pub fn cancel(&self) {
        self.timer.borrow_mut().take();
    }

    pub fn schedule(self: &Rc<Self>) {
        let view = Rc::clone(self);
        *self.timer.borrow_mut() = Some(Timeout::new(self.debounce_ms, move || {
            view.timer.borrow_mut().take();
            view.rerender();
        }));
    }

    pub fn rerender(self: &Rc<Self>) {
        if !self.elements.preview_shown() {
            return;
        }
        let view = Rc::clone(self);
        spawn_local(async move {
            if let Err(err) = view.redraw_from_preview().await {
                console::warn!("resize redraw skipped", err.to_string());
            }
        });
    }

    pub async fn redraw_from_preview(&self) -> Result<FittedSize, MirrorError> {
        let preview = &self.elements.preview;
        if !preview.complete() || preview.natural_width() == 0 {
            JsFuture::from(preview.decode())
                .await
                .map_err(MirrorError::decode)?;
        }
        let source = MirrorSource::Image(preview);
        let (width, height) = source.natural_size();
        if width == 0 || height == 0 {
            return Err(MirrorError::EmptyImage);
        }
        let size = fit_within(width, height, self.max_edge);
        next_frame().await.map_err(MirrorError::render)?;
        self.mirror.draw_mirrored(source, size)?;
        self.redraws.set(self.redraws.get() + 1);
        Ok(size)
    }
}
