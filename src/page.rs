use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use js_sys::Date;
use kagami_core::PageConfig;
use web_sys::Document;

use crate::config::load_page_config;
use crate::dom::{self, LoadingIndicator, PageElements, PageError};
use crate::mirror::MirrorCanvas;
use crate::notify::{AlertNotifier, Notifier};
use crate::resize::ResizeRerender;
use crate::upload::UploadPipeline;
use crate::visitor::VisitorWatcher;

thread_local! {
    static PAGE: RefCell<Option<Rc<Page>>> = RefCell::new(None);
}

pub struct Page {
    mirror: Rc<MirrorCanvas>,
    upload: Rc<UploadPipeline>,
    resize: Rc<ResizeRerender>,
    visitor: Rc<VisitorWatcher>,
    _listeners: Vec<EventListener>,
}

impl Page {
    pub fn mount(
        document: &Document,
        config: &PageConfig,
        notifier: Rc<dyn Notifier>,
    ) -> Result<Rc<Self>, PageError> {
        let window = dom::window()?;
        let elements = PageElements::bind(document)?;
        let mirror = Rc::new(MirrorCanvas::attach(elements.canvas.clone())?);
        mirror.paint_blank(config.blank_canvas_edge);
        let loading = LoadingIndicator::mount(document, &elements.loading_host)?;

        let upload = UploadPipeline::new(&elements, Rc::clone(&mirror), loading, notifier, config);
        let resize = ResizeRerender::new(&elements, Rc::clone(&mirror), config);
        let visitor = VisitorWatcher::new(document.clone(), config, Date::now());
        let listeners = vec![upload.listen(), resize.listen(&window)];
        visitor.start();

        Ok(Rc::new(Self {
            mirror,
            upload,
            resize,
            visitor,
            _listeners: listeners,
        }))
    }

    pub fn mirror(&self) -> &Rc<MirrorCanvas> {
        &self.mirror
    }

    pub fn upload(&self) -> &Rc<UploadPipeline> {
        &self.upload
    }

    pub fn resize(&self) -> &Rc<ResizeRerender> {
        &self.resize
    }

    pub fn visitor(&self) -> &Rc<VisitorWatcher> {
        &self.visitor
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.visitor.stop();
        self.resize.cancel();
    }
}

pub fn start() {
    console_error_panic_hook::set_once();
    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            console::error!("kagami: startup failed", err.to_string());
            return;
        }
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_event| boot()).forget();
    } else {
        boot();
    }
}

fn boot() {
    let config = load_page_config();
    console::log!("kagami: config", format!("{config:?}"));
    let mounted = dom::document()
        .and_then(|document| Page::mount(&document, &config, Rc::new(AlertNotifier)));
    match mounted {
        Ok(page) => {
            console::log!("kagami: page ready");
            PAGE.with(|slot| *slot.borrow_mut() = Some(page));
        }
        Err(err) => console::error!("kagami: page unavailable", err.to_string()),
    }
}
