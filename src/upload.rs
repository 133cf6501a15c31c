use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use kagami_core::{
    fit_within, validate_upload, FileFacts, FittedSize, PageConfig, ProcessingGate,
    ProcessingGuard, UploadRejection, PROCESSING_FAILED_MESSAGE,
};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{File, HtmlElement, HtmlImageElement, HtmlInputElement};

use crate::dom::{LoadingIndicator, PageElements, HIDDEN_CLASS};
use crate::media::{decode_bitmap, next_frame, ObjectUrl};
use crate::mirror::{MirrorCanvas, MirrorError, MirrorSource};
use crate::notify::Notifier;

#[derive(Debug)]
pub enum UploadOutcome {
    Rejected(UploadRejection),
    Ignored,
    Started,
    Failed(MirrorError),
}

pub struct UploadPipeline {
    input: HtmlInputElement,
    display_area: HtmlElement,
    preview: HtmlImageElement,
    mirror: Rc<MirrorCanvas>,
    loading: LoadingIndicator,
    gate: ProcessingGate,
    notifier: Rc<dyn Notifier>,
    max_file_bytes: u64,
    max_edge: u32,
}

impl UploadPipeline {
    pub fn new(
        elements: &PageElements,
        mirror: Rc<MirrorCanvas>,
        loading: LoadingIndicator,
        notifier: Rc<dyn Notifier>,
        config: &PageConfig,
    ) -> Rc<Self> {
        Rc::new(Self {
            input: elements.input.clone(),
            display_area: elements.display_area.clone(),
            preview: elements.preview.clone(),
            mirror,
            loading,
            gate: ProcessingGate::new(),
            notifier,
            max_file_bytes: config.max_file_bytes,
            max_edge: config.upload_max_edge,
        })
    }

    pub fn listen(self: &Rc<Self>) -> EventListener {
        let pipeline = Rc::clone(self);
        EventListener::new(&self.input, "change", move |_event| {
            let file = pipeline.input.files().and_then(|files| files.get(0));
            pipeline.handle_selection(file);
        })
    }

    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    pub fn loading(&self) -> &LoadingIndicator {
        &self.loading
    }

    pub fn handle_selection(self: &Rc<Self>, file: Option<File>) -> UploadOutcome {
        let file = match self.validate(file) {
            Ok(file) => file,
            Err(rejection) => {
                console::warn!("upload rejected", rejection.to_string());
                self.input.set_value("");
                self.notifier.notify(&rejection.to_string());
                return UploadOutcome::Rejected(rejection);
            }
        };
        let Some(guard) = self.gate.try_begin() else {
            console::log!("upload ignored while another image is processing");
            return UploadOutcome::Ignored;
        };

        self.loading.show();
        let url = match ObjectUrl::for_blob(&file) {
            Ok(url) => url,
            Err(err) => {
                let err = MirrorError::decode(err);
                drop(guard);
                self.report_failure(&err);
                return UploadOutcome::Failed(err);
            }
        };
        let _ = self.display_area.class_list().remove_1(HIDDEN_CLASS);
        self.preview.set_src(url.as_str());
        console::log!("upload started", file.name(), file.size());

        let pipeline = Rc::clone(self);
        spawn_local(async move {
            pipeline.run(file, url, guard).await;
        });
        UploadOutcome::Started
    }

    fn validate(&self, file: Option<File>) -> Result<File, UploadRejection> {
        let facts = file
            .as_ref()
            .map(|file| FileFacts::new(file.type_(), file.size() as u64));
        validate_upload(facts.as_ref(), self.max_file_bytes)?;
        file.ok_or(UploadRejection::Missing)
    }

    async fn run(&self, file: File, url: ObjectUrl, guard: ProcessingGuard) {
        let rendered = self.render_upload(&file).await;
        if rendered.is_ok() {
            // The preview keeps its pixels after the URL is revoked once decoded.
            let _ = JsFuture::from(self.preview.decode()).await;
        }
        drop(url);
        match rendered {
            Ok(size) => {
                self.loading.hide();
                console::log!("mirror rendered", size.width, size.height);
            }
            Err(err) => self.report_failure(&err),
        }
        drop(guard);
    }

    async fn render_upload(&self, file: &File) -> Result<FittedSize, MirrorError> {
        let bitmap = decode_bitmap(file).await.map_err(MirrorError::decode)?;
        let size = fit_within(bitmap.width(), bitmap.height(), self.max_edge);
        next_frame().await.map_err(MirrorError::render)?;
        self.mirror.draw_mirrored(MirrorSource::Bitmap(&bitmap), size)?;
        Ok(size)
    }

    fn report_failure(&self, err: &MirrorError) {
        console::error!("image processing failed", err.to_string());
        self.loading.hide();
        self.input.set_value("");
        self.notifier.notify(PROCESSING_FAILED_MESSAGE);
    }
}
