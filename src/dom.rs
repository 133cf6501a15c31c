use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlCanvasElement, HtmlElement, HtmlImageElement, HtmlInputElement, Window,
};

pub const IMAGE_INPUT_ID: &str = "imageInput";
pub const DISPLAY_AREA_ID: &str = "imageDisplayArea";
pub const PREVIEW_IMAGE_ID: &str = "originalImage";
pub const MIRROR_CANVAS_ID: &str = "mirrorImage";
pub const LOADING_HOST_SELECTOR: &str = ".container";
pub const COUNTER_ID: &str = "busuanzi_value_site_pv";
pub const BANNER_ID: &str = "welcomeMessage";
pub const HIDDEN_CLASS: &str = "hidden";

#[derive(Debug, Error)]
pub enum PageError {
    #[error("window unavailable")]
    NoWindow,
    #[error("document unavailable")]
    NoDocument,
    #[error("missing element {0}")]
    MissingElement(&'static str),
    #[error("element {0} has an unexpected type")]
    WrongElement(&'static str),
    #[error("2d canvas context unavailable")]
    NoContext,
    #[error("dom call failed: {0}")]
    Js(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Js(js_error_text(&value))
    }
}

pub fn js_error_text(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::NoDocument)
}

pub fn element_by_id<T: JsCast>(document: &Document, id: &'static str) -> Result<T, PageError> {
    document
        .get_element_by_id(id)
        .ok_or(PageError::MissingElement(id))?
        .dyn_into::<T>()
        .map_err(|_| PageError::WrongElement(id))
}

pub fn set_visible(element: &HtmlElement, visible: bool) {
    let display = if visible { "block" } else { "none" };
    let _ = element.style().set_property("display", display);
}

pub fn is_visible(element: &HtmlElement) -> bool {
    element
        .style()
        .get_property_value("display")
        .map(|value| value != "none")
        .unwrap_or(true)
}

#[derive(Clone)]
pub struct PageElements {
    pub input: HtmlInputElement,
    pub display_area: HtmlElement,
    pub preview: HtmlImageElement,
    pub canvas: HtmlCanvasElement,
    pub loading_host: Element,
}

impl PageElements {
    pub fn bind(document: &Document) -> Result<Self, PageError> {
        let loading_host = document
            .query_selector(LOADING_HOST_SELECTOR)?
            .ok_or(PageError::MissingElement(LOADING_HOST_SELECTOR))?;
        Ok(Self {
            input: element_by_id(document, IMAGE_INPUT_ID)?,
            display_area: element_by_id(document, DISPLAY_AREA_ID)?,
            preview: element_by_id(document, PREVIEW_IMAGE_ID)?,
            canvas: element_by_id(document, MIRROR_CANVAS_ID)?,
            loading_host,
        })
    }

    pub fn preview_shown(&self) -> bool {
        !self.display_area.class_list().contains(HIDDEN_CLASS) && !self.preview.src().is_empty()
    }
}

const LOADING_CLASS: &str = "loading-indicator";
const LOADING_TEXT: &str = "Processing image...";

pub struct LoadingIndicator {
    node: HtmlElement,
}

impl LoadingIndicator {
    pub fn mount(document: &Document, host: &Element) -> Result<Self, PageError> {
        let node = document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| PageError::WrongElement(LOADING_CLASS))?;
        node.set_class_name(LOADING_CLASS);
        node.set_text_content(Some(LOADING_TEXT));
        set_visible(&node, false);
        host.append_child(&node)?;
        Ok(Self { node })
    }

    pub fn show(&self) {
        set_visible(&self.node, true);
    }

    pub fn hide(&self) {
        set_visible(&self.node, false);
    }

    pub fn is_shown(&self) -> bool {
        is_visible(&self.node)
    }
}
