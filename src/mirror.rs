use kagami_core::config::BLANK_CANVAS_FILL;
use kagami_core::FittedSize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CanvasRenderingContext2d, ContextAttributes2d, HtmlCanvasElement, HtmlImageElement,
    ImageBitmap,
};

use crate::dom::{js_error_text, PageError};

#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("image decode failed: {0}")]
    Decode(String),
    #[error("image render failed: {0}")]
    Render(String),
    #[error("image has no pixels")]
    EmptyImage,
}

impl MirrorError {
    pub(crate) fn decode(value: JsValue) -> Self {
        MirrorError::Decode(js_error_text(&value))
    }

    pub(crate) fn render(value: JsValue) -> Self {
        MirrorError::Render(js_error_text(&value))
    }
}

#[derive(Clone, Copy)]
pub enum MirrorSource<'a> {
    Bitmap(&'a ImageBitmap),
    Image(&'a HtmlImageElement),
}

impl MirrorSource<'_> {
    pub fn natural_size(&self) -> (u32, u32) {
        match self {
            MirrorSource::Bitmap(bitmap) => (bitmap.width(), bitmap.height()),
            MirrorSource::Image(image) => (image.natural_width(), image.natural_height()),
        }
    }
}

pub struct MirrorCanvas {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl MirrorCanvas {
    pub fn attach(canvas: HtmlCanvasElement) -> Result<Self, PageError> {
        let options = ContextAttributes2d::new();
        options.set_alpha(false);
        options.set_will_read_frequently(true);
        let ctx = canvas
            .get_context_with_context_options("2d", &options)?
            .ok_or(PageError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| PageError::NoContext)?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn size(&self) -> FittedSize {
        FittedSize::new(self.canvas.width(), self.canvas.height())
    }

    pub fn paint_blank(&self, edge: u32) {
        self.canvas.set_width(edge);
        self.canvas.set_height(edge);
        self.ctx.set_fill_style_str(BLANK_CANVAS_FILL);
        self.ctx.fill_rect(0.0, 0.0, edge as f64, edge as f64);
    }

    pub fn draw_mirrored(
        &self,
        source: MirrorSource<'_>,
        size: FittedSize,
    ) -> Result<(), MirrorError> {
        if size.width == 0 || size.height == 0 {
            return Err(MirrorError::EmptyImage);
        }
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
        let width = size.width as f64;
        let height = size.height as f64;

        self.ctx.save();
        let drawn = self.flip_and_draw(source, width, height);
        self.ctx.restore();
        drawn.map_err(MirrorError::render)
    }

    fn flip_and_draw(
        &self,
        source: MirrorSource<'_>,
        width: f64,
        height: f64,
    ) -> Result<(), JsValue> {
        self.ctx.translate(width, 0.0)?;
        self.ctx.scale(-1.0, 1.0)?;
        match source {
            MirrorSource::Bitmap(bitmap) => self
                .ctx
                .draw_image_with_image_bitmap_and_dw_and_dh(bitmap, 0.0, 0.0, width, height),
            MirrorSource::Image(image) => self
                .ctx
                .draw_image_with_html_image_element_and_dw_and_dh(image, 0.0, 0.0, width, height),
        }
    }
}
