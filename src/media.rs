use std::ops::Deref;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, ImageBitmap, Url};

#[derive(Debug)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    pub fn for_blob(blob: &Blob) -> Result<Self, JsValue> {
        Url::create_object_url_with_blob(blob).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.0);
    }
}

#[derive(Debug)]
pub struct OwnedBitmap(ImageBitmap);

impl Deref for OwnedBitmap {
    type Target = ImageBitmap;

    fn deref(&self) -> &ImageBitmap {
        &self.0
    }
}

impl Drop for OwnedBitmap {
    fn drop(&mut self) {
        self.0.close();
    }
}

pub async fn decode_bitmap(blob: &Blob) -> Result<OwnedBitmap, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let promise = window.create_image_bitmap_with_blob(blob)?;
    let bitmap = JsFuture::from(promise).await?.dyn_into::<ImageBitmap>()?;
    Ok(OwnedBitmap(bitmap))
}

pub async fn next_frame() -> Result<f64, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(err) = window.request_animation_frame(&resolve) {
            let _ = reject.call1(&JsValue::NULL, &err);
        }
    });
    let timestamp = JsFuture::from(promise).await?;
    Ok(timestamp.as_f64().unwrap_or_default())
}
