use glquad_common::gpu::ImageSource;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlImageElement;

/// An `<img>` already present in the page.
pub struct DomImage {
    element: HtmlImageElement,
}

impl DomImage {
    pub fn find(image_id: &str) -> Option<Self> {
        let element = web_sys::window()?
            .document()?
            .get_element_by_id(image_id)?
            .dyn_into::<HtmlImageElement>()
            .ok()?;
        Some(Self { element })
    }
}

impl ImageSource for DomImage {
    type Image = HtmlImageElement;

    fn is_complete(&self) -> bool {
        self.element.complete()
    }

    async fn loaded(&self) -> Result<(), String> {
        let image = &self.element;
        let promise = js_sys::Promise::new(&mut |resolve, reject| {
            let on_load = Closure::once(move || {
                let _ = resolve.call0(&JsValue::NULL);
            });
            let on_error = Closure::once(move |err: JsValue| {
                let _ = reject.call1(&JsValue::NULL, &err);
            });

            image.set_onload(Some(on_load.as_ref().unchecked_ref()));
            image.set_onerror(Some(on_error.as_ref().unchecked_ref()));

            on_load.forget();
            on_error.forget();
        });

        let result = wasm_bindgen_futures::JsFuture::from(promise).await;
        image.set_onload(None);
        image.set_onerror(None);

        result
            .map(|_| ())
            .map_err(|_| format!("'{}' failed to load", image.src()))
    }

    fn image(&self) -> &HtmlImageElement {
        &self.element
    }
}
