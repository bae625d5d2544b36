use async_trait::async_trait;

use super::{Coordinates, GeoError, PositionRequest, PositionSource};

/// `navigator.geolocation`, adapted to a future.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPositionSource;

#[cfg(target_arch = "wasm32")]
mod imp {
    use super::*;
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    fn navigator() -> Option<web_sys::Navigator> {
        web_sys::window().map(|w| w.navigator())
    }

    pub fn is_supported() -> bool {
        navigator()
            .map(|nav| js_sys::Reflect::has(&nav, &"geolocation".into()).unwrap_or(false))
            .unwrap_or(false)
    }

    fn error_from_js(err: &JsValue) -> GeoError {
        let code = js_sys::Reflect::get(err, &"code".into())
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as u16;
        let message = js_sys::Reflect::get(err, &"message".into())
            .ok()
            .and_then(|v| v.as_string());
        GeoError::from_code(code, message)
    }

    pub async fn current_position(request: PositionRequest) -> Result<Coordinates, GeoError> {
        let geolocation = navigator()
            .ok_or(GeoError::Unsupported)?
            .geolocation()
            .map_err(|_| GeoError::Unsupported)?;
        let options = web_sys::PositionOptions::new();
        options.set_enable_high_accuracy(request.high_accuracy);
        options.set_timeout(request.timeout_ms);
        options.set_maximum_age(request.maximum_age_ms);

        let promise = js_sys::Promise::new(&mut |resolve, reject| {
            let reject_now = reject.clone();
            let on_success = Closure::once_into_js(move |position: JsValue| {
                let _ = resolve.call1(&JsValue::NULL, &position);
            });
            let on_error = Closure::once_into_js(move |error: JsValue| {
                let _ = reject.call1(&JsValue::NULL, &error);
            });
            if let Err(err) = geolocation.get_current_position_with_error_callback_and_options(
                on_success.unchecked_ref(),
                Some(on_error.unchecked_ref()),
                &options,
            ) {
                let _ = reject_now.call1(&JsValue::NULL, &err);
            }
        });

        let value = JsFuture::from(promise)
            .await
            .map_err(|err| error_from_js(&err))?;
        let position: web_sys::GeolocationPosition = value.unchecked_into();
        let coords = position.coords();
        Ok(Coordinates {
            latitude: coords.latitude(),
            longitude: coords.longitude(),
            accuracy: coords.accuracy(),
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use super::*;

    pub fn is_supported() -> bool {
        false
    }

    pub async fn current_position(_request: PositionRequest) -> Result<Coordinates, GeoError> {
        Err(GeoError::Unsupported)
    }
}

#[async_trait(?Send)]
impl PositionSource for BrowserPositionSource {
    fn is_supported(&self) -> bool {
        imp::is_supported()
    }

    async fn current_position(&self, request: PositionRequest) -> Result<Coordinates, GeoError> {
        imp::current_position(request).await
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn browsers_expose_geolocation() {
        assert!(BrowserPositionSource.is_supported());
    }
}
