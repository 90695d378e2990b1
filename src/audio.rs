//! Fire-and-forget playback of the boundary notification sound.

use log::warn;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;

/// Play `src` once, detached. Playback failures (asset unreachable, autoplay
/// blocked by the browser) are logged and otherwise swallowed; they must never
/// stall a timer transition.
pub fn play_notification(src: &str) {
    let audio = match HtmlAudioElement::new_with_src(src) {
        Ok(audio) => audio,
        Err(err) => {
            warn!("failed to create notification audio element: {:?}", err);
            return;
        }
    };
    match audio.play() {
        Ok(promise) => spawn_local(async move {
            // Completion is not awaited anywhere; we only surface rejections.
            if let Err(err) = JsFuture::from(promise).await {
                warn!("notification playback rejected: {:?}", err);
            }
        }),
        Err(err) => warn!("notification playback could not start: {:?}", err),
    }
}
