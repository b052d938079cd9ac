use cubewalk_core::Cue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::constants::AUDIO_BASE_PATH;

#[inline]
pub fn cue_url(cue: Cue) -> String {
    format!("{}{}", AUDIO_BASE_PATH, cue.file_name())
}

// Fire-and-forget playback. A rejected play() promise (autoplay policy,
// missing file) is swallowed.
pub fn play_cue(cue: Cue) {
    let Ok(el) = web::HtmlAudioElement::new_with_src(&cue_url(cue)) else {
        return;
    };
    if let Ok(promise) = el.play() {
        spawn_local(async move {
            _ = JsFuture::from(promise).await;
        });
    }
}
