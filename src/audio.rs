use anyhow::anyhow;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub const MUSIC_ELEMENT_ID: &str = "background-music";
pub const MUTE_BUTTON_ID: &str = "mute-button";
pub const MUTE_ICON: &str = "./images/muteIcon.png";
pub const UNMUTE_ICON: &str = "./images/unmuteIcon.png";

/// Looping background track behind the mute button. Starts paused; browsers
/// only allow playback after a user gesture.
#[derive(Clone)]
pub struct BackgroundMusic {
    element: web::HtmlAudioElement,
    button: Option<web::HtmlImageElement>,
}

impl BackgroundMusic {
    pub fn from_document(document: &web::Document) -> anyhow::Result<Self> {
        let element = document
            .get_element_by_id(MUSIC_ELEMENT_ID)
            .ok_or_else(|| anyhow!("missing #{}", MUSIC_ELEMENT_ID))?
            .dyn_into::<web::HtmlAudioElement>()
            .map_err(|e| anyhow!("#{} is not <audio>: {:?}", MUSIC_ELEMENT_ID, e))?;
        element.set_loop(true);
        let button = document
            .get_element_by_id(MUTE_BUTTON_ID)
            .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok());
        if button.is_none() {
            log::warn!("[audio] no #{} image", MUTE_BUTTON_ID);
        }
        let music = Self { element, button };
        music.sync_icon(false);
        Ok(music)
    }

    pub fn is_playing(&self) -> bool {
        !self.element.paused()
    }

    pub fn toggle(&self) {
        if self.is_playing() {
            _ = self.element.pause();
            self.sync_icon(false);
            log::info!("[audio] paused");
            return;
        }
        match self.element.play() {
            Ok(promise) => {
                self.sync_icon(true);
                let this = self.clone();
                spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::warn!("[audio] play rejected: {:?}", e);
                        this.sync_icon(false);
                    } else {
                        log::info!("[audio] playing");
                    }
                });
            }
            Err(e) => log::warn!("[audio] play failed: {:?}", e),
        }
    }

    fn sync_icon(&self, playing: bool) {
        if let Some(button) = &self.button {
            button.set_src(if playing { UNMUTE_ICON } else { MUTE_ICON });
        }
    }
}
