use crate::core::playback::PlaylistId;
use wasm_bindgen::JsCast;
use web_sys as web;

const PLAYER_ID: &str = "lofi-player";
const PANEL_ID: &str = "player-panel";

/// Insert the hidden playlist iframe if it is not already mounted.
pub fn mount(document: &web::Document, playlist: PlaylistId) -> anyhow::Result<()> {
    if document.get_element_by_id(PLAYER_ID).is_some() {
        return Ok(());
    }
    let panel = document
        .get_element_by_id(PANEL_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", PANEL_ID))?;
    let frame = document
        .create_element("iframe")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .dyn_into::<web::HtmlIFrameElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    frame.set_id(PLAYER_ID);
    frame.set_src(&playlist.embed_url());
    frame.set_title("Lo-fi playlist");
    _ = frame.set_attribute("allow", "autoplay");
    _ = frame.class_list().add_1("hidden");
    panel
        .append_child(&frame)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    log::info!("[player] mounted playlist {}", playlist.as_str());
    Ok(())
}

pub fn unmount(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PLAYER_ID) {
        el.remove();
        log::info!("[player] unmounted");
    }
}

/// The iframe exists exactly while playback is on.
pub fn sync(document: &web::Document, playlist: PlaylistId, playing: bool) {
    if playing {
        if let Err(e) = mount(document, playlist) {
            log::error!("[player] mount failed: {:?}", e);
        }
    } else {
        unmount(document);
    }
}
