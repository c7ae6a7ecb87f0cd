//! JavaScript generation for detail pages.
//!
//! Generates inline JavaScript for:
//! - Film pages: link modals fed by an embedded JSON payload, with an
//!   alert when a link category is absent
//! - Live pages: HLS playback with a quality selector

use crate::model::types::LinkSet;
use serde::Serialize;

/// Bundle of JavaScript for one page.
pub struct ScriptBundle {
    /// Inline JavaScript to include in the document.
    pub inline_js: String,
}

/// Link tables embedded in a film page for the modal logic.
#[derive(Debug, Serialize)]
pub struct FilmPayload<'a> {
    pub movie_links: &'a LinkSet,
    pub series_links: Option<&'a LinkSet>,
}

/// Serialize a value for a `<script>` context.
///
/// `<` is escaped so catalog strings can never close the tag early.
pub fn script_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace('<', "\\u003c"))
}

/// Generate the JavaScript for a film page.
pub fn film_scripts(payload_json: &str) -> ScriptBundle {
    ScriptBundle {
        inline_js: format!(
            "const LINKS = {payload_json};\n\n{modals}",
            modals = MODAL_JS,
        ),
    }
}

/// Generate the JavaScript for a live page.
pub fn live_scripts() -> ScriptBundle {
    ScriptBundle {
        inline_js: PLAYER_JS.to_string(),
    }
}

const MODAL_JS: &str = r#"// Link modals
function openLinks(category) {
    const key = category === 'series' ? 'series_links' : 'movie_links';
    const table = LINKS[key];
    if (!table || Object.keys(table).length === 0) {
        alert('Links not available for this category.');
        return;
    }
    const body = document.getElementById('links-body');
    body.innerHTML = '';
    for (const [quality, url] of Object.entries(table)) {
        const row = document.createElement('a');
        row.className = 'download-link';
        row.href = url;
        row.textContent = quality;
        body.appendChild(row);
    }
    document.getElementById('links-title').textContent =
        category === 'series' ? 'Series Links' : 'Movie Links';
    document.getElementById('links-modal').classList.add('open');
}

function openTutorial() {
    document.getElementById('tutorial-modal').classList.add('open');
}

function closeModals() {
    for (const modal of document.querySelectorAll('.modal')) {
        modal.classList.remove('open');
    }
}

document.addEventListener('keydown', (e) => {
    if (e.key === 'Escape') closeModals();
});

document.addEventListener('click', (e) => {
    if (e.target.classList.contains('modal')) closeModals();
});
"#;

const PLAYER_JS: &str = r#"// Quality-switched HLS playback
const video = document.getElementById('player');
const picker = document.getElementById('quality');

function loadStream(url) {
    if (window.Hls && Hls.isSupported()) {
        if (window.activeHls) window.activeHls.destroy();
        window.activeHls = new Hls();
        window.activeHls.loadSource(url);
        window.activeHls.attachMedia(video);
    } else if (video.canPlayType('application/vnd.apple.mpegurl')) {
        video.src = url;
    }
    video.play().catch(() => {});
}

picker.addEventListener('change', () => loadStream(picker.value));
loadStream(picker.value);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::QualityLabel;

    #[test]
    fn film_scripts_embed_the_payload() {
        let mut links = LinkSet::new();
        links.insert(QualityLabel::from("480p"), "#");
        let payload = FilmPayload {
            movie_links: &links,
            series_links: None,
        };
        let json = script_json(&payload).unwrap();
        let bundle = film_scripts(&json);
        assert!(bundle.inline_js.contains(r##""480p":"#""##));
        assert!(bundle.inline_js.contains("Links not available for this category."));
    }

    #[test]
    fn script_json_escapes_angle_brackets() {
        let mut links = LinkSet::new();
        links.insert(QualityLabel::from("480p"), "</script><script>alert(1)");
        let payload = FilmPayload {
            movie_links: &links,
            series_links: None,
        };
        let json = script_json(&payload).unwrap();
        assert!(!json.contains("</script>"));
        assert!(json.contains("\\u003c/script"));
    }

    #[test]
    fn live_scripts_wire_the_quality_picker() {
        let bundle = live_scripts();
        assert!(bundle.inline_js.contains("picker.addEventListener('change'"));
        assert!(bundle.inline_js.contains("Hls.isSupported()"));
    }
}
