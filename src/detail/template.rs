//! HTML document assembly for detail pages.
//!
//! Each page is a single self-contained document: styles and scripts are
//! inlined, and the only external fetch is the HLS runtime on live pages.

use super::{DetailView, FilmView, LiveStreamView, scripts, styles};
use tracing::{info, warn};

const HLS_CDN_URL: &str = "https://cdn.jsdelivr.net/npm/hls.js@latest";

/// Escape HTML special characters in user content.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render the complete document for a view.
pub fn render_page(view: &DetailView) -> String {
    let started = std::time::Instant::now();
    let html = match view {
        DetailView::LiveStream(live) => render_live_page(live),
        DetailView::Film(film) => render_film_page(film),
    };
    info!(
        component = "template",
        operation = "render_page",
        id = view.id(),
        bytes = html.len(),
        duration_ms = started.elapsed().as_millis() as u64,
        "Detail page rendered"
    );
    html
}

fn render_film_page(film: &FilmView) -> String {
    let payload = scripts::FilmPayload {
        movie_links: &film.movie_links,
        series_links: film.series_links.as_ref(),
    };
    let payload_json = match scripts::script_json(&payload) {
        Ok(json) => json,
        Err(err) => {
            warn!(
                component = "template",
                operation = "render_film_page",
                id = %film.id,
                error = %err,
                "Failed to embed link payload; modals will alert"
            );
            "{}".to_string()
        }
    };
    let poster_html = if film.poster.is_empty() {
        String::new()
    } else {
        format!(
            r#"<img class="poster" src="{src}" alt="{alt}">"#,
            src = escape_html(&film.poster),
            alt = escape_html(&film.title),
        )
    };
    let description_html = if film.description.is_empty() {
        String::new()
    } else {
        format!(
            r#"<p class="description">{}</p>"#,
            escape_html(&film.description)
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>{css}</style>
</head>
<body>
<div class="container">
    <h1>{title}</h1>
    {poster_html}
    {description_html}
    <div class="actions">
        <button class="btn btn-play" onclick="openLinks('movie')">🎬 PLAY IT FOR FREE</button>
        <button class="btn btn-series" onclick="openLinks('series')">📺 Series Links</button>
        <button class="btn btn-tutorial" onclick="openTutorial()">📖 Tutorial</button>
        <a class="btn btn-home" href="index.html">🏠 Go to Home</a>
    </div>
</div>

<div class="modal" id="links-modal">
    <div class="modal-content">
        <h2 id="links-title">Movie Links</h2>
        <div id="links-body"></div>
        <button class="modal-close" onclick="closeModals()">Close</button>
    </div>
</div>

<div class="modal" id="tutorial-modal">
    <div class="modal-content">
        <h2>How to Download</h2>
        <p>Pick a quality, then follow the direct link for that resolution.</p>
        <button class="modal-close" onclick="closeModals()">Close</button>
    </div>
</div>

<footer class="generated">Generated {generated}</footer>
<script>{js}</script>
</body>
</html>
"#,
        title = escape_html(&film.title),
        css = styles::film_styles().critical_css,
        poster_html = poster_html,
        description_html = description_html,
        generated = generated_stamp(),
        js = scripts::film_scripts(&payload_json).inline_js,
    )
}

fn render_live_page(live: &LiveStreamView) -> String {
    let options: String = live
        .sources
        .iter()
        .map(|(label, url)| {
            format!(
                r#"<option value="{url}">{label}</option>"#,
                url = escape_html(url),
                label = escape_html(label.as_str()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Live Stream - {title}</title>
<script src="{hls_cdn}"></script>
<style>{css}</style>
</head>
<body>
<h2 class="player-header">{title} - Live Stream</h2>
<video id="player" controls autoplay muted playsinline></video>
<div class="quality-picker">
    <label for="quality">Quality:</label>
    <select id="quality">
        {options}
    </select>
</div>
<footer class="generated">Generated {generated}</footer>
<script>{js}</script>
</body>
</html>
"#,
        title = escape_html(&live.title),
        hls_cdn = HLS_CDN_URL,
        css = styles::live_styles().critical_css,
        options = options,
        generated = generated_stamp(),
        js = scripts::live_scripts().inline_js,
    )
}

fn generated_stamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M UTC").to_string()
}

// ============================================================================
// Tests
// ============================================================================
