//! CSS generation for detail pages.
//!
//! Pages are self-contained: all styling is inlined so an exported file
//! works offline. Film pages and live pages share a base and differ in
//! their interactive chrome (link modals vs. the player).

/// Bundle of CSS styles for one page variant.
pub struct StyleBundle {
    /// Critical CSS inlined in the document head.
    pub critical_css: String,
}

/// Styles for a film detail page.
pub fn film_styles() -> StyleBundle {
    StyleBundle {
        critical_css: format!(
            "{base}\n{layout}\n{buttons}\n{modals}\n{footer}",
            base = BASE,
            layout = FILM_LAYOUT,
            buttons = ACTION_BUTTONS,
            modals = MODAL_STYLES,
            footer = FOOTER,
        ),
    }
}

/// Styles for a live-stream page.
pub fn live_styles() -> StyleBundle {
    StyleBundle {
        critical_css: format!(
            "{base}\n{player}\n{footer}",
            base = BASE,
            player = PLAYER_LAYOUT,
            footer = FOOTER,
        ),
    }
}

const BASE: &str = r#"
/* ============================================
   Base
   ============================================ */
* {
    box-sizing: border-box;
    margin: 0;
    padding: 0;
}

body {
    font-family: 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
    background: #111;
    color: #eee;
    min-height: 100vh;
    line-height: 1.6;
}

h1, h2 {
    line-height: 1.3;
    letter-spacing: -0.01em;
}

a {
    color: #ffb347;
    text-decoration: none;
}
a:hover {
    text-decoration: underline;
}
"#;

const FILM_LAYOUT: &str = r#"
/* ============================================
   Film Page Layout
   ============================================ */
.container {
    max-width: 720px;
    margin: 0 auto;
    padding: 32px 16px;
    text-align: center;
}

.container h1 {
    font-size: 1.75rem;
    margin-bottom: 16px;
}

.poster {
    width: 100%;
    max-width: 360px;
    border-radius: 12px;
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.5);
    margin-bottom: 16px;
}

.description {
    color: #bbb;
    margin-bottom: 24px;
}
"#;

const ACTION_BUTTONS: &str = r#"
/* ============================================
   Action Buttons
   ============================================ */
.actions {
    display: flex;
    flex-direction: column;
    gap: 12px;
    align-items: center;
}

.btn {
    display: inline-block;
    width: 100%;
    max-width: 320px;
    padding: 14px 24px;
    border: none;
    border-radius: 999px;
    font-size: 1rem;
    font-weight: 600;
    color: #fff;
    cursor: pointer;
    transition: transform 0.15s ease, box-shadow 0.15s ease;
}

.btn:hover {
    transform: translateY(-2px);
    box-shadow: 0 8px 20px rgba(0, 0, 0, 0.4);
}

.btn-play {
    background: linear-gradient(135deg, #e53935 0%, #ff7043 100%);
}

.btn-series {
    background: linear-gradient(135deg, #5e35b1 0%, #7e57c2 100%);
}

.btn-tutorial {
    background: linear-gradient(135deg, #00897b 0%, #26a69a 100%);
}

.btn-home {
    background: #333;
}
"#;

const MODAL_STYLES: &str = r#"
/* ============================================
   Link Modals
   ============================================ */
.modal {
    display: none;
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.8);
    z-index: 100;
    align-items: center;
    justify-content: center;
}

.modal.open {
    display: flex;
}

.modal-content {
    width: 90%;
    max-width: 400px;
    padding: 24px;
    background: #1d1d1d;
    border: 1px solid #333;
    border-radius: 12px;
    text-align: center;
}

.modal-content h2 {
    margin-bottom: 16px;
    font-size: 1.25rem;
}

.download-link {
    display: block;
    padding: 12px;
    margin-bottom: 8px;
    background: #2a2a2a;
    border-radius: 8px;
    color: #ffb347;
    font-weight: 600;
}

.download-link:hover {
    background: #383838;
    text-decoration: none;
}

.modal-close {
    margin-top: 12px;
    padding: 10px 24px;
    background: #444;
    border: none;
    border-radius: 999px;
    color: #fff;
    cursor: pointer;
}
"#;

const PLAYER_LAYOUT: &str = r#"
/* ============================================
   Live Player
   ============================================ */
body {
    background: #000;
    text-align: center;
}

.player-header {
    padding: 16px;
    font-size: 1.25rem;
}

video {
    width: 100%;
    max-width: 960px;
    background: #000;
    border-radius: 8px;
}

.quality-picker {
    margin: 16px auto;
}

.quality-picker label {
    margin-right: 8px;
    color: #bbb;
}

.quality-picker select {
    padding: 8px 16px;
    background: #1d1d1d;
    border: 1px solid #444;
    border-radius: 8px;
    color: #eee;
    font-size: 1rem;
}
"#;

const FOOTER: &str = r#"
/* ============================================
   Footer
   ============================================ */
.generated {
    margin-top: 32px;
    padding: 16px;
    font-size: 0.75rem;
    color: #666;
    text-align: center;
}
"#;
