//! Global CSS styles for the portfolio page.
//!
//! Light palette by default; `.dark-mode` on the page root swaps the custom
//! properties.

/// Gap between project cards in pixels. Must match `.project-grid { gap }`.
pub const CARD_GAP: f64 = 24.0;

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #f7f7fb;
  --surface: #ffffff;
  --text: #1f2233;
  --muted: #5c6078;
  --accent: #6c5ce7;
  --accent-soft: rgba(108, 92, 231, 0.15);
  --success: #2ecc71;
  --danger: #e74c3c;

  --header-height: 70px;
  --radius: 12px;
  --font: 'Poppins', 'Segoe UI', system-ui, sans-serif;
  --transition: 300ms ease;
}

.dark-mode {
  --bg: #12131a;
  --surface: #1c1e29;
  --text: #eceef6;
  --muted: #9ca0b8;
  --accent-soft: rgba(108, 92, 231, 0.25);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
}

body {
  font-family: var(--font);
  line-height: 1.6;
}

.page-root {
  height: 100vh;
  background: var(--bg);
  color: var(--text);
  transition: background var(--transition), color var(--transition);
}

a {
  color: var(--accent);
  text-decoration: none;
}

/* === Header & Navigation === */
.site-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--header-height);
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0 2rem;
  background: var(--surface);
  box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
  z-index: 100;
}

.logo {
  font-weight: 700;
  font-size: 1.25rem;
}

.nav-links {
  display: flex;
  gap: 1.5rem;
  list-style: none;
  align-items: center;
}

.nav-link, .mobile-nav-link {
  color: var(--text);
  padding: 0.25rem 0;
  border-bottom: 2px solid transparent;
  transition: color var(--transition), border-color var(--transition);
}

.nav-link:hover, .nav-link.active-link {
  color: var(--accent);
  border-bottom-color: var(--accent);
}

.hamburger-menu {
  display: none;
}

.mobile-nav-links {
  display: none;
  position: fixed;
  top: var(--header-height);
  left: 0;
  right: 0;
  flex-direction: column;
  gap: 1rem;
  padding: 1.5rem 2rem;
  background: var(--surface);
  z-index: 99;
}

.mobile-nav-links.active {
  display: flex;
}

@media (max-width: 768px) {
  .nav-links { display: none; }
  .hamburger-menu { display: inline-flex; }
}

/* === Buttons === */
.btn-primary, .btn-ghost, .icon-btn {
  font: inherit;
  cursor: pointer;
  border-radius: 999px;
  transition: background var(--transition), opacity var(--transition);
}

.btn-primary {
  padding: 0.75rem 1.75rem;
  background: var(--accent);
  color: #fff;
  border: none;
}

.btn-ghost {
  background: transparent;
  border: none;
  color: var(--text);
  font-size: 1.2rem;
  padding: 0.25rem 0.5rem;
}

button:disabled {
  opacity: 0.35;
  cursor: not-allowed;
}

/* === Page Flip === */
main.page {
  height: 100vh;
  overflow-y: auto;
  padding-top: var(--header-height);
  transform-origin: left center;
  transition: transform 600ms ease, opacity 600ms ease;
}

main.page.page-flip-out {
  transform: perspective(1200px) rotateY(-90deg);
  opacity: 0;
}

/* === Reveal On Scroll === */
.hidden {
  opacity: 0;
  transform: translateY(40px);
  transition: opacity 700ms ease, transform 700ms ease;
}

.hidden.show {
  opacity: 1;
  transform: none;
}

section {
  min-height: 80vh;
  padding: 4rem 2rem;
}

.section-title {
  font-size: 2rem;
  margin-bottom: 2rem;
  text-align: center;
}

/* === Hero === */
.hero {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 4rem;
  flex-wrap: wrap;
}

.hero-title {
  font-size: 2.75rem;
}

.typing-subtitle {
  font-size: 1.5rem;
  color: var(--accent);
  min-height: 2.4rem;
}

.typing-subtitle::after {
  content: '|';
  animation: blink 1s step-end infinite;
}

@keyframes blink {
  50% { opacity: 0; }
}

.profile-pic-frame-wrapper {
  width: 280px;
  height: 280px;
  border-radius: 50%;
  padding: 8px;
  background: linear-gradient(135deg, var(--accent), var(--accent-soft));
}

.profile-pic {
  width: 100%;
  height: 100%;
  border-radius: 50%;
  object-fit: cover;
  transition: opacity 400ms ease;
}

/* === Projects === */
.project-filters {
  display: flex;
  justify-content: center;
  gap: 0.75rem;
  margin-bottom: 2rem;
  flex-wrap: wrap;
}

.filter-btn {
  font: inherit;
  padding: 0.5rem 1.25rem;
  border-radius: 999px;
  border: 2px solid var(--accent);
  background: transparent;
  color: var(--accent);
  cursor: pointer;
}

.filter-btn.active {
  background: var(--accent);
  color: #fff;
}

.project-slider {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.project-slider-container {
  flex: 1;
  overflow-x: auto;
  scroll-behavior: smooth;
  scrollbar-width: none;
}

.project-grid {
  display: flex;
  gap: 24px;
}

.project-card {
  flex: 0 0 300px;
  display: flex;
  flex-direction: column;
  background: var(--surface);
  border-radius: var(--radius);
  overflow: hidden;
  cursor: pointer;
  box-shadow: 0 4px 16px rgba(0, 0, 0, 0.08);
  transition: transform var(--transition);
}

.project-card:hover {
  transform: translateY(-4px);
}

.project-card img {
  width: 100%;
  height: 180px;
  object-fit: cover;
}

.project-card-body {
  padding: 1rem;
}

.project-card-tag {
  font-size: 0.8rem;
  color: var(--muted);
  text-transform: uppercase;
}

.slider-btn {
  width: 44px;
  height: 44px;
  border: none;
  background: var(--accent);
  color: #fff;
}

.empty-projects {
  color: var(--muted);
  padding: 2rem;
}

/* === Modal === */
.modal {
  display: none;
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.6);
  align-items: center;
  justify-content: center;
  z-index: 200;
}

.modal.visible {
  display: flex;
}

.modal-content {
  position: relative;
  width: min(900px, 92vw);
  max-height: 88vh;
  overflow-y: auto;
  background: var(--surface);
  border-radius: var(--radius);
  padding: 2rem;
}

.close-button {
  position: absolute;
  top: 1rem;
  right: 1.25rem;
  font-size: 2rem;
  background: none;
  border: none;
  color: var(--text);
  cursor: pointer;
}

.modal-image-slider {
  position: relative;
  margin: 1rem 0;
}

.slider-inner img {
  width: 100%;
  max-height: 420px;
  object-fit: contain;
}

.slider-nav {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  width: 40px;
  height: 40px;
  border-radius: 50%;
  border: none;
  background: rgba(0, 0, 0, 0.5);
  color: #fff;
  cursor: pointer;
}

.slider-nav.prev-slide { left: 0.5rem; }
.slider-nav.next-slide { right: 0.5rem; }

.modal-links {
  display: flex;
  gap: 1rem;
  margin: 1rem 0;
}

.no-images {
  color: var(--muted);
  text-align: center;
}

.modal-tech {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  list-style: none;
  padding: 0;
}

.github-link {
  color: var(--accent);
  text-decoration: none;
  font-size: 0.9rem;
}

.modal-section h3 {
  margin: 1rem 0 0.5rem;
}

.modal-section ul {
  padding-left: 1.25rem;
}

/* === Contact === */
.contact-grid {
  display: grid;
  grid-template-columns: 1fr 1.5fr;
  gap: 3rem;
  max-width: 1000px;
  margin: 0 auto;
}

.copy-email {
  cursor: pointer;
  display: inline-flex;
  gap: 0.5rem;
  align-items: center;
}

.copy-tooltip {
  font-size: 0.8rem;
  color: var(--success);
  opacity: 0;
  transition: opacity 0.2s ease;
}

.copy-tooltip.visible {
  opacity: 1;
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.contact-form input, .contact-form textarea {
  font: inherit;
  padding: 0.75rem 1rem;
  border-radius: 8px;
  border: 1px solid var(--muted);
  background: var(--bg);
  color: var(--text);
}

.form-status {
  padding: 0.75rem 1rem;
  border-radius: 8px;
}

.form-success { color: var(--success); }
.form-error { color: var(--danger); }

.site-footer {
  text-align: center;
  padding: 2rem;
  color: var(--muted);
}
"#;
