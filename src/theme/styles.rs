//! Global CSS styles for the landing page.
//!
//! Dark by default; `body.light` switches the palette. The interactive
//! classes (`open`, `visible`, `is-flipped`) are set by the components.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #0f1419;
  --bg-raised: #182029;
  --border: #26313d;
  --text: #f2f4f6;
  --text-muted: rgba(242, 244, 246, 0.65);
  --accent: #ff8a3d;
  --accent-soft: rgba(255, 138, 61, 0.18);

  --radius: 16px;
  --font-sans: 'Inter', system-ui, -apple-system, sans-serif;
  --font-display: 'Fraunces', Georgia, serif;

  --pp-hero-scale: 1;
  --pp-hero-image-percent: 60;
}

body.light {
  --bg: #fbf8f4;
  --bg-raised: #ffffff;
  --border: #e6dfd6;
  --text: #1d232a;
  --text-muted: rgba(29, 35, 42, 0.65);
}

/* === Base === */
* { box-sizing: border-box; }

body {
  margin: 0;
  background: var(--bg);
  color: var(--text);
  font-family: var(--font-sans);
  line-height: 1.5;
  transition: background 0.3s ease, color 0.3s ease;
}

h1, h2, h3 { font-family: var(--font-display); line-height: 1.15; }
a { color: inherit; }

.pp-main { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }
.pp-section { padding: 5rem 0; }
.pp-section-title { text-align: center; margin-bottom: 2.5rem; }

/* === Buttons === */
.pp-btn {
  display: inline-block;
  padding: 0.75rem 1.5rem;
  border: 1px solid var(--accent);
  border-radius: 999px;
  background: var(--accent);
  color: #111;
  font-weight: 600;
  text-decoration: none;
  cursor: pointer;
}

.pp-btn-ghost { background: transparent; color: var(--text); }

/* === Header === */
.pp-header {
  position: sticky;
  top: 0;
  z-index: 20;
  display: flex;
  align-items: center;
  gap: 1.5rem;
  padding: 1rem 1.5rem;
  background: var(--bg);
  border-bottom: 1px solid var(--border);
}

.pp-logo { font-family: var(--font-display); font-size: 1.35rem; text-decoration: none; }
.pp-nav { display: flex; gap: 1.25rem; margin-left: auto; }
.pp-nav a { text-decoration: none; color: var(--text-muted); }
.pp-header-actions { display: flex; align-items: center; gap: 0.75rem; }

.pp-theme-toggle {
  background: none;
  border: 1px solid var(--border);
  border-radius: 50%;
  width: 2.5rem;
  height: 2.5rem;
  cursor: pointer;
}

.pp-burger { display: none; background: none; border: 0; cursor: pointer; }
.pp-burger span { display: block; width: 22px; height: 2px; margin: 5px 0; background: var(--text); }

@media (max-width: 768px) {
  .pp-burger { display: block; margin-left: auto; }
  .pp-nav {
    display: none;
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    flex-direction: column;
    padding: 1rem 1.5rem;
    background: var(--bg-raised);
  }
  .pp-nav.open { display: flex; }
}

/* === Hero === */
.pp-hero {
  display: grid;
  grid-template-columns: 1fr auto;
  align-items: center;
  gap: 3rem;
  min-height: 80vh;
}

.pp-hero-actions { display: flex; flex-wrap: wrap; gap: 1rem; margin-top: 2rem; }

.pp-hero-card {
  border-radius: var(--radius);
  overflow: hidden;
  background: var(--bg-raised);
  box-shadow: 0 30px 60px rgba(0, 0, 0, 0.35);
}

.pp-hero-card .pp-hero-image {
  height: calc(var(--pp-hero-image-percent) * 1%);
  background: linear-gradient(135deg, var(--accent-soft), var(--border));
}

.float-card.visible { animation: pp-float 6s ease-in-out infinite; }

@keyframes pp-float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-10px); }
}

@media (max-width: 900px) {
  .pp-hero { grid-template-columns: 1fr; }
}

/* === Reveal === */
.reveal {
  opacity: 0;
  transform: translateY(24px);
  transition: opacity 0.6s ease, transform 0.6s ease;
}

.reveal.visible { opacity: 1; transform: none; }

.reveal.stagger { opacity: 1; transform: none; }

.reveal-child {
  opacity: 0;
  transform: translateY(16px);
  transition: opacity 0.5s ease, transform 0.5s ease;
}

.reveal-child.visible { opacity: 1; transform: none; }

/* === Carousels === */
.pp-review-carousel,
.pp-trip-carousel {
  position: relative;
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.pp-review-viewport { overflow-x: auto; scroll-behavior: smooth; scrollbar-width: none; flex: 1; }
.pp-review-viewport::-webkit-scrollbar { display: none; }
.pp-review-track { display: flex; gap: 1.5rem; }
.pp-review-track > * { flex: 0 0 calc((100% - 3rem) / 3); }

.pp-trip-viewport { overflow: hidden; flex: 1; }
.pp-trip-track { display: flex; gap: 1.5rem; transition: transform 0.45s ease; }
.hosted-trips .pp-trip-track > * { flex: 0 0 calc((100% - 4.5rem) / 4); }
.pp-hero-card .pp-trip-track { gap: 0; }
.pp-hero-card .pp-trip-track > * { flex: 0 0 100%; height: 100%; }

@media (max-width: 900px) {
  .pp-review-track > *, .hosted-trips .pp-trip-track > * { flex-basis: calc((100% - 1.5rem) / 2); }
}

@media (max-width: 640px) {
  .pp-review-track > *, .hosted-trips .pp-trip-track > * { flex-basis: 100%; }
}

.pp-carousel-btn,
.pp-trip-btn {
  flex: 0 0 auto;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  border: 1px solid var(--border);
  background: var(--bg-raised);
  color: var(--text);
  font-size: 1.4rem;
  cursor: pointer;
}

.pp-carousel-btn:disabled,
.pp-trip-btn:disabled { opacity: 0.35; cursor: default; }

/* === Cards === */
.pp-review-card {
  margin: 0;
  padding: 1.5rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--bg-raised);
}

.pp-review-stars { color: var(--accent); letter-spacing: 0.1em; }
.pp-review-author { color: var(--text-muted); font-size: 0.9rem; }

.pp-hero-slide { margin: 0; display: flex; flex-direction: column; }
.pp-hero-slide figcaption { display: flex; flex-direction: column; padding: 1rem 1.25rem; }

.flip-card { perspective: 1200px; height: 360px; cursor: pointer; outline: none; }
.flip-card:focus-visible { box-shadow: 0 0 0 2px var(--accent); border-radius: var(--radius); }

.flip-card-inner {
  position: relative;
  width: 100%;
  height: 100%;
  transform-style: preserve-3d;
  transition: transform 0.6s ease;
}

.flip-card.is-flipped .flip-card-inner { transform: rotateY(180deg); }

.flip-card-front,
.flip-card-back {
  position: absolute;
  inset: 0;
  padding: 1.25rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--bg-raised);
  backface-visibility: hidden;
}

.flip-card-back { transform: rotateY(180deg); display: flex; flex-direction: column; gap: 0.5rem; }

.pp-trip-photo {
  height: 55%;
  margin: -1.25rem -1.25rem 1rem;
  border-radius: var(--radius) var(--radius) 0 0;
  background: linear-gradient(160deg, var(--accent-soft), var(--border));
}

.pp-trip-meta, .pp-trip-host { color: var(--text-muted); }
.pp-join-btn { margin-top: auto; color: var(--accent); font-weight: 600; }

/* === Membership === */
.pp-perks { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; margin-bottom: 2rem; }
.pp-perk { padding: 1.5rem; border: 1px solid var(--border); border-radius: var(--radius); }

@media (max-width: 768px) {
  .pp-perks { grid-template-columns: 1fr; }
}

.pp-membership, .pp-cta { text-align: center; }

/* === Modals === */
.pp-modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.6);
}

.pp-modal {
  position: relative;
  width: min(420px, 92vw);
  padding: 2rem;
  border-radius: var(--radius);
  background: var(--bg-raised);
}

.pp-modal-close {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  background: none;
  border: 0;
  color: var(--text-muted);
  font-size: 1.5rem;
  cursor: pointer;
}

.pp-form { display: flex; flex-direction: column; gap: 1rem; }
.pp-form label { display: flex; flex-direction: column; gap: 0.35rem; font-size: 0.9rem; }
.pp-form input {
  padding: 0.65rem 0.8rem;
  border: 1px solid var(--border);
  border-radius: 8px;
  background: var(--bg);
  color: var(--text);
}

/* === Footer === */
.pp-footer {
  padding: 2rem 1.5rem;
  border-top: 1px solid var(--border);
  color: var(--text-muted);
  text-align: center;
}
"#;
