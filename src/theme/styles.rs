//! Global CSS styles for Folio.
//!
//! Colors come from the palette variables set on `.app-root`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-display: 'Poppins', 'Segoe UI', system-ui, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  /* Shared colors */
  --danger: #ef4444;
  --radius: 14px;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  line-height: 1.7;
}

.app-root {
  min-height: 100vh;
  background: var(--bg);
  color: var(--text);
  transition: background var(--transition-normal), color var(--transition-normal);
}

a { color: var(--accent); text-decoration: none; }
img, video { display: block; max-width: 100%; }

/* === Buttons (folio-ui) === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.7rem 1.4rem;
  border-radius: 999px;
  font: inherit;
  font-size: var(--text-sm);
  font-weight: 600;
  cursor: pointer;
  border: 1px solid transparent;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}
.btn:hover:not(:disabled) { transform: translateY(-2px); box-shadow: 0 6px 20px var(--accent-glow); }
.btn:disabled { opacity: 0.6; cursor: default; }
.btn-primary { background: var(--accent); color: #fff; }
.btn-outline { background: transparent; color: var(--accent); border-color: var(--accent); }

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  border: 1px solid var(--border);
  background: var(--surface);
  color: var(--text);
  cursor: pointer;
  transition: background var(--transition-fast);
}
.icon-btn:hover:not(:disabled) { background: var(--accent); color: #fff; }
.icon-btn:disabled { opacity: 0.3; cursor: default; }

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0; left: 0; right: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.25rem 2.5rem;
  transition: padding var(--transition-normal), background var(--transition-normal);
}
.navbar.scrolled {
  padding: 0.75rem 2.5rem;
  background: var(--bg-alt);
  box-shadow: 0 2px 16px rgba(0, 0, 0, 0.2);
}
.nav-logo { font-family: var(--font-display); font-weight: 700; color: var(--text); }
.nav-links { display: flex; gap: 1.75rem; list-style: none; }
.nav-links a { color: var(--text-muted); font-size: var(--text-sm); transition: color var(--transition-fast); }
.nav-links a:hover, .nav-links a.active { color: var(--accent); }
.nav-actions { display: flex; align-items: center; gap: 0.75rem; }
.hamburger { display: none; background: none; border: none; color: var(--text); font-size: var(--text-xl); cursor: pointer; }
.nav-backdrop { position: fixed; inset: 0; z-index: 99; }

@media (max-width: 820px) {
  .hamburger { display: block; }
  .nav-links {
    position: absolute;
    top: 100%; left: 0; right: 0;
    flex-direction: column;
    gap: 0;
    background: var(--bg-alt);
    max-height: 0;
    overflow: hidden;
    transition: max-height var(--transition-normal);
  }
  .nav-links.open { max-height: 24rem; }
  .nav-links li a { display: block; padding: 0.9rem 2.5rem; }
}

/* === Sections === */
.section { padding: 6rem 2.5rem; max-width: 1200px; margin: 0 auto; }
.section-title {
  font-family: var(--font-display);
  font-size: var(--text-2xl);
  margin-bottom: 2.5rem;
  text-align: center;
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  text-align: center;
}
.interactive-bg { position: absolute; inset: 0; pointer-events: none; }
.click-pulse {
  position: absolute;
  width: 16px; height: 16px;
  margin: -8px 0 0 -8px;
  border-radius: 50%;
  border: 2px solid var(--accent);
  animation: pulse 800ms ease-out forwards;
}
@keyframes pulse {
  from { transform: scale(1); opacity: 0.9; }
  to { transform: scale(12); opacity: 0; }
}
.hero-content { position: relative; }
.hero-greeting { color: var(--accent); font-size: var(--text-lg); }
.hero-name { font-family: var(--font-display); font-size: var(--text-3xl); line-height: 1.2; }
.hero-title { font-size: var(--text-xl); color: var(--text-muted); min-height: 2.4rem; margin: 0.5rem 0 2rem; }
.hero-title .cursor { color: var(--accent); animation: blink 1s step-end infinite; }
@keyframes blink { 50% { opacity: 0; } }
.hero-actions { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }

/* === About / Skills === */
.about-body { max-width: 720px; margin: 0 auto; color: var(--text-muted); font-size: var(--text-lg); text-align: center; }
.skills-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 1.5rem; }
.skill-card { background: var(--surface); border: 1px solid var(--border); border-radius: var(--radius); padding: 1.75rem; }
.skill-icon { font-size: var(--text-xl); color: var(--accent); margin-bottom: 0.75rem; }
.skill-card h3 { margin-bottom: 0.75rem; }

/* === Tags (folio-ui) === */
.project-tags, .skill-tags { display: flex; flex-wrap: wrap; gap: 0.4rem; margin: 0.75rem 0 1.25rem; }
.tag {
  font-size: var(--text-xs);
  padding: 0.2rem 0.65rem;
  border-radius: 999px;
  background: var(--accent-glow);
  color: var(--text);
}

/* === Projects grid === */
.projects-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 1.75rem; }
.grid-placeholder { grid-column: 1 / -1; text-align: center; color: var(--text-muted); }

.reveal { opacity: 0; transform: translateY(24px); }
.reveal.visible { animation: reveal 600ms ease forwards; }
@keyframes reveal { to { opacity: 1; transform: none; } }

.project-card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  overflow: hidden;
  display: flex;
  flex-direction: column;
}
.project-thumb { position: relative; aspect-ratio: 16 / 10; overflow: hidden; background: var(--bg-alt); }
.project-thumb img, .project-thumb video { width: 100%; height: 100%; object-fit: cover; transition: transform var(--transition-normal); }
.project-card:hover .project-thumb img { transform: scale(1.05); }
.project-thumb-overlay {
  position: absolute;
  right: 0.75rem; bottom: 0.75rem;
  padding: 0.25rem 0.7rem;
  border-radius: 999px;
  background: rgba(0, 0, 0, 0.6);
  color: #fff;
  font-size: var(--text-xs);
}
.project-card-body { padding: 1.5rem; display: flex; flex-direction: column; flex: 1; }
.project-card-body p { color: var(--text-muted); font-size: var(--text-sm); }
.project-card-body .btn-gallery { margin-top: auto; align-self: flex-start; }
.project-card-top { display: flex; align-items: center; justify-content: space-between; margin-bottom: 0.75rem; }
.project-icon { color: var(--accent); font-size: var(--text-xl); }
.project-count { font-size: var(--text-xs); color: var(--text-muted); }

/* === Lightbox === */
.lightbox-overlay {
  position: fixed;
  inset: 0;
  z-index: 1000;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.88);
  padding: 2rem;
}
.lightbox-content {
  width: min(1200px, 100%);
  height: 100%;
  display: flex;
  flex-direction: column;
  gap: 1rem;
  color: #fff;
}
.lightbox-header { display: flex; align-items: center; gap: 1rem; }
.lightbox-title { font-family: var(--font-display); flex: 1; }
.lightbox-counter { color: rgba(255, 255, 255, 0.7); font-size: var(--text-sm); }
.lightbox-body { flex: 1; min-height: 0; display: flex; align-items: center; gap: 1rem; }
.lightbox-stage {
  flex: 1;
  height: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  min-width: 0;
}
.lightbox-stage img, .lightbox-stage video { max-width: 100%; max-height: 100%; object-fit: contain; border-radius: 8px; }
.lightbox-thumbs { display: flex; gap: 0.5rem; overflow-x: auto; padding-bottom: 0.25rem; }
.lb-thumb {
  flex: 0 0 auto;
  width: 88px; height: 60px;
  border-radius: 6px;
  overflow: hidden;
  cursor: pointer;
  opacity: 0.5;
  border: 2px solid transparent;
  display: flex;
  align-items: center;
  justify-content: center;
  background: #1f2937;
  transition: opacity var(--transition-fast);
}
.lb-thumb img { width: 100%; height: 100%; object-fit: cover; }
.lb-thumb.active { opacity: 1; border-color: var(--accent); }
.lb-thumb:hover { opacity: 0.85; }

/* === Contact === */
.contact-grid { display: grid; grid-template-columns: 1fr 1.4fr; gap: 2.5rem; }
@media (max-width: 820px) { .contact-grid { grid-template-columns: 1fr; } }
.contact-info p { color: var(--text-muted); margin-bottom: 1rem; }
.contact-form { display: flex; flex-direction: column; gap: 1rem; }
.form-group { display: flex; flex-direction: column; gap: 0.35rem; }
.form-group label { font-size: var(--text-sm); color: var(--text-muted); }
.form-group input, .form-group textarea {
  font: inherit;
  padding: 0.75rem 1rem;
  border-radius: 10px;
  border: 1px solid var(--border);
  background: var(--bg-alt);
  color: var(--text);
  resize: vertical;
}
.form-group input:focus, .form-group textarea:focus { outline: none; border-color: var(--accent); }
.form-note { min-height: 1.5rem; font-size: var(--text-sm); }
.form-note.error { color: var(--danger); }

/* === Footer === */
.footer { text-align: center; padding: 2rem; color: var(--text-muted); font-size: var(--text-sm); border-top: 1px solid var(--border); }
"#;
