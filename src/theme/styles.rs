//! Global CSS styles for the portfolio.
//!
//! Light palette on `:root`, dark palette under the `.portfolio.dark` scope.
//! Animation timings are set inline from `portfolio_core::motion`; only the
//! keyframes live here.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
.portfolio {
  /* Surfaces */
  --bg: #ffffff;
  --bg-raised: #ffffff;
  --bg-muted: #f3f4f6;
  --bg-track: #e5e7eb;
  --border: #d1d5db;

  /* Text */
  --text-primary: #111827;
  --text-secondary: #4b5563;

  /* Accent */
  --accent: #2563eb;
  --accent-hover: #1d4ed8;
  --accent-soft: #dbeafe;
  --accent-text: #1e40af;
  --skill-text: #1d4ed8;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Type Scale */
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.25rem;
  --text-2xl: 1.5rem;
  --text-3xl: 1.875rem;
  --text-hero: 3.75rem;

  --shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1);
}

.portfolio.dark {
  --bg: #111827;
  --bg-raised: #1f2937;
  --bg-muted: #1f2937;
  --bg-track: #374151;
  --border: #4b5563;

  --text-primary: #ffffff;
  --text-secondary: #d1d5db;

  --skill-text: #93c5fd;
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

.portfolio {
  min-height: 100vh;
  font-family: var(--font-sans);
  background: var(--bg);
  color: var(--text-primary);
  line-height: 1.6;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Header === */
.page-header {
  position: fixed;
  top: 0;
  width: 100%;
  background: var(--bg);
  box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
  z-index: 10;
}

.nav {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0.75rem 1.5rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.nav-brand {
  font-size: var(--text-xl);
  font-weight: 700;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.nav-link:hover {
  color: var(--accent);
}

@media (max-width: 768px) {
  .nav-link { display: none; }
}

/* === Buttons === */
.btn-primary {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  border: none;
  border-radius: 9999px;
  background: var(--accent);
  color: #ffffff;
  font-weight: 700;
  cursor: pointer;
  transition: background-color 300ms ease;
}

.btn-primary:hover {
  background: var(--accent-hover);
}

.btn-link {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  border: none;
  background: none;
  color: var(--accent);
  font: inherit;
  cursor: pointer;
}

.btn-link:hover {
  text-decoration: underline;
}

.btn-icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.25rem;
  height: 2.25rem;
  border: none;
  border-radius: 50%;
  background: var(--bg-track);
  color: var(--text-primary);
  cursor: pointer;
}

.btn-icon:focus {
  outline: none;
  box-shadow: 0 0 0 2px var(--accent);
}

/* === Layout === */
.page-main {
  max-width: 1200px;
  margin: 0 auto;
  padding: 6rem 1.5rem 3rem;
}

.section {
  padding: 5rem 0;
}

.section-title {
  font-size: var(--text-3xl);
  font-weight: 700;
  text-align: center;
  margin-bottom: 2rem;
}

/* === Hero === */
.hero-content {
  text-align: center;
}

.hero-title {
  font-size: var(--text-hero);
  font-weight: 700;
  margin-bottom: 1rem;
}

.accent {
  color: var(--accent);
}

.hero-role {
  font-size: var(--text-3xl);
  font-weight: 400;
  margin-bottom: 2rem;
}

.hero-pitch {
  font-size: var(--text-xl);
  max-width: 42rem;
  margin: 0 auto 2rem;
}

.hero-cta {
  padding: 0.75rem 1.5rem;
}

.typewriter-caret {
  margin-left: 2px;
  color: var(--accent);
  animation: caret-blink 1s step-end infinite;
}

/* === Skills === */
.skill-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1.5rem;
  max-width: 48rem;
  margin: 0 auto;
}

.skill-bar-header {
  display: flex;
  justify-content: space-between;
  margin-bottom: 0.25rem;
  color: var(--skill-text);
  font-weight: 500;
}

.skill-level {
  font-size: var(--text-sm);
}

.skill-track {
  width: 100%;
  height: 0.625rem;
  border-radius: 9999px;
  background: var(--bg-track);
  overflow: hidden;
}

.skill-fill {
  height: 100%;
  border-radius: 9999px;
  background: var(--accent);
}

/* === Projects === */
.category-pills {
  display: flex;
  justify-content: center;
  flex-wrap: wrap;
  gap: 1rem;
  margin-bottom: 2rem;
}

.pill {
  padding: 0.5rem 1rem;
  border: none;
  border-radius: 9999px;
  background: var(--bg-track);
  color: var(--text-primary);
  font: inherit;
  cursor: pointer;
  transition: background-color 300ms ease, color 300ms ease;
}

.pill.selected {
  background: var(--accent);
  color: #ffffff;
}

.project-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 2rem;
}

.project-card {
  background: var(--bg-raised);
  border-radius: 0.5rem;
  box-shadow: var(--shadow);
  overflow: hidden;
}

.project-card-body {
  padding: 1.5rem;
}

.project-title {
  font-size: var(--text-xl);
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.project-description {
  color: var(--text-secondary);
  margin-bottom: 1rem;
}

.category-badge {
  display: inline-block;
  margin-bottom: 1rem;
  padding: 0.25rem 0.5rem;
  border-radius: 9999px;
  background: var(--accent-soft);
  color: var(--accent-text);
  font-size: 0.75rem;
}

.project-details {
  margin-top: 1rem;
  overflow: hidden;
}

.tech-heading {
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.tech-section {
  margin-bottom: 1rem;
}

.tech-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.tech-tag {
  padding: 0.25rem 0.5rem;
  border-radius: 9999px;
  background: var(--bg-track);
  font-size: var(--text-sm);
}

.project-link {
  color: var(--accent);
}

.project-link:hover {
  text-decoration: underline;
}

@media (max-width: 768px) {
  .skill-grid,
  .project-grid {
    grid-template-columns: 1fr;
  }
}

/* === Contact === */
.contact-wrapper {
  max-width: 42rem;
  margin: 0 auto;
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  align-items: flex-start;
}

.form-field {
  width: 100%;
}

.form-label {
  display: block;
  font-size: var(--text-sm);
  font-weight: 500;
  margin-bottom: 0.25rem;
}

.form-input {
  width: 100%;
  padding: 0.5rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: 0.375rem;
  background: var(--bg-raised);
  color: var(--text-primary);
  font: inherit;
}

.form-input:focus {
  outline: none;
  box-shadow: 0 0 0 2px var(--accent);
}

.social-links {
  display: flex;
  justify-content: center;
  align-items: center;
  flex-wrap: wrap;
  gap: 1.5rem;
  margin-top: 3rem;
}

.social-link {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-lg);
}

.social-link:hover {
  color: var(--accent);
}

/* === Footer === */
.page-footer {
  padding: 2rem 1.5rem;
  background: var(--bg-muted);
  text-align: center;
}

.footer-note {
  margin-top: 0.5rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

/* === Keyframes === */
@keyframes fade-up {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes skill-fill {
  from { width: 0; }
  to { width: var(--skill-level); }
}

@keyframes card-enter {
  from { opacity: 0; transform: scale(0.8); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes details-reveal {
  from { opacity: 0; max-height: 0; }
  to { opacity: 1; max-height: 40rem; }
}

@keyframes caret-blink {
  50% { opacity: 0; }
}
"#;
