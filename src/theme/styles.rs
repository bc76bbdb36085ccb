//! Global CSS styles for Breachgrid.
//!
//! Green-on-black terminal with an alarm-red breach state.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* VOID (Backgrounds) */
  --void-black: #050505;
  --void-lighter: #0b0f0c;
  --void-border: #1a2a1d;

  /* PHOSPHOR (Text, Input, Grid) */
  --phosphor: #33ff66;
  --phosphor-dim: #1f9e40;
  --phosphor-glow: rgba(51, 255, 102, 0.3);

  /* ALARM (Breach) */
  --alarm: #ff2244;
  --alarm-glow: rgba(255, 34, 68, 0.35);

  /* TEXT */
  --text-primary: #e8f5e9;
  --text-muted: rgba(232, 245, 233, 0.5);

  /* Typography */
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-2xl: 2rem;

  /* Transitions */
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-mono);
  background: var(--void-black);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
  user-select: none;
}

/* === Layout === */
.page {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 2rem;
  padding: 2rem;
}

.page-header {
  text-align: center;
}

/* === Typography === */
.page-title {
  font-size: var(--text-2xl);
  font-weight: 700;
  color: var(--phosphor);
  text-shadow: 0 0 20px var(--phosphor-glow);
  letter-spacing: 0.2em;
}

.page-title.breached {
  color: var(--alarm);
  text-shadow: 0 0 24px var(--alarm-glow);
  animation: flicker 0.8s steps(2) infinite;
}

.instructions {
  margin-top: 0.75rem;
  font-size: var(--text-sm);
}

.instructions.muted {
  color: var(--text-muted);
  font-size: var(--text-xs);
}

/* === Hash Grid === */
.hash-grid {
  display: grid;
  gap: 0.35rem;
  padding: 1rem 1.25rem;
  border: 1px solid var(--void-border);
  background: var(--void-lighter);
  min-height: 10rem;
}

.hash-grid.pending {
  min-width: 40rem;
}

.hash-row {
  display: grid;
  grid-template-columns: repeat(5, auto);
  gap: 1.25rem;
}

.hash-cell {
  font-size: var(--text-xs);
  color: var(--phosphor-dim);
  white-space: nowrap;
}

/* === Form === */
.guess-form {
  display: flex;
  gap: 0.75rem;
  align-items: flex-end;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.input-field {
  background: transparent;
  border: 1px solid var(--void-border);
  color: var(--phosphor);
  font-family: var(--font-mono);
  font-size: var(--text-base);
  padding: 0.5rem 0.75rem;
  min-width: 18rem;
  outline: none;
  transition: box-shadow var(--transition-fast), border-color var(--transition-fast);
}

.input-field:focus {
  border-color: var(--phosphor-dim);
  box-shadow: 0 0 12px var(--phosphor-glow);
}

.input-field::placeholder {
  color: var(--text-muted);
  font-style: italic;
}

/* === Buttons === */
.btn-primary {
  background: transparent;
  border: 1px solid var(--phosphor-dim);
  color: var(--phosphor);
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  padding: 0.5rem 1.25rem;
  cursor: pointer;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  transition: box-shadow var(--transition-fast);
}

.btn-primary:hover {
  box-shadow: 0 0 12px var(--phosphor-glow);
}

/* === Lose Overlay === */
.lose-page {
  position: relative;
  overflow: hidden;
}

.glitch-overlay {
  position: fixed;
  inset: 0;
  display: flex;
  flex-direction: column;
  justify-content: center;
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  line-height: 1.2;
  color: var(--alarm);
  opacity: 0.35;
  white-space: pre;
  overflow: hidden;
  pointer-events: none;
}

.breach-notice {
  position: relative;
  text-align: center;
  padding: 2rem 3rem;
  background: rgba(5, 5, 5, 0.85);
  border: 1px solid var(--alarm);
  box-shadow: 0 0 40px var(--alarm-glow);
}

@keyframes flicker {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.7; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use breachgrid_ui::{BUTTON_CLASS, INPUT_CLASS};

    fn selectors() -> Vec<&'static str> {
        GLOBAL_STYLES
            .split('.')
            .skip(1)
            .filter_map(|rest| {
                rest.split(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
                    .next()
            })
            .filter(|name| name.chars().next().is_some_and(|c| c.is_ascii_alphabetic()))
            .collect()
    }

    #[test]
    fn test_component_classes_are_styled() {
        let selectors = selectors();
        assert!(selectors.contains(&BUTTON_CLASS));
        assert!(selectors.contains(&INPUT_CLASS));
    }

    #[test]
    fn test_no_rules_for_unrendered_classes() {
        let selectors = selectors();
        for gone in ["input-label", "btn-danger", "btn-ghost"] {
            assert!(!selectors.contains(&gone), "{} is never rendered", gone);
        }
        assert!(!GLOBAL_STYLES.contains("button:disabled"));
    }
}
