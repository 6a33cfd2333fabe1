//! Browser meter generation.
//!
//! The meter is a self-contained HTML page that re-implements the rule
//! table in JavaScript so it can score on every keystroke without a
//! backend. The page is rendered from [`RULES`](crate::rules::RULES) and
//! the score constants, never maintained by hand.

use std::path::Path;

use thiserror::Error;

use crate::rules::{BONUS_LENGTH, RULES};
use crate::types::{MEDIUM_MIN_SCORE, PasswordScore, PasswordStrength, STRONG_MIN_SCORE};

#[derive(Error, Debug)]
pub enum MeterError {
    #[error("Failed to write meter page: {0}")]
    WriteError(#[from] std::io::Error),
}

const TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Password Strength Meter</title>
<style>
  body { font-family: sans-serif; max-width: 28rem; margin: 3rem auto; }
  input { width: 100%; font-size: 1.1rem; padding: 0.4rem; box-sizing: border-box; }
  #track { height: 0.5rem; background: #eee; border-radius: 0.25rem; margin-top: 0.75rem; }
  #bar { height: 100%; width: 0; border-radius: 0.25rem; transition: width 0.15s; }
  #bar.weak { background: #d9534f; }
  #bar.medium { background: #f0ad4e; }
  #bar.strong { background: #5cb85c; }
  #suggestions { color: #555; }
</style>
</head>
<body>
<h1>Password Strength Meter</h1>
<input id="password" type="password" placeholder="Type a password" autofocus>
<div id="track"><div id="bar" class="weak"></div></div>
<p id="label"></p>
<ul id="suggestions"></ul>
<script>
const RULES = [
__RULES__];

function evaluate(p) {
  const suggestions = [];
  let score = 0;
  for (const rule of RULES) {
    if (rule.check(p)) { score++; } else { suggestions.push(rule.suggestion); }
  }
  if ([...p].length >= __BONUS_LENGTH__) { score++; }
  return { score, suggestions };
}

function strength(score) {
  if (score >= __STRONG_MIN__) { return "__STRONG__"; }
  if (score >= __MEDIUM_MIN__) { return "__MEDIUM__"; }
  return "__WEAK__";
}

const input = document.getElementById("password");
const bar = document.getElementById("bar");
const label = document.getElementById("label");
const list = document.getElementById("suggestions");

function update() {
  const { score, suggestions } = evaluate(input.value);
  const tier = strength(score);
  bar.style.width = (score / __MAX_SCORE__ * 100) + "%";
  bar.className = tier.toLowerCase();
  label.textContent = tier + " (" + score + " / __MAX_SCORE__)";
  list.textContent = "";
  for (const s of suggestions) {
    const li = document.createElement("li");
    li.textContent = s;
    list.appendChild(li);
  }
}

input.addEventListener("input", update);
update();
</script>
</body>
</html>
"#;

/// Renders the self-contained meter page.
pub fn render_meter_html() -> String {
    let mut rules_js = String::new();
    for rule in &RULES {
        // serde_json handles the string escaping; a JSON string is a valid
        // JavaScript string literal.
        let suggestion =
            serde_json::to_string(rule.suggestion).expect("suggestion serializes as a string");
        rules_js.push_str(&format!(
            "  {{ check: (p) => {}, suggestion: {} }},\n",
            rule.js_check, suggestion
        ));
    }

    TEMPLATE
        .replace("__RULES__", &rules_js)
        .replace("__BONUS_LENGTH__", &BONUS_LENGTH.to_string())
        .replace("__STRONG_MIN__", &STRONG_MIN_SCORE.to_string())
        .replace("__MEDIUM_MIN__", &MEDIUM_MIN_SCORE.to_string())
        .replace("__MAX_SCORE__", &PasswordScore::MAX.value().to_string())
        .replace("__STRONG__", &PasswordStrength::Strong.to_string())
        .replace("__MEDIUM__", &PasswordStrength::Medium.to_string())
        .replace("__WEAK__", &PasswordStrength::Weak.to_string())
}

/// Writes the meter page to `path`.
pub fn write_meter<P: AsRef<Path>>(path: P) -> Result<(), MeterError> {
    std::fs::write(path.as_ref(), render_meter_html())?;
    Ok(())
}
