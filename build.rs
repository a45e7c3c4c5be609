use std::env;
use std::fs;
use std::path::Path;

// Variables que la app lee con option_env!
const FORWARDED_KEYS: &[&str] = &["API_URL", "TOAST_DURATION_MS", "FRIENDS_LIMIT", "LOG_LEVEL"];

/// `KEY=VALUE` de una línea de .env, solo si KEY está en la lista permitida
fn forwarded_pair(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    let key = key.trim().trim_start_matches("export ").trim();
    FORWARDED_KEYS
        .contains(&key)
        .then(|| (key, value.trim().trim_matches(|c| c == '"' || c == '\'')))
}

fn main() {
    let env_file = Path::new(".env");
    println!("cargo:rerun-if-changed=build.rs");
    for key in FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=.env not found, using built-in defaults (see .env.example)");
        return;
    };
    println!("cargo:rerun-if-changed=.env");

    // El entorno del proceso tiene prioridad sobre .env
    contents
        .lines()
        .filter_map(forwarded_pair)
        .filter(|(key, _)| env::var(key).is_err())
        .for_each(|(key, value)| println!("cargo:rustc-env={}={}", key, value));
}
