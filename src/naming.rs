//! Display names and file names derived from identifiers.
//!
//! Field names are camelCase Spanish identifiers (`stat1Numero`,
//! `miembro2Cargo`); the document shows them as words:
//! - `stat1Numero` → "Stat 1 Numero"
//! - `textoCTA` → "Texto C T A"
//! - `evento1Año` → "Evento 1 Año"
//!
//! Export file names are derived from the project name:
//! - `My Site` + md → `My-Site-prompt.md`

/// Uppercase the first character, leave the rest alone.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turn a camelCase field name into a display label.
///
/// A space goes before every uppercase letter and before every run of
/// digits; the result is trimmed and its first letter capitalized.
pub fn humanize_field_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 4);
    let mut prev_digit = false;
    for c in field.chars() {
        let digit = c.is_ascii_digit();
        if c.is_uppercase() || (digit && !prev_digit) {
            out.push(' ');
        }
        out.push(c);
        prev_digit = digit;
    }
    capitalize(out.trim())
}

/// Navigation link target for a page's display name.
///
/// The home page is always `index.html`; other pages use their display
/// name lowercased with all whitespace removed (`About Us` → `aboutus.html`).
pub fn nav_file_name(display_name: &str, is_home: bool) -> String {
    if is_home {
        return "index.html".to_string();
    }
    let stem: String = display_name
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    format!("{stem}.html")
}

/// Export file name: whitespace runs in the project name become a single `-`.
pub fn export_file_name(project_name: &str, extension: &str) -> String {
    let mut stem = String::with_capacity(project_name.len());
    let mut in_space = false;
    for c in project_name.chars() {
        if c.is_whitespace() {
            if !in_space {
                stem.push('-');
            }
            in_space = true;
        } else {
            stem.push(c);
            in_space = false;
        }
    }
    format!("{stem}-prompt.{extension}")
}
