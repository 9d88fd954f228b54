//! Document compiler: project state in, Markdown prompt and JSON out.
//!
//! [`compile`] is a pure function of the state and the schema. It never
//! fails and never reads the clock or the environment, so compiling the
//! same state twice yields byte-identical text.
//!
//! ## Two Forms
//!
//! - **JSON** is structural. [`Prompt`] serializes field-for-field, page
//!   data included as stored (empty sections and empty values too). Key
//!   order comes from the struct layout and from insertion order of the
//!   page data, never from sorting.
//! - **Markdown** is the prompt document. It is rendered from the same
//!   [`Prompt`] in eight fixed phases:
//!
//! ```text
//! 1. title + preamble          5. pages and their filled sections
//! 2. stack, CDNs, <head>       6. header, buttons, JS, contact snippets
//! 3. file tree                 7. closing checklist
//! 4. palette + languages
//! ```
//!
//! Only the Markdown form prunes: empty values produce no line and
//! sections without a single filled value produce no sub-header.

use crate::export::ExportFormat;
use crate::naming::{capitalize, humanize_field_name, nav_file_name};
use crate::schema::{PageId, Schema};
use crate::snippets::{self, CDN_LIBRARIES, INIT_JS, NavLink};
use crate::state::ProjectState;
use crate::types::{ColorChannel, ColorPalette, FloatingButtons, PageContent, Platform};
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::debug;

// =============================================================================
// Structural form
// =============================================================================

/// The structural export. Serializes to the JSON document as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub project_name: String,
    pub website_type: String,
    pub color_palette: ColorPalette,
    pub languages: Vec<String>,
    pub floating_buttons: FloatingButtons,
    pub pages: Vec<PromptPage>,
    pub stack: Stack,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptPage {
    #[serde(skip)]
    pub id: PageId,
    pub name: String,
    pub data: PageContent,
}

/// Libraries the generated site is expected to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stack {
    pub css: &'static str,
    pub animations: &'static str,
    pub carousel: &'static str,
    pub lightbox: &'static str,
    pub smooth_scroll: &'static str,
    pub icons: &'static str,
}

pub const STACK: Stack = Stack {
    css: "Tailwind CSS (CDN)",
    animations: "GSAP, AOS",
    carousel: "Swiper.js",
    lightbox: "GLightbox",
    smooth_scroll: "Lenis",
    icons: "Font Awesome",
};

/// Split a comma-separated languages string. Entries are trimmed; empty ones are kept.
pub fn parse_languages(languages: &str) -> Vec<String> {
    languages.split(',').map(|l| l.trim().to_string()).collect()
}

/// Snapshot the state into its structural form.
pub fn build_prompt(state: &ProjectState, schema: &Schema) -> Prompt {
    Prompt {
        project_name: state.project_name.clone(),
        website_type: state.website_type.clone(),
        color_palette: state.active_palette(),
        languages: parse_languages(&state.languages),
        floating_buttons: state.floating_buttons().clone(),
        pages: state
            .selected_pages()
            .iter()
            .map(|&id| PromptPage {
                id,
                name: schema.display_name(id).to_string(),
                data: state.page_content(id).clone(),
            })
            .collect(),
        stack: STACK,
    }
}

// =============================================================================
// Compiled output
// =============================================================================

/// Both renderings of one state snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Compiled {
    pub prompt: Prompt,
    pub markdown: String,
    pub json: String,
}

impl Compiled {
    pub fn text(&self, format: ExportFormat) -> &str {
        match format {
            ExportFormat::Markdown => &self.markdown,
            ExportFormat::Json => &self.json,
        }
    }

    /// Hex SHA-256 of one rendering. Equal states give equal fingerprints.
    pub fn fingerprint(&self, format: ExportFormat) -> String {
        format!("{:x}", Sha256::digest(self.text(format).as_bytes()))
    }
}

/// Compile a state into Markdown and JSON. Never fails; an empty project
/// name renders as an empty string wherever it appears.
pub fn compile(state: &ProjectState, schema: &Schema) -> Compiled {
    let prompt = build_prompt(state, schema);
    let markdown = render_markdown(&prompt, schema);
    let json = render_json(&prompt);
    debug!(
        pages = prompt.pages.len(),
        markdown_bytes = markdown.len(),
        json_bytes = json.len(),
        "compiled prompt"
    );
    Compiled {
        prompt,
        markdown,
        json,
    }
}

/// Pretty-printed JSON text of the structural form.
pub fn render_json(prompt: &Prompt) -> String {
    serde_json::to_string_pretty(prompt).expect("prompt serializes to JSON")
}

// =============================================================================
// Markdown form
// =============================================================================

const PREAMBLE: &str = "> Actúa como un **arquitecto de producto web premium** (diseñador UX/UI + redactor + front-end dev) capaz de entregar **código HTML/CSS/JS puro** listo para producción. **Vas a generar y entregarás todo en un único bloque organizado según el archivo html a utilizar con sus correspondientes css y js.**\n\n";

const ASSETS_TREE: &str = "├── assets/
│   ├── css/
│   │   └── custom.css
│   ├── js/
│   │   └── main.js
│   └── img/
│       └── (todas las imágenes)
";

const CHECKLIST: [&str; 10] = [
    "Crear todas las páginas HTML con la estructura completa",
    "Implementar todas las secciones con el contenido proporcionado",
    "Usar las imágenes sugeridas (nombres de archivo proporcionados)",
    "Aplicar la paleta de colores en todos los elementos",
    "Implementar todas las animaciones e interacciones mencionadas",
    "Asegurar que el sitio sea 100% responsivo",
    "Incluir menú hamburguesa funcional en móvil",
    "Optimizar para SEO con meta tags apropiados",
    "Código limpio, semántico y comentado",
    "Listo para producción",
];

/// Render the full prompt document.
pub fn render_markdown(prompt: &Prompt, schema: &Schema) -> String {
    let mut md = String::with_capacity(16 * 1024);
    md.push_str(&format!("# Prompt para Crear: {}\n\n", prompt.project_name));
    md.push_str(PREAMBLE);
    render_stack(&mut md, &prompt.project_name);
    render_file_tree(&mut md, &prompt.pages);
    render_palette(&mut md, &prompt.color_palette);
    md.push_str("## FASE 4) Idiomas del Contenido\n\n");
    md.push_str(&format!(
        "Todo el contenido debe estar disponible en: **{}**\n\n",
        prompt.languages.join(", ")
    ));
    md.push_str("## FASE 5) PÁGINAS Y CONTENIDO DETALLADO\n\n");
    for page in &prompt.pages {
        render_page(&mut md, page, schema);
    }
    render_snippets(&mut md, prompt);
    render_checklist(&mut md);
    md
}

fn render_stack(md: &mut String, project_name: &str) {
    md.push_str("## FASE 1) Stack y CDNs\n\n");
    md.push_str("### Lista exacta de `<link>` / `<script>` a incluir:\n\n");
    for lib in CDN_LIBRARIES {
        md.push_str(&format!("- {}:\n  ```html\n", lib.intro));
        for tag in lib.tags {
            md.push_str(&format!("  {tag}\n"));
        }
        md.push_str("  ```\n\n");
    }
    md.push_str("### Meta Tags HEAD:\n");
    md.push_str(&format!(
        "```html\n{}\n```\n\n",
        snippets::head_meta(project_name).into_string()
    ));
}

/// Non-home pages are listed in schema order, whatever the selection order.
fn render_file_tree(md: &mut String, pages: &[PromptPage]) {
    md.push_str("## FASE 2) Estructura de Archivos\n\n```\nproyecto/\n├── index.html\n");
    for id in PageId::ALL {
        if id != PageId::Home && pages.iter().any(|p| p.id == id) {
            md.push_str(&format!("├── {}\n", id.file_name()));
        }
    }
    md.push_str(ASSETS_TREE);
    md.push_str("```\n\n");
}

fn render_palette(md: &mut String, palette: &ColorPalette) {
    md.push_str("## FASE 3) Paleta de Colores del Proyecto\n\n");
    md.push_str("Utilizar esta paleta en todo el sitio:\n\n");
    for channel in ColorChannel::ALL {
        md.push_str(&format!("- **{}:** {}\n", channel.label(), palette.get(channel)));
    }
    md.push_str("\n### Configuración CSS:\n```css\n:root {\n");
    for channel in ColorChannel::ALL {
        md.push_str(&format!(
            "  --color-{}: {};\n",
            channel.as_str(),
            palette.get(channel)
        ));
    }
    md.push_str("}\n```\n\n");
}

/// One page block. Sections come in stored order; the counter skips empty ones.
fn render_page(md: &mut String, page: &PromptPage, schema: &Schema) {
    md.push_str(&format!("### {}\n\n", page.name.to_uppercase()));
    let section_count = schema.sections_for(page.id).len();
    if page.id == PageId::Home {
        md.push_str(&format!(
            "**Tipo:** Landing Page completa con {section_count} secciones\n\n"
        ));
    } else {
        md.push_str(&format!(
            "**Tipo:** Página secundaria con {section_count} secciones específicas\n\n"
        ));
    }

    let mut number = 0;
    for (section_id, values) in page.data.sections() {
        if !values.has_content() {
            continue;
        }
        number += 1;
        md.push_str(&format!(
            "#### Sección {number}: {}\n\n",
            capitalize(section_id)
        ));
        for (field, value) in values.filled() {
            md.push_str(&format!("**{}:** {value}\n\n", humanize_field_name(field)));
        }
        md.push('\n');
    }
    md.push_str("\n---\n\n");
}

fn render_snippets(md: &mut String, prompt: &Prompt) {
    let primary = &prompt.color_palette.primary;

    md.push_str("## FASE 6) Snippets de Código e Inicialización\n\n");
    md.push_str("### Header con Navegación Responsive\n\n");
    let links: Vec<NavLink> = prompt
        .pages
        .iter()
        .map(|p| NavLink {
            label: p.name.clone(),
            href: nav_file_name(&p.name, p.id == PageId::Home),
        })
        .collect();
    md.push_str(&format!(
        "```html\n{}\n```\n\n",
        snippets::site_header(&prompt.project_name, primary, &links).into_string()
    ));

    if let Some(buttons) = snippets::floating_buttons(&prompt.floating_buttons) {
        md.push_str("### Botones Flotantes (Redes Sociales)\n\n");
        md.push_str("Incluir botones flotantes fijos en todas las páginas:\n\n");
        for platform in prompt.floating_buttons.enabled() {
            md.push_str(&button_line(&prompt.floating_buttons, platform));
        }
        md.push_str(&format!("\n```html\n{}\n```\n\n", buttons.into_string()));
    }

    md.push_str("### Inicialización JavaScript\n\n");
    md.push_str(&format!("```javascript\n{INIT_JS}```\n\n"));

    md.push_str("### Formulario de Contacto con Validación\n\n");
    md.push_str(&format!(
        "```html\n{}\n```\n\n",
        snippets::contact_form(primary).into_string()
    ));
}

fn button_line(buttons: &FloatingButtons, platform: Platform) -> String {
    match platform {
        Platform::Whatsapp => format!(
            "- **WhatsApp**: {} - Mensaje: \"{}\"\n",
            buttons.whatsapp.number, buttons.whatsapp.message
        ),
        _ => format!(
            "- **{}**: {}\n",
            capitalize(platform.as_str()),
            buttons.href(platform)
        ),
    }
}

fn render_checklist(md: &mut String) {
    md.push_str("---\n\n## INSTRUCCIONES FINALES\n\n");
    for (i, item) in CHECKLIST.iter().enumerate() {
        md.push_str(&format!("{}. {item}\n", i + 1));
    }
    md.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::CATALOG;
    use crate::test_helpers::*;
    use crate::types::ButtonPatch;
    use pretty_assertions::assert_eq;

    #[test]
    fn fresh_state_compiles() {
        let compiled = compile(&ProjectState::default(), &Schema::standard());
        assert!(compiled.markdown.starts_with("# Prompt para Crear: \n\n"));
        assert!(compiled.markdown.contains("<title></title>"));
        assert!(compiled.markdown.contains("### HOME\n\n"));
        assert!(!compiled.markdown.contains("#### Sección"));
        assert!(!compiled.markdown.contains("Botones Flotantes"));
        assert!(compiled.markdown.ends_with("10. Listo para producción\n\n"));
    }

    #[test]
    fn json_top_level_key_order() {
        let compiled = compile(&named_state("Acme"), &Schema::standard());
        let value: serde_json::Value = serde_json::from_str(&compiled.json).unwrap();
        assert_eq!(value["projectName"], "Acme");
        let keys: Vec<&str> = [
            "projectName",
            "websiteType",
            "colorPalette",
            "languages",
            "floatingButtons",
            "pages",
            "stack",
        ]
        .into_iter()
        .collect();
        let positions: Vec<usize> = keys
            .iter()
            .map(|k| compiled.json.find(&format!("\"{k}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn json_stack_is_constant() {
        let compiled = compile(&ProjectState::default(), &Schema::standard());
        let value: serde_json::Value = serde_json::from_str(&compiled.json).unwrap();
        assert_eq!(
            value["stack"],
            serde_json::json!({
                "css": "Tailwind CSS (CDN)",
                "animations": "GSAP, AOS",
                "carousel": "Swiper.js",
                "lightbox": "GLightbox",
                "smoothScroll": "Lenis",
                "icons": "Font Awesome"
            })
        );
    }

    #[test]
    fn languages_trimmed_empty_kept() {
        assert_eq!(parse_languages("Español,  Inglés "), vec!["Español", "Inglés"]);
        assert_eq!(parse_languages("a,,b"), vec!["a", "", "b"]);
        assert_eq!(parse_languages(""), vec![""]);
    }

    #[test]
    fn languages_line_joins_with_comma_space() {
        let mut state = named_state("Acme");
        state.set_languages("Español,Inglés ,Francés");
        let md = compile(&state, &Schema::standard()).markdown;
        assert!(md.contains("Todo el contenido debe estar disponible en: **Español, Inglés, Francés**\n"));
    }

    #[test]
    fn section_counter_skips_empty_sections() {
        let mut state = named_state("Acme");
        state.set_field(PageId::Home, "hero", "titulo", "Hola");
        state.set_field(PageId::Home, "features", "titulo", "");
        state.set_field(PageId::Home, "cta", "textoCTA", "Ya");
        let md = compile(&state, &Schema::standard()).markdown;
        assert!(md.contains("#### Sección 1: Hero\n\n**Titulo:** Hola\n\n\n"));
        assert!(md.contains("#### Sección 2: Cta\n\n**Texto C T A:** Ya\n\n"));
        assert!(!md.contains("Features"));
    }

    #[test]
    fn example_home_numbers_every_section() {
        let md = compile(&example_state(), &Schema::standard()).markdown;
        let headers = section_headers(&md, "### HOME");
        assert_eq!(headers.len(), 10);
        assert_eq!(headers[0], "#### Sección 1: Hero");
        assert_eq!(headers[3], "#### Sección 4: HowItWorks");
        assert_eq!(headers[9], "#### Sección 10: Cta");
        assert_eq!(section_headers(&md, "### ABOUT US")[0], "#### Sección 1: Intro");
    }

    #[test]
    fn page_type_lines() {
        let mut state = named_state("Acme");
        state.toggle_page(PageId::About);
        let md = compile(&state, &Schema::standard()).markdown;
        assert!(md.contains("### HOME\n\n**Tipo:** Landing Page completa con 10 secciones\n\n"));
        assert!(md.contains(
            "### ABOUT US\n\n**Tipo:** Página secundaria con 10 secciones específicas\n\n"
        ));
    }

    #[test]
    fn file_tree_uses_id_file_names() {
        let mut state = named_state("Acme");
        state.toggle_page(PageId::Contact);
        state.toggle_page(PageId::About);
        let md = compile(&state, &Schema::standard()).markdown;
        assert!(md.contains(
            "proyecto/\n├── index.html\n├── about.html\n├── contact.html\n├── assets/\n"
        ));
        assert!(!md.contains("├── gallery.html"));
    }

    #[test]
    fn nav_links_follow_selection_order() {
        let mut state = named_state("Acme");
        state.toggle_page(PageId::Contact);
        state.toggle_page(PageId::About);
        let md = compile(&state, &Schema::standard()).markdown;
        let contact = md.find(r#"<a href="contact.html""#).unwrap();
        let about = md.find(r#"<a href="aboutus.html""#).unwrap();
        assert!(contact < about);
        assert!(md.contains(r#"<li><a href="index.html" class="hover:opacity-70">Home</a></li>"#));
    }

    #[test]
    fn palette_block_and_css_variables() {
        let mut state = named_state("Acme");
        state.select_palette(&CATALOG[1]);
        let md = compile(&state, &Schema::standard()).markdown;
        assert!(md.contains("- **Primary:** #10b981\n"));
        assert!(md.contains("  --color-text: #064e3b;\n"));
        assert!(md.contains(r#"style="color: #10b981""#));
        assert!(md.contains("background: #10b981; color: white"));
    }

    #[test]
    fn button_listing_and_anchors() {
        let mut state = named_state("Acme");
        state.set_floating_button(
            Platform::Whatsapp,
            ButtonPatch::whatsapp("34912345678", "Hola mundo"),
        );
        state.set_floating_button(Platform::Facebook, ButtonPatch::link("https://fb.com/acme"));
        let md = compile(&state, &Schema::standard()).markdown;
        assert!(md.contains("- **WhatsApp**: 34912345678 - Mensaje: \"Hola mundo\"\n"));
        assert!(md.contains("- **Facebook**: https://fb.com/acme\n"));
        assert!(md.contains(r#"href="https://wa.me/34912345678?text=Hola%20mundo""#));
        assert_eq!(md.matches("target=\"_blank\"").count(), 2);
    }

    #[test]
    fn fingerprint_is_stable_and_format_specific() {
        let state = named_state("Acme");
        let a = compile(&state, &Schema::standard());
        let b = compile(&state, &Schema::standard());
        assert_eq!(a.fingerprint(ExportFormat::Markdown), b.fingerprint(ExportFormat::Markdown));
        assert_ne!(a.fingerprint(ExportFormat::Markdown), a.fingerprint(ExportFormat::Json));
        assert_eq!(a.fingerprint(ExportFormat::Json).len(), 64);
    }
}
