//! Static schema of the collectible project content.
//!
//! Five page templates, each with exactly ten sections, each section with
//! an ordered list of field names. Everything the form can collect and the
//! compiler can emit is named here; nothing else invents section or field
//! identifiers.
//!
//! ## Field Kinds
//!
//! A field's kind is derived from its name, never stored:
//!
//! - `imagenes` is always an [`FieldKind::ImageList`] (comma-separated file names)
//! - a name containing one of the page's long-text markers is [`FieldKind::LongText`]
//! - everything else is [`FieldKind::ShortText`]
//!
//! The marker lists differ per page (`Larga` only matters on the services
//! page, `testimonio` only on the gallery page, ...), so each [`PageSchema`]
//! carries its own. Kinds only pick the input widget; the compiled document
//! treats every field as an opaque string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("unknown page '{0}' (expected one of: home, about, services, gallery, contact)")]
    UnknownPage(String),
    #[error("page '{page}' has no section '{section}'")]
    UnknownSection { page: PageId, section: String },
    #[error("section '{page}.{section}' has no field '{field}'")]
    UnknownField {
        page: PageId,
        section: String,
        field: String,
    },
    #[error("unknown platform '{0}'")]
    UnknownPlatform(String),
    #[error("unknown color channel '{0}'")]
    UnknownChannel(String),
    #[error("unknown palette '{0}'")]
    UnknownPalette(String),
}

/// Identifier of one of the five page templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    Home,
    About,
    Services,
    Gallery,
    Contact,
}

impl PageId {
    /// All pages in schema order.
    pub const ALL: [PageId; 5] = [
        PageId::Home,
        PageId::About,
        PageId::Services,
        PageId::Gallery,
        PageId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::About => "about",
            PageId::Services => "services",
            PageId::Gallery => "gallery",
            PageId::Contact => "contact",
        }
    }

    /// File the page becomes in the generated site's file tree.
    pub fn file_name(self) -> &'static str {
        match self {
            PageId::Home => "index.html",
            PageId::About => "about.html",
            PageId::Services => "services.html",
            PageId::Gallery => "gallery.html",
            PageId::Contact => "contact.html",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageId {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownPage(s.to_string()))
    }
}

/// How a field is entered in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    ShortText,
    LongText,
    ImageList,
}

impl FieldKind {
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::ShortText => "short",
            FieldKind::LongText => "long",
            FieldKind::ImageList => "images",
        }
    }
}

/// Name of the one field that always holds a list of image file names.
pub const IMAGE_FIELD: &str = "imagenes";

/// Classify a field name against a set of long-text markers.
///
/// Matching is a case-sensitive substring test; `imagenes` wins over any marker.
pub fn classify_field(field: &str, long_text_markers: &[&str]) -> FieldKind {
    if field == IMAGE_FIELD {
        FieldKind::ImageList
    } else if long_text_markers.iter().any(|m| field.contains(m)) {
        FieldKind::LongText
    } else {
        FieldKind::ShortText
    }
}

/// One section of a page template.
#[derive(Debug, PartialEq, Eq)]
pub struct SectionDef {
    pub id: &'static str,
    pub name: &'static str,
    pub fields: &'static [&'static str],
}

impl SectionDef {
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains(&field)
    }
}

/// A page template: its sections plus the per-page input hints.
#[derive(Debug, PartialEq, Eq)]
pub struct PageSchema {
    pub id: PageId,
    pub display_name: &'static str,
    pub sections: &'static [SectionDef],
    /// Substrings that make a field a long-text field on this page.
    pub long_text_markers: &'static [&'static str],
    /// Example shown in image-list inputs on this page.
    pub image_placeholder: &'static str,
}

impl PageSchema {
    pub fn section(&self, id: &str) -> Option<&SectionDef> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn field_kind(&self, field: &str) -> FieldKind {
        classify_field(field, self.long_text_markers)
    }

    /// Placeholder text for a field's input widget.
    pub fn input_hint(&self, field: &str) -> String {
        match self.field_kind(field) {
            FieldKind::ImageList => self.image_placeholder.to_string(),
            FieldKind::LongText | FieldKind::ShortText => format!("Ingresa {field}..."),
        }
    }

    /// Resolve a section/field pair, failing on names the template doesn't define.
    pub fn check_field(&self, section: &str, field: &str) -> Result<&SectionDef, SchemaError> {
        let def = self
            .section(section)
            .ok_or_else(|| SchemaError::UnknownSection {
                page: self.id,
                section: section.to_string(),
            })?;
        if !def.has_field(field) {
            return Err(SchemaError::UnknownField {
                page: self.id,
                section: section.to_string(),
                field: field.to_string(),
            });
        }
        Ok(def)
    }
}

/// The registry handed to the compiler and the form.
///
/// Cheap to copy: it only points at static data.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pages: &'static [PageSchema; 5],
}

impl Schema {
    pub fn standard() -> Self {
        Self { pages: &PAGES }
    }

    pub fn pages(&self) -> &'static [PageSchema] {
        self.pages
    }

    /// Total over the five known pages.
    pub fn page(&self, id: PageId) -> &'static PageSchema {
        let pages: &'static [PageSchema; 5] = self.pages;
        &pages[id as usize]
    }

    pub fn sections_for(&self, id: PageId) -> &'static [SectionDef] {
        self.page(id).sections
    }

    pub fn display_name(&self, id: PageId) -> &'static str {
        self.page(id).display_name
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::standard()
    }
}

const fn section(
    id: &'static str,
    name: &'static str,
    fields: &'static [&'static str],
) -> SectionDef {
    SectionDef { id, name, fields }
}

const SERVICE_FIELDS: &[&str] = &[
    "nombreServicio",
    "descripcionCorta",
    "descripcionLarga",
    "beneficios",
    "precio",
    "imagenes",
];

const PROJECT_FIELDS: &[&str] = &[
    "nombreProyecto",
    "cliente",
    "descripcion",
    "tecnologias",
    "resultados",
    "imagenes",
];

const CTA_FIELDS: &[&str] = &["titulo", "descripcion", "textoCTA", "imagenes"];

const FAQ_FIELDS: &[&str] = &[
    "pregunta1",
    "respuesta1",
    "pregunta2",
    "respuesta2",
    "pregunta3",
    "respuesta3",
];

// Indexed by `PageId as usize`; keep in `PageId::ALL` order.
static PAGES: [PageSchema; 5] = [
    PageSchema {
        id: PageId::Home,
        display_name: "Home",
        sections: &[
            section("hero", "Hero Principal", &["titulo", "subtitulo", "textoCTA", "imagenes"]),
            section(
                "features",
                "Características/Servicios",
                &["titulo", "descripcion", "feature1", "feature2", "feature3", "imagenes"],
            ),
            section(
                "benefits",
                "Beneficios",
                &["titulo", "descripcion", "beneficio1", "beneficio2", "beneficio3", "imagenes"],
            ),
            section(
                "howItWorks",
                "Cómo Funciona",
                &["titulo", "paso1", "paso2", "paso3", "imagenes"],
            ),
            section(
                "testimonials",
                "Testimonios",
                &["titulo", "testimonio1", "testimonio2", "testimonio3", "imagenes"],
            ),
            section(
                "stats",
                "Estadísticas/Números",
                &["stat1Numero", "stat1Texto", "stat2Numero", "stat2Texto", "stat3Numero", "stat3Texto"],
            ),
            section(
                "portfolio",
                "Portafolio/Casos de Éxito",
                &["titulo", "proyecto1", "proyecto2", "proyecto3", "imagenes"],
            ),
            section(
                "pricing",
                "Precios/Planes",
                &["titulo", "plan1", "precio1", "plan2", "precio2", "plan3", "precio3"],
            ),
            section("faq", "Preguntas Frecuentes", FAQ_FIELDS),
            section("cta", "Llamado a la Acción Final", CTA_FIELDS),
        ],
        long_text_markers: &["descripcion", "respuesta"],
        image_placeholder: "Ej: hero-bg.jpg, feature1.png, icon1.svg",
    },
    PageSchema {
        id: PageId::About,
        display_name: "About Us",
        sections: &[
            section("intro", "Introducción/Hero", &["titulo", "descripcionCorta", "imagenes"]),
            section(
                "historia",
                "Nuestra Historia",
                &["titulo", "añoFundacion", "historiaCompleta", "imagenes"],
            ),
            section("mision", "Misión", &["titulo", "misionTexto", "imagenes"]),
            section("vision", "Visión", &["titulo", "visionTexto", "imagenes"]),
            section(
                "valores",
                "Valores",
                &["titulo", "valor1", "valor2", "valor3", "valor4", "imagenes"],
            ),
            section(
                "equipo",
                "Nuestro Equipo",
                &[
                    "titulo",
                    "miembro1Nombre",
                    "miembro1Cargo",
                    "miembro2Nombre",
                    "miembro2Cargo",
                    "miembro3Nombre",
                    "miembro3Cargo",
                    "imagenes",
                ],
            ),
            section(
                "logros",
                "Logros y Reconocimientos",
                &["titulo", "logro1", "logro2", "logro3", "imagenes"],
            ),
            section(
                "timeline",
                "Línea de Tiempo",
                &[
                    "titulo",
                    "evento1Año",
                    "evento1Desc",
                    "evento2Año",
                    "evento2Desc",
                    "evento3Año",
                    "evento3Desc",
                ],
            ),
            section(
                "cultura",
                "Cultura Empresarial",
                &["titulo", "descripcion", "aspecto1", "aspecto2", "aspecto3", "imagenes"],
            ),
            section("ctaAbout", "Llamado a la Acción", CTA_FIELDS),
        ],
        long_text_markers: &["Completa", "Texto", "descripcion", "Desc"],
        image_placeholder: "Ej: historia.jpg, equipo.jpg, valores-bg.png",
    },
    PageSchema {
        id: PageId::Services,
        display_name: "Services",
        sections: &[
            section("heroServices", "Hero Servicios", &["titulo", "descripcion", "imagenes"]),
            section("servicio1", "Servicio #1", SERVICE_FIELDS),
            section("servicio2", "Servicio #2", SERVICE_FIELDS),
            section("servicio3", "Servicio #3", SERVICE_FIELDS),
            section("servicio4", "Servicio #4", SERVICE_FIELDS),
            section(
                "proceso",
                "Nuestro Proceso",
                &["titulo", "paso1", "paso2", "paso3", "paso4", "imagenes"],
            ),
            section(
                "paquetes",
                "Paquetes y Precios",
                &[
                    "titulo", "paquete1", "precio1", "incluye1", "paquete2", "precio2", "incluye2",
                    "paquete3", "precio3", "incluye3",
                ],
            ),
            section(
                "diferenciadores",
                "Por Qué Elegirnos",
                &["titulo", "diferenciador1", "diferenciador2", "diferenciador3", "imagenes"],
            ),
            section(
                "casosExito",
                "Casos de Éxito",
                &["titulo", "caso1", "resultado1", "caso2", "resultado2", "imagenes"],
            ),
            section("ctaServices", "Llamado a la Acción", CTA_FIELDS),
        ],
        long_text_markers: &["Larga", "descripcion", "beneficios", "incluye"],
        image_placeholder: "Ej: servicio1.jpg, servicio2.jpg, proceso-icon.svg",
    },
    PageSchema {
        id: PageId::Gallery,
        display_name: "Gallery",
        sections: &[
            section("heroGallery", "Hero Galería", &["titulo", "descripcion", "imagenes"]),
            section(
                "categoria1",
                "Categoría #1",
                &["nombreCategoria", "descripcion", "imagenes"],
            ),
            section("proyecto1", "Proyecto #1", PROJECT_FIELDS),
            section("proyecto2", "Proyecto #2", PROJECT_FIELDS),
            section("proyecto3", "Proyecto #3", PROJECT_FIELDS),
            section(
                "categoria2",
                "Categoría #2",
                &["nombreCategoria", "descripcion", "imagenes"],
            ),
            section("proyecto4", "Proyecto #4", PROJECT_FIELDS),
            section("proyecto5", "Proyecto #5", PROJECT_FIELDS),
            section(
                "testimoniosGallery",
                "Testimonios de Clientes",
                &["titulo", "testimonio1", "cliente1", "testimonio2", "cliente2", "imagenes"],
            ),
            section("ctaGallery", "Llamado a la Acción", CTA_FIELDS),
        ],
        long_text_markers: &["descripcion", "resultados", "tecnologias", "testimonio"],
        image_placeholder: "Ej: galeria1.jpg, galeria2.jpg, proyecto1-main.jpg, proyecto1-detail1.jpg",
    },
    PageSchema {
        id: PageId::Contact,
        display_name: "Contact",
        sections: &[
            section("heroContact", "Hero Contacto", &["titulo", "descripcion", "imagenes"]),
            section(
                "infoContacto",
                "Información de Contacto",
                &["telefono", "email", "direccion", "horario", "imagenes"],
            ),
            section(
                "formulario",
                "Formulario de Contacto",
                &["tituloFormulario", "camposRequeridos", "mensajeExito", "imagenes"],
            ),
            section(
                "mapa",
                "Mapa de Ubicación",
                &["titulo", "direccionCompleta", "coordenadas", "indicaciones"],
            ),
            section(
                "oficinas",
                "Nuestras Oficinas",
                &[
                    "titulo",
                    "oficina1Nombre",
                    "oficina1Direccion",
                    "oficina2Nombre",
                    "oficina2Direccion",
                    "imagenes",
                ],
            ),
            section(
                "redesSociales",
                "Redes Sociales",
                &["titulo", "facebook", "instagram", "twitter", "linkedin", "youtube"],
            ),
            section("faqContact", "Preguntas Frecuentes", FAQ_FIELDS),
            section(
                "atencionCliente",
                "Atención al Cliente",
                &["titulo", "descripcion", "whatsapp", "chatEnLinea", "imagenes"],
            ),
            section("newsletter", "Newsletter", CTA_FIELDS),
            section("ctaContact", "Llamado a la Acción Final", CTA_FIELDS),
        ],
        long_text_markers: &["descripcion", "respuesta", "direccion", "Completa", "indicaciones"],
        image_placeholder: "Ej: contacto-bg.jpg, oficina1.jpg, mapa-icon.svg",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_has_ten_sections() {
        let schema = Schema::standard();
        for id in PageId::ALL {
            assert_eq!(schema.sections_for(id).len(), 10, "page {id}");
        }
    }

    #[test]
    fn registry_is_indexed_by_page_id() {
        let schema = Schema::standard();
        for id in PageId::ALL {
            assert_eq!(schema.page(id).id, id);
        }
    }

    #[test]
    fn section_ids_are_unique_within_a_page() {
        let schema = Schema::standard();
        for page in schema.pages() {
            let mut ids: Vec<&str> = page.sections.iter().map(|s| s.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), page.sections.len(), "page {}", page.id);
        }
    }

    #[test]
    fn sections_have_three_to_ten_fields() {
        let schema = Schema::standard();
        for page in schema.pages() {
            for s in page.sections {
                assert!(
                    (3..=10).contains(&s.fields.len()),
                    "{}.{} has {} fields",
                    page.id,
                    s.id,
                    s.fields.len()
                );
            }
        }
    }

    #[test]
    fn parse_page_ids() {
        assert_eq!("gallery".parse::<PageId>().unwrap(), PageId::Gallery);
        assert_eq!(
            "blog".parse::<PageId>(),
            Err(SchemaError::UnknownPage("blog".to_string()))
        );
    }

    #[test]
    fn imagenes_is_always_an_image_list() {
        assert_eq!(classify_field("imagenes", &["imagenes"]), FieldKind::ImageList);
        assert_eq!(classify_field("imagenes", &[]), FieldKind::ImageList);
    }

    #[test]
    fn markers_are_case_sensitive_substrings() {
        let markers = &["Texto", "descripcion"];
        assert_eq!(classify_field("misionTexto", markers), FieldKind::LongText);
        assert_eq!(classify_field("descripcionCorta", markers), FieldKind::LongText);
        assert_eq!(classify_field("textoCTA", markers), FieldKind::ShortText);
    }

    #[test]
    fn marker_lists_are_per_page() {
        let schema = Schema::standard();
        // "Texto" is a long-text marker on the about page only.
        assert_eq!(
            schema.page(PageId::Home).field_kind("stat1Texto"),
            FieldKind::ShortText
        );
        assert_eq!(
            schema.page(PageId::About).field_kind("misionTexto"),
            FieldKind::LongText
        );
        assert_eq!(
            schema.page(PageId::Services).field_kind("incluye2"),
            FieldKind::LongText
        );
        assert_eq!(
            schema.page(PageId::Gallery).field_kind("testimonio1"),
            FieldKind::LongText
        );
        assert_eq!(
            schema.page(PageId::Contact).field_kind("oficina1Direccion"),
            FieldKind::ShortText
        );
    }

    #[test]
    fn input_hints() {
        let home = Schema::standard().page(PageId::Home);
        assert_eq!(home.input_hint("imagenes"), "Ej: hero-bg.jpg, feature1.png, icon1.svg");
        assert_eq!(home.input_hint("titulo"), "Ingresa titulo...");
    }

    #[test]
    fn check_field_rejects_unknown_names() {
        let contact = Schema::standard().page(PageId::Contact);
        assert!(contact.check_field("mapa", "coordenadas").is_ok());
        assert!(matches!(
            contact.check_field("hero", "titulo"),
            Err(SchemaError::UnknownSection { .. })
        ));
        assert!(matches!(
            contact.check_field("mapa", "imagenes"),
            Err(SchemaError::UnknownField { .. })
        ));
    }
}
