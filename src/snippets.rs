//! Code blocks embedded in the generated document.
//!
//! The HTML snippets are built with [maud](https://maud.lambda.xyz/).
//! Values the user typed (project name, button URLs, palette colors) are
//! inserted verbatim through `PreEscaped`, so a snippet shows exactly the
//! text the rest of the document shows. Explicit newline/indent text nodes
//! keep the rendered HTML laid out one element per line, the way a person
//! would paste it.
//!
//! JavaScript and the CDN catalog are constant text.

use crate::types::{FloatingButtons, Platform};
use maud::{Markup, PreEscaped, html};

/// Newline followed by 0, 1, 2 or 3 levels of two-space indentation.
const NL: [&str; 4] = ["\n", "\n  ", "\n    ", "\n      "];

/// One library entry of the CDN block.
pub struct CdnLibrary {
    /// Bullet text before the colon, markdown included.
    pub intro: &'static str,
    pub tags: &'static [&'static str],
}

pub const CDN_LIBRARIES: &[CdnLibrary] = &[
    CdnLibrary {
        intro: "**Tailwind CSS** via CDN",
        tags: &[r#"<script src="https://cdn.tailwindcss.com"></script>"#],
    },
    CdnLibrary {
        intro: "**GSAP** (animaciones)",
        tags: &[
            r#"<script src="https://cdnjs.cloudflare.com/ajax/libs/gsap/3.12.5/gsap.min.js"></script>"#,
            r#"<script src="https://cdnjs.cloudflare.com/ajax/libs/gsap/3.12.5/ScrollTrigger.min.js"></script>"#,
        ],
    },
    CdnLibrary {
        intro: "**Swiper.js** (carrusel)",
        tags: &[
            r#"<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swiper@11/swiper-bundle.min.css">"#,
            r#"<script src="https://cdn.jsdelivr.net/npm/swiper@11/swiper-bundle.min.js"></script>"#,
        ],
    },
    CdnLibrary {
        intro: "**AOS** (Animate On Scroll)",
        tags: &[
            r#"<link href="https://unpkg.com/aos@2.3.1/dist/aos.css" rel="stylesheet">"#,
            r#"<script src="https://unpkg.com/aos@2.3.1/dist/aos.js"></script>"#,
        ],
    },
    CdnLibrary {
        intro: "**GLightbox** (lightbox para galería)",
        tags: &[
            r#"<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/glightbox/dist/css/glightbox.min.css">"#,
            r#"<script src="https://cdn.jsdelivr.net/npm/glightbox/dist/js/glightbox.min.js"></script>"#,
        ],
    },
    CdnLibrary {
        intro: "**Lenis** (smooth scroll)",
        tags: &[
            r#"<script src="https://cdn.jsdelivr.net/gh/studio-freight/lenis@1.0.29/bundled/lenis.min.js"></script>"#,
        ],
    },
    CdnLibrary {
        intro: "**Font Awesome** (iconos)",
        tags: &[
            r#"<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">"#,
        ],
    },
];

pub const INIT_JS: &str = r#"// AOS Init
AOS.init({
  duration: 1000,
  once: true
});

// Lenis Smooth Scroll
const lenis = new Lenis();
function raf(time) {
  lenis.raf(time);
  requestAnimationFrame(raf);
}
requestAnimationFrame(raf);

// Swiper Init
const swiper = new Swiper('.swiper', {
  loop: true,
  autoplay: { delay: 3000 },
  pagination: { el: '.swiper-pagination' }
});

// GLightbox Init
const lightbox = GLightbox();

// GSAP ScrollTrigger
gsap.registerPlugin(ScrollTrigger);
gsap.from('.fade-in', {
  opacity: 0,
  y: 50,
  scrollTrigger: {
    trigger: '.fade-in',
    start: 'top 80%'
  }
});
"#;

const CONTACT_FORM_JS: &str = r#"
document.getElementById('contactForm').addEventListener('submit', (e) => {
  e.preventDefault();
  // Aquí va la lógica de envío
  alert('Formulario enviado con éxito');
});
"#;

/// `<head>` with charset, viewport and Open Graph tags.
pub fn head_meta(project_name: &str) -> Markup {
    html! {
        head {
            (NL[1]) meta charset="UTF-8";
            (NL[1]) meta name="viewport" content="width=device-width, initial-scale=1.0";
            (NL[1]) meta name="description" content="Descripción del sitio";
            (NL[1]) meta property="og:title" content=(PreEscaped(project_name));
            (NL[1]) meta property="og:description" content="Descripción del sitio";
            (NL[1]) meta property="og:image" content="URL de imagen principal";
            (NL[1]) title { (PreEscaped(project_name)) }
            (NL[0])
        }
    }
}

/// A link in the site header: display label and target file.
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Fixed header with brand text and a collapsible menu.
pub fn site_header(project_name: &str, primary: &str, links: &[NavLink]) -> Markup {
    html! {
        header class="fixed w-full top-0 z-50 bg-white shadow-md" {
            (NL[1]) nav class="container mx-auto px-4 py-4 flex justify-between items-center" {
                (NL[2]) div class="text-2xl font-bold" style={ "color: " (PreEscaped(primary)) } { (PreEscaped(project_name)) }
                (NL[2]) button id="menuToggle" class="md:hidden" {
                    (NL[3]) i class="fas fa-bars text-2xl" {}
                    (NL[2])
                }
                (NL[2]) ul id="menu" class="hidden md:flex gap-6" {
                    @for link in links {
                        (NL[3]) li { a href=(link.href) class="hover:opacity-70" { (link.label) } }
                    }
                    (NL[2])
                }
                (NL[1])
            }
            (NL[0])
        }
    }
}

/// Stack of round brand buttons, one per enabled platform.
///
/// Returns `None` when no platform is enabled.
pub fn floating_buttons(buttons: &FloatingButtons) -> Option<Markup> {
    let enabled = buttons.enabled();
    if enabled.is_empty() {
        return None;
    }
    Some(html! {
        div class="fixed bottom-6 right-6 flex flex-col gap-3 z-50" {
            @for platform in &enabled {
                (NL[1]) (floating_button(buttons, *platform))
            }
            (NL[0])
        }
    })
}

fn floating_button(buttons: &FloatingButtons, platform: Platform) -> Markup {
    html! {
        a href=(PreEscaped(buttons.href(platform)))
            target="_blank"
            class="w-14 h-14 rounded-full flex items-center justify-center shadow-lg hover:scale-110 transition-transform"
            style={ "background: " (platform.brand_color()) } {
            (NL[2]) i class={ "fab " (platform.icon()) " text-white text-2xl" } {}
            (NL[1])
        }
    }
}

/// Contact form plus its submit handler; the button takes the primary color.
pub fn contact_form(primary: &str) -> Markup {
    html! {
        form id="contactForm" class="space-y-4" {
            (NL[1]) input type="text" name="name" placeholder="Nombre" required class="w-full p-3 border rounded";
            (NL[1]) input type="email" name="email" placeholder="Email" required class="w-full p-3 border rounded";
            (NL[1]) textarea name="message" placeholder="Mensaje" required class="w-full p-3 border rounded" {}
            (NL[1]) button type="submit" class="px-6 py-3 rounded" style={ "background: " (PreEscaped(primary)) "; color: white" } { "Enviar" }
            (NL[0])
        }
        (NL[0]) (NL[0])
        script { (PreEscaped(CONTACT_FORM_JS)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ButtonPatch;

    #[test]
    fn head_meta_is_one_tag_per_line() {
        let head = head_meta("Acme").into_string();
        assert!(head.starts_with("<head>\n  <meta charset=\"UTF-8\">\n"));
        assert!(head.contains("\n  <meta property=\"og:title\" content=\"Acme\">\n"));
        assert!(head.ends_with("\n  <title>Acme</title>\n</head>"));
    }

    #[test]
    fn head_meta_keeps_project_name_verbatim() {
        let head = head_meta("Tom & Jerry").into_string();
        assert!(head.contains("<title>Tom & Jerry</title>"));
        assert!(head.contains(r#"<meta property="og:title" content="Tom & Jerry">"#));
    }

    #[test]
    fn head_meta_accepts_empty_name() {
        let head = head_meta("").into_string();
        assert!(head.contains("<title></title>"));
    }

    #[test]
    fn header_lists_links_and_brand_color() {
        let links = vec![
            NavLink {
                label: "Home".into(),
                href: "index.html".into(),
            },
            NavLink {
                label: "About Us".into(),
                href: "aboutus.html".into(),
            },
        ];
        let header = site_header("Acme", "#123456", &links).into_string();
        assert!(header.contains(r#"<div class="text-2xl font-bold" style="color: #123456">Acme</div>"#));
        assert!(header.contains(
            r#"      <li><a href="aboutus.html" class="hover:opacity-70">About Us</a></li>"#
        ));
        assert!(header.ends_with("  </nav>\n</header>"));
    }

    #[test]
    fn no_buttons_when_none_enabled() {
        assert!(floating_buttons(&FloatingButtons::with_message("hola")).is_none());
    }

    #[test]
    fn buttons_use_brand_lookup() {
        let mut buttons = FloatingButtons::with_message("");
        buttons.apply(Platform::Instagram, ButtonPatch::link("https://instagram.com/x"));
        let markup = floating_buttons(&buttons).unwrap().into_string();
        assert!(markup.contains(r#"href="https://instagram.com/x""#));
        assert!(markup.contains("background: #E4405F"));
        assert!(markup.contains(r#"<i class="fab fa-instagram text-white text-2xl"></i>"#));
        assert_eq!(markup.matches("<a ").count(), 1);
    }

    #[test]
    fn button_href_is_copied_verbatim() {
        let mut buttons = FloatingButtons::with_message("");
        buttons.apply(
            Platform::Youtube,
            ButtonPatch::link("https://youtube.com/watch?v=x&t=1"),
        );
        let markup = floating_buttons(&buttons).unwrap().into_string();
        assert!(markup.contains(r#"<a href="https://youtube.com/watch?v=x&t=1" target="_blank""#));
    }

    #[test]
    fn contact_form_uses_primary_color() {
        let form = contact_form("#abcdef").into_string();
        assert!(form.contains(r#"style="background: #abcdef; color: white""#));
        assert!(form.contains("<script>\ndocument.getElementById('contactForm')"));
    }

    #[test]
    fn cdn_catalog_covers_stack() {
        let intros: Vec<&str> = CDN_LIBRARIES.iter().map(|l| l.intro).collect();
        for lib in ["Tailwind", "GSAP", "Swiper", "AOS", "GLightbox", "Lenis", "Font Awesome"] {
            assert!(intros.iter().any(|i| i.contains(lib)), "{lib} missing");
        }
    }
}
