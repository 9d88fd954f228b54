//! The bundled example project.
//!
//! A fully filled-in corporate site in Spanish: every field of every
//! section on all five pages, plus WhatsApp, Facebook and Instagram
//! buttons. It exists so a user can see a complete document without
//! typing anything; nothing depends on its exact wording.

use crate::schema::PageId;
use crate::state::ProjectState;
use crate::types::{ButtonPatch, FloatingButtons, Platform};

type SectionSample = (&'static str, &'static [(&'static str, &'static str)]);

pub const PROJECT_NAME: &str = "Sitio Web Corporativo Premium";
pub const WEBSITE_TYPE: &str = "Corporativo";
pub const LANGUAGES: &str = "Español, Inglés";

const WHATSAPP_NUMBER: &str = "34912345678";
const FACEBOOK_URL: &str = "https://facebook.com/empresapremium";
const INSTAGRAM_URL: &str = "https://instagram.com/empresapremium";

/// Apply the example to a state through its regular operations.
///
/// Page content is replaced wholesale; palette choices are left alone.
pub(crate) fn apply(state: &mut ProjectState) {
    state.set_project_name(PROJECT_NAME);
    state.set_website_type(WEBSITE_TYPE);
    state.set_languages(LANGUAGES);
    state.replace_selection(PageId::ALL.to_vec());

    let message = state.defaults().whatsapp_message.clone();
    state.replace_floating_buttons(FloatingButtons::with_message(message.clone()));
    state.set_floating_button(
        Platform::Whatsapp,
        ButtonPatch::whatsapp(WHATSAPP_NUMBER, message),
    );
    state.set_floating_button(Platform::Facebook, ButtonPatch::link(FACEBOOK_URL));
    state.set_floating_button(Platform::Instagram, ButtonPatch::link(INSTAGRAM_URL));

    state.clear_page_data();
    for (page, sections) in CONTENT {
        for (section, fields) in *sections {
            for (field, value) in *fields {
                state.set_field(*page, section, field, *value);
            }
        }
    }
}

const CONTENT: &[(PageId, &[SectionSample])] = &[
    (
        PageId::Home,
        &[
            (
                "hero",
                &[
                    ("titulo", "Transformamos Tu Negocio Digital"),
                    ("subtitulo", "Soluciones innovadoras para empresas del futuro"),
                    ("textoCTA", "Comenzar Ahora"),
                    ("imagenes", "hero-bg.jpg, hero-overlay.png"),
                ],
            ),
            (
                "features",
                &[
                    ("titulo", "Nuestros Servicios"),
                    ("descripcion", "Ofrecemos soluciones integrales para tu empresa"),
                    ("feature1", "Desarrollo Web Personalizado"),
                    ("feature2", "Marketing Digital Estratégico"),
                    ("feature3", "Consultoría Tecnológica"),
                    ("imagenes", "feature1.jpg, feature2.jpg, feature3.jpg"),
                ],
            ),
            (
                "benefits",
                &[
                    ("titulo", "Por Qué Elegirnos"),
                    ("descripcion", "Beneficios que marcan la diferencia"),
                    ("beneficio1", "Más de 10 años de experiencia"),
                    ("beneficio2", "Equipo de profesionales certificados"),
                    ("beneficio3", "Soporte 24/7 personalizado"),
                    ("imagenes", "benefits-bg.jpg"),
                ],
            ),
            (
                "howItWorks",
                &[
                    ("titulo", "Cómo Trabajamos"),
                    ("paso1", "Análisis inicial y planificación estratégica"),
                    ("paso2", "Desarrollo e implementación"),
                    ("paso3", "Lanzamiento y optimización continua"),
                    ("imagenes", "process-step1.svg, process-step2.svg, process-step3.svg"),
                ],
            ),
            (
                "testimonials",
                &[
                    ("titulo", "Lo Que Dicen Nuestros Clientes"),
                    ("testimonio1", "Excelente servicio, superaron nuestras expectativas - Juan Pérez, CEO TechCorp"),
                    ("testimonio2", "Profesionales de primer nivel, altamente recomendados - María García, Directora Marketing"),
                    ("testimonio3", "Resultados increíbles en tiempo récord - Carlos López, Fundador StartupXYZ"),
                    ("imagenes", "client1.jpg, client2.jpg, client3.jpg"),
                ],
            ),
            (
                "stats",
                &[
                    ("stat1Numero", "500+"),
                    ("stat1Texto", "Proyectos Completados"),
                    ("stat2Numero", "98%"),
                    ("stat2Texto", "Clientes Satisfechos"),
                    ("stat3Numero", "15"),
                    ("stat3Texto", "Años de Experiencia"),
                ],
            ),
            (
                "portfolio",
                &[
                    ("titulo", "Proyectos Destacados"),
                    ("proyecto1", "E-commerce para retail líder - Incremento del 300% en ventas online"),
                    ("proyecto2", "Plataforma SaaS para gestión empresarial - 10,000+ usuarios activos"),
                    ("proyecto3", "App móvil de delivery - Disponible en iOS y Android"),
                    ("imagenes", "portfolio1.jpg, portfolio2.jpg, portfolio3.jpg"),
                ],
            ),
            (
                "pricing",
                &[
                    ("titulo", "Planes y Precios"),
                    ("plan1", "Plan Básico"),
                    ("precio1", "$999/mes"),
                    ("plan2", "Plan Profesional"),
                    ("precio2", "$1,999/mes"),
                    ("plan3", "Plan Enterprise"),
                    ("precio3", "Personalizado"),
                ],
            ),
            (
                "faq",
                &[
                    ("pregunta1", "¿Cuánto tiempo toma un proyecto?"),
                    ("respuesta1", "Depende de la complejidad, típicamente entre 4-12 semanas"),
                    ("pregunta2", "¿Ofrecen soporte post-lanzamiento?"),
                    ("respuesta2", "Sí, todos nuestros planes incluyen soporte continuo"),
                    ("pregunta3", "¿Trabajan con tecnologías específicas?"),
                    ("respuesta3", "Trabajamos con las últimas tecnologías del mercado"),
                ],
            ),
            (
                "cta",
                &[
                    ("titulo", "¿Listo para Comenzar?"),
                    ("descripcion", "Contáctanos hoy y lleva tu negocio al siguiente nivel"),
                    ("textoCTA", "Solicitar Cotización"),
                    ("imagenes", "cta-bg.jpg"),
                ],
            ),
        ],
    ),
    (
        PageId::About,
        &[
            (
                "intro",
                &[
                    ("titulo", "Sobre Nosotros"),
                    ("descripcionCorta", "Somos una empresa líder en soluciones digitales"),
                    ("imagenes", "about-hero.jpg"),
                ],
            ),
            (
                "historia",
                &[
                    ("titulo", "Nuestra Historia"),
                    ("añoFundacion", "2010"),
                    ("historiaCompleta", "Fundada en 2010, hemos crecido de un pequeño equipo a una empresa reconocida internacionalmente, sirviendo a clientes en más de 20 países."),
                    ("imagenes", "historia.jpg, timeline-bg.jpg"),
                ],
            ),
            (
                "mision",
                &[
                    ("titulo", "Nuestra Misión"),
                    ("misionTexto", "Transformar negocios a través de soluciones tecnológicas innovadoras que impulsen el crecimiento y la eficiencia operativa."),
                    ("imagenes", "mision.jpg"),
                ],
            ),
            (
                "vision",
                &[
                    ("titulo", "Nuestra Visión"),
                    ("visionTexto", "Ser la empresa de tecnología más confiable y admirada, reconocida por nuestra excelencia y compromiso con el éxito de nuestros clientes."),
                    ("imagenes", "vision.jpg"),
                ],
            ),
            (
                "valores",
                &[
                    ("titulo", "Nuestros Valores"),
                    ("valor1", "Innovación constante"),
                    ("valor2", "Integridad en cada acción"),
                    ("valor3", "Excelencia en el servicio"),
                    ("valor4", "Trabajo en equipo"),
                    ("imagenes", "valores-bg.jpg"),
                ],
            ),
            (
                "equipo",
                &[
                    ("titulo", "Nuestro Equipo"),
                    ("miembro1Nombre", "Roberto Martínez"),
                    ("miembro1Cargo", "CEO y Fundador"),
                    ("miembro2Nombre", "Ana Silva"),
                    ("miembro2Cargo", "Directora de Tecnología"),
                    ("miembro3Nombre", "Diego Torres"),
                    ("miembro3Cargo", "Director Creativo"),
                    ("imagenes", "team1.jpg, team2.jpg, team3.jpg"),
                ],
            ),
            (
                "logros",
                &[
                    ("titulo", "Logros y Reconocimientos"),
                    ("logro1", "Premio a la Innovación Empresarial 2023"),
                    ("logro2", "Certificación ISO 9001:2015"),
                    ("logro3", "Top 10 Empresas Tech del País"),
                    ("imagenes", "awards.jpg"),
                ],
            ),
            (
                "timeline",
                &[
                    ("titulo", "Nuestra Evolución"),
                    ("evento1Año", "2010"),
                    ("evento1Desc", "Fundación de la empresa"),
                    ("evento2Año", "2015"),
                    ("evento2Desc", "Expansión internacional"),
                    ("evento3Año", "2023"),
                    ("evento3Desc", "Más de 500 proyectos completados"),
                ],
            ),
            (
                "cultura",
                &[
                    ("titulo", "Cultura Empresarial"),
                    ("descripcion", "Fomentamos un ambiente de colaboración, aprendizaje continuo e innovación"),
                    ("aspecto1", "Flexibilidad laboral"),
                    ("aspecto2", "Desarrollo profesional"),
                    ("aspecto3", "Balance vida-trabajo"),
                    ("imagenes", "cultura.jpg, office.jpg"),
                ],
            ),
            (
                "ctaAbout",
                &[
                    ("titulo", "Únete a Nuestro Equipo"),
                    ("descripcion", "Estamos buscando talento para formar parte de nuestra familia"),
                    ("textoCTA", "Ver Vacantes"),
                    ("imagenes", "hiring-bg.jpg"),
                ],
            ),
        ],
    ),
    (
        PageId::Services,
        &[
            (
                "heroServices",
                &[
                    ("titulo", "Nuestros Servicios"),
                    ("descripcion", "Soluciones completas para impulsar tu negocio"),
                    ("imagenes", "services-hero.jpg"),
                ],
            ),
            (
                "servicio1",
                &[
                    ("nombreServicio", "Desarrollo Web"),
                    ("descripcionCorta", "Sitios web modernos y responsivos"),
                    ("descripcionLarga", "Creamos sitios web personalizados utilizando las últimas tecnologías para garantizar rendimiento, seguridad y escalabilidad."),
                    ("beneficios", "Diseño responsivo, SEO optimizado, Velocidad superior"),
                    ("precio", "Desde $2,500"),
                    ("imagenes", "web-dev.jpg, web-dev-detail.jpg"),
                ],
            ),
            (
                "servicio2",
                &[
                    ("nombreServicio", "Marketing Digital"),
                    ("descripcionCorta", "Estrategias que generan resultados"),
                    ("descripcionLarga", "Campañas integrales de marketing digital que aumentan tu visibilidad online y convierten visitantes en clientes."),
                    ("beneficios", "SEO/SEM, Redes Sociales, Email Marketing"),
                    ("precio", "Desde $1,500/mes"),
                    ("imagenes", "marketing.jpg, marketing-detail.jpg"),
                ],
            ),
            (
                "servicio3",
                &[
                    ("nombreServicio", "Desarrollo de Apps"),
                    ("descripcionCorta", "Apps nativas e híbridas"),
                    ("descripcionLarga", "Aplicaciones móviles para iOS y Android que ofrecen experiencias excepcionales a tus usuarios."),
                    ("beneficios", "UI/UX superior, Alto rendimiento, Mantenimiento incluido"),
                    ("precio", "Desde $5,000"),
                    ("imagenes", "app-dev.jpg, app-screens.jpg"),
                ],
            ),
            (
                "servicio4",
                &[
                    ("nombreServicio", "Consultoría IT"),
                    ("descripcionCorta", "Asesoría tecnológica experta"),
                    ("descripcionLarga", "Análisis y recomendaciones estratégicas para optimizar tu infraestructura tecnológica."),
                    ("beneficios", "Auditoría completa, Plan de acción, Seguimiento continuo"),
                    ("precio", "$200/hora"),
                    ("imagenes", "consultoria.jpg"),
                ],
            ),
            (
                "proceso",
                &[
                    ("titulo", "Nuestro Proceso de Trabajo"),
                    ("paso1", "Descubrimiento y análisis de necesidades"),
                    ("paso2", "Diseño y prototipado"),
                    ("paso3", "Desarrollo e implementación"),
                    ("paso4", "Pruebas y lanzamiento"),
                    ("imagenes", "proceso.jpg"),
                ],
            ),
            (
                "paquetes",
                &[
                    ("titulo", "Paquetes Especiales"),
                    ("paquete1", "Startup"),
                    ("precio1", "$4,999"),
                    ("incluye1", "Web + Marketing básico + 3 meses soporte"),
                    ("paquete2", "Business"),
                    ("precio2", "$9,999"),
                    ("incluye2", "Web + App + Marketing completo + 6 meses soporte"),
                    ("paquete3", "Enterprise"),
                    ("precio3", "Personalizado"),
                    ("incluye3", "Solución completa a medida + soporte dedicado 24/7"),
                ],
            ),
            (
                "diferenciadores",
                &[
                    ("titulo", "Por Qué Somos Diferentes"),
                    ("diferenciador1", "Metodología ágil probada"),
                    ("diferenciador2", "Equipo multidisciplinario senior"),
                    ("diferenciador3", "Garantía de satisfacción 100%"),
                    ("imagenes", "diferenciadores.jpg"),
                ],
            ),
            (
                "casosExito",
                &[
                    ("titulo", "Casos de Éxito"),
                    ("caso1", "Tienda online para moda - 200% aumento en conversiones"),
                    ("resultado1", "ROI positivo en 3 meses"),
                    ("caso2", "App de fitness - 50,000 descargas en primer mes"),
                    ("resultado2", "4.8 estrellas en App Store"),
                    ("imagenes", "caso1.jpg, caso2.jpg"),
                ],
            ),
            (
                "ctaServices",
                &[
                    ("titulo", "Solicita una Consulta Gratuita"),
                    ("descripcion", "Analizamos tu proyecto sin compromiso"),
                    ("textoCTA", "Agendar Consulta"),
                    ("imagenes", "cta-services.jpg"),
                ],
            ),
        ],
    ),
    (
        PageId::Gallery,
        &[
            (
                "heroGallery",
                &[
                    ("titulo", "Nuestro Portafolio"),
                    ("descripcion", "Proyectos que nos enorgullecen"),
                    ("imagenes", "gallery-hero.jpg"),
                ],
            ),
            (
                "categoria1",
                &[
                    ("nombreCategoria", "Sitios Web"),
                    ("descripcion", "Diseños web modernos y funcionales"),
                    ("imagenes", "cat-web.jpg"),
                ],
            ),
            (
                "proyecto1",
                &[
                    ("nombreProyecto", "E-commerce Moda Urbana"),
                    ("cliente", "Fashion Store Inc"),
                    ("descripcion", "Plataforma de comercio electrónico completa con pasarela de pagos"),
                    ("tecnologias", "React, Node.js, Stripe"),
                    ("resultados", "Incremento del 250% en ventas online"),
                    ("imagenes", "proyecto1-main.jpg, proyecto1-1.jpg, proyecto1-2.jpg"),
                ],
            ),
            (
                "proyecto2",
                &[
                    ("nombreProyecto", "Portal Corporativo"),
                    ("cliente", "Tech Solutions Global"),
                    ("descripcion", "Sitio corporativo multilingüe con CMS personalizado"),
                    ("tecnologias", "Vue.js, Laravel, MySQL"),
                    ("resultados", "Reducción del 40% en tiempo de actualización de contenido"),
                    ("imagenes", "proyecto2-main.jpg, proyecto2-1.jpg"),
                ],
            ),
            (
                "proyecto3",
                &[
                    ("nombreProyecto", "App de Delivery"),
                    ("cliente", "QuickFood"),
                    ("descripcion", "Aplicación móvil para pedidos de comida con tracking en tiempo real"),
                    ("tecnologias", "React Native, Firebase"),
                    ("resultados", "10,000+ usuarios activos mensuales"),
                    ("imagenes", "proyecto3-main.jpg, proyecto3-screens.jpg"),
                ],
            ),
            (
                "categoria2",
                &[
                    ("nombreCategoria", "Aplicaciones Móviles"),
                    ("descripcion", "Apps innovadoras para iOS y Android"),
                    ("imagenes", "cat-apps.jpg"),
                ],
            ),
            (
                "proyecto4",
                &[
                    ("nombreProyecto", "App Fitness Tracker"),
                    ("cliente", "HealthyLife"),
                    ("descripcion", "App de seguimiento de actividad física y nutrición"),
                    ("tecnologias", "Swift, Kotlin, Node.js"),
                    ("resultados", "4.8 estrellas en tiendas, 50K+ descargas"),
                    ("imagenes", "proyecto4-main.jpg, proyecto4-ui.jpg"),
                ],
            ),
            (
                "proyecto5",
                &[
                    ("nombreProyecto", "Plataforma Educativa"),
                    ("cliente", "EduLearn"),
                    ("descripcion", "Sistema de gestión de aprendizaje online"),
                    ("tecnologias", "Angular, Python, PostgreSQL"),
                    ("resultados", "5,000+ estudiantes registrados"),
                    ("imagenes", "proyecto5-main.jpg, proyecto5-dashboard.jpg"),
                ],
            ),
            (
                "testimoniosGallery",
                &[
                    ("titulo", "Lo Que Dicen Nuestros Clientes"),
                    ("testimonio1", "El equipo superó todas nuestras expectativas, entrega impecable"),
                    ("cliente1", "María González - Fashion Store"),
                    ("testimonio2", "Profesionales dedicados que realmente entienden las necesidades del negocio"),
                    ("cliente2", "Carlos Ruiz - Tech Solutions"),
                    ("imagenes", "testimonial1.jpg, testimonial2.jpg"),
                ],
            ),
            (
                "ctaGallery",
                &[
                    ("titulo", "¿Quieres Ver Tu Proyecto Aquí?"),
                    ("descripcion", "Convierte tu idea en realidad"),
                    ("textoCTA", "Iniciar Proyecto"),
                    ("imagenes", "cta-gallery.jpg"),
                ],
            ),
        ],
    ),
    (
        PageId::Contact,
        &[
            (
                "heroContact",
                &[
                    ("titulo", "Contáctanos"),
                    ("descripcion", "Estamos aquí para ayudarte"),
                    ("imagenes", "contact-hero.jpg"),
                ],
            ),
            (
                "infoContacto",
                &[
                    ("telefono", "+34 912 345 678"),
                    ("email", "info@empresapremium.com"),
                    ("direccion", "Calle Mayor 123, 28013 Madrid, España"),
                    ("horario", "Lunes a Viernes: 9:00 - 18:00"),
                    ("imagenes", "contact-info.jpg"),
                ],
            ),
            (
                "formulario",
                &[
                    ("tituloFormulario", "Envíanos un Mensaje"),
                    ("camposRequeridos", "Nombre, Email, Teléfono, Mensaje"),
                    ("mensajeExito", "Gracias por contactarnos, responderemos en menos de 24 horas"),
                    ("imagenes", "form-bg.jpg"),
                ],
            ),
            (
                "mapa",
                &[
                    ("titulo", "Encuéntranos"),
                    ("direccionCompleta", "Calle Mayor 123, Planta 5, Oficina 501, 28013 Madrid, España"),
                    ("coordenadas", "40.4168, -3.7038"),
                    ("indicaciones", "Cerca de la Puerta del Sol, metro más cercano: Sol (líneas 1, 2, 3)"),
                ],
            ),
            (
                "oficinas",
                &[
                    ("titulo", "Nuestras Oficinas"),
                    ("oficina1Nombre", "Sede Madrid"),
                    ("oficina1Direccion", "Calle Mayor 123, Madrid"),
                    ("oficina2Nombre", "Sucursal Barcelona"),
                    ("oficina2Direccion", "Passeig de Gràcia 45, Barcelona"),
                    ("imagenes", "oficina-madrid.jpg, oficina-barcelona.jpg"),
                ],
            ),
            (
                "redesSociales",
                &[
                    ("titulo", "Síguenos en Redes Sociales"),
                    ("facebook", "facebook.com/empresapremium"),
                    ("instagram", "@empresapremium"),
                    ("twitter", "@empresapremium"),
                    ("linkedin", "linkedin.com/company/empresapremium"),
                    ("youtube", "youtube.com/@empresapremium"),
                ],
            ),
            (
                "faqContact",
                &[
                    ("pregunta1", "¿Cuál es el tiempo de respuesta?"),
                    ("respuesta1", "Respondemos a todos los mensajes en menos de 24 horas laborables"),
                    ("pregunta2", "¿Hacen reuniones presenciales?"),
                    ("respuesta2", "Sí, ofrecemos reuniones presenciales en nuestras oficinas o en tu empresa"),
                    ("pregunta3", "¿Atienden fuera de horario?"),
                    ("respuesta3", "Para clientes con soporte premium, ofrecemos atención 24/7"),
                ],
            ),
            (
                "atencionCliente",
                &[
                    ("titulo", "Atención al Cliente"),
                    ("descripcion", "Múltiples canales para comunicarte con nosotros"),
                    ("whatsapp", "+34 600 123 456"),
                    ("chatEnLinea", "Disponible en horario de oficina"),
                    ("imagenes", "support.jpg"),
                ],
            ),
            (
                "newsletter",
                &[
                    ("titulo", "Suscríbete a Nuestro Newsletter"),
                    ("descripcion", "Recibe noticias, consejos y ofertas exclusivas"),
                    ("textoCTA", "Suscribirse"),
                    ("imagenes", "newsletter-bg.jpg"),
                ],
            ),
            (
                "ctaContact",
                &[
                    ("titulo", "Trabajemos Juntos"),
                    ("descripcion", "Estamos listos para hacer realidad tu proyecto"),
                    ("textoCTA", "Comenzar Ahora"),
                    ("imagenes", "cta-contact.jpg"),
                ],
            ),
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;

    #[test]
    fn example_fills_every_schema_field() {
        let mut state = ProjectState::default();
        state.load_example();
        let schema = Schema::standard();
        for page in schema.pages() {
            for section in page.sections {
                for field in section.fields {
                    assert!(
                        !state.field(page.id, section.id, field).is_empty(),
                        "{}.{}.{} is empty",
                        page.id,
                        section.id,
                        field
                    );
                }
            }
        }
    }

    #[test]
    fn example_only_uses_schema_names() {
        let schema = Schema::standard();
        for (page, sections) in CONTENT {
            for (section, fields) in *sections {
                for (field, _) in *fields {
                    schema.page(*page).check_field(section, field).unwrap();
                }
            }
        }
    }

    #[test]
    fn example_selects_all_pages_and_three_buttons() {
        let mut state = ProjectState::default();
        state.load_example();
        assert_eq!(state.selected_pages(), &PageId::ALL);
        assert_eq!(
            state.floating_buttons().enabled(),
            vec![Platform::Whatsapp, Platform::Facebook, Platform::Instagram]
        );
        assert_eq!(state.floating_buttons().whatsapp.number, WHATSAPP_NUMBER);
    }

    #[test]
    fn example_replaces_previous_content() {
        let mut state = ProjectState::default();
        state.set_field(PageId::Home, "bogus", "titulo", "stale");
        state.load_example();
        assert!(state.page_content(PageId::Home).section("bogus").is_none());
    }
}
