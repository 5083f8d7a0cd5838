use web_sys::window;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::calendly::CalendlyEmbed;
use crate::components::cards::{ContactItem, GalleryItem, ServiceCard};
use crate::components::contact_form::ContactForm;
use crate::components::cta_button::CtaButton;
use crate::components::header::SiteHeader;
use crate::components::lazy_image::LazyImage;
use crate::config;
use crate::scroll;

const SERVICES: &[(&str, &str, &str)] = &[
    ("💡", "Consultoría", "Analizamos tu negocio y trazamos un plan claro para crecer."),
    ("🎨", "Diseño", "Identidad visual y experiencias que tus clientes recuerdan."),
    ("⚙️", "Desarrollo", "Sitios y aplicaciones rápidos, seguros y fáciles de mantener."),
];

const GALLERY: &[(&str, &str)] = &[
    ("/assets/gallery-1.jpg", "Proyecto de identidad"),
    ("/assets/gallery-2.jpg", "Tienda en línea"),
    ("/assets/gallery-3.jpg", "Campaña digital"),
    ("/assets/gallery-4.jpg", "Aplicación móvil"),
];

const CONTACT_DETAILS: &[(&str, &str, &str)] = &[
    ("📍", "Dirección", "Calle Mayor 12, Madrid"),
    ("📞", "Teléfono", "+34 600 000 000"),
    ("✉️", "Correo", "hola@estudioaurora.es"),
];

fn append_deferred_scripts(scripts: &[&str]) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Some(head) = document.head() else {
        return;
    };
    for src in scripts {
        let script = match document.create_element("script") {
            Ok(script) => script,
            Err(e) => {
                log::warn!("Could not create script element for {}: {:?}", src, e);
                continue;
            }
        };
        if script.set_attribute("src", src).is_err() || head.append_child(&script).is_err() {
            log::warn!("Could not append deferred script {}", src);
        }
    }
}

fn document_complete() -> bool {
    window()
        .and_then(|w| w.document())
        .map_or(false, |d| d.ready_state() == "complete")
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Runs once on mount
    use_effect_with_deps(
        move |_| {
            if document_complete() {
                append_deferred_scripts(config::DEFERRED_SCRIPTS);
            }
            log::info!("UI initialized");
            || ()
        },
        (),
    );

    // Scripts wait for the window load event when the page is still loading
    use_event_with_window("load", move |_: Event| {
        append_deferred_scripts(config::DEFERRED_SCRIPTS);
    });

    let scroll_to = |fragment: &'static str| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll::scroll_to_section(fragment);
        })
    };

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    * { box-sizing: border-box; }
                    body {
                        margin: 0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: #2c3e50;
                    }
                    .header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 1000;
                        backdrop-filter: blur(10px);
                        transition: transform 0.3s ease, background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .nav-container {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #2c3e50;
                        text-decoration: none;
                    }
                    .nav-menu {
                        display: flex;
                        gap: 2rem;
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .nav-link {
                        color: #2c3e50;
                        text-decoration: none;
                        font-weight: 500;
                        transition: color 0.3s ease;
                    }
                    .nav-link.active, .nav-link:hover {
                        color: #2196F3;
                    }
                    .nav-toggle {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .nav-toggle .bar {
                        width: 25px;
                        height: 3px;
                        background: #2c3e50;
                        transition: all 0.3s ease;
                    }
                    .nav-toggle.active .bar:nth-child(1) { transform: translateY(7px) rotate(45deg); }
                    .nav-toggle.active .bar:nth-child(2) { opacity: 0; }
                    .nav-toggle.active .bar:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
                    section {
                        padding: 6rem 2rem;
                    }
                    .section-inner {
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        background: linear-gradient(135deg, #e3f2fd, #ffffff);
                    }
                    .btn {
                        display: inline-block;
                        padding: 0.9rem 2rem;
                        border-radius: 30px;
                        border: none;
                        cursor: pointer;
                        font-size: 1rem;
                        text-decoration: none;
                    }
                    .btn-primary { background: #2196F3; color: white; }
                    .btn-primary:disabled { opacity: 0.6; cursor: not-allowed; }
                    .btn-secondary { background: transparent; color: #2196F3; border: 2px solid #2196F3; }
                    .hero-buttons { display: flex; gap: 1rem; margin-top: 2rem; }
                    .services-grid, .gallery-grid, .contact-grid {
                        display: grid;
                        gap: 2rem;
                        grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
                    }
                    .service-card {
                        padding: 2rem;
                        border-radius: 12px;
                        background: white;
                        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.08);
                        transition: transform 0.3s ease;
                    }
                    .service-icon { font-size: 2.5rem; }
                    .gallery-item { cursor: pointer; overflow: hidden; border-radius: 12px; }
                    .gallery-item img, .about-image img { width: 100%; display: block; }
                    .about-photo { border-radius: 12px; box-shadow: 0 4px 20px rgba(0, 0, 0, 0.08); }
                    .gallery-caption { padding: 0.75rem 0; font-weight: 500; }
                    .contact-item { display: flex; gap: 1rem; align-items: flex-start; }
                    .contact-icon { font-size: 1.5rem; }
                    .contact-form { display: flex; flex-direction: column; gap: 1rem; }
                    .contact-form input, .contact-form select, .contact-form textarea {
                        width: 100%;
                        padding: 0.8rem;
                        border: 1px solid #d0d7de;
                        border-radius: 8px;
                        font: inherit;
                    }
                    .calendly-placeholder {
                        padding: 3rem;
                        text-align: center;
                        border: 2px dashed #d0d7de;
                        border-radius: 12px;
                    }
                    .lazy { opacity: 0; transition: opacity 0.3s ease; }
                    @keyframes fadeInUp {
                        from { opacity: 0; transform: translateY(30px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .fade-in-up { animation: fadeInUp 0.6s ease-out forwards; }
                    .footer { text-align: center; padding: 2rem; background: #2c3e50; color: white; }
                    @media (max-width: 768px) {
                        .nav-toggle { display: flex; }
                        .nav-menu {
                            position: fixed;
                            top: 70px;
                            left: -100%;
                            width: 100%;
                            height: calc(100vh - 70px);
                            flex-direction: column;
                            align-items: center;
                            padding-top: 2rem;
                            background: white;
                            transition: left 0.3s ease;
                        }
                        .nav-menu.active { left: 0; }
                        .hero-buttons { flex-direction: column; }
                    }
                "#}
            </style>
            <SiteHeader />

            <section id="inicio" class="hero">
                <h1>{ config::SITE_NAME }</h1>
                <p class="hero-subtitle">{"Estrategia, diseño y tecnología para hacer crecer tu negocio."}</p>
                <div class="hero-buttons">
                    <CtaButton label="Contáctanos" href="#contacto" class="btn-primary" onclick={scroll_to("#contacto")} />
                    <CtaButton label="Ver servicios" class="btn-secondary" onclick={scroll_to("#servicios")} />
                </div>
            </section>

            <section id="servicios" class="services">
                <div class="section-inner">
                    <h2>{"Servicios"}</h2>
                    <div class="services-grid">
                        { for SERVICES.iter().map(|(icon, title, description)| html! {
                            <ServiceCard icon={*icon} title={*title} description={*description} />
                        }) }
                    </div>
                </div>
            </section>

            <section id="galeria" class="gallery">
                <div class="section-inner">
                    <h2>{"Galería"}</h2>
                    <div class="gallery-grid">
                        { for GALLERY.iter().map(|(image, caption)| html! {
                            <GalleryItem image={*image} caption={*caption} />
                        }) }
                    </div>
                </div>
            </section>

            <section id="nosotros" class="about">
                <div class="section-inner">
                    <h2>{"Nosotros"}</h2>
                    <p>{"Somos un equipo pequeño que trabaja de cerca con cada cliente, desde la primera idea hasta el lanzamiento."}</p>
                    <div class="about-image">
                        <LazyImage src="/assets/team.jpg" alt="Nuestro equipo" class="about-photo" />
                    </div>
                </div>
            </section>

            <section id="agenda" class="schedule">
                <div class="section-inner">
                    <CalendlyEmbed />
                </div>
            </section>

            <section id="contacto" class="contact">
                <div class="section-inner">
                    <h2>{"Contacto"}</h2>
                    <div class="contact-grid">
                        <div class="contact-info">
                            { for CONTACT_DETAILS.iter().map(|(icon, label, value)| html! {
                                <ContactItem icon={*icon} label={*label} value={*value} />
                            }) }
                        </div>
                        <ContactForm />
                    </div>
                </div>
            </section>

            <footer class="footer">
                <p>{ format!("© {}. Todos los derechos reservados.", config::SITE_NAME) }</p>
            </footer>
        </div>
    }
}
