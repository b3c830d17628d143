use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::captions::CAPTIONS;
use crate::components::contact::ContactForm;
use crate::components::gallery::Gallery;
use crate::components::notification::Notifier;
use crate::components::reveal::use_reveal_on_scroll;
use crate::dom;

const REVEAL_CSS: &str = r#"
    .animate-in {
        opacity: 1;
        transform: translateY(0);
        transition: all 0.6s ease;
    }

    section:not(.animate-in) {
        opacity: 0;
        transform: translateY(30px);
    }

    .navbar {
        transition: transform 0.3s ease, background 0.3s ease;
    }

    .navbar.scrolled {
        background: rgba(15, 15, 35, 0.98);
        backdrop-filter: blur(15px);
    }
"#;

struct Show {
    title: &'static str,
    when: &'static str,
    blurb: &'static str,
}

static SHOWS: [Show; 3] = [
    Show {
        title: "Monthly Showcase",
        when: "First Friday, 8pm",
        blurb: "Our full cast, your suggestions, zero scripts.",
    },
    Show {
        title: "Jam Night",
        when: "Every Wednesday, 7:30pm",
        blurb: "Open stage for anyone who has taken a class or wants to try.",
    },
    Show {
        title: "Beginner Workshop",
        when: "Saturdays, 11am",
        blurb: "Six weeks of games, scenes and saying yes.",
    },
];

static TEAM: [(&str, &str); 4] = [
    ("Layla", "Artistic Director"),
    ("Omar", "Head Coach"),
    ("Priya", "Performer"),
    ("Daniel", "Musical Improv"),
];

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub notifier: Option<Notifier>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    use_reveal_on_scroll();

    let to_contact = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Err(e) = dom::scroll_to_section("contact") {
            debug!("hero call to action: {}", e);
        }
    });

    html! {
        <main>
            <style>{REVEAL_CSS}</style>

            <section id="home" class="hero">
                <div class="hero-content">
                    <h1 class="hero-title">{"IMPROV.AE"}</h1>
                    <p class="hero-subtitle">{"Unscripted comedy, made up on the spot, every week."}</p>
                    <a href="#contact" class="hero-cta" onclick={to_contact}>{"Get in touch"}</a>
                </div>
            </section>

            <section id="about" class="about">
                <h2 class="section-title">{"About Us"}</h2>
                <p>
                    {"We are a community of improvisers who believe anyone can be funny with the right scene partner. \
                      We perform, we teach, and we keep the stage open for newcomers."}
                </p>
            </section>

            <section id="shows" class="shows">
                <h2 class="section-title">{"Upcoming Shows"}</h2>
                <div class="shows-grid">
                    { for SHOWS.iter().map(|show| html! {
                        <div class="show-card">
                            <h3>{show.title}</h3>
                            <p class="show-when">{show.when}</p>
                            <p>{show.blurb}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="team" class="team">
                <h2 class="section-title">{"The Team"}</h2>
                <div class="team-grid">
                    { for TEAM.iter().map(|(name, role)| html! {
                        <div class="team-member">
                            <div class="member-avatar">{&name[..1]}</div>
                            <h3>{*name}</h3>
                            <p>{*role}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="gallery" class="gallery">
                <h2 class="section-title">{"Gallery"}</h2>
                <Gallery captions={CAPTIONS.as_slice()} />
            </section>

            <section id="contact" class="contact">
                <h2 class="section-title">{"Contact"}</h2>
                <p>{"Booking a private show, joining a workshop, or just saying hi."}</p>
                <ContactForm notifier={props.notifier.clone()} />
            </section>
        </main>
    }
}
