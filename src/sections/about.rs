use yew::prelude::*;

use crate::components::particles::{Drift, Particles};
use crate::components::reveal::{Entrance, Reveal};
use crate::components::section_heading::SectionHeading;
use crate::motion::hooks::use_scroll_progress;
use crate::motion::scroll::ScrollWindow;
use crate::motion::timeline::{interpolate, Easing, Stagger, Transition};

struct Stat {
    number: &'static str,
    label: &'static str,
}

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const STATS: &[Stat] = &[
    Stat { number: "10K+", label: "Artworks" },
    Stat { number: "5K+", label: "Artists" },
    Stat { number: "120K+", label: "Community" },
];

const FEATURES: &[Feature] = &[
    Feature {
        icon: "🛡️",
        title: "Security First",
        description: "Advanced encryption and secure wallet integration for safe transactions",
    },
    Feature {
        icon: "🎨",
        title: "Artist Support",
        description: "Dedicated tools and resources to help artists thrive in the NFT space",
    },
    Feature {
        icon: "🤝",
        title: "Community Driven",
        description: "Strong focus on building and nurturing our creative community",
    },
];

/// Image drift, px, across the section's pass through the viewport.
pub fn parallax_offset(progress: f64) -> f64 {
    interpolate(progress, &[0.0, 1.0], &[-100.0, 100.0])
}

/// Decoration fades in toward the middle of the pass and out again.
pub fn parallax_opacity(progress: f64) -> f64 {
    interpolate(progress, &[0.0, 0.5, 1.0], &[0.0, 1.0, 0.0])
}

#[function_component(About)]
pub fn about() -> Html {
    let section = use_node_ref();
    let window = use_memo(
        |_| ScrollWindow::from_offsets("start end", "end start", ScrollWindow::ENTER_TO_EXIT),
        (),
    );
    let progress = use_scroll_progress(section.clone(), *window, None);

    let stats = Stagger::new(0.0, 0.2);
    let features = Stagger::new(0.0, 0.2);

    html! {
        <section class="about" id="about" ref={section}>
            <style>
                {r#"
                    .about {
                        position: relative;
                        padding: 5rem 1rem;
                        background: #05171a;
                        overflow: hidden;
                    }
                    .about-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .about-lead {
                        color: rgba(165, 247, 255, 0.8);
                        font-size: 1.25rem;
                        max-width: 42rem;
                        margin: -2rem auto 5rem;
                        text-align: center;
                    }
                    .about-stats {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        margin-bottom: 5rem;
                    }
                    .outlined-card {
                        position: relative;
                        border: 1px solid #72d2f54f;
                        border-radius: 1rem;
                        background: #05171a;
                    }
                    .about-stat {
                        padding: 2rem;
                        text-align: center;
                    }
                    .about-stat h3 {
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: #72d3f5;
                        margin-bottom: 0.5rem;
                    }
                    .about-stat p, .about-feature p {
                        color: rgba(165, 247, 255, 0.7);
                    }
                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .about-copy {
                        color: rgba(165, 247, 255, 0.8);
                        font-size: 1.125rem;
                        line-height: 1.75;
                        margin-bottom: 2rem;
                    }
                    .about-feature {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        padding: 1.5rem;
                        margin-bottom: 1rem;
                    }
                    .about-feature .icon { font-size: 1.5rem; }
                    .about-feature h3 {
                        color: #72d3f5;
                        font-weight: 600;
                        margin-bottom: 0.25rem;
                    }
                    .about-feature p { font-size: 0.875rem; }
                    .about-image {
                        position: relative;
                        height: 500px;
                        margin: 1rem;
                        border-radius: 0.75rem;
                        overflow: hidden;
                    }
                    .about-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .about-image .drift {
                        position: absolute;
                        inset: 0;
                        will-change: transform, opacity;
                    }
                    @media (max-width: 768px) {
                        .about-stats, .about-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="about-inner">
                <Reveal entrance={Entrance::Down(20.0)}>
                    <SectionHeading title="About us" />
                    <Reveal entrance={Entrance::Up(20.0)} transition={Transition::default().delayed(0.2)}>
                        <p class="about-lead">
                            {"We are revolutionizing the digital art space through blockchain technology and community-driven innovation."}
                        </p>
                    </Reveal>
                </Reveal>

                <div class="about-stats">
                    { for STATS.iter().enumerate().map(|(index, stat)| html! {
                        <Reveal
                            class="outlined-card about-stat"
                            entrance={Entrance::Up(50.0)}
                            transition={stats.apply(index, Transition::default())}
                        >
                            <Reveal
                                entrance={Entrance::Scale(0.0)}
                                transition={Transition::new(0.5, Easing::Spring { stiffness: 300.0 })}
                            >
                                <h3>{ stat.number }</h3>
                            </Reveal>
                            <p>{ stat.label }</p>
                        </Reveal>
                    }) }
                </div>

                <div class="about-grid">
                    <Reveal entrance={Entrance::Left(50.0)}>
                        <Reveal entrance={Entrance::Fade} transition={Transition::default().delayed(0.3)}>
                            <p class="about-copy">
                                {"We are a cutting-edge NFT platform dedicated to bringing unique digital art to collectors worldwide. Our mission is to connect artists and collectors in a seamless, secure environment."}
                            </p>
                        </Reveal>
                        { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                            <Reveal
                                class="outlined-card about-feature"
                                entrance={Entrance::Left(50.0)}
                                transition={features.apply(index, Transition::default())}
                            >
                                <span class="icon">{ feature.icon }</span>
                                <div>
                                    <h3>{ feature.title }</h3>
                                    <p>{ feature.description }</p>
                                </div>
                            </Reveal>
                        }) }
                    </Reveal>

                    <Reveal entrance={Entrance::Scale(0.8)} transition={Transition::new(0.8, Easing::EaseOut)}>
                        <div class="about-image">
                            <img src="/image/about.jpg" alt="About Us" loading="lazy" />
                            <div
                                class="drift"
                                style={format!(
                                    "transform: translateY({:.1}px); opacity: {:.3};",
                                    parallax_offset(progress),
                                    parallax_opacity(progress)
                                )}
                            >
                                <Particles count={8} motion={Drift::WANDER} class="particle-dot" />
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallax_spans_the_pass() {
        assert_eq!(parallax_offset(0.0), -100.0);
        assert_eq!(parallax_offset(0.5), 0.0);
        assert_eq!(parallax_offset(1.0), 100.0);
    }

    #[test]
    fn decoration_peaks_mid_pass() {
        assert_eq!(parallax_opacity(0.0), 0.0);
        assert_eq!(parallax_opacity(0.5), 1.0);
        assert_eq!(parallax_opacity(1.0), 0.0);
    }
}
