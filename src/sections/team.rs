use yew::prelude::*;

use crate::components::reveal::{Entrance, Reveal};
use crate::components::section_heading::SectionHeading;
use crate::motion::hooks::use_spotlight;
use crate::motion::reveal::ViewportOptions;
use crate::motion::timeline::{Easing, Stagger, Transition};

#[derive(Clone, PartialEq)]
pub struct Member {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
}

const TEAM: &[Member] = &[
    Member { name: "John Doe", role: "Founder & CEO", image: "/image/logo.png" },
    Member { name: "Jane Smith", role: "Creative Director", image: "/image/logo.png" },
    Member { name: "Mike Johnson", role: "Lead Developer", image: "/image/logo.png" },
];

const CARDS: Stagger = Stagger::new(0.0, 0.2);

#[derive(Properties, PartialEq)]
struct TeamCardProps {
    member: Member,
    index: usize,
}

#[function_component(TeamCard)]
fn team_card(props: &TeamCardProps) -> Html {
    let card = use_node_ref();
    use_spotlight(card.clone());

    let member = &props.member;
    let transition = CARDS.apply(
        props.index,
        Transition::new(0.6, Easing::Spring { stiffness: 100.0 }),
    );

    html! {
        <Reveal
            class="team-card-wrapper"
            entrance={Entrance::Up(50.0)}
            transition={transition}
            viewport={ViewportOptions::inset("-100px")}
        >
            <div ref={card} class="team-card spotlight-host">
                <div class="avatar">
                    <img src={member.image} alt="Avatar" loading="lazy" />
                </div>
                <h3>{ member.name }</h3>
                <p>{ member.role }</p>
                <div class="spotlight"></div>
            </div>
        </Reveal>
    }
}

#[function_component(Team)]
pub fn team() -> Html {
    html! {
        <section class="team" id="team">
            <style>
                {r#"
                    .team {
                        position: relative;
                        padding: 5rem 1rem;
                        background: #05171a;
                        overflow: hidden;
                    }
                    .team-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .team-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2.5rem;
                        padding: 0 1rem;
                    }
                    .team-card {
                        position: relative;
                        padding: 2rem;
                        text-align: center;
                        overflow: hidden;
                        background: rgba(0, 0, 0, 0.05);
                        backdrop-filter: blur(16px);
                        border: 2px solid #72d2f513;
                        border-radius: 0.5rem 2rem 2rem 2rem;
                    }
                    .team-card .avatar {
                        position: relative;
                        width: 9rem;
                        height: 9rem;
                        margin: 0 auto 1.5rem;
                        border-radius: 50%;
                        overflow: hidden;
                        background: linear-gradient(to bottom right, rgba(114, 211, 245, 0.3), rgba(165, 247, 255, 0.3));
                    }
                    .team-card .avatar img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s;
                    }
                    .team-card .avatar img:hover { transform: scale(1.1); }
                    .team-card h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #fff;
                        margin-bottom: 0.75rem;
                        transition: transform 0.2s;
                    }
                    .team-card h3:hover { transform: scale(1.05); }
                    .team-card p {
                        color: #a5f7ff;
                        font-size: 1.125rem;
                        opacity: 0.7;
                        transition: opacity 0.2s;
                    }
                    .team-card p:hover { opacity: 1; }
                    .team-card .spotlight {
                        background: radial-gradient(circle at var(--mouse-x) var(--mouse-y), rgba(114, 211, 245, 0.15) 0%, transparent 50%);
                    }
                    @media (max-width: 900px) {
                        .team-grid { grid-template-columns: repeat(2, 1fr); gap: 1.5rem; }
                    }
                    @media (max-width: 640px) {
                        .team-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="team-inner">
                <SectionHeading title="Meet the team" />
                <div class="team-grid">
                    { for TEAM.iter().enumerate().map(|(index, member)| html! {
                        <TeamCard member={member.clone()} {index} />
                    }) }
                </div>
            </div>
        </section>
    }
}
