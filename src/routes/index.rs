use axum::response::IntoResponse;
use strum::VariantArray;
use valaidhalam_contact::{Budget, Service};

use crate::config::SiteConfig;
use crate::template::Template;

pub struct Offering {
    pub title: &'static str,
    pub tag: &'static str,
    pub desc: &'static str,
    pub highlights: [&'static str; 4],
}

pub struct Step {
    pub num: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub deliverables: [&'static str; 4],
}

pub struct Testimonial {
    pub name: &'static str,
    pub text: &'static str,
}

const OFFERINGS: [Offering; 3] = [
    Offering {
        title: "Full-Stack Development",
        tag: "Engineering",
        desc: "From concept to launch, we deliver scalable and secure applications engineered for performance and reliability. Built to handle growth from day one.",
        highlights: ["React / Next.js", "Node.js APIs", "PostgreSQL & MongoDB", "CI/CD Pipelines"],
    },
    Offering {
        title: "Web Applications",
        tag: "Design & Dev",
        desc: "We create intuitive, responsive web applications that captivate users and function flawlessly on any device. Beautiful interfaces backed by solid engineering.",
        highlights: ["UI/UX Design", "Figma Prototyping", "PWA Support", "Performance Audits"],
    },
    Offering {
        title: "Social Media Management",
        tag: "Growth",
        desc: "Our strategic social media management grows your brand's influence and converts followers into loyal customers. Data-driven content that resonates and performs.",
        highlights: ["Content Strategy", "Analytics & Reporting", "Community Growth", "Paid Campaigns"],
    },
];

const STEPS: [Step; 4] = [
    Step {
        num: "01",
        title: "Plan",
        desc: "We deep-dive into your vision, market, and goals to craft a strategic roadmap that aligns all stakeholders from day one.",
        deliverables: ["Discovery Workshop", "Competitor Analysis", "Project Roadmap", "Timeline & Budget"],
    },
    Step {
        num: "02",
        title: "Design",
        desc: "Our designers translate strategy into interfaces: wireframes, prototypes, and pixel-perfect UI that users love.",
        deliverables: ["Wireframes", "UI Design System", "Interactive Prototypes", "Accessibility Review"],
    },
    Step {
        num: "03",
        title: "Develop",
        desc: "Clean code, modern stacks, and rigorous QA. We build robust systems that are maintainable, scalable, and fast.",
        deliverables: ["Frontend Dev", "Backend APIs", "Database Design", "QA & Testing"],
    },
    Step {
        num: "04",
        title: "Launch",
        desc: "From deployment to post-launch support, we ensure a smooth release and iterate on real user data and feedback.",
        deliverables: ["Cloud Deployment", "Performance Tuning", "Analytics Setup", "Ongoing Support"],
    },
];

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Priya Venkat",
        text: "Valaidhalam didn't just build our app, they became a strategic partner. The level of attention to UX and engineering quality exceeded everything we expected.",
    },
    Testimonial {
        name: "Arjun Mehta",
        text: "The team's technical depth is impressive. They took our legacy system and transformed it into a modern, scalable platform in just 3 months.",
    },
    Testimonial {
        name: "Divya Krishnan",
        text: "Our social media growth went from stagnant to explosive within 6 weeks of working with Valaidhalam.",
    },
];

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub site: &'a SiteConfig,
    pub offerings: &'a [Offering],
    pub steps: &'a [Step],
    pub testimonials: &'a [Testimonial],
    pub services: &'a [Service],
    pub budgets: &'a [Budget],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate {
        site: template.site(),
        offerings: &OFFERINGS,
        steps: &STEPS,
        testimonials: &TESTIMONIALS,
        services: Service::VARIANTS,
        budgets: Budget::VARIANTS,
    })
}
