use axum::response::IntoResponse;
use exon_contact::FormStatus;

use crate::template::Template;

pub struct Company {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
}

pub static COMPANIES: [Company; 3] = [
    Company {
        name: "Mandarin 3D Prints",
        description: "Advanced 3D Printing Solutions",
        icon: "cube",
        accent: "#0d939b",
    },
    Company {
        name: "AppliedTrack",
        description: "Enterprise Software Platform",
        icon: "terminal",
        accent: "#eab308",
    },
    Company {
        name: "NextDev.fm",
        description: "Developer Insights Podcast",
        icon: "radio",
        accent: "#4ade80",
    },
];

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub companies: &'static [Company],
    pub submit_label: &'static str,
    pub sent_label: &'static str,
    pub year: i32,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate {
        companies: &COMPANIES,
        submit_label: FormStatus::Idle.button_label(),
        sent_label: FormStatus::Success.button_label(),
        year: template.year,
    })
}
