pub struct Experience {
    pub company_name: &'static str,
    pub logo_href: &'static str,
    pub roles: Vec<ExperienceRole>,
}

pub struct ExperienceRole {
    pub title: &'static str,
    pub department: &'static str,
    pub timeline: &'static str,
    pub details: Vec<&'static str>,
}

pub fn experience_items() -> Vec<Experience> {
    vec![
        Experience {
            company_name: "Meridian Robotics",
            logo_href: "/images/meridian.png",
            roles: vec![
                ExperienceRole {
                    title: "Senior Software Engineer II",
                    department: "Fleet Platform",
                    timeline: "June 2022 - Present",
                    details: vec![
                        "Led development of the fleet-operations web application used to schedule, monitor, and service a growing fleet of warehouse robots.",
                    ],
                },
                ExperienceRole {
                    title: "Senior Software Engineer I",
                    department: "Fleet Platform",
                    timeline: "October 2020 - June 2022",
                    details: vec![
                        "Led front-end development for a tier 1 web application and shipped large features that improved operator response time.",
                        "Architected a constraint-based design system with shared components and platform-agnostic design tokens.",
                        "Published internal packages and a template repository that spread uniform patterns across six application teams.",
                    ],
                },
            ],
        },
        Experience {
            company_name: "Harbor Health",
            logo_href: "/images/harbor.png",
            roles: vec![ExperienceRole {
                title: "Senior Software Engineer",
                department: "Consumer Web",
                timeline: "October 2020 - June 2022 ・ Freelance",
                details: vec![
                    "Integrated payment processing to enable ACH debits and card payments in the patient portal.",
                    "Migrated the codebase to a strictly typed stack to reduce defects and improve maintainability.",
                    "Consulted on technical design choices and implemented key features end to end.",
                ],
            }],
        },
        Experience {
            company_name: "Lakeshore Labs",
            logo_href: "/images/lakeshore.png",
            roles: vec![ExperienceRole {
                title: "Software Engineer III",
                department: "Retail Research",
                timeline: "March 2018 - October 2020",
                details: vec![
                    "Implemented, tested, and maintained microservices and web applications for an in-store research lab.",
                    "Built a comprehensive design system that raised the velocity of every front-end engineer in the lab.",
                    "Developed a service converting real-time RTSP video to HLS with only a few seconds of delay.",
                ],
            }],
        },
    ]
}
