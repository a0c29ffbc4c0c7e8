pub struct Education {
    pub school: &'static str,
    pub logo_href: &'static str,
    pub degree: &'static str,
    pub field: &'static str,
    pub timeline: &'static str,
    pub extracurriculars: Vec<&'static str>,
}

pub fn education_items() -> Vec<Education> {
    vec![Education {
        school: "Granite State Institute of Technology",
        logo_href: "/images/granite.png",
        degree: "Bachelors of Engineering",
        field: "Software Engineering",
        timeline: "Aug 2014 - May 2019 ・ Co-op Program",
        extracurriculars: vec![
            "President and co-founder of the Software Engineering Club",
            "Technology director for the campus hackathon",
            "Service fraternity member",
        ],
    }]
}
