// 👤 Profile - the static "about me" content shared by Home, About, Contact and the footer

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub avatar: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub years_of_experience: String,
    pub resume_url: String,
    pub about: Vec<String>,
    pub education: Vec<TimelineItem>,
    pub experience: Vec<TimelineItem>,
    pub skills: Vec<Skill>,
    pub expertise: Vec<ExpertiseArea>,
    pub social_links: Vec<SocialLink>,
    pub services: Vec<String>,
}

/// One education or job entry
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineItem {
    pub period: String,
    pub title: String,
    pub organization: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub name: String,
    percentage: u8,
}

impl Skill {
    /// Percentages above 100 are clamped
    pub fn new(name: &str, percentage: u8) -> Self {
        Skill {
            name: name.to_string(),
            percentage: percentage.min(100),
        }
    }

    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    /// Fraction for progress widgets, in [0.0, 1.0]
    pub fn ratio(&self) -> f64 {
        f64::from(self.percentage) / 100.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpertiseArea {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn timeline(period: &str, title: &str, organization: &str, details: &[&str]) -> TimelineItem {
    TimelineItem {
        period: period.to_string(),
        title: title.to_string(),
        organization: organization.to_string(),
        details: strings(details),
    }
}

fn area(title: &str, items: &[&str]) -> ExpertiseArea {
    ExpertiseArea {
        title: title.to_string(),
        items: strings(items),
    }
}

impl Profile {
    pub fn sample() -> Self {
        Profile {
            name: "Sajib Bhattacharjee".to_string(),
            headline: "Frontend Web Developer".to_string(),
            avatar: "https://avatars.githubusercontent.com/u/86997775?v=4".to_string(),
            email: "sajib@example.com".to_string(),
            phone: "+1 234 567 8900".to_string(),
            location: "New York, USA".to_string(),
            years_of_experience: "5+".to_string(),
            resume_url: "/resume.pdf".to_string(),
            about: strings(&[
                "Hello! I'm Sajib Bhattacharjee, a passionate Frontend Web Developer with expertise in creating responsive and user-friendly web applications. With a strong foundation in HTML, CSS, and JavaScript, I specialize in modern frameworks like React and Next.js.",
                "My journey in web development began during my university years, where I discovered my passion for creating digital experiences. Since then, I've been continuously expanding my knowledge and skills to stay at the forefront of web technologies.",
                "I believe in writing clean, maintainable code and building applications that not only look great but also provide an exceptional user experience.",
                "When I'm not coding, you can find me exploring new technologies, contributing to open-source projects, or sharing my knowledge through blog posts and tutorials.",
            ]),
            education: vec![
                timeline(
                    "2015 - 2019",
                    "Bachelor of Science in Computer Science",
                    "Massachusetts Institute of Technology (MIT)",
                    &["Graduated with honors. Specialized in Web Development and Software Engineering."],
                ),
                timeline(
                    "2019 - 2021",
                    "Master of Science in Software Engineering",
                    "Stanford University",
                    &["Focus on advanced web technologies and user experience design."],
                ),
                timeline(
                    "2022",
                    "AWS Certified Developer",
                    "Amazon Web Services",
                    &["Professional certification in cloud-based application development and deployment."],
                ),
            ],
            experience: vec![
                timeline(
                    "2021 - Present",
                    "Senior Frontend Developer",
                    "Tech Innovations Inc.",
                    &[
                        "Lead frontend development for major client projects",
                        "Mentor junior developers and oversee code quality",
                        "Implement modern React patterns and best practices",
                        "Collaborate with UX/UI designers and backend teams",
                    ],
                ),
                timeline(
                    "2019 - 2021",
                    "Frontend Developer",
                    "Digital Solutions Agency",
                    &[
                        "Built responsive websites for clients across industries",
                        "Converted design mockups into pixel-perfect interfaces",
                        "Improved page load performance on legacy projects",
                    ],
                ),
            ],
            skills: vec![
                Skill::new("HTML & CSS", 95),
                Skill::new("JavaScript", 90),
                Skill::new("TypeScript", 85),
                Skill::new("React", 92),
                Skill::new("Bootstrap", 90),
                Skill::new("Sass", 90),
                Skill::new("EJS", 90),
                Skill::new("Node.js", 80),
                Skill::new("MongoDB", 85),
                Skill::new("Git & GitHub", 88),
            ],
            expertise: vec![
                area("Frontend", &["HTML5 & CSS3", "JavaScript (ES6+)", "React.js", "Bootstrap", "Sass"]),
                area("UI/UX", &["Figma", "Responsive Design", "Material UI", "Styled Components", "CSS Animations"]),
                area("Tools", &["Git & GitHub", "VS Code", "npm/yarn", "Webpack", "Terminal"]),
                area("Backend", &["Node.js", "Express.js", "EJS", "MongoDB", "Firebase"]),
            ],
            social_links: vec![
                SocialLink { name: "GitHub".to_string(), url: "https://github.com/yourusername".to_string() },
                SocialLink { name: "LinkedIn".to_string(), url: "https://linkedin.com/in/yourusername".to_string() },
                SocialLink { name: "Twitter".to_string(), url: "https://twitter.com/yourusername".to_string() },
                SocialLink { name: "Instagram".to_string(), url: "https://instagram.com/yourusername".to_string() },
            ],
            services: strings(&[
                "Web Development",
                "Mobile App Development",
                "UI/UX Design",
                "Technical Consultation",
                "Code Review",
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_percentage_is_clamped() {
        let skill = Skill::new("Overconfidence", 150);
        assert_eq!(skill.percentage(), 100);
        assert_eq!(skill.ratio(), 1.0);
    }

    #[test]
    fn test_sample_skill_ratios_in_range() {
        for skill in Profile::sample().skills {
            assert!((0.0..=1.0).contains(&skill.ratio()), "{}", skill.name);
        }
    }
}
