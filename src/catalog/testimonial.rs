// 💬 Testimonial Entity (home page carousel)

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub position: String,
    pub company: String,
    pub text: String,
    pub image: String,
}

fn testimonial(id: u32, name: &str, position: &str, company: &str, text: &str, image: &str) -> Testimonial {
    Testimonial {
        id,
        name: name.to_string(),
        position: position.to_string(),
        company: company.to_string(),
        text: text.to_string(),
        image: image.to_string(),
    }
}

pub fn sample_testimonials() -> Vec<Testimonial> {
    vec![
        testimonial(
            1,
            "John Smith",
            "CEO",
            "TechStart Inc.",
            "Working with Sajib was a fantastic experience. He delivered our project on time and exceeded our expectations. His attention to detail and problem-solving skills are impressive.",
            "https://randomuser.me/api/portraits/men/32.jpg",
        ),
        testimonial(
            2,
            "Sarah Johnson",
            "Marketing Director",
            "Creative Solutions",
            "Sajib is an exceptional developer who truly understands both the technical and design aspects of web development. He transformed our outdated website into a modern, responsive platform.",
            "https://randomuser.me/api/portraits/women/44.jpg",
        ),
        testimonial(
            3,
            "Michael Chen",
            "Product Manager",
            "Innovate Labs",
            "I've worked with many developers, but Sajib stands out for his communication skills and ability to translate complex requirements into elegant solutions. Highly recommended!",
            "https://randomuser.me/api/portraits/men/67.jpg",
        ),
        testimonial(
            4,
            "Emily Rodriguez",
            "Founder",
            "StyleShop",
            "Sajib helped us build our e-commerce platform from scratch. His expertise in React and attention to performance optimization resulted in a fast, user-friendly site that has significantly increased our conversions.",
            "https://randomuser.me/api/portraits/women/17.jpg",
        ),
    ]
}
