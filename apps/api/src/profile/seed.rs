use crate::models::profile::{Education, ExperienceEntry, UserProfile};

/// The profile a fresh session starts with.
pub fn initial_profile() -> UserProfile {
    UserProfile {
        name: "Alex Johnson".to_string(),
        email: "alex.johnson@email.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        location: "San Francisco, CA".to_string(),
        bio: "Passionate frontend developer with 5+ years of experience building modern web applications. I love creating intuitive user interfaces and working with cutting-edge technologies.".to_string(),
        avatar: String::new(),
        title: "Senior Frontend Developer".to_string(),
        experience: "5+ years".to_string(),
        skills: ["React", "TypeScript", "JavaScript", "CSS", "Node.js", "Git", "Figma", "Python"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        education: vec![
            Education {
                degree: "Bachelor of Science in Computer Science".to_string(),
                school: "University of California, Berkeley".to_string(),
                year: "2018".to_string(),
            },
            Education {
                degree: "Full Stack Web Development Bootcamp".to_string(),
                school: "General Assembly".to_string(),
                year: "2019".to_string(),
            },
        ],
        experience_details: vec![
            ExperienceEntry {
                title: "Senior Frontend Developer".to_string(),
                company: "TechCorp Solutions".to_string(),
                duration: "2022 - Present".to_string(),
                description: "Lead frontend development for multiple projects using React and TypeScript. Mentored junior developers and established coding standards.".to_string(),
            },
            ExperienceEntry {
                title: "Frontend Developer".to_string(),
                company: "StartupXYZ".to_string(),
                duration: "2020 - 2022".to_string(),
                description: "Built responsive web applications and collaborated with design team to implement user interfaces. Improved application performance by 40%.".to_string(),
            },
            ExperienceEntry {
                title: "Junior Developer".to_string(),
                company: "WebDev Inc".to_string(),
                duration: "2019 - 2020".to_string(),
                description: "Developed and maintained websites using HTML, CSS, and JavaScript. Worked on various client projects and learned modern development practices.".to_string(),
            },
        ],
    }
}
