//! Built-in catalogs used when no catalog files are configured.

use crate::domain::model::{JobPosting, LearningProgress, LearningResource, Skill, UserProfile};

/// Target roles offered for analysis, in display order.
pub const TARGET_ROLES: [&str; 15] = [
    "Full Stack Developer",
    "Frontend Developer",
    "Backend Developer",
    "DevOps Engineer",
    "Data Scientist",
    "Machine Learning Engineer",
    "Cloud Architect",
    "Mobile App Developer",
    "UI/UX Designer",
    "Product Manager",
    "Software Architect",
    "Blockchain Developer",
    "Security Engineer",
    "QA Engineer",
    "Technical Lead",
];

fn skill(name: &str, proficiency: u8, category: &str) -> Skill {
    Skill {
        name: name.to_string(),
        proficiency,
        category: category.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn sample_profile() -> UserProfile {
    UserProfile {
        name: "John Doe".to_string(),
        current_role: "Frontend Developer".to_string(),
        skills: vec![
            skill("React", 80, "Frontend"),
            skill("TypeScript", 75, "Programming"),
            skill("Node.js", 60, "Backend"),
            skill("Python", 50, "Programming"),
        ],
        target_role: Some("Full Stack Developer".to_string()),
        learning_progress: LearningProgress {
            completed_courses: strings(&["React Fundamentals", "TypeScript Basics"]),
            in_progress_courses: strings(&["Node.js Advanced", "Python for Web Development"]),
        },
    }
}

pub fn sample_jobs() -> Vec<JobPosting> {
    vec![
        JobPosting {
            title: "Senior Full Stack Developer".to_string(),
            company: "TechCorp".to_string(),
            location: "Remote".to_string(),
            required_skills: strings(&["React", "Node.js", "TypeScript", "AWS", "MongoDB"]),
            description: "We are looking for a Senior Full Stack Developer to join our growing team. \
                The ideal candidate will have strong experience with modern web technologies and cloud platforms."
                .to_string(),
            match_score: 85,
        },
        JobPosting {
            title: "Frontend Developer".to_string(),
            company: "DesignStudio".to_string(),
            location: "Karachi, Pakistan".to_string(),
            required_skills: strings(&["React", "TypeScript", "CSS", "UI/UX"]),
            description: "Join our creative team as a Frontend Developer. \
                Focus on building beautiful and responsive user interfaces for our clients."
                .to_string(),
            match_score: 90,
        },
        JobPosting {
            title: "Backend Developer".to_string(),
            company: "DataSys".to_string(),
            location: "Lahore, Pakistan".to_string(),
            required_skills: strings(&["Node.js", "Python", "MongoDB", "Docker"]),
            description: "Looking for a Backend Developer to help build scalable microservices and APIs."
                .to_string(),
            match_score: 75,
        },
    ]
}

pub fn sample_resources() -> Vec<LearningResource> {
    vec![
        LearningResource {
            title: "Advanced React Patterns".to_string(),
            provider: "Frontend Masters".to_string(),
            duration: "6 hours".to_string(),
            difficulty: "Advanced".to_string(),
            url: "https://frontendmasters.com/courses/advanced-react-patterns/".to_string(),
            skills_covered: strings(&["React", "Design Patterns", "Performance Optimization"]),
        },
        LearningResource {
            title: "Node.js Microservices".to_string(),
            provider: "Udemy".to_string(),
            duration: "12 hours".to_string(),
            difficulty: "Intermediate".to_string(),
            url: "https://www.udemy.com/course/nodejs-microservices/".to_string(),
            skills_covered: strings(&["Node.js", "Microservices", "Docker"]),
        },
        LearningResource {
            title: "Full Stack Cloud Development".to_string(),
            provider: "Coursera".to_string(),
            duration: "3 months".to_string(),
            difficulty: "Intermediate".to_string(),
            url: "https://www.coursera.org/learn/cloud-development".to_string(),
            skills_covered: strings(&["AWS", "Cloud Architecture", "DevOps"]),
        },
    ]
}
