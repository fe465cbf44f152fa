//! Static site content and the pure display logic that operates on it.
//!
//! Everything here is a compile-time literal rendered directly by the
//! components in `app/`. Nothing is mutated after module load.

/// Skill grouping used by the category filter chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Programming,
    Frontend,
    Backend,
    Tools,
    DevOps,
    Core,
    Soft,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Programming,
        Category::Frontend,
        Category::Backend,
        Category::Tools,
        Category::DevOps,
        Category::Core,
        Category::Soft,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Programming => "Programming Languages",
            Category::Frontend => "Frontend",
            Category::Backend => "Backend",
            Category::Tools => "Tools & Platforms",
            Category::DevOps => "DevOps & Cloud",
            Category::Core => "Core Concepts",
            Category::Soft => "Soft Skills",
        }
    }

    pub fn accent_class(&self) -> &'static str {
        match self {
            Category::Programming => "text-primary",
            Category::Frontend => "text-blue",
            Category::Backend => "text-purple",
            Category::Tools => "text-orange",
            Category::DevOps => "text-green",
            Category::Core => "text-brightPurple",
            Category::Soft => "text-pink",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Expert,
    Advanced,
    Intermediate,
    Beginner,
}

impl Level {
    pub fn label(&self) -> &'static str {
        match self {
            Level::Expert => "Expert",
            Level::Advanced => "Advanced",
            Level::Intermediate => "Intermediate",
            Level::Beginner => "Beginner",
        }
    }

    pub fn accent_class(&self) -> &'static str {
        match self {
            Level::Expert => "text-primary",
            Level::Advanced => "text-blue",
            Level::Intermediate => "text-orange",
            Level::Beginner => "text-purple",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub category: Category,
    pub level: Level,
    pub description: &'static str,
    /// Icon served from the devicon CDN. Skills without a devicon entry
    /// fall back to the category glyph at render time.
    pub icon_url: Option<&'static str>,
    pub experience: Option<&'static str>,
    pub projects: Option<u32>,
}

macro_rules! devicon {
    ($name:literal, $variant:literal) => {
        Some(concat!(
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/",
            $name,
            "/",
            $name,
            "-",
            $variant,
            ".svg"
        ))
    };
}

pub static SKILLS: &[Skill] = &[
    // Programming languages
    Skill {
        name: "JavaScript",
        category: Category::Programming,
        level: Level::Intermediate,
        description: "Modern ES6+, DOM manipulation, async programming, functional programming",
        icon_url: devicon!("javascript", "original"),
        experience: None,
        projects: Some(15),
    },
    Skill {
        name: "TypeScript",
        category: Category::Programming,
        level: Level::Intermediate,
        description: "Type safety, interfaces, generics, advanced patterns",
        icon_url: devicon!("typescript", "original"),
        experience: None,
        projects: Some(12),
    },
    Skill {
        name: "Python",
        category: Category::Programming,
        level: Level::Intermediate,
        description: "Data structures, algorithms, web frameworks, automation",
        icon_url: devicon!("python", "original"),
        experience: None,
        projects: Some(10),
    },
    Skill {
        name: "HTML",
        category: Category::Programming,
        level: Level::Intermediate,
        description: "Semantic markup, accessibility, SEO optimization, modern standards",
        icon_url: devicon!("html5", "original"),
        experience: None,
        projects: Some(20),
    },
    Skill {
        name: "CSS",
        category: Category::Programming,
        level: Level::Intermediate,
        description: "Modern layouts, animations, responsive design, CSS Grid/Flexbox",
        icon_url: devicon!("css3", "original"),
        experience: None,
        projects: Some(20),
    },
    Skill {
        name: "SQL",
        category: Category::Programming,
        level: Level::Intermediate,
        description: "Database queries, optimization, design, stored procedures",
        icon_url: devicon!("mysql", "original"),
        experience: None,
        projects: Some(12),
    },
    // Frontend
    Skill {
        name: "React",
        category: Category::Frontend,
        level: Level::Intermediate,
        description: "Hooks, Context API, performance optimization, testing",
        icon_url: devicon!("react", "original"),
        experience: None,
        projects: Some(18),
    },
    Skill {
        name: "Tailwind CSS",
        category: Category::Frontend,
        level: Level::Intermediate,
        description: "Utility-first CSS, custom components, responsive design",
        icon_url: devicon!("tailwindcss", "plain"),
        experience: None,
        projects: Some(15),
    },
    // Backend
    Skill {
        name: "Node.js",
        category: Category::Backend,
        level: Level::Intermediate,
        description: "Express.js, REST APIs, middleware, authentication",
        icon_url: devicon!("nodejs", "original"),
        experience: None,
        projects: Some(12),
    },
    Skill {
        name: "Express.js",
        category: Category::Backend,
        level: Level::Intermediate,
        description: "Web framework, routing, middleware, error handling",
        icon_url: devicon!("express", "original"),
        experience: None,
        projects: Some(12),
    },
    Skill {
        name: "MongoDB",
        category: Category::Backend,
        level: Level::Intermediate,
        description: "NoSQL database, aggregation, indexing, optimization",
        icon_url: devicon!("mongodb", "original"),
        experience: None,
        projects: Some(8),
    },
    // Tools & platforms
    Skill {
        name: "Git",
        category: Category::Tools,
        level: Level::Intermediate,
        description: "Version control, branching strategies, collaboration, CI/CD",
        icon_url: devicon!("git", "original"),
        experience: None,
        projects: Some(25),
    },
    Skill {
        name: "GitHub",
        category: Category::Tools,
        level: Level::Intermediate,
        description: "Repository management, CI/CD, project collaboration, Actions",
        icon_url: devicon!("github", "original"),
        experience: None,
        projects: Some(25),
    },
    Skill {
        name: "VS Code",
        category: Category::Tools,
        level: Level::Intermediate,
        description: "Extensions, debugging, productivity optimization, customization",
        icon_url: devicon!("vscode", "original"),
        experience: None,
        projects: Some(25),
    },
    Skill {
        name: "Figma",
        category: Category::Tools,
        level: Level::Intermediate,
        description: "UI/UX design, prototyping, design systems, collaboration",
        icon_url: devicon!("figma", "original"),
        experience: None,
        projects: Some(8),
    },
    Skill {
        name: "Supabase",
        category: Category::Tools,
        level: Level::Intermediate,
        description: "Backend as a service, real-time databases, authentication",
        icon_url: devicon!("supabase", "original"),
        experience: None,
        projects: Some(6),
    },
    Skill {
        name: "Firebase",
        category: Category::Tools,
        level: Level::Intermediate,
        description: "Cloud services, authentication, real-time database",
        icon_url: devicon!("firebase", "plain"),
        experience: None,
        projects: Some(4),
    },
    Skill {
        name: "Docker",
        category: Category::Tools,
        level: Level::Intermediate,
        description: "Containerization, deployment, microservices",
        icon_url: devicon!("docker", "original"),
        experience: None,
        projects: Some(5),
    },
    // DevOps & cloud
    Skill {
        name: "Vercel",
        category: Category::DevOps,
        level: Level::Intermediate,
        description: "Deployment, hosting, edge functions, analytics",
        icon_url: devicon!("vercel", "original"),
        experience: None,
        projects: Some(10),
    },
    Skill {
        name: "Netlify",
        category: Category::DevOps,
        level: Level::Intermediate,
        description: "Static site hosting, forms, functions, CI/CD",
        icon_url: devicon!("netlify", "original"),
        experience: None,
        projects: Some(8),
    },
    // Core concepts
    Skill {
        name: "OOP",
        category: Category::Core,
        level: Level::Intermediate,
        description: "Object-oriented programming principles, SOLID, design patterns",
        icon_url: None,
        experience: None,
        projects: Some(15),
    },
    Skill {
        name: "DBMS",
        category: Category::Core,
        level: Level::Intermediate,
        description: "Database management, normalization, indexing, optimization",
        icon_url: None,
        experience: None,
        projects: Some(12),
    },
    Skill {
        name: "DSA",
        category: Category::Core,
        level: Level::Intermediate,
        description: "Data structures and algorithms optimization, problem solving",
        icon_url: None,
        experience: None,
        projects: Some(20),
    },
    Skill {
        name: "Operating Systems",
        category: Category::Core,
        level: Level::Intermediate,
        description: "Process management, memory allocation, system calls",
        icon_url: None,
        experience: None,
        projects: Some(8),
    },
    Skill {
        name: "Computer Networks",
        category: Category::Core,
        level: Level::Intermediate,
        description: "TCP/IP, HTTP, WebSocket, network protocols",
        icon_url: None,
        experience: None,
        projects: Some(10),
    },
    // Soft skills
    Skill {
        name: "Problem Solving",
        category: Category::Soft,
        level: Level::Intermediate,
        description: "Analytical thinking, debugging, optimization, creative solutions",
        icon_url: None,
        experience: None,
        projects: Some(25),
    },
    Skill {
        name: "Team Collaboration",
        category: Category::Soft,
        level: Level::Intermediate,
        description: "Agile methodologies, code reviews, mentoring, leadership",
        icon_url: None,
        experience: None,
        projects: Some(20),
    },
    Skill {
        name: "Communication",
        category: Category::Soft,
        level: Level::Intermediate,
        description: "Technical documentation, presentations, client interaction",
        icon_url: None,
        experience: None,
        projects: Some(15),
    },
    Skill {
        name: "Time Management",
        category: Category::Soft,
        level: Level::Intermediate,
        description: "Project planning, deadline management, prioritization",
        icon_url: None,
        experience: None,
        projects: Some(18),
    },
    Skill {
        name: "Continuous Learning",
        category: Category::Soft,
        level: Level::Intermediate,
        description: "Self-improvement, technology trends, skill development",
        icon_url: None,
        experience: None,
        projects: Some(25),
    },
    Skill {
        name: "Innovation",
        category: Category::Soft,
        level: Level::Intermediate,
        description: "Creative thinking, new technologies, process improvement",
        icon_url: None,
        experience: None,
        projects: Some(12),
    },
];

/// Case-insensitive substring search over skill names, optionally narrowed
/// to a single category. Recomputed on every keystroke; the list is small
/// enough that no debouncing is needed.
pub fn filter_skills(query: &str, category: Option<Category>) -> Vec<&'static Skill> {
    let query = query.to_lowercase();
    SKILLS
        .iter()
        .filter(|skill| {
            skill.name.to_lowercase().contains(&query)
                && category.is_none_or(|c| skill.category == c)
        })
        .collect()
}

pub fn skills_in_category(category: Category) -> usize {
    SKILLS.iter().filter(|s| s.category == category).count()
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub github_url: Option<&'static str>,
    pub live_demo_url: Option<&'static str>,
    pub featured: bool,
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Guard Hub — Security Management System",
        description: "A comprehensive security workforce management system that digitizes and \
                      automates security agency operations. Features automated shift rostering, \
                      leave management, real-time attendance tracking, and operational dashboards \
                      to improve workforce utilization and reduce manual scheduling effort.",
        image: "/projects/guardhub.jpg",
        tags: &["MongoDB", "Express.js", "React.js", "Node.js", "Tailwind CSS", "REST APIs"],
        github_url: Some("https://github.com/username/guardhub"),
        live_demo_url: None,
        featured: true,
    },
    Project {
        id: 2,
        title: "Matrix Library Management System",
        description: "A rack-based digital library solution that modernizes traditional library \
                      workflows. Features QR/barcode scanning, secure authentication, role-based \
                      access control, AI-powered chatbot for book discovery, and comprehensive \
                      dashboards for librarians and students.",
        image: "/projects/matrix-library.jpg",
        tags: &["MongoDB", "Express.js", "React.js", "Node.js", "Tailwind CSS", "AI Chatbot"],
        github_url: Some("https://github.com/username/matrix-library"),
        live_demo_url: None,
        featured: true,
    },
    Project {
        id: 3,
        title: "Aditya University Visitor Management System",
        description: "An institutional visitor tracking platform designed to enhance campus \
                      security. Features visitor registration with time logs, role-based access \
                      for security staff, real-time monitoring dashboards, and comprehensive \
                      audit trails replacing manual visitor registers.",
        image: "/projects/visitor-management.jpg",
        tags: &["MongoDB", "Express.js", "React.js", "Node.js", "Tailwind CSS", "Security"],
        github_url: Some("https://github.com/username/visitor-management"),
        live_demo_url: None,
        featured: true,
    },
];

pub fn featured_projects() -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| p.featured).collect()
}

/// Index bookkeeping for the featured-projects carousel. Forward and back
/// both wrap modulo the slide count, so the index is always in `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Carousel { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn select(&mut self, index: usize) {
        if self.len > 0 {
            self.index = index % self.len;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationStatus {
    Completed,
    Current,
}

impl EducationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EducationStatus::Completed => "Completed",
            EducationStatus::Current => "Current",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EducationItem {
    pub degree: &'static str,
    pub institution: &'static str,
    pub duration: &'static str,
    pub grade: &'static str,
    pub location: &'static str,
    pub status: EducationStatus,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
}

pub static EDUCATION: &[EducationItem] = &[
    EducationItem {
        degree: "Master of Computer Applications (MCA)",
        institution: "Aditya University",
        duration: "2024 - 2026",
        grade: "SGPA: 7.85",
        location: "Andhra Pradesh, India",
        status: EducationStatus::Current,
        description: "Advanced studies in computer science with focus on modern software \
                      development, system design, and emerging technologies.",
        highlights: &[
            "Advanced Algorithms & Data Structures",
            "Software Engineering Principles",
            "Database Management Systems",
            "Web Technologies & Frameworks",
            "System Design & Architecture",
        ],
    },
    EducationItem {
        degree: "Bachelor of Computer Applications (BCA)",
        institution: "Aditya Degree College",
        duration: "2021 - 2024",
        grade: "CGPA: 7.24",
        location: "Andhra Pradesh, India",
        status: EducationStatus::Completed,
        description: "Comprehensive foundation in computer science fundamentals, programming \
                      languages, and software development practices.",
        highlights: &[
            "Programming Fundamentals (C, C++, Java)",
            "Web Development (HTML, CSS, JavaScript)",
            "Database Management (SQL, RDBMS)",
            "Operating Systems & Networks",
            "Software Development Life Cycle",
        ],
    },
];

pub static ACHIEVEMENTS: &[&str] = &[
    "Oracle Academy Java Certification",
    "Built and deployed full-stack canteen app in under a week",
    "Consistent academic performance throughout degree",
    "Active participation in coding competitions",
    "Leadership roles in technical projects",
];

#[derive(Debug, Clone, Copy)]
pub struct Language {
    pub name: &'static str,
    pub level: &'static str,
    pub proficiency: u8,
    pub flag: &'static str,
    pub description: &'static str,
}

pub static LANGUAGES: &[Language] = &[
    Language {
        name: "Telugu",
        level: "Native",
        proficiency: 100,
        flag: "🇮🇳",
        description: "Mother tongue, fluent in all contexts",
    },
    Language {
        name: "English",
        level: "Fluent",
        proficiency: 90,
        flag: "🇺🇸",
        description: "Professional proficiency in speaking, reading, and writing",
    },
    Language {
        name: "Hindi",
        level: "Intermediate",
        proficiency: 70,
        flag: "🇮🇳",
        description: "Good conversational skills and basic reading comprehension",
    },
    Language {
        name: "Japanese",
        level: "Beginner",
        proficiency: 25,
        flag: "🇯🇵",
        description: "Basic phrases and learning fundamentals",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn names(skills: &[&Skill]) -> Vec<&'static str> {
        skills.iter().map(|s| s.name).collect()
    }

    #[test]
    fn filter_empty_query_returns_everything() {
        assert_eq!(filter_skills("", None).len(), SKILLS.len());
    }

    #[test]
    fn filter_is_case_insensitive_substring_match() {
        let results = filter_skills("react", None);
        assert_eq!(names(&results), vec!["React"]);

        let results = filter_skills("SCRIPT", None);
        assert_eq!(names(&results), vec!["JavaScript", "TypeScript"]);
    }

    #[test]
    fn filter_intersects_query_with_category() {
        // "git" matches Git and GitHub, both in Tools
        let results = filter_skills("git", Some(Category::Tools));
        assert_eq!(names(&results), vec!["Git", "GitHub"]);

        // same query narrowed to a category with no match
        assert!(filter_skills("git", Some(Category::Soft)).is_empty());
    }

    #[test]
    fn filter_unknown_query_is_empty() {
        assert!(filter_skills("cobol", None).is_empty());
    }

    #[test]
    fn category_counts_cover_all_skills() {
        let total: usize = Category::ALL.iter().map(|c| skills_in_category(*c)).sum();
        assert_eq!(total, SKILLS.len());
    }

    #[test]
    fn core_and_soft_skills_render_with_category_glyph() {
        // Skills without a devicon entry must still have a glyph source:
        // the render path falls back to the category accent. Every other
        // skill must carry a CDN url.
        for skill in SKILLS {
            match skill.category {
                Category::Core | Category::Soft => assert!(skill.icon_url.is_none()),
                _ => assert!(skill.icon_url.is_some(), "{} is missing an icon", skill.name),
            }
        }
    }

    #[test]
    fn devicon_urls_are_well_formed() {
        for url in SKILLS.iter().filter_map(|s| s.icon_url) {
            assert!(url.starts_with("https://cdn.jsdelivr.net/gh/devicons/devicon/icons/"));
            assert!(url.ends_with(".svg"));
        }
    }

    #[test]
    fn carousel_wraps_forward_and_back() {
        let featured = featured_projects();
        let mut carousel = Carousel::new(featured.len());
        assert_eq!(carousel.index(), 0);

        carousel.prev();
        assert_eq!(carousel.index(), featured.len() - 1);

        carousel.next();
        assert_eq!(carousel.index(), 0);

        for _ in 0..featured.len() {
            carousel.next();
            assert!(carousel.index() < featured.len());
        }
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn carousel_select_stays_in_bounds() {
        let mut carousel = Carousel::new(3);
        carousel.select(2);
        assert_eq!(carousel.index(), 2);
        carousel.select(5);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn empty_carousel_does_not_panic() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.prev();
        carousel.select(1);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn all_projects_are_featured() {
        assert_eq!(featured_projects().len(), PROJECTS.len());
    }

    #[test]
    fn language_proficiency_is_a_percentage() {
        for lang in LANGUAGES {
            assert!(lang.proficiency <= 100);
        }
    }
}
