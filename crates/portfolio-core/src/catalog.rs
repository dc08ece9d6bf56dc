//! Static portfolio content.
//!
//! The catalog is the only source of projects, skills and profile details.
//! Nothing here changes at runtime.

use crate::types::{Category, Profile, Project, Skill};

/// Bundled static content for one portfolio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    pub profile: Profile,
    pub projects: &'static [Project],
    pub skills: &'static [Skill],
}

impl Catalog {
    /// Look up a project by its title
    pub fn project(&self, title: &str) -> Option<&'static Project> {
        self.projects.iter().find(|p| p.title == title)
    }

    pub fn contains_project(&self, title: &str) -> bool {
        self.project(title).is_some()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        DEFAULT_CATALOG
    }
}

pub const DEFAULT_CATALOG: Catalog = Catalog {
    profile: PROFILE,
    projects: PROJECTS,
    skills: SKILLS,
};

pub const PROFILE: Profile = Profile {
    name: "Your Name",
    role: "Software Developer Graduate",
    pitch: "Passionate about creating efficient, scalable, and user-friendly applications. \
            Ready to bring fresh ideas and strong problem-solving skills to your team.",
    email: "your.email@example.com",
    github_url: "https://github.com/yourusername",
    linkedin_url: "https://linkedin.com/in/yourusername",
};

pub const SKILLS: &[Skill] = &[
    Skill { name: "JavaScript", level: 90 },
    Skill { name: "React", level: 85 },
    Skill { name: "Node.js", level: 80 },
    Skill { name: "Python", level: 75 },
    Skill { name: "HTML/CSS", level: 95 },
    Skill { name: "Git", level: 85 },
    Skill { name: "SQL", level: 70 },
    Skill { name: "RESTful APIs", level: 80 },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-commerce Platform",
        description: "A full-stack e-commerce solution with React, Node.js, and MongoDB.",
        long_description: "This e-commerce platform provides a seamless shopping experience with \
            features like user authentication, product catalog, shopping cart, and secure checkout. \
            The frontend is built with React and Redux for state management, while the backend uses \
            Node.js with Express and MongoDB for data storage. Key features include real-time \
            inventory updates, responsive design, and integration with popular payment gateways.",
        link: "https://github.com/yourusername/ecommerce-platform",
        category: Category::FullStack,
        technologies: &["React", "Node.js", "MongoDB", "Express", "Redux"],
    },
    Project {
        title: "Weather App",
        description: "A responsive weather application using React and OpenWeatherMap API.",
        long_description: "This weather application provides real-time weather information for \
            any location worldwide. It features a clean, intuitive interface built with React and \
            styled-components. The app integrates with the OpenWeatherMap API to fetch accurate \
            weather data, including current conditions, hourly forecasts, and 5-day predictions. \
            Additional features include geolocation support, unit conversion \
            (Celsius/Fahrenheit), and dynamic weather icons.",
        link: "https://github.com/yourusername/weather-app",
        category: Category::Frontend,
        technologies: &["React", "OpenWeatherMap API", "Styled-components", "Axios"],
    },
    Project {
        title: "Task Manager",
        description: "A productivity app built with React Native and Firebase.",
        long_description: "This cross-platform mobile application helps users manage their tasks \
            efficiently. Built with React Native, it offers a native app experience on both iOS and \
            Android. The app uses Firebase for real-time data synchronization and user \
            authentication. Features include task creation, due date setting, priority levels, \
            category tagging, and push notifications for reminders. The UI is designed for optimal \
            user experience with smooth animations and intuitive gestures.",
        link: "https://github.com/yourusername/task-manager",
        category: Category::Mobile,
        technologies: &["React Native", "Firebase", "Expo", "Redux"],
    },
    Project {
        title: "Data Visualization Dashboard",
        description: "An interactive dashboard using D3.js and React for data visualization.",
        long_description: "This data visualization dashboard provides insightful representations \
            of complex datasets. Built with React and D3.js, it offers a variety of chart types \
            including line graphs, bar charts, scatter plots, and heatmaps. The dashboard features \
            interactive elements like zooming, panning, and filtering, allowing users to explore \
            data in depth. It's designed to handle large datasets efficiently and includes \
            features like data export and customizable color schemes.",
        link: "https://github.com/yourusername/data-viz-dashboard",
        category: Category::Data,
        technologies: &["React", "D3.js", "Node.js", "Express", "MongoDB"],
    },
];
