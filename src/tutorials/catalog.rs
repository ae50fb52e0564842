use crate::tutorials::models::Tutorial;

pub const NUMBER_OF_TUTORIALS: usize = 4;

// Ids are unique and ascending; clients key their cards on them.
pub static TUTORIALS: [Tutorial; NUMBER_OF_TUTORIALS] = [
    Tutorial::new_static(
        1,
        "Getting Started with Go",
        "Learn the basics of Go programming language",
        "https://go.dev/doc/tutorial/getting-started",
    ),
    Tutorial::new_static(
        2,
        "React Fundamentals",
        "Master the core concepts of React",
        "https://react.dev/learn",
    ),
    Tutorial::new_static(
        3,
        "Building REST APIs",
        "Create robust REST APIs with Go",
        "https://go.dev/doc/tutorial/web-service-gin",
    ),
    Tutorial::new_static(
        4,
        "Modern JavaScript",
        "ES6+ features and best practices",
        "https://javascript.info",
    ),
];
