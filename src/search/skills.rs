//! Built-in skill vocabulary offered by the search boxes.

pub const INDUSTRY_SKILLS: &[&str] = &[
    // Cloud & DevOps
    "AWS",
    "Amazon Web Services",
    "Azure",
    "Google Cloud",
    "GCP",
    "Cloud Computing",
    "Cloud Architecture",
    "Cloud Security",
    "DevOps",
    "GitOps",
    "Docker",
    "Kubernetes",
    "Helm",
    "Terraform",
    "Ansible",
    "CI/CD",
    "Jenkins",
    "Linux Administration",
    // Languages
    "Python",
    "JavaScript",
    "TypeScript",
    "Java",
    "C#",
    "C++",
    "Go",
    "Ruby",
    "Rust",
    "PHP",
    "PHP Laravel",
    "Node.js",
    "Express.js",
    // Web
    "HTML",
    "CSS",
    "Tailwind CSS",
    "Bootstrap",
    "React",
    "Next.js",
    "Angular",
    "Vue.js",
    "Svelte",
    "Astro",
    "Frontend Development",
    "Backend Development",
    "Full Stack Development",
    "REST API",
    "GraphQL",
    "Vite",
    "Webpack",
    // Mobile
    "Android Development",
    "Kotlin",
    "Java for Android",
    "iOS Development",
    "Swift",
    "Flutter",
    "React Native",
    // Design
    "UI/UX Design",
    "Figma",
    "Adobe XD",
    "Sketch",
    "Wireframing",
    "Prototyping",
    "Design Thinking",
    // Databases
    "SQL",
    "MySQL",
    "PostgreSQL",
    "MongoDB",
    "NoSQL",
    "Redis",
    "Oracle Database",
    "MariaDB",
    "Database Design",
    // Data engineering
    "Data Engineering",
    "Data Pipelines",
    "ETL",
    "Snowflake",
    "Databricks",
    "Apache Spark",
    "Hadoop",
    "Airflow",
    "Kafka",
    "Redshift",
    "BigQuery",
    // Data science
    "Data Science",
    "Machine Learning",
    "Deep Learning",
    "NLP",
    "Computer Vision",
    "TensorFlow",
    "PyTorch",
    "ML Ops",
    "Data Visualization",
    // BI
    "Power BI",
    "Tableau",
    "Business Intelligence",
    "Excel Analytics",
    // Security
    "Cybersecurity",
    "Ethical Hacking",
    "Penetration Testing",
    "Network Security",
    "SOC Analyst",
    "Information Security",
    // SAP
    "SAP FICO",
    "SAP ABAP",
    "SAP BASIS",
    "SAP MM",
    "SAP HANA",
    "SAP SD",
    "ERP",
    // AI
    "Generative AI",
    "Large Language Models",
    "Prompt Engineering",
    "Explainable AI",
    "Agentic AI Systems",
    // Testing
    "Manual Testing",
    "Automation Testing",
    "Selenium",
    "Cypress",
    "Playwright",
    "Appium",
    "QA Engineering",
    // Games
    "Unity",
    "Unreal Engine",
    "Game Design",
    "Level Design",
    "3D Modeling",
    "Blender",
    // IT support
    "IT Support",
    "Technical Support",
    "Networking",
    "System Administration",
    "Troubleshooting",
    "Hardware Support",
    // Finance
    "Financial Modeling",
    "Investment Banking",
    "FinTech",
    "Stock Market",
    "Cryptocurrency",
    "Blockchain",
    "Digital Payments",
    // Marketing
    "Digital Marketing",
    "SEO",
    "Google Ads",
    "Meta Ads",
    "Social Media Marketing",
    "Content Marketing",
    "Email Marketing",
    // Business
    "Project Management",
    "Product Management",
    "Business Analysis",
    "Agile",
    "Scrum",
    "Leadership",
    // People
    "Human Resources",
    "Communication Skills",
    "Team Management",
    "Critical Thinking",
    "Public Speaking",
    "Talent Acquisition",
    // Education
    "Instructional Design",
    "Teaching Skills",
    "Trainer Skills",
    "Coaching",
];
