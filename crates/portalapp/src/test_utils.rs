use crate::dataset::Dataset;
use crate::model::{FileEntry, Priority, Project, ProjectStatus, Proposal, ProposalStatus, User};
use crate::options::Role;
use chrono::{DateTime, TimeZone, Utc};

pub fn day(n: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, n, 9, 0, 0).unwrap()
}

pub fn project(id: u32, title: &str, student: &str, supervisor: &str) -> Project {
    Project {
        id,
        title: title.to_string(),
        student: student.to_string(),
        supervisor: supervisor.to_string(),
        department: "CS".to_string(),
        status: ProjectStatus::InProgress,
        priority: Priority::Medium,
        tags: Vec::new(),
        progress: 0.0,
        created_at: day(id),
        deadline: None,
    }
}

pub fn proposal(id: u32, title: &str, student: &str, status: ProposalStatus) -> Proposal {
    Proposal {
        id,
        title: title.to_string(),
        student: student.to_string(),
        supervisor: None,
        department: "CS".to_string(),
        status,
        submitted_at: (status != ProposalStatus::Draft).then(|| day(id)),
        keywords: Vec::new(),
    }
}

pub fn user(id: u32, name: &str, role: Role, department: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: format!("{}@uni.edu", name.to_lowercase()),
        role,
        department: department.to_string(),
        joined_at: day(id),
    }
}

pub fn file(id: u32, name: &str, category: &str, size_bytes: u64) -> FileEntry {
    FileEntry {
        id,
        name: name.to_string(),
        owner: "Lina".to_string(),
        category: category.to_string(),
        size_bytes,
        uploaded_at: day(id),
        project: None,
    }
}

/// A small portal: three projects, three proposals, three users, two files.
pub fn sample_dataset() -> Dataset {
    let mut ocr = project(1, "Arabic OCR", "Lina", "Dr. Noor");
    ocr.status = ProjectStatus::Pending;
    ocr.priority = Priority::High;
    ocr.tags = vec!["vision".to_string(), "nlp".to_string()];
    ocr.progress = 10.0;

    let mut clinic = project(2, "Clinic Scheduler", "Omar", "Dr. Noor, Dr. Haddad");
    clinic.department = "SE".to_string();
    clinic.progress = 65.0;
    clinic.deadline = Some(day(28));

    let mut robot = project(3, "Warehouse Robot", "Sara", "Dr. Haddad");
    robot.status = ProjectStatus::Completed;
    robot.priority = Priority::Critical;
    robot.tags = vec!["robotics".to_string()];
    robot.progress = 100.0;
    robot.deadline = Some(day(20));

    let mut draft = proposal(1, "Edge Caching", "Lina", ProposalStatus::Draft);
    draft.keywords = vec!["networks".to_string()];
    let mut review = proposal(2, "Sign Language Glove", "Omar", ProposalStatus::UnderReview);
    review.keywords = vec!["wearables".to_string(), "ml".to_string()];
    review.department = "CE".to_string();
    let revision = proposal(3, "Exam Planner", "Lina", ProposalStatus::RevisionRequested);

    let mut report = file(1, "report.pdf", "report", 120_000);
    report.project = Some("Arabic OCR".to_string());
    let slides = file(2, "Slides.pptx", "presentation", 4_500_000);

    Dataset {
        projects: vec![ocr, clinic, robot],
        proposals: vec![draft, review, revision],
        users: vec![
            user(1, "Lina", Role::Student, "CS"),
            user(2, "Noor", Role::Supervisor, "CS"),
            user(3, "Adam", Role::Admin, "IT"),
        ],
        files: vec![report, slides],
    }
}
