//! Built-in fixtures for first-run seeding.
//!
//! # Responsibility
//! - Provide the demo data each repository writes when its collection key is
//!   missing from the backend.
//!
//! # Invariants
//! - Fixture ids are decimal strings starting at `"1"`, matching the ids the
//!   store would have generated.
//! - Topic application counters equal the number of fixture applications
//!   referencing that topic.
//! - Timestamps are fixed epoch milliseconds so seeded state is
//!   deterministic across runs.

use crate::model::application::{Application, ApplicationStatus};
use crate::model::topic::Topic;
use crate::model::user::{User, UserRole};

/// 2025-06-01T09:00:00Z, the shared base stamp for all fixture records.
const SEED_EPOCH_MS: i64 = 1_748_768_400_000;

/// Demo accounts: two supervisors and two students.
pub fn users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            name: "Dr. Elena Vasquez".to_string(),
            email: "elena.vasquez@uni.edu".to_string(),
            role: UserRole::Teacher,
            created_at: SEED_EPOCH_MS,
        },
        User {
            id: "2".to_string(),
            name: "Dr. Priya Sharma".to_string(),
            email: "priya.sharma@uni.edu".to_string(),
            role: UserRole::Teacher,
            created_at: SEED_EPOCH_MS,
        },
        User {
            id: "3".to_string(),
            name: "Alex Johnson".to_string(),
            email: "alex.johnson@student.uni.edu".to_string(),
            role: UserRole::Student,
            created_at: SEED_EPOCH_MS + 60_000,
        },
        User {
            id: "4".to_string(),
            name: "Maria Lopez".to_string(),
            email: "maria.lopez@student.uni.edu".to_string(),
            role: UserRole::Student,
            created_at: SEED_EPOCH_MS + 120_000,
        },
    ]
}

/// Demo research topics. Counters line up with [`applications`].
pub fn topics() -> Vec<Topic> {
    vec![
        Topic {
            id: "1".to_string(),
            title: "Graph Neural Networks for Molecular Property Prediction".to_string(),
            description: "Train graph neural networks on public molecule datasets and \
                          compare them against classical descriptor baselines."
                .to_string(),
            teacher_id: "1".to_string(),
            teacher_name: "Dr. Elena Vasquez".to_string(),
            category: "Machine Learning".to_string(),
            prerequisites: Some("Linear algebra, Python".to_string()),
            deadline: "2025-09-30".to_string(),
            contact: "elena.vasquez@uni.edu".to_string(),
            applications: 1,
            created_at: SEED_EPOCH_MS,
        },
        Topic {
            id: "2".to_string(),
            title: "Low-Latency Key-Value Stores on NVMe".to_string(),
            description: "Measure how log-structured storage engines behave on modern \
                          NVMe devices and prototype one targeted optimization."
                .to_string(),
            teacher_id: "2".to_string(),
            teacher_name: "Dr. Priya Sharma".to_string(),
            category: "Systems".to_string(),
            prerequisites: Some("C++ or Rust".to_string()),
            deadline: "2025-10-15".to_string(),
            contact: "priya.sharma@uni.edu".to_string(),
            applications: 1,
            created_at: SEED_EPOCH_MS + 3_600_000,
        },
        Topic {
            id: "3".to_string(),
            title: "Privacy-Preserving Federated Learning".to_string(),
            description: "Survey differential-privacy mechanisms for federated \
                          averaging and evaluate their accuracy cost on a benchmark."
                .to_string(),
            teacher_id: "1".to_string(),
            teacher_name: "Dr. Elena Vasquez".to_string(),
            category: "Machine Learning".to_string(),
            prerequisites: None,
            deadline: "2025-11-01".to_string(),
            contact: "elena.vasquez@uni.edu".to_string(),
            applications: 0,
            created_at: SEED_EPOCH_MS + 7_200_000,
        },
    ]
}

/// Demo applications, one per seeded student.
pub fn applications() -> Vec<Application> {
    vec![
        Application {
            id: "1".to_string(),
            topic_id: "1".to_string(),
            topic_title: "Graph Neural Networks for Molecular Property Prediction".to_string(),
            student_id: "3".to_string(),
            student_name: "Alex Johnson".to_string(),
            message: "I have worked with PyTorch Geometric in a course project and \
                      would like to go deeper."
                .to_string(),
            status: ApplicationStatus::Pending,
            applied_at: SEED_EPOCH_MS + 86_400_000,
        },
        Application {
            id: "2".to_string(),
            topic_id: "2".to_string(),
            topic_title: "Low-Latency Key-Value Stores on NVMe".to_string(),
            student_id: "4".to_string(),
            student_name: "Maria Lopez".to_string(),
            message: "My systems programming background is in Rust and I am keen on \
                      storage internals."
                .to_string(),
            status: ApplicationStatus::Pending,
            applied_at: SEED_EPOCH_MS + 90_000_000,
        },
    ]
}
