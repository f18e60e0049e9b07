//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `topicmatch_core` wiring.
//! - Walk the seeded store through one application round-trip with
//!   deterministic output for quick local sanity checks.

use topicmatch_core::{
    open_store_in_memory, ApplicationRepository, NewApplication, StoreResult, TopicRepository,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("topicmatch: {err}");
        std::process::exit(1);
    }
}

fn run() -> StoreResult<()> {
    println!("topicmatch_core version={}", topicmatch_core::core_version());

    let backend = open_store_in_memory()?;
    let topics = TopicRepository::new(&backend);
    let applications = ApplicationRepository::new(&backend);

    println!("seeded topics:");
    for topic in topics.list()? {
        println!(
            "  [{}] {} ({}) applications={}",
            topic.id, topic.title, topic.category, topic.applications
        );
    }

    let created = applications.create(NewApplication {
        topic_id: "3".to_string(),
        topic_title: "Privacy-Preserving Federated Learning".to_string(),
        student_id: "3".to_string(),
        student_name: "Alex Johnson".to_string(),
        message: "Interested after the seminar on secure aggregation.".to_string(),
    })?;
    let after_create = topics.get("3")?;
    println!(
        "created application id={} topic_applications={}",
        created.id,
        after_create.map(|topic| topic.applications).unwrap_or(0)
    );

    applications.delete(&created.id)?;
    let after_delete = topics.get("3")?;
    println!(
        "deleted application id={} topic_applications={}",
        created.id,
        after_delete.map(|topic| topic.applications).unwrap_or(0)
    );

    Ok(())
}
