use topicmatch_core::{MemoryBackend, NewTopic, TopicPatch, TopicRepository};

#[test]
fn list_returns_seeded_topics_on_first_use() {
    let backend = MemoryBackend::new();
    let repo = TopicRepository::new(&backend);

    let topics = repo.list().unwrap();
    assert_eq!(topics.len(), 3);
    assert_eq!(topics[0].id, "1");
    assert_eq!(
        topics[0].title,
        "Graph Neural Networks for Molecular Property Prediction"
    );
    assert_eq!(topics[2].prerequisites, None);
}

#[test]
fn create_appends_after_fixtures_with_fresh_counter_and_stamp() {
    let backend = MemoryBackend::new();
    let repo = TopicRepository::new(&backend);

    let created = repo.create(sample_topic("Causal Inference in Observational Data")).unwrap();

    assert_eq!(created.id, "4");
    assert_eq!(created.applications, 0);
    assert!(created.created_at > 0);
    assert_eq!(repo.list().unwrap().len(), 4);
}

#[test]
fn get_returns_topic_or_none() {
    let backend = MemoryBackend::new();
    let repo = TopicRepository::new(&backend);

    let topic = repo.get("2").unwrap().unwrap();
    assert_eq!(topic.title, "Low-Latency Key-Value Stores on NVMe");
    assert!(repo.get("99").unwrap().is_none());
}

#[test]
fn update_merges_patch_and_keeps_other_fields() {
    let backend = MemoryBackend::new();
    let repo = TopicRepository::new(&backend);

    let updated = repo
        .update(
            "1",
            TopicPatch {
                deadline: Some("2025-12-01".to_string()),
                ..TopicPatch::default()
            },
        )
        .unwrap()
        .unwrap();

    assert_eq!(updated.deadline, "2025-12-01");
    assert_eq!(updated.teacher_name, "Dr. Elena Vasquez");
    assert_eq!(updated.applications, 1);

    assert!(repo
        .update("99", TopicPatch::default())
        .unwrap()
        .is_none());
}

#[test]
fn list_by_teacher_scopes_to_owner() {
    let backend = MemoryBackend::new();
    let repo = TopicRepository::new(&backend);

    let elena = repo.list_by_teacher("1").unwrap();
    assert_eq!(elena.len(), 2);
    assert!(elena.iter().all(|topic| topic.teacher_id == "1"));

    let priya = repo.list_by_teacher("2").unwrap();
    assert_eq!(priya.len(), 1);

    assert!(repo.list_by_teacher("99").unwrap().is_empty());
}

#[test]
fn delete_removes_topic_and_reports_absence() {
    let backend = MemoryBackend::new();
    let repo = TopicRepository::new(&backend);

    assert!(repo.delete("3").unwrap());
    assert_eq!(repo.list().unwrap().len(), 2);
    assert!(repo.get("3").unwrap().is_none());
    assert!(!repo.delete("3").unwrap());
}

fn sample_topic(title: &str) -> NewTopic {
    NewTopic {
        title: title.to_string(),
        description: "A newly offered topic.".to_string(),
        teacher_id: "2".to_string(),
        teacher_name: "Dr. Priya Sharma".to_string(),
        category: "Statistics".to_string(),
        prerequisites: None,
        deadline: "2025-12-31".to_string(),
        contact: "priya.sharma@uni.edu".to_string(),
    }
}
