use topicmatch_core::{
    open_store, open_store_in_memory, NewTopic, StorageBackend, TopicRepository,
};

#[test]
fn file_store_keeps_data_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("topicmatch.db");

    let created_id = {
        let backend = open_store(&path).unwrap();
        let repo = TopicRepository::new(&backend);
        assert_eq!(repo.list().unwrap().len(), 3);
        let created = repo
            .create(NewTopic {
                title: "Reproducible Benchmarking Harnesses".to_string(),
                description: "Design a harness that makes storage benchmarks repeatable."
                    .to_string(),
                teacher_id: "2".to_string(),
                teacher_name: "Dr. Priya Sharma".to_string(),
                category: "Systems".to_string(),
                prerequisites: None,
                deadline: "2026-01-15".to_string(),
                contact: "priya.sharma@uni.edu".to_string(),
            })
            .unwrap();
        created.id
    };

    let backend = open_store(&path).unwrap();
    let repo = TopicRepository::new(&backend);
    let topics = repo.list().unwrap();
    assert_eq!(topics.len(), 4);
    let reloaded = repo.get(&created_id).unwrap().unwrap();
    assert_eq!(reloaded.title, "Reproducible Benchmarking Harnesses");
}

#[test]
fn id_sequence_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("topicmatch.db");

    {
        let backend = open_store(&path).unwrap();
        let repo = TopicRepository::new(&backend);
        let created = repo.create(minimal_topic("first session")).unwrap();
        assert_eq!(created.id, "4");
        assert!(repo.delete(&created.id).unwrap());
    }

    let backend = open_store(&path).unwrap();
    let repo = TopicRepository::new(&backend);
    let created = repo.create(minimal_topic("second session")).unwrap();
    assert_eq!(created.id, "5");
}

#[test]
fn in_memory_store_starts_fresh_every_time() {
    let first = open_store_in_memory().unwrap();
    TopicRepository::new(&first)
        .create(minimal_topic("ephemeral"))
        .unwrap();
    assert_eq!(TopicRepository::new(&first).list().unwrap().len(), 4);

    let second = open_store_in_memory().unwrap();
    assert_eq!(TopicRepository::new(&second).list().unwrap().len(), 3);
}

#[test]
fn raw_port_roundtrip_and_removal() {
    let backend = open_store_in_memory().unwrap();

    assert!(backend.read("scratch").unwrap().is_none());

    backend.write("scratch", "first").unwrap();
    backend.write("scratch", "second").unwrap();
    assert_eq!(backend.read("scratch").unwrap().as_deref(), Some("second"));

    backend.remove("scratch").unwrap();
    assert!(backend.read("scratch").unwrap().is_none());
    backend.remove("scratch").unwrap();
}

fn minimal_topic(title: &str) -> NewTopic {
    NewTopic {
        title: title.to_string(),
        description: "placeholder".to_string(),
        teacher_id: "1".to_string(),
        teacher_name: "Dr. Elena Vasquez".to_string(),
        category: "Systems".to_string(),
        prerequisites: None,
        deadline: "2026-01-01".to_string(),
        contact: "elena.vasquez@uni.edu".to_string(),
    }
}
