use topicmatch_core::{
    ApplicationRepository, MemoryBackend, NewApplication, TopicRepository,
};

#[test]
fn deleting_a_topic_removes_all_of_its_applications() {
    let backend = MemoryBackend::new();
    let topics = TopicRepository::new(&backend);
    let applications = ApplicationRepository::new(&backend);

    // Topic "1" carries seeded application "1"; add a second one.
    applications
        .create(NewApplication {
            topic_id: "1".to_string(),
            topic_title: "Graph Neural Networks for Molecular Property Prediction".to_string(),
            student_id: "4".to_string(),
            student_name: "Maria Lopez".to_string(),
            message: "Second applicant.".to_string(),
        })
        .unwrap();
    assert_eq!(applications.list_by_topic("1").unwrap().len(), 2);

    assert!(topics.delete("1").unwrap());

    assert!(topics.get("1").unwrap().is_none());
    assert!(applications.list_by_topic("1").unwrap().is_empty());
    assert_eq!(applications.list().unwrap().len(), 1);
}

#[test]
fn cascade_leaves_other_topics_and_their_applications_alone() {
    let backend = MemoryBackend::new();
    let topics = TopicRepository::new(&backend);
    let applications = ApplicationRepository::new(&backend);

    assert!(topics.delete("1").unwrap());

    let remaining = topics.list().unwrap();
    assert_eq!(remaining.len(), 2);
    let topic_two = topics.get("2").unwrap().unwrap();
    assert_eq!(topic_two.applications, 1);

    let survivor = applications.get("2").unwrap().unwrap();
    assert_eq!(survivor.topic_id, "2");
}

#[test]
fn deleting_a_topic_without_applications_just_deletes_the_topic() {
    let backend = MemoryBackend::new();
    let topics = TopicRepository::new(&backend);
    let applications = ApplicationRepository::new(&backend);

    assert!(topics.delete("3").unwrap());
    assert_eq!(applications.list().unwrap().len(), 2);
    assert_eq!(topics.list().unwrap().len(), 2);
}

#[test]
fn deleting_an_unknown_topic_cascades_nothing() {
    let backend = MemoryBackend::new();
    let topics = TopicRepository::new(&backend);
    let applications = ApplicationRepository::new(&backend);

    assert!(!topics.delete("99").unwrap());
    assert_eq!(topics.list().unwrap().len(), 3);
    assert_eq!(applications.list().unwrap().len(), 2);
}
