use topicmatch_core::{
    ApplicationPatch, ApplicationRepository, ApplicationStatus, MemoryBackend, NewApplication,
    TopicPatch, TopicRepository,
};

#[test]
fn submitting_an_application_starts_pending_and_bumps_the_topic_counter() {
    let backend = MemoryBackend::new();
    let topics = TopicRepository::new(&backend);
    let applications = ApplicationRepository::new(&backend);

    assert_eq!(topics.get("1").unwrap().unwrap().applications, 1);

    let created = applications.create(application_for_topic_one()).unwrap();
    assert_eq!(created.status, ApplicationStatus::Pending);
    assert_eq!(created.id, "3");
    assert!(created.applied_at > 0);

    assert_eq!(topics.get("1").unwrap().unwrap().applications, 2);
}

#[test]
fn withdrawing_an_application_lowers_the_topic_counter() {
    let backend = MemoryBackend::new();
    let topics = TopicRepository::new(&backend);
    let applications = ApplicationRepository::new(&backend);

    let created = applications.create(application_for_topic_one()).unwrap();
    assert_eq!(topics.get("1").unwrap().unwrap().applications, 2);

    assert!(applications.delete(&created.id).unwrap());
    assert_eq!(topics.get("1").unwrap().unwrap().applications, 1);
    assert!(applications.get(&created.id).unwrap().is_none());
}

#[test]
fn counter_never_goes_below_zero() {
    let backend = MemoryBackend::new();
    let topics = TopicRepository::new(&backend);
    let applications = ApplicationRepository::new(&backend);

    // Seeded application "1" belongs to topic "1". Force the counter out of
    // step before withdrawing it.
    topics
        .update(
            "1",
            TopicPatch {
                applications: Some(0),
                ..TopicPatch::default()
            },
        )
        .unwrap();

    assert!(applications.delete("1").unwrap());
    assert_eq!(topics.get("1").unwrap().unwrap().applications, 0);
}

#[test]
fn status_review_updates_only_the_status() {
    let backend = MemoryBackend::new();
    let applications = ApplicationRepository::new(&backend);

    let reviewed = applications
        .update(
            "1",
            ApplicationPatch {
                status: Some(ApplicationStatus::Accepted),
            },
        )
        .unwrap()
        .unwrap();

    assert_eq!(reviewed.status, ApplicationStatus::Accepted);
    assert_eq!(reviewed.student_name, "Alex Johnson");
    assert_eq!(reviewed.message, applications.get("1").unwrap().unwrap().message);
}

#[test]
fn applying_to_a_missing_topic_still_stores_the_application() {
    let backend = MemoryBackend::new();
    let topics = TopicRepository::new(&backend);
    let applications = ApplicationRepository::new(&backend);

    let counters_before: Vec<u32> = topics
        .list()
        .unwrap()
        .into_iter()
        .map(|topic| topic.applications)
        .collect();

    let created = applications
        .create(NewApplication {
            topic_id: "99".to_string(),
            topic_title: "A topic that was just deleted".to_string(),
            student_id: "4".to_string(),
            student_name: "Maria Lopez".to_string(),
            message: "Submitting right before the listing closed.".to_string(),
        })
        .unwrap();

    assert!(applications.get(&created.id).unwrap().is_some());
    let counters_after: Vec<u32> = topics
        .list()
        .unwrap()
        .into_iter()
        .map(|topic| topic.applications)
        .collect();
    assert_eq!(counters_after, counters_before);
}

#[test]
fn lists_scope_to_topic_and_student() {
    let backend = MemoryBackend::new();
    let applications = ApplicationRepository::new(&backend);

    let for_topic_one = applications.list_by_topic("1").unwrap();
    assert_eq!(for_topic_one.len(), 1);
    assert_eq!(for_topic_one[0].student_id, "3");

    let by_maria = applications.list_by_student("4").unwrap();
    assert_eq!(by_maria.len(), 1);
    assert_eq!(by_maria[0].topic_id, "2");

    assert!(applications.list_by_topic("99").unwrap().is_empty());
}

#[test]
fn deleting_an_unknown_application_changes_nothing() {
    let backend = MemoryBackend::new();
    let topics = TopicRepository::new(&backend);
    let applications = ApplicationRepository::new(&backend);

    assert!(!applications.delete("99").unwrap());
    assert_eq!(applications.list().unwrap().len(), 2);
    assert_eq!(topics.get("1").unwrap().unwrap().applications, 1);
}

fn application_for_topic_one() -> NewApplication {
    NewApplication {
        topic_id: "1".to_string(),
        topic_title: "Graph Neural Networks for Molecular Property Prediction".to_string(),
        student_id: "4".to_string(),
        student_name: "Maria Lopez".to_string(),
        message: "I would like to join this project.".to_string(),
    }
}
