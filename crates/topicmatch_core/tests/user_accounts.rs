use topicmatch_core::{
    MemoryBackend, NewUser, StorageBackend, UserPatch, UserRepository, UserRole,
};

#[test]
fn seeded_accounts_cover_both_roles() {
    let backend = MemoryBackend::new();
    let repo = UserRepository::new(&backend);

    let users = repo.list().unwrap();
    assert_eq!(users.len(), 4);
    assert_eq!(
        users
            .iter()
            .filter(|user| user.role == UserRole::Teacher)
            .count(),
        2
    );
    assert_eq!(
        users
            .iter()
            .filter(|user| user.role == UserRole::Student)
            .count(),
        2
    );
}

#[test]
fn create_update_delete_roundtrip() {
    let backend = MemoryBackend::new();
    let repo = UserRepository::new(&backend);

    let created = repo
        .create(NewUser {
            name: "Noor Haddad".to_string(),
            email: "noor.haddad@student.uni.edu".to_string(),
            role: UserRole::Student,
        })
        .unwrap();
    assert_eq!(created.id, "5");
    assert!(created.created_at > 0);

    let renamed = repo
        .update(
            &created.id,
            UserPatch {
                name: Some("Noor H. Haddad".to_string()),
                ..UserPatch::default()
            },
        )
        .unwrap()
        .unwrap();
    assert_eq!(renamed.name, "Noor H. Haddad");
    assert_eq!(renamed.email, "noor.haddad@student.uni.edu");

    assert!(repo.delete(&created.id).unwrap());
    assert!(repo.get(&created.id).unwrap().is_none());
}

#[test]
fn current_user_pointer_set_resolve_clear() {
    let backend = MemoryBackend::new();
    let repo = UserRepository::new(&backend);

    assert!(repo.current_user_id().unwrap().is_none());
    assert!(repo.current_user().unwrap().is_none());

    repo.set_current_user("3").unwrap();
    assert_eq!(repo.current_user_id().unwrap().as_deref(), Some("3"));
    let signed_in = repo.current_user().unwrap().unwrap();
    assert_eq!(signed_in.name, "Alex Johnson");

    repo.clear_current_user().unwrap();
    assert!(repo.current_user_id().unwrap().is_none());
}

#[test]
fn pointer_is_stored_as_a_json_string_under_its_own_key() {
    let backend = MemoryBackend::new();
    let repo = UserRepository::new(&backend);

    repo.set_current_user("3").unwrap();
    assert_eq!(
        backend.read("currentUserId").unwrap().as_deref(),
        Some("\"3\"")
    );
}

#[test]
fn dangling_or_corrupt_pointer_resolves_to_none() {
    let backend = MemoryBackend::new();
    let repo = UserRepository::new(&backend);

    repo.set_current_user("99").unwrap();
    assert_eq!(repo.current_user_id().unwrap().as_deref(), Some("99"));
    assert!(repo.current_user().unwrap().is_none());

    backend.write("currentUserId", "{not json").unwrap();
    assert!(repo.current_user_id().unwrap().is_none());
    assert!(repo.current_user().unwrap().is_none());
}

#[test]
fn deleting_the_signed_in_user_leaves_the_pointer_dangling() {
    let backend = MemoryBackend::new();
    let repo = UserRepository::new(&backend);

    repo.set_current_user("4").unwrap();
    assert!(repo.delete("4").unwrap());

    assert_eq!(repo.current_user_id().unwrap().as_deref(), Some("4"));
    assert!(repo.current_user().unwrap().is_none());
}
