//! Domain service tests against the in-memory repository fake. These prove
//! the service depends only on the repository port, not on a database.

mod common;

use common::{create_inmem_service, sample_req};
use contacts::domain::error::DomainError;

#[tokio::test]
async fn create_and_list_through_fake_repo() {
    let svc = create_inmem_service();

    let created = svc
        .create_contact(sample_req("jo@example.com").into())
        .await
        .unwrap();
    assert_eq!(created.email_id, "jo@example.com");
    assert_eq!(created.note, "");

    let page = svc.list_contacts(Default::default()).await.unwrap();
    assert_eq!(page.total_contacts, 1);
    assert_eq!(page.contacts[0].id, created.id);
    assert!(!page.has_next_page);
    assert!(!page.has_prev_page);
}

#[tokio::test]
async fn duplicate_email_is_rejected_case_insensitively() {
    let svc = create_inmem_service();

    svc.create_contact(sample_req("a@b.com").into())
        .await
        .unwrap();

    let err = svc
        .create_contact(sample_req("A@B.com").into())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::DuplicateEmail));

    // Nothing was persisted by the rejected submission
    let page = svc.list_contacts(Default::default()).await.unwrap();
    assert_eq!(page.total_contacts, 1);
}

#[tokio::test]
async fn invalid_payload_reaches_no_repository() {
    let svc = create_inmem_service();

    let mut req = sample_req("not-an-email");
    req.mobile_number = Some("0123".to_string());

    for _ in 0..2 {
        let err = svc.create_contact(req.clone().into()).await.unwrap_err();
        match err {
            DomainError::Validation { errors } => {
                assert_eq!(
                    errors,
                    vec![
                        "Please provide a valid email address",
                        "Please provide a valid mobile number",
                    ]
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    let page = svc.list_contacts(Default::default()).await.unwrap();
    assert_eq!(page.total_contacts, 0);
}

#[tokio::test]
async fn pagination_metadata_is_derived_from_totals() {
    let svc = create_inmem_service();

    for i in 0..25 {
        svc.create_contact(sample_req(&format!("user{i}@example.com")).into())
            .await
            .unwrap();
    }

    let req = contacts::domain::service::ListContactsRequest {
        limit: Some(10),
        ..Default::default()
    };
    let page1 = svc.list_contacts(req.clone()).await.unwrap();
    assert_eq!(page1.contacts.len(), 10);
    assert_eq!(page1.total_contacts, 25);
    assert_eq!(page1.total_pages, 3);
    assert!(page1.has_next_page);
    assert!(!page1.has_prev_page);

    let req3 = contacts::domain::service::ListContactsRequest {
        page: Some(3),
        limit: Some(10),
        ..Default::default()
    };
    let page3 = svc.list_contacts(req3).await.unwrap();
    assert_eq!(page3.contacts.len(), 5);
    assert!(!page3.has_next_page);
    assert!(page3.has_prev_page);
}

#[tokio::test]
async fn limit_is_clamped_to_the_configured_maximum() {
    let svc = create_inmem_service();

    svc.create_contact(sample_req("a@b.com").into())
        .await
        .unwrap();

    let req = contacts::domain::service::ListContactsRequest {
        limit: Some(10_000),
        ..Default::default()
    };
    let page = svc.list_contacts(req).await.unwrap();
    // max_page_size default is 100, so 1 item / 100 per page = 1 page
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn filters_combine_with_and() {
    let svc = create_inmem_service();

    let mut a = sample_req("a@x.com");
    a.nature_of_services = Some("Consulting".to_string());
    a.work_related = Some("Yes".to_string());
    svc.create_contact(a.into()).await.unwrap();

    let mut b = sample_req("b@x.com");
    b.nature_of_services = Some("Consulting".to_string());
    b.work_related = Some("No".to_string());
    svc.create_contact(b.into()).await.unwrap();

    let req = contacts::domain::service::ListContactsRequest {
        nature_of_services: Some("consult".to_string()),
        work_related: Some("yes".to_string()),
        ..Default::default()
    };
    let page = svc.list_contacts(req).await.unwrap();
    assert_eq!(page.total_contacts, 1);
    assert_eq!(page.contacts[0].email_id, "a@x.com");
}

#[tokio::test]
async fn stats_rank_services_by_descending_frequency() {
    let svc = create_inmem_service();

    let mut n = 0;
    for (service, count) in [("A", 3), ("B", 2), ("C", 1)] {
        for _ in 0..count {
            let mut req = sample_req(&format!("user{n}@example.com"));
            req.nature_of_services = Some(service.to_string());
            svc.create_contact(req.into()).await.unwrap();
            n += 1;
        }
    }

    let stats = svc.stats().await.unwrap();
    assert_eq!(stats.total_contacts, 6);
    assert_eq!(stats.recent_contacts, 6);

    let ranked: Vec<(&str, u64)> = stats
        .top_services
        .iter()
        .map(|sc| (sc.service.as_str(), sc.count))
        .collect();
    assert_eq!(ranked, vec![("A", 3), ("B", 2), ("C", 1)]);
}
