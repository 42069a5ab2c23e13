use std::sync::Arc;

use chrono::NaiveDate;

use crate::modules::camps::adapters::outbound::in_memory_store::InMemoryCampStore;
use crate::modules::camps::core::errors::CampsError;
use crate::modules::camps::use_cases::manage_camps::handler::CampsHandler;
use crate::modules::camps::use_cases::manage_talks::command::CreateTalk;
use crate::modules::camps::use_cases::manage_talks::handler::TalksHandler;
use crate::shared::infrastructure::links::LinkGenerator;
use crate::tests::fixtures::camps::CampBuilder;
use crate::tests::fixtures::talks::make_speaker;

#[tokio::test]
async fn camp_and_talk_lifecycle() {
    let store = Arc::new(InMemoryCampStore::with_speakers([make_speaker(42)]));
    let camps = CampsHandler::new(store.clone(), LinkGenerator::default());
    let talks = TalksHandler::new(store.clone(), LinkGenerator::default());

    let event_date = NaiveDate::from_ymd_opt(2018, 9, 15)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let submitted = CampBuilder::new()
        .moniker("ATL2018")
        .name("Atlanta Code Camp")
        .event_date(event_date)
        .build();

    let created = camps.create_camp(submitted.clone()).await.unwrap();
    assert_eq!(created.location, "/api/camps/ATL2018");
    let fetched = camps.get_camp("ATL2018", false).await.unwrap();
    assert_eq!(fetched, submitted.without_talks());

    let talk = talks
        .create_talk(
            "ATL2018",
            CreateTalk {
                title: "Intro to X".into(),
                r#abstract: "All about X".into(),
                level: 100,
                category: None,
                speaker_id: Some(42),
            },
        )
        .await
        .unwrap()
        .resource;

    let fetched_talk = talks.get_talk("ATL2018", talk.talk_id, true).await.unwrap();
    assert_eq!(fetched_talk.camp_moniker, "ATL2018");
    assert_eq!(fetched_talk.speaker_id, 42);
    assert_eq!(fetched_talk, talk);

    talks.delete_talk("ATL2018", talk.talk_id).await.unwrap();
    assert!(matches!(
        talks.get_talk("ATL2018", talk.talk_id, false).await,
        Err(CampsError::NotFound(_))
    ));

    camps.delete_camp("ATL2018").await.unwrap();
    assert!(matches!(
        camps.get_camp("ATL2018", false).await,
        Err(CampsError::NotFound(_))
    ));
    assert_eq!(store.camp_count().await, 0);
    assert_eq!(store.talk_count().await, 0);
}
