// Sample rows for local development, enabled by `CAMPS_SEED_SAMPLE_DATA`.

use chrono::NaiveDate;

use crate::modules::camps::adapters::outbound::in_memory_store::SeedData;
use crate::modules::camps::core::camp::{Camp, Location};
use crate::modules::camps::core::speaker::Speaker;
use crate::modules::camps::core::talk::Talk;

const WILDER_MINDS: &str = "Wilder Minds LLC";
const WILDER_MINDS_URL: &str = "http://wilderminds.com";

pub fn sample_data() -> SeedData {
    let event_date = NaiveDate::from_ymd_opt(2018, 10, 18)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default();

    let camp = Camp {
        moniker: "ATL2018".into(),
        name: "Atlanta Code Camp".into(),
        event_date,
        length: 1,
        location: Location {
            venue_name: Some("Atlanta Convention Center".into()),
            address1: Some("123 Main Street".into()),
            city_town: Some("Atlanta".into()),
            state_province: Some("GA".into()),
            postal_code: Some("12345".into()),
            country: Some("USA".into()),
            ..Location::default()
        },
        talks: None,
    };

    let speakers = vec![
        Speaker {
            speaker_id: 1,
            first_name: "Shawn".into(),
            last_name: "Wildermuth".into(),
            bio: Some("I'm a speaker".into()),
            company: Some(WILDER_MINDS.into()),
            company_url: Some(WILDER_MINDS_URL.into()),
            blog_url: Some("http://wildermuth.com".into()),
            twitter: Some("shawnwildermuth".into()),
            github: Some("shawnwildermuth".into()),
            ..Speaker::default()
        },
        Speaker {
            speaker_id: 2,
            first_name: "Resa".into(),
            last_name: "Wildermuth".into(),
            bio: Some("I'm a speaker".into()),
            company: Some(WILDER_MINDS.into()),
            company_url: Some(WILDER_MINDS_URL.into()),
            blog_url: Some("http://shawnandresa.com".into()),
            twitter: Some("resawildermuth".into()),
            github: Some("resawildermuth".into()),
            ..Speaker::default()
        },
    ];

    let talks = vec![
        Talk {
            talk_id: 1,
            camp_moniker: camp.moniker.clone(),
            title: "Entity Framework From Scratch".into(),
            r#abstract: "Entity Framework from scratch in an hour. Probably cover it all".into(),
            level: 100,
            category: Some("Data".into()),
            speaker_id: 1,
            speaker: None,
        },
        Talk {
            talk_id: 2,
            camp_moniker: camp.moniker.clone(),
            title: "Writing Sample Data Made Easy".into(),
            r#abstract: "Coming up with good sample data is tiring.".into(),
            level: 200,
            category: Some("Testing".into()),
            speaker_id: 2,
            speaker: None,
        },
    ];

    SeedData {
        camps: vec![camp],
        talks,
        speakers,
    }
}
