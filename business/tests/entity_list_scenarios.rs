//! End-to-end scenarios for list resolution with the default collaborators.

use std::cell::RefCell;

use catalog_business::{
    CatalogLinkBuilder, DefaultNameResolver, EntityListConfig, EntityReference, LinkBuilder,
    ListBody, ListLayout, ListPhase,
};

const LAYOUTS: [ListLayout; 3] = [ListLayout::Plain, ListLayout::Card, ListLayout::Panel];

mod recently_viewed {
    use super::*;

    #[test]
    fn test_single_table_row() {
        let entities = vec![EntityReference::new("1", "table").with_fqn("db.schema.t1")];
        let names = |entity: &EntityReference| format!("name-of-{}", entity.id);
        let config = EntityListConfig::builder()
            .entities(&entities)
            .header_label("Recently Viewed")
            .test_id_prefix("recent")
            .build();

        let body = ListBody::compute(&config, &names, &CatalogLinkBuilder);

        assert_eq!(body.rows().len(), 1);
        let row = &body.rows()[0];
        assert_eq!(row.test_id, "recent-name-of-1");
        assert_eq!(row.display_name, "name-of-1");
        assert_eq!(
            row.link,
            CatalogLinkBuilder.entity_link("table", "db.schema.t1")
        );
    }

    #[test]
    fn test_empty_sequence_is_placeholder_for_every_layout() {
        for layout in LAYOUTS {
            let config = EntityListConfig::builder()
                .entities(&[])
                .header_label("Recently Viewed")
                .test_id_prefix("recent")
                .layout(layout)
                .build();
            let body = ListBody::compute(&config, &DefaultNameResolver, &CatalogLinkBuilder);
            assert_eq!(body, ListBody::Placeholder, "layout {layout:?}");
        }
    }
}

mod loading {
    use super::*;

    #[test]
    fn test_card_with_three_entities() {
        let entities: Vec<_> = (1..=3)
            .map(|i| EntityReference::new(i.to_string(), "topic").with_name(format!("topic_{i}")))
            .collect();

        let loading = EntityListConfig::builder()
            .entities(&entities)
            .header_label("My Data")
            .test_id_prefix("my-data")
            .layout(ListLayout::Card)
            .loading(true)
            .build();
        assert_eq!(loading.phase(), ListPhase::Loading { skeleton_rows: 3 });

        let ready = EntityListConfig {
            loading: Some(false),
            ..loading
        };
        assert_eq!(ready.phase(), ListPhase::Ready);
        let body = ListBody::compute(&ready, &DefaultNameResolver, &CatalogLinkBuilder);
        let ids: Vec<_> = body.rows().iter().map(|row| row.test_id.as_str()).collect();
        assert_eq!(ids, ["my-data-topic_1", "my-data-topic_2", "my-data-topic_3"]);
    }

    #[test]
    fn test_unset_flag_is_ready() {
        let config = EntityListConfig::builder()
            .entities(&[])
            .header_label("Following")
            .test_id_prefix("following")
            .layout(ListLayout::Panel)
            .maybe_loading(None)
            .build();
        assert!(!config.phase().is_loading());
    }
}

mod fallbacks {
    use super::*;

    #[test]
    fn test_link_builder_receives_empty_strings() {
        let seen = RefCell::new(Vec::new());
        let links = |type_tag: &str, fqn: &str| {
            seen.borrow_mut().push((type_tag.to_owned(), fqn.to_owned()));
            String::from("/")
        };
        let entities = vec![
            EntityReference {
                id: "a".to_owned(),
                ..EntityReference::default()
            },
            EntityReference::new("b", "dashboard"),
        ];
        let config = EntityListConfig::builder()
            .entities(&entities)
            .header_label("Recently Viewed")
            .test_id_prefix("recent")
            .build();

        let body = ListBody::compute(&config, &DefaultNameResolver, &links);

        assert_eq!(body.rows().len(), 2);
        assert_eq!(
            seen.into_inner(),
            vec![
                (String::new(), String::new()),
                ("dashboard".to_owned(), String::new()),
            ]
        );
    }
}
