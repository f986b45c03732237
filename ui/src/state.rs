use catalog_business::{CatalogConfig, EntityReference, Router};

/// Entity references shown when no entities file is configured.
const DEMO_ENTITIES: &str = r#"[
    { "id": "5b0c", "type": "table", "fullyQualifiedName": "sample_data.ecommerce_db.shopify.dim_customer", "name": "dim_customer" },
    { "id": "8e21", "type": "dashboard", "fullyQualifiedName": "sample_superset.eta_predictions_performance", "name": "eta_predictions_performance", "displayName": "ETA Predictions Performance" },
    { "id": "1f7d", "type": "pipeline", "fullyQualifiedName": "sample_airflow.dim_address_etl", "name": "dim_address_etl", "displayName": "dim_address etl" },
    { "id": "c3a9", "type": "topic", "fullyQualifiedName": "sample_kafka.customer_events", "name": "customer_events" },
    { "id": "77b4", "type": "mlmodel", "fullyQualifiedName": "mlflow_svc.eta_predictions", "name": "eta_predictions", "displayName": "ETA Predictions" },
    { "id": "e610", "type": "glossaryTerm", "fullyQualifiedName": "Business Glossary.Revenue", "name": "Revenue" }
]"#;

/// How many of the loaded entities count as recently viewed.
const RECENTLY_VIEWED_LEN: usize = 3;

/// The main application state.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub config: CatalogConfig,
    pub router: Router,
    pub recently_viewed: Vec<EntityReference>,
    pub my_data: Vec<EntityReference>,
    pub following: Vec<EntityReference>,
    /// Caller-owned loading flag shared by every list.
    pub loading: bool,
}

impl State {
    /// Loads the configured entities file, or the built-in demo entities
    /// when none is set or it cannot be read.
    pub fn new(config: CatalogConfig) -> Self {
        let entities = match config.entities_file() {
            Some(path) => EntityReference::list_from_file(path).unwrap_or_else(|err| {
                log::warn!("{err}, falling back to demo entities");
                demo_entities()
            }),
            None => demo_entities(),
        };

        let mut state = Self::with_entities(entities);
        state.config = config;
        state
    }

    /// Recently viewed is the head of `entities`; my data is all of them;
    /// nothing is followed yet.
    pub fn with_entities(entities: Vec<EntityReference>) -> Self {
        let recently_viewed = entities.iter().take(RECENTLY_VIEWED_LEN).cloned().collect();

        Self {
            recently_viewed,
            my_data: entities,
            ..Self::default()
        }
    }
}

fn demo_entities() -> Vec<EntityReference> {
    EntityReference::list_from_json(DEMO_ENTITIES).unwrap_or_else(|err| {
        log::error!("Built-in demo entities are invalid: {err}");
        Vec::new()
    })
}
